//! View models for the dashboard controls.
//!
//! # Responsibility
//! - Turn engine output into the option lists, labels and cards the page shows.
//! - Decide responsive layout from the viewport width.
//!
//! # Invariants
//! - View models are plain data; nothing here touches the map or the engine.

pub mod cards;
pub mod controls;
pub mod layout;

pub use cards::{recent_entry_cards, RecentEntryCard};
pub use controls::{
    entry_count_label, vegetation_options, wall_type_options, SelectOption, ANY_VEGETATION,
    ANY_WALL_TYPE,
};
pub use layout::{layers_control_position, Sidebar, TOGGLE_CLOSED_GLYPH, TOGGLE_OPEN_GLYPH};

/// Fallback text for a missing attribute.
pub const NOT_GIVEN: &str = "Not given";

/// Placeholder for a filter panel whose entries failed to load.
pub const ENTRIES_UNAVAILABLE: &str = "Survey entries could not be loaded.";

/// Notice shown over the map when the wall layer failed to load.
pub const WALLS_UNAVAILABLE: &str = "Stone wall map layer could not be loaded.";
