//! Seams to the mapping library.
//!
//! # Responsibility
//! - Define the map surface and cluster layer contracts the dashboard drives.
//! - Build rendered markers and keep the identity index from entry to marker.
//!
//! # Invariants
//! - Marker identity is pointer identity of `MarkerHandle`.
//! - The cluster layer only ever receives handles taken from a `MarkerIndex`.

use crate::basemap::{BaseLayer, MiniMapOptions, TileSource, WallStyle};
use crate::config::ClusterOptions;
use crate::model::feature::{Bounds, GeoPoint};
use crate::source::WallLayer;

pub mod marker;
pub mod memory;
pub mod popup;

pub use marker::{Marker, MarkerHandle, MarkerIndex, MarkerStyle};
pub use memory::{MemoryClusterLayer, MemoryMapSurface};
pub use popup::{render_popup, POPUP_MAX_WIDTH};

/// Options for fitting the viewport to a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitOptions {
    pub padding_px: u32,
    pub max_zoom: Option<u8>,
}

/// Corner of the map a control is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopRight,
    BottomRight,
}

/// Map viewport and overlay host.
pub trait MapSurface {
    /// Registers the switchable base layers and shows `active`.
    fn add_base_layers(&mut self, layers: &[(BaseLayer, TileSource)], active: BaseLayer);
    fn add_minimap(&mut self, options: MiniMapOptions);
    fn set_view(&mut self, center: GeoPoint, zoom: u8);
    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions);
    fn open_popup(&mut self, marker: &MarkerHandle, max_width_px: u32);
    /// Adds the wall overlay below the marker pane.
    fn add_walls(&mut self, walls: &WallLayer, style: WallStyle);
    fn set_wall_style(&mut self, style: WallStyle);
    fn set_layers_control_position(&mut self, position: ControlPosition);
}

/// Spatially clustered marker layer.
pub trait ClusterLayer {
    fn configure(&mut self, options: ClusterOptions);
    fn clear_layers(&mut self);
    fn add_markers(&mut self, markers: &[MarkerHandle]);
    /// Markers currently shown, in insertion order.
    fn markers(&self) -> &[MarkerHandle];
}
