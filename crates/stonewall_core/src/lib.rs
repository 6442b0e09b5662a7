//! Core logic for the stone wall survey dashboard.
//! Everything here runs without a browser; the map library sits behind traits.

pub mod basemap;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod filter;
pub mod layer;
pub mod logging;
pub mod model;
pub mod recent;
pub mod source;
pub mod view;

pub use basemap::{BaseLayer, MiniMapOptions, TileSource, WallStyle, MINIMAP};
pub use config::{ClusterOptions, ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, LoadState};
pub use engine::{reconcile, FilterEngine};
pub use filter::{derive_vocabularies, evaluate, Vocabularies, VEGETATION_BANDS};
pub use layer::{
    ClusterLayer, ControlPosition, FitOptions, MapSurface, Marker, MarkerHandle, MarkerIndex,
    MemoryClusterLayer, MemoryMapSurface,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::criteria::FilterCriteria;
pub use model::feature::{Bounds, EntryId, Feature, FeatureSet, GeoPoint};
pub use recent::recent_entries;
pub use source::{
    load_dashboard_sources, load_entries, load_walls, parse_entries, parse_walls, SourceError,
    WallLayer,
};
pub use view::{RecentEntryCard, SelectOption, Sidebar};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
