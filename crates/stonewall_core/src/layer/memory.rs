//! In-memory map collaborators for headless use and tests.

use super::{ClusterLayer, ControlPosition, FitOptions, MapSurface, MarkerHandle};
use crate::basemap::{BaseLayer, MiniMapOptions, TileSource, WallStyle};
use crate::config::ClusterOptions;
use crate::model::feature::{Bounds, EntryId, GeoPoint};
use crate::source::WallLayer;

/// Cluster layer that keeps the visible markers in a vector.
#[derive(Debug, Default)]
pub struct MemoryClusterLayer {
    options: ClusterOptions,
    markers: Vec<MarkerHandle>,
    clear_count: usize,
}

impl MemoryClusterLayer {
    pub fn options(&self) -> ClusterOptions {
        self.options
    }

    /// Number of full clears since construction.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl ClusterLayer for MemoryClusterLayer {
    fn configure(&mut self, options: ClusterOptions) {
        self.options = options;
    }

    fn clear_layers(&mut self) {
        self.markers.clear();
        self.clear_count += 1;
    }

    fn add_markers(&mut self, markers: &[MarkerHandle]) {
        self.markers.extend(markers.iter().cloned());
    }

    fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }
}

/// Map surface that records the last state it was driven into.
#[derive(Debug, Default)]
pub struct MemoryMapSurface {
    pub base_layers: Vec<(BaseLayer, TileSource)>,
    pub active_base_layer: Option<BaseLayer>,
    pub minimap: Option<MiniMapOptions>,
    pub view: Option<(GeoPoint, u8)>,
    pub fitted: Vec<(Bounds, FitOptions)>,
    pub open_popup: Option<EntryId>,
    pub popup_max_width_px: Option<u32>,
    pub wall_paths: usize,
    pub wall_style: Option<WallStyle>,
    pub layers_control: Option<ControlPosition>,
}

impl MemoryMapSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for MemoryMapSurface {
    fn add_base_layers(&mut self, layers: &[(BaseLayer, TileSource)], active: BaseLayer) {
        self.base_layers.extend_from_slice(layers);
        self.active_base_layer = Some(active);
    }

    fn add_minimap(&mut self, options: MiniMapOptions) {
        self.minimap = Some(options);
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) {
        self.fitted.push((bounds, options));
    }

    fn open_popup(&mut self, marker: &MarkerHandle, max_width_px: u32) {
        self.open_popup = Some(marker.entry_id.clone());
        self.popup_max_width_px = Some(max_width_px);
    }

    fn add_walls(&mut self, walls: &WallLayer, style: WallStyle) {
        self.wall_paths += walls.paths().len();
        self.wall_style = Some(style);
    }

    fn set_wall_style(&mut self, style: WallStyle) {
        self.wall_style = Some(style);
    }

    fn set_layers_control_position(&mut self, position: ControlPosition) {
        self.layers_control = Some(position);
    }
}
