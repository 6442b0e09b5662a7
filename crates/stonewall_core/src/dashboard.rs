//! Dashboard handler boundary.
//!
//! # Responsibility
//! - Hold the control state and route every page event to the engine or map.
//! - Resolve each startup load independently into a `LoadState`.
//! - Expose the view models the page renders.
//!
//! # Invariants
//! - Every filter handler runs evaluate + reconcile synchronously, so the
//!   last event always wins.
//! - A failed load degrades its own region and nothing else.
//! - Criteria set before the entries arrive are applied once they do.

use crate::basemap::{BaseLayer, MINIMAP};
use crate::config::DashboardConfig;
use crate::engine::FilterEngine;
use crate::layer::{ClusterLayer, FitOptions, MapSurface};
use crate::model::criteria::FilterCriteria;
use crate::model::feature::{EntryId, FeatureSet};
use crate::source::{load_dashboard_sources, SourceResult, WallLayer};
use crate::view::{
    entry_count_label, layers_control_position, recent_entry_cards, vegetation_options,
    wall_type_options, RecentEntryCard, SelectOption, Sidebar, ENTRIES_UNAVAILABLE,
    WALLS_UNAVAILABLE,
};
use log::{info, warn};

/// Outcome of one startup load.
#[derive(Debug)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
    Failed { message: String },
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Page-level state driven by DOM events.
pub struct Dashboard<M: MapSurface, C: ClusterLayer> {
    config: DashboardConfig,
    map: M,
    base_layer: BaseLayer,
    criteria: FilterCriteria,
    walls: LoadState<WallLayer>,
    entries: LoadState<FilterEngine<C>>,
    sidebar: Sidebar,
}

impl<M: MapSurface, C: ClusterLayer> Dashboard<M, C> {
    /// Creates the page with both loads pending.
    pub fn new(config: DashboardConfig, mut map: M, width_px: u32) -> Self {
        let base_layer = BaseLayer::default();
        map.add_base_layers(&BaseLayer::ALL.map(|layer| (layer, layer.tiles())), base_layer);
        map.add_minimap(MINIMAP);
        map.set_layers_control_position(layers_control_position(
            width_px,
            config.mobile_breakpoint_px,
        ));
        let sidebar = Sidebar::for_width(width_px, config.sidebar_breakpoint_px);

        Self {
            config,
            map,
            base_layer,
            criteria: FilterCriteria::default(),
            walls: LoadState::Pending,
            entries: LoadState::Pending,
            sidebar,
        }
    }

    /// Creates the page and resolves both loads from disk.
    pub fn open(config: DashboardConfig, map: M, layer: C, width_px: u32) -> Self {
        let sources = load_dashboard_sources(&config);
        let mut dashboard = Self::new(config, map, width_px);
        dashboard.on_walls_loaded(sources.walls);
        dashboard.on_entries_loaded(sources.entries, layer);
        dashboard
    }

    /// Adds the wall overlay and fits the map to it.
    pub fn on_walls_loaded(&mut self, result: SourceResult<WallLayer>) {
        match result {
            Ok(walls) => {
                self.map.add_walls(&walls, self.base_layer.wall_style());
                let bounds = walls.bounds();
                if bounds.is_valid() {
                    self.map.fit_bounds(
                        bounds,
                        FitOptions {
                            padding_px: self.config.fit_padding_px,
                            max_zoom: Some(self.config.walls_fit_max_zoom),
                        },
                    );
                }
                self.walls = LoadState::Ready(walls);
            }
            Err(err) => {
                warn!("event=walls_ready module=dashboard status=degraded error={err}");
                self.walls = LoadState::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    /// Configures `layer`, builds the engine over it and fits the map to the entries.
    pub fn on_entries_loaded(&mut self, result: SourceResult<FeatureSet>, mut layer: C) {
        match result {
            Ok(features) => {
                layer.configure(self.config.cluster);
                let bounds = features.bounds();
                let mut engine = FilterEngine::new(features, layer);
                if !self.criteria.is_unconstrained() {
                    engine.apply(&self.criteria);
                }
                if bounds.is_valid() {
                    self.map.fit_bounds(bounds, FitOptions::default());
                }
                self.entries = LoadState::Ready(engine);
            }
            Err(err) => {
                warn!("event=entries_ready module=dashboard status=degraded error={err}");
                self.entries = LoadState::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    /// Returns the match count, or `None` while entries are unavailable.
    pub fn on_search_input(&mut self, text: &str) -> Option<usize> {
        self.criteria.text = text.to_string();
        self.refilter()
    }

    pub fn on_wall_type_change(&mut self, value: &str) -> Option<usize> {
        self.criteria.wall_type = value.to_string();
        self.refilter()
    }

    pub fn on_vegetation_change(&mut self, value: &str) -> Option<usize> {
        self.criteria.vegetation = value.to_string();
        self.refilter()
    }

    /// Clears every control and shows all entries again.
    pub fn on_reset(&mut self) -> Option<usize> {
        self.criteria.reset();
        self.refilter()
    }

    /// Restyles the walls for the newly selected base layer.
    pub fn on_base_layer_change(&mut self, name: &str) {
        self.base_layer = BaseLayer::from_name(name);
        if self.walls.ready().is_some() {
            self.map.set_wall_style(self.base_layer.wall_style());
        }
        info!(
            "event=base_layer_change module=dashboard status=ok layer={}",
            self.base_layer
        );
    }

    /// Focuses the map on a recent entry. Returns whether a marker was found.
    pub fn on_recent_entry_selected(&mut self, entry_id: &EntryId) -> bool {
        let zoom = self.config.focus_zoom;
        match self.entries.ready() {
            Some(engine) => engine.focus(entry_id, &mut self.map, zoom),
            None => false,
        }
    }

    pub fn on_resize(&mut self, width_px: u32) {
        self.map.set_layers_control_position(layers_control_position(
            width_px,
            self.config.mobile_breakpoint_px,
        ));
    }

    pub fn on_sidebar_toggle(&mut self) -> Sidebar {
        self.sidebar.toggle();
        self.sidebar
    }

    fn refilter(&mut self) -> Option<usize> {
        let engine = self.entries.ready_mut()?;
        Some(engine.apply(&self.criteria))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn base_layer(&self) -> BaseLayer {
        self.base_layer
    }

    pub fn sidebar(&self) -> Sidebar {
        self.sidebar
    }

    pub fn walls(&self) -> &LoadState<WallLayer> {
        &self.walls
    }

    pub fn entries(&self) -> &LoadState<FilterEngine<C>> {
        &self.entries
    }

    pub fn engine(&self) -> Option<&FilterEngine<C>> {
        self.entries.ready()
    }

    pub fn wall_type_options(&self) -> Vec<SelectOption> {
        let values = self
            .engine()
            .map(|engine| engine.vocabularies().wall_types.as_slice())
            .unwrap_or_default();
        wall_type_options(values)
    }

    pub fn vegetation_options(&self) -> Vec<SelectOption> {
        let values = self
            .engine()
            .map(|engine| engine.vocabularies().vegetation.as_slice())
            .unwrap_or_default();
        vegetation_options(values)
    }

    /// Header for the recent list, or the placeholder when entries failed.
    pub fn entry_count_label(&self) -> String {
        match &self.entries {
            LoadState::Ready(engine) => {
                entry_count_label(self.config.recent_entry_count, engine.features().len())
            }
            LoadState::Failed { .. } => ENTRIES_UNAVAILABLE.to_string(),
            LoadState::Pending => String::new(),
        }
    }

    pub fn recent_cards(&self) -> Vec<RecentEntryCard> {
        self.engine()
            .map(|engine| recent_entry_cards(engine.recent(self.config.recent_entry_count)))
            .unwrap_or_default()
    }

    /// Notice to overlay on the map, if any region is degraded.
    pub fn map_notice(&self) -> Option<&'static str> {
        self.walls.is_failed().then_some(WALLS_UNAVAILABLE)
    }
}
