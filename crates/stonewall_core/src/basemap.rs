//! Base tile layers and the wall overlay themes tied to them.
//!
//! # Invariants
//! - Exactly two switchable base layers exist: `Roads` (default) and `Satellite`.
//! - Each base layer has exactly one wall theme.

use std::fmt::{Display, Formatter};

/// Highest zoom any base layer serves.
pub const TILE_MAX_ZOOM: u8 = 23;

const CARTO_LIGHT_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
const CARTO_SUBDOMAINS: &str = "abcd";

/// Remote raster tile source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSource {
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub subdomains: Option<&'static str>,
    pub max_zoom: u8,
}

/// Overview map shown in the corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniMapOptions {
    pub tiles: TileSource,
    pub zoom_level_offset: i8,
    pub toggle_display: bool,
}

pub const MINIMAP: MiniMapOptions = MiniMapOptions {
    tiles: TileSource {
        url_template: CARTO_LIGHT_URL,
        attribution: "",
        subdomains: Some(CARTO_SUBDOMAINS),
        max_zoom: 11,
    },
    zoom_level_offset: -4,
    toggle_display: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseLayer {
    #[default]
    Roads,
    Satellite,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 2] = [BaseLayer::Roads, BaseLayer::Satellite];

    /// Name shown in the layers control and reported on change.
    pub fn name(self) -> &'static str {
        match self {
            Self::Roads => "Roads",
            Self::Satellite => "Satellite",
        }
    }

    /// Parses a layers-control name. Unknown names fall back to `Roads`.
    pub fn from_name(name: &str) -> Self {
        if name == Self::Satellite.name() {
            Self::Satellite
        } else {
            Self::Roads
        }
    }

    pub fn tiles(self) -> TileSource {
        match self {
            Self::Roads => TileSource {
                url_template: CARTO_LIGHT_URL,
                attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OSM</a> | &copy; <a href=\"https://carto.com/\">CARTO</a>",
                subdomains: Some(CARTO_SUBDOMAINS),
                max_zoom: TILE_MAX_ZOOM,
            },
            Self::Satellite => TileSource {
                url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
                subdomains: None,
                max_zoom: TILE_MAX_ZOOM,
            },
        }
    }

    /// Wall overlay theme readable on this base layer.
    pub fn wall_style(self) -> WallStyle {
        match self {
            Self::Roads => WallStyle::new("#003cffff"),
            Self::Satellite => WallStyle::new("#ffde97ff"),
        }
    }
}

impl Display for BaseLayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stroke style of the non-interactive wall overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallStyle {
    pub color: &'static str,
    pub weight: f32,
    pub opacity: f32,
    pub interactive: bool,
}

impl WallStyle {
    const fn new(color: &'static str) -> Self {
        Self {
            color,
            weight: 1.0,
            opacity: 0.8,
            interactive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseLayer, MINIMAP, TILE_MAX_ZOOM};

    #[test]
    fn each_base_layer_has_its_own_wall_theme() {
        assert_eq!(BaseLayer::Roads.wall_style().color, "#003cffff");
        assert_eq!(BaseLayer::Satellite.wall_style().color, "#ffde97ff");
        assert!(!BaseLayer::Satellite.wall_style().interactive);
    }

    #[test]
    fn from_name_round_trips_and_defaults_to_roads() {
        for layer in BaseLayer::ALL {
            assert_eq!(BaseLayer::from_name(layer.name()), layer);
        }
        assert_eq!(BaseLayer::from_name("Terrain"), BaseLayer::Roads);
    }

    #[test]
    fn minimap_stays_below_base_zoom() {
        assert!(MINIMAP.tiles.max_zoom < TILE_MAX_ZOOM);
        assert_eq!(MINIMAP.zoom_level_offset, -4);
    }
}
