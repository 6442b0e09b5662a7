//! Dashboard configuration.
//!
//! # Responsibility
//! - Describe data locations and the tunables of the map front end.
//! - Load and validate optional JSON overrides.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - `validate()` runs on every `load` before the config is returned.

use crate::basemap::TILE_MAX_ZOOM;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Marker clustering options handed to the cluster layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Pixel radius within which markers merge into one cluster.
    pub max_cluster_radius: u32,
    /// Zoom level from which every marker is drawn individually.
    pub disable_clustering_at_zoom: u8,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_cluster_radius: 150,
            disable_clustering_at_zoom: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Point-entry document.
    pub data_path: PathBuf,
    /// Wall geometry document.
    pub walls_path: PathBuf,
    /// Number of cards in the recent-entries feed.
    pub recent_entry_count: usize,
    /// Zoom used when focusing a single entry.
    pub focus_zoom: u8,
    pub fit_padding_px: u32,
    /// Upper zoom bound when fitting the map to the walls.
    pub walls_fit_max_zoom: u8,
    pub cluster: ClusterOptions,
    /// Widths at or below this move the layers control to the bottom.
    pub mobile_breakpoint_px: u32,
    /// Widths below this start with the sidebar closed.
    pub sidebar_breakpoint_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.geojson"),
            walls_path: PathBuf::from("walls.geojson"),
            recent_entry_count: 10,
            focus_zoom: 18,
            fit_padding_px: 20,
            walls_fit_max_zoom: 18,
            cluster: ClusterOptions::default(),
            mobile_breakpoint_px: 800,
            sidebar_breakpoint_px: 1100,
        }
    }
}

impl DashboardConfig {
    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.recent_entry_count == 0 {
            return Err(ConfigError::Invalid(
                "recent_entry_count must be at least 1".to_string(),
            ));
        }
        if self.cluster.max_cluster_radius == 0 {
            return Err(ConfigError::Invalid(
                "cluster.max_cluster_radius must be at least 1".to_string(),
            ));
        }
        for (name, zoom) in [
            ("focus_zoom", self.focus_zoom),
            ("walls_fit_max_zoom", self.walls_fit_max_zoom),
            (
                "cluster.disable_clustering_at_zoom",
                self.cluster.disable_clustering_at_zoom,
            ),
        ] {
            if zoom > TILE_MAX_ZOOM {
                return Err(ConfigError::Invalid(format!(
                    "{name} {zoom} exceeds tile max zoom {TILE_MAX_ZOOM}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DashboardConfig};
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.recent_entry_count, 10);
        assert_eq!(config.cluster.max_cluster_radius, 150);
    }

    #[test]
    fn load_applies_partial_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "recent_entry_count": 5, "cluster": {{ "max_cluster_radius": 80 }} }}"#
        )
        .unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.recent_entry_count, 5);
        assert_eq!(config.cluster.max_cluster_radius, 80);
        assert_eq!(config.cluster.disable_clustering_at_zoom, 18);
    }

    #[test]
    fn validate_rejects_zero_recent_count_and_excess_zoom() {
        let zero = DashboardConfig {
            recent_entry_count: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

        let zoomed = DashboardConfig {
            focus_zoom: 30,
            ..DashboardConfig::default()
        };
        let err = zoomed.validate().unwrap_err();
        assert!(err.to_string().contains("focus_zoom"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
