//! Static data sources.
//!
//! # Responsibility
//! - Read the wall geometry and point-entry documents once at startup.
//! - Report each load outcome independently of the other.
//!
//! # Invariants
//! - Neither load waits on the other's outcome.
//! - A failed load never aborts the dashboard; the caller degrades that region.

use crate::config::DashboardConfig;
use crate::model::feature::FeatureSet;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub mod geojson;
pub mod walls;

pub use geojson::{parse_entries, parse_walls};
pub use walls::WallLayer;

pub type SourceResult<T> = Result<T, SourceError>;

/// Data loading error.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    /// Top-level `type` was something other than `FeatureCollection`.
    NotAFeatureCollection(String),
    /// The loader thread for the named source panicked.
    LoaderPanicked(&'static str),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read `{}`: {source}", path.display()),
            Self::Parse(err) => write!(f, "invalid GeoJSON: {err}"),
            Self::NotAFeatureCollection(kind) => {
                write!(f, "expected a FeatureCollection, found `{kind}`")
            }
            Self::LoaderPanicked(name) => write!(f, "{name} loader stopped unexpectedly"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NotAFeatureCollection(_) | Self::LoaderPanicked(_) => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Outcome of both startup loads, reported separately.
#[derive(Debug)]
pub struct DashboardSources {
    pub walls: SourceResult<WallLayer>,
    pub entries: SourceResult<FeatureSet>,
}

fn read_document(path: &Path) -> SourceResult<String> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the point-entry document from disk.
pub fn load_entries(path: impl AsRef<Path>) -> SourceResult<FeatureSet> {
    let started_at = Instant::now();
    let result = read_document(path.as_ref()).and_then(|text| parse_entries(&text));
    log_load("entries", started_at, &result);
    result
}

/// Loads the wall geometry document from disk.
pub fn load_walls(path: impl AsRef<Path>) -> SourceResult<WallLayer> {
    let started_at = Instant::now();
    let result = read_document(path.as_ref()).and_then(|text| parse_walls(&text));
    log_load("walls", started_at, &result);
    result
}

/// Runs both loads on independent scoped threads.
///
/// Either may finish first; a failure in one does not affect the other.
pub fn load_dashboard_sources(config: &DashboardConfig) -> DashboardSources {
    std::thread::scope(|scope| {
        let walls = scope.spawn(|| load_walls(&config.walls_path));
        let entries = scope.spawn(|| load_entries(&config.data_path));

        DashboardSources {
            walls: walls
                .join()
                .unwrap_or(Err(SourceError::LoaderPanicked("walls"))),
            entries: entries
                .join()
                .unwrap_or(Err(SourceError::LoaderPanicked("entries"))),
        }
    })
}

fn log_load<T>(source: &str, started_at: Instant, result: &SourceResult<T>) {
    match result {
        Ok(_) => info!(
            "event=source_load module=source status=ok source={} duration_ms={}",
            source,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=source_load module=source status=error source={} duration_ms={} error={}",
            source,
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
