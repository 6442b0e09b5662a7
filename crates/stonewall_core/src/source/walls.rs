//! Wall geometry layer.
//!
//! Walls are drawn as a non-interactive overlay; only their shape and
//! extent are kept.

use crate::model::feature::{Bounds, GeoPoint};

/// Decoded wall segments and polygon rings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallLayer {
    paths: Vec<Vec<GeoPoint>>,
    bounds: Bounds,
}

impl WallLayer {
    pub fn new(paths: Vec<Vec<GeoPoint>>) -> Self {
        let bounds = paths.iter().flatten().copied().collect();
        Self { paths, bounds }
    }

    pub fn paths(&self) -> &[Vec<GeoPoint>] {
        &self.paths
    }

    pub fn vertex_count(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// Extent of every wall vertex; invalid for an empty layer.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::WallLayer;
    use crate::model::feature::GeoPoint;

    #[test]
    fn empty_layer_has_invalid_bounds() {
        let layer = WallLayer::new(Vec::new());
        assert!(!layer.bounds().is_valid());
        assert_eq!(layer.vertex_count(), 0);
    }

    #[test]
    fn bounds_cover_all_paths() {
        let layer = WallLayer::new(vec![
            vec![GeoPoint::new(41.0, -71.2).unwrap()],
            vec![
                GeoPoint::new(41.4, -71.0).unwrap(),
                GeoPoint::new(41.2, -71.1).unwrap(),
            ],
        ]);
        assert_eq!(layer.vertex_count(), 3);
        assert_eq!(layer.bounds().north, 41.4);
        assert_eq!(layer.bounds().west, -71.2);
    }
}
