/// Canonical, untransformed shapes. Size, placement and orientation come from transforms.
use nalgebra::Point2;

use crate::geometry::VertexList;
use crate::transform::deg_to_rad;

/// The four corners of a `height × width` block, in the order
/// bottom-left, top-left, top-right, bottom-right (y-down).
pub fn rectangle_block(height: f64, width: f64) -> VertexList {
    VertexList::from_xy(&[(0.0, height), (0.0, 0.0), (width, 0.0), (width, height)])
}

/// `n` vertices evenly spaced on the unit circle, starting at angle 0
pub fn regular_polygon(n: usize) -> VertexList {
    let delta = 360.0 / n as f64;
    (0..n)
        .map(|i| {
            let radians = deg_to_rad(i as f64 * delta);
            Point2::new(radians.cos(), radians.sin())
        })
        .collect()
}

/// A segment from the origin straight down to `(0, length)`
pub fn segment(length: f64) -> VertexList {
    VertexList::from_xy(&[(0.0, 0.0), (0.0, length)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_block_corner_order() {
        let block = rectangle_block(30.0, 120.0);
        assert_eq!(
            block,
            VertexList::from_xy(&[(0.0, 30.0), (0.0, 0.0), (120.0, 0.0), (120.0, 30.0)])
        );
    }

    #[test]
    fn test_regular_polygon_on_unit_circle() {
        let hexagon = regular_polygon(6);
        assert_eq!(hexagon.len(), 6);
        for point in hexagon.points() {
            assert!((point.coords.norm() - 1.0).abs() < 1e-12);
        }
        let first = hexagon.points()[0];
        assert!((first.x - 1.0).abs() < 1e-12 && first.y.abs() < 1e-12);
        // Second vertex sits 60 degrees further round, below the x axis on screen
        let second = hexagon.points()[1];
        assert!((second.x - 0.5).abs() < 1e-12);
        assert!((second.y - 3f64.sqrt() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_regular_polygon_of_zero_is_empty() {
        assert!(regular_polygon(0).is_empty());
    }

    #[test]
    fn test_segment() {
        assert_eq!(segment(160.0), VertexList::from_xy(&[(0.0, 0.0), (0.0, 160.0)]));
    }
}
