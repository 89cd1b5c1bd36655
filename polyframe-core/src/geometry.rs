/// Vertex lists and the conversion from real coordinates to pixels
use nalgebra::{Matrix3, Point2};

/// A pixel coordinate on the canvas
pub type Pixel = Point2<i32>;

/// An ordered list of 2D vertices, implicitly homogeneous (`w = 1`).
///
/// Insertion order is edge order; the outline is closed from the last vertex
/// back to the first when drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexList {
    points: Vec<Point2<f64>>,
}

impl VertexList {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    pub fn push(&mut self, point: Point2<f64>) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Multiply every vertex (as a column vector) by `matrix`
    pub fn transformed(&self, matrix: &Matrix3<f64>) -> Self {
        self.points.iter().map(|p| matrix.transform_point(p)).collect()
    }

    /// Convert to pixel coordinates, truncating toward zero
    pub fn to_pixels(&self) -> Vec<Pixel> {
        self.points.iter().map(to_pixel).collect()
    }
}

impl FromIterator<Point2<f64>> for VertexList {
    fn from_iter<I: IntoIterator<Item = Point2<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Integer cast of a real point, matching how frames have always been snapped to the grid
pub fn to_pixel(point: &Point2<f64>) -> Pixel {
    Pixel::new(point.x as i32, point.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_truncates_toward_zero() {
        let vertices = VertexList::from_xy(&[(2.9, 7.1), (-0.7, -3.99)]);
        assert_eq!(vertices.to_pixels(), vec![Pixel::new(2, 7), Pixel::new(0, -3)]);
    }

    #[test]
    fn test_transformed_preserves_order() {
        let vertices = VertexList::from_xy(&[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)]);
        let doubled = vertices.transformed(&Matrix3::new_scaling(2.0));
        assert_eq!(doubled.len(), 3);
        assert_eq!(doubled.to_pixels(), vec![Pixel::new(0, 2), Pixel::new(4, 6), Pixel::new(8, 10)]);
    }
}
