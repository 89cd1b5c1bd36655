/// 2D homogeneous transformation matrices
use nalgebra::{Matrix3, Vector2};

use crate::geometry::VertexList;

/// Convert degrees to radians the same way every demo expects (`deg * π / 180`)
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Transform builder for 2D affine transformations.
///
/// All matrices act on column vectors `(x, y, 1)`. Pixel space is y-down, so a
/// positive angle turns clockwise on screen.
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from an angle in degrees
    pub fn rotation_matrix(degrees: f64) -> Matrix3<f64> {
        let radians = deg_to_rad(degrees);
        let (s, c) = radians.sin_cos();
        Matrix3::new(
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        )
    }

    /// Create a translation matrix
    pub fn translation_matrix(dx: f64, dy: f64) -> Matrix3<f64> {
        Matrix3::new_translation(&Vector2::new(dx, dy))
    }

    /// Create a uniform scale matrix. A factor of zero collapses everything to the origin.
    pub fn scale_matrix(factor: f64) -> Matrix3<f64> {
        Matrix3::new_nonuniform_scaling(&Vector2::new(factor, factor))
    }

    /// Rotate by `degrees` around the pivot `(px, py)`: `T(p) · R · T(-p)`
    pub fn rotation_about(px: f64, py: f64, degrees: f64) -> Matrix3<f64> {
        Self::translation_matrix(px, py)
            * Self::rotation_matrix(degrees)
            * Self::translation_matrix(-px, -py)
    }

    /// `a · b`: `b` acts on a vertex first, then `a`
    pub fn compose(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
        a * b
    }

    /// Apply a matrix to every vertex, returning a new list
    pub fn apply(matrix: &Matrix3<f64>, vertices: &VertexList) -> VertexList {
        vertices.transformed(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn assert_close(actual: Point2<f64>, expected: (f64, f64)) {
        assert!(
            (actual.x - expected.0).abs() < 1e-9 && (actual.y - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(0.0);
        assert!((matrix - Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_is_clockwise_in_pixel_space() {
        // +x rotated by 90 degrees lands on +y, which points down on screen
        let rotated = Transform::rotation_matrix(90.0).transform_point(&Point2::new(1.0, 0.0));
        assert_close(rotated, (0.0, 1.0));
    }

    #[test]
    fn test_rotation_inverse_round_trip() {
        let point = Point2::new(37.0, -12.5);
        for degrees in [0.0, 13.0, 90.0, 145.5, 270.0, 721.0, -33.0] {
            let there_and_back = Transform::compose(
                &Transform::rotation_matrix(degrees),
                &Transform::rotation_matrix(-degrees),
            );
            assert_close(there_and_back.transform_point(&point), (37.0, -12.5));
        }
    }

    #[test]
    fn test_translation_and_scale() {
        let matrix = Transform::compose(
            &Transform::translation_matrix(10.0, 20.0),
            &Transform::scale_matrix(3.0),
        );
        assert_close(matrix.transform_point(&Point2::new(1.0, -1.0)), (13.0, 17.0));
    }

    #[test]
    fn test_zero_scale_degenerates_to_point() {
        let matrix = Transform::scale_matrix(0.0);
        assert_close(matrix.transform_point(&Point2::new(5.0, 9.0)), (0.0, 0.0));
    }

    #[test]
    fn test_rotation_about_keeps_pivot_fixed() {
        let matrix = Transform::rotation_about(15.0, 100.0, 40.0);
        assert_close(matrix.transform_point(&Point2::new(15.0, 100.0)), (15.0, 100.0));
        // The top-center of a 30x100 block swings right when rotated clockwise
        let top = matrix.transform_point(&Point2::new(15.0, 0.0));
        assert!(top.x > 15.0);
    }

    #[test]
    fn test_child_under_rotating_parent_hits_cardinal_offsets() {
        let d = 50.0;
        let child = Transform::translation_matrix(d, 0.0);
        let expected = [(0.0, (d, 0.0)), (90.0, (0.0, d)), (180.0, (-d, 0.0)), (270.0, (0.0, -d))];
        for (degrees, offset) in expected {
            let pose = Transform::compose(&Transform::rotation_matrix(degrees), &child);
            assert_close(pose.transform_point(&Point2::origin()), offset);
        }
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let vertices = VertexList::from_xy(&[(0.0, 0.0), (1.0, 0.0)]);
        let moved = Transform::apply(&Transform::translation_matrix(2.0, 3.0), &vertices);
        assert_close(vertices.points()[1], (1.0, 0.0));
        assert_close(moved.points()[1], (3.0, 3.0));
    }
}
