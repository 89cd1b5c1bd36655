/// Integer line rasterizer
use crate::geometry::Pixel;

/// How a line walked from a higher to a lower driving coordinate treats its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePolicy {
    /// Both endpoints are always emitted, walking from the start point to the end point.
    #[default]
    Inclusive,
    /// Pixel-exact with the classic demo programs, except a degenerate segment,
    /// which emits its single point: a descending walk runs upward from the end
    /// point and stops two short of the start point.
    Legacy,
}

/// Lazy sequence of the pixels approximating a segment.
///
/// A clone taken before iterating replays the same walk.
#[derive(Debug, Clone)]
pub struct LinePixels {
    /// `true` when y is the driving axis
    steep: bool,
    d0: i64,
    e0: i64,
    delta_d: i64,
    delta_e: i64,
    next: i64,
    step: i64,
    remaining: usize,
}

impl LinePixels {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, policy: LinePolicy) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        // Ties go to the x-driven walk
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (d0, e0, d1, e1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };

        let (first, step, count) = if d0 <= d1 {
            (d0, 1, d1 - d0 + 1)
        } else {
            match policy {
                LinePolicy::Inclusive => (d0, -1, d0 - d1 + 1),
                LinePolicy::Legacy => (d1, 1, (d0 - 1 - d1).max(0)),
            }
        };

        Self {
            steep,
            d0,
            e0,
            delta_d: d1 - d0,
            delta_e: e1 - e0,
            next: first,
            step,
            remaining: count as usize,
        }
    }

    fn pixel_at(&self, d: i64) -> Pixel {
        let e = if self.delta_d == 0 {
            self.e0
        } else {
            // Interpolate in floating point, then truncate toward zero
            let offset = ((d - self.d0) * self.delta_e) as f64 / self.delta_d as f64;
            (offset + self.e0 as f64) as i64
        };
        if self.steep {
            Pixel::new(e as i32, d as i32)
        } else {
            Pixel::new(d as i32, e as i32)
        }
    }
}

impl Iterator for LinePixels {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.remaining == 0 {
            return None;
        }
        let pixel = self.pixel_at(self.next);
        self.next += self.step;
        self.remaining -= 1;
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

/// Rasterize a segment with both endpoints included
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> LinePixels {
    LinePixels::new(x0, y0, x1, y1, LinePolicy::Inclusive)
}

/// Rasterize a segment under the given endpoint policy
pub fn rasterize_line_with(policy: LinePolicy, x0: i32, y0: i32, x1: i32, y1: i32) -> LinePixels {
    LinePixels::new(x0, y0, x1, y1, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(line: LinePixels) -> Vec<(i32, i32)> {
        line.map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_degenerate_line_is_single_point() {
        assert_eq!(pixels(rasterize_line(7, 3, 7, 3)), vec![(7, 3)]);
        assert_eq!(pixels(rasterize_line_with(LinePolicy::Legacy, 7, 3, 7, 3)), vec![(7, 3)]);
    }

    #[test]
    fn test_horizontal_line() {
        let expected: Vec<_> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(pixels(rasterize_line(0, 0, 5, 0)), expected);
    }

    #[test]
    fn test_vertical_line_drives_on_y() {
        let expected: Vec<_> = (0..=5).map(|y| (0, y)).collect();
        assert_eq!(pixels(rasterize_line(0, 0, 0, 5)), expected);
    }

    #[test]
    fn test_shallow_slope_truncates() {
        assert_eq!(
            pixels(rasterize_line(0, 0, 4, 2)),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_steep_slope_truncates() {
        assert_eq!(
            pixels(rasterize_line(0, 0, 2, 5)),
            vec![(0, 0), (0, 1), (0, 2), (1, 3), (1, 4), (2, 5)]
        );
    }

    #[test]
    fn test_diagonal_tie_drives_on_x() {
        assert_eq!(pixels(rasterize_line(0, 0, 3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_descending_inclusive_walks_start_to_end() {
        assert_eq!(
            pixels(rasterize_line(4, 2, 0, 0)),
            vec![(4, 2), (3, 1), (2, 1), (1, 0), (0, 0)]
        );
    }

    #[test]
    fn test_negative_coordinates_truncate_toward_zero() {
        assert_eq!(
            pixels(rasterize_line(0, 0, -4, -2)),
            vec![(0, 0), (-1, 0), (-2, -1), (-3, -1), (-4, -2)]
        );
    }

    #[test]
    fn test_legacy_descending_drops_two_driving_steps() {
        assert_eq!(
            pixels(rasterize_line_with(LinePolicy::Legacy, 5, 0, 0, 0)),
            vec![(0, 0), (1, 0), (2, 0), (3, 0)]
        );
        assert_eq!(
            pixels(rasterize_line_with(LinePolicy::Legacy, 0, 5, 0, 0)),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
        // One step apart leaves nothing at all
        assert!(pixels(rasterize_line_with(LinePolicy::Legacy, 1, 0, 0, 0)).is_empty());
    }

    #[test]
    fn test_legacy_sloped_descending_walks_up_from_end() {
        // x-driven: the walk interpolates from the start point while stepping up from the end
        assert_eq!(
            pixels(rasterize_line_with(LinePolicy::Legacy, 9, 4, 0, 0)),
            vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 2), (6, 2), (7, 3)]
        );
        // y-driven mirror image
        assert_eq!(
            pixels(rasterize_line_with(LinePolicy::Legacy, 4, 9, 0, 0)),
            vec![(0, 0), (0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (3, 7)]
        );
    }

    #[test]
    fn test_legacy_ascending_matches_inclusive() {
        assert_eq!(
            pixels(rasterize_line_with(LinePolicy::Legacy, 0, 0, 9, 4)),
            pixels(rasterize_line(0, 0, 9, 4))
        );
    }

    #[test]
    fn test_sequence_is_restartable_and_sized() {
        let line = rasterize_line(0, 0, 10, 3);
        assert_eq!(line.len(), 11);
        let first_pass = pixels(line.clone());
        assert_eq!(pixels(line), first_pass);
    }

    #[test]
    fn test_consecutive_pixels_are_eight_connected() {
        for (x1, y1) in [(17, 5), (-9, 23), (-31, -4), (6, -19)] {
            let line: Vec<_> = pixels(rasterize_line(0, 0, x1, y1));
            for pair in line.windows(2) {
                assert!((pair[0].0 - pair[1].0).abs() <= 1);
                assert!((pair[0].1 - pair[1].1).abs() <= 1);
            }
        }
    }
}
