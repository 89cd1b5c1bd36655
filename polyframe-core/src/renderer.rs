/// Polygon outline renderer built on the line rasterizer
use log::trace;
use nalgebra::Matrix3;
use std::ops::AddAssign;

use crate::canvas::{Canvas, Color};
use crate::error::{Error, Result};
use crate::geometry::{Pixel, VertexList};
use crate::raster::{rasterize_line_with, LinePolicy};

/// Pixel counts from a draw call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub plotted: usize,
    /// Pixels that fell outside the canvas and were dropped
    pub clipped: usize,
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, other: Self) {
        self.plotted += other.plotted;
        self.clipped += other.clipped;
    }
}

/// Draws closed polygon outlines onto a canvas.
///
/// Later draws overwrite earlier ones; there is no blending. Pixels outside
/// the canvas are clipped silently and reported in [`DrawStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    policy: LinePolicy,
}

impl Renderer {
    pub fn new(policy: LinePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    pub fn draw_line(&self, canvas: &mut Canvas, p: Pixel, q: Pixel, color: Color) -> DrawStats {
        let mut stats = DrawStats::default();
        for pixel in rasterize_line_with(self.policy, p.x, p.y, q.x, q.y) {
            match canvas.put(pixel.x, pixel.y, color) {
                Ok(()) => stats.plotted += 1,
                Err(_) => stats.clipped += 1,
            }
        }
        stats
    }

    /// Draw every edge between consecutive vertices plus the closing edge back to the first
    pub fn draw_polygon(&self, canvas: &mut Canvas, vertices: &[Pixel], color: Color) -> Result<DrawStats> {
        if vertices.len() < 2 {
            return Err(Error::InvalidGeometry {
                vertices: vertices.len(),
            });
        }

        let mut stats = DrawStats::default();
        for edge in vertices.windows(2) {
            stats += self.draw_line(canvas, edge[0], edge[1], color);
        }
        stats += self.draw_line(canvas, vertices[vertices.len() - 1], vertices[0], color);

        if stats.clipped > 0 {
            trace!(
                "polygon with {} vertices clipped {} of {} pixels",
                vertices.len(),
                stats.clipped,
                stats.plotted + stats.clipped
            );
        }
        Ok(stats)
    }

    /// Transform a canonical shape into pixel space and draw its outline
    pub fn draw_shape(
        &self,
        canvas: &mut Canvas,
        shape: &VertexList,
        world: &Matrix3<f64>,
        color: Color,
    ) -> Result<DrawStats> {
        let pixels = shape.transformed(world).to_pixels();
        self.draw_polygon(canvas, &pixels, color)
    }
}
