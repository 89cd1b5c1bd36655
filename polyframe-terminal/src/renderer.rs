/// Half-block downsampler that turns a canvas into colored terminal cells
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use polyframe_core::Canvas;
use std::io::Write;

/// Foreground paints the upper half of the cell, background the lower half
const HALF_BLOCK: char = '▀';

fn to_terminal(color: polyframe_core::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Terminal renderer: every cell shows two stacked sub-pixels
pub struct CellRenderer {
    cols: usize,
    rows: usize,
    /// `(upper, lower)` color per cell, row-major
    cells: Vec<(Color, Color)>,
}

impl CellRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![(Color::Black, Color::Black); cols * rows],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![(Color::Black, Color::Black); cols * rows];
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<(Color, Color)> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Shrink the canvas into the cell grid, keeping its aspect ratio.
    ///
    /// A sub-pixel shows ink if any canvas pixel mapped onto it was drawn, so
    /// one-pixel outlines survive the downsampling.
    pub fn sample(&mut self, canvas: &Canvas) {
        let background = to_terminal(canvas.background());
        self.cells.fill((background, background));
        if self.cols == 0 || self.rows == 0 || canvas.width() == 0 || canvas.height() == 0 {
            return;
        }

        let scale = (canvas.width() as f64 / self.cols as f64)
            .max(canvas.height() as f64 / (2 * self.rows) as f64);
        for (x, y, color) in canvas.ink() {
            let col = ((x as f64 / scale) as usize).min(self.cols - 1);
            let sub_row = ((y as f64 / scale) as usize).min(2 * self.rows - 1);
            let cell = &mut self.cells[(sub_row / 2) * self.cols + col];
            if sub_row % 2 == 0 {
                cell.0 = to_terminal(color);
            } else {
                cell.1 = to_terminal(color);
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<(Color, Color)> = None;
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let (upper, lower) = self.cells[row * self.cols + col];
                if current.map(|c| c.0) != Some(upper) {
                    writer.queue(SetForegroundColor(upper))?;
                }
                if current.map(|c| c.1) != Some(lower) {
                    writer.queue(SetBackgroundColor(lower))?;
                }
                current = Some((upper, lower));
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyframe_core::Color as Rgb;

    #[test]
    fn test_sample_maps_ink_to_half_cells() {
        let mut canvas = Canvas::new(8, 8);
        canvas.put(0, 0, Rgb::RED).unwrap();
        canvas.put(7, 7, Rgb::BLUE).unwrap();

        // 8x8 pixels onto 4x2 cells: every sub-pixel covers a 2x2 block
        let mut renderer = CellRenderer::new(4, 2);
        renderer.sample(&canvas);
        let red = Color::Rgb { r: 255, g: 0, b: 0 };
        let blue = Color::Rgb { r: 0, g: 0, b: 255 };
        let black = Color::Rgb { r: 0, g: 0, b: 0 };
        assert_eq!(renderer.cell(0, 0), Some((red, black)));
        assert_eq!(renderer.cell(3, 1), Some((black, blue)));
        assert_eq!(renderer.cell(1, 1), Some((black, black)));
    }

    #[test]
    fn test_sample_uses_canvas_background() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(Rgb::WHITE);
        let mut renderer = CellRenderer::new(2, 1);
        renderer.sample(&canvas);
        let white = Color::Rgb { r: 255, g: 255, b: 255 };
        assert_eq!(renderer.cell(1, 0), Some((white, white)));
    }

    #[test]
    fn test_draw_emits_one_block_per_cell() {
        let mut renderer = CellRenderer::new(3, 2);
        renderer.sample(&Canvas::new(6, 4));
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(HALF_BLOCK).count(), 6);
    }

    #[test]
    fn test_resize() {
        let mut renderer = CellRenderer::new(3, 2);
        renderer.resize(10, 5);
        assert_eq!(renderer.size(), (10, 5));
        assert!(renderer.cell(9, 4).is_some());
        assert!(renderer.cell(10, 0).is_none());
    }
}
