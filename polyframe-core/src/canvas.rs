/// RGB framebuffer that the renderer writes into
use crate::error::{Error, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(100, 100, 100);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major grid of colors with the origin at the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            background: Color::BLACK,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The color of the most recent `clear`
    pub fn background(&self) -> Color {
        self.background
    }

    /// Erase everything drawn so far
    pub fn clear(&mut self, color: Color) {
        self.background = color;
        self.pixels.fill(color);
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Overwrite one pixel. Coordinates outside the canvas are rejected, never wrapped.
    pub fn put(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        let idx = y as usize * self.width + x as usize;
        self.pixels[idx] = color;
        Ok(())
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.pixels[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels that differ from the background, row by row
    pub fn ink(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let width = self.width;
        let background = self.background;
        self.pixels
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c != background)
            .map(move |(i, &c)| ((i % width) as i32, (i / width) as i32, c))
    }

    /// Pack the canvas as RGBA bytes with opaque alpha
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            out.extend_from_slice(&[c.r, c.g, c.b, 255]);
        }
        out
    }
}
