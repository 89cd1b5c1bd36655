/// Fixed stars that change color every frame
use std::time::Duration;

use log::debug;

use crate::canvas::{Canvas, Color};
use crate::error::Result;
use crate::geometry::Pixel;
use crate::renderer::{DrawStats, Renderer};

use super::Demo;

const WIDTH: usize = 1000;
const HEIGHT: usize = 600;
const STAR_COUNT: usize = 100;

/// Non-cryptographic xorshift64* generator
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform-ish value in `0..bound`
    pub fn below(&mut self, bound: u64) -> u64 {
        // High bits of xorshift64* are the well-mixed ones
        (self.next_u64() >> 32) % bound
    }
}

pub struct Starfield {
    rng: XorShift64,
    stars: Vec<Pixel>,
}

impl Starfield {
    pub fn new(seed: u64) -> Self {
        let mut rng = XorShift64::new(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let x = rng.below(WIDTH as u64) as i32;
                let y = rng.below(HEIGHT as u64) as i32;
                Pixel::new(x, y)
            })
            .collect();
        debug!("starfield seeded with {:#x}", seed);
        Self { rng, stars }
    }

    pub fn stars(&self) -> &[Pixel] {
        &self.stars
    }

    fn random_color(&mut self) -> Color {
        let mut channel = || self.rng.below(255) as u8;
        Color::rgb(channel(), channel(), channel())
    }
}

impl Demo for Starfield {
    fn title(&self) -> &str {
        "Twinkle Stars"
    }

    fn canvas_size(&self) -> (usize, usize) {
        (WIDTH, HEIGHT)
    }

    fn background(&self) -> Color {
        Color::BLACK
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(50)
    }

    fn draw(&mut self, canvas: &mut Canvas, renderer: &Renderer) -> Result<DrawStats> {
        let mut stats = DrawStats::default();
        for i in 0..self.stars.len() {
            let star = self.stars[i];
            let color = self.random_color();
            // A zero-length line is a single pixel
            stats += renderer.draw_line(canvas, star, star, color);
        }
        Ok(stats)
    }

    /// Stars stay put; only their colors change, and those are drawn fresh each frame
    fn advance(&mut self) {}
}
