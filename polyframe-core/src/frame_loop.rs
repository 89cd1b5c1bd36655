/// The per-frame cycle: clear, draw, present, poll for quit, advance
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Duration;

use crate::canvas::Canvas;
use crate::demos::Demo;
use crate::renderer::{DrawStats, Renderer};
use crate::surface::DisplaySurface;

/// Knobs for a run; the defaults run until the surface reports quit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many frames even if nobody asked to quit
    pub max_frames: Option<u64>,
    /// Replace the demo's own frame delay
    pub frame_delay: Option<Duration>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub stats: DrawStats,
}

/// Drive a demo until the surface reports quit or the frame cap is reached
pub fn run_demo(
    demo: &mut dyn Demo,
    surface: &mut dyn DisplaySurface,
    renderer: &Renderer,
    options: &RunOptions,
) -> Result<RunSummary> {
    let (width, height) = demo.canvas_size();
    let delay = options.frame_delay.unwrap_or_else(|| demo.frame_delay());
    let mut canvas = Canvas::new(width, height);
    let mut summary = RunSummary::default();

    info!(
        "running '{}' on a {}x{} canvas, {:?} per frame",
        demo.title(),
        width,
        height,
        delay
    );

    loop {
        canvas.clear(demo.background());
        let stats = demo
            .draw(&mut canvas, renderer)
            .with_context(|| format!("drawing frame {} of '{}'", summary.frames, demo.title()))?;
        summary.stats += stats;

        surface.present(&canvas).context("presenting frame")?;
        summary.frames += 1;

        if surface.poll_quit(delay)? {
            debug!("quit requested after {} frames", summary.frames);
            break;
        }
        if options.max_frames.is_some_and(|max| summary.frames >= max) {
            debug!("frame cap of {} reached", summary.frames);
            break;
        }
        demo.advance();
    }

    info!(
        "'{}' stopped after {} frames ({} pixels plotted, {} clipped)",
        demo.title(),
        summary.frames,
        summary.stats.plotted,
        summary.stats.clipped
    );
    Ok(summary)
}
