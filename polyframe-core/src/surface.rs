/// Display surface seam: where finished frames go and where the quit signal comes from
use anyhow::Result;
use log::trace;
use std::time::Duration;

use crate::canvas::Canvas;

/// Something that can show a canvas and report whether the user wants out.
///
/// The frame loop calls `present` once per frame, then `poll_quit` with the
/// demo's frame delay. Implementations may return early from the wait when a
/// quit is requested.
pub trait DisplaySurface {
    fn present(&mut self, canvas: &Canvas) -> Result<()>;

    fn poll_quit(&mut self, wait: Duration) -> Result<bool>;
}

/// Surface with no window: keeps the latest frame and quits after a fixed count
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    quit_after: Option<u64>,
    presented: u64,
    waited: Duration,
    last_frame: Option<Canvas>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report quit once `frames` frames have been presented
    pub fn quit_after(frames: u64) -> Self {
        Self {
            quit_after: Some(frames),
            ..Self::default()
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Total delay requested so far; the headless surface never actually sleeps
    pub fn waited(&self) -> Duration {
        self.waited
    }

    pub fn last_frame(&self) -> Option<&Canvas> {
        self.last_frame.as_ref()
    }
}

impl DisplaySurface for HeadlessSurface {
    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        trace!("HeadlessSurface: present frame {}", self.presented);
        self.last_frame = Some(canvas.clone());
        self.presented += 1;
        Ok(())
    }

    fn poll_quit(&mut self, wait: Duration) -> Result<bool> {
        self.waited += wait;
        Ok(self.quit_after.is_some_and(|limit| self.presented >= limit))
    }
}
