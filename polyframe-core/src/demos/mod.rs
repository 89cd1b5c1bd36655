/// The animation demos, each a small configuration of shapes, scene nodes and bodies
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::canvas::{Canvas, Color};
use crate::error::{Error, Result};
use crate::renderer::{DrawStats, Renderer};

pub mod clock;
pub mod robot_arm;
pub mod solar_system;
pub mod starfield;
pub mod windmill;

pub use clock::Clock;
pub use robot_arm::RobotArm;
pub use solar_system::SolarSystem;
pub use starfield::Starfield;
pub use windmill::Windmill;

/// An animation that can draw its current pose and step to the next one
pub trait Demo {
    fn title(&self) -> &str;

    /// Canvas `(width, height)` in pixels
    fn canvas_size(&self) -> (usize, usize);

    fn background(&self) -> Color;

    /// How long the display waits between frames
    fn frame_delay(&self) -> Duration;

    /// Recompute poses and draw every body onto a freshly cleared canvas
    fn draw(&mut self, canvas: &mut Canvas, renderer: &Renderer) -> Result<DrawStats>;

    /// Advance every body by one tick
    fn advance(&mut self);
}

/// Wall-clock time used to set the clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

/// External inputs a demo may be seeded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSeed {
    pub clock: ClockTime,
    pub rng_seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Windmill,
    Clock,
    SolarSystem,
    RobotArm,
    Starfield,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Windmill,
        DemoKind::Clock,
        DemoKind::SolarSystem,
        DemoKind::RobotArm,
        DemoKind::Starfield,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::Windmill => "windmill",
            DemoKind::Clock => "clock",
            DemoKind::SolarSystem => "solar-system",
            DemoKind::RobotArm => "robot-arm",
            DemoKind::Starfield => "stars",
        }
    }

    pub fn build(self, seed: &DemoSeed) -> Result<Box<dyn Demo>> {
        let demo: Box<dyn Demo> = match self {
            DemoKind::Windmill => Box::new(Windmill::new()?),
            DemoKind::Clock => Box::new(Clock::new(seed.clock)?),
            DemoKind::SolarSystem => Box::new(SolarSystem::new()?),
            DemoKind::RobotArm => Box::new(RobotArm::new()?),
            DemoKind::Starfield => Box::new(Starfield::new(seed.rng_seed)),
        };
        Ok(demo)
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "windmill" | "windmil" => Ok(DemoKind::Windmill),
            "clock" => Ok(DemoKind::Clock),
            "solar-system" | "solar" | "solarsystem" => Ok(DemoKind::SolarSystem),
            "robot-arm" | "arm" | "robotarms" | "robot-arms" => Ok(DemoKind::RobotArm),
            "stars" | "starfield" | "twinkle-stars" => Ok(DemoKind::Starfield),
            _ => Err(Error::UnknownDemo(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frames(kind: DemoKind, frames: usize) -> DrawStats {
        let seed = DemoSeed {
            clock: ClockTime::new(10, 42),
            rng_seed: 7,
        };
        let mut demo = kind.build(&seed).unwrap();
        let (width, height) = demo.canvas_size();
        let mut canvas = Canvas::new(width, height);
        let renderer = Renderer::default();
        let mut total = DrawStats::default();
        for _ in 0..frames {
            canvas.clear(demo.background());
            total += demo.draw(&mut canvas, &renderer).unwrap();
            demo.advance();
        }
        total
    }

    #[test]
    fn test_every_demo_stays_on_canvas() {
        for kind in DemoKind::ALL {
            let stats = run_frames(kind, 400);
            assert!(stats.plotted > 0, "{} drew nothing", kind);
            assert_eq!(stats.clipped, 0, "{} left the canvas", kind);
        }
    }

    #[test]
    fn test_parse_demo_names() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.name().parse::<DemoKind>().unwrap(), kind);
        }
        assert_eq!("Solar".parse::<DemoKind>().unwrap(), DemoKind::SolarSystem);
        assert_eq!("arm".parse::<DemoKind>().unwrap(), DemoKind::RobotArm);
        assert_eq!(
            "teapot".parse::<DemoKind>(),
            Err(Error::UnknownDemo("teapot".to_string()))
        );
    }
}
