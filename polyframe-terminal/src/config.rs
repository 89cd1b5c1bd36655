/// Command-line configuration for the terminal player
use anyhow::{bail, Context, Result};
use polyframe_core::{DemoKind, LinePolicy, RunOptions};
use std::time::Duration;

pub const USAGE: &str = "\
usage: polyframe-terminal [DEMO] [--frames N] [--delay MS] [--legacy-lines] [--no-status]

demos: windmill (default), clock, solar-system, robot-arm, stars

  --frames N       stop after N frames
  --delay MS       wait MS milliseconds between frames instead of the demo's own delay
  --legacy-lines   rasterize descending lines the way the classic demos did
  --no-status      hide the title and FPS line
  -h, --help       print this message

keys: q, Esc or Ctrl+C quit";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub demo: DemoKind,
    pub line_policy: LinePolicy,
    pub max_frames: Option<u64>,
    pub frame_delay: Option<Duration>,
    pub show_status: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoKind::Windmill,
            line_policy: LinePolicy::Inclusive,
            max_frames: None,
            frame_delay: None,
            show_status: true,
            help: false,
        }
    }
}

impl Config {
    /// Parse arguments, program name already stripped
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut demo_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" | "--help" => config.help = true,
                "--legacy-lines" => config.line_policy = LinePolicy::Legacy,
                "--no-status" => config.show_status = false,
                "--frames" => {
                    let value = args.next().context("--frames needs a value")?;
                    let frames = value
                        .as_ref()
                        .parse::<u64>()
                        .with_context(|| format!("invalid frame count '{}'", value.as_ref()))?;
                    config.max_frames = Some(frames);
                }
                "--delay" => {
                    let value = args.next().context("--delay needs a value")?;
                    let millis = value
                        .as_ref()
                        .parse::<u64>()
                        .with_context(|| format!("invalid delay '{}'", value.as_ref()))?;
                    config.frame_delay = Some(Duration::from_millis(millis));
                }
                flag if flag.starts_with('-') => bail!("unknown option '{}'\n\n{}", flag, USAGE),
                name => {
                    if demo_seen {
                        bail!("only one demo can be played at a time, got extra '{}'", name);
                    }
                    config.demo = name.parse()?;
                    demo_seen = true;
                }
            }
        }

        Ok(config)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            max_frames: self.max_frames,
            frame_delay: self.frame_delay,
        }
    }
}
