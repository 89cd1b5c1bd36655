/// Terminal player for polyframe demos, drawn with colored half-block cells
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use log::{debug, warn};
use polyframe_core::{run_demo, Canvas, Demo, DisplaySurface, Renderer, RunSummary};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod renderer;

pub use config::Config;
pub use renderer::CellRenderer;

/// Keys that end the run
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Run `undo` if `result` failed, passing the original error through
fn undo_on_err<T, E>(result: std::result::Result<T, E>, undo: impl FnOnce()) -> std::result::Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

/// Raw-mode, alternate-screen surface; the terminal is restored on drop
pub struct TerminalSurface {
    renderer: CellRenderer,
    title: String,
    show_status: bool,
    active: bool,
    last_fps: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalSurface {
    pub fn new(title: &str, show_status: bool) -> Result<Self> {
        let (cols, rows) = terminal::size().context("querying terminal size")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        undo_on_err(execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide), || {
            if let Err(err) = terminal::disable_raw_mode() {
                warn!("failed to leave raw mode: {}", err);
            }
        })
        .context("entering the alternate screen")?;
        debug!("terminal surface {}x{} cells", cols, rows);

        Ok(Self {
            renderer: CellRenderer::new(cols as usize, rows as usize),
            title: title.to_string(),
            show_status,
            active: true,
            last_fps: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Leave the alternate screen and raw mode; safe to call more than once
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(stdout(), ResetColor, terminal::LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.last_fps.elapsed();
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            self.frame_count = 0;
            self.last_fps = Instant::now();
        }
    }
}

impl DisplaySurface for TerminalSurface {
    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.renderer.sample(canvas);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;
        if self.show_status {
            queue!(
                stdout,
                cursor::MoveTo(0, 0),
                SetForegroundColor(Color::Yellow),
                Print(format!("{} | FPS: {:.1} | q=Quit", self.title, self.fps)),
                ResetColor
            )?;
        }
        stdout.flush()?;

        self.update_fps();
        Ok(())
    }

    fn poll_quit(&mut self, wait: Duration) -> Result<bool> {
        let deadline = Instant::now() + wait;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(false);
            }
            match event::read()? {
                Event::Key(key) if is_quit_key(&key) => return Ok(true),
                Event::Resize(cols, rows) => {
                    debug!("terminal resized to {}x{} cells", cols, rows);
                    self.renderer.resize(cols as usize, rows as usize);
                }
                _ => {}
            }
            if remaining.is_zero() {
                return Ok(false);
            }
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {:#}", err);
        }
    }
}

/// Main application: one demo played on the terminal
pub struct TerminalApp {
    demo: Box<dyn Demo>,
    config: Config,
}

impl TerminalApp {
    pub fn new(demo: Box<dyn Demo>, config: Config) -> Self {
        Self { demo, config }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let renderer = Renderer::new(self.config.line_policy);
        let mut surface = TerminalSurface::new(self.demo.title(), self.config.show_status)?;

        let result = run_demo(self.demo.as_mut(), &mut surface, &renderer, &self.config.run_options());

        surface.restore()?;
        result
    }
}
