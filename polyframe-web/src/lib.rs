/// polyframe Web - plays the demos on an HTML canvas through WASM
///
/// JavaScript owns the timer: call `tick()` every `frame_delay_ms()` and
/// `render()` after it.
use anyhow::{anyhow, Context};
use log::debug;
use polyframe_core::{
    Canvas, ClockTime, Demo, DemoKind, DemoSeed, DisplaySurface, DrawStats, LinePolicy, Renderer,
};
use std::time::Duration;
use wasm_bindgen::{prelude::*, Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Blits finished frames into a 2D canvas context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=...>` and size it to `width` x `height`
    pub fn attach(canvas_id: &str, width: usize, height: usize) -> anyhow::Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .context("no document available")?;
        let element = document
            .get_element_by_id(canvas_id)
            .with_context(|| format!("no element with id '{}'", canvas_id))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| anyhow!("element '{}' is not a canvas", canvas_id))?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")
            .map_err(|_| anyhow!("canvas '{}' refused a 2d context", canvas_id))?
            .context("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("unexpected context type"))?;
        Ok(Self { context })
    }
}

impl DisplaySurface for CanvasSurface {
    fn present(&mut self, canvas: &Canvas) -> anyhow::Result<()> {
        let rgba = canvas.to_rgba();
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&rgba[..]),
            canvas.width() as u32,
            canvas.height() as u32,
        )
        .map_err(|_| anyhow!("could not build image data"))?;
        self.context
            .put_image_data(&image, 0.0, 0.0)
            .map_err(|_| anyhow!("could not draw image data"))?;
        Ok(())
    }

    /// The browser event loop decides when to stop
    fn poll_quit(&mut self, _wait: Duration) -> anyhow::Result<bool> {
        Ok(false)
    }
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

#[wasm_bindgen]
pub struct WebPlayer {
    demo: Box<dyn Demo>,
    canvas: Canvas,
    renderer: Renderer,
    surface: Option<CanvasSurface>,
}

impl WebPlayer {
    pub fn build(kind: DemoKind, seed: &DemoSeed, policy: LinePolicy) -> polyframe_core::Result<Self> {
        let demo = kind.build(seed)?;
        let (width, height) = demo.canvas_size();
        debug!("web player for '{}' at {}x{}", demo.title(), width, height);
        Ok(Self {
            demo,
            canvas: Canvas::new(width, height),
            renderer: Renderer::new(policy),
            surface: None,
        })
    }

    /// Clear and redraw the current pose into the off-screen canvas
    pub fn draw_frame(&mut self) -> polyframe_core::Result<DrawStats> {
        self.canvas.clear(self.demo.background());
        self.demo.draw(&mut self.canvas, &self.renderer)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

#[wasm_bindgen]
impl WebPlayer {
    #[wasm_bindgen(constructor)]
    pub fn new(demo: &str, hour: u32, minute: u32, seed: u32, legacy_lines: bool) -> Result<WebPlayer, JsValue> {
        let seed = DemoSeed {
            clock: ClockTime::new(hour, minute),
            rng_seed: seed as u64,
        };
        let policy = if legacy_lines {
            LinePolicy::Legacy
        } else {
            LinePolicy::Inclusive
        };
        demo.parse::<DemoKind>()
            .and_then(|kind| WebPlayer::build(kind, &seed, policy))
            .map_err(|err| to_js(err.into()))
    }

    /// Bind the player to the canvas element with the given id
    pub fn init(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        let surface = CanvasSurface::attach(canvas_id, self.canvas.width(), self.canvas.height()).map_err(to_js)?;
        self.surface = Some(surface);
        Ok(())
    }

    /// Draw the current pose and blit it to the page
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.draw_frame().map_err(|err| to_js(err.into()))?;
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| to_js(anyhow!("call init() before render()")))?;
        surface.present(&self.canvas).map_err(to_js)
    }

    pub fn tick(&mut self) {
        self.demo.advance();
    }

    pub fn title(&self) -> String {
        self.demo.title().to_string()
    }

    pub fn frame_delay_ms(&self) -> u32 {
        self.demo.frame_delay().as_millis() as u32
    }

    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }
}
