/// spin3d Web - canvas 2D front end compiled to WASM
///
/// Log records go to the browser console at info level and above.
///
/// The page owns pacing: it calls `WebDemo::tick` every
/// `WebDemo::tick_interval_ms` milliseconds with the arrow keys it
/// currently sees held down.

use spin3d_core::{Demo, Keys, Rgb, Surface, Tick, Variant, Xorshift64};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(msg: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(msg: &str);
}

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[{} {}] {}", record.level(), record.target(), record.args());
        if record.level() == log::Level::Error {
            console_error(&msg);
        } else {
            console_log(&msg);
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    // Already set if the host installed its own logger
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Surface backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Rgb) {
        self.fill_rect(0, 0, self.width, self.height, color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb, width: u32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
    }

    fn polygon(&mut self, points: &[(i32, i32)], color: Rgb) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(x0 as f64, y0 as f64);
        for &(x, y) in rest {
            self.ctx.line_to(x as f64, y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    /// The browser composites the canvas itself.
    fn present(&mut self) -> spin3d_core::Result<()> {
        Ok(())
    }
}

fn to_js(err: spin3d_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WebDemo {
    demo: Demo,
    surface: CanvasSurface,
    tick_interval_ms: u32,
}

#[wasm_bindgen]
impl WebDemo {
    /// Attach a demo to the canvas with id `canvas_id`.
    ///
    /// `variant` is one of "points", "wireframe" or "filled"; `seed` seeds
    /// the background fade.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, variant: &str, seed: u64) -> Result<WebDemo, JsValue> {
        let variant: Variant = variant.parse().map_err(|e: String| JsValue::from_str(&e))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document object not found"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()?;

        let config = variant.config();
        canvas.set_width(config.width);
        canvas.set_height(config.height);

        let mut surface = CanvasSurface::new(&canvas)?;
        let demo = Demo::new(variant, &config, Xorshift64::from_seed(seed)).map_err(to_js)?;
        demo.draw(&mut surface).map_err(to_js)?;
        log::info!("{variant} demo attached to #{canvas_id}");

        Ok(WebDemo {
            demo,
            surface,
            tick_interval_ms: config.tick_interval().as_millis() as u32,
        })
    }

    /// Milliseconds between ticks.
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Run one tick with the given keys held. Returns whether it redrew.
    pub fn tick(&mut self, up: bool, down: bool, left: bool, right: bool) -> Result<bool, JsValue> {
        let keys = Keys {
            up,
            down,
            left,
            right,
        };
        let tick = self.demo.tick(&keys, &mut self.surface).map_err(to_js)?;
        Ok(tick == Tick::Redrawn)
    }

    #[wasm_bindgen(getter)]
    pub fn angle_x(&self) -> f64 {
        self.demo.rotation().x
    }

    #[wasm_bindgen(getter)]
    pub fn angle_y(&self) -> f64 {
        self.demo.rotation().y
    }

    #[wasm_bindgen(getter)]
    pub fn angle_z(&self) -> f64 {
        self.demo.rotation().z
    }
}
