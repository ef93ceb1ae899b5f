use echoes_core::constants::{PARTICLE_SHADOW_BLUR, PARTICLE_SHADOW_COLOR};
use echoes_core::{CursorFollower, ParticleField};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Per-frame state for the background particles and the cursor follower.
pub struct FrameContext {
    pub canvas: Option<web::HtmlCanvasElement>,
    pub ctx2d: Option<web::CanvasRenderingContext2d>,
    pub field: Rc<RefCell<ParticleField>>,
    pub cursor: Rc<RefCell<CursorFollower>>,
    pub body: Option<web::HtmlElement>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.update_cursor();
        self.field.borrow_mut().step();
        self.draw_particles();
    }

    fn update_cursor(&mut self) {
        let (target, dot) = {
            let mut c = self.cursor.borrow_mut();
            let dot = c.step();
            (c.target, dot)
        };
        if let Some(body) = &self.body {
            let style = body.style();
            _ = style.set_property("--cursor-x", &format!("{}px", target.x));
            _ = style.set_property("--cursor-y", &format!("{}px", target.y));
            _ = style.set_property("--cursor-dot-x", &format!("{}px", dot.x));
            _ = style.set_property("--cursor-dot-y", &format!("{}px", dot.y));
        }
    }

    fn draw_particles(&self) {
        let (Some(canvas), Some(ctx)) = (&self.canvas, &self.ctx2d) else {
            return;
        };
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        for p in self.field.borrow().particles() {
            ctx.begin_path();
            _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
            ctx.set_fill_style_str(&p.fill_style());
            ctx.set_shadow_blur(PARTICLE_SHADOW_BLUR);
            ctx.set_shadow_color(PARTICLE_SHADOW_COLOR);
            ctx.fill();
            ctx.set_shadow_blur(0.0);
        }
    }
}

/// Look up the particle canvas and its 2D context; both are optional.
pub fn init_canvas(
    document: &web::Document,
    id: &str,
) -> (Option<web::HtmlCanvasElement>, Option<web::CanvasRenderingContext2d>) {
    let canvas = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let ctx2d = canvas.as_ref().and_then(|c| {
        c.get_context("2d")
            .ok()
            .flatten()
            .and_then(|o| o.dyn_into::<web::CanvasRenderingContext2d>().ok())
    });
    (canvas, ctx2d)
}

/// Keep the canvas the size of the window and tell the field about it.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let canvas_resize = canvas.clone();
    let field_resize = field.clone();
    if let Some(window) = web::window() {
        dom::listen(&window, "resize", move |_| {
            let (w, h) = dom::sync_canvas_to_window(&canvas_resize);
            field_resize.borrow_mut().resize(w, h);
        });
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `step` once per animation frame with the milliseconds elapsed since
/// the first frame, until it returns `false`.
pub fn run_frames(mut step: impl FnMut(f64) -> bool + 'static) {
    let started = instant::Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        if !step(elapsed_ms) {
            // breaks the self-reference so the closure is freed after this call
            tick_clone.borrow_mut().take();
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
