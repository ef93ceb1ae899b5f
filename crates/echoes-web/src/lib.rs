#![cfg(target_arch = "wasm32")]
use echoes_core::constants::PRELOAD_DELAY;
use echoes_core::{CursorFollower, ParticleField, VideoCache};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod cosmetics;
mod dom;
mod events;
mod frame;
mod media;
mod modal;

use frame::FrameContext;
use media::SharedVideoCache;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("echoes-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Background particles and cursor follower share one animation loop
    let (canvas, ctx2d) = frame::init_canvas(&document, constants::PARTICLE_CANVAS_ID);
    let (width, height) = match &canvas {
        Some(c) => dom::sync_canvas_to_window(c),
        None => {
            log::warn!("missing #{}; particles disabled", constants::PARTICLE_CANVAS_ID);
            (1.0, 1.0)
        }
    };
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        rand::random::<u64>(),
    )));
    if let Some(c) = &canvas {
        frame::wire_canvas_resize(c, &field);
    }
    let cursor = Rc::new(RefCell::new(CursorFollower::default()));
    events::wire_cursor(&document, cursor.clone());
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        canvas,
        ctx2d,
        field,
        cursor,
        body: document.body(),
    }));
    frame::start_loop(frame_ctx);

    // Project preview
    let videos: SharedVideoCache = Rc::new(RefCell::new(VideoCache::new()));
    if modal::wire_modal(&document, videos.clone()).is_none() {
        log::warn!("no {} on page; previews disabled", constants::MODAL);
    }
    {
        let doc = document.clone();
        dom::listen(&window, "load", move |_| {
            let doc = doc.clone();
            let videos = videos.clone();
            Timeout::new(PRELOAD_DELAY.as_millis() as u32, move || {
                media::preload_projects(&doc, &videos);
            })
            .forget();
        });
    }

    // Page chrome
    events::wire_smooth_scroll(&document);
    if let Err(e) = events::wire_scroll_reveal(&document) {
        log::warn!("scroll reveal unavailable: {:?}", e);
    }
    events::wire_scroll(&document);
    events::wire_nav_toggle(&document);
    events::wire_filter_tabs(&document);

    cosmetics::wire_dream_form(&document);
    cosmetics::start_dream_motes(&document);
    cosmetics::wire_ripples(&document);
    cosmetics::start_subtitle_rotation(&document);
    cosmetics::wire_page_fade_in(&window, &document);

    log::info!("echoes-web ready");
    Ok(())
}
