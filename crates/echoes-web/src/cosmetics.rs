//! Decorative DOM sprites and text effects. Kinematics live in
//! `echoes_core::sprites`; this module only creates, moves and removes nodes.

use echoes_core::constants::{
    BURST_SPRITES, DREAM_SPAWN_INTERVAL_MS, FORM_ACK_DELAY_MS, PAGE_FADE_DELAY_MS,
    SUBTITLE_FADE_MS, SUBTITLE_INITIAL_DELAY_MS, SUBTITLE_INTERVAL_MS, SUBTITLE_TEXTS,
};
use echoes_core::page::TextRotator;
use echoes_core::sprites::{essence_burst, ripple_frame, DreamMote};
use gloo::timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::frame::run_frames;

fn essence_node(document: &web::Document, size_px: f32) -> Option<web::HtmlElement> {
    let node = dom::create(document, "div", "")?;
    let style = node.style();
    let size = format!("{}px", size_px);
    _ = style.set_property("position", "absolute");
    _ = style.set_property("width", &size);
    _ = style.set_property("height", &size);
    _ = style.set_property("border-radius", "50%");
    _ = style.set_property("background", ESSENCE_GRADIENT);
    _ = style.set_property("pointer-events", "none");
    Some(node)
}

/// Twenty sprites flung outward from the centre of the essence container.
pub fn essence_explosion(document: &web::Document) {
    let Some(container) = dom::query(document, ESSENCE_CONTAINER) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for mut sprite in essence_burst(BURST_SPRITES, &mut rng) {
        let Some(node) = essence_node(document, 8.0) else {
            continue;
        };
        _ = node.style().set_property("left", "50%");
        _ = node.style().set_property("top", "50%");
        if container.append_child(&node).is_err() {
            continue;
        }
        run_frames(move |_| {
            let alive = sprite.step();
            let style = node.style();
            _ = style.set_property(
                "transform",
                &format!("translate({}px, {}px)", sprite.offset.x, sprite.offset.y),
            );
            _ = style.set_property("opacity", &sprite.opacity.to_string());
            if !alive {
                node.remove();
            }
            alive
        });
    }
}

pub fn wire_dream_form(document: &web::Document) {
    let Some(form) = dom::query(document, DREAM_FORM)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let submitted = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let field = |data: &web::FormData, key: &str| data.get(key).as_string().unwrap_or_default();
        let (name, email, message) = match web::FormData::new_with_form(&submitted) {
            Ok(data) => (
                field(&data, "name"),
                field(&data, "email"),
                field(&data, "message"),
            ),
            Err(e) => {
                log::warn!("[form] unreadable form data: {:?}", e);
                return;
            }
        };

        essence_explosion(&doc);

        log::info!(
            "[form] submitted by {} <{}>, {} chars",
            name,
            email,
            message.len()
        );

        let form = submitted.clone();
        Timeout::new(FORM_ACK_DELAY_MS, move || {
            if let Some(w) = web::window() {
                _ = w.alert_with_message(&format!(
                    "Dream received, {}. Your essence lingers in the void...",
                    name
                ));
            }
            form.reset();
        })
        .forget();
    });
}

/// A mote rises out of the essence container every couple of seconds.
pub fn start_dream_motes(document: &web::Document) {
    let Some(container) = dom::query(document, ESSENCE_CONTAINER) else {
        return;
    };
    let doc = document.clone();
    Interval::new(DREAM_SPAWN_INTERVAL_MS, move || {
        let mote = DreamMote::spawn(&mut rand::thread_rng());
        let Some(node) = essence_node(&doc, mote.size_px) else {
            return;
        };
        let style = node.style();
        _ = style.set_property("left", &format!("{}%", mote.left_pct));
        _ = style.set_property("top", "100%");
        _ = style.set_property("opacity", &mote.start_opacity.to_string());
        if container.append_child(&node).is_err() {
            return;
        }
        run_frames(move |elapsed_ms| match mote.sample(elapsed_ms) {
            Some((offset, opacity)) => {
                let style = node.style();
                _ = style.set_property(
                    "transform",
                    &format!("translateY({}px) translateX({}px)", offset.y, offset.x),
                );
                _ = style.set_property("opacity", &opacity.to_string());
                true
            }
            None => {
                node.remove();
                false
            }
        });
    })
    .forget();
}

pub fn wire_ripples(document: &web::Document) {
    for button in dom::query_all(document, RIPPLE_BUTTONS) {
        let doc = document.clone();
        let host = button.clone();
        dom::listen(&button, "click", move |ev| {
            let Some(click) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = host.get_bounding_client_rect();
            let x = click.client_x() as f64 - rect.left();
            let y = click.client_y() as f64 - rect.top();
            let Some(ripple) = dom::create(&doc, "span", "") else {
                return;
            };
            let style = ripple.style();
            _ = style.set_property("position", "absolute");
            _ = style.set_property("left", &format!("{}px", x));
            _ = style.set_property("top", &format!("{}px", y));
            _ = style.set_property("width", "0");
            _ = style.set_property("height", "0");
            _ = style.set_property("border-radius", "50%");
            _ = style.set_property("background", RIPPLE_COLOR);
            _ = style.set_property("transform", "translate(-50%, -50%)");
            _ = style.set_property("pointer-events", "none");
            if host.append_child(&ripple).is_err() {
                return;
            }
            run_frames(move |elapsed_ms| match ripple_frame(elapsed_ms) {
                Some((size, opacity)) => {
                    let style = ripple.style();
                    let size = format!("{}px", size);
                    _ = style.set_property("width", &size);
                    _ = style.set_property("height", &size);
                    _ = style.set_property("opacity", &opacity.to_string());
                    true
                }
                None => {
                    ripple.remove();
                    false
                }
            });
        });
    }
}

pub fn start_subtitle_rotation(document: &web::Document) {
    let Some(subtitle) = dom::query(document, HERO_SUBTITLE) else {
        return;
    };
    let rotator = Rc::new(RefCell::new(TextRotator::new(SUBTITLE_TEXTS)));

    let rotate = move || {
        dom::set_class(&subtitle, FADE_OUT_CLASS, true);
        let subtitle = subtitle.clone();
        let rotator = rotator.clone();
        Timeout::new(SUBTITLE_FADE_MS, move || {
            if let Some(text) = rotator.borrow_mut().advance() {
                subtitle.set_text_content(Some(text));
            }
            dom::set_class(&subtitle, FADE_OUT_CLASS, false);
        })
        .forget();
    };

    Timeout::new(SUBTITLE_INITIAL_DELAY_MS, move || {
        rotate();
        Interval::new(SUBTITLE_INTERVAL_MS, rotate).forget();
    })
    .forget();
}

/// Fade the body in once everything has loaded.
pub fn wire_page_fade_in(window: &web::Window, document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    dom::listen(window, "load", move |_| {
        _ = body.style().set_property("opacity", "0");
        let body = body.clone();
        Timeout::new(PAGE_FADE_DELAY_MS, move || {
            let style = body.style();
            _ = style.set_property("transition", "opacity 1s ease");
            _ = style.set_property("opacity", "1");
        })
        .forget();
    });
}
