use echoes_core::constants::NAV_COLLAPSE_WIDTH;
use echoes_core::page::{active_section, filter_cards, parallax_offset, CardVisibility, SectionBounds};
use echoes_core::CursorFollower;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;

pub fn wire_cursor(document: &web::Document, cursor: Rc<RefCell<CursorFollower>>) {
    dom::listen(document, "mousemove", move |ev| {
        if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
            cursor
                .borrow_mut()
                .set_target(m.client_x() as f32, m.client_y() as f32);
        }
    });
}

/// In-page anchors scroll smoothly; the modal's action link is left alone.
pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHORS) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            if link.class_list().contains("modal-link") {
                return;
            }
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if let Some(target) = dom::query(&doc, &href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                _ = entry.target().class_list().add_1(CLASS_VISIBLE);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    for el in dom::query_all(document, REVEAL_TARGETS) {
        observer.observe(&el);
    }
    Ok(())
}

fn section_bounds(sections: &[web::HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|s| SectionBounds {
            id: s.id(),
            top: s.offset_top() as f64,
            height: s.offset_height() as f64,
        })
        .collect()
}

/// Scroll-driven nav highlight and silhouette parallax.
pub fn wire_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let sections: Vec<web::HtmlElement> = dom::query_all(document, SECTIONS)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let links = dom::query_all(document, NAV_LINKS);
    let silhouette = dom::query(document, ABYSS_SILHOUETTE);
    let win = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let bounds = section_bounds(&sections);
        if let Some(current) = active_section(scroll_y, &bounds) {
            for link in &links {
                let is_current = link.get_attribute("data-section").as_deref() == Some(current);
                dom::set_class(link, CLASS_ACTIVE, is_current);
            }
        }
        if let Some(el) = &silhouette {
            dom::set_style(
                el,
                "transform",
                &format!("translateY({}px)", parallax_offset(scroll_y)),
            );
        }
    });
}

pub fn wire_nav_toggle(document: &web::Document) {
    let (Some(toggle), Some(container)) = (
        dom::query(document, NAV_TOGGLE),
        dom::query(document, NAV_CONTAINER),
    ) else {
        return;
    };

    let close = {
        let toggle = toggle.clone();
        let container = container.clone();
        move || {
            dom::set_class(&container, NAV_OPEN_CLASS, false);
            _ = toggle.set_attribute("aria-expanded", "false");
        }
    };

    {
        let toggle_btn = toggle.clone();
        let container = container.clone();
        dom::add_click_listener(&toggle, move || {
            let open = container
                .class_list()
                .toggle(NAV_OPEN_CLASS)
                .unwrap_or(false);
            _ = toggle_btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
        });
    }
    for link in dom::query_all(document, NAV_LINKS) {
        let close = close.clone();
        dom::add_click_listener(&link, close);
    }
    if let Some(window) = web::window() {
        let win = window.clone();
        dom::listen(&window, "resize", move |_| {
            let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            if width > NAV_COLLAPSE_WIDTH {
                close();
            }
        });
    }
}

pub fn wire_filter_tabs(document: &web::Document) {
    let tabs = Rc::new(dom::query_all(document, FILTER_TABS));
    let cards = Rc::new(dom::query_all(document, PROJECT_CARDS));
    for tab in tabs.iter() {
        let tabs = tabs.clone();
        let cards = cards.clone();
        let this_tab = tab.clone();
        dom::add_click_listener(tab, move || {
            let filter = this_tab.get_attribute("data-filter").unwrap_or_default();
            for t in tabs.iter() {
                dom::set_class(t, CLASS_ACTIVE, false);
            }
            dom::set_class(&this_tab, CLASS_ACTIVE, true);

            let categories: Vec<_> = cards
                .iter()
                .map(|c| c.get_attribute("data-category"))
                .collect();
            for (card, visibility) in cards.iter().zip(filter_cards(&filter, &categories)) {
                match visibility {
                    CardVisibility::Show { delay_ms } => {
                        let card = card.clone();
                        Timeout::new(delay_ms, move || {
                            dom::set_class(&card, CLASS_HIDDEN, false);
                            dom::set_class(&card, CLASS_VISIBLE, true);
                        })
                        .forget();
                    }
                    CardVisibility::Hide => {
                        dom::set_class(card, CLASS_HIDDEN, true);
                        dom::set_class(card, CLASS_VISIBLE, false);
                    }
                }
            }
        });
    }
}
