//! DOM side of the project preview. Renders the carousel built by
//! `echoes-core`, carries out the commands it emits and feeds timers,
//! animation frames and media readiness back into it.

use echoes_core::constants::{PLACEHOLDER_BACKGROUND, PLACEHOLDER_CAPTION};
use echoes_core::{Command, Effects, ProjectDetails, ProjectModal, SlideKind, TimerId};
use fnv::FnvHashMap;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::media::{self, SharedVideoCache};

/// Modal elements looked up once at startup.
pub struct ModalDom {
    pub root: web::Element,
    pub title: Option<web::Element>,
    pub desc: Option<web::Element>,
    pub tags: Option<web::Element>,
    pub link: Option<web::HtmlAnchorElement>,
    pub frame: Option<web::Element>,
    pub loading: Option<web::Element>,
    pub dots: Option<web::Element>,
    pub prev: Option<web::Element>,
    pub next: Option<web::Element>,
}

impl ModalDom {
    pub fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            root: dom::query(document, MODAL)?,
            title: dom::query(document, MODAL_TITLE),
            desc: dom::query(document, MODAL_DESC),
            tags: dom::query(document, MODAL_TAGS),
            link: dom::query(document, MODAL_LINK)
                .and_then(|el| el.dyn_into::<web::HtmlAnchorElement>().ok()),
            frame: dom::query(document, MODAL_FRAME),
            loading: dom::query(document, MODAL_LOADING),
            dots: dom::query(document, PREVIEW_DOTS),
            prev: dom::query(document, PREVIEW_PREV),
            next: dom::query(document, PREVIEW_NEXT),
        })
    }
}

struct SlideNode {
    el: web::Element,
    video: Option<web::HtmlVideoElement>,
    thumb: Option<web::Element>,
}

pub struct ModalView {
    document: web::Document,
    dom: ModalDom,
    modal: ProjectModal,
    fx: Effects,
    videos: SharedVideoCache,
    timers: FnvHashMap<TimerId, Timeout>,
    slides: Vec<SlideNode>,
    dots: Vec<web::Element>,
    dot_listeners: Vec<EventListener>,
    first_image: Option<web::HtmlImageElement>,
    ready_listener: Option<EventListener>,
    frame: Option<AnimationFrame>,
}

pub type SharedModal = Rc<RefCell<ModalView>>;

impl ModalView {
    pub fn new(document: web::Document, dom: ModalDom, videos: SharedVideoCache) -> Self {
        Self {
            document,
            dom,
            modal: ProjectModal::default(),
            fx: Effects::new(),
            videos,
            timers: FnvHashMap::default(),
            slides: Vec::new(),
            dots: Vec::new(),
            dot_listeners: Vec::new(),
            first_image: None,
            ready_listener: None,
            frame: None,
        }
    }

    // ---------------- entry points ----------------

    pub fn open(view: &SharedModal, details: &ProjectDetails) {
        {
            let mut v = view.borrow_mut();
            let ModalView { modal, fx, .. } = &mut *v;
            modal.open(details, fx);
            v.ready_listener = None;
            v.fill_details(details);
        }
        // commands for the outgoing slides index the nodes still in the frame
        Self::flush(view);
        Self::render_slides(view);
        Self::flush(view);
    }

    pub fn close(view: &SharedModal) {
        view.borrow_mut().with_core(|modal, fx| modal.close(fx));
        Self::flush(view);
    }

    pub fn advance(view: &SharedModal, step: i64) {
        view.borrow_mut().with_core(|modal, fx| modal.advance(step, fx));
        Self::flush(view);
    }

    pub fn jump(view: &SharedModal, index: usize) {
        view.borrow_mut()
            .with_core(|modal, fx| modal.set_slide(index as i64, fx));
        Self::flush(view);
    }

    /// Returns whether the key was consumed by the modal.
    pub fn key(view: &SharedModal, key: &str) -> bool {
        let used = view
            .borrow_mut()
            .with_core(|modal, fx| modal.handle_key(key, fx));
        Self::flush(view);
        used
    }

    fn fire_timer(view: &SharedModal, id: TimerId) {
        {
            let mut v = view.borrow_mut();
            v.timers.remove(&id);
            v.with_core(|modal, fx| modal.on_timer(id, fx));
        }
        Self::flush(view);
    }

    fn frame_shown(view: &SharedModal) {
        {
            let mut v = view.borrow_mut();
            v.frame = None;
            let video_ready = v
                .slides
                .first()
                .and_then(|s| s.video.as_ref())
                .map(media::is_playable)
                .unwrap_or(false);
            let image_loaded = v.first_image.as_ref().map(|i| i.complete()).unwrap_or(false);
            let first = v.modal.first_slide_media(video_ready, image_loaded);
            v.with_core(|modal, fx| modal.frame_shown(first, fx));
        }
        Self::flush(view);
    }

    fn media_ready(view: &SharedModal) {
        {
            let mut v = view.borrow_mut();
            v.ready_listener = None;
            v.with_core(|modal, fx| modal.media_ready(fx));
        }
        Self::flush(view);
    }

    fn with_core<R>(&mut self, f: impl FnOnce(&mut ProjectModal, &mut Effects) -> R) -> R {
        f(&mut self.modal, &mut self.fx)
    }

    // ---------------- rendering ----------------

    fn fill_details(&self, details: &ProjectDetails) {
        if let Some(el) = &self.dom.title {
            el.set_text_content(Some(details.display_title()));
        }
        if let Some(el) = &self.dom.desc {
            el.set_text_content(Some(details.display_description()));
        }
        if let Some(container) = &self.dom.tags {
            container.set_inner_html("");
            for tag in details.tag_list() {
                if let Some(badge) = dom::create(&self.document, "span", CLASS_BADGE) {
                    badge.set_text_content(Some(&tag));
                    _ = container.append_child(&badge);
                }
            }
        }
        if let Some(link) = &self.dom.link {
            match details.action_link() {
                Some(action) => {
                    link.set_href(&action.href);
                    link.set_target(if action.new_tab { "_blank" } else { "_self" });
                    dom::set_style(link, "display", "inline-flex");
                }
                None => {
                    link.set_href("#");
                    dom::set_style(link, "display", "none");
                }
            }
        }
    }

    /// Replace the frame's children with the current carousel's slides.
    fn render_slides(view: &SharedModal) {
        let weak = Rc::downgrade(view);
        let mut v = view.borrow_mut();
        v.slides.clear();
        v.dots.clear();
        v.dot_listeners.clear();
        v.first_image = None;

        let (Some(frame), Some(dots_el)) = (v.dom.frame.clone(), v.dom.dots.clone()) else {
            return;
        };
        frame.set_inner_html("");
        dots_el.set_inner_html("");
        // the loading indicator lives inside the frame and must survive the rebuild
        if let Some(loading) = &v.dom.loading {
            _ = frame.append_child(loading);
        }

        let carousel = v.modal.carousel().clone();
        let title = carousel.title().to_string();
        for (index, slide) in carousel.slides().iter().enumerate() {
            let Some(node) = v
                .render_slide(&slide.kind, &title)
                .or_else(|| v.render_slide(&SlideKind::Placeholder, &title))
            else {
                continue;
            };
            dom::set_class(&node.el, CLASS_ACTIVE, slide.active);
            _ = frame.append_child(&node.el);
            if index == 0 {
                if let SlideKind::Image { src } = &slide.kind {
                    v.first_image = web::HtmlImageElement::new().ok().map(|img| {
                        img.set_src(src);
                        img
                    });
                }
            }
            v.slides.push(node);

            if let Some(dot) = dom::create(&v.document, "div", CLASS_DOT) {
                dom::set_class(&dot, CLASS_ACTIVE, carousel.dots()[index].active);
                let weak = weak.clone();
                let listener = EventListener::new(&dot, "click", move |_| {
                    if let Some(view) = weak.upgrade() {
                        ModalView::jump(&view, index);
                    }
                });
                _ = dots_el.append_child(&dot);
                v.dots.push(dot.into());
                v.dot_listeners.push(listener);
            }
        }

        let display = if carousel.show_controls() { "flex" } else { "none" };
        for el in [&v.dom.prev, &v.dom.next].into_iter().flatten() {
            dom::set_style(el, "display", display);
        }
        dom::set_style(&dots_el, "display", display);
    }

    fn render_slide(&self, kind: &SlideKind, title: &str) -> Option<SlideNode> {
        let el = dom::create(&self.document, "div", CLASS_SLIDE)?;
        let label = if title.is_empty() { None } else { Some(title) };
        let node = match kind {
            SlideKind::Video { src, thumbnail } => {
                let video = media::video_for(&self.videos, src, label.unwrap_or("Project video"))?;
                let style = video.style();
                _ = style.set_property("width", "100%");
                _ = style.set_property("height", "100%");
                _ = style.set_property("object-fit", "cover");
                _ = el.append_child(&video);

                let thumb = thumbnail.as_deref().and_then(|src| {
                    let img = dom::create(&self.document, "img", CLASS_THUMB)?
                        .dyn_into::<web::HtmlImageElement>()
                        .ok()?;
                    img.set_src(src);
                    img.set_alt(&label.map_or("Video thumbnail".to_string(), |t| {
                        format!("{} thumbnail", t)
                    }));
                    _ = img.style().set_property("opacity", "1");
                    _ = el.append_child(&img);
                    Some(web::Element::from(img))
                });
                el.set_title(label.unwrap_or("Project video"));
                SlideNode {
                    el: el.into(),
                    video: Some(video),
                    thumb,
                }
            }
            SlideKind::Image { src } => {
                _ = el
                    .style()
                    .set_property("background-image", &format!("url({})", src));
                el.set_title(label.unwrap_or("Project image"));
                SlideNode {
                    el: el.into(),
                    video: None,
                    thumb: None,
                }
            }
            SlideKind::Placeholder => {
                _ = el.class_list().add_1(CLASS_PLACEHOLDER);
                el.set_text_content(Some(PLACEHOLDER_CAPTION));
                _ = el
                    .style()
                    .set_property("background-image", PLACEHOLDER_BACKGROUND);
                SlideNode {
                    el: el.into(),
                    video: None,
                    thumb: None,
                }
            }
        };
        Some(node)
    }

    // ---------------- command application ----------------

    /// Apply every pending command. Commands never re-enter the core
    /// synchronously, so one pass drains the sink.
    fn flush(view: &SharedModal) {
        let commands = view.borrow_mut().fx.take();
        for command in commands {
            Self::apply(view, command);
        }
    }

    fn apply(view: &SharedModal, command: Command) {
        match command {
            Command::ScheduleTimer { id, delay } => {
                let weak = Rc::downgrade(view);
                let timeout = Timeout::new(delay.as_millis() as u32, move || {
                    if let Some(view) = weak.upgrade() {
                        ModalView::fire_timer(&view, id);
                    }
                });
                view.borrow_mut().timers.insert(id, timeout);
            }
            Command::CancelTimer { id } => {
                // dropping a gloo Timeout clears it
                view.borrow_mut().timers.remove(&id);
            }
            Command::RequestFrame => {
                let weak = Rc::downgrade(view);
                let handle = request_animation_frame(move |_| {
                    if let Some(view) = weak.upgrade() {
                        ModalView::frame_shown(&view);
                    }
                });
                view.borrow_mut().frame = Some(handle);
            }
            Command::WatchFirstSlideMedia => {
                let weak = Rc::downgrade(view);
                let mut v = view.borrow_mut();
                let on_ready = move |_: &web::Event| {
                    if let Some(view) = weak.upgrade() {
                        ModalView::media_ready(&view);
                    }
                };
                let video = v.slides.first().and_then(|s| s.video.clone());
                let listener = match (video, &v.first_image) {
                    (Some(video), _) => Some(EventListener::once(&video, "canplay", on_ready)),
                    (None, Some(img)) => Some(EventListener::once(img, "load", on_ready)),
                    (None, None) => None,
                };
                v.ready_listener = listener;
            }
            other => view.borrow().apply_dom(other),
        }
    }

    fn apply_dom(&self, command: Command) {
        match command {
            Command::SetSlideActive { index, active } => {
                if let Some(node) = self.slides.get(index) {
                    dom::set_class(&node.el, CLASS_ACTIVE, active);
                }
            }
            Command::SetDotActive { index, active } => {
                if let Some(dot) = self.dots.get(index) {
                    dom::set_class(dot, CLASS_ACTIVE, active);
                }
            }
            Command::SetThumbnailVisible { index, visible } => {
                if let Some(thumb) = self.slides.get(index).and_then(|s| s.thumb.as_ref()) {
                    dom::set_style(thumb, "opacity", if visible { "1" } else { "0" });
                }
            }
            Command::PlayVideo { index, muted } => {
                if let Some(video) = self.slides.get(index).and_then(|s| s.video.as_ref()) {
                    // autoplay may be refused by the browser; the slide just stays still
                    if let Err(e) = media::start_playback(video, muted) {
                        log::debug!("[carousel] {}", e);
                    }
                }
            }
            Command::StopVideo { index } => {
                if let Some(video) = self.slides.get(index).and_then(|s| s.video.as_ref()) {
                    _ = media::stop_playback(video);
                }
            }
            Command::StopAllVideos => {
                for el in dom::query_all_in(&self.dom.root, "video") {
                    if let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() {
                        _ = media::stop_playback(&video);
                    }
                }
            }
            Command::ShowLoading => {
                if let Some(el) = &self.dom.loading {
                    dom::set_class(el, CLASS_HIDDEN, false);
                }
            }
            Command::HideLoading => {
                if let Some(el) = &self.dom.loading {
                    dom::set_class(el, CLASS_HIDDEN, true);
                }
            }
            Command::LockScroll => self.set_body_overflow("hidden"),
            Command::RestoreScroll => self.set_body_overflow(""),
            Command::RevealModal => dom::set_class(&self.dom.root, CLASS_HIDDEN, false),
            Command::HideModal => dom::set_class(&self.dom.root, CLASS_HIDDEN, true),
            Command::MarkShown => dom::set_class(&self.dom.root, CLASS_SHOW, true),
            Command::MarkHidden => dom::set_class(&self.dom.root, CLASS_SHOW, false),
            Command::ScheduleTimer { .. }
            | Command::CancelTimer { .. }
            | Command::RequestFrame
            | Command::WatchFirstSlideMedia => {}
        }
    }

    fn set_body_overflow(&self, value: &str) {
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("overflow", value);
        }
    }
}

/// Hook the triggers, controls and keyboard up to a shared modal view.
pub fn wire_modal(document: &web::Document, videos: SharedVideoCache) -> Option<SharedModal> {
    let dom = ModalDom::find(document)?;
    let view: SharedModal = Rc::new(RefCell::new(ModalView::new(
        document.clone(),
        dom,
        videos,
    )));

    for trigger in dom::query_all(document, PROJECT_TRIGGER) {
        let weak = Rc::downgrade(&view);
        let source = trigger.clone();
        dom::add_click_listener(&trigger, move || {
            let details = ProjectDetails::from_attributes(|name| source.get_attribute(name));
            if let Some(view) = weak.upgrade() {
                ModalView::open(&view, &details);
            }
        });
    }

    let controls: [(Option<web::Element>, fn(&SharedModal)); 4] = [
        (dom::query(document, PREVIEW_PREV), |v| ModalView::advance(v, -1)),
        (dom::query(document, PREVIEW_NEXT), |v| ModalView::advance(v, 1)),
        (dom::query(document, MODAL_CLOSE), ModalView::close),
        (dom::query(document, MODAL_OVERLAY), ModalView::close),
    ];
    for (el, action) in controls {
        if let Some(el) = el {
            let weak = Rc::downgrade(&view);
            dom::add_click_listener(&el, move || {
                if let Some(view) = weak.upgrade() {
                    action(&view);
                }
            });
        }
    }

    // the keyboard listener lives as long as the page and keeps the view alive
    let keys = view.clone();
    dom::listen(document, "keydown", move |ev| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            ModalView::key(&keys, &kev.key());
        }
    });

    Some(view)
}
