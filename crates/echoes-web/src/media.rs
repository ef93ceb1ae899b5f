use echoes_core::constants::VIDEO_READY_STATE_PLAYABLE;
use echoes_core::page::{preload_plan, PreloadItem};
use echoes_core::{MediaError, VideoCache};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::PROJECT_TRIGGER;
use crate::dom;

pub type SharedVideoCache = Rc<RefCell<VideoCache<web::HtmlVideoElement>>>;

fn new_video(src: &str, muted: bool) -> Option<web::HtmlVideoElement> {
    let document = dom::window_document()?;
    let video = document
        .create_element("video")
        .ok()?
        .dyn_into::<web::HtmlVideoElement>()
        .ok()?;
    video.set_src(src);
    video.set_preload("auto");
    video.set_autoplay(false);
    video.set_muted(muted);
    video.set_loop(true);
    _ = video.set_attribute("playsinline", "");
    Some(video)
}

/// Cached video element for `src`, created unmuted for the preview on a miss.
pub fn video_for(
    cache: &SharedVideoCache,
    src: &str,
    label: &str,
) -> Option<web::HtmlVideoElement> {
    if let Some(v) = cache.borrow().get(src) {
        return Some(v);
    }
    let video = new_video(src, false)?;
    _ = video.set_attribute("aria-label", label);
    Some(cache.borrow_mut().get_or_insert_with(src, |_| video))
}

#[inline]
pub fn is_playable(video: &web::HtmlVideoElement) -> bool {
    video.ready_state() >= VIDEO_READY_STATE_PLAYABLE
}

/// Ask the element to play. A refusal that arrives later through the
/// returned promise is logged and dropped.
pub fn start_playback(video: &web::HtmlVideoElement, muted: bool) -> Result<(), MediaError> {
    if muted {
        video.set_muted(true);
    }
    let promise = video
        .play()
        .map_err(|e| MediaError::PlaybackRefused(format!("{:?}", e)))?;
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("[media] playback refused: {:?}", e);
        }
    });
    Ok(())
}

/// Pause and rewind to the start.
pub fn stop_playback(video: &web::HtmlVideoElement) -> Result<(), MediaError> {
    video
        .pause()
        .map_err(|e| MediaError::Unavailable(format!("{:?}", e)))?;
    video.set_current_time(0.0);
    Ok(())
}

/// Warm the cache and the browser's image cache for the first few projects.
pub fn preload_projects(document: &web::Document, cache: &SharedVideoCache) {
    let projects: Vec<_> = dom::query_all(document, PROJECT_TRIGGER)
        .iter()
        .map(|el| (el.get_attribute("data-link"), el.get_attribute("data-images")))
        .collect();
    for item in preload_plan(&projects) {
        match item {
            PreloadItem::Video { project, src } => {
                if cache.borrow().contains(&src) {
                    continue;
                }
                // created muted and left muted; the preview plays the cached element as is
                if let Some(video) = new_video(&src, true) {
                    cache.borrow_mut().get_or_insert_with(&src, |_| video);
                    log::info!("[preload] project {} video {}", project + 1, src);
                }
            }
            PreloadItem::Image { project, src } => {
                if let Ok(img) = web::HtmlImageElement::new() {
                    img.set_src(&src);
                    log::debug!("[preload] project {} image {}", project + 1, src);
                }
            }
        }
    }
}
