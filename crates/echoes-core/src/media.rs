use fnv::FnvHashMap;
use thiserror::Error;

use crate::constants::VIDEO_SUFFIX;

/// Failures of best-effort media operations. Callers are expected to log
/// and discard these; none of them reach the visitor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("playback refused: {0}")]
    PlaybackRefused(String),
    #[error("media element unavailable: {0}")]
    Unavailable(String),
}

/// True when `link` names an mp4 video (case-insensitive, surrounding whitespace ignored).
pub fn is_video_link(link: &str) -> bool {
    let link = link.trim();
    !link.is_empty() && link.to_ascii_lowercase().ends_with(VIDEO_SUFFIX)
}

/// Playable video handles keyed by source URL.
///
/// Lives for the whole page session and is shared by the preview modal and
/// the preloader. A hit hands back the same handle (cloning a DOM element
/// reference keeps its identity), so buffered data and playback position
/// survive repeated opens of the same project.
#[derive(Debug)]
pub struct VideoCache<H> {
    entries: FnvHashMap<String, H>,
}

impl<H> Default for VideoCache<H> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<H: Clone> VideoCache<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<H> {
        self.entries.get(url).cloned()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Return the cached handle for `url`, building one with `make` on a miss.
    pub fn get_or_insert_with(&mut self, url: &str, make: impl FnOnce(&str) -> H) -> H {
        if let Some(h) = self.entries.get(url) {
            return h.clone();
        }
        log::debug!("[media] caching video {}", url);
        let handle = make(url);
        self.entries.insert(url.to_string(), handle.clone());
        handle
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
