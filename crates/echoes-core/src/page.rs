//! Small pure helpers behind the page chrome: project filter tabs,
//! navigation highlight, hero subtitle rotation and media preloading.

use crate::constants::{
    FILTER_ALL, FILTER_STAGGER_MS, NAV_SECTION_OFFSET, PARALLAX_FACTOR, PRELOAD_PROJECT_LIMIT,
};
use crate::media::is_video_link;
use crate::slides::split_list;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVisibility {
    Show { delay_ms: u32 },
    Hide,
}

/// Visibility of each project card for `filter`. Matching cards reveal in a
/// stagger keyed by their position in the full list.
pub fn filter_cards(filter: &str, categories: &[Option<String>]) -> Vec<CardVisibility> {
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            if filter == FILTER_ALL || category.as_deref() == Some(filter) {
                CardVisibility::Show {
                    delay_ms: i as u32 * FILTER_STAGGER_MS,
                }
            } else {
                CardVisibility::Hide
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the page is scrolled into. When ranges overlap the
/// later section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - NAV_SECTION_OFFSET;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// Cycles through a fixed list of subtitles.
#[derive(Clone, Debug)]
pub struct TextRotator {
    texts: Vec<String>,
    index: usize,
}

impl TextRotator {
    pub fn new<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.texts.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) -> Option<&str> {
        if self.texts.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.texts.len();
        self.current()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreloadItem {
    Video { project: usize, src: String },
    Image { project: usize, src: String },
}

/// Media worth warming up after load: videos and images of the first few projects.
/// Each entry is a project's `(link, images)` attribute pair.
pub fn preload_plan(projects: &[(Option<String>, Option<String>)]) -> Vec<PreloadItem> {
    let mut items = Vec::new();
    for (project, (link, images)) in projects.iter().take(PRELOAD_PROJECT_LIMIT).enumerate() {
        if let Some(link) = link.as_deref().filter(|l| is_video_link(l)) {
            items.push(PreloadItem::Video {
                project,
                src: link.to_string(),
            });
        }
        if let Some(images) = images.as_deref() {
            items.extend(
                split_list(images)
                    .into_iter()
                    .map(|src| PreloadItem::Image { project, src }),
            );
        }
    }
    items
}
