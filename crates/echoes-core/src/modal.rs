//! The project preview modal: project details plus the carousel and the
//! open/close sequences that drive it.

use smallvec::SmallVec;

use crate::carousel::CarouselState;
use crate::constants::{DEFAULT_PROJECT_DESCRIPTION, DEFAULT_PROJECT_TITLE, PLACEHOLDER_HREF};
use crate::effects::{Effects, TimerId};
use crate::sequence::{CloseSequence, FirstSlideMedia, OpenSequence, SequenceTimings};
use crate::slides::{split_list, SlideKind};

/// Attributes read from a project's "view" trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub images: Option<String>,
    pub link: Option<String>,
    pub repo: Option<String>,
}

/// Target of the modal's action button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLink {
    pub href: String,
    pub new_tab: bool,
}

fn non_placeholder(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != PLACEHOLDER_HREF)
}

impl ProjectDetails {
    /// Read every `data-*` attribute through `attr`.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            title: attr("data-title"),
            description: attr("data-description"),
            tags: attr("data-tags"),
            images: attr("data-images"),
            link: attr("data-link"),
            repo: attr("data-repo"),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PROJECT_TITLE)
    }

    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_PROJECT_DESCRIPTION)
    }

    pub fn tag_list(&self) -> SmallVec<[String; 4]> {
        self.tags.as_deref().map(split_list).unwrap_or_default()
    }

    /// Repository first (new tab), then the media link (same tab), else none.
    pub fn action_link(&self) -> Option<ActionLink> {
        if let Some(repo) = non_placeholder(&self.repo) {
            return Some(ActionLink {
                href: repo.to_string(),
                new_tab: true,
            });
        }
        non_placeholder(&self.link).map(|link| ActionLink {
            href: link.to_string(),
            new_tab: false,
        })
    }

    pub fn build_carousel(&self) -> CarouselState {
        CarouselState::build(
            self.images.as_deref().unwrap_or_default(),
            self.title.as_deref().unwrap_or_default(),
            self.link.as_deref(),
        )
    }
}

/// Per-page modal controller. Owns the current carousel and routes fired
/// timers to whichever part scheduled them.
#[derive(Debug)]
pub struct ProjectModal {
    timings: SequenceTimings,
    carousel: CarouselState,
    open_seq: OpenSequence,
    close_seq: CloseSequence,
    hidden: bool,
}

impl Default for ProjectModal {
    fn default() -> Self {
        Self::new(SequenceTimings::default())
    }
}

impl ProjectModal {
    pub fn new(timings: SequenceTimings) -> Self {
        Self {
            timings,
            carousel: CarouselState::empty(),
            open_seq: OpenSequence::new(),
            close_seq: CloseSequence::new(),
            hidden: true,
        }
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn open_sequence(&self) -> &OpenSequence {
        &self.open_seq
    }

    /// True until the modal is opened, and again once closing finishes.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Replace the carousel with one built for `details` and start opening.
    pub fn open(&mut self, details: &ProjectDetails, fx: &mut Effects) {
        self.carousel.release(fx);
        self.close_seq.cancel(fx);
        self.carousel = details
            .build_carousel()
            .with_fade_delay(self.timings.thumbnail_fade);
        self.hidden = false;
        log::info!(
            "[modal] opening '{}' with {} slide(s)",
            details.display_title(),
            self.carousel.len()
        );
        self.open_seq.begin(fx);
    }

    /// Describe the first slide using readiness reported by the page.
    pub fn first_slide_media(&self, video_ready: bool, image_loaded: bool) -> FirstSlideMedia {
        match self.carousel.slides().first().map(|s| &s.kind) {
            None => FirstSlideMedia::NoSlides,
            Some(SlideKind::Placeholder) => FirstSlideMedia::Placeholder,
            Some(SlideKind::Video { .. }) => FirstSlideMedia::Video { ready: video_ready },
            Some(SlideKind::Image { .. }) => FirstSlideMedia::Image {
                loaded: image_loaded,
            },
        }
    }

    pub fn frame_shown(&mut self, first: FirstSlideMedia, fx: &mut Effects) {
        self.open_seq.frame_shown(first, &self.timings, fx);
    }

    pub fn media_ready(&mut self, fx: &mut Effects) {
        self.open_seq.media_ready(&self.timings, fx);
    }

    pub fn close(&mut self, fx: &mut Effects) {
        if self.hidden {
            return;
        }
        self.open_seq.cancel(fx);
        self.carousel.release(fx);
        self.close_seq.begin(&self.timings, fx);
    }

    pub fn set_slide(&mut self, target: i64, fx: &mut Effects) {
        self.carousel.set_slide(target, fx);
    }

    pub fn advance(&mut self, step: i64, fx: &mut Effects) {
        self.carousel.advance(step, fx);
    }

    /// Keyboard shortcuts while the modal is showing. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str, fx: &mut Effects) -> bool {
        if self.hidden {
            return false;
        }
        match key {
            "Escape" => self.close(fx),
            "ArrowRight" => self.advance(1, fx),
            "ArrowLeft" => self.advance(-1, fx),
            _ => return false,
        }
        true
    }

    pub fn on_timer(&mut self, id: TimerId, fx: &mut Effects) {
        if self.carousel.on_timer(id, fx) {
            return;
        }
        let carousel = &mut self.carousel;
        if self.open_seq.on_timer(id, fx, |fx| {
            let current = carousel.current().unwrap_or(0) as i64;
            carousel.set_slide(current, fx);
        }) {
            return;
        }
        if self.close_seq.on_timer(id, fx) {
            self.hidden = true;
            log::debug!("[modal] closed");
        }
    }
}
