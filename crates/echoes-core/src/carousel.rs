//! Slide list and navigation for the project preview.
//!
//! A [`CarouselState`] is built from a project's attributes each time the
//! preview opens and is thrown away on the next open. Navigation emits
//! [`Command`]s for the page to carry out; the only state that outlives a
//! call is the active flag and the pending thumbnail timer of each slide.

use std::time::Duration;

use crate::constants::THUMBNAIL_FADE_DELAY;
use crate::effects::{Command, Effects, TimerId};
use crate::media::is_video_link;
use crate::slides::{split_list, Dot, Slide, SlideKind};

#[derive(Clone, Debug)]
pub struct CarouselState {
    title: String,
    slides: Vec<Slide>,
    dots: Vec<Dot>,
    current: usize,
    fade_delay: Duration,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::empty()
    }
}

impl CarouselState {
    /// A carousel with no slides; navigation on it is a no-op.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            slides: Vec::new(),
            dots: Vec::new(),
            current: 0,
            fade_delay: THUMBNAIL_FADE_DELAY,
        }
    }

    /// Build the slide list for one project.
    ///
    /// `images` is the comma-separated image list. A `video` ending in `.mp4`
    /// becomes slide 0 and borrows the first image as its thumbnail. Without
    /// video or images a single placeholder slide is produced.
    pub fn build(images: &str, title: &str, video: Option<&str>) -> Self {
        let sources = split_list(images);
        let mut slides = Vec::with_capacity(sources.len() + 1);

        if let Some(link) = video.filter(|l| is_video_link(l)) {
            slides.push(Slide::new(SlideKind::Video {
                src: link.to_string(),
                thumbnail: sources.first().cloned(),
            }));
        }

        if sources.is_empty() {
            if slides.is_empty() {
                slides.push(Slide::new(SlideKind::Placeholder));
            }
        } else {
            slides.extend(
                sources
                    .into_iter()
                    .map(|src| Slide::new(SlideKind::Image { src })),
            );
        }

        if let Some(first) = slides.first_mut() {
            first.active = true;
        }
        let dots = (0..slides.len())
            .map(|i| Dot {
                target: i,
                active: i == 0,
            })
            .collect();

        log::debug!(
            "[carousel] built {} slide(s) for '{}'",
            slides.len(),
            title
        );
        Self {
            title: title.to_string(),
            slides,
            dots,
            current: 0,
            fade_delay: THUMBNAIL_FADE_DELAY,
        }
    }

    pub fn with_fade_delay(mut self, delay: Duration) -> Self {
        self.fade_delay = delay;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide, `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.current)
    }

    /// Prev/next buttons and the dot strip are only useful with two or more slides.
    pub fn show_controls(&self) -> bool {
        self.slides.len() > 1
    }

    /// Activate the slide at `target`, wrapping in both directions.
    ///
    /// Selecting a video slide (re)starts its presentation even if it was
    /// already active. Any video slide losing focus is stopped.
    pub fn set_slide(&mut self, target: i64, fx: &mut Effects) {
        if self.slides.is_empty() {
            return;
        }
        let n = self.slides.len() as i64;
        self.current = target.rem_euclid(n) as usize;

        for i in 0..self.slides.len() {
            let is_active = i == self.current;
            let was_active = self.slides[i].active;
            self.slides[i].active = is_active;
            fx.push(Command::SetSlideActive {
                index: i,
                active: is_active,
            });
            if !self.slides[i].is_video() {
                continue;
            }
            if is_active {
                self.activate_video(i, fx);
            } else if was_active || self.slides[i].pending_timer.is_some() {
                self.deactivate_video(i, fx);
            }
        }

        let current = self.current;
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.active = i == current;
            fx.push(Command::SetDotActive {
                index: i,
                active: dot.active,
            });
        }
    }

    /// Move relative to the current slide; `-1` is previous, `1` is next.
    pub fn advance(&mut self, step: i64, fx: &mut Effects) {
        let current = self.current as i64;
        self.set_slide(current + step, fx);
    }

    /// Handle a fired timer. Returns `false` when `id` is not a pending fade
    /// timer of this carousel, which covers timers cancelled after they were
    /// already queued by the host.
    pub fn on_timer(&mut self, id: TimerId, fx: &mut Effects) -> bool {
        let Some(index) = self
            .slides
            .iter()
            .position(|s| s.pending_timer == Some(id))
        else {
            return false;
        };
        let slide = &mut self.slides[index];
        slide.pending_timer = None;
        if slide.active {
            fx.push(Command::SetThumbnailVisible {
                index,
                visible: false,
            });
            fx.push(Command::PlayVideo {
                index,
                muted: false,
            });
        }
        true
    }

    /// Cancel every pending fade timer and stop any video that may be
    /// playing. Called before this state is replaced or when the preview
    /// closes.
    pub fn release(&mut self, fx: &mut Effects) {
        for (index, slide) in self.slides.iter_mut().enumerate() {
            let pending = slide.pending_timer.take();
            if let Some(id) = pending {
                fx.cancel(id);
            }
            if slide.is_video() && (slide.active || pending.is_some()) {
                fx.push(Command::StopVideo { index });
            }
        }
    }

    fn activate_video(&mut self, index: usize, fx: &mut Effects) {
        let slide = &mut self.slides[index];
        if let Some(id) = slide.pending_timer.take() {
            fx.cancel(id);
        }
        if slide.has_thumbnail() {
            fx.push(Command::SetThumbnailVisible {
                index,
                visible: true,
            });
            slide.pending_timer = Some(fx.schedule(self.fade_delay));
        } else {
            fx.push(Command::PlayVideo { index, muted: true });
        }
    }

    fn deactivate_video(&mut self, index: usize, fx: &mut Effects) {
        let slide = &mut self.slides[index];
        if let Some(id) = slide.pending_timer.take() {
            fx.cancel(id);
        }
        fx.push(Command::StopVideo { index });
        if slide.has_thumbnail() {
            fx.push(Command::SetThumbnailVisible {
                index,
                visible: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut c = CarouselState::empty();
        let mut fx = Effects::new();
        c.set_slide(3, &mut fx);
        c.advance(-1, &mut fx);
        assert!(fx.is_empty());
        assert_eq!(c.current(), None);
    }

    #[test]
    fn video_without_thumbnail_plays_muted() {
        let mut c = CarouselState::build("", "Demo", Some("clip.MP4"));
        let mut fx = Effects::new();
        c.set_slide(0, &mut fx);
        assert!(fx
            .commands()
            .contains(&Command::PlayVideo { index: 0, muted: true }));
        assert!(c.slides()[0].pending_timer.is_none());
    }
}
