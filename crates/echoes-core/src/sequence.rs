//! Open/close sequencing for the preview modal.
//!
//! Opening shows a loading indicator, waits one animation frame, then waits
//! for the first slide's media before activating it and hiding the
//! indicator. Every path ends in [`Command::HideLoading`], and a hard
//! fallback bounds the wait when media never becomes ready.

use std::time::Duration;

use crate::constants::{
    CLOSE_TRANSITION, OPEN_SETTLE_DELAY, READY_FALLBACK_DELAY, READY_GRACE_DELAY,
    THUMBNAIL_FADE_DELAY,
};
use crate::effects::{Command, Effects, TimerId};

/// Delays used by the modal and carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceTimings {
    pub thumbnail_fade: Duration,
    pub settle: Duration,
    pub ready_grace: Duration,
    pub ready_fallback: Duration,
    pub close_transition: Duration,
}

impl Default for SequenceTimings {
    fn default() -> Self {
        Self {
            thumbnail_fade: THUMBNAIL_FADE_DELAY,
            settle: OPEN_SETTLE_DELAY,
            ready_grace: READY_GRACE_DELAY,
            ready_fallback: READY_FALLBACK_DELAY,
            close_transition: CLOSE_TRANSITION,
        }
    }
}

/// What the first slide holds when the modal becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstSlideMedia {
    NoSlides,
    Placeholder,
    Video { ready: bool },
    Image { loaded: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpenPhase {
    #[default]
    Idle,
    Loading,
    ReadyNoMedia,
    ReadyVideoBuffered,
    ReadyVideoPending,
    ReadyImageLoaded,
    ReadyImagePending,
    Settled,
}

impl OpenPhase {
    fn is_pending(self) -> bool {
        matches!(self, OpenPhase::ReadyVideoPending | OpenPhase::ReadyImagePending)
    }
}

#[derive(Debug, Default)]
pub struct OpenSequence {
    phase: OpenPhase,
    settle_timer: Option<TimerId>,
    fallback_timer: Option<TimerId>,
    activate_on_settle: bool,
}

impl OpenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> OpenPhase {
        self.phase
    }

    /// Show the indicator and the modal container, then wait for a frame.
    pub fn begin(&mut self, fx: &mut Effects) {
        self.cancel(fx);
        self.phase = OpenPhase::Loading;
        fx.push(Command::LockScroll);
        fx.push(Command::ShowLoading);
        fx.push(Command::RevealModal);
        fx.push(Command::RequestFrame);
    }

    /// The frame after [`begin`](Self::begin): start the show transition and
    /// decide how long to wait for the first slide.
    pub fn frame_shown(
        &mut self,
        first: FirstSlideMedia,
        timings: &SequenceTimings,
        fx: &mut Effects,
    ) {
        if self.phase != OpenPhase::Loading {
            return;
        }
        fx.push(Command::MarkShown);
        let (phase, activate) = match first {
            FirstSlideMedia::NoSlides | FirstSlideMedia::Placeholder => {
                (OpenPhase::ReadyNoMedia, false)
            }
            FirstSlideMedia::Video { ready: true } => (OpenPhase::ReadyVideoBuffered, true),
            FirstSlideMedia::Video { ready: false } => (OpenPhase::ReadyVideoPending, true),
            FirstSlideMedia::Image { loaded: true } => (OpenPhase::ReadyImageLoaded, true),
            FirstSlideMedia::Image { loaded: false } => (OpenPhase::ReadyImagePending, true),
        };
        self.phase = phase;
        self.activate_on_settle = activate;
        if phase.is_pending() {
            fx.push(Command::WatchFirstSlideMedia);
            self.fallback_timer = Some(fx.schedule(timings.ready_fallback));
        } else {
            self.settle_timer = Some(fx.schedule(timings.settle));
        }
        log::debug!("[modal] first slide {:?} -> {:?}", first, phase);
    }

    /// The first slide's media reported it can be shown. Only the first
    /// report counts, and only while the fallback is still pending.
    pub fn media_ready(&mut self, timings: &SequenceTimings, fx: &mut Effects) {
        if !self.phase.is_pending() || self.settle_timer.is_some() {
            return;
        }
        if let Some(id) = self.fallback_timer.take() {
            fx.cancel(id);
        }
        self.settle_timer = Some(fx.schedule(timings.ready_grace));
    }

    /// Handle a fired timer. When it settles the sequence, `activate` runs
    /// (if the first slide needs it) before the indicator is hidden.
    /// Returns `false` for timers this sequence does not own.
    pub fn on_timer(
        &mut self,
        id: TimerId,
        fx: &mut Effects,
        activate: impl FnOnce(&mut Effects),
    ) -> bool {
        let settled_by_ready = self.settle_timer == Some(id);
        let settled_by_fallback = self.fallback_timer == Some(id);
        if !settled_by_ready && !settled_by_fallback {
            return false;
        }
        if settled_by_fallback {
            log::info!("[modal] media not ready in time, revealing anyway");
        }
        self.settle_timer = None;
        self.fallback_timer = None;
        self.phase = OpenPhase::Settled;
        if self.activate_on_settle {
            activate(fx);
        }
        fx.push(Command::HideLoading);
        true
    }

    /// Drop any pending wait. An indicator still showing is hidden here
    /// since no settle timer is left to do it.
    pub fn cancel(&mut self, fx: &mut Effects) {
        for id in [self.settle_timer.take(), self.fallback_timer.take()]
            .into_iter()
            .flatten()
        {
            fx.cancel(id);
        }
        if !matches!(self.phase, OpenPhase::Idle | OpenPhase::Settled) {
            fx.push(Command::HideLoading);
        }
        self.phase = OpenPhase::Idle;
        self.activate_on_settle = false;
    }
}

/// Exit transition: hide after the CSS transition has had time to run.
#[derive(Debug, Default)]
pub struct CloseSequence {
    timer: Option<TimerId>,
}

impl CloseSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    pub fn begin(&mut self, timings: &SequenceTimings, fx: &mut Effects) {
        if let Some(id) = self.timer.take() {
            fx.cancel(id);
        }
        fx.push(Command::MarkHidden);
        self.timer = Some(fx.schedule(timings.close_transition));
    }

    pub fn on_timer(&mut self, id: TimerId, fx: &mut Effects) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.timer = None;
        fx.push(Command::StopAllVideos);
        fx.push(Command::HideModal);
        fx.push(Command::RestoreScroll);
        true
    }

    pub fn cancel(&mut self, fx: &mut Effects) {
        if let Some(id) = self.timer.take() {
            fx.cancel(id);
        }
    }
}
