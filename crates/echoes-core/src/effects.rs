//! Side effects requested by the carousel and the modal sequencer.
//!
//! Core state machines never touch the page. Each operation appends
//! [`Command`]s to an [`Effects`] sink owned by the caller, which drains it
//! and performs the work against the DOM. Timers are identified by
//! [`TimerId`]s allocated from the same sink, so ids stay unique for the
//! lifetime of the page even as carousels are rebuilt.

use std::time::Duration;

/// Opaque handle for a timer requested through [`Effects::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    // carousel
    SetSlideActive { index: usize, active: bool },
    SetDotActive { index: usize, active: bool },
    SetThumbnailVisible { index: usize, visible: bool },
    PlayVideo { index: usize, muted: bool },
    StopVideo { index: usize },

    // timers
    ScheduleTimer { id: TimerId, delay: Duration },
    CancelTimer { id: TimerId },

    // modal
    ShowLoading,
    HideLoading,
    LockScroll,
    RestoreScroll,
    RevealModal,
    MarkShown,
    MarkHidden,
    HideModal,
    StopAllVideos,
    RequestFrame,
    WatchFirstSlideMedia,
}

#[derive(Debug, Default)]
pub struct Effects {
    next_timer: u64,
    commands: Vec<Command>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Allocate a fresh timer id and request that the host fire it after `delay`.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.commands.push(Command::ScheduleTimer { id, delay });
        id
    }

    #[inline]
    pub fn cancel(&mut self, id: TimerId) {
        self.commands.push(Command::CancelTimer { id });
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take every pending command, leaving the sink empty. Timer ids keep counting.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ids_stay_unique_across_takes() {
        let mut fx = Effects::new();
        let a = fx.schedule(Duration::from_millis(10));
        let _ = fx.take();
        let b = fx.schedule(Duration::from_millis(10));
        assert_ne!(a, b);
        assert_eq!(
            fx.commands(),
            &[Command::ScheduleTimer {
                id: b,
                delay: Duration::from_millis(10)
            }]
        );
    }
}
