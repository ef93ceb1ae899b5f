use glam::Vec2;

use crate::constants::CURSOR_SMOOTHING;

/// Trailing dot that eases toward the pointer each frame.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    pub target: Vec2,
    pub dot: Vec2,
    pub smoothing: f32,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            dot: Vec2::ZERO,
            smoothing: CURSOR_SMOOTHING,
        }
    }
}

impl CursorFollower {
    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.dot += (self.target - self.dot) * self.smoothing;
        self.dot
    }
}
