//! Frame-by-frame kinematics for the decorative DOM sprites: the contact
//! form's essence burst, the rising dream motes and the button ripple.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    BURST_FADE_PER_FRAME, BURST_FRAME_STEP, BURST_SPEED_MIN, BURST_SPEED_SPAN, DREAM_DRIFT_SPAN_PX,
    DREAM_RISE_PX, RIPPLE_DURATION_MS, RIPPLE_MAX_SIZE_PX,
};

#[derive(Clone, Copy, Debug)]
pub struct BurstSprite {
    pub velocity: Vec2,
    pub offset: Vec2,
    pub opacity: f32,
}

impl BurstSprite {
    /// Advance one frame; `false` once fully faded.
    pub fn step(&mut self) -> bool {
        self.offset += self.velocity * BURST_FRAME_STEP;
        self.opacity -= BURST_FADE_PER_FRAME;
        self.opacity > 0.0
    }
}

/// `count` sprites spread evenly around a circle with random speeds.
pub fn essence_burst(count: usize, rng: &mut impl Rng) -> Vec<BurstSprite> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            let speed = BURST_SPEED_MIN + rng.gen::<f32>() * BURST_SPEED_SPAN;
            BurstSprite {
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                offset: Vec2::ZERO,
                opacity: 1.0,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct DreamMote {
    pub size_px: f32,
    pub left_pct: f32,
    pub start_opacity: f32,
    pub duration_ms: f64,
    pub drift_px: f32,
}

impl DreamMote {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            size_px: rng.gen::<f32>() * 6.0 + 4.0,
            left_pct: rng.gen::<f32>() * 100.0,
            start_opacity: rng.gen::<f32>() * 0.5 + 0.3,
            duration_ms: rng.gen::<f64>() * 3000.0 + 3000.0,
            drift_px: (rng.gen::<f32>() - 0.5) * DREAM_DRIFT_SPAN_PX,
        }
    }

    /// Translation and opacity at `elapsed_ms`, or `None` once finished.
    pub fn sample(&self, elapsed_ms: f64) -> Option<(Vec2, f32)> {
        if elapsed_ms >= self.duration_ms {
            return None;
        }
        let t = ease_out((elapsed_ms / self.duration_ms) as f32);
        let offset = Vec2::new(self.drift_px * t, -DREAM_RISE_PX * t);
        Some((offset, self.start_opacity * (1.0 - t)))
    }
}

/// Ripple diameter and opacity at `elapsed_ms`, or `None` once finished.
pub fn ripple_frame(elapsed_ms: f64) -> Option<(f32, f32)> {
    if elapsed_ms >= RIPPLE_DURATION_MS {
        return None;
    }
    let t = ease_out((elapsed_ms / RIPPLE_DURATION_MS) as f32);
    Some((RIPPLE_MAX_SIZE_PX * t, 1.0 - t))
}

#[inline]
fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}
