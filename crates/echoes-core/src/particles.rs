use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    PARTICLE_COUNT, PARTICLE_EDGE_MARGIN, PARTICLE_OPACITY_CEIL, PARTICLE_OPACITY_FLOOR,
};

/// Random ranges for spawning background particles, as `(min, span)` pairs.
#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub size: (f32, f32),
    pub fall_speed: (f32, f32),
    pub drift_span: f32, // horizontal speed in [-span/2, span/2]
    pub opacity: (f32, f32),
    pub fade_speed: (f32, f32),
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            size: (1.0, 2.0),
            fall_speed: (0.2, 0.5),
            drift_span: 0.3,
            opacity: (0.2, 0.5),
            fade_speed: (0.001, 0.002),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub fade_speed: f32,
    pub fade_dir: f32,
}

impl Particle {
    fn spawn(params: &ParticleParams, width: f32, rng: &mut StdRng) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, -PARTICLE_EDGE_MARGIN),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * params.drift_span,
                params.fall_speed.0 + rng.gen::<f32>() * params.fall_speed.1,
            ),
            size: params.size.0 + rng.gen::<f32>() * params.size.1,
            opacity: params.opacity.0 + rng.gen::<f32>() * params.opacity.1,
            fade_speed: params.fade_speed.0 + rng.gen::<f32>() * params.fade_speed.1,
            fade_dir: if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 },
        }
    }

    #[inline]
    fn out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.pos.y > height + PARTICLE_EDGE_MARGIN
            || self.pos.x < -PARTICLE_EDGE_MARGIN
            || self.pos.x > width + PARTICLE_EDGE_MARGIN
    }

    /// Fill color with the particle's current opacity.
    pub fn fill_style(&self) -> String {
        format!("rgba(203, 213, 225, {:.3})", self.opacity)
    }
}

/// Slowly falling, pulsing motes drawn behind the page.
pub struct ParticleField {
    particles: Vec<Particle>,
    params: ParticleParams,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_params(PARTICLE_COUNT, ParticleParams::default(), width, height, seed)
    }

    pub fn with_params(
        count: usize,
        params: ParticleParams,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // First generation is scattered over the whole canvas instead of the top edge
        let particles = (0..count)
            .map(|_| {
                let mut p = Particle::spawn(&params, width, &mut rng);
                p.pos.y = rng.gen::<f32>() * height;
                p
            })
            .collect();
        Self {
            particles,
            params,
            width,
            height,
            rng,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.opacity += p.fade_speed * p.fade_dir;
            if p.opacity <= PARTICLE_OPACITY_FLOOR || p.opacity >= PARTICLE_OPACITY_CEIL {
                p.fade_dir = -p.fade_dir;
            }
            if p.out_of_bounds(self.width, self.height) {
                *p = Particle::spawn(&self.params, self.width, &mut self.rng);
            }
        }
    }
}
