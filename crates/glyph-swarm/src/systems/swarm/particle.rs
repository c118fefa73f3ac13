//! A single glyph particle: spring toward a target plus a damped impulse term.

use glam::Vec2;

use super::rng::Rng;
use crate::api::config::Feel;

/// Per-particle spring and damping coefficients, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFeel {
    pub ease: f32,
    pub friction: f32,
}

impl ParticleFeel {
    /// Resolve a configured feel into concrete coefficients for one particle.
    pub fn draw(feel: &Feel, rng: &mut Rng) -> Self {
        match *feel {
            Feel::Fixed { ease, friction } => Self { ease, friction },
            Feel::Randomized { ease, friction } => Self {
                ease: rng.range(ease.0, ease.1),
                friction: rng.range(friction.0, friction.1),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleState {
    /// Still converging on its target.
    Active,
    /// Snapped onto its target; stays put until the target moves away.
    Settled,
}

/// Shared per-tick parameters, identical for every particle in a swarm.
#[derive(Debug, Clone, Copy)]
pub struct MotionParams {
    /// Squared distance under which the impulse is applied.
    pub influence_radius: f32,
    /// Fraction of the weight gap closed each tick.
    pub weight_easing: f32,
    /// Snap threshold (squared distance); `None` disables settling.
    pub settle_distance_sq: Option<f32>,
}

/// A single glyph particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub target: Vec2,
    pub velocity: Vec2,
    /// Current weight, eased toward `target_weight` every tick.
    pub weight: f32,
    pub target_weight: f32,
    pub feel: ParticleFeel,
    pub glyph: char,
    pub state: ParticleState,
}

impl Particle {
    pub fn new(position: Vec2, target: Vec2, weight: f32, feel: ParticleFeel, glyph: char) -> Self {
        Particle {
            position,
            target,
            velocity: Vec2::ZERO,
            weight,
            target_weight: weight,
            feel,
            glyph,
            state: ParticleState::Active,
        }
    }

    /// Point the particle at a new target. Position, velocity and state are kept.
    pub fn retarget(&mut self, target: Vec2, weight: Option<f32>) {
        self.target = target;
        if let Some(w) = weight {
            self.target_weight = w;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.state == ParticleState::Settled
    }

    /// Advance one frame.
    pub fn update(&mut self, params: &MotionParams) {
        let delta = self.target - self.position;
        let distance_sq = delta.length_squared();

        self.weight += (self.target_weight - self.weight) * params.weight_easing;

        if let Some(threshold) = params.settle_distance_sq {
            if distance_sq < threshold {
                self.position = self.target;
                self.weight = self.target_weight;
                self.velocity = Vec2::ZERO;
                self.state = ParticleState::Settled;
                return;
            }
        }
        self.state = ParticleState::Active;

        // +1 keeps the scalar finite when the particle sits on its target.
        let force = -params.influence_radius / (distance_sq + 1.0);
        if distance_sq < params.influence_radius {
            let angle = delta.y.atan2(delta.x);
            self.velocity += Vec2::new(angle.cos(), angle.sin()) * force;
        }

        self.position += delta * self.feel.ease + self.velocity * self.feel.friction;
    }
}
