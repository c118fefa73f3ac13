//! Swarm controller: owns the live particles, retargets them when the
//! content changes, and advances and draws them every frame.
//!
//! Particle identity is positional. Slot `i` always follows sample `i` of the
//! most recent retarget; particles are never removed, so the swarm only grows.
//! When new content has fewer samples than there are particles, the surplus
//! drifts off toward random points in the viewport.

mod rng;
mod glyphs;
mod particle;

pub use rng::Rng;
pub use glyphs::{glyph_for_weight, GlyphSet};
pub use particle::{MotionParams, Particle, ParticleFeel, ParticleState};

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::{Seeding, SwarmConfig};
use crate::assets::playlist::{ContentItem, Playlist};
use crate::core::time::TransitionTimer;
use crate::input::queue::{InputEvent, InputQueue, PointerState};
use crate::renderer::instance::{DrawCommand, GlyphBuffer};
use crate::systems::sampling::{GlyphSampler, MaskRasterizer, Sample, VectorRasterizer};

/// The live collection of glyph particles and the playlist driving them.
pub struct Swarm<R: MaskRasterizer = VectorRasterizer> {
    config: SwarmConfig,
    playlist: Playlist,
    sampler: GlyphSampler<R>,
    glyphs: GlyphSet,
    particles: Vec<Particle>,
    pointer: PointerState,
    timer: TransitionTimer,
    current: usize,
    width: u32,
    height: u32,
    rng: Rng,
    buffer: GlyphBuffer,
}

impl Swarm<VectorRasterizer> {
    /// Create a swarm using the built-in rasterizer and form the first
    /// playlist item immediately.
    pub fn new(config: SwarmConfig, playlist: Playlist, width: u32, height: u32, seed: u64) -> Self {
        Self::with_rasterizer(config, playlist, VectorRasterizer, width, height, seed)
    }
}

impl<R: MaskRasterizer> Swarm<R> {
    /// Create a swarm with a host-supplied mask rasterizer.
    pub fn with_rasterizer(
        config: SwarmConfig,
        playlist: Playlist,
        rasterizer: R,
        width: u32,
        height: u32,
        seed: u64,
    ) -> Self {
        let mut swarm = Self {
            sampler: GlyphSampler::with_rasterizer(rasterizer, config.font_size),
            glyphs: GlyphSet::from_mode(&config.glyph_mode),
            pointer: PointerState::new(config.influence_radius),
            timer: TransitionTimer::new(config.transition_interval_ms),
            particles: Vec::new(),
            current: 0,
            width,
            height,
            rng: Rng::new(seed),
            buffer: GlyphBuffer::new(),
            config,
            playlist,
        };
        swarm.retarget_current();
        swarm
    }

    /// Re-sample `content` at the current viewport and redirect the swarm.
    ///
    /// Existing particles keep their position, velocity and state and only
    /// get a new target; missing slots are spawned; surplus slots drift to
    /// random points.
    pub fn retarget(&mut self, content: &ContentItem) {
        let samples = self
            .sampler
            .sample(content, self.width, self.height, self.config.pitch());
        if samples.is_empty() {
            log::warn!("{} produced no samples; every particle drifts", content);
        }

        let before = self.particles.len();
        self.apply_samples(&samples);

        log::debug!(
            "retarget {}: {} samples, {} particles ({} new, {} surplus)",
            content,
            samples.len(),
            self.particles.len(),
            self.particles.len() - before,
            self.particles.len() - samples.len(),
        );
    }

    fn apply_samples(&mut self, samples: &[Sample]) {
        for (i, sample) in samples.iter().enumerate() {
            if i < self.particles.len() {
                self.particles[i].retarget(sample.position, Some(sample.weight));
            } else {
                let particle = self.spawn(sample);
                self.particles.push(particle);
            }
        }

        for i in samples.len()..self.particles.len() {
            let target = self.random_point();
            self.particles[i].retarget(target, None);
        }
    }

    fn spawn(&mut self, sample: &Sample) -> Particle {
        let position = match self.config.seeding {
            Seeding::NearTarget { min_offset, max_offset } => {
                let angle = self.rng.next_f32() * TAU;
                let distance = self.rng.range(min_offset, max_offset);
                sample.position + Vec2::new(angle.cos(), angle.sin()) * distance
            }
            Seeding::Viewport => self.random_point(),
        };
        let feel = ParticleFeel::draw(&self.config.feel, &mut self.rng);
        let glyph = self.glyphs.initial(sample.weight, &mut self.rng);
        Particle::new(position, sample.position, sample.weight, feel, glyph)
    }

    fn random_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.next_f32() * self.width as f32,
            self.rng.next_f32() * self.height as f32,
        )
    }

    fn retarget_current(&mut self) {
        match self.playlist.get(self.current).cloned() {
            Some(content) => self.retarget(&content),
            None => log::warn!("playlist is empty; swarm has nothing to form"),
        }
    }

    /// Run one frame: fire a due transition, then update and draw every
    /// particle in slot order.
    pub fn tick(&mut self, now_ms: f64) {
        if self.timer.is_due(now_ms) {
            self.advance(now_ms);
        }

        let params = self.motion_params();
        let font_size = self.config.pitch() as f32;
        self.buffer.clear();
        for particle in &mut self.particles {
            particle.update(&params);
            particle.glyph = self
                .glyphs
                .refresh(particle.glyph, particle.weight, &mut self.rng);
            self.buffer.push(DrawCommand {
                glyph: particle.glyph,
                position: particle.position,
                font_size,
                color: self.config.color,
            });
        }
    }

    /// Move to the next playlist item now and restart the transition clock.
    pub fn advance(&mut self, now_ms: f64) {
        self.timer.reset(now_ms);
        if self.playlist.is_empty() {
            log::warn!("playlist is empty; nothing to advance to");
            return;
        }
        self.current = self.playlist.next_index(self.current);
        if let Some(content) = self.playlist.get(self.current) {
            log::info!("playlist -> #{} ({})", self.current, content);
        }
        self.retarget_current();
    }

    /// Adopt a new viewport size and re-sample the current item at that size.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::info!("viewport resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.retarget_current();
    }

    /// Record the latest pointer position.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    /// Apply queued host events in arrival order.
    pub fn handle_input(&mut self, input: &InputQueue, now_ms: f64) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => self.set_pointer(x, y),
                InputEvent::PointerDown { .. } | InputEvent::Advance => self.advance(now_ms),
                InputEvent::Resize { width, height } => self.resize(width, height),
            }
        }
    }

    fn motion_params(&self) -> MotionParams {
        MotionParams {
            influence_radius: self.pointer.influence_radius,
            weight_easing: self.config.weight_easing,
            settle_distance_sq: self.config.settle.then_some(self.config.settle_distance_sq),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Draw output of the most recent tick.
    pub fn buffer(&self) -> &GlyphBuffer {
        &self.buffer
    }

    pub fn draw_commands(&self) -> &[DrawCommand] {
        self.buffer.commands()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_content(&self) -> Option<&ContentItem> {
        self.playlist.get(self.current)
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn last_transition(&self) -> f64 {
        self.timer.last_transition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GlyphColor;
    use crate::systems::sampling::ShapeKind;

    const W: u32 = 640;
    const H: u32 = 400;

    fn sample_len(content: &ContentItem, w: u32, h: u32) -> usize {
        GlyphSampler::new(100.0).sample(content, w, h, 6).len()
    }

    fn swarm(config: SwarmConfig) -> Swarm {
        Swarm::new(config, Playlist::default(), W, H, 42)
    }

    #[test]
    fn new_swarm_forms_first_item() {
        let s = swarm(SwarmConfig::default());
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.particle_count(), sample_len(&ContentItem::text("DOG"), W, H));
        assert!(s.particle_count() > 0);
    }

    #[test]
    fn particle_count_is_running_maximum() {
        let mut s = swarm(SwarmConfig::default());
        let mut max_seen = s.particle_count();
        let sequence = [
            ContentItem::Shape(ShapeKind::Heart),
            ContentItem::text("I"),
            ContentItem::text("€"),
            ContentItem::Shape(ShapeKind::Star),
            ContentItem::text("CAT"),
        ];
        for content in &sequence {
            s.retarget(content);
            max_seen = max_seen.max(sample_len(content, W, H));
            assert_eq!(s.particle_count(), max_seen, "after {}", content);
        }
    }

    #[test]
    fn slots_follow_samples_by_index() {
        let mut s = swarm(SwarmConfig::default());
        let content = ContentItem::Shape(ShapeKind::Dog);
        let samples = GlyphSampler::new(100.0).sample(&content, W, H, 6);
        s.retarget(&content);
        for (particle, sample) in s.particles().iter().zip(&samples) {
            assert_eq!(particle.target, sample.position);
            assert_eq!(particle.target_weight, sample.weight);
        }
    }

    #[test]
    fn surplus_particles_drift_inside_viewport() {
        let mut s = swarm(SwarmConfig::default());
        s.retarget(&ContentItem::Shape(ShapeKind::Heart));
        let big = s.particle_count();
        let content = ContentItem::text("I");
        let small = sample_len(&content, W, H);
        assert!(small < big);

        s.retarget(&content);
        assert_eq!(s.particle_count(), big);
        for p in &s.particles()[small..] {
            assert!(p.target.x >= 0.0 && p.target.x < W as f32);
            assert!(p.target.y >= 0.0 && p.target.y < H as f32);
        }
    }

    #[test]
    fn empty_content_sends_everyone_drifting() {
        let mut s = swarm(SwarmConfig::default());
        let count = s.particle_count();
        s.retarget(&ContentItem::text("€"));
        assert_eq!(s.particle_count(), count);
        for p in s.particles() {
            assert!(p.target.x >= 0.0 && p.target.x < W as f32);
            assert!(p.target.y >= 0.0 && p.target.y < H as f32);
        }
        // Still ticks fine
        s.tick(16.0);
        assert_eq!(s.draw_commands().len(), count);
    }

    #[test]
    fn retarget_preserves_motion_state() {
        let mut s = swarm(SwarmConfig::default());
        for _ in 0..3 {
            s.tick(16.0);
        }
        let before: Vec<(Vec2, Vec2)> = s.particles().iter().map(|p| (p.position, p.velocity)).collect();
        s.retarget(&ContentItem::Shape(ShapeKind::Cat));
        for (p, (pos, vel)) in s.particles().iter().zip(before) {
            assert_eq!(p.position, pos);
            assert_eq!(p.velocity, vel);
        }
    }

    #[test]
    fn near_target_seeding_spawns_close_by() {
        let s = swarm(SwarmConfig::default());
        for p in s.particles() {
            let d = p.position.distance(p.target);
            assert!(d >= 3.0 - 1e-3 && d < 18.0 + 1e-3, "spawned {} away", d);
        }
    }

    #[test]
    fn viewport_seeding_spawns_anywhere_inside() {
        let s = swarm(SwarmConfig::digital_noise(GlyphColor::ACCENT_GREEN));
        for p in s.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < W as f32);
            assert!(p.position.y >= 0.0 && p.position.y < H as f32);
            assert!(p.feel.ease >= 0.005 && p.feel.ease <= 0.055);
            assert!(p.feel.friction >= 0.05 && p.feel.friction <= 0.95);
        }
    }

    #[test]
    fn timer_advances_playlist() {
        let mut s = swarm(SwarmConfig::default());
        s.tick(0.0);
        s.tick(3000.0);
        assert_eq!(s.current_index(), 0);
        s.tick(3001.0);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.current_content(), Some(&ContentItem::Shape(ShapeKind::Dog)));
        s.tick(5000.0);
        assert_eq!(s.current_index(), 1);
        s.tick(6002.0);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn manual_advance_supersedes_timer() {
        let mut s = swarm(SwarmConfig::default());
        s.advance(2000.0);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.last_transition(), 2000.0);

        s.tick(3500.0); // only 1.5s since the click
        assert_eq!(s.current_index(), 1);
        s.tick(5001.0);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn playlist_wraps_around() {
        let mut s = swarm(SwarmConfig::default());
        for i in 0..8 {
            s.advance(i as f64);
        }
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn resize_resamples_current_item() {
        let mut s = swarm(SwarmConfig::default());
        s.advance(10.0); // dog
        s.resize(320, 240);
        assert_eq!(s.viewport(), (320, 240));
        assert_eq!(s.current_index(), 1);

        let content = ContentItem::Shape(ShapeKind::Dog);
        let samples = GlyphSampler::new(100.0).sample(&content, 320, 240, 6);
        for (p, sample) in s.particles().iter().zip(&samples) {
            assert_eq!(p.target, sample.position);
        }
        for p in &s.particles()[samples.len()..] {
            assert!(p.target.x < 320.0 && p.target.y < 240.0);
        }
    }

    #[test]
    fn tick_draws_every_particle_in_slot_order() {
        let mut s = swarm(SwarmConfig::default());
        s.tick(16.0);
        let cmds = s.draw_commands();
        assert_eq!(cmds.len(), s.particle_count());
        for (cmd, p) in cmds.iter().zip(s.particles()) {
            assert_eq!(cmd.position, p.position);
            assert_eq!(cmd.glyph, p.glyph);
            assert_eq!(cmd.font_size, 6.0);
            assert_eq!(cmd.color, GlyphColor::MUTED_GRAY);
        }
        assert_eq!(s.buffer().instance_count() as usize, s.particle_count());
    }

    #[test]
    fn palette_glyphs_track_weight() {
        let mut s = swarm(SwarmConfig::default());
        s.tick(16.0);
        let palette: Vec<char> = crate::api::config::DEFAULT_PALETTE.chars().collect();
        for p in s.particles() {
            assert_eq!(p.glyph, glyph_for_weight(&palette, p.weight));
        }
    }

    #[test]
    fn swarm_settles_without_pointer_influence() {
        let config = SwarmConfig::default().with_influence_radius(0.0);
        let mut s = swarm(config);
        for _ in 0..60 {
            s.tick(100.0);
        }
        assert!(s.particles().iter().all(|p| p.is_settled()));
        for p in s.particles() {
            assert_eq!(p.position, p.target);
            assert_eq!(p.weight, p.target_weight);
        }
    }

    #[test]
    fn noise_swarm_never_settles() {
        let config = SwarmConfig::digital_noise(GlyphColor::ACCENT_GREEN).with_influence_radius(0.0);
        let mut s = swarm(config);
        for _ in 0..30 {
            s.tick(100.0);
        }
        assert!(s.particles().iter().all(|p| !p.is_settled()));
        for p in s.particles() {
            assert!(p.position.is_finite());
        }
    }

    #[test]
    fn noise_glyphs_reroll_at_about_five_percent() {
        let mut s = swarm(SwarmConfig::digital_noise(GlyphColor::ACCENT_GREEN));
        let alphabet: Vec<char> = crate::api::config::NOISE_ALPHABET.chars().collect();
        let mut previous: Vec<char> = s.particles().iter().map(|p| p.glyph).collect();
        let (mut changed, mut total) = (0usize, 0usize);

        // 100 frames at 16 ms stay well inside the first transition interval
        for frame in 1..=100 {
            s.tick(frame as f64 * 16.0);
            let current: Vec<char> = s.particles().iter().map(|p| p.glyph).collect();
            let flips = previous.iter().zip(&current).filter(|(a, b)| a != b).count();
            assert!(flips * 4 < current.len(), "frame {}: {} of {} changed", frame, flips, current.len());
            changed += flips;
            total += current.len();
            previous = current;
        }

        assert_eq!(s.current_index(), 0);
        assert!(previous.iter().all(|g| alphabet.contains(g)));
        let rate = changed as f64 / total as f64;
        assert!(rate > 0.03 && rate < 0.07, "re-roll rate {}", rate);
    }

    #[test]
    fn input_queue_drives_swarm() {
        let mut s = swarm(SwarmConfig::default());
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 5.0, y: 6.0 });
        input.push(InputEvent::PointerMove { x: 50.0, y: 60.0 });
        input.push(InputEvent::PointerDown { x: 50.0, y: 60.0 });
        input.push(InputEvent::Resize { width: 500, height: 300 });
        s.handle_input(&input, 1200.0);

        assert_eq!((s.pointer().x, s.pointer().y), (50.0, 60.0));
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.last_transition(), 1200.0);
        assert_eq!(s.viewport(), (500, 300));
    }

    #[test]
    fn empty_playlist_is_inert() {
        let mut s = Swarm::new(SwarmConfig::default(), Playlist::new(Vec::new()), W, H, 1);
        assert_eq!(s.particle_count(), 0);
        s.advance(10.0);
        s.tick(5000.0);
        assert_eq!(s.particle_count(), 0);
        assert!(s.draw_commands().is_empty());
        assert_eq!(s.current_content(), None);
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut a = Swarm::new(SwarmConfig::digital_noise(GlyphColor::WHITE), Playlist::default(), W, H, 9);
        let mut b = Swarm::new(SwarmConfig::digital_noise(GlyphColor::WHITE), Playlist::default(), W, H, 9);
        for t in 0..20 {
            a.tick(t as f64 * 16.0);
            b.tick(t as f64 * 16.0);
        }
        assert_eq!(a.draw_commands(), b.draw_commands());
    }
}
