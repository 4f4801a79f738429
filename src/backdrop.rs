//! Floating emoji behind the menus.
//!
//! Particles spawn at a random x along the bottom edge, rise and fade out over
//! their lifetime. Spawning pauses while gameplay is on screen; particles that
//! are already airborne finish their animation.

use rand::Rng;
use rand::seq::SliceRandom;

pub const SPAWN_INTERVAL_MS: f64 = 500.0;
pub const LIFETIME_MS: f64 = 3000.0;
pub const RISE_PX: f64 = 100.0;

pub const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "🥳", "😎", "🤖", "👻", "🎉", "🌟", "🍕", "❤️", "🔥",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub emoji: &'static str,
    pub x: f64,
    pub base_y: f64,
    pub born_ms: f64,
}

impl Particle {
    fn progress(&self, now: f64) -> f64 {
        ((now - self.born_ms) / LIFETIME_MS).clamp(0.0, 1.0)
    }

    pub fn y(&self, now: f64) -> f64 {
        self.base_y - RISE_PX * self.progress(now)
    }

    pub fn opacity(&self, now: f64) -> f64 {
        1.0 - self.progress(now)
    }

    fn expired(&self, now: f64) -> bool {
        now - self.born_ms >= LIFETIME_MS
    }
}

#[derive(Debug)]
pub struct Backdrop {
    particles: Vec<Particle>,
    enabled: bool,
    last_spawn_ms: Option<f64>,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self { particles: Vec::new(), enabled: true, last_spawn_ms: None }
    }
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::debug!(enabled, "backdrop animation toggled");
        }
        self.enabled = enabled;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Expires finished particles and spawns a new one when due. `width` and
    /// `height` are the viewport size in CSS pixels.
    pub fn update<R: Rng>(&mut self, now: f64, width: f64, height: f64, rng: &mut R) {
        self.particles.retain(|p| !p.expired(now));
        if !self.enabled {
            return;
        }
        let due = self.last_spawn_ms.is_none_or(|last| now - last >= SPAWN_INTERVAL_MS);
        if !due {
            return;
        }
        self.last_spawn_ms = Some(now);
        let emoji = EMOJIS.choose(rng).copied().unwrap_or("🌟");
        self.particles.push(Particle {
            emoji,
            x: rng.gen_range(0.0..width.max(1.0)),
            base_y: height,
            born_ms: now,
        });
    }
}
