//! Decorative particle field, rotating rings and centre glow.
//!
//! Coordinates are relative to the centre of the player. Everything here is
//! driven by frame steps and the elapsed playback time; audio content plays
//! no part.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARTICLE_MAX_LIFE: f64 = 100.0;
const ANGLE_STEP: f64 = 0.02;
pub const RING_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
    /// Degrees.
    pub hue: f64,
    pub angle: f64,
    pub speed: f64,
}

impl Particle {
    fn spawn(rng: &mut StdRng) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: (rng.random::<f64>() - 0.5) * 2.0,
            vy: (rng.random::<f64>() - 0.5) * 2.0,
            life: rng.random::<f64>() * PARTICLE_MAX_LIFE,
            max_life: PARTICLE_MAX_LIFE,
            size: rng.random::<f64>() * 3.0 + 1.0,
            hue: rng.random::<f64>() * 360.0,
            angle: rng.random::<f64>() * TAU,
            speed: rng.random::<f64>() * 2.0 + 1.0,
        }
    }

    /// Fade factor in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    /// Radians.
    pub rotation: f64,
    /// Degrees.
    pub hue: f64,
}

pub struct VisualEffects {
    particles: Vec<Particle>,
    rings: [Ring; RING_COUNT],
    glow_radius: f64,
    glow_hue: f64,
    active: bool,
    rng: StdRng,
}

impl VisualEffects {
    pub fn new(particle_count: usize) -> Self {
        Self::with_rng(particle_count, StdRng::from_os_rng())
    }

    pub fn with_rng(particle_count: usize, mut rng: StdRng) -> Self {
        let particles = (0..particle_count)
            .map(|_| Particle::spawn(&mut rng))
            .collect();
        let mut effects = Self {
            particles,
            rings: [Ring {
                radius: 0.0,
                rotation: 0.0,
                hue: 0.0,
            }; RING_COUNT],
            glow_radius: 0.0,
            glow_hue: 0.0,
            active: false,
            rng,
        };
        effects.update_shapes(0.0);
        effects
    }

    /// Advance one frame. Nothing moves while playback is paused.
    pub fn step(&mut self, playing: bool, current_time: f64) {
        self.active = playing;
        if !playing {
            return;
        }

        // Time base is playback seconds.
        let t = current_time;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.angle += ANGLE_STEP;
            let radius = 100.0 + (t * 0.001 + i as f64 * 0.1).sin() * 50.0;
            p.x = p.angle.cos() * radius;
            p.y = p.angle.sin() * radius;

            p.life -= 1.0;
            if p.life <= 0.0 {
                p.life = p.max_life;
                p.x = 0.0;
                p.y = 0.0;
                p.hue = self.rng.random::<f64>() * 360.0;
            }
        }
        self.update_shapes(t);
    }

    fn update_shapes(&mut self, t: f64) {
        for (i, ring) in self.rings.iter_mut().enumerate() {
            let i = i as f64;
            ring.radius = 150.0 + i * 30.0;
            ring.rotation = t * 0.001 * (i + 1.0);
            ring.hue = (t * 0.1 + i * 120.0).rem_euclid(360.0);
        }
        self.glow_radius = 80.0 + (t * 0.003).sin() * 20.0;
        self.glow_hue = (t * 0.1).rem_euclid(360.0);
    }

    /// Whether the last frame was drawn with playback running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rings(&self) -> &[Ring; RING_COUNT] {
        &self.rings
    }

    pub fn glow_radius(&self) -> f64 {
        self.glow_radius
    }

    pub fn glow_hue(&self) -> f64 {
        self.glow_hue
    }
}

/// HSL (degrees, 0-1, 0-1) to 8-bit RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects(count: usize) -> VisualEffects {
        VisualEffects::with_rng(count, StdRng::seed_from_u64(1))
    }

    #[test]
    fn paused_effects_do_not_move() {
        let mut fx = effects(10);
        let before = fx.particles().to_vec();
        fx.step(false, 12.0);
        assert_eq!(fx.particles(), &before[..]);
        assert!(!fx.is_active());
    }

    #[test]
    fn particles_orbit_within_band() {
        let mut fx = effects(50);
        for frame in 0..300 {
            fx.step(true, frame as f64 / 30.0);
            for p in fx.particles() {
                let r = (p.x * p.x + p.y * p.y).sqrt();
                assert!(r <= 150.0 + 1e-9, "radius {r}");
                assert!((0.0..=p.max_life).contains(&p.life));
            }
        }
    }

    #[test]
    fn angle_advances_per_frame() {
        let mut fx = effects(1);
        let start = fx.particles()[0].angle;
        fx.step(true, 0.0);
        assert!((fx.particles()[0].angle - start - ANGLE_STEP).abs() < 1e-12);
    }

    #[test]
    fn rings_turn_slowly_in_playback_seconds() {
        let mut fx = effects(0);
        fx.step(true, 1.0);
        assert!((fx.rings()[0].rotation - 0.001).abs() < 1e-12);
        assert!((fx.glow_hue() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rings_follow_playback_time() {
        let mut fx = effects(0);
        fx.step(true, 1000.0);
        let rings = fx.rings();
        assert_eq!(rings[0].radius, 150.0);
        assert_eq!(rings[2].radius, 210.0);
        assert!((rings[1].rotation - 2.0).abs() < 1e-12);
        assert!((rings[0].hue - 100.0).abs() < 1e-9);
        assert!((rings[1].hue - 220.0).abs() < 1e-9);
        assert!((rings[2].hue - 340.0).abs() < 1e-9);
        assert!((60.0..=100.0).contains(&fx.glow_radius()));
    }

    #[test]
    fn hsl_primary_colours() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 0.0, 1.0), (255, 255, 255));
    }
}
