use std::f64::consts::TAU;

use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Points};

use crate::effects::{VisualEffects, hsl_to_rgb};

/// Dots per effect ring.
const RING_DOTS: usize = 72;

fn hsl(hue: f64, lightness: f64) -> Color {
    let (r, g, b) = hsl_to_rgb(hue, 0.7, lightness);
    Color::Rgb(r, g, b)
}

/// Paint the particle field, rings and glow. Nothing is drawn while paused.
pub fn paint(ctx: &mut Context, effects: &VisualEffects) {
    if !effects.is_active() {
        return;
    }

    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: effects.glow_radius(),
        color: hsl(effects.glow_hue(), 0.25),
    });

    for ring in effects.rings() {
        // Dashed so the rotation shows.
        let coords: Vec<(f64, f64)> = (0..RING_DOTS)
            .filter(|k| (k / 3) % 2 == 0)
            .map(|k| {
                let theta = ring.rotation + k as f64 / RING_DOTS as f64 * TAU;
                (ring.radius * theta.cos(), ring.radius * theta.sin())
            })
            .collect();
        ctx.draw(&Points {
            coords: &coords,
            color: hsl(ring.hue, 0.35),
        });
    }

    for p in effects.particles() {
        let coords = [(p.x, p.y)];
        ctx.draw(&Points {
            coords: &coords,
            color: hsl(p.hue, 0.2 + 0.4 * p.alpha()),
        });
    }
}
