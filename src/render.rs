//! Radial rendering strategies: the spinning ring motif.
//!
//! Every halo in the performance is the same pattern: a fixed count of
//! discs placed on an orbit around the entity's centre, rotating a little
//! further each frame, alternating between two colours. Rings are painted
//! from the outermost index down to 1 so that the more opaque inner rings
//! land on top even when blending is disabled.
use std::f64::consts::TAU;

use glam::IVec2;
use image::Rgb;

use crate::canvas::{Canvas, Color};
use crate::constants::{
    SPINNING_ANGULAR_SPEED, SPINNING_CENTER_RADIUS, SPINNING_RING_COUNT, SPINNING_SIZE_PARAMETER,
};
use crate::geometry::polar_to_cartesian;

/// Colour of odd-indexed rings.
pub const RING_PRIMARY: Color = Rgb([190, 0, 0]);
/// Colour of even-indexed rings.
pub const RING_SECONDARY: Color = Rgb([0, 0, 0]);

/// A rendering strategy: paints an entity into the canvas at its centre.
pub trait Renderer {
    /// Paints one frame's worth of the pattern and advances any internal
    /// animation state.
    fn draw(&mut self, canvas: &mut dyn Canvas, center: IVec2, allow_transparency: bool);
}

/// Immutable parameters of one radial ring pattern.
///
/// Configuration is fixed at construction; two halos never share tunable
/// state, so adjusting one on the fly cannot disturb another.
#[derive(Clone, Copy, Debug)]
pub struct SpinningConfig {
    /// Number of rings in the pattern.
    pub n_rings: u32,
    /// Multiplier on the per-frame rotation.
    pub angular_speed: f64,
    /// Orbit radius the rings are placed on, before any runtime scaling.
    pub center_radius: f64,
    /// Disc radius per unit of ring index, before any runtime scaling.
    pub size_parameter: i32,
    /// Colour of odd-indexed rings.
    pub primary_color: Color,
    /// Colour of even-indexed rings.
    pub secondary_color: Color,
}

impl Default for SpinningConfig {
    fn default() -> Self {
        Self {
            n_rings: SPINNING_RING_COUNT,
            angular_speed: SPINNING_ANGULAR_SPEED,
            center_radius: SPINNING_CENTER_RADIUS,
            size_parameter: SPINNING_SIZE_PARAMETER,
            primary_color: RING_PRIMARY,
            secondary_color: RING_SECONDARY,
        }
    }
}

/// The constant-size spinning halo.
///
/// Holds the one piece of mutable animation state, a `step` counter that
/// advances by exactly one per [`Renderer::draw`] call and is never reset,
/// driving the continuous rotation across frames.
pub struct Spinning {
    config: SpinningConfig,
    step: u64,
}

impl Spinning {
    /// Creates a halo with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SpinningConfig::default())
    }

    /// Creates a halo with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SpinningConfig) -> Self {
        Self { config, step: 0 }
    }

    /// Number of draw calls completed so far.
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }
}

impl Default for Spinning {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Spinning {
    fn draw(&mut self, canvas: &mut dyn Canvas, center: IVec2, allow_transparency: bool) {
        draw_rings(canvas, center, &self.config, self.step, 1.0, allow_transparency);
        self.step += 1;
    }
}

/// Paints one full ring pattern.
///
/// `radius_scale` scales both the orbit radius and the disc sizes; the
/// plain halo passes 1.0 and the hand-distance halo passes its smoothed
/// separation divided by [`crate::constants::HAND_DISTANCE_RADIUS_DIVISOR`].
///
/// Ring `i` of `n` sits at angle `2π·(i/n)·step·angular_speed` on the
/// orbit, with disc radius `size_parameter·i·radius_scale` truncated to a
/// whole pixel. With transparency enabled each ring is composited at
/// `alpha = 1 - i/n`, so inner rings are the most opaque; without it the
/// discs are painted directly.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "Disc centres and sizes truncate toward zero by design; step \
              counts stay far below the f64 integer limit."
)]
pub(crate) fn draw_rings(
    canvas: &mut dyn Canvas,
    center: IVec2,
    config: &SpinningConfig,
    step: u64,
    radius_scale: f64,
    allow_transparency: bool,
) {
    for i in (1..=config.n_rings).rev() {
        let fraction = f64::from(i) / f64::from(config.n_rings);
        let angle = TAU * fraction * step as f64 * config.angular_speed;
        let color = if i % 2 == 1 {
            config.primary_color
        } else {
            config.secondary_color
        };
        let offset = polar_to_cartesian(config.center_radius * radius_scale, angle);
        let disc_center = (center.as_dvec2() + offset).as_ivec2();
        let size = (f64::from(config.size_parameter) * f64::from(i) * radius_scale) as i32;
        if allow_transparency {
            let alpha = 1.0 - fraction;
            canvas.blend_circle(disc_center, size, color, alpha);
        } else {
            canvas.fill_circle(disc_center, size, color);
        }
    }
}
