//! The fused hand-distance entity.
//!
//! Unlike the other composites, movement and rendering here share state:
//! the smoothed hand separation both steers the entity (it chases the
//! midpoint of the hands) and scales its halo (the pattern grows as the
//! hands move apart). The two halves cannot be split across the
//! [`Mover`](crate::movement::Mover)/[`Renderer`](crate::render::Renderer)
//! seam, so this type implements [`Performer`] directly.
use crate::canvas::Canvas;
use crate::composite::Performer;
use crate::constants::{
    HAND_DISTANCE_RADIUS_DIVISOR, HAND_DISTANCE_SENSITIVITY, HAND_DISTANCE_SMOOTHING,
    MIDPOINT_CHASE_SPEED, TRACKER_ANGULAR_SPEED, TRACKER_CENTER_RADIUS, TRACKER_RING_COUNT,
    TRACKER_SIZE_PARAMETER,
};
use crate::drawable::{Drawable, DrawableRef};
use crate::error::RenderError;
use crate::geometry;
use crate::movement::chase_step;
use crate::render::{draw_rings, SpinningConfig, RING_PRIMARY, RING_SECONDARY};

/// Chases the midpoint between two tracked hands and draws a halo whose
/// size follows how far apart they are.
///
/// Both hand anchors are mandatory: a tracker without two hands to watch
/// has nothing to animate, so absence is ruled out at construction rather
/// than tolerated per frame.
pub struct HandDistanceTracker {
    drawable: DrawableRef,
    left_hand: DrawableRef,
    right_hand: DrawableRef,
    config: SpinningConfig,
    speed: f64,
    sensitivity: f64,
    hand_to_hand: f64,
    step: u64,
}

impl HandDistanceTracker {
    /// Creates a tracker at the given position watching the two hands.
    #[must_use]
    pub fn new(
        x: i32,
        y: i32,
        name: impl Into<String>,
        left_hand: DrawableRef,
        right_hand: DrawableRef,
    ) -> Self {
        Self::with_config(x, y, name, left_hand, right_hand, Self::default_config())
    }

    /// Creates a tracker with an explicit halo configuration.
    #[must_use]
    pub fn with_config(
        x: i32,
        y: i32,
        name: impl Into<String>,
        left_hand: DrawableRef,
        right_hand: DrawableRef,
        config: SpinningConfig,
    ) -> Self {
        Self {
            drawable: Drawable::shared(x, y, name),
            left_hand,
            right_hand,
            config,
            speed: MIDPOINT_CHASE_SPEED,
            sensitivity: HAND_DISTANCE_SENSITIVITY,
            hand_to_hand: 0.0,
            step: 0,
        }
    }

    /// The tracker's halo defaults: more rings, twice the spin, larger
    /// discs than the plain halo.
    #[must_use]
    pub fn default_config() -> SpinningConfig {
        SpinningConfig {
            n_rings: TRACKER_RING_COUNT,
            angular_speed: TRACKER_ANGULAR_SPEED,
            center_radius: TRACKER_CENTER_RADIUS,
            size_parameter: TRACKER_SIZE_PARAMETER,
            primary_color: RING_PRIMARY,
            secondary_color: RING_SECONDARY,
        }
    }

    /// A handle to this entity's drawable, so others can anchor to it.
    #[must_use]
    pub fn anchor(&self) -> DrawableRef {
        self.drawable.clone()
    }

    /// The current smoothed hand separation.
    #[must_use]
    pub fn hand_to_hand(&self) -> f64 {
        self.hand_to_hand
    }

    /// Number of draw calls completed so far.
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }
}

impl Performer for HandDistanceTracker {
    fn name(&self) -> String {
        self.drawable.borrow().name.clone()
    }

    /// Refreshes the smoothed separation, then chases the hand midpoint.
    ///
    /// A separation jump at or beyond the sensitivity threshold leaves the
    /// smoothed value untouched: a hand teleporting across the frame is a
    /// pose estimator glitch, not choreography. Jumps below the threshold
    /// move the estimate by [`HAND_DISTANCE_SMOOTHING`] of the delta.
    fn update(&mut self) {
        let left = self.left_hand.borrow().pos;
        let right = self.right_hand.borrow().pos;

        let separation = geometry::distance(left, right);
        let delta = separation - self.hand_to_hand;
        if delta.abs() < self.sensitivity {
            self.hand_to_hand += delta * HAND_DISTANCE_SMOOTHING;
        }

        let target = geometry::midpoint(left, right);
        let current = self.drawable.borrow().pos;
        let next = current + chase_step(current, target, self.speed);
        self.drawable.borrow_mut().pos = next;
    }

    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        allow_transparency: bool,
    ) -> Result<(), RenderError> {
        let center = self.drawable.borrow().pos;
        let radius_scale = self.hand_to_hand / HAND_DISTANCE_RADIUS_DIVISOR;
        draw_rings(
            canvas,
            center,
            &self.config,
            self.step,
            radius_scale,
            allow_transparency,
        );
        self.step += 1;
        Ok(())
    }
}
