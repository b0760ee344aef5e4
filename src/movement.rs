//! Movement strategies: the rules by which positions change each frame.
//!
//! Each strategy computes the position an entity occupies after the current
//! frame from the position it occupied before it. Strategies that track
//! another entity hold a [`DrawableRef`] anchor; the anchor's own position
//! must have been refreshed earlier in the same tick or the follower lags
//! one frame behind, which is the caller's sequencing responsibility.
use glam::{DVec2, IVec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::{CHASER_SPEED, RANDOM_STEP_MAX, RANDOM_STEP_MIN};
use crate::drawable::DrawableRef;

/// A movement strategy.
pub trait Mover {
    /// Returns the position the entity occupies after this frame.
    fn step(&mut self, current: IVec2) -> IVec2;
}

/// One chase increment: a fixed fraction of the remaining distance, each
/// axis independently, truncated toward zero after scaling.
///
/// Truncation toward zero (not flooring, not rounding) is the reproduced
/// tracking behaviour: a remaining distance of -2.5 steps by -2.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Truncation toward zero is the specified chase-step behaviour."
)]
pub(crate) fn chase_step(current: IVec2, target: DVec2, speed: f64) -> IVec2 {
    let scaled = (target - current.as_dvec2()) * speed;
    IVec2::new(scaled.x as i32, scaled.y as i32)
}

/// Exponential-decay tracking toward a target anchor.
///
/// Each frame the chaser covers a fixed fraction of the distance still
/// separating it from the target. With no target it stays put.
pub struct Chaser {
    target: Option<DrawableRef>,
    speed: f64,
}

impl Chaser {
    /// Creates a chaser with the default speed of [`CHASER_SPEED`].
    #[must_use]
    pub fn new(target: Option<DrawableRef>) -> Self {
        Self::with_speed(target, CHASER_SPEED)
    }

    /// Creates a chaser covering `speed` of the remaining distance per
    /// frame. Useful speeds lie in `(0, 1)`; the type does not clamp.
    #[must_use]
    pub fn with_speed(target: Option<DrawableRef>, speed: f64) -> Self {
        Self { target, speed }
    }
}

impl Mover for Chaser {
    fn step(&mut self, current: IVec2) -> IVec2 {
        let Some(target) = &self.target else {
            return current;
        };
        let target = target.borrow().pos;
        current + chase_step(current, target.as_dvec2(), self.speed)
    }
}

/// Pins the entity to its anchor's exact position, no smoothing.
pub struct Fixed {
    target: Option<DrawableRef>,
}

impl Fixed {
    /// Creates a pin to the given anchor. With no anchor the entity never
    /// moves.
    #[must_use]
    pub fn new(target: Option<DrawableRef>) -> Self {
        Self { target }
    }
}

impl Mover for Fixed {
    fn step(&mut self, current: IVec2) -> IVec2 {
        match &self.target {
            Some(target) => target.borrow().pos,
            None => current,
        }
    }
}

/// Unbounded random walk.
///
/// Each axis receives an independent uniform offset in
/// [`RANDOM_STEP_MIN`]..=[`RANDOM_STEP_MAX`] every frame. There is no
/// clamping to any canvas: the entity may, and over enough frames will,
/// drift out of view. That drift is an accepted property of the walk, not
/// something this strategy corrects.
pub struct RandomWalk {
    rng: SmallRng,
}

impl RandomWalk {
    /// Creates a walk seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a walk from a fixed seed, for reproducible sequences.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl Mover for RandomWalk {
    fn step(&mut self, current: IVec2) -> IVec2 {
        current
            + IVec2::new(
                self.rng.gen_range(RANDOM_STEP_MIN..=RANDOM_STEP_MAX),
                self.rng.gen_range(RANDOM_STEP_MIN..=RANDOM_STEP_MAX),
            )
    }
}
