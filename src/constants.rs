/// Animation tuning constants used across strategies.
///
/// These values were tuned against rehearsal footage and are the defaults
/// every strategy falls back to when no explicit configuration is supplied
/// at construction.
/// Fraction of the remaining distance a chaser covers each frame.
pub const CHASER_SPEED: f64 = 0.25;
/// Fraction of the remaining distance the hand-distance tracker covers
/// toward the hand midpoint each frame.
pub const MIDPOINT_CHASE_SPEED: f64 = 0.2;
/// One-pole low-pass coefficient applied to the hand separation estimate.
pub const HAND_DISTANCE_SMOOTHING: f64 = 0.2;
/// Single-frame separation jumps whose magnitude reaches this value are
/// treated as pose mistracking and discarded.
pub const HAND_DISTANCE_SENSITIVITY: f64 = 500.0;
/// The smoothed hand separation is divided by this before it scales ring
/// radii and disc sizes.
pub const HAND_DISTANCE_RADIUS_DIVISOR: f64 = 100.0;
/// Smallest per-axis offset the random walk may take in one frame.
pub const RANDOM_STEP_MIN: i32 = -10;
/// Largest per-axis offset the random walk may take in one frame.
pub const RANDOM_STEP_MAX: i32 = 9;
/// Ring count of the plain spinning halo.
pub const SPINNING_RING_COUNT: u32 = 30;
/// Angular speed multiplier of the plain spinning halo.
pub const SPINNING_ANGULAR_SPEED: f64 = 1.0;
/// Orbit radius the rings of the plain spinning halo are placed on.
pub const SPINNING_CENTER_RADIUS: f64 = 100.0;
/// Disc-size multiplier per ring index for the plain spinning halo.
pub const SPINNING_SIZE_PARAMETER: i32 = 1;
/// Ring count of the hand-distance tracker's halo.
pub const TRACKER_RING_COUNT: u32 = 50;
/// Angular speed multiplier of the hand-distance tracker's halo.
pub const TRACKER_ANGULAR_SPEED: f64 = 2.0;
/// Orbit radius the tracker's rings are placed on before distance scaling.
pub const TRACKER_CENTER_RADIUS: f64 = 100.0;
/// Disc-size multiplier per ring index for the tracker's halo.
pub const TRACKER_SIZE_PARAMETER: i32 = 2;
