//! Plane geometry helpers shared by the radial renderers and trackers.
//! Small functions for polar conversion, separations, and midpoints.
use glam::{DVec2, IVec2};

/// Converts a polar `(radius, angle)` pair into a cartesian offset.
///
/// The angle is in radians, measured counter-clockwise from the positive
/// x axis.
///
/// # Examples
/// ```
/// use harukaze::geometry::polar_to_cartesian;
/// let offset = polar_to_cartesian(2.0, std::f64::consts::FRAC_PI_2);
/// assert!(offset.x.abs() < 1e-12);
/// assert!((offset.y - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn polar_to_cartesian(radius: f64, angle: f64) -> DVec2 {
    DVec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Returns the Euclidean distance between two integer points.
///
/// # Examples
/// ```
/// use glam::IVec2;
/// use harukaze::geometry::distance;
/// let d = distance(IVec2::new(0, 0), IVec2::new(3, 4));
/// assert!((d - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    (a - b).as_dvec2().length()
}

/// Returns the per-axis midpoint of two integer points.
///
/// Each axis is computed as the lesser coordinate plus half the absolute
/// separation, in floating point, so odd separations land on a half pixel
/// rather than being rounded away.
///
/// # Examples
/// ```
/// use glam::IVec2;
/// use harukaze::geometry::midpoint;
/// let mid = midpoint(IVec2::new(10, 0), IVec2::new(1, 4));
/// assert!((mid.x - 5.5).abs() < f64::EPSILON);
/// assert!((mid.y - 2.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn midpoint(a: IVec2, b: IVec2) -> DVec2 {
    DVec2::new(axis_midpoint(a.x, b.x), axis_midpoint(a.y, b.y))
}

fn axis_midpoint(a: i32, b: i32) -> f64 {
    let lesser = f64::from(a.min(b));
    let separation = f64::from(a.max(b)) - lesser;
    lesser + separation / 2.0
}
