//! Animation core for a pose-driven projection performance.
//!
//! Body-pose keypoints (hands, elbows, head) from an external pose
//! estimator feed a cast of independently animated drawable entities,
//! rendered frame by frame onto a live camera feed. Each entity couples a
//! movement strategy (how its position updates each frame, possibly
//! tracking another entity) with a rendering strategy (how it paints
//! itself into the frame buffer); the two are composed independently.
//!
//! Pose estimation, capture, and projection are external collaborators:
//! they hand in a [`pose::PoseFrame`] and a [`canvas::Frame`] each tick
//! and take the mutated frame back out. Everything in between is the
//! [`stage::Stage`]'s single-threaded update-then-draw pass.
pub mod canvas;
pub mod composite;
pub mod constants;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod katana;
pub mod logging;
pub mod movement;
pub mod pose;
pub mod render;
pub mod stage;
pub mod tracker;
pub use constants::*;

// Re-export commonly used items
pub use canvas::{Canvas, Color, Frame};
pub use composite::{
    spinning_chaser, spinning_fixed, spinning_random, CompositeEntity, Performer,
};
pub use drawable::{Drawable, DrawableRef};
pub use error::{PoseError, RenderError};
pub use geometry::{distance, midpoint, polar_to_cartesian};
pub use katana::{Katana, LimbSegment};
pub use logging::init as init_logging;
pub use movement::{Chaser, Fixed, Mover, RandomWalk};
pub use pose::PoseFrame;
pub use render::{Renderer, Spinning, SpinningConfig, RING_PRIMARY, RING_SECONDARY};
pub use stage::Stage;
pub use tracker::HandDistanceTracker;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use harukaze::prelude::*;
    //! ```

    pub use crate::canvas::{Canvas, Frame};
    pub use crate::composite::{spinning_chaser, Performer};
    pub use crate::pose::PoseFrame;
    pub use crate::stage::Stage;
    pub use crate::tracker::HandDistanceTracker;
    pub use glam::IVec2;
}
