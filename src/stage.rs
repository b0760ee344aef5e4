//! Owns the cast of performers and advances them one frame at a time.
//!
//! The stage resolves the update/draw ordering question one way for every
//! entity: each tick applies the incoming pose to all anchors first, then
//! updates every performer, then draws every performer, in registration
//! order. A draw therefore always sees this tick's position of every
//! anchor and every entity registered before it.
use hashbrown::HashMap;
use log::debug;

use crate::canvas::Canvas;
use crate::composite::Performer;
use crate::drawable::{Drawable, DrawableRef};
use crate::error::RenderError;
use crate::pose::PoseFrame;

/// The animation world: named anchors driven by pose input plus the list
/// of performers painting onto the shared frame.
#[derive(Default)]
pub struct Stage {
    anchors: HashMap<String, DrawableRef>,
    performers: Vec<Box<dyn Performer>>,
    tick_count: u64,
}

impl Stage {
    /// Creates an empty stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor drawable for a named joint, creating it at the
    /// origin on first use. Hand the returned reference to whatever
    /// strategies should track the joint.
    pub fn anchor(&mut self, joint: &str) -> DrawableRef {
        self.anchors
            .entry_ref(joint)
            .or_insert_with(|| Drawable::shared(0, 0, joint))
            .clone()
    }

    /// Registers a performer. Update and draw order follow registration
    /// order.
    pub fn add(&mut self, performer: impl Performer + 'static) {
        debug!("registering performer {}", performer.name());
        self.performers.push(Box::new(performer));
    }

    /// Moves every anchor named in the pose frame to its reported
    /// position. Joints without a registered anchor are ignored.
    pub fn apply_pose(&mut self, pose: &PoseFrame) {
        for (joint, pos) in pose.iter() {
            if let Some(anchor) = self.anchors.get(joint) {
                anchor.borrow_mut().pos = pos;
            }
        }
    }

    /// Runs one full frame: pose in, all updates, then all draws.
    ///
    /// The canvas is borrowed exclusively for the duration of the tick and
    /// threaded through each performer's draw in sequence.
    ///
    /// # Errors
    /// The first draw failure aborts the remainder of the draw pass and is
    /// returned; positions updated earlier in the tick keep their new
    /// values.
    pub fn tick(
        &mut self,
        pose: &PoseFrame,
        canvas: &mut dyn Canvas,
        allow_transparency: bool,
    ) -> Result<(), RenderError> {
        self.tick_count += 1;
        debug!("tick {}", self.tick_count);

        self.apply_pose(pose);
        for performer in &mut self.performers {
            performer.update();
        }
        for performer in &mut self.performers {
            performer.draw(canvas, allow_transparency)?;
        }
        Ok(())
    }

    /// Number of ticks completed or attempted so far.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
