//! Limb overlay: a blade drawn along the performer's forearm.
//!
//! Independent of the strategy composition: the katana has no position of
//! its own, only snapshots of its two anchors, refreshed each update.
use glam::{DVec2, IVec2};
use image::Rgb;
use log::debug;

use crate::canvas::{Canvas, Color};
use crate::composite::Performer;
use crate::drawable::DrawableRef;
use crate::error::RenderError;

/// Radius of the marker discs at each anchor.
const MARKER_RADIUS: i32 = 2;
/// Colour of the anchor markers.
const MARKER_COLOR: Color = Rgb([255, 255, 255]);
/// Colour of the blade line.
const BLADE_COLOR: Color = Rgb([255, 0, 0]);
/// Pixel thickness of the blade line.
const BLADE_THICKNESS: i32 = 10;

/// Length and unit direction of a limb segment.
#[derive(Clone, Copy, Debug)]
pub struct LimbSegment {
    /// Distance between the two anchors, in pixels.
    pub length: f64,
    /// Unit vector pointing from elbow to hand.
    pub direction: DVec2,
}

/// Draws a line plus endpoint markers between an elbow and a hand anchor.
///
/// `update` copies both anchor positions into local fields; `draw` paints
/// from those snapshots, so the overlay reflects whatever the anchors held
/// at the last update. There is no transparency handling; everything is a
/// single opaque pass.
pub struct Katana {
    elbow: DrawableRef,
    hand: DrawableRef,
    name: String,
    elbow_pos: IVec2,
    hand_pos: IVec2,
}

impl Katana {
    /// Creates an overlay between the two anchors. Positions are
    /// snapshotted immediately, as if `update` had run once.
    #[must_use]
    pub fn new(elbow: DrawableRef, hand: DrawableRef, name: impl Into<String>) -> Self {
        let elbow_pos = elbow.borrow().pos;
        let hand_pos = hand.borrow().pos;
        Self {
            elbow,
            hand,
            name: name.into(),
            elbow_pos,
            hand_pos,
        }
    }

    /// Derives the segment between the snapshotted anchors.
    ///
    /// # Errors
    /// Returns [`RenderError::ZeroLengthLimb`] when both anchors coincide,
    /// since no unit direction exists there. Surfacing this beats quietly
    /// producing a NaN direction.
    pub fn segment(&self) -> Result<LimbSegment, RenderError> {
        let delta = (self.hand_pos - self.elbow_pos).as_dvec2();
        let length = delta.length();
        if length == 0.0 {
            return Err(RenderError::ZeroLengthLimb {
                name: self.name.clone(),
            });
        }
        Ok(LimbSegment {
            length,
            direction: delta / length,
        })
    }
}

impl Performer for Katana {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn update(&mut self) {
        self.elbow_pos = self.elbow.borrow().pos;
        self.hand_pos = self.hand.borrow().pos;
    }

    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        _allow_transparency: bool,
    ) -> Result<(), RenderError> {
        canvas.fill_circle(self.elbow_pos, MARKER_RADIUS, MARKER_COLOR);
        canvas.fill_circle(self.hand_pos, MARKER_RADIUS, MARKER_COLOR);

        let segment = self.segment()?;
        debug!("{}: limb length {:.1}", self.name, segment.length);

        canvas.line(self.hand_pos, self.elbow_pos, BLADE_COLOR, BLADE_THICKNESS);
        Ok(())
    }
}
