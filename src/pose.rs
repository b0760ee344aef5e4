//! Per-frame pose input from the external pose estimator.
//!
//! The estimator is an external collaborator; all this core consumes is a
//! mapping from named joints to integer pixel positions. A parser for the
//! estimator's JSON output format (one `people` array, each person a flat
//! `pose_keypoints_2d` list of `x, y, confidence` triplets) is provided so
//! the capture side can hand files straight through.
use glam::IVec2;
use hashbrown::HashMap;
use serde::Deserialize;

use crate::error::PoseError;

/// Joint label for the head.
pub const HEAD: &str = "head";
/// Joint label for the right elbow.
pub const RIGHT_ELBOW: &str = "right_elbow";
/// Joint label for the right hand.
pub const RIGHT_HAND: &str = "right_hand";
/// Joint label for the left elbow.
pub const LEFT_ELBOW: &str = "left_elbow";
/// Joint label for the left hand.
pub const LEFT_HAND: &str = "left_hand";

/// COCO-layout keypoint index for each joint the performance uses.
const KEYPOINT_INDEX: [(&str, usize); 5] = [
    (HEAD, 0),
    (RIGHT_ELBOW, 3),
    (RIGHT_HAND, 4),
    (LEFT_ELBOW, 6),
    (LEFT_HAND, 7),
];

/// One frame of named joint positions.
#[derive(Clone, Debug, Default)]
pub struct PoseFrame {
    joints: HashMap<String, IVec2>,
}

impl PoseFrame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a joint's position, replacing any previous value.
    pub fn set(&mut self, joint: impl Into<String>, pos: IVec2) {
        self.joints.insert(joint.into(), pos);
    }

    /// Returns a joint's position, if the estimator reported it.
    #[must_use]
    pub fn get(&self, joint: &str) -> Option<IVec2> {
        self.joints.get(joint).copied()
    }

    /// Iterates over all reported joints.
    pub fn iter(&self) -> impl Iterator<Item = (&str, IVec2)> {
        self.joints.iter().map(|(name, &pos)| (name.as_str(), pos))
    }

    /// Parses one estimator output file.
    ///
    /// Only the first detected person is used. Joints reported with zero
    /// confidence are omitted from the frame, as are joints whose triplet
    /// is missing entirely. `Ok(None)` means the file was well formed but
    /// nobody was in view.
    ///
    /// # Errors
    /// Returns [`PoseError::MalformedJson`] when the input is not the
    /// expected JSON shape.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Keypoints are pixel coordinates; truncating to whole pixels."
    )]
    pub fn from_openpose_json(raw: &str) -> Result<Option<Self>, PoseError> {
        let output: EstimatorOutput = serde_json::from_str(raw)?;
        let Some(person) = output.people.into_iter().next() else {
            return Ok(None);
        };

        let mut frame = Self::new();
        for &(joint, index) in &KEYPOINT_INDEX {
            let base = index * 3;
            let triplet = person.pose_keypoints_2d.get(base..base + 3);
            let Some(&[x, y, confidence]) = triplet else {
                continue;
            };
            if confidence <= 0.0 {
                continue;
            }
            frame.set(joint, IVec2::new(x as i32, y as i32));
        }
        Ok(Some(frame))
    }
}

#[derive(Deserialize)]
struct EstimatorOutput {
    #[serde(default)]
    people: Vec<EstimatorPerson>,
}

#[derive(Deserialize)]
struct EstimatorPerson {
    #[serde(default)]
    pose_keypoints_2d: Vec<f64>,
}
