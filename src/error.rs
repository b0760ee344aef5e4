//! Error types surfaced by the animation core.
//!
//! The error surface is deliberately small: a draw pass either completes or
//! reports why it could not, and pose ingestion either yields a frame or
//! reports the malformed input. Nothing is retried or swallowed; the caller
//! owns recovery.
use thiserror::Error;

/// Failures raised while drawing one frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The two limb anchors coincide, so no unit direction exists.
    #[error("limb overlay `{name}` has zero length; no direction can be derived")]
    ZeroLengthLimb {
        /// Label of the offending overlay.
        name: String,
    },
}

/// Failures raised while ingesting pose estimator output.
#[derive(Debug, Error)]
pub enum PoseError {
    /// The pose file was not valid JSON in the expected shape.
    #[error("malformed pose output: {0}")]
    MalformedJson(#[from] serde_json::Error),
}
