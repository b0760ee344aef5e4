//! The base animated entity: a named 2D position.
use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;

/// Shared handle to a [`Drawable`].
///
/// Anchor references between entities are non-owning in spirit: a chaser
/// points at a hand, a katana points at an elbow, but nobody owns anybody
/// else. The whole core runs on one thread, one frame at a time, so a
/// reference-counted cell is all the sharing machinery required.
pub type DrawableRef = Rc<RefCell<Drawable>>;

/// A named entity with a mutable integer position.
///
/// The position is rewritten in place each frame by whichever movement
/// strategy owns the drawable. The name is a label for logs only and is
/// never checked for uniqueness.
#[derive(Clone, Debug)]
pub struct Drawable {
    /// Current position on the frame, in pixels.
    pub pos: IVec2,
    /// Display label used in logging.
    pub name: String,
}

impl Drawable {
    /// Creates a drawable at the given pixel position.
    #[must_use]
    pub fn new(x: i32, y: i32, name: impl Into<String>) -> Self {
        Self {
            pos: IVec2::new(x, y),
            name: name.into(),
        }
    }

    /// Creates a drawable wrapped in a shared handle so other entities can
    /// anchor to it.
    #[must_use]
    pub fn shared(x: i32, y: i32, name: impl Into<String>) -> DrawableRef {
        Rc::new(RefCell::new(Self::new(x, y, name)))
    }
}
