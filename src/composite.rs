//! Composite entities: one movement strategy united with one rendering
//! strategy over a single shared position.
//!
//! The two capabilities stay independent behind the [`Mover`] and
//! [`Renderer`] traits; [`CompositeEntity`] wires one of each to a
//! [`DrawableRef`] at construction and never swaps them afterwards. The
//! stage drives every entity through the object-safe [`Performer`] trait.
use glam::IVec2;

use crate::canvas::Canvas;
use crate::drawable::{Drawable, DrawableRef};
use crate::error::RenderError;
use crate::movement::{Chaser, Fixed, Mover, RandomWalk};
use crate::render::{Renderer, Spinning};

/// Anything the stage can animate: update the position, then paint.
pub trait Performer {
    /// Label used in logs.
    fn name(&self) -> String;

    /// Recomputes this entity's position for the current frame.
    fn update(&mut self);

    /// Paints this entity into the canvas. A failed draw aborts the
    /// current frame's draw pass; the error carries up to the caller.
    fn draw(&mut self, canvas: &mut dyn Canvas, allow_transparency: bool)
        -> Result<(), RenderError>;
}

/// A drawable with exactly one movement behaviour and one rendering
/// behaviour, both chosen at construction.
pub struct CompositeEntity<M, R> {
    drawable: DrawableRef,
    mover: M,
    renderer: R,
}

impl<M: Mover, R: Renderer> CompositeEntity<M, R> {
    /// Builds an entity at the given position.
    #[must_use]
    pub fn new(x: i32, y: i32, name: impl Into<String>, mover: M, renderer: R) -> Self {
        Self {
            drawable: Drawable::shared(x, y, name),
            mover,
            renderer,
        }
    }

    /// A handle to this entity's drawable, so other entities can anchor to
    /// it. An entity must not be given its own handle as a target.
    #[must_use]
    pub fn anchor(&self) -> DrawableRef {
        self.drawable.clone()
    }

    /// The entity's current position.
    #[must_use]
    pub fn position(&self) -> IVec2 {
        self.drawable.borrow().pos
    }
}

impl<M: Mover, R: Renderer> Performer for CompositeEntity<M, R> {
    fn name(&self) -> String {
        self.drawable.borrow().name.clone()
    }

    fn update(&mut self) {
        let current = self.drawable.borrow().pos;
        let next = self.mover.step(current);
        self.drawable.borrow_mut().pos = next;
    }

    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        allow_transparency: bool,
    ) -> Result<(), RenderError> {
        let center = self.drawable.borrow().pos;
        self.renderer.draw(canvas, center, allow_transparency);
        Ok(())
    }
}

/// A spinning halo that chases the given anchor.
#[must_use]
pub fn spinning_chaser(
    x: i32,
    y: i32,
    name: impl Into<String>,
    target: Option<DrawableRef>,
) -> CompositeEntity<Chaser, Spinning> {
    CompositeEntity::new(x, y, name, Chaser::new(target), Spinning::new())
}

/// A spinning halo pinned to the given anchor.
#[must_use]
pub fn spinning_fixed(
    x: i32,
    y: i32,
    name: impl Into<String>,
    target: Option<DrawableRef>,
) -> CompositeEntity<Fixed, Spinning> {
    CompositeEntity::new(x, y, name, Fixed::new(target), Spinning::new())
}

/// A spinning halo on an unbounded random walk.
#[must_use]
pub fn spinning_random(x: i32, y: i32, name: impl Into<String>) -> CompositeEntity<RandomWalk, Spinning> {
    CompositeEntity::new(x, y, name, RandomWalk::new(), Spinning::new())
}
