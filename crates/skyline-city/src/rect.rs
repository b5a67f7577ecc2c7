use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::render::Primitive;
use crate::shape::{Shape, ShapeBody, ShapeKind};

/// Unit quad, centered: top-left, top-right, bottom-left, bottom-right.
pub(crate) const QUAD_VERTICES: [Vec2; 4] = [
    Vec2::new(-0.5, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
];

/// Axis-aligned rectangle. Its bounding box is exactly `position ± size/2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    body: ShapeBody,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            body: ShapeBody::new(position, size, color),
        }
    }

    /// Overlap with another rectangle. Shared edges count as overlap.
    ///
    /// Symmetric, and reflexive for any rectangle.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }

    /// Overlap with an arbitrary shape. Only rectangles can collide with a
    /// rectangle; every other kind yields `false`.
    pub fn overlaps_shape(&self, other: &dyn Shape) -> bool {
        other.kind().collision_rect().is_some_and(|r| self.overlaps(r))
    }

    /// Translates horizontally; `delta` may be negative.
    #[inline]
    pub fn move_x(&mut self, delta: f32) {
        self.body.position.x += delta;
    }

    #[inline]
    pub fn set_position_x(&mut self, x: f32) {
        self.body.position.x = x;
    }

    /// Translates by `delta` on both axes.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.body.position += delta;
    }
}

impl Shape for Rect {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn kind(&self) -> ShapeKind<'_> {
        ShapeKind::Rect(self)
    }

    fn primitive(&self) -> Primitive {
        Primitive::Quad
    }
}
