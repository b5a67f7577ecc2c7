//! Shape abstraction shared by every scene entity.

use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::cloud::Cloud;
use crate::rect::Rect;
use crate::render::{Primitive, Renderer, ShapeUniforms};
use crate::triangle::Triangle;

/// Axis-aligned bounding box in world space (+Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl BoundingBox {
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.half();
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            bottom: center.y - half.y,
            top: center.y + half.y,
        }
    }

    /// Closed-interval overlap: boxes that only share an edge still overlap.
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let apart_x = self.right < other.left || self.left > other.right;
        let apart_y = self.top < other.bottom || self.bottom > other.top;
        !apart_x && !apart_y
    }

    /// Smallest box enclosing both.
    #[inline]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.min(other.bottom),
            top: self.top.max(other.top),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.bottom + self.top) * 0.5)
    }
}

/// State every shape carries: center position, full extents, fill color.
///
/// Invariant: `size` components are non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeBody {
    pub position: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl ShapeBody {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        debug_assert!(size.x >= 0.0 && size.y >= 0.0, "negative shape size: {size:?}");
        Self { position, size, color }
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_size(self.position, self.size)
    }

    #[inline]
    pub fn uniforms(&self) -> ShapeUniforms {
        ShapeUniforms {
            position: self.position,
            size: self.size,
            color: self.color,
        }
    }
}

/// Tagged view of a shape's concrete kind.
///
/// Collision dispatch matches on this instead of inspecting runtime types.
#[derive(Debug, Copy, Clone)]
pub enum ShapeKind<'a> {
    Rect(&'a Rect),
    Triangle(&'a Triangle),
    Cloud(&'a Cloud),
}

impl<'a> ShapeKind<'a> {
    /// Whether shapes of this kind take part in overlap tests at all.
    pub fn supports_collision(&self) -> bool {
        match self {
            ShapeKind::Rect(_) | ShapeKind::Cloud(_) => true,
            ShapeKind::Triangle(_) => false,
        }
    }

    /// The rectangle an overlap query may test against.
    ///
    /// `None` for kinds without collision and for composites: only plain
    /// rectangles are valid overlap targets.
    pub fn collision_rect(self) -> Option<&'a Rect> {
        if !self.supports_collision() {
            return None;
        }
        match self {
            ShapeKind::Rect(r) => Some(r),
            ShapeKind::Triangle(_) | ShapeKind::Cloud(_) => None,
        }
    }
}

/// A drawable scene entity.
///
/// Implementors provide their body, kind and primitive; the rest has
/// defaults. Composite shapes override the mutators and `draw`.
pub trait Shape {
    fn body(&self) -> &ShapeBody;
    fn body_mut(&mut self) -> &mut ShapeBody;
    fn kind(&self) -> ShapeKind<'_>;
    fn primitive(&self) -> Primitive;

    fn bounding_box(&self) -> BoundingBox {
        self.body().bounding_box()
    }

    fn position(&self) -> Vec2 {
        self.body().position
    }

    fn set_position(&mut self, position: Vec2) {
        self.body_mut().position = position;
    }

    fn size(&self) -> Vec2 {
        self.body().size
    }

    fn color(&self) -> Color {
        self.body().color
    }

    fn set_color(&mut self, color: Color) {
        self.body_mut().color = color;
    }

    /// Uploads position, size and color.
    fn prepare_for_draw(&self, renderer: &mut dyn Renderer) {
        renderer.upload_uniforms(self.body().uniforms());
    }

    /// Draws with the uniforms from the last `prepare_for_draw`.
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_primitive(self.primitive());
    }
}
