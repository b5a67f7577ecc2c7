use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::render::Primitive;
use crate::shape::{Shape, ShapeBody, ShapeKind};

/// Unit triangle, centered: bottom-left, bottom-right, apex.
pub(crate) const TRIANGLE_VERTICES: [Vec2; 3] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.0, 0.5),
];

/// Decorative triangle (the mountains). Never collides and is never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    body: ShapeBody,
}

impl Triangle {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            body: ShapeBody::new(position, size, color),
        }
    }
}

impl Shape for Triangle {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn kind(&self) -> ShapeKind<'_> {
        ShapeKind::Triangle(self)
    }

    fn primitive(&self) -> Primitive {
        Primitive::Triangle
    }
}
