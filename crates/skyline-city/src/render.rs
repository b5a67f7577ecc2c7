//! The drawing capability shapes expose themselves to.
//!
//! The scene model never owns a GPU handle. A `Renderer` is borrowed for the
//! duration of one render pass and every shape pushes its uniforms and its
//! primitive into it. How those become pixels is up to the implementor.

use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::rect::QUAD_VERTICES;
use crate::triangle::TRIANGLE_VERTICES;

/// Per-shape transform and color, uploaded before each draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeUniforms {
    /// Center of the shape, world space.
    pub position: Vec2,
    /// Full extents.
    pub size: Vec2,
    pub color: Color,
}

/// Unit primitive a shape is drawn with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// Unit square, two triangles.
    Quad,
    /// Unit isosceles triangle, apex up.
    Triangle,
}

impl Primitive {
    /// Vertices centered on the origin with unit extents.
    /// Scale by `ShapeUniforms::size`, then offset by `position`.
    pub fn unit_vertices(self) -> &'static [Vec2] {
        match self {
            Primitive::Quad => &QUAD_VERTICES,
            Primitive::Triangle => &TRIANGLE_VERTICES,
        }
    }

    /// World-space corners for the given uniforms, in `unit_vertices` order.
    pub fn world_vertices(self, uniforms: &ShapeUniforms) -> impl Iterator<Item = Vec2> + '_ {
        self.unit_vertices()
            .iter()
            .map(move |v| uniforms.position + *v * uniforms.size)
    }
}

/// Drawing capability. One call pair (`upload_uniforms`, `draw_primitive`)
/// per visible shape, issued back-to-front.
pub trait Renderer {
    /// Fills the whole surface. Issued once, first, per frame.
    fn clear(&mut self, color: Color);

    fn upload_uniforms(&mut self, uniforms: ShapeUniforms);

    /// Draws `primitive` with the most recently uploaded uniforms.
    fn draw_primitive(&mut self, primitive: Primitive);
}

/// Test double recording every renderer call in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RenderCall {
    Clear(Color),
    Upload(ShapeUniforms),
    Draw(Primitive),
}

#[cfg(test)]
impl RecordingRenderer {
    /// Uniforms of each drawn shape, paired with its primitive, in draw order.
    pub fn draws(&self) -> Vec<(ShapeUniforms, Primitive)> {
        let mut last = None;
        let mut out = Vec::new();
        for call in &self.calls {
            match call {
                RenderCall::Upload(u) => last = Some(*u),
                RenderCall::Draw(p) => {
                    if let Some(u) = last {
                        out.push((u, *p));
                    }
                }
                RenderCall::Clear(_) => {}
            }
        }
        out
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.calls.push(RenderCall::Clear(color));
    }

    fn upload_uniforms(&mut self, uniforms: ShapeUniforms) {
        self.calls.push(RenderCall::Upload(uniforms));
    }

    fn draw_primitive(&mut self, primitive: Primitive) {
        self.calls.push(RenderCall::Draw(primitive));
    }
}
