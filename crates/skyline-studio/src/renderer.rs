use skyline_city::{Primitive, Renderer, ShapeUniforms};
use skyline_engine::coords::{Rect, Vec2, Viewport};
use skyline_engine::paint::Color;
use skyline_engine::scene::DrawList;

/// Records scene draws into an engine [`DrawList`].
///
/// The scene is bottom-up; the draw list is top-left. Every point is flipped
/// through the viewport on the way in.
pub struct DrawListRenderer {
    viewport: Viewport,
    list: DrawList,
    clear: Color,
    pending: Option<ShapeUniforms>,
}

impl DrawListRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            list: DrawList::new(),
            clear: Color::rgb(0.0, 0.0, 0.0),
            pending: None,
        }
    }

    /// Drops last frame's commands.
    pub fn begin_frame(&mut self) {
        self.list.clear();
        self.pending = None;
    }

    pub fn clear_color(&self) -> Color {
        self.clear
    }

    pub fn list(&self) -> &DrawList {
        &self.list
    }

    fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, self.viewport.flip_y(p.y))
    }
}

impl Renderer for DrawListRenderer {
    fn clear(&mut self, color: Color) {
        self.clear = color;
    }

    fn upload_uniforms(&mut self, uniforms: ShapeUniforms) {
        self.pending = Some(uniforms);
    }

    fn draw_primitive(&mut self, primitive: Primitive) {
        let Some(u) = self.pending else {
            log::warn!("draw_primitive({primitive:?}) without uniforms; skipped");
            return;
        };

        match primitive {
            Primitive::Quad => {
                let rect = Rect::from_center_size(self.to_screen(u.position), u.size);
                self.list.push_solid_rect(rect, u.color);
            }
            Primitive::Triangle => {
                let mut points = [Vec2::zero(); 3];
                for (dst, v) in points.iter_mut().zip(primitive.world_vertices(&u)) {
                    *dst = self.to_screen(v);
                }
                self.list.push_triangle(points, u.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_engine::scene::DrawCmd;

    fn uniforms(x: f32, y: f32, w: f32, h: f32) -> ShapeUniforms {
        ShapeUniforms {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color: Color::rgb(1.0, 0.0, 0.0),
        }
    }

    #[test]
    fn quad_is_flipped_to_top_left() {
        let mut r = DrawListRenderer::new(Viewport::new(800.0, 600.0));
        r.upload_uniforms(uniforms(400.0, 50.0, 800.0, 200.0));
        r.draw_primitive(Primitive::Quad);

        let DrawCmd::Rect(cmd) = &r.list().items()[0] else {
            panic!("expected a rect");
        };
        assert_eq!(cmd.rect, Rect::new(0.0, 450.0, 800.0, 200.0));
    }

    #[test]
    fn triangle_apex_points_up_on_screen() {
        let mut r = DrawListRenderer::new(Viewport::new(800.0, 600.0));
        r.upload_uniforms(uniforms(200.0, 300.0, 800.0, 400.0));
        r.draw_primitive(Primitive::Triangle);

        let DrawCmd::Triangle(cmd) = &r.list().items()[0] else {
            panic!("expected a triangle");
        };
        assert_eq!(
            cmd.points,
            [Vec2::new(-200.0, 500.0), Vec2::new(600.0, 500.0), Vec2::new(200.0, 100.0)]
        );
    }

    #[test]
    fn draw_without_upload_is_skipped() {
        let mut r = DrawListRenderer::new(Viewport::new(800.0, 600.0));
        r.draw_primitive(Primitive::Quad);
        assert!(r.list().is_empty());
    }

    #[test]
    fn begin_frame_resets_commands() {
        let mut r = DrawListRenderer::new(Viewport::new(800.0, 600.0));
        r.clear(Color::rgb(0.0, 0.0, 1.0));
        r.upload_uniforms(uniforms(1.0, 1.0, 1.0, 1.0));
        r.draw_primitive(Primitive::Quad);

        r.begin_frame();
        assert!(r.list().is_empty());
        assert_eq!(r.clear_color(), Color::rgb(0.0, 0.0, 1.0));
    }
}
