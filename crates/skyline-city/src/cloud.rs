use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::palette::WHITE;
use crate::rect::Rect;
use crate::render::{Primitive, Renderer};
use crate::shape::{BoundingBox, Shape, ShapeBody, ShapeKind};

const CENTER_PUFF: Vec2 = Vec2::new(60.0, 40.0);
const SIDE_PUFF: Vec2 = Vec2::new(40.0, 30.0);
const SIDE_OFFSET: Vec2 = Vec2::new(30.0, -5.0);

/// Composite cloud: a large center puff flanked by two lower side puffs.
///
/// The body tracks the anchor (center puff position) and the extents of the
/// union box. Puffs keep their offsets from the anchor for the cloud's whole
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    body: ShapeBody,
    puffs: [Rect; 3],
}

impl Cloud {
    pub fn new(anchor: Vec2) -> Self {
        let puffs = [
            Rect::new(anchor + Vec2::new(-SIDE_OFFSET.x, SIDE_OFFSET.y), SIDE_PUFF, WHITE),
            Rect::new(anchor, CENTER_PUFF, WHITE),
            Rect::new(anchor + SIDE_OFFSET, SIDE_PUFF, WHITE),
        ];
        let bbox = union_of(&puffs);
        Self {
            body: ShapeBody::new(anchor, Vec2::new(bbox.width(), bbox.height()), WHITE),
            puffs,
        }
    }

    pub fn puffs(&self) -> &[Rect] {
        &self.puffs
    }

    /// Overlap of the union box with a rectangle-kind shape.
    pub fn overlaps_shape(&self, other: &dyn Shape) -> bool {
        other
            .kind()
            .collision_rect()
            .is_some_and(|r| self.bounding_box().overlaps(&r.bounding_box()))
    }

    /// Drifts by `dx`. Once the cloud has fully left through the left edge
    /// it re-enters just past `boundary_width`, centered half its width
    /// beyond it.
    pub fn advance(&mut self, dx: f32, boundary_width: f32) {
        self.translate(Vec2::new(dx, 0.0));

        let bbox = self.bounding_box();
        if bbox.right < 0.0 {
            let target = boundary_width + bbox.width() * 0.5;
            self.translate(Vec2::new(target - bbox.center().x, 0.0));
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.body.position += delta;
        for puff in &mut self.puffs {
            puff.translate(delta);
        }
    }
}

fn union_of(puffs: &[Rect; 3]) -> BoundingBox {
    let [a, b, c] = puffs;
    a.bounding_box()
        .union(&b.bounding_box())
        .union(&c.bounding_box())
}

impl Shape for Cloud {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn kind(&self) -> ShapeKind<'_> {
        ShapeKind::Cloud(self)
    }

    fn primitive(&self) -> Primitive {
        Primitive::Quad
    }

    fn bounding_box(&self) -> BoundingBox {
        union_of(&self.puffs)
    }

    fn set_position(&mut self, position: Vec2) {
        let delta = position - self.body.position;
        self.translate(delta);
    }

    fn set_color(&mut self, color: Color) {
        self.body.color = color;
        for puff in &mut self.puffs {
            puff.set_color(color);
        }
    }

    // Uniforms go up per puff in `draw`.
    fn prepare_for_draw(&self, _renderer: &mut dyn Renderer) {}

    fn draw(&self, renderer: &mut dyn Renderer) {
        for puff in &self.puffs {
            puff.prepare_for_draw(renderer);
            puff.draw(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DARK_GREEN;
    use crate::render::RecordingRenderer;
    use crate::triangle::Triangle;

    fn avatar_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(10.0, 10.0), WHITE)
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn bounding_box_is_union_of_puffs() {
        let c = Cloud::new(Vec2::new(200.0, 500.0));
        assert_eq!(
            c.bounding_box(),
            BoundingBox { left: 150.0, right: 250.0, bottom: 480.0, top: 520.0 }
        );
        assert_eq!(c.size(), Vec2::new(100.0, 40.0));
    }

    #[test]
    fn set_position_keeps_puff_offsets() {
        let mut c = Cloud::new(Vec2::new(0.0, 0.0));
        let before: Vec<Vec2> = c.puffs().iter().map(|p| p.position()).collect();

        c.set_position(Vec2::new(10.0, -4.0));

        for (p, b) in c.puffs().iter().zip(before) {
            assert_eq!(p.position(), b + Vec2::new(10.0, -4.0));
        }
        assert_eq!(c.position(), Vec2::new(10.0, -4.0));
    }

    #[test]
    fn set_color_reaches_every_puff() {
        let mut c = Cloud::new(Vec2::zero());
        c.set_color(DARK_GREEN);
        assert!(c.puffs().iter().all(|p| p.color() == DARK_GREEN));
    }

    // ── drift ─────────────────────────────────────────────────────────────

    #[test]
    fn advance_moves_every_puff() {
        let mut c = Cloud::new(Vec2::new(400.0, 520.0));
        c.advance(-1.0, 800.0);
        assert_eq!(c.position(), Vec2::new(399.0, 520.0));
        assert_eq!(c.bounding_box().left, 349.0);
    }

    #[test]
    fn advance_wraps_after_leaving_left_edge() {
        // Right edge sits at 0.5: one more step pushes it below zero.
        let mut c = Cloud::new(Vec2::new(-49.5, 500.0));
        c.advance(-1.0, 800.0);

        let b = c.bounding_box();
        assert_eq!(b.left, 800.0);
        assert_eq!(b.center().x, 850.0);
        assert_eq!(b.center().y, 500.0);
    }

    #[test]
    fn advance_does_not_wrap_while_touching_zero() {
        let mut c = Cloud::new(Vec2::new(-49.0, 500.0));
        c.advance(-1.0, 800.0);
        assert_eq!(c.bounding_box().right, 0.0);
    }

    // ── collision ─────────────────────────────────────────────────────────

    #[test]
    fn overlaps_rect_inside_union_box() {
        let c = Cloud::new(Vec2::new(200.0, 500.0));
        assert!(c.overlaps_shape(&avatar_at(200.0, 500.0)));
        // Corner region outside every puff, still inside the union box.
        assert!(c.overlaps_shape(&avatar_at(248.0, 518.0)));
        assert!(!c.overlaps_shape(&avatar_at(200.0, 300.0)));
    }

    #[test]
    fn overlaps_shape_ignores_non_rects() {
        let c = Cloud::new(Vec2::new(200.0, 500.0));
        let tri = Triangle::new(Vec2::new(200.0, 500.0), Vec2::new(50.0, 50.0), DARK_GREEN);
        assert!(!c.overlaps_shape(&tri));
        assert!(!c.overlaps_shape(&Cloud::new(Vec2::new(200.0, 500.0))));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draws_each_puff_as_a_quad() {
        let c = Cloud::new(Vec2::new(200.0, 500.0));
        let mut r = RecordingRenderer::default();
        c.prepare_for_draw(&mut r);
        c.draw(&mut r);

        let draws = r.draws();
        assert_eq!(draws.len(), 3);
        assert!(draws.iter().all(|(u, p)| *p == Primitive::Quad && u.color == WHITE));
        assert_eq!(draws[1].0.position, Vec2::new(200.0, 500.0));
    }
}
