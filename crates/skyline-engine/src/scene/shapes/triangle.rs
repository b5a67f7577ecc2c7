use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Triangle draw payload: three corners in renderer space.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
}

impl DrawList {
    /// Records a solid triangle.
    #[inline]
    pub fn push_triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.push(DrawCmd::Triangle(TriangleCmd { points, color }));
    }
}
