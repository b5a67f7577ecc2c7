/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders. The skyline window is fixed-size, so one
/// viewport serves for the whole run.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Mirrors a y coordinate between top-left (+Y down) and bottom-up (+Y up) space.
    ///
    /// The mapping is its own inverse.
    #[inline]
    pub fn flip_y(self, y: f32) -> f32 {
        self.height - y
    }
}
