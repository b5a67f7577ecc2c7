/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Scene colors are opaque, where premultiplied and straight alpha coincide,
/// so `rgb` / `from_rgb_u8` can be `const` and used for named palettes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Opaque color from normalized components in `[0, 1]`.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 8-bit channels (`0`–`255`).
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Channel array in the layout the shaders expect.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_u8_normalizes_channels() {
        let c = Color::from_rgb_u8(255, 0, 51);
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.2));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn to_array_is_rgba_order() {
        assert_eq!(Color::rgb(0.25, 0.5, 0.75).to_array(), [0.25, 0.5, 0.75, 1.0]);
    }
}
