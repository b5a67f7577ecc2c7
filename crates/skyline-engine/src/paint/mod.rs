//! Paint model shared between the scene model and the renderers.
//!
//! The skyline scene only ever fills shapes with a solid color, so the paint
//! model is the color type alone.

pub mod color;

pub use color::Color;
