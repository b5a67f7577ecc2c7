//! Coordinate and geometry types shared by the renderers and the scene model.
//!
//! Canonical renderer space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The scene model works bottom-up (+Y up); `Viewport::flip_y` converts
//! between the two. Renderers convert to NDC in shaders using a viewport uniform.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
