//! Skyline scene model.
//!
//! A parallax city: three tiers of scrolling buildings, drifting clouds and a
//! cursor-driven avatar. Buildings light up while the avatar touches them;
//! touching a cloud ends the scene.
//!
//! World space is bottom-up: origin bottom-left, +X right, +Y up, units are
//! logical pixels. Every shape position is the center of its bounding box.
//!
//! Nothing here talks to the GPU. Shapes describe themselves to a
//! [`Renderer`], which the binary implements on top of the engine.

pub mod palette;
pub mod render;
pub mod shape;

mod cloud;
mod config;
mod rect;
mod scene;
mod tier;
mod triangle;

pub use cloud::Cloud;
pub use config::{MotionMode, SceneConfig};
pub use rect::Rect;
pub use render::{Primitive, Renderer, ShapeUniforms};
pub use scene::{SceneInput, SceneModel, Termination};
pub use shape::{BoundingBox, Shape, ShapeBody, ShapeKind};
pub use tier::{Tier, TierName, TierSpec, VerticalAnchor, BASE_LINE, BUILDING_GAP};
pub use triangle::Triangle;

pub use skyline_engine::coords::Vec2;
pub use skyline_engine::paint::Color;
