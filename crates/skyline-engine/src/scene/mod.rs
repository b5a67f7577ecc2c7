//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep paint order equal to recording order (back-to-front)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::rect::RectCmd;
pub use shapes::triangle::TriangleCmd;
