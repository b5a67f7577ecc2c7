//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application on top of it. Runtime internals stay out of user code.

mod app;
mod ctx;

pub use app::{App, AppControl, WindowStart};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_size;
