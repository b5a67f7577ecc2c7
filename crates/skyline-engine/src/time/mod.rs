//! Time subsystem.
//!
//! Frame timing decoupled from the runtime so it can be tested on its own.
//! The runtime owns one `FrameClock` and calls `tick()` once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
