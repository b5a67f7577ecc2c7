//! Skyline engine crate.
//!
//! Owns the window, GPU, input and frame-timing pieces that the scene model
//! draws through. Nothing in here knows about buildings or clouds.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
