//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering

mod error;
mod gpu;

pub use error::{GpuInitError, SurfaceErrorAction};
pub use gpu::{Gpu, GpuFrame, GpuInit};
