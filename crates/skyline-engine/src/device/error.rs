use thiserror::Error;

/// Failure while bringing up the drawing surface or the GPU device.
///
/// None of these are recoverable: the runtime reports them and exits before
/// any frame is rendered.
#[derive(Debug, Error)]
pub enum GpuInitError {
    #[error("window has zero size")]
    ZeroSizedWindow,

    #[error("failed to create wgpu surface")]
    Surface(#[source] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter")]
    Adapter(#[source] wgpu::RequestAdapterError),

    #[error("failed to create wgpu device/queue")]
    Device(#[source] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    /// Classifies a surface error. Reconfiguration itself is done by the caller.
    pub fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(SurfaceErrorAction::classify(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(SurfaceErrorAction::classify(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
    }

    #[test]
    fn out_of_memory_is_fatal() {
        assert_eq!(SurfaceErrorAction::classify(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }

    #[test]
    fn timeout_skips_frame() {
        assert_eq!(SurfaceErrorAction::classify(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
    }
}
