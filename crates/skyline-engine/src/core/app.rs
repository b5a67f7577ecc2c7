use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binary.
pub trait App {
    /// Called once after the window and GPU are up, before the first frame.
    fn on_start(&mut self, ctx: &WindowStart) {
        let _ = ctx;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

/// Facts about the window available at startup.
#[derive(Debug, Copy, Clone)]
pub struct WindowStart {
    /// Logical window size `(width, height)`.
    pub logical_size: (f32, f32),
    pub scale_factor: f64,
}
