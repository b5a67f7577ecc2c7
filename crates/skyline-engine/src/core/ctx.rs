use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Window handle and immutable window metadata.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        logical_size(self.window)
    }
}

pub(crate) fn logical_size(window: &Window) -> (f32, f32) {
    let phys = window.inner_size();
    let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(window.scale_factor());
    (logi.width as f32, logi.height as f32)
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
}

impl FrameCtx<'_, '_> {
    /// Acquires the next surface texture, clears it to `clear`, lets `draw`
    /// record into it and presents.
    ///
    /// A transient surface error skips the frame. `AppControl::Exit` comes
    /// back only when the surface is lost for good.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => AppControl::Continue,
                };
            }
        };

        let (w, h) = self.window.logical_size();
        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            Viewport::new(w, h),
        );

        // The target borrows the encoder; it must be gone before `submit` takes the frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            target.clear(clear);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
