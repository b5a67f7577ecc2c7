use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx, WindowStart};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState, PointerMoveEvent};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    /// The scene lays out against a fixed screen size, so this defaults to `false`.
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "skyline".to_string(),
            size: LogicalSize::new(800.0, 600.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, brings up the GPU and drives `app` until it exits.
    ///
    /// Window or GPU initialization failures end the loop before the first
    /// frame and are returned here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.init_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    init_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            init_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
            .try_build()
            .context("GPU initialization failed")
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                let start = entry.with_window(|w| WindowStart {
                    logical_size: crate::core::logical_size(w),
                    scale_factor: w.scale_factor(),
                });
                log::info!(
                    "window ready: {}x{} logical px (scale {})",
                    start.logical_size.0,
                    start.logical_size.1,
                    start.scale_factor
                );

                self.app.on_start(&start);
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(e) => {
                log::error!("startup failed: {e:#}");
                self.init_error = Some(e);
                self.request_exit(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous animation: FIFO presentation paces the loop.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return;
        };

        let mut app_control = AppControl::Continue;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(fields.window, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }

            match &event {
                WindowEvent::Resized(size) => {
                    fields.gpu.resize(*size);
                }

                WindowEvent::ScaleFactorChanged { .. } => {
                    fields.gpu.resize(fields.window.inner_size());
                }

                WindowEvent::RedrawRequested => {
                    let ft: FrameTime = fields.clock.tick();

                    // Scope to ensure `ctx` is dropped before mutating frame state.
                    {
                        let mut ctx = FrameCtx {
                            window: WindowCtx { window: fields.window },
                            gpu: fields.gpu,
                            input: fields.input_state,
                            input_frame: fields.input_frame,
                            time: ft,
                        };

                        app_control = app.on_frame(&mut ctx);
                    }

                    // Clear per-frame deltas after the frame is consumed.
                    fields.input_frame.clear();
                }

                _ => {}
            }
        });

        match &event {
            // The close request reached the app as input; give it a frame to react.
            WindowEvent::CloseRequested => entry.with_window(|w| w.request_redraw()),
            WindowEvent::Destroyed => app_control = AppControl::Exit,
            _ => {}
        }

        if app_control == AppControl::Exit {
            log::info!("app requested exit");
            self.entry = None;
            self.request_exit(event_loop);
        }
    }
}

fn translate_input_event(window: &Window, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(other) => Key::Unknown(other as u32),
        // NativeKeyCode is not a u32 in winit 0.30; keep "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_escape() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_key_keeps_platform_code() {
        let key = map_key(PhysicalKey::Code(KeyCode::KeyQ));
        assert_eq!(key, Key::Unknown(KeyCode::KeyQ as u32));
    }

    #[test]
    fn default_config_is_fixed_size() {
        let config = RuntimeConfig::default();
        assert!(!config.resizable);
        assert_eq!(config.size, LogicalSize::new(800.0, 600.0));
    }
}
