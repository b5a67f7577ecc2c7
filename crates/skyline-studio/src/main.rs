mod renderer;

use anyhow::Result;
use winit::dpi::LogicalSize;

use skyline_city::{MotionMode, SceneConfig, SceneInput, SceneModel, Vec2};
use skyline_engine::coords::Viewport;
use skyline_engine::core::{App, AppControl, FrameCtx, WindowStart};
use skyline_engine::device::GpuInit;
use skyline_engine::input::Key;
use skyline_engine::logging::{init_logging, LoggingConfig};
use skyline_engine::render::shapes::rect::RectRenderer;
use skyline_engine::render::shapes::triangle::TriangleRenderer;
use skyline_engine::window::{Runtime, RuntimeConfig};

use crate::renderer::DrawListRenderer;

const SEED_VAR: &str = "SKYLINE_SEED";
const MOTION_VAR: &str = "SKYLINE_MOTION";

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("skyline failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let scene_config = scene_config(|name| std::env::var(name).ok());

    let runtime = RuntimeConfig {
        title: "Skyline".to_string(),
        size: LogicalSize::new(
            f64::from(scene_config.screen_width),
            f64::from(scene_config.screen_height),
        ),
        resizable: false,
    };

    Runtime::run(runtime, GpuInit::default(), StudioApp::new(scene_config))
}

/// Builds the scene config, applying `SKYLINE_SEED` and `SKYLINE_MOTION`
/// from `lookup`. Unparseable values are logged and ignored.
fn scene_config(lookup: impl Fn(&str) -> Option<String>) -> SceneConfig {
    let mut config = SceneConfig::default();

    if let Some(raw) = lookup(SEED_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(err) => log::warn!("{SEED_VAR}={raw:?} is not a u64 ({err}); using default seed"),
        }
    }

    if let Some(raw) = lookup(MOTION_VAR) {
        match MotionMode::from_name(&raw) {
            Some(motion) => config = config.with_motion(motion),
            None => log::warn!("{MOTION_VAR}={raw:?} is not `tick` or `scaled`; using per-tick motion"),
        }
    }

    config
}

struct StudioApp {
    scene: SceneModel,
    recorder: DrawListRenderer,
    triangles: TriangleRenderer,
    rects: RectRenderer,
}

impl StudioApp {
    fn new(config: SceneConfig) -> Self {
        let viewport = Viewport::new(config.screen_width, config.screen_height);
        Self {
            scene: SceneModel::new(config),
            recorder: DrawListRenderer::new(viewport),
            triangles: TriangleRenderer::new(),
            rects: RectRenderer::new(),
        }
    }
}

impl App for StudioApp {
    fn on_start(&mut self, ctx: &WindowStart) {
        let cfg = self.scene.config();
        let (w, h) = ctx.logical_size;
        if (w, h) != (cfg.screen_width, cfg.screen_height) {
            log::warn!(
                "window is {w}x{h}, scene expects {}x{}",
                cfg.screen_width,
                cfg.screen_height
            );
        }
        log::info!("motion: {:?}, scale factor {}", cfg.motion, ctx.scale_factor);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let input = SceneInput {
            cursor: ctx.input.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            close_requested: ctx.input.close_requested || ctx.input_frame.key_pressed(Key::Escape),
        };

        self.scene.handle_input(&input);
        self.scene.update(ctx.time.dt);

        self.recorder.begin_frame();
        self.scene.render(&mut self.recorder);

        // Mountains are the only triangles and sit behind everything else.
        let list = self.recorder.list();
        let triangles = &mut self.triangles;
        let rects = &mut self.rects;
        let control = ctx.render(self.recorder.clear_color(), |rctx, target| {
            triangles.render(rctx, target, list);
            rects.render(rctx, target, list);
        });

        if self.scene.should_close() {
            log::info!(
                "exiting after {:.1}s: {:?}",
                self.scene.elapsed(),
                self.scene.termination()
            );
            return AppControl::Exit;
        }
        control
    }
}
