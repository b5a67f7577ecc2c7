use rand::rngs::StdRng;
use rand::SeedableRng;
use skyline_engine::coords::{Vec2, Viewport};

use crate::cloud::Cloud;
use crate::config::SceneConfig;
use crate::palette::{DARK_GREEN, GRASS_GREEN, SKY_BLUE, WHITE};
use crate::rect::Rect;
use crate::render::Renderer;
use crate::shape::Shape;
use crate::tier::{Tier, TierName};
use crate::triangle::Triangle;

const AVATAR_SIZE: Vec2 = Vec2::new(10.0, 10.0);
const CLOUD_ANCHORS: [Vec2; 3] = [
    Vec2::new(200.0, 500.0),
    Vec2::new(400.0, 520.0),
    Vec2::new(325.0, 480.0),
];

/// Input sampled once per frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SceneInput {
    /// Cursor in window pixels, top-left origin. `None` while the pointer is
    /// outside the window.
    pub cursor: Option<Vec2>,
    /// Window close or Escape.
    pub close_requested: bool,
}

/// Why the scene asked to close.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Termination {
    /// The avatar touched a cloud.
    CloudCollision,
    CloseRequested,
}

/// Owns every entity of the city scene and the rules that mutate them.
///
/// One frame is `handle_input`, then `update`, then `render`.
pub struct SceneModel {
    config: SceneConfig,
    viewport: Viewport,

    avatar: Rect,
    ground: Rect,
    mountains: [Triangle; 2],
    clouds: [Cloud; 3],
    /// Indexed by `TierName`, which is also the draw order.
    tiers: [Tier; 3],

    termination: Option<Termination>,
    elapsed: f64,
    last_dt: f32,
}

impl SceneModel {
    pub fn new(config: SceneConfig) -> Self {
        let (w, h) = (config.screen_width, config.screen_height);
        let mut rng = StdRng::seed_from_u64(config.seed);

        let viewport = Viewport::new(w, h);
        debug_assert!(viewport.is_valid(), "degenerate screen {w}x{h}");

        // Generation order fixes the seeded layout: far, mid, near.
        let tiers = TierName::BACK_TO_FRONT
            .map(|name| Tier::generate(name, config.tier_spec(name).clone(), w, &mut rng));

        log::info!(
            "scene {w}x{h}, seed {:#x}, {} buildings",
            config.seed,
            tiers.iter().map(Tier::len).sum::<usize>()
        );

        Self {
            viewport,
            avatar: Rect::new(Vec2::zero(), AVATAR_SIZE, WHITE),
            ground: Rect::new(Vec2::new(w * 0.5, 50.0), Vec2::new(w, h / 3.0), GRASS_GREEN),
            mountains: [
                Triangle::new(Vec2::new(w / 4.0, 300.0), Vec2::new(w, 400.0), DARK_GREEN),
                Triangle::new(Vec2::new(2.0 * w / 3.0, 300.0), Vec2::new(w, 500.0), DARK_GREEN),
            ],
            clouds: CLOUD_ANCHORS.map(Cloud::new),
            tiers,
            termination: None,
            elapsed: 0.0,
            last_dt: 0.0,
            config,
        }
    }

    /// Moves the avatar to the cursor and recomputes every overlap.
    pub fn handle_input(&mut self, input: &SceneInput) {
        if input.close_requested {
            self.terminate(Termination::CloseRequested);
        }

        if let Some(cursor) = input.cursor {
            let pos = Vec2::new(cursor.x, self.viewport.flip_y(cursor.y));
            self.avatar.set_position(pos);
        }

        for tier in &mut self.tiers {
            tier.recolor(&self.avatar);
        }

        if self.clouds.iter().any(|c| c.overlaps_shape(&self.avatar)) {
            self.terminate(Termination::CloudCollision);
        }
    }

    /// Advances clouds and buildings by one tick.
    pub fn update(&mut self, dt: f32) {
        self.last_dt = dt;
        self.elapsed += f64::from(dt);

        let k = self.config.motion.scale(dt);
        let width = self.config.screen_width;

        for cloud in &mut self.clouds {
            cloud.advance(self.config.cloud_step * k, width);
        }
        for tier in &mut self.tiers {
            let dx = tier.spec().speed * k;
            tier.scroll(dx);
        }
    }

    /// Clears to sky blue, then draws back to front.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear(SKY_BLUE);

        let back_to_front = self
            .mountains
            .iter()
            .map(|m| m as &dyn Shape)
            .chain(self.clouds.iter().map(|c| c as &dyn Shape))
            .chain(std::iter::once(&self.ground as &dyn Shape))
            .chain(
                self.tiers
                    .iter()
                    .flat_map(|t| t.buildings().iter().map(|b| b as &dyn Shape)),
            )
            .chain(std::iter::once(&self.avatar as &dyn Shape));

        for shape in back_to_front {
            shape.prepare_for_draw(renderer);
            shape.draw(renderer);
        }
    }

    fn terminate(&mut self, reason: Termination) {
        if self.termination.is_none() {
            log::info!("scene terminating: {reason:?}");
            self.termination = Some(reason);
        }
    }

    pub fn should_close(&self) -> bool {
        self.termination.is_some()
    }

    /// First termination reason observed, if any.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Seconds accumulated over all `update` calls.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn avatar(&self) -> &Rect {
        &self.avatar
    }

    pub fn ground(&self) -> &Rect {
        &self.ground
    }

    pub fn mountains(&self) -> &[Triangle] {
        &self.mountains
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Tiers in draw order (far, mid, near).
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn tier(&self, name: TierName) -> &Tier {
        &self.tiers[name as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotionMode;
    use crate::palette::{BRICK_RED, CYAN, DARK_BLUE, MAGENTA, ORANGE, PURPLE};
    use crate::render::{Primitive, RecordingRenderer, RenderCall};
    use crate::tier::TierSpec;

    fn scene() -> SceneModel {
        SceneModel::new(SceneConfig::default().with_seed(1))
    }

    /// Cursor (top-left space) that puts the avatar at world `p`.
    fn cursor_at(s: &SceneModel, p: Vec2) -> SceneInput {
        SceneInput {
            cursor: Some(Vec2::new(p.x, s.config().screen_height - p.y)),
            close_requested: false,
        }
    }

    fn first_x(s: &SceneModel, name: TierName) -> f32 {
        s.tier(name).buildings()[0].position().x
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn builds_reference_layout() {
        let s = scene();
        assert_eq!(s.avatar().position(), Vec2::zero());
        assert_eq!(s.avatar().size(), Vec2::new(10.0, 10.0));
        assert_eq!(s.ground().position(), Vec2::new(400.0, 50.0));
        assert_eq!(s.ground().size(), Vec2::new(800.0, 200.0));
        assert_eq!(s.mountains().len(), 2);
        assert_eq!(s.clouds().len(), 3);

        let names: Vec<TierName> = s.tiers().iter().map(Tier::name).collect();
        assert_eq!(names, vec![TierName::Far, TierName::Mid, TierName::Near]);
        assert!(s.tiers().iter().all(|t| !t.is_empty()));
        assert!(!s.should_close());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "degenerate screen")]
    fn zero_width_screen_is_rejected() {
        let cfg = SceneConfig {
            screen_width: 0.0,
            ..SceneConfig::default()
        };
        let _ = SceneModel::new(cfg);
    }

    #[test]
    fn same_seed_same_city() {
        let a = scene();
        let b = scene();
        for (ta, tb) in a.tiers().iter().zip(b.tiers()) {
            assert_eq!(ta.buildings(), tb.buildings());
        }

        let c = SceneModel::new(SceneConfig::default().with_seed(2));
        assert_ne!(a.tier(TierName::Far).buildings(), c.tier(TierName::Far).buildings());
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn cursor_is_flipped_to_world_space() {
        let mut s = scene();
        s.handle_input(&SceneInput {
            cursor: Some(Vec2::new(120.0, 100.0)),
            close_requested: false,
        });
        assert_eq!(s.avatar().position(), Vec2::new(120.0, 500.0));
    }

    #[test]
    fn missing_cursor_keeps_avatar() {
        let mut s = scene();
        s.handle_input(&cursor_at(&s, Vec2::new(30.0, 300.0)));
        s.handle_input(&SceneInput::default());
        assert_eq!(s.avatar().position(), Vec2::new(30.0, 300.0));
    }

    #[test]
    fn building_colors_follow_overlap() {
        let mut s = scene();
        for _ in 0..3 {
            for p in [Vec2::new(60.0, 90.0), Vec2::new(500.0, 200.0), Vec2::new(5.0, 590.0)] {
                s.handle_input(&cursor_at(&s, p));
                s.update(1.0 / 60.0);
                s.handle_input(&cursor_at(&s, p));

                let avatar = s.avatar().clone();
                for t in s.tiers() {
                    let spec = t.spec();
                    for b in t.buildings() {
                        let expected = if b.overlaps(&avatar) {
                            spec.highlight_color
                        } else {
                            spec.idle_color
                        };
                        assert_eq!(b.color(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn tier_palettes() {
        let s = scene();
        let pairs: Vec<_> = s
            .tiers()
            .iter()
            .map(|t| (t.spec().idle_color, t.spec().highlight_color))
            .collect();
        assert_eq!(pairs, vec![(PURPLE, MAGENTA), (DARK_BLUE, CYAN), (BRICK_RED, ORANGE)]);
    }

    #[test]
    fn covering_a_far_building_only_lights_that_building() {
        // Fixed far height: centers at 310, tops at 440, above every mid and
        // near building and below every cloud.
        let cfg = SceneConfig::default()
            .with_seed(4)
            .with_tier(TierName::Far, TierSpec::far().with_height_range(260..=260));
        let mut s = SceneModel::new(cfg);

        let target = s.tier(TierName::Far).buildings()[1].clone();
        let top = target.bounding_box().top;
        s.handle_input(&cursor_at(&s, Vec2::new(target.position().x, top)));

        let far = s.tier(TierName::Far);
        for (i, b) in far.buildings().iter().enumerate() {
            let expected = if i == 1 { MAGENTA } else { PURPLE };
            assert_eq!(b.color(), expected, "far building {i}");
        }
        assert!(s.tier(TierName::Mid).buildings().iter().all(|b| b.color() == DARK_BLUE));
        assert!(s.tier(TierName::Near).buildings().iter().all(|b| b.color() == BRICK_RED));
        assert!(s.clouds().iter().all(|c| c.color() == WHITE));
        assert!(!s.should_close());
    }

    // ── termination ───────────────────────────────────────────────────────

    #[test]
    fn touching_a_cloud_terminates() {
        let mut s = scene();
        s.handle_input(&cursor_at(&s, Vec2::new(200.0, 500.0)));
        assert!(s.should_close());
        assert_eq!(s.termination(), Some(Termination::CloudCollision));
    }

    #[test]
    fn close_request_terminates() {
        let mut s = scene();
        s.handle_input(&SceneInput {
            cursor: None,
            close_requested: true,
        });
        assert_eq!(s.termination(), Some(Termination::CloseRequested));
    }

    #[test]
    fn first_termination_reason_sticks() {
        let mut s = scene();
        s.handle_input(&SceneInput {
            cursor: Some(Vec2::new(200.0, 100.0)),
            close_requested: true,
        });
        assert_eq!(s.termination(), Some(Termination::CloseRequested));

        s.handle_input(&cursor_at(&s, Vec2::new(200.0, 500.0)));
        assert_eq!(s.termination(), Some(Termination::CloseRequested));
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn parallax_near_faster_than_mid_faster_than_far() {
        let mut s = scene();
        let start = [TierName::Near, TierName::Mid, TierName::Far].map(|n| first_x(&s, n));

        for _ in 0..10 {
            s.update(1.0 / 60.0);
        }

        let moved = [TierName::Near, TierName::Mid, TierName::Far]
            .map(|n| first_x(&s, n))
            .iter()
            .zip(start)
            .map(|(now, then)| (now - then).abs())
            .collect::<Vec<f32>>();

        assert!((moved[0] - 15.0).abs() < 1e-3);
        assert!((moved[1] - 9.0).abs() < 1e-3);
        assert!((moved[2] - 4.0).abs() < 1e-3);
        assert!(moved[0] > moved[1] && moved[1] > moved[2]);
    }

    #[test]
    fn per_tick_motion_ignores_dt_but_tracks_it() {
        let mut s = scene();
        let x0 = first_x(&s, TierName::Near);

        s.update(0.5);
        s.update(0.25);

        assert_eq!(first_x(&s, TierName::Near), x0 - 3.0);
        assert_eq!(s.last_dt(), 0.25);
        assert!((s.elapsed() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn scaled_motion_follows_dt() {
        let cfg = SceneConfig::default()
            .with_seed(1)
            .with_motion(MotionMode::Scaled { reference_hz: 60.0 });
        let mut s = SceneModel::new(cfg);
        let x0 = first_x(&s, TierName::Near);
        let c0 = s.clouds()[0].position().x;

        s.update(1.0 / 30.0);

        assert!((first_x(&s, TierName::Near) - (x0 - 3.0)).abs() < 1e-3);
        assert!((s.clouds()[0].position().x - (c0 - 2.0)).abs() < 1e-3);
    }

    #[test]
    fn clouds_drift_one_unit_per_tick() {
        let mut s = scene();
        s.update(1.0 / 60.0);
        let xs: Vec<f32> = s.clouds().iter().map(|c| c.position().x).collect();
        assert_eq!(xs, vec![199.0, 399.0, 324.0]);
    }

    #[test]
    fn long_runs_keep_tier_counts_and_sizes() {
        let mut s = scene();
        let before: Vec<Vec<Vec2>> = s
            .tiers()
            .iter()
            .map(|t| t.buildings().iter().map(|b| b.size()).collect())
            .collect();

        for _ in 0..10_000 {
            s.update(1.0 / 60.0);
        }

        let after: Vec<Vec<Vec2>> = s
            .tiers()
            .iter()
            .map(|t| t.buildings().iter().map(|b| b.size()).collect())
            .collect();
        assert_eq!(after, before);

        // Clouds keep coming back.
        for c in s.clouds() {
            let b = c.bounding_box();
            assert!(b.right >= 0.0 && b.left <= 800.0 + b.width());
        }
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn renders_back_to_front() {
        let s = scene();
        let mut r = RecordingRenderer::default();
        s.render(&mut r);

        assert_eq!(r.calls.first(), Some(&RenderCall::Clear(SKY_BLUE)));
        assert_eq!(
            r.calls.iter().filter(|c| matches!(c, RenderCall::Clear(_))).count(),
            1
        );

        let draws = r.draws();
        let far = s.tier(TierName::Far).len();
        let mid = s.tier(TierName::Mid).len();
        let near = s.tier(TierName::Near).len();
        assert_eq!(draws.len(), 2 + 9 + 1 + far + mid + near + 1);

        let mut i = 0;
        for _ in 0..2 {
            assert_eq!(draws[i].1, Primitive::Triangle);
            assert_eq!(draws[i].0.color, DARK_GREEN);
            i += 1;
        }
        for _ in 0..9 {
            assert_eq!(draws[i].1, Primitive::Quad);
            assert_eq!(draws[i].0.color, WHITE);
            i += 1;
        }
        assert_eq!(draws[i].0.color, GRASS_GREEN);
        i += 1;
        for (count, color) in [(far, PURPLE), (mid, DARK_BLUE), (near, BRICK_RED)] {
            for _ in 0..count {
                assert_eq!(draws[i].0.color, color);
                i += 1;
            }
        }
        assert_eq!(draws[i].0.size, Vec2::new(10.0, 10.0));
        assert_eq!(draws[i].0.color, WHITE);
    }

    #[test]
    fn tier_depth_follows_slot_not_spec() {
        // Swap the near and far looks; draw order must stay far slot first.
        let cfg = SceneConfig::default()
            .with_seed(1)
            .with_tier(TierName::Near, TierSpec::far())
            .with_tier(TierName::Far, TierSpec::near());
        let s = SceneModel::new(cfg);

        for name in TierName::BACK_TO_FRONT {
            assert_eq!(s.tier(name).name(), name);
        }
        let names: Vec<TierName> = s.tiers().iter().map(Tier::name).collect();
        assert_eq!(names, TierName::BACK_TO_FRONT.to_vec());

        let mut r = RecordingRenderer::default();
        s.render(&mut r);
        let draws = r.draws();

        let far = s.tier(TierName::Far).len();
        let mid = s.tier(TierName::Mid).len();
        let near = s.tier(TierName::Near).len();
        let first = 2 + 9 + 1;
        let mut i = first;
        for (count, color) in [(far, BRICK_RED), (mid, DARK_BLUE), (near, PURPLE)] {
            for _ in 0..count {
                assert_eq!(draws[i].0.color, color, "draw {i}");
                i += 1;
            }
        }
        assert_eq!(i, draws.len() - 1);
    }

    #[test]
    fn every_draw_is_preceded_by_its_upload() {
        let s = scene();
        let mut r = RecordingRenderer::default();
        s.render(&mut r);

        for pair in r.calls[1..].chunks(2) {
            assert!(matches!(pair, [RenderCall::Upload(_), RenderCall::Draw(_)]));
        }
    }
}
