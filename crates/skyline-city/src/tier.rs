//! Building tiers: generation, scrolling and ring wraparound.

use std::ops::RangeInclusive;

use rand::Rng;
use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::palette::{BRICK_RED, CYAN, DARK_BLUE, MAGENTA, ORANGE, PURPLE};
use crate::rect::Rect;
use crate::shape::Shape;

/// Horizontal gap between consecutive buildings of one tier.
pub const BUILDING_GAP: f32 = 5.0;

/// Y of the line building heights are measured from.
pub const BASE_LINE: f32 = 50.0;

/// Tier identity. Declaration order is depth order: `Far < Mid < Near`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TierName {
    Far,
    Mid,
    Near,
}

impl TierName {
    /// Every tier, back to front.
    pub const BACK_TO_FRONT: [TierName; 3] = [TierName::Far, TierName::Mid, TierName::Near];
}

/// Where a building's center sits, given its height `h`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VerticalAnchor {
    /// `h/2 + BASE_LINE`: the bottom edge rests on the base line.
    HalfHeight,
    /// `h + BASE_LINE`: raised so taller tiers show above the nearer ones.
    FullHeight,
}

impl VerticalAnchor {
    pub fn center_y(self, height: f32) -> f32 {
        match self {
            VerticalAnchor::HalfHeight => height * 0.5 + BASE_LINE,
            VerticalAnchor::FullHeight => height + BASE_LINE,
        }
    }
}

/// Generation and motion parameters for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSpec {
    pub width_range: RangeInclusive<u32>,
    pub height_range: RangeInclusive<u32>,
    /// Extra width tiled past the right screen edge.
    pub margin: f32,
    /// Horizontal displacement per tick.
    pub speed: f32,
    pub idle_color: Color,
    pub highlight_color: Color,
    pub anchor: VerticalAnchor,
}

impl TierSpec {
    pub fn near() -> Self {
        Self {
            width_range: 30..=50,
            height_range: 50..=100,
            margin: 50.0,
            speed: -1.5,
            idle_color: BRICK_RED,
            highlight_color: ORANGE,
            anchor: VerticalAnchor::HalfHeight,
        }
    }

    pub fn mid() -> Self {
        Self {
            width_range: 50..=100,
            height_range: 100..=200,
            margin: 100.0,
            speed: -0.9,
            idle_color: DARK_BLUE,
            highlight_color: CYAN,
            anchor: VerticalAnchor::FullHeight,
        }
    }

    pub fn far() -> Self {
        Self {
            width_range: 100..=200,
            height_range: 200..=400,
            margin: 200.0,
            speed: -0.4,
            idle_color: PURPLE,
            highlight_color: MAGENTA,
            anchor: VerticalAnchor::FullHeight,
        }
    }

    pub fn with_height_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.height_range = range;
        self
    }
}

/// An ordered run of buildings sharing one [`TierSpec`].
///
/// Invariant: never empty, and the count and sizes are fixed after
/// generation. Only positions and colors change.
#[derive(Debug, Clone)]
pub struct Tier {
    name: TierName,
    spec: TierSpec,
    buildings: Vec<Rect>,
}

impl Tier {
    /// Tiles buildings left to right until the covered width reaches
    /// `screen_width + spec.margin`.
    pub fn generate(name: TierName, spec: TierSpec, screen_width: f32, rng: &mut impl Rng) -> Self {
        debug_assert!(!spec.width_range.is_empty(), "empty width range");
        debug_assert!(!spec.height_range.is_empty(), "empty height range");
        debug_assert!(*spec.width_range.start() > 0, "zero-width buildings never fill a tier");

        let limit = screen_width + spec.margin;
        let mut covered = 0.0f32;
        let mut buildings = Vec::new();

        while covered < limit {
            let h = rng.gen_range(spec.height_range.clone()) as f32;
            let w = rng.gen_range(spec.width_range.clone()) as f32;

            let pos = Vec2::new(covered + w * 0.5 + BUILDING_GAP, spec.anchor.center_y(h));
            buildings.push(Rect::new(pos, Vec2::new(w, h), spec.idle_color));
            covered += w + BUILDING_GAP;
        }

        log::debug!(
            "generated {name:?} tier: {} buildings covering {covered}px",
            buildings.len()
        );

        Self { name, spec, buildings }
    }

    #[cfg(test)]
    pub(crate) fn from_buildings(name: TierName, spec: TierSpec, buildings: Vec<Rect>) -> Self {
        assert!(!buildings.is_empty());
        Self { name, spec, buildings }
    }

    pub fn spec(&self) -> &TierSpec {
        &self.spec
    }

    pub fn name(&self) -> TierName {
        self.name
    }

    pub fn buildings(&self) -> &[Rect] {
        &self.buildings
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Moves every building by `dx`, then wraps the ones that have fully
    /// left through x = 0.
    ///
    /// A wrapped building is placed right after its ring predecessor:
    /// index `i - 1`, or the last building for index 0. Buildings are visited
    /// in order, so a predecessor at a lower index has already moved this
    /// tick.
    pub fn scroll(&mut self, dx: f32) {
        let n = self.buildings.len();
        for i in 0..n {
            self.buildings[i].move_x(dx);

            let b = &self.buildings[i];
            if b.position().x >= -b.size().x * 0.5 {
                continue;
            }

            let pred = &self.buildings[if i == 0 { n - 1 } else { i - 1 }];
            let x = pred.position().x
                + pred.size().x * 0.5
                + self.buildings[i].size().x * 0.5
                + BUILDING_GAP;

            log::trace!("{:?} building {i} wraps to x={x}", self.name);
            self.buildings[i].set_position_x(x);
        }
    }

    /// Sets every building's color from its overlap with `avatar`.
    pub fn recolor(&mut self, avatar: &Rect) {
        let (idle, hot) = (self.spec.idle_color, self.spec.highlight_color);
        for b in &mut self.buildings {
            let c = if b.overlaps(avatar) { hot } else { idle };
            b.set_color(c);
        }
    }
}
