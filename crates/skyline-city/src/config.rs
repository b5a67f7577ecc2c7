use crate::tier::{TierName, TierSpec};

/// How `SceneModel::update` turns elapsed time into motion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum MotionMode {
    /// Fixed displacement per update call, independent of `dt`.
    #[default]
    PerTick,
    /// Displacement scaled by `dt * reference_hz`, so one tick at the
    /// reference rate moves exactly the per-tick amount.
    Scaled { reference_hz: f32 },
}

impl MotionMode {
    pub const DEFAULT_REFERENCE_HZ: f32 = 60.0;

    /// Multiplier applied to per-tick displacements for a step of `dt` seconds.
    pub fn scale(self, dt: f32) -> f32 {
        match self {
            MotionMode::PerTick => 1.0,
            MotionMode::Scaled { reference_hz } => dt.max(0.0) * reference_hz,
        }
    }

    /// Parses `tick` or `scaled` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tick" | "per-tick" => Some(MotionMode::PerTick),
            "scaled" => Some(MotionMode::Scaled {
                reference_hz: Self::DEFAULT_REFERENCE_HZ,
            }),
            _ => None,
        }
    }
}

/// Scene construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Seed for building generation.
    pub seed: u64,
    pub motion: MotionMode,
    /// Cloud displacement per tick.
    pub cloud_step: f32,
    pub far: TierSpec,
    pub mid: TierSpec,
    pub near: TierSpec,
}

impl SceneConfig {
    pub const DEFAULT_SEED: u64 = 0x5EED;

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_motion(mut self, motion: MotionMode) -> Self {
        self.motion = motion;
        self
    }

    pub fn tier_spec(&self, name: TierName) -> &TierSpec {
        match name {
            TierName::Far => &self.far,
            TierName::Mid => &self.mid,
            TierName::Near => &self.near,
        }
    }

    /// Replaces the spec generated into the `name` tier.
    pub fn with_tier(mut self, name: TierName, spec: TierSpec) -> Self {
        let slot = match name {
            TierName::Far => &mut self.far,
            TierName::Mid => &mut self.mid,
            TierName::Near => &mut self.near,
        };
        *slot = spec;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            seed: Self::DEFAULT_SEED,
            motion: MotionMode::default(),
            cloud_step: -1.0,
            far: TierSpec::far(),
            mid: TierSpec::mid(),
            near: TierSpec::near(),
        }
    }
}
