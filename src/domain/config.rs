//! Engine configuration
//!
//! Every field has a default, so a host can pass `{}` or only the keys it
//! wants to override. Validation happens once, at construction time.

use serde::{Deserialize, Serialize};

use crate::domain::materials::{DEFAULT_DISPERSITY_RATE, INSERT_LIFETIME};

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_CELL_SCALE: u32 = 2;
pub const DEFAULT_SEED: u32 = 12345;

/// Periodic leftward creep of settled sand, water and fire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub enabled: bool,
    /// Seconds between drift frames
    pub interval: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self { enabled: false, interval: 0.02 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_scale: u32,
    pub seed: u32,
    pub insert_lifetime: f32,
    pub dispersity_rate: u8,
    /// Burning wood ignites each wooden neighbor with chance 1/odds per frame
    pub wood_spread_odds: u32,
    /// Burning wood emits smoke above itself with chance 1/odds per frame
    pub wood_smoke_odds: u32,
    /// Smoke skips its update with chance 1/odds per frame
    pub smoke_skip_odds: u32,
    /// Relabel ignited wood as `BurningWood` instead of only flagging it
    pub relabel_burning_wood: bool,
    pub drift: DriftConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            cell_scale: DEFAULT_CELL_SCALE,
            seed: DEFAULT_SEED,
            insert_lifetime: INSERT_LIFETIME,
            dispersity_rate: DEFAULT_DISPERSITY_RATE,
            wood_spread_odds: 4,
            wood_smoke_odds: 5,
            smoke_skip_odds: 4,
            relabel_burning_wood: true,
            drift: DriftConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Config for an explicit grid size with one world unit per cell
    pub fn with_grid(width: u32, height: u32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            cell_scale: 1,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn grid_width(&self) -> u32 {
        self.window_width / self.cell_scale.max(1)
    }

    pub fn grid_height(&self) -> u32 {
        self.window_height / self.cell_scale.max(1)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_scale == 0 {
            return Err("cell_scale must be positive".to_string());
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(format!(
                "grid is empty: {}x{} window at scale {} gives {}x{} cells",
                self.window_width,
                self.window_height,
                self.cell_scale,
                self.grid_width(),
                self.grid_height()
            ));
        }
        if self.dispersity_rate == 0 {
            return Err("dispersity_rate must be positive".to_string());
        }
        for (name, odds) in [
            ("wood_spread_odds", self.wood_spread_odds),
            ("wood_smoke_odds", self.wood_smoke_odds),
            ("smoke_skip_odds", self.smoke_skip_odds),
        ] {
            if odds == 0 {
                return Err(format!("{} must be positive", name));
            }
        }
        if self.insert_lifetime.is_nan() || self.insert_lifetime <= 0.0 {
            return Err("insert_lifetime must be positive".to_string());
        }
        // Checked even while drift is off
        if self.drift.interval.is_nan() || self.drift.interval <= 0.0 {
            return Err("drift.interval must be positive".to_string());
        }
        Ok(())
    }
}
