//! Game settings
//!
//! Read once at startup: from LocalStorage on the web, from the
//! `GRID_SNAKE_SETTINGS` environment variable natively. Missing fields take
//! their defaults; unreadable settings fall back to defaults with a warning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DrawOrder;
use crate::consts::*;
use crate::sim::FoodPlacement;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of the square field, in CSS pixels
    pub field_size_px: u32,
    /// Side of one grid cell, in CSS pixels
    pub cell_size_px: u32,
    /// Time between game ticks
    pub tick_period_ms: u64,
    /// Whether a tick draws the state before or after it moves the snake
    pub draw_order: DrawOrder,
    /// Whether food may land on the snake
    pub food_placement: FoodPlacement,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_size_px: FIELD_SIZE_PX,
            cell_size_px: CELL_SIZE_PX,
            tick_period_ms: TICK_PERIOD_MS,
            draw_order: DrawOrder::AfterMove,
            food_placement: FoodPlacement::Anywhere,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON; out-of-range sizes fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace out-of-range values with their defaults, with a warning
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(1..=MAX_CELL_SIZE_PX).contains(&self.cell_size_px) {
            log::warn!(
                "cell_size_px {} outside 1..={}, using {}",
                self.cell_size_px,
                MAX_CELL_SIZE_PX,
                defaults.cell_size_px
            );
            self.cell_size_px = defaults.cell_size_px;
        }

        let cells = i32::try_from(self.field_size_px / self.cell_size_px);
        if !cells.is_ok_and(|n| n <= MAX_GRID_SIZE) {
            log::warn!(
                "field_size_px {} gives more than {} cells per side, using {}x{} px",
                self.field_size_px,
                MAX_GRID_SIZE,
                defaults.field_size_px,
                defaults.cell_size_px
            );
            self.field_size_px = defaults.field_size_px;
            self.cell_size_px = defaults.cell_size_px;
        }

        if self.tick_period_ms > MAX_TICK_PERIOD_MS {
            log::warn!(
                "tick_period_ms {} above {}, using {}",
                self.tick_period_ms,
                MAX_TICK_PERIOD_MS,
                defaults.tick_period_ms
            );
            self.tick_period_ms = defaults.tick_period_ms;
        }

        self
    }

    /// Grid side in cells: field / cell, between the starting snake length
    /// and `MAX_GRID_SIZE`
    pub fn grid_size(&self) -> i32 {
        let cells = self.field_size_px / self.effective_cell_px();
        i32::try_from(cells)
            .unwrap_or(i32::MAX)
            .clamp(INITIAL_SNAKE_LENGTH as i32, MAX_GRID_SIZE)
    }

    /// Tick period (1 ms to `MAX_TICK_PERIOD_MS`)
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.clamp(1, MAX_TICK_PERIOD_MS))
    }

    /// Cell side used for drawing, in CSS pixels
    pub fn effective_cell_px(&self) -> u32 {
        self.cell_size_px.clamp(1, MAX_CELL_SIZE_PX)
    }

    /// Field side actually covered by the grid, in CSS pixels
    pub fn effective_field_px(&self) -> u32 {
        (self.grid_size() as u32).saturating_mul(self.effective_cell_px())
    }

    fn from_json_or_default(json: Option<String>, source: &str) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings in {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// LocalStorage key (wasm) / environment variable (native)
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "grid_snake_settings";
    #[cfg(not(target_arch = "wasm32"))]
    const ENV_VAR: &'static str = "GRID_SNAKE_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();

        Self::from_json_or_default(json, "LocalStorage")
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_json_or_default(std::env::var(Self::ENV_VAR).ok(), Self::ENV_VAR)
    }
}
