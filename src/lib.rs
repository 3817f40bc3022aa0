//! Grid Snake - snake on a wraparound grid
//!
//! Core modules:
//! - `sim`: Deterministic rules (movement, wraparound, feeding, collision, input gate)
//! - `clock`: Fixed-period tick driver
//! - `renderer`: Drawing boundary (canvas / terminal)
//! - `platform`: Browser/native timer and input wiring
//! - `settings`: Startup configuration

pub mod clock;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use clock::{DrawOrder, GameClock, TickControl};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Tick period (3 ticks per second)
    pub const TICK_PERIOD_MS: u64 = 1000 / 3;

    /// Field and cell size in CSS pixels (30x30 grid)
    pub const FIELD_SIZE_PX: u32 = 300;
    pub const CELL_SIZE_PX: u32 = 10;

    /// Segments in a fresh snake
    pub const INITIAL_SNAKE_LENGTH: usize = 4;

    /// Upper bounds accepted from loaded settings
    pub const MAX_GRID_SIZE: i32 = 200;
    pub const MAX_CELL_SIZE_PX: u32 = 100;
    pub const MAX_TICK_PERIOD_MS: u64 = 60_000;
}
