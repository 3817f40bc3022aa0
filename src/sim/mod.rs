//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay pure:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod input;
pub mod rules;
pub mod snake;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction};
pub use input::{InputGate, Key, on_key};
pub use rules::{FoodPlacement, can_eat_food, eat_food, generate_food, is_collided};
pub use snake::{Segment, Snake};
pub use state::{GamePhase, GameState};
pub use tick::{TickOutcome, tick};
