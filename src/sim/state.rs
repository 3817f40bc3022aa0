//! Game state
//!
//! Everything a tick or a key press can change lives in one owned record.
//! Whoever owns the `GameState` is the only writer.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{Cell, Direction};
use super::input::{InputGate, on_key};
use super::rules::{FoodPlacement, generate_food};
use super::snake::Snake;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Snake is moving
    Playing,
    /// Head hit the body; nothing advances any more
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Side of the square grid, in cells
    pub grid_size: i32,
    pub snake: Snake,
    /// Direction committed for the next tick
    pub direction: Direction,
    pub food: Cell,
    pub gate: InputGate,
    pub phase: GamePhase,
    /// Ticks applied so far
    pub time_ticks: u64,
    pub food_placement: FoodPlacement,
    rng: Pcg32,
}

impl GameState {
    /// Fresh run: initial snake heading East, first food already placed
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::initial();
        let grid_size = settings.grid_size();
        let food = generate_food(&snake, grid_size, settings.food_placement, &mut rng);

        Self {
            seed,
            grid_size,
            snake,
            direction: Direction::East,
            food,
            gate: InputGate::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            food_placement: settings.food_placement,
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Feed a raw key identifier through the input gate
    ///
    /// Returns true if it changed the committed direction for the next tick.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.is_over() {
            return false;
        }

        let gate_was_open = self.gate.is_open();
        let (direction, gate) = on_key(key, self.direction, self.gate);
        self.direction = direction;
        self.gate = gate;

        let accepted = gate_was_open && !gate.is_open();
        if accepted {
            log::debug!("Direction -> {:?}", direction);
        }
        accepted
    }

    /// Place a new food cell using the run's RNG
    pub fn respawn_food(&mut self) {
        self.food = generate_food(
            &self.snake,
            self.grid_size,
            self.food_placement,
            &mut self.rng,
        );
    }
}
