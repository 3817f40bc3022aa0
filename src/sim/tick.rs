//! Fixed-step simulation tick
//!
//! Advances the snake once with the committed direction, then applies the
//! feeding and collision rules to the new head, in that order.

use super::rules::{can_eat_food, eat_food, is_collided};
use super::state::{GamePhase, GameState};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Plain move
    Moved,
    /// Head reached the food; growth queued and food relocated
    Ate,
    /// Head hit the body; the run is over
    Collided,
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.is_over() {
        return TickOutcome::Collided;
    }

    state.snake = state.snake.advance(state.direction, state.grid_size);
    state.time_ticks += 1;

    let mut outcome = TickOutcome::Moved;
    if can_eat_food(state.snake.head(), state.food) {
        eat_food(&mut state.snake);
        state.respawn_food();
        log::debug!(
            "Food eaten at tick {}, next food at ({}, {})",
            state.time_ticks,
            state.food.x,
            state.food.y
        );
        outcome = TickOutcome::Ate;
    }

    if is_collided(&state.snake) {
        state.phase = GamePhase::GameOver;
        return TickOutcome::Collided;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::grid::{Cell, Direction};
    use crate::sim::snake::Snake;

    fn state_with(cells: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameState {
        let mut state = GameState::new(12345, &Settings::default());
        state.snake = Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)));
        state.direction = direction;
        state.food = Cell::new(food.0, food.1);
        state
    }

    fn cells(state: &GameState) -> Vec<(i32, i32)> {
        state.snake.cells().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_tick_moves_east() {
        let mut state = state_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Direction::East, (20, 20));
        assert_eq!(tick(&mut state), TickOutcome::Moved);
        assert_eq!(cells(&state), vec![(0, 1), (0, 2), (0, 3), (1, 3)]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_wraps_at_east_edge() {
        let mut state = state_with(&[(27, 5), (28, 5), (29, 5)], Direction::East, (20, 20));
        tick(&mut state);
        assert_eq!(state.snake.head(), Cell::new(0, 5));
    }

    #[test]
    fn test_tick_eats_and_grows_on_next_move() {
        let mut state = state_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Direction::East, (1, 3));
        assert_eq!(tick(&mut state), TickOutcome::Ate);
        assert_eq!(state.snake.pending_growth(), 1);
        assert_eq!(state.snake.len_with_growth(), 5);
        assert!(state.food.in_bounds(30));

        state.food = Cell::new(20, 20);
        tick(&mut state);
        assert_eq!(state.snake.len(), 5);
        assert_eq!(cells(&state), vec![(0, 1), (0, 2), (0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_tick_detects_self_collision() {
        let mut state = state_with(
            &[(0, 0), (0, 1), (0, 2), (1, 2), (1, 1)],
            Direction::West,
            (20, 20),
        );
        assert_eq!(tick(&mut state), TickOutcome::Collided);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = state_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Direction::East, (20, 20));
        state.phase = GamePhase::GameOver;
        let before = state.snake.clone();
        assert_eq!(tick(&mut state), TickOutcome::Collided);
        assert_eq!(state.snake, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, &Settings::default());
        let mut state2 = GameState::new(99999, &Settings::default());
        let keys = ["ArrowDown", "", "ArrowRight", "ArrowUp", "", "ArrowLeft"];

        for key in keys {
            for state in [&mut state1, &mut state2] {
                state.gate.rearm();
                state.handle_key(key);
                tick(state);
            }
        }

        assert_eq!(state1.snake, state2.snake);
        assert_eq!(state1.food, state2.food);
        assert_eq!(state1.time_ticks, state2.time_ticks);
    }
}
