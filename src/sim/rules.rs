//! Collision and feeding rules
//!
//! Evaluated against the head after every advance. Read-only on the snake
//! except for `eat_food`, which only queues growth.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::grid::Cell;
use super::snake::Snake;

/// Where new food may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodPlacement {
    /// Uniform over the whole grid, snake cells included
    #[default]
    Anywhere,
    /// Uniform over cells the snake does not occupy
    AvoidSnake,
}

/// True if the head shares a cell with any other segment
pub fn is_collided(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body_cells().any(|cell| cell == head)
}

pub fn can_eat_food(head: Cell, food: Cell) -> bool {
    head == food
}

/// Queue one cell of growth; the next advance keeps its tail
pub fn eat_food(snake: &mut Snake) {
    snake.grow();
}

/// Pick a new food cell on a `grid_size` grid
///
/// `Anywhere` samples x and y independently. `AvoidSnake` samples among
/// free cells and falls back to `Anywhere` once the grid is full.
pub fn generate_food<R: Rng + ?Sized>(
    snake: &Snake,
    grid_size: i32,
    placement: FoodPlacement,
    rng: &mut R,
) -> Cell {
    if placement == FoodPlacement::AvoidSnake {
        let free: Vec<Cell> = (0..grid_size)
            .flat_map(|y| (0..grid_size).map(move |x| Cell::new(x, y)))
            .filter(|cell| !snake.occupies(*cell))
            .collect();
        if let Some(cell) = free.choose(rng) {
            return *cell;
        }
        log::debug!("No free cell for food, placing anywhere");
    }

    Cell::new(
        rng.random_range(0..grid_size),
        rng.random_range(0..grid_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Direction;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)))
    }

    #[test]
    fn test_no_collision_on_straight_snake() {
        assert!(!is_collided(&Snake::initial()));
        assert!(!is_collided(&snake(&[(3, 3)])));
    }

    #[test]
    fn test_collision_when_head_enters_body() {
        // Square loop: moving West from (1,1) lands on (0,1)
        let before = snake(&[(0, 0), (0, 1), (0, 2), (1, 2), (1, 1)]);
        assert!(!is_collided(&before));
        let after = before.advance(Direction::West, 30);
        assert_eq!(after.head(), Cell::new(0, 1));
        assert!(is_collided(&after));
    }

    #[test]
    fn test_head_moving_into_vacated_tail_is_safe() {
        // 2x2 loop chasing its own tail
        let before = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let after = before.advance(Direction::North, 30);
        assert_eq!(after.head(), Cell::new(0, 0));
        assert!(!is_collided(&after));
    }

    #[test]
    fn test_can_eat_food_exact_match() {
        assert!(can_eat_food(Cell::new(1, 3), Cell::new(1, 3)));
        assert!(!can_eat_food(Cell::new(1, 3), Cell::new(3, 1)));
    }

    #[test]
    fn test_eat_food_then_advance_grows_by_one() {
        let mut fed = Snake::initial();
        eat_food(&mut fed);
        let plain = Snake::initial().advance(Direction::East, 30);
        let grown = fed.advance(Direction::East, 30);
        assert_eq!(plain.len(), 4);
        assert_eq!(grown.len(), 5);
    }

    #[test]
    fn test_generate_food_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let body = Snake::initial();
        for _ in 0..500 {
            let food = generate_food(&body, 30, FoodPlacement::Anywhere, &mut rng);
            assert!(food.in_bounds(30));
        }
    }

    #[test]
    fn test_generate_food_avoiding_snake() {
        let mut rng = Pcg32::seed_from_u64(11);
        // 2x2 grid with three cells taken leaves exactly one choice
        let body = snake(&[(0, 0), (1, 0), (1, 1)]);
        for _ in 0..20 {
            let food = generate_food(&body, 2, FoodPlacement::AvoidSnake, &mut rng);
            assert_eq!(food, Cell::new(0, 1));
        }
    }

    #[test]
    fn test_generate_food_full_grid_falls_back() {
        let mut rng = Pcg32::seed_from_u64(3);
        let body = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let food = generate_food(&body, 2, FoodPlacement::AvoidSnake, &mut rng);
        assert!(food.in_bounds(2));
    }

    #[test]
    fn test_generate_food_covers_grid() {
        let mut rng = Pcg32::seed_from_u64(42);
        let body = Snake::initial();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(generate_food(&body, 4, FoodPlacement::Anywhere, &mut rng));
        }
        // Occupied cells are not excluded
        assert_eq!(seen.len(), 16);
    }
}
