//! Snake body and its per-tick movement

use std::collections::VecDeque;

use super::grid::{Cell, Direction};
use crate::consts::INITIAL_SNAKE_LENGTH;

/// A body segment as handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    pub is_head: bool,
}

/// The snake: cells ordered tail-first, head-last
///
/// Growth is tracked as a counter: each unit of `pending_growth` makes one
/// future `advance` keep its tail instead of dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    pending_growth: u32,
}

impl Snake {
    /// Vertical starting snake in column 0, head at the bottom
    pub fn initial() -> Self {
        Self::from_cells((0..INITIAL_SNAKE_LENGTH as i32).map(|y| Cell::new(0, y)))
    }

    /// Build from cells ordered tail-first.
    ///
    /// An empty iterator yields a single-cell snake at the origin, since a
    /// live snake always has a head.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            body.push_back(Cell::default());
        }
        Self {
            body,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Length once queued growth has been laid down
    pub fn len_with_growth(&self) -> usize {
        self.body.len() + self.pending_growth as usize
    }

    /// Cells tail-first
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Every cell except the head
    pub fn body_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().take(self.body.len() - 1).copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Segments tail-first; only the last one carries the head flag
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let head_index = self.body.len() - 1;
        self.body.iter().enumerate().map(move |(i, &cell)| Segment {
            cell,
            is_head: i == head_index,
        })
    }

    /// Queue one cell of growth for the next advance
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    /// Next snake after one step in `direction` on a `grid_size` torus
    ///
    /// The new head is appended; the tail is dropped unless growth is
    /// pending, in which case one unit of growth is consumed instead.
    pub fn advance(&self, direction: Direction, grid_size: i32) -> Snake {
        let mut next = self.clone();
        let new_head = self.head().step(direction, grid_size);
        next.body.push_back(new_head);

        if next.pending_growth > 0 {
            next.pending_growth -= 1;
        } else {
            next.body.pop_front();
        }
        next
    }
}
