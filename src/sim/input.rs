//! Input gate: at most one accepted direction change per tick
//!
//! Keys arrive as browser-style identifiers ("ArrowUp", ...). Anything
//! else is ignored without touching the gate.

use super::grid::Direction;

/// Arrow keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub fn from_identifier(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> &'static str {
        match self {
            Key::Up => "ArrowUp",
            Key::Down => "ArrowDown",
            Key::Left => "ArrowLeft",
            Key::Right => "ArrowRight",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Key::Up => Direction::North,
            Key::Down => Direction::South,
            Key::Left => Direction::West,
            Key::Right => Direction::East,
        }
    }
}

/// Per-tick admission flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputGate {
    open: bool,
}

impl Default for InputGate {
    fn default() -> Self {
        Self { open: true }
    }
}

impl InputGate {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the gate for a new tick (idempotent)
    pub fn rearm(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Apply one key press to the committed direction
///
/// Returns the direction to use from the next tick on and the updated gate.
/// Unknown keys and reversals leave both untouched, so a rejected press
/// does not use up the tick's single change.
pub fn on_key(key: &str, current: Direction, gate: InputGate) -> (Direction, InputGate) {
    if !gate.is_open() {
        return (current, gate);
    }

    let Some(candidate) = Key::from_identifier(key).map(|k| k.direction()) else {
        return (current, gate);
    };

    if candidate.is_opposite(current) {
        return (current, gate);
    }

    let mut gate = gate;
    gate.close();
    (candidate, gate)
}
