//! Rendering boundary
//!
//! The game hands a `Frame` to a `Renderer` once per tick and never reads
//! anything back. Backends:
//! - `canvas`: 2D canvas in the browser
//! - `terminal`: character cells in a native terminal

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalRenderer;

use crate::settings::Settings;
use crate::sim::{Cell, GamePhase, GameState, Segment};

/// Everything a renderer needs for one picture
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Snake segments tail-first; the last one is the head
    pub segments: Vec<Segment>,
    /// Snake length including growth queued on this tick
    pub length: usize,
    pub food: Cell,
    pub grid_size: i32,
    pub field_size_px: u32,
    pub cell_size_px: u32,
    pub tick: u64,
    pub game_over: bool,
}

impl Frame {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        Self {
            segments: state.snake.segments().collect(),
            length: state.snake.len_with_growth(),
            food: state.food,
            grid_size: state.grid_size,
            field_size_px: settings.effective_field_px(),
            cell_size_px: settings.effective_cell_px(),
            tick: state.time_ticks,
            game_over: state.phase == GamePhase::GameOver,
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.segments.iter().rev().find(|s| s.is_head).map(|s| s.cell)
    }
}

/// Drawing collaborator
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Keeps every frame it is given (headless runs and tests)
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
