//! Terminal renderer
//!
//! Two character columns per grid cell keep the field roughly square.

use std::io::Write;

use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};

use super::{Frame, Renderer};
use crate::sim::Cell;

const EMPTY: &str = "  ";
const BODY: &str = "[]";
const HEAD: &str = "@@";
const FOOD: &str = "()";

/// Frame as text lines: bordered field plus one status line
pub fn render_lines(frame: &Frame) -> Vec<String> {
    let n = frame.grid_size.max(0) as usize;
    let mut grid = vec![vec![EMPTY; n]; n];

    let mut put = |cell: Cell, glyph: &'static str| {
        if cell.in_bounds(frame.grid_size) {
            grid[cell.y as usize][cell.x as usize] = glyph;
        }
    };
    for segment in &frame.segments {
        put(segment.cell, if segment.is_head { HEAD } else { BODY });
    }
    put(frame.food, FOOD);

    let border = format!("+{}+", "-".repeat(n * 2));
    let mut lines = Vec::with_capacity(n + 3);
    lines.push(border.clone());
    for row in grid {
        lines.push(format!("|{}|", row.concat()));
    }
    lines.push(border);

    let status = if frame.game_over {
        format!("Game over! length {}  (q to quit)", frame.length)
    } else {
        format!(
            "tick {}  length {}  (arrows to steer, q to quit)",
            frame.tick, frame.length
        )
    };
    lines.push(status);
    lines
}

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        for (row, line) in render_lines(frame).iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, row as u16),
                Clear(ClearType::CurrentLine),
                Print(line)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, frame: &Frame) {
        if let Err(e) = self.write_frame(frame) {
            log::error!("Terminal draw failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GameState;

    fn frame() -> Frame {
        let settings = Settings {
            field_size_px: 60,
            ..Default::default()
        };
        let mut state = GameState::new(3, &settings);
        state.food = Cell::new(5, 0);
        Frame::capture(&state, &settings)
    }

    #[test]
    fn test_render_lines_layout() {
        let lines = render_lines(&frame());
        // border + 6 rows + border + status
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], format!("+{}+", "-".repeat(12)));
        assert_eq!(lines[1], format!("|{}{}{}|", BODY, EMPTY.repeat(4), FOOD));
        assert_eq!(lines[4], format!("|{}{}|", HEAD, EMPTY.repeat(5)));
        assert!(lines[8].starts_with("tick 0  length 4"));
    }

    #[test]
    fn test_status_counts_pending_growth() {
        let mut frame = frame();
        frame.length = 5;
        let lines = render_lines(&frame);
        assert!(lines[8].starts_with("tick 0  length 5"));
    }

    #[test]
    fn test_game_over_status() {
        let mut frame = frame();
        frame.game_over = true;
        let lines = render_lines(&frame);
        assert!(lines.last().is_some_and(|l| l.starts_with("Game over!")));
    }

    #[test]
    fn test_draw_writes_to_output() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&frame());
        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(written.contains(HEAD));
        assert!(written.contains(FOOD));
    }
}
