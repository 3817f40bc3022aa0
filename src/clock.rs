//! Game clock
//!
//! Decides what happens when the tick timer fires; the platform layer owns
//! the actual timers and calls `fire` once per period.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{GameState, TickOutcome, tick};

/// When a tick draws relative to moving the snake
///
/// `BeforeMove` paints the state the previous tick produced, so the screen
/// lags the game by one tick. `AfterMove` paints the fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawOrder {
    BeforeMove,
    #[default]
    AfterMove,
}

/// What the platform should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    /// Arm the timer again
    ScheduleNext,
    /// Terminal state reached; do not reschedule
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockStatus {
    Idle,
    Running,
    Stopped,
}

/// Fixed-period tick driver
#[derive(Debug, Clone)]
pub struct GameClock {
    period: Duration,
    status: ClockStatus,
    ticks: u64,
}

impl GameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            status: ClockStatus::Idle,
            ticks: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tick_period())
    }

    /// Begin ticking; returns the delay before the first tick
    pub fn start(&mut self) -> Duration {
        if self.status == ClockStatus::Idle {
            self.status = ClockStatus::Running;
        }
        self.period
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.status == ClockStatus::Running
    }

    /// Ticks fired while running
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick: re-arm input, draw, advance, apply rules
    ///
    /// On collision the clock stops for good and the caller must not
    /// reschedule.
    pub fn fire<R: Renderer + ?Sized>(
        &mut self,
        state: &mut GameState,
        settings: &Settings,
        renderer: &mut R,
    ) -> TickControl {
        if !self.is_running() {
            return TickControl::Stop;
        }
        self.ticks += 1;

        state.gate.rearm();

        if settings.draw_order == DrawOrder::BeforeMove {
            renderer.draw(&Frame::capture(state, settings));
        }

        let outcome = tick(state);

        if settings.draw_order == DrawOrder::AfterMove {
            renderer.draw(&Frame::capture(state, settings));
        }

        if outcome == TickOutcome::Collided {
            self.status = ClockStatus::Stopped;
            log::info!(
                "Game over after {} ticks, snake length {}",
                state.time_ticks,
                state.snake.len_with_growth()
            );
            return TickControl::Stop;
        }

        TickControl::ScheduleNext
    }
}
