//! Native terminal wiring
//!
//! The game state has exactly one owner: the loop in `run`. A timer
//! channel and a keyboard thread only send messages to it, so a key press
//! can never land in the middle of a tick.

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossbeam_channel::{Receiver, Sender, never, select, tick, unbounded};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

use crate::clock::{GameClock, TickControl};
use crate::renderer::{Frame, Renderer, TerminalRenderer};
use crate::settings::Settings;
use crate::sim::{GameState, Key};

/// How often the keyboard thread checks for shutdown
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Log file name; the terminal itself is taken by the game frame
const LOG_FILE: &str = "grid-snake.log";

/// Where native logs go while the game owns the terminal
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Open (or create) a log file for appending
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Messages from the keyboard thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Browser-style key identifier ("ArrowUp", ...)
    Key(&'static str),
    Quit,
}

/// Map a terminal key event to a game input
pub fn map_key(event: &KeyEvent) -> Option<Input> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Input::Quit);
        }
        KeyCode::Char('q') | KeyCode::Esc => return Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('w') => Key::Up,
        KeyCode::Down | KeyCode::Char('s') => Key::Down,
        KeyCode::Left | KeyCode::Char('a') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') => Key::Right,
        // Passed through so the gate sees (and ignores) it
        _ => return Some(Input::Key("Unidentified")),
    };
    Some(Input::Key(key.as_identifier()))
}

/// Raw mode + alternate screen for as long as it lives
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}

fn spawn_keyboard(tx: Sender<Input>, stop: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    log::error!("Keyboard poll failed: {}", e);
                    let _ = tx.send(Input::Quit);
                    return;
                }
            }
            let input = match event::read() {
                Ok(Event::Key(key)) => map_key(&key),
                Ok(_) => None,
                Err(e) => {
                    log::error!("Keyboard read failed: {}", e);
                    Some(Input::Quit)
                }
            };
            if let Some(input) = input {
                if tx.send(input).is_err() || input == Input::Quit {
                    return;
                }
            }
        }
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Drive one game until it is quit
///
/// Ticks come from `ticks`, keys from `inputs`. After game over the loop
/// keeps draining input so the final frame stays up until `Input::Quit`
/// (or a closed input channel).
pub fn run_loop<R: Renderer + ?Sized>(
    state: &mut GameState,
    settings: &Settings,
    renderer: &mut R,
    ticks: Receiver<Instant>,
    inputs: Receiver<Input>,
) {
    let mut clock = GameClock::from_settings(settings);
    renderer.draw(&Frame::capture(state, settings));
    clock.start();

    let mut ticking = true;
    loop {
        let timer = if ticking { ticks.clone() } else { never() };
        select! {
            recv(timer) -> msg => {
                // A closed timer counts as stopped
                ticking = msg.is_ok()
                    && clock.fire(state, settings, renderer) == TickControl::ScheduleNext;
            }
            recv(inputs) -> msg => match msg {
                Ok(Input::Key(key)) => {
                    state.handle_key(key);
                }
                Ok(Input::Quit) | Err(_) => break,
            }
        }
    }
}

/// Play in the current terminal
pub fn run(settings: &Settings) -> io::Result<()> {
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::new(seed, settings);
    log::info!(
        "Game initialized with seed {} on a {}x{} grid",
        seed,
        state.grid_size,
        state.grid_size
    );

    let guard = TerminalGuard::enter()?;
    let mut renderer = TerminalRenderer::new(io::stdout());

    let (tx, rx) = unbounded();
    let stop = Arc::new(AtomicBool::new(false));
    let keyboard = spawn_keyboard(tx, stop.clone());

    run_loop(
        &mut state,
        settings,
        &mut renderer,
        tick(settings.tick_period()),
        rx,
    );

    stop.store(true, Ordering::Relaxed);
    let _ = keyboard.join();
    drop(guard);

    log::info!(
        "Session ended at tick {} with length {}",
        state.time_ticks,
        state.snake.len_with_growth()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingRenderer;
    use crate::sim::{Cell, Direction, GamePhase};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(Input::Key("ArrowUp")));
        assert_eq!(map_key(&key(KeyCode::Char('a'))), Some(Input::Key("ArrowLeft")));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
        assert_eq!(map_key(&key(KeyCode::Tab)), Some(Input::Key("Unidentified")));
    }

    #[test]
    fn test_log_file_outside_terminal() {
        assert!(log_file_path().ends_with(LOG_FILE));

        let path =
            std::env::temp_dir().join(format!("grid-snake-test-{}.log", std::process::id()));
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_release_events_ignored() {
        let mut event = key(KeyCode::Up);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(&event), None);
    }

    #[test]
    fn test_owner_loop_applies_messages_in_order() {
        let settings = Settings::default();
        let mut state = GameState::new(8, &settings);
        state.food = Cell::new(20, 20);
        let mut renderer = RecordingRenderer::default();

        let (tick_tx, tick_rx) = unbounded();
        let (input_tx, input_rx) = unbounded();

        // Queue a turn, then quit once the tick has been consumed
        input_tx.send(Input::Key("ArrowDown")).unwrap();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            tick_tx.send(Instant::now()).unwrap();
            thread::sleep(Duration::from_millis(50));
            input_tx.send(Input::Quit).unwrap();
        });

        run_loop(&mut state, &settings, &mut renderer, tick_rx, input_rx);
        handle.join().unwrap();

        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.direction, Direction::South);
        assert_eq!(state.snake.head(), Cell::new(0, 4));
        // Initial frame + one tick
        assert_eq!(renderer.frames.len(), 2);
    }

    #[test]
    fn test_owner_loop_stops_ticking_after_game_over() {
        let settings = Settings::default();
        let mut state = GameState::new(8, &settings);
        state.snake = crate::sim::Snake::from_cells(
            [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1)]
                .into_iter()
                .map(|(x, y)| Cell::new(x, y)),
        );
        state.direction = Direction::West;
        state.food = Cell::new(20, 20);
        let mut renderer = RecordingRenderer::default();

        let (tick_tx, tick_rx) = unbounded();
        let (input_tx, input_rx) = unbounded();
        for _ in 0..3 {
            tick_tx.send(Instant::now()).unwrap();
        }
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            drop(input_tx);
        });

        run_loop(&mut state, &settings, &mut renderer, tick_rx, input_rx);
        handle.join().unwrap();

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(renderer.frames.len(), 2);
        drop(tick_tx);
    }
}
