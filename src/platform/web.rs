//! Browser wiring
//!
//! Each tick goes requestAnimationFrame -> setTimeout(period) -> fire, and
//! the handler re-enters requestAnimationFrame until the clock stops.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use crate::clock::{GameClock, TickControl};
use crate::renderer::{CanvasRenderer, Frame, Renderer};
use crate::settings::Settings;
use crate::sim::GameState;

/// Everything the callbacks share
struct Game {
    state: GameState,
    settings: Settings,
    clock: GameClock,
    renderer: CanvasRenderer,
}

impl Game {
    fn fire(&mut self) -> TickControl {
        let Game {
            state,
            settings,
            clock,
            renderer,
        } = self;
        clock.fire(state, settings, renderer)
    }
}

/// Set up the canvas and input, draw the first frame and start ticking
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| JsValue::from_str("no #canvas element"))?
        .dyn_into()?;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let mut renderer = CanvasRenderer::new(
        &canvas,
        settings.effective_field_px(),
        window.device_pixel_ratio(),
    )?;

    let state = GameState::new(seed, &settings);
    renderer.draw(&Frame::capture(&state, &settings));
    log::info!(
        "Game initialized with seed {} on a {}x{} grid",
        seed,
        state.grid_size,
        state.grid_size
    );

    let game = Rc::new(RefCell::new(Game {
        clock: GameClock::from_settings(&settings),
        state,
        settings,
        renderer,
    }));

    setup_input_handler(&document, game.clone())?;

    game.borrow_mut().clock.start();
    request_animation_frame(game);
    Ok(())
}

fn setup_input_handler(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        game.borrow_mut().state.handle_key(&event.key());
    });
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Window gone, game loop halted");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        schedule_tick(game);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

/// Arm the fixed-delay timer for the next tick
fn schedule_tick(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Window gone, game loop halted");
        return;
    };
    let delay_ms = i32::try_from(game.borrow().clock.period().as_millis()).unwrap_or(i32::MAX);
    let closure = Closure::once(move || {
        let control = game.borrow_mut().fire();
        if control == TickControl::ScheduleNext {
            request_animation_frame(game);
        }
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::error!("setTimeout failed: {:?}", e);
    }
    closure.forget();
}
