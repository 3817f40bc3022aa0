//! Grid Snake entry point
//!
//! Handles platform-specific initialization and starts the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
    }

    log::info!("Grid Snake starting...");
    let result = grid_snake::platform::web::start();
    if let Err(ref e) = result {
        log::error!("Startup failed: {:?}", e);
    }
    result
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    init_logging();
    log::info!("Grid Snake (terminal) starting...");

    let settings = grid_snake::Settings::load();
    if let Err(e) = grid_snake::platform::native::run(&settings) {
        log::error!("Terminal session failed: {}", e);
        eprintln!("grid-snake: {}", e);
        std::process::exit(1);
    }
}

/// Log to a file; stderr shares the TTY with the game frame
#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use grid_snake::platform::native::{log_file_path, open_log_file};

    let mut builder = env_logger::Builder::from_default_env();
    let path = log_file_path();
    match open_log_file(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("grid-snake: logging disabled, cannot open {}: {}", path.display(), e);
            builder.target(env_logger::Target::Pipe(Box::new(std::io::sink())));
        }
    }
    builder.init();
}
