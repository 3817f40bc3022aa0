//! Platform layer
//!
//! Owns timers, input events and the screen, and funnels all of them into
//! the single owner of the game state:
//! - `web`: `setTimeout` + `requestAnimationFrame` + `keydown` on one JS thread
//! - `native`: timer and keyboard threads sending messages to one owner loop

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;
