use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod types;
pub mod view;
pub mod wasm;

pub use board::Board;
pub use error::{OthelloError, Result};
pub use types::{Disc, FlipRecord, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
