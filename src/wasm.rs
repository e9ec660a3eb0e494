//! Browser bindings: a human plays Black against the AI on White.

use clap::ValueEnum;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ai::Difficulty;
use crate::error::OthelloError;
use crate::game::Game;
use crate::player::Player;
use crate::types::Disc;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// `difficulty` is one of `easy`, `medium`, `hard`, `very-hard`.
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: &str) -> Result<WasmGame, JsValue> {
        let difficulty =
            Difficulty::from_str(difficulty, true).map_err(|e| JsValue::from_str(&e))?;
        let game = Game::new(
            Player::human("Player", Disc::Black),
            Player::ai("AI", Disc::White, difficulty),
        )
        .map_err(js_error)?;
        Ok(Self { game })
    }

    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        self.game.place(row, col).map_err(js_error)?;
        self.state()
    }

    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        self.game.pass().map_err(js_error)?;
        self.state()
    }

    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        self.game.ai_move().map_err(js_error)?;
        self.state()
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.legal_moves())
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.to_game_state())
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.to_game_result())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

fn js_error(err: OthelloError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
