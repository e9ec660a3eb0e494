#![cfg(target_arch = "wasm32")]

use othello::wasm::WasmGame;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn ready_flag_is_set() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn human_then_ai_move_round_trip() {
    let mut game = WasmGame::new("medium").unwrap();

    game.place(2, 3).unwrap();
    let state = game.ai_move().unwrap();

    assert!(state.is_object());
}

#[wasm_bindgen_test]
fn illegal_placement_is_an_error() {
    let mut game = WasmGame::new("easy").unwrap();

    assert!(game.place(0, 0).is_err());
    assert!(WasmGame::new("nightmare").is_err());
}

#[wasm_bindgen_test]
fn placement_on_the_ai_turn_is_an_error() {
    let mut game = WasmGame::new("easy").unwrap();

    game.place(2, 3).unwrap();

    assert!(game.place(2, 2).is_err());
    assert!(game.ai_move().is_ok());
}
