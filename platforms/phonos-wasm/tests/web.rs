//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;

use phonos_wasm::SoundEngine;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn it_should_highlight_ptk() {
    let engine = SoundEngine::english();

    assert_eq!(
        engine.highlight("Put a cat"),
        "<span class='Ptk'>P</span>u<span class='Ptk'>t</span> a <span class='Ptk'>c</span>a<span class='Ptk'>t</span>"
    );
}

#[wasm_bindgen_test]
fn it_should_round_trip_through_js_records() {
    let engine = SoundEngine::english();

    let records = engine.classify("The text just in case").unwrap();

    assert_eq!(
        engine.serialize(records).unwrap(),
        "The text just in case"
    );
}
