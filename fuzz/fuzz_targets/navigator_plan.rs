//! Fuzz target for Navigator::plan
//!
//! Plans arbitrary strings on the stock layout and replays every successful
//! plan on the grid.
//!
//! # Invariants
//!
//! - Planning never panics; untypeable input returns an error
//! - A replayed plan never leaves the grid or stops on a gap
//! - The replayed selects spell the normalized sequence, one per glyph

#![no_main]

use libfuzzer_sys::fuzz_target;
use rokucli_core::{Direction, KeyboardLayout, Navigator, normalize};

fuzz_target!(|text: &str| {
    let layout = KeyboardLayout::roku();
    let Ok(plan) = Navigator::new(&layout).plan(text) else {
        return;
    };

    let mut cursor = layout.start();
    let mut selected = Vec::new();
    for command in plan.commands() {
        match Direction::from_command(command) {
            Some(direction) => {
                cursor = layout
                    .passable(cursor, direction)
                    .unwrap_or_else(|| panic!("{direction:?} from {cursor} is not passable"));
            },
            None => selected.push(layout.glyph_at(cursor).unwrap_or_else(|| {
                panic!("select on a gap at {cursor}")
            })),
        }
    }

    assert_eq!(selected, normalize(text));
    assert_eq!(plan.selects(), plan.glyphs());
});
