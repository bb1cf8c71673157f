// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end checks of the public API, byte for byte.

use pretty_assertions::assert_eq;
use r3bl_ansi_formatter::{CsiSequence, SgrFormatter, StyleArg,
                          presets::{BLACK_BG, BOLD, GREEN, NO_FORMAT, RED, UNDERLINE},
                          rgb_to_xterm_index, sgr_apply, try_rgb_to_xterm_index};

const ESC: &str = "\x1b";

#[test]
fn xterm_index_reference_points() {
    assert_eq!(rgb_to_xterm_index(0.0, 0.0, 0.0), 16);
    assert_eq!(rgb_to_xterm_index(1.0, 1.0, 1.0), 231);
    assert_eq!(rgb_to_xterm_index(1.0, 0.0, 0.0), 196);
    assert_eq!(rgb_to_xterm_index(0.0, 1.0, 0.0), 46);
    assert_eq!(rgb_to_xterm_index(0.0, 0.0, 1.0), 21);
}

#[test]
fn xterm_index_inclusive_bounds() {
    assert!(try_rgb_to_xterm_index(0.0, 1.0, 0.0).is_ok());
    assert!(try_rgb_to_xterm_index(-0.001, 0.0, 0.0).is_err());
    assert!(try_rgb_to_xterm_index(0.0, 0.0, 1.001).is_err());
}

#[test]
fn red_x() {
    assert_eq!(RED.paint("X").to_string(), format!("{ESC}[31mX{ESC}[0m"));
}

#[test]
fn bold_around_red_and_plain() {
    let it = sgr_apply!(BOLD, RED.paint("X"), "Y");
    assert_eq!(
        it.render(),
        format!("{ESC}[1m{ESC}[31mX{ESC}[0m{ESC}[1mY{ESC}[0m")
    );
}

#[test]
fn bold_plus_underline() {
    let it = (BOLD + UNDERLINE).paint("Z");
    assert_eq!(it.render(), format!("{ESC}[1;4mZ{ESC}[0m"));
}

#[test]
fn zero_args_is_empty() {
    assert_eq!(sgr_apply!(GREEN).render(), "");
    assert_eq!(sgr_apply!(BOLD + UNDERLINE,).render(), "");
}

#[test]
fn every_piece_is_balanced_by_one_reset() {
    let it = sgr_apply!(
        BLACK_BG,
        sgr_apply!(BOLD, RED.paint("a"), "b"),
        "c",
        SgrFormatter::fg_rgb(0.0, 0.5, 1.0).paint(StyleArg::plain(3.25_f32)),
    );
    let rendered = it.render();
    let resets = rendered.matches(&format!("{ESC}[0m")).count();
    assert_eq!(resets, it.len());
    assert_eq!(it.len(), 4);
    assert!(rendered.ends_with(&format!("{ESC}[40m{ESC}[38;5;39m3.25{ESC}[0m")));
}

#[test]
fn no_format_preset() {
    assert_eq!(NO_FORMAT.paint("n").render(), format!("{ESC}[0mn{ESC}[0m"));
}

#[test]
fn render_does_not_depend_on_other_threads() {
    let it = RED.paint("X");
    let first = it.render();
    let other = std::thread::spawn(|| sgr_apply!(BOLD, GREEN.paint("busy"), 1).render());
    let second = it.render();
    assert_eq!(
        other.join().unwrap(),
        format!("{ESC}[1m{ESC}[32mbusy{ESC}[0m{ESC}[1m1{ESC}[0m")
    );
    assert_eq!(first, second);
    assert_eq!(it.to_small_str().as_str(), first);
}

#[test]
fn control_sequences() {
    assert_eq!(
        CsiSequence::CursorMoveTo { row: Some(2), col: None }.to_string(),
        format!("{ESC}[2;1H")
    );
    assert_eq!(CsiSequence::HideCursor.to_string(), format!("{ESC}[?25l"));
}
