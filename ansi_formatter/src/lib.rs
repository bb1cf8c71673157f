// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_formatter
//!
//! Compose ANSI SGR (Select Graphic Rendition) styles and apply them to text, so that it
//! shows up colored, bold, underlined, or blinking in a terminal. Styles nest safely:
//! styling text that already contains styled segments turns the outer style back on
//! after each inner segment, instead of an inner reset wiping everything.
//!
//! This crate only builds strings. Writing them to stdout / stderr is up to you. It
//! targets the common ANSI / xterm 256 color subset. There is no terminfo lookup, no
//! Windows console API, and no truecolor negotiation.
//!
//! ## Building blocks
//!
//! | Item                   | What it is                                                  |
//! | :--------------------- | :---------------------------------------------------------- |
//! | [`SgrFormatter`]       | An immutable list of SGR parameters, eg: `1;4`              |
//! | [`presets`]            | Named formatters: 8 colors, 8 backgrounds, bold, blink, ... |
//! | [`StyledFragment`]     | The result of applying a formatter. Renders via `Display`   |
//! | [`StyleArg`]           | Plain text or a nested [`StyledFragment`]                   |
//! | [`ansi_escape_codes`]  | The raw codes, for hand assembled sequences                 |
//!
//! ## Example usage
//!
//! ```rust
//! use r3bl_ansi_formatter::{SgrFormatter, presets::{BOLD, RED, UNDERLINE}, sgr_apply};
//!
//! // Preset.
//! assert_eq!(RED.paint("X").to_string(), "\x1b[31mX\x1b[0m");
//!
//! // Nesting: the outer prefix goes on each piece, and each piece gets a reset.
//! assert_eq!(
//!     sgr_apply!(BOLD, RED.paint("X"), "Y").to_string(),
//!     "\x1b[1m\x1b[31mX\x1b[0m\x1b[1mY\x1b[0m"
//! );
//!
//! // Merging emits one escape sequence.
//! assert_eq!((BOLD + UNDERLINE).paint("Z").to_string(), "\x1b[1;4mZ\x1b[0m");
//!
//! // 256 colors from RGB unit floats, or straight from a palette index.
//! let orange = SgrFormatter::fg_rgb(1.0, 0.5, 0.0);
//! let on_navy = SgrFormatter::bg_palette(17);
//! println!("{}", sgr_apply!(orange + on_navy, "warning"));
//! ```
//!
//! ## Errors
//!
//! Out of range input (an RGB channel outside `[0.0, 1.0]`, a palette index `>= 256`)
//! is a bug in the calling code. The plain constructors panic. The `try_*` constructors
//! return a [`SgrFormatError`] instead.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod ansi_escape_codes;
mod color;
mod error;
mod sgr_formatter;
mod styled_fragment;
mod transform_color;
mod write_to_buf;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use error::*;
pub use sgr_formatter::*;
pub use styled_fragment::*;
pub use transform_color::*;
pub use write_to_buf::*;
