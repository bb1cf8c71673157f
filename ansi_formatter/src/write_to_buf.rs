// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! String building for the escape sequences this crate emits.
//!
//! Rendering a [`crate::StyledFragment`] writes many tiny pieces (a [`crate::CSI`], a
//! few parameter tokens, the text, a reset) per argument. Going through `write!` for
//! each of them means a trip through the formatter state machine every time. Types in
//! this crate instead implement [`WriteToBuf`], push everything into one
//! [`BufTextStorage`] with `push_str()`, and make a single
//! [`core::fmt::Formatter::write_str`] call in their [`std::fmt::Display`] impl.
//!
//! ```rust
//! # use std::fmt::{Display, Formatter, Result};
//! # use r3bl_ansi_formatter::{BufTextStorage, WriteToBuf};
//! struct Greeting;
//!
//! impl WriteToBuf for Greeting {
//!     fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
//!         acc.push_str("hello");
//!         Ok(())
//!     }
//! }
//!
//! impl Display for Greeting {
//!     fn fmt(&self, f: &mut Formatter<'_>) -> Result {
//!         let mut acc = BufTextStorage::new();
//!         self.write_to_buf(&mut acc)?;
//!         self.write_buf_to_fmt(&acc, f)
//!     }
//! }
//!
//! assert_eq!(Greeting.to_string(), "hello");
//! ```

use std::fmt::{Formatter, Result};

/// Buffer for building text. Plain [`String`] is the backing storage. Keep this alias so
/// the storage can change without touching every implementor.
pub type BufTextStorage = String;

/// Trait for writing text to a buffer without the [`std::fmt::Formatter`] overhead.
pub trait WriteToBuf {
    /// Write the formatted representation to the provided buffer. Call
    /// [`WriteToBuf::write_buf_to_fmt()`] when you are ready to hand the buffer to a
    /// formatter in a [`std::fmt::Display`] impl.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting operation fails.
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Use [`core::fmt::Formatter::write_str`] to write the `acc` buffer when
    /// implementing the [`std::fmt::Display`] trait.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}
