// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Display, Formatter, Result}};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{BufTextStorage, RESET_SEQUENCE, SgrFormatter, WriteToBuf};

/// The result of styling one or more arguments with an [`SgrFormatter`]. It has one
/// field:
/// - `pieces` - the styled arguments in order. Each piece is some text plus the escape
///   sequences that turn its styles on (outermost formatter first). The trailing reset
///   is *not* stored, it is added when the fragment is rendered.
///
/// Keeping the pieces apart (instead of flattening to one string) is what makes nesting
/// safe. An enclosing formatter prepends its own prefix to *every* piece, and rendering
/// puts a reset after *every* piece. So after an inner styled segment ends, the next
/// piece starts by turning the outer style back on, rather than the inner reset wiping
/// the outer style for the rest of the line.
///
/// ```text
/// BOLD(RED("X"), "Y")
///
/// RED("X")          pieces: [ ESC[31m + "X" ]
/// BOLD(.., "Y")     pieces: [ ESC[1m ESC[31m + "X",  ESC[1m + "Y" ]
/// render            ESC[1m ESC[31m X ESC[0m  ESC[1m Y ESC[0m
/// ```
///
/// The pieces are private to this crate. The only way to get text out of a fragment is
/// to render it ([`Display`], [`StyledFragment::render()`],
/// [`StyledFragment::to_small_str()`]), so the resets are never forgotten.
///
/// ```rust,compile_fail
/// use r3bl_ansi_formatter::presets::RED;
///
/// let it = RED.paint("X");
/// let _unbalanced = it.pieces();
/// ```
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_formatter::{presets::{BOLD, GREEN}, sgr_apply};
///
/// // Single argument.
/// let ok = GREEN.paint("ok");
/// assert_eq!(ok.to_string(), "\x1b[32mok\x1b[0m");
///
/// // Mixed argument types, including a nested fragment.
/// let line = sgr_apply!(BOLD, "status: ", ok, ' ', 42);
/// assert_eq!(line.len(), 4);
///
/// // Homogeneous arguments from an iterator.
/// let list = BOLD.apply(["a", "b"]);
/// assert_eq!(list.to_string(), "\x1b[1ma\x1b[0m\x1b[1mb\x1b[0m");
///
/// // Zero arguments render to nothing at all.
/// assert_eq!(sgr_apply!(BOLD).to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledFragment {
    pieces: sizing::InlineVecStyledPieces,
}

/// One styled argument: its accumulated prefix and its text, still missing the reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StyledPiece {
    pub(crate) prefix: BufTextStorage,
    pub(crate) text: String,
}

pub mod sizing {
    use super::*;

    /// Most invocations style one to a few arguments.
    pub const MAX_STYLED_PIECES: usize = 4;
    pub(crate) type InlineVecStyledPieces = SmallVec<[StyledPiece; MAX_STYLED_PIECES]>;

    // PERF: If you make this number too large, eg: more than 16, then it will slow down
    // rendering of short labels.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
}

/// An argument to [`SgrFormatter::apply()`]: either plain text, or the (not yet
/// rendered) result of an inner formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleArg {
    PlainText(String),
    Styled(StyledFragment),
}

impl StyleArg {
    /// Wrap anything [`Display`] as plain text.
    #[must_use]
    pub fn plain(value: impl Display) -> Self { StyleArg::PlainText(value.to_string()) }
}

/// Capability of an argument type to be styled, ie: be "convertible to display text" or
/// already be a [`StyledFragment`]. Implemented for text, chars, bools, numbers,
/// fragments, and [`StyleArg`] itself. Any other [`Display`] type can go through
/// [`StyleArg::plain()`].
pub trait IntoStyleArg {
    fn into_style_arg(self) -> StyleArg;
}

mod into_style_arg_impl {
    use super::*;

    impl IntoStyleArg for StyleArg {
        fn into_style_arg(self) -> StyleArg { self }
    }

    impl IntoStyleArg for StyledFragment {
        fn into_style_arg(self) -> StyleArg { StyleArg::Styled(self) }
    }

    impl IntoStyleArg for &StyledFragment {
        fn into_style_arg(self) -> StyleArg { StyleArg::Styled(self.clone()) }
    }

    impl IntoStyleArg for String {
        fn into_style_arg(self) -> StyleArg { StyleArg::PlainText(self) }
    }

    impl IntoStyleArg for &str {
        fn into_style_arg(self) -> StyleArg { StyleArg::PlainText(self.to_owned()) }
    }

    impl IntoStyleArg for &String {
        fn into_style_arg(self) -> StyleArg { StyleArg::PlainText(self.clone()) }
    }

    impl IntoStyleArg for Cow<'_, str> {
        fn into_style_arg(self) -> StyleArg { StyleArg::PlainText(self.into_owned()) }
    }

    macro_rules! impl_into_style_arg_for_display {
        ($($ty:ty),* $(,)?) => {
            $(
                impl IntoStyleArg for $ty {
                    fn into_style_arg(self) -> StyleArg { StyleArg::plain(self) }
                }
            )*
        };
    }

    impl_into_style_arg_for_display!(
        char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
        f64,
    );
}

/// Style any mix of argument types with one formatter. Each argument must implement
/// [`crate::IntoStyleArg`].
///
/// ```rust
/// use r3bl_ansi_formatter::{presets::{BOLD, RED}, sgr_apply};
///
/// let it = sgr_apply!(BOLD, RED.paint("X"), "Y");
/// assert_eq!(it.to_string(), "\x1b[1m\x1b[31mX\x1b[0m\x1b[1mY\x1b[0m");
/// ```
#[macro_export]
macro_rules! sgr_apply {
    ($formatter:expr $(,)?) => {
        $formatter.apply(::std::iter::empty::<$crate::StyleArg>())
    };
    ($formatter:expr, $($arg:expr),+ $(,)?) => {
        $formatter.apply([$($crate::IntoStyleArg::into_style_arg($arg)),+])
    };
}

/// The nesting algorithm.
mod apply_impl {
    use super::*;

    impl SgrFormatter {
        /// Style each argument in order.
        /// - [`StyleArg::PlainText`] becomes one piece: this formatter's prefix + text.
        /// - [`StyleArg::Styled`] keeps all of its pieces, and this formatter's prefix is
        ///   prepended to each one of them.
        #[must_use]
        pub fn apply<A: IntoStyleArg>(
            &self,
            args: impl IntoIterator<Item = A>,
        ) -> StyledFragment {
            let prefix = self.to_string();
            let mut acc = StyledFragment::default();
            for arg in args {
                match arg.into_style_arg() {
                    StyleArg::PlainText(text) => acc.pieces.push(StyledPiece {
                        prefix: prefix.clone(),
                        text,
                    }),
                    StyleArg::Styled(fragment) => {
                        for mut piece in fragment.pieces {
                            piece.prefix.insert_str(0, &prefix);
                            acc.pieces.push(piece);
                        }
                    }
                }
            }
            acc
        }

        /// Style a single argument.
        #[must_use]
        pub fn paint(&self, arg: impl IntoStyleArg) -> StyledFragment { self.apply([arg]) }
    }
}

mod styled_fragment_impl {
    use super::*;

    impl StyledFragment {
        #[cfg(test)]
        pub(crate) fn pieces(&self) -> &[StyledPiece] { &self.pieces }

        #[must_use]
        pub fn len(&self) -> usize { self.pieces.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.pieces.is_empty() }

        /// The final serialization: every piece followed by a reset.
        #[must_use]
        pub fn render(&self) -> String { self.to_string() }

        /// Same output as [`StyledFragment::render()`], written straight into an inline
        /// buffer on the stack. It only spills to the heap once the output is longer
        /// than [`sizing::DEFAULT_STRING_STORAGE_SIZE`].
        #[must_use]
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            let mut acc = SmallString::new();
            self.write_pieces(&mut acc);
            acc
        }

        /// Each piece, then a reset. Shared by every rendering path.
        fn write_pieces(&self, acc: &mut impl PushStr) {
            for StyledPiece { prefix, text } in &self.pieces {
                acc.push_str(prefix);
                acc.push_str(text);
                acc.push_str(RESET_SEQUENCE);
            }
        }
    }

    /// The output buffers [`StyledFragment`] renders into.
    trait PushStr {
        fn push_str(&mut self, it: &str);
    }

    impl PushStr for String {
        fn push_str(&mut self, it: &str) { String::push_str(self, it); }
    }

    impl PushStr for SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
        fn push_str(&mut self, it: &str) { SmallString::push_str(self, it); }
    }

    impl WriteToBuf for StyledFragment {
        fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
            self.write_pieces(acc);
            Ok(())
        }
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for StyledFragment {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let mut acc = BufTextStorage::new();
            self.write_to_buf(&mut acc)?;
            self.write_buf_to_fmt(&acc, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presets::{BLINK, BLUE, BOLD, RED, UNDERLINE, YELLOW_BG};

    #[test]
    fn test_zero_args_render_empty() {
        let it = sgr_apply!(BOLD);
        assert!(it.is_empty());
        assert_eq!(it.to_string(), "");
        assert_eq!(BOLD.apply(Vec::<StyleArg>::new()).render(), "");
    }

    #[test]
    fn test_single_plain_arg() {
        assert_eq!(RED.paint("X").to_string(), "\x1b[31mX\x1b[0m");
    }

    #[test]
    fn test_nested_outer_prefix_on_each_piece() {
        let it = sgr_apply!(BOLD, RED.paint("X"), "Y");
        assert_eq!(it.to_string(), "\x1b[1m\x1b[31mX\x1b[0m\x1b[1mY\x1b[0m");
        assert_eq!(
            it.pieces(),
            &[
                StyledPiece {
                    prefix: "\x1b[1m\x1b[31m".into(),
                    text: "X".into(),
                },
                StyledPiece {
                    prefix: "\x1b[1m".into(),
                    text: "Y".into(),
                },
            ]
        );
    }

    #[test]
    fn test_three_levels_interleaved() {
        // The plain "b" at the middle level must get the middle style back, and "d" at
        // the outer level only the outer style.
        let inner = sgr_apply!(BLUE, "a");
        let middle = sgr_apply!(UNDERLINE, inner, "b", RED.paint("c"));
        let outer = sgr_apply!(YELLOW_BG, middle, "d");
        assert_eq!(
            outer.to_string(),
            concat!(
                "\x1b[43m\x1b[4m\x1b[34ma\x1b[0m",
                "\x1b[43m\x1b[4mb\x1b[0m",
                "\x1b[43m\x1b[4m\x1b[31mc\x1b[0m",
                "\x1b[43md\x1b[0m",
            )
        );
    }

    #[test]
    fn test_merged_formatter_single_sequence() {
        assert_eq!((BOLD + UNDERLINE).paint("Z").to_string(), "\x1b[1;4mZ\x1b[0m");
    }

    #[test]
    fn test_mixed_arg_types_keep_order() {
        let it = sgr_apply!(BLINK, 1_u8, true, 'c', 2.5_f64, String::from("s"));
        let texts = it.pieces().iter().map(|it| it.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["1", "true", "c", "2.5", "s"]);
        assert_eq!(it.to_string().matches(RESET_SEQUENCE).count(), 5);
    }

    #[test]
    fn test_empty_inner_fragment_contributes_nothing() {
        let it = sgr_apply!(BOLD, sgr_apply!(RED), "Y");
        assert_eq!(it.to_string(), "\x1b[1mY\x1b[0m");
    }

    #[test]
    fn test_empty_formatter_still_resets() {
        let nothing: [&SgrFormatter; 0] = [];
        let it = SgrFormatter::merge(nothing).paint("plain");
        assert_eq!(it.to_string(), "plain\x1b[0m");
    }

    #[test]
    fn test_render_is_deterministic() {
        let make = || sgr_apply!(BOLD, RED.paint("X"), "Y", 7);
        assert_eq!(make().render(), make().render());
        let it = make();
        assert_eq!(it.render(), it.render());
    }

    #[test]
    fn test_borrowed_fragment_arg() {
        let inner = RED.paint("X");
        let a = BOLD.paint(&inner);
        let b = BOLD.paint(inner);
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_is_the_same_on_every_thread() {
        let it = sgr_apply!(BOLD, RED.paint("X"), "Y");
        let first = it.render();
        let from_threads = std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| it.render()))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        });
        for rendered in from_threads {
            assert_eq!(rendered, first);
        }
        assert_eq!(it.render(), first);
        assert_eq!(first, "\x1b[1m\x1b[31mX\x1b[0m\x1b[1mY\x1b[0m");
    }

    #[test]
    fn test_to_small_str_stays_inline() {
        let it = RED.paint("hi");
        let small = it.to_small_str();
        assert_eq!(small.as_str(), "\x1b[31mhi\x1b[0m");
        assert!(!small.spilled());
    }

    #[test]
    fn test_to_small_str_matches_render_when_spilled() {
        let it = sgr_apply!(BOLD, RED.paint("X"), "Y", UNDERLINE.paint("Z"));
        let small = it.to_small_str();
        assert!(small.spilled());
        assert_eq!(small.as_str(), it.render());
    }
}
