// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Display, Formatter, Result},
          ops::Add};

use crate::{Ansi256Color, BaseColor, BufTextStorage, CSI, ColorTarget, RgbColor, SGR,
            SGR_PARAM_SEPARATOR, SgrFormatError, TransformColor, WriteToBuf,
            ansi_escape_codes::U8_STRINGS, sgr_param};

/// An immutable style: an ordered list of SGR parameter tokens that are emitted together
/// in one escape sequence, eg: `[1, 4]` becomes `ESC[1;4m`.
///
/// - Use one of the [`presets`] (eg: [`presets::RED`], [`presets::BOLD`]).
/// - Or build a 256 color one with [`SgrFormatter::fg_rgb()`],
///   [`SgrFormatter::bg_palette()`], etc.
/// - Or combine several with [`SgrFormatter::merge()`] or `+`.
///
/// Then style text with [`SgrFormatter::paint()`], [`SgrFormatter::apply()`], or the
/// [`crate::sgr_apply!`] macro. See [`crate::StyledFragment`] for how nesting works.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_formatter::{presets::{BOLD, RED, UNDERLINE}, sgr_apply};
///
/// let bold_underline = BOLD + UNDERLINE;
/// assert_eq!(bold_underline.paint("Z").to_string(), "\x1b[1;4mZ\x1b[0m");
///
/// let nested = sgr_apply!(BOLD, RED.paint("X"), "Y");
/// assert_eq!(nested.to_string(), "\x1b[1m\x1b[31mX\x1b[0m\x1b[1mY\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SgrFormatter {
    params: Cow<'static, [u8]>,
}

/// The named styles. These are process-wide constants, share them freely.
pub mod presets {
    use super::SgrFormatter;
    use crate::sgr_param;

    pub const BLACK: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_BLACK]);
    pub const RED: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_RED]);
    pub const GREEN: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_GREEN]);
    pub const YELLOW: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_YELLOW]);
    pub const BLUE: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_BLUE]);
    pub const MAGENTA: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_MAGENTA]);
    pub const CYAN: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_CYAN]);
    pub const WHITE: SgrFormatter = SgrFormatter::from_static(&[sgr_param::FG_WHITE]);
    /// Back to the terminal's default text color.
    pub const DEFAULT_COLOR: SgrFormatter =
        SgrFormatter::from_static(&[sgr_param::FG_DEFAULT]);

    pub const BLACK_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_BLACK]);
    pub const RED_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_RED]);
    pub const GREEN_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_GREEN]);
    pub const YELLOW_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_YELLOW]);
    pub const BLUE_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_BLUE]);
    pub const MAGENTA_BG: SgrFormatter =
        SgrFormatter::from_static(&[sgr_param::BG_MAGENTA]);
    pub const CYAN_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_CYAN]);
    pub const WHITE_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_WHITE]);
    /// Back to the terminal's default background color.
    pub const DEFAULT_BG: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BG_DEFAULT]);

    pub const BOLD: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BOLD]);
    pub const NO_BOLD: SgrFormatter = SgrFormatter::from_static(&[sgr_param::NO_BOLD]);
    pub const BLINK: SgrFormatter = SgrFormatter::from_static(&[sgr_param::BLINK]);
    pub const NO_BLINK: SgrFormatter = SgrFormatter::from_static(&[sgr_param::NO_BLINK]);
    pub const UNDERLINE: SgrFormatter = SgrFormatter::from_static(&[sgr_param::UNDERLINE]);
    pub const NO_UNDERLINE: SgrFormatter =
        SgrFormatter::from_static(&[sgr_param::NO_UNDERLINE]);

    /// Resets every attribute.
    pub const NO_FORMAT: SgrFormatter = SgrFormatter::from_static(&[sgr_param::RESET]);
}

mod construct {
    use super::*;

    impl SgrFormatter {
        #[must_use]
        pub const fn from_static(params: &'static [u8]) -> Self {
            Self {
                params: Cow::Borrowed(params),
            }
        }

        #[must_use]
        pub fn from_params(params: impl IntoIterator<Item = u8>) -> Self {
            Self {
                params: Cow::Owned(params.into_iter().collect()),
            }
        }

        #[must_use]
        pub fn params(&self) -> &[u8] { &self.params }

        /// An empty formatter (eg: the result of merging nothing) emits no escape
        /// sequence at all.
        #[must_use]
        pub fn is_empty(&self) -> bool { self.params.is_empty() }

        /// One of the 8 base colors via its own code (30-37 or 40-47).
        #[must_use]
        pub fn base_color(target: ColorTarget, color: BaseColor) -> Self {
            Self::from_params([color.sgr_param(target)])
        }

        /// Any 256 color palette slot, emitted as `38;5;N` or `48;5;N`.
        #[must_use]
        pub fn color(target: ColorTarget, color: impl TransformColor) -> Self {
            let Ansi256Color { index } = color.as_ansi256();
            Self::from_params([target.extended_param(), sgr_param::PALETTE_MODE, index])
        }

        #[must_use]
        pub fn fg_color(color: impl TransformColor) -> Self {
            Self::color(ColorTarget::Foreground, color)
        }

        #[must_use]
        pub fn bg_color(color: impl TransformColor) -> Self {
            Self::color(ColorTarget::Background, color)
        }

        /// # Panics
        ///
        /// Panics if any channel is outside `[0.0, 1.0]`.
        #[must_use]
        pub fn fg_rgb(red: f32, green: f32, blue: f32) -> Self {
            Self::fg_color(RgbColor::new(red, green, blue))
        }

        /// # Panics
        ///
        /// Panics if any channel is outside `[0.0, 1.0]`.
        #[must_use]
        pub fn bg_rgb(red: f32, green: f32, blue: f32) -> Self {
            Self::bg_color(RgbColor::new(red, green, blue))
        }

        /// # Errors
        ///
        /// Returns [`SgrFormatError::RgbChannelOutOfRange`] if any channel is outside
        /// `[0.0, 1.0]`.
        pub fn try_fg_rgb(
            red: f32,
            green: f32,
            blue: f32,
        ) -> std::result::Result<Self, SgrFormatError> {
            Ok(Self::fg_color(RgbColor::try_new(red, green, blue)?))
        }

        /// # Errors
        ///
        /// Returns [`SgrFormatError::RgbChannelOutOfRange`] if any channel is outside
        /// `[0.0, 1.0]`.
        pub fn try_bg_rgb(
            red: f32,
            green: f32,
            blue: f32,
        ) -> std::result::Result<Self, SgrFormatError> {
            Ok(Self::bg_color(RgbColor::try_new(red, green, blue)?))
        }

        /// # Panics
        ///
        /// Panics if `index >= 256`.
        #[must_use]
        pub fn fg_palette(index: u16) -> Self {
            Self::fg_color(Ansi256Color::from_index(index))
        }

        /// # Panics
        ///
        /// Panics if `index >= 256`.
        #[must_use]
        pub fn bg_palette(index: u16) -> Self {
            Self::bg_color(Ansi256Color::from_index(index))
        }

        /// # Errors
        ///
        /// Returns [`SgrFormatError::PaletteIndexOutOfRange`] if `index >= 256`.
        pub fn try_fg_palette(index: u16) -> std::result::Result<Self, SgrFormatError> {
            Ok(Self::fg_color(Ansi256Color::try_from(index)?))
        }

        /// # Errors
        ///
        /// Returns [`SgrFormatError::PaletteIndexOutOfRange`] if `index >= 256`.
        pub fn try_bg_palette(index: u16) -> std::result::Result<Self, SgrFormatError> {
            Ok(Self::bg_color(Ansi256Color::try_from(index)?))
        }
    }
}

mod merge {
    use super::*;

    impl SgrFormatter {
        /// Concatenate the parameters of every formatter, left to right, into one.
        ///
        /// Nothing is de-duplicated. If two operands set the same attribute (eg: two
        /// colors) both parameters are kept and the terminal decides which one wins.
        #[must_use]
        pub fn merge<'a>(formatters: impl IntoIterator<Item = &'a SgrFormatter>) -> Self {
            let merged = Self::from_params(
                formatters
                    .into_iter()
                    .flat_map(|it| it.params.iter().copied()),
            );
            tracing::trace!(params = ?merged.params(), "merged SGR formatters");
            merged
        }
    }

    impl Add<&SgrFormatter> for &SgrFormatter {
        type Output = SgrFormatter;

        fn add(self, rhs: &SgrFormatter) -> SgrFormatter { SgrFormatter::merge([self, rhs]) }
    }

    impl Add for SgrFormatter {
        type Output = SgrFormatter;

        fn add(self, rhs: SgrFormatter) -> SgrFormatter { &self + &rhs }
    }

    impl Add<&SgrFormatter> for SgrFormatter {
        type Output = SgrFormatter;

        fn add(self, rhs: &SgrFormatter) -> SgrFormatter { &self + rhs }
    }
}

/// The [`Display`] output is the escape sequence prefix, eg: `ESC[1;4m`.
mod display_trait_impl {
    use super::*;

    impl WriteToBuf for SgrFormatter {
        fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
            let Some((first, rest)) = self.params.split_first() else {
                return Ok(());
            };
            acc.push_str(CSI);
            acc.push_str(U8_STRINGS[*first as usize]);
            for param in rest {
                acc.push(SGR_PARAM_SEPARATOR);
                acc.push_str(U8_STRINGS[*param as usize]);
            }
            acc.push_str(SGR);
            Ok(())
        }
    }

    impl Display for SgrFormatter {
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
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::{presets::*, *};

    #[test_case(RED, "\x1b[31m")]
    #[test_case(BLACK_BG, "\x1b[40m")]
    #[test_case(RED_BG, "\x1b[41m")]
    #[test_case(WHITE_BG, "\x1b[47m")]
    #[test_case(DEFAULT_COLOR, "\x1b[39m")]
    #[test_case(DEFAULT_BG, "\x1b[49m")]
    #[test_case(BOLD, "\x1b[1m")]
    #[test_case(NO_BOLD, "\x1b[22m")]
    #[test_case(BLINK, "\x1b[5m")]
    #[test_case(NO_BLINK, "\x1b[25m")]
    #[test_case(UNDERLINE, "\x1b[4m")]
    #[test_case(NO_UNDERLINE, "\x1b[24m")]
    #[test_case(NO_FORMAT, "\x1b[0m")]
    fn preset_prefix(formatter: SgrFormatter, expected: &str) {
        assert_eq!(formatter.to_string(), expected);
    }

    #[test]
    fn base_color_presets_match_base_colors() {
        let fg = [BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE];
        let bg = [
            BLACK_BG, RED_BG, GREEN_BG, YELLOW_BG, BLUE_BG, MAGENTA_BG, CYAN_BG, WHITE_BG,
        ];
        for ((color, fg), bg) in BaseColor::iter().zip(fg).zip(bg) {
            assert_eq!(SgrFormatter::base_color(ColorTarget::Foreground, color), fg);
            assert_eq!(SgrFormatter::base_color(ColorTarget::Background, color), bg);
        }
    }

    #[test]
    fn rgb_factories() {
        assert_eq!(SgrFormatter::fg_rgb(1.0, 0.0, 0.0).to_string(), "\x1b[38;5;196m");
        assert_eq!(SgrFormatter::bg_rgb(0.0, 0.0, 1.0).to_string(), "\x1b[48;5;21m");
        assert_eq!(
            SgrFormatter::fg_color(RgbColor::from((0, 255, 0))).params(),
            &[38, 5, 46]
        );
    }

    #[test]
    fn palette_factories() {
        assert_eq!(SgrFormatter::fg_palette(0).to_string(), "\x1b[38;5;0m");
        assert_eq!(SgrFormatter::bg_palette(255).to_string(), "\x1b[48;5;255m");
    }

    #[test]
    fn try_factories_reject_bad_input() {
        assert_eq!(
            SgrFormatter::try_fg_palette(256),
            Err(SgrFormatError::PaletteIndexOutOfRange { index: 256 })
        );
        assert!(SgrFormatter::try_bg_palette(300).is_err());
        assert!(SgrFormatter::try_fg_rgb(1.001, 0.0, 0.0).is_err());
        assert!(SgrFormatter::try_bg_rgb(0.0, -0.001, 0.0).is_err());
        assert_eq!(SgrFormatter::try_bg_rgb(0.0, 0.0, 0.0), Ok(SgrFormatter::bg_palette(16)));
    }

    #[test]
    #[should_panic(expected = "palette index is 256")]
    fn palette_factory_panics() {
        let _unused = SgrFormatter::bg_palette(256);
    }

    #[test]
    #[should_panic(expected = "RGB red channel")]
    fn rgb_factory_panics() {
        let _unused = SgrFormatter::fg_rgb(2.0, 0.0, 0.0);
    }

    #[test]
    fn merge_preserves_order() {
        assert_eq!((BOLD + UNDERLINE).to_string(), "\x1b[1;4m");
        assert_eq!((UNDERLINE + BOLD).to_string(), "\x1b[4;1m");
        assert_eq!(
            SgrFormatter::merge([&BOLD, &BLINK, &SgrFormatter::bg_palette(17)]).params(),
            &[1, 5, 48, 5, 17]
        );
    }

    #[test]
    fn merge_keeps_conflicting_params() {
        assert_eq!((&RED + &BLUE).to_string(), "\x1b[31;34m");
        assert_eq!((RED + &RED).params(), &[31, 31]);
    }

    #[test]
    fn merge_nothing_is_empty() {
        let nothing: [&SgrFormatter; 0] = [];
        let empty = SgrFormatter::merge(nothing);
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
    }
}
