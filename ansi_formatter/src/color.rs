// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types and the RGB to xterm 256 color conversion.
//!
//! The xterm 256 color palette is laid out as:
//! - `0-15`: the 16 base colors.
//! - `16-231`: a 6x6x6 color cube.
//! - `232-255`: a 24 step grayscale ramp.
//!
//! RGB colors are only ever mapped into the cube. Pure grays land on the cube's
//! diagonal (6 levels) instead of the finer grayscale ramp, so they are coarser than
//! they could be.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use strum_macros::{EnumCount, EnumIter};

use crate::{RgbChannel, SgrFormatError};

/// An RGB color with each channel a unit float in `[0.0, 1.0]`. The range is checked
/// on construction, so every value of this type is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    red: f32,
    green: f32,
    blue: f32,
}

/// An index into the xterm 256 color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi256Color {
    pub index: u8,
}

/// Whether a color applies to the text or to the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Foreground,
    Background,
}

/// The 8 base colors that have their own SGR codes (30-37 and 40-47).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
#[repr(u8)]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Map an RGB triple of unit floats to the nearest slot of the xterm 6x6x6 color cube.
/// The result is always in `[16, 231]`.
///
/// # Panics
///
/// Panics if any channel is outside `[0.0, 1.0]` (or is NaN). Use
/// [`try_rgb_to_xterm_index`] to get an error instead.
#[must_use]
pub fn rgb_to_xterm_index(red: f32, green: f32, blue: f32) -> u8 {
    convert_rgb_into_ansi256(RgbColor::new(red, green, blue)).index
}

/// Fallible version of [`rgb_to_xterm_index`].
///
/// # Errors
///
/// Returns [`SgrFormatError::RgbChannelOutOfRange`] for the first channel outside
/// `[0.0, 1.0]`.
pub fn try_rgb_to_xterm_index(
    red: f32,
    green: f32,
    blue: f32,
) -> Result<u8, SgrFormatError> {
    let rgb = RgbColor::try_new(red, green, blue)?;
    Ok(convert_rgb_into_ansi256(rgb).index)
}

/// `16 + 36*R + 6*G + B`, where each channel is first rounded to a cube level `0..=5`.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbColor) -> Ansi256Color {
    let RgbColor { red, green, blue } = rgb;
    let index = 16 + 36 * cube_level(red) + 6 * cube_level(green) + cube_level(blue);
    Ansi256Color { index }
}

/// Round (not truncate) a unit float to one of the 6 cube levels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cube_level(channel: f32) -> u8 { (channel * 5.0 + 0.5) as u8 }

mod rgb_color_impl {
    use tracing::debug;

    use super::*;

    impl RgbColor {
        /// # Panics
        ///
        /// Panics if any channel is outside `[0.0, 1.0]` (or is NaN).
        #[must_use]
        pub fn new(red: f32, green: f32, blue: f32) -> Self {
            match Self::try_new(red, green, blue) {
                Ok(it) => it,
                Err(error) => panic!("{error}"),
            }
        }

        /// # Errors
        ///
        /// Returns [`SgrFormatError::RgbChannelOutOfRange`] for the first channel
        /// outside `[0.0, 1.0]`.
        pub fn try_new(red: f32, green: f32, blue: f32) -> Result<Self, SgrFormatError> {
            Ok(Self {
                red: check_channel(RgbChannel::Red, red)?,
                green: check_channel(RgbChannel::Green, green)?,
                blue: check_channel(RgbChannel::Blue, blue)?,
            })
        }

        #[must_use]
        pub fn red(&self) -> f32 { self.red }

        #[must_use]
        pub fn green(&self) -> f32 { self.green }

        #[must_use]
        pub fn blue(&self) -> f32 { self.blue }
    }

    fn check_channel(channel: RgbChannel, value: f32) -> Result<f32, SgrFormatError> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            debug!(%channel, value, "rejected RGB channel outside [0.0, 1.0]");
            Err(SgrFormatError::RgbChannelOutOfRange { channel, value })
        }
    }

    /// 8-bit channels always fit, so this conversion can't fail.
    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            let unit = |it: u8| f32::from(it) / 255.0;
            Self {
                red: unit(red),
                green: unit(green),
                blue: unit(blue),
            }
        }
    }

    impl TryFrom<(f32, f32, f32)> for RgbColor {
        type Error = SgrFormatError;

        fn try_from((red, green, blue): (f32, f32, f32)) -> Result<Self, Self::Error> {
            Self::try_new(red, green, blue)
        }
    }
}

mod ansi256_color_impl {
    use tracing::debug;

    use super::*;
    use crate::{SGR_PARAM_SEPARATOR, ansi_escape_codes::U8_STRINGS};

    impl Ansi256Color {
        /// # Panics
        ///
        /// Panics if `index >= 256`. Use [`Ansi256Color::try_from`] to get an error
        /// instead.
        #[must_use]
        pub fn from_index(index: u16) -> Self {
            match Self::try_from(index) {
                Ok(it) => it,
                Err(error) => panic!("{error}"),
            }
        }

        /// The SGR parameter string that selects this palette slot, eg: `38;5;196`.
        #[must_use]
        pub fn sgr_params(&self, target: ColorTarget) -> String {
            let mut acc = String::with_capacity(8);
            acc.push_str(target.ansi256_selector());
            acc.push(SGR_PARAM_SEPARATOR);
            acc.push_str(U8_STRINGS[self.index as usize]);
            acc
        }
    }

    impl From<u8> for Ansi256Color {
        fn from(index: u8) -> Self { Self { index } }
    }

    impl TryFrom<u16> for Ansi256Color {
        type Error = SgrFormatError;

        fn try_from(index: u16) -> Result<Self, Self::Error> {
            match u8::try_from(index) {
                Ok(index) => Ok(Self { index }),
                Err(_) => {
                    debug!(index, "rejected ANSI 256 palette index >= 256");
                    Err(SgrFormatError::PaletteIndexOutOfRange { index })
                }
            }
        }
    }
}

mod color_target_impl {
    use super::*;
    use crate::{BG_ANSI256_SELECTOR, FG_ANSI256_SELECTOR, sgr_param};

    impl ColorTarget {
        /// `38` or `48`, the token that starts an extended color selector.
        #[must_use]
        pub const fn extended_param(self) -> u8 {
            match self {
                ColorTarget::Foreground => sgr_param::FG_EXTENDED,
                ColorTarget::Background => sgr_param::BG_EXTENDED,
            }
        }

        /// `38;5` or `48;5`.
        #[must_use]
        pub const fn ansi256_selector(self) -> &'static str {
            match self {
                ColorTarget::Foreground => FG_ANSI256_SELECTOR,
                ColorTarget::Background => BG_ANSI256_SELECTOR,
            }
        }
    }

    impl BaseColor {
        #[must_use]
        pub const fn sgr_param(self, target: ColorTarget) -> u8 {
            let base = match target {
                ColorTarget::Foreground => sgr_param::FG_BLACK,
                ColorTarget::Background => sgr_param::BG_BLACK,
            };
            base + self as u8
        }
    }
}
