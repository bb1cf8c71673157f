// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for precondition violations. See [`SgrFormatError`] for details.

use strum_macros::Display;

/// One channel of an [`crate::RgbColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

/// Errors returned by the `try_*` constructors.
///
/// Both variants are programmer errors in the calling code. The non-`try` constructors
/// panic with the same message instead of returning them.
///
/// | Variant                    | Cause                                     |
/// | :------------------------- | :---------------------------------------- |
/// | [`RgbChannelOutOfRange`]   | An RGB channel is outside `[0.0, 1.0]`    |
/// | [`PaletteIndexOutOfRange`] | A 256 color palette index is `>= 256`     |
///
/// [`RgbChannelOutOfRange`]: Self::RgbChannelOutOfRange
/// [`PaletteIndexOutOfRange`]: Self::PaletteIndexOutOfRange
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum SgrFormatError {
    #[error("RGB {channel} channel is {value}, expected a value in [0.0, 1.0]")]
    #[diagnostic(
        code(r3bl_ansi_formatter::rgb_channel_out_of_range),
        help("Scale 8-bit channels to unit floats first, or use `RgbColor::from((r, g, b))`")
    )]
    RgbChannelOutOfRange { channel: RgbChannel, value: f32 },

    #[error("ANSI 256 palette index is {index}, expected a value in [0, 255]")]
    #[diagnostic(
        code(r3bl_ansi_formatter::palette_index_out_of_range),
        help("The xterm palette has 256 slots: 0-15 base, 16-231 cube, 232-255 grays")
    )]
    PaletteIndexOutOfRange { index: u16 },
}
