// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Ansi256Color, BaseColor, RgbColor, convert_rgb_into_ansi256};

/// Anything that can be turned into a slot of the xterm 256 color palette. This is what
/// [`crate::SgrFormatter::fg_color()`] and [`crate::SgrFormatter::bg_color()`] accept.
pub trait TransformColor {
    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color.
    fn as_ansi256(&self) -> Ansi256Color;
}

impl TransformColor for RgbColor {
    fn as_ansi256(&self) -> Ansi256Color { convert_rgb_into_ansi256(*self) }
}

impl TransformColor for Ansi256Color {
    fn as_ansi256(&self) -> Ansi256Color { *self }
}

/// The base colors occupy palette slots `0-7`.
impl TransformColor for BaseColor {
    fn as_ansi256(&self) -> Ansi256Color {
        Ansi256Color {
            index: *self as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::TransformColor;
    use crate::{Ansi256Color, BaseColor, RgbColor};

    #[test_case(RgbColor::new(0.0, 0.0, 0.0), 16)]
    #[test_case(RgbColor::from((255, 128, 0)), 214)]
    #[test_case(RgbColor::from((255, 255, 255)), 231)]
    fn test_rgb_color_as_ansi256(rgb_color: RgbColor, index: u8) {
        assert_eq!(rgb_color.as_ansi256(), Ansi256Color { index });
    }

    #[test]
    fn test_ansi256_color_as_ansi256() {
        let color = Ansi256Color { index: 42 };
        assert_eq!(color.as_ansi256(), color);
    }

    #[test_case(BaseColor::Black, 0)]
    #[test_case(BaseColor::Red, 1)]
    #[test_case(BaseColor::White, 7)]
    fn test_base_color_as_ansi256(color: BaseColor, index: u8) {
        assert_eq!(color.as_ansi256(), Ansi256Color { index });
    }
}
