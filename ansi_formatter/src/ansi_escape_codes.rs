// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The read-only table of escape-code building blocks used by this crate.
//!
//! Every sequence this crate produces has the shape `ESC [ <params> <final>`:
//! - `ESC [` is the Control Sequence Introducer ([`CSI`]).
//! - `<params>` are decimal parameter codes joined by [`SGR_PARAM_SEPARATOR`].
//! - `<final>` selects the command. For styling it is always [`SGR`] (`m`).
//!
//! Ordinary callers never need this module. They use the presets and factories on
//! [`crate::SgrFormatter`] instead. It is public for callers that want to assemble
//! sequences by hand.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result, Write};

use const_format::concatcp;

use crate::{BufTextStorage, WriteToBuf};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// CSI m: Select Graphic Rendition (SGR) terminator.
pub const SGR: &str = "m";

/// Separates parameters inside one escape sequence, eg: `ESC[1;4m`.
pub const SGR_PARAM_SEPARATOR: char = ';';

/// `ESC[0m`, appended after every rendered piece.
pub const RESET_SEQUENCE: &str = concatcp!(CSI, sgr_param::RESET, SGR);

/// Selector prefix for a foreground color from the 256 color palette.
pub const FG_ANSI256_SELECTOR: &str =
    concatcp!(sgr_param::FG_EXTENDED, SGR_PARAM_SEPARATOR, sgr_param::PALETTE_MODE);

/// Selector prefix for a background color from the 256 color palette.
pub const BG_ANSI256_SELECTOR: &str =
    concatcp!(sgr_param::BG_EXTENDED, SGR_PARAM_SEPARATOR, sgr_param::PALETTE_MODE);

/// SGR parameter codes. Each one is a single token that goes between [`CSI`] and
/// [`SGR`].
pub mod sgr_param {
    /// Reset all attributes.
    pub const RESET: u8 = 0;

    pub const BOLD: u8 = 1;
    pub const UNDERLINE: u8 = 4;
    pub const BLINK: u8 = 5;

    /// Normal intensity. Turns off bold (and dim).
    pub const NO_BOLD: u8 = 22;
    pub const NO_UNDERLINE: u8 = 24;
    pub const NO_BLINK: u8 = 25;

    // Foreground colors (30-37).
    pub const FG_BLACK: u8 = 30;
    pub const FG_RED: u8 = 31;
    pub const FG_GREEN: u8 = 32;
    pub const FG_YELLOW: u8 = 33;
    pub const FG_BLUE: u8 = 34;
    pub const FG_MAGENTA: u8 = 35;
    pub const FG_CYAN: u8 = 36;
    pub const FG_WHITE: u8 = 37;
    pub const FG_EXTENDED: u8 = 38;
    pub const FG_DEFAULT: u8 = 39;

    // Background colors (40-47).
    pub const BG_BLACK: u8 = 40;
    pub const BG_RED: u8 = 41;
    pub const BG_GREEN: u8 = 42;
    pub const BG_YELLOW: u8 = 43;
    pub const BG_BLUE: u8 = 44;
    pub const BG_MAGENTA: u8 = 45;
    pub const BG_CYAN: u8 = 46;
    pub const BG_WHITE: u8 = 47;
    pub const BG_EXTENDED: u8 = 48;
    pub const BG_DEFAULT: u8 = 49;

    /// Follows [`FG_EXTENDED`] or [`BG_EXTENDED`] to pick a 256 color palette index.
    pub const PALETTE_MODE: u8 = 5;
}

/// CSI H: Cursor Position (CUP). Moves cursor to row n, column m (default 1,1).
pub const CUP_CURSOR_POSITION: char = 'H';

/// CSI 2 J: Erase the entire screen.
pub const ED_ERASE_ALL: &str = "2J";

/// CSI 1 J: Erase from start of screen to cursor.
pub const ED_ERASE_BEFORE_CURSOR: &str = "1J";

/// CSI 0 J: Erase from cursor to end of screen.
pub const ED_ERASE_AFTER_CURSOR: &str = "0J";

/// CSI ? 25 h: Show cursor (DECTCEM).
pub const DECTCEM_SHOW_CURSOR: &str = "?25h";

/// CSI ? 25 l: Hide cursor (DECTCEM).
pub const DECTCEM_HIDE_CURSOR: &str = "?25l";

/// Lookup table for u8 to string conversion to avoid runtime formatting overhead.
/// Pre-computed at compile time for all possible u8 values (0-255).
pub(crate) const U8_STRINGS: [&str; 256] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43",
    "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55", "56", "57",
    "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70", "71",
    "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84", "85",
    "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
    "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111",
    "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122", "123",
    "124", "125", "126", "127", "128", "129", "130", "131", "132", "133", "134", "135",
    "136", "137", "138", "139", "140", "141", "142", "143", "144", "145", "146", "147",
    "148", "149", "150", "151", "152", "153", "154", "155", "156", "157", "158", "159",
    "160", "161", "162", "163", "164", "165", "166", "167", "168", "169", "170", "171",
    "172", "173", "174", "175", "176", "177", "178", "179", "180", "181", "182", "183",
    "184", "185", "186", "187", "188", "189", "190", "191", "192", "193", "194", "195",
    "196", "197", "198", "199", "200", "201", "202", "203", "204", "205", "206", "207",
    "208", "209", "210", "211", "212", "213", "214", "215", "216", "217", "218", "219",
    "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230", "231",
    "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242", "243",
    "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254", "255",
];

/// Which part of the screen [`CsiSequence::ClearScreen`] erases.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClearScope {
    All,
    BeforeCursor,
    AfterCursor,
}

/// Non-styling control sequences. These only build strings, writing them to a
/// terminal is up to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiSequence {
    /// 1-indexed. A missing component defaults to 1.
    CursorMoveTo { row: Option<u16>, col: Option<u16> },
    ClearScreen(ClearScope),
    ShowCursor,
    HideCursor,
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        self.write_buf_to_fmt(&acc, f)
    }
}

impl WriteToBuf for CsiSequence {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(CSI);
        match *self {
            CsiSequence::CursorMoveTo { row, col } => {
                write!(acc, "{}", row.unwrap_or(1))?;
                acc.push(SGR_PARAM_SEPARATOR);
                write!(acc, "{}", col.unwrap_or(1))?;
                acc.push(CUP_CURSOR_POSITION);
            }
            CsiSequence::ClearScreen(scope) => acc.push_str(match scope {
                ClearScope::All => ED_ERASE_ALL,
                ClearScope::BeforeCursor => ED_ERASE_BEFORE_CURSOR,
                ClearScope::AfterCursor => ED_ERASE_AFTER_CURSOR,
            }),
            CsiSequence::ShowCursor => acc.push_str(DECTCEM_SHOW_CURSOR),
            CsiSequence::HideCursor => acc.push_str(DECTCEM_HIDE_CURSOR),
        }
        Ok(())
    }
}
