//! Player colors and their derived board squares.
//!
//! Colors are handed out to joining players in declaration order. Each
//! color's entry square and finish square are derived from its discriminant.

use serde::{Deserialize, Serialize};

use super::geometry::{START_OFFSET, START_SPACING, TRACK_SIZE};

/// Number of playable colors.
pub const COLOR_COUNT: usize = 4;

/// A player color, assigned in declaration order at game setup.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Yellow = 0,
    Blue = 1,
    Red = 2,
    Green = 3,
}

/// All color variants in assignment order.
pub const ALL_COLORS: [Color; COLOR_COUNT] = [Color::Yellow, Color::Blue, Color::Red, Color::Green];

impl Color {
    /// Returns the track square where this color's tokens enter play.
    pub const fn starting_square(self) -> u8 {
        self as u8 * START_SPACING + START_OFFSET
    }

    /// Returns the track square from which this color's tokens turn off
    /// into their private finish lane.
    ///
    /// Yellow's finish square computes to 0, which no track move ever
    /// produces; the other colors turn off at 18, 35, and 52.
    pub const fn finish_square(self) -> u8 {
        let base = (self as u8 * START_SPACING + TRACK_SIZE) % TRACK_SIZE;
        match self {
            Color::Yellow => base,
            _ => base + 1,
        }
    }

    /// Returns the color for a seat index, if it is in range.
    pub fn from_index(index: usize) -> Option<Color> {
        ALL_COLORS.get(index).copied()
    }
}
