/*
  Magpie, a bitboard move generator.
  Copyright (C) 2022 The Magpie Authors.

  Magpie is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Magpie is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Representation of player colors, and the constants that differ between
//! the two sides.

use super::{Bitboard, Direction, Error, File, Rank};
use std::{
    fmt::{Display, Formatter},
    ops::Not,
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// An enum representing the possible colors that a piece or player can be.
pub enum Color {
    /// The white player, a.k.a. the first player to move in a game.
    White = 0,
    /// The black player, a.k.a. the second player to move in a game.
    Black = 1,
}

/// Everything about a side that move generation needs to know, so that the
/// generator itself can be written once for both colors.
///
/// "Left" and "right" are named from White's point of view for White and
/// from Black's point of view for Black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideConstants {
    /// The starting squares of each piece type, indexed by `Piece as usize`.
    pub start: [Bitboard; 6],
    /// The direction this side's pawns push.
    pub push: Direction,
    /// The direction of a capture to the pawn's left.
    pub left_capture: Direction,
    /// The direction of a capture to the pawn's right.
    pub right_capture: Direction,
    /// The file from which a left capture would wrap around the board.
    pub left_edge: Bitboard,
    /// The file from which a right capture would wrap around the board.
    pub right_edge: Bitboard,
    /// The rank this side's pawns start on.
    pub start_rank: Bitboard,
    /// The rank on which this side's pawns promote.
    pub promotion_rank: Bitboard,
}

static WHITE_CONSTANTS: SideConstants = SideConstants {
    start: [
        Rank::Two.bitboard(),
        Bitboard::new(0x0000_0000_0000_0042),
        Bitboard::new(0x0000_0000_0000_0024),
        Bitboard::new(0x0000_0000_0000_0081),
        Bitboard::new(0x0000_0000_0000_0008),
        Bitboard::new(0x0000_0000_0000_0010),
    ],
    push: Direction::N,
    left_capture: Direction::NW,
    right_capture: Direction::NE,
    left_edge: File::A.bitboard(),
    right_edge: File::H.bitboard(),
    start_rank: Rank::Two.bitboard(),
    promotion_rank: Rank::Eight.bitboard(),
};

static BLACK_CONSTANTS: SideConstants = SideConstants {
    start: [
        Rank::Seven.bitboard(),
        Bitboard::new(0x4200_0000_0000_0000),
        Bitboard::new(0x2400_0000_0000_0000),
        Bitboard::new(0x8100_0000_0000_0000),
        Bitboard::new(0x0800_0000_0000_0000),
        Bitboard::new(0x1000_0000_0000_0000),
    ],
    push: Direction::S,
    left_capture: Direction::SE,
    right_capture: Direction::SW,
    left_edge: File::H.bitboard(),
    right_edge: File::A.bitboard(),
    start_rank: Rank::Seven.bitboard(),
    promotion_rank: Rank::One.bitboard(),
};

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline(always)]
    #[must_use]
    /// Get the per-side constants of this color.
    pub fn constants(self) -> &'static SideConstants {
        match self {
            Color::White => &WHITE_CONSTANTS,
            Color::Black => &BLACK_CONSTANTS,
        }
    }

    #[must_use]
    /// Get the FEN code for this color: `'w'` or `'b'`.
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    /// Parse a side-to-move code. Only `'w'` and `'b'` are accepted.
    fn try_from(c: char) -> Result<Color, Error> {
        match c {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err(Error::SideToMove(c)),
        }
    }
}

impl Not for Color {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that the opposite color of `Color::White` is `Color::Black`, and
    /// vice versa.
    fn opposite_color() {
        assert_eq!(Color::White, !Color::Black);
        assert_eq!(Color::Black, !Color::White);
    }

    #[test]
    fn pawn_directions() {
        assert_eq!(Color::White.constants().push, Direction::N);
        assert_eq!(Color::Black.constants().push, Direction::S);
    }

    #[test]
    /// Test that the start and promotion ranks are on opposite ends.
    fn pawn_ranks() {
        assert_eq!(
            Color::White.constants().start_rank,
            Bitboard::new(0x0000_0000_0000_FF00)
        );
        assert_eq!(
            Color::Black.constants().start_rank,
            Bitboard::new(0x00FF_0000_0000_0000)
        );
        assert_eq!(
            Color::White.constants().promotion_rank,
            Color::Black.constants().start_rank.shift(Direction::N)
        );
        assert_eq!(
            Color::Black.constants().promotion_rank,
            Color::White.constants().start_rank.shift(Direction::S)
        );
    }

    #[test]
    /// The two sides' starting layouts mirror each other vertically.
    fn starting_layouts_mirror() {
        let white = &Color::White.constants().start;
        let black = &Color::Black.constants().start;
        for (w, b) in white.iter().zip(black) {
            assert_eq!(w.as_u64().swap_bytes(), b.as_u64());
        }
    }

    #[test]
    /// An unmasked capture from an edge file wraps onto the opposite edge,
    /// which is why the edge files are excluded before capturing.
    fn capture_edges_wrap() {
        for color in Color::ALL {
            let consts = color.constants();
            let left = consts.left_edge.shift(consts.left_capture);
            let right = consts.right_edge.shift(consts.right_capture);
            assert!(!left.is_empty());
            assert!(!right.is_empty());
            assert_eq!(left & !consts.right_edge, Bitboard::EMPTY);
            assert_eq!(right & !consts.left_edge, Bitboard::EMPTY);
        }
    }

    #[test]
    fn side_codes() {
        assert_eq!(Color::try_from('w'), Ok(Color::White));
        assert_eq!(Color::try_from('b'), Ok(Color::Black));
        assert_eq!(Color::try_from('x'), Err(Error::SideToMove('x')));
        assert_eq!(Color::try_from('W'), Err(Error::SideToMove('W')));
        assert_eq!(Color::Black.code(), 'b');
    }
}
