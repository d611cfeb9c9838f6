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

//! Squares, ranks, and files: the coordinates of a board.

use super::{Bitboard, Direction, Error};

use std::{
    cmp::max,
    fmt::{Display, Formatter},
    ops::{Add, Sub},
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A square: one of 64 spots on a board that a `Piece` can occupy.
///
/// Internally, `Square`s are represented as a single integer to maintain a
/// small size. From MSB to LSB, each square is composed of:
/// * 2 unused bits
/// * 3 bits for the rank
/// * 3 bits for the file
pub enum Square {
    A1 = 0,
    B1 = 1,
    C1 = 2,
    D1 = 3,
    E1 = 4,
    F1 = 5,
    G1 = 6,
    H1 = 7,
    A2 = 8,
    B2 = 9,
    C2 = 10,
    D2 = 11,
    E2 = 12,
    F2 = 13,
    G2 = 14,
    H2 = 15,
    A3 = 16,
    B3 = 17,
    C3 = 18,
    D3 = 19,
    E3 = 20,
    F3 = 21,
    G3 = 22,
    H3 = 23,
    A4 = 24,
    B4 = 25,
    C4 = 26,
    D4 = 27,
    E4 = 28,
    F4 = 29,
    G4 = 30,
    H4 = 31,
    A5 = 32,
    B5 = 33,
    C5 = 34,
    D5 = 35,
    E5 = 36,
    F5 = 37,
    G5 = 38,
    H5 = 39,
    A6 = 40,
    B6 = 41,
    C6 = 42,
    D6 = 43,
    E6 = 44,
    F6 = 45,
    G6 = 46,
    H6 = 47,
    A7 = 48,
    B7 = 49,
    C7 = 50,
    D7 = 51,
    E7 = 52,
    F7 = 53,
    G7 = 54,
    H7 = 55,
    A8 = 56,
    B8 = 57,
    C8 = 58,
    D8 = 59,
    E8 = 60,
    F8 = 61,
    G8 = 62,
    H8 = 63,
}

impl Square {
    /// Every square, in index order (A1 first, H8 last).
    pub const ALL: [Square; 64] = [
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
        Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
        Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    ];

    #[inline(always)]
    #[must_use]
    /// Create a square from its rank and file.
    pub const fn new(rank: Rank, file: File) -> Square {
        Square::ALL[(rank as usize) << 3 | file as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the square with the given index, or `None` if `index` is not less
    /// than 64.
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the rank of this square.
    pub const fn rank(self) -> Rank {
        Rank::ALL[self as usize >> 3]
    }

    #[inline(always)]
    #[must_use]
    /// Get the file of this square.
    pub const fn file(self) -> File {
        File::ALL[self as usize & 7]
    }

    #[inline(always)]
    #[must_use]
    /// Get the Chebyshev distance to another square.
    pub fn chebyshev_to(self, rhs: Square) -> u8 {
        let rankdiff = (rhs.rank() as u8).abs_diff(self.rank() as u8);
        let filediff = (rhs.file() as u8).abs_diff(self.file() as u8);

        max(rankdiff, filediff)
    }

    #[must_use]
    /// Step from this square in `dir`. Returns `None` if the step leaves the
    /// board, or if it travels more than `max_dist` ranks or files (which
    /// happens exactly when the raw index arithmetic wraps around an edge).
    pub fn checked_step(self, dir: Direction, max_dist: u8) -> Option<Square> {
        let target = i16::from(self as u8) + i16::from(dir.0);
        let target = Square::from_index(u8::try_from(target).ok()?)?;
        (target.chebyshev_to(self) <= max_dist).then_some(target)
    }

    /// Convert an algebraic string (such as `e7`) to a square.
    /// The string must be two characters and the file must be in lowercase.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `s` is not a legal algebraic
    /// square.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::Square;
    ///
    /// assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
    /// assert!(Square::from_algebraic("i9").is_err());
    /// ```
    pub fn from_algebraic(s: &str) -> Result<Square, Error> {
        let mut chars = s.chars();
        let (Some(file_chr), Some(rank_chr), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(Error::Square(format!("square name `{s}` must be 2 characters")));
        };
        let file = File::from_code(file_chr)
            .ok_or_else(|| Error::Square(format!("illegal file `{file_chr}` in square `{s}`")))?;
        let rank = Rank::from_code(rank_chr)
            .ok_or_else(|| Error::Square(format!("illegal rank `{rank_chr}` in square `{s}`")))?;

        Ok(Square::new(rank, file))
    }
}

impl Add<Direction> for Square {
    type Output = Square;
    #[inline(always)]
    #[allow(clippy::cast_sign_loss)]
    /// Offset this square by a direction. The result wraps modulo 64; use
    /// `Square::checked_step` when the step may leave the board.
    fn add(self, rhs: Direction) -> Self::Output {
        Square::ALL[((self as i8).wrapping_add(rhs.0) & 63) as usize]
    }
}

impl Sub<Direction> for Square {
    type Output = Square;
    #[inline(always)]
    #[allow(clippy::cast_sign_loss)]
    fn sub(self, rhs: Direction) -> Self::Output {
        Square::ALL[((self as i8).wrapping_sub(rhs.0) & 63) as usize]
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A row of the board, counted from White's side.
pub enum Rank {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    /// Every rank, from first to eighth.
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    #[inline(always)]
    #[must_use]
    /// Get the set of all eight squares on this rank.
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(0xFF << (8 * self as u8))
    }

    #[must_use]
    /// Parse a rank from its digit, `'1'` through `'8'`.
    pub fn from_code(c: char) -> Option<Rank> {
        let digit = c.to_digit(10)?;
        (1..=8).contains(&digit).then(|| Rank::ALL[digit as usize - 1])
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A column of the board.
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Every file, from A to H.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline(always)]
    #[must_use]
    /// Get the set of all eight squares on this file.
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(0x0101_0101_0101_0101 << self as u8)
    }

    #[must_use]
    /// Parse a file from its lowercase letter, `'a'` through `'h'`.
    pub fn from_code(c: char) -> Option<File> {
        "abcdefgh".find(c).map(|i| File::ALL[i])
    }
}

impl Display for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(b'a' + *self as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_square_and_direction() {
        assert_eq!(Square::A1 + Direction::E, Square::B1);
        assert_eq!(Square::A1 + Direction::NE, Square::B2);
        assert_eq!(Square::E4 - Direction::N, Square::E3);
    }

    #[test]
    fn rank_and_file_round_trip() {
        for sq in Square::ALL {
            assert_eq!(Square::new(sq.rank(), sq.file()), sq);
        }
        assert_eq!(Square::G6.rank(), Rank::Six);
        assert_eq!(Square::G6.file(), File::G);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
        assert_eq!(Square::from_algebraic("f7"), Ok(Square::F7));
        assert_eq!(Square::from_algebraic("h8"), Ok(Square::H8));
        assert!(Square::from_algebraic("e").is_err());
        assert!(Square::from_algebraic("e44").is_err());
        assert!(Square::from_algebraic("E4").is_err());
        assert!(Square::from_algebraic("e0").is_err());
        assert!(Square::from_algebraic("e9").is_err());
    }

    #[test]
    fn display_is_algebraic() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::D7.to_string(), "d7");
    }

    #[test]
    /// Steps that would wrap around the edge of the board are rejected.
    fn checked_step_rejects_wrap() {
        assert_eq!(Square::H4.checked_step(Direction::E, 1), None);
        assert_eq!(Square::A4.checked_step(Direction::W, 1), None);
        assert_eq!(Square::A8.checked_step(Direction::N, 1), None);
        assert_eq!(Square::A1.checked_step(Direction::S, 1), None);
        assert_eq!(Square::G1.checked_step(Direction::ENE, 2), None);
        assert_eq!(Square::E4.checked_step(Direction::NE, 1), Some(Square::F5));
        assert_eq!(Square::B1.checked_step(Direction::NNW, 2), Some(Square::A3));
    }

    #[test]
    fn rank_and_file_bitboards() {
        assert_eq!(Rank::Two.bitboard(), Bitboard::new(0x0000_0000_0000_FF00));
        assert_eq!(Rank::Eight.bitboard(), Bitboard::new(0xFF00_0000_0000_0000));
        assert_eq!(File::A.bitboard(), Bitboard::new(0x0101_0101_0101_0101));
        assert_eq!(File::H.bitboard(), Bitboard::new(0x8080_8080_8080_8080));
    }
}
