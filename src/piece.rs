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

//! Piece types.

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The type of a piece, without its color. The order of the variants is the
/// order in which moves are generated.
pub enum Piece {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Total number of piece types.
    pub const NUM_TYPES: usize = 6;

    /// Array containing all piece types, in generation order.
    pub const ALL: [Piece; Piece::NUM_TYPES] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[must_use]
    /// Get the FEN code of this piece as an uppercase character.
    pub const fn code(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    #[must_use]
    /// Given a FEN character, convert it to a piece type. Must be uppercase.
    pub const fn from_code(c: char) -> Option<Piece> {
        match c {
            'P' => Some(Piece::Pawn),
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }

    #[must_use]
    /// The material value of this piece, in pawns. Kings are worth nothing,
    /// since both sides always have exactly one.
    pub const fn value(self) -> i16 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight | Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for pt in Piece::ALL {
            assert_eq!(Piece::from_code(pt.code()), Some(pt));
        }
        assert_eq!(Piece::from_code('p'), None);
        assert_eq!(Piece::from_code('X'), None);
    }

    #[test]
    fn generation_order() {
        for (i, pt) in Piece::ALL.into_iter().enumerate() {
            assert_eq!(pt as usize, i);
        }
    }

    #[test]
    fn values() {
        let total: i16 = [8, 2, 2, 2, 1, 1]
            .into_iter()
            .zip(Piece::ALL)
            .map(|(n, pt)| n * pt.value())
            .sum();
        assert_eq!(total, 39);
    }
}
