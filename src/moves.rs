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

//! Moves, which are a pair of origin and destination squares.

use super::{Error, Square};

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A move: the square a piece leaves and the square it lands on.
///
/// Moves carry no flags. Promotions, castling and en passant are not
/// represented. Internally a move is packed into a `u16`: the low 6 bits
/// hold the origin and the next 6 bits hold the destination.
pub struct Move(u16);

impl Move {
    #[inline(always)]
    #[must_use]
    /// Make a new `Move` from one square to another.
    pub const fn new(from_square: Square, to_square: Square) -> Move {
        Move(from_square as u16 | (to_square as u16) << 6)
    }

    #[inline(always)]
    #[must_use]
    /// Get the target square of this move.
    pub const fn to_square(self) -> Square {
        Square::ALL[((self.0 >> 6) & 63) as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the square that a piece moves from to execute this move.
    pub const fn from_square(self) -> Square {
        Square::ALL[(self.0 & 63) as usize]
    }

    /// Convert a move from its UCI representation, such as `e2e4`.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `s` is not exactly two algebraic
    /// squares.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{Move, Square};
    ///
    /// let m = Move::from_uci("g1f3").unwrap();
    /// assert_eq!(m, Move::new(Square::G1, Square::F3));
    /// assert!(Move::from_uci("e7e8q").is_err());
    /// ```
    pub fn from_uci(s: &str) -> Result<Move, Error> {
        let (Some(from), Some(to), 4) = (s.get(0..2), s.get(2..4), s.len()) else {
            return Err(Error::Square(format!("move `{s}` is not two squares")));
        };

        Ok(Move::new(
            Square::from_algebraic(from)?,
            Square::from_algebraic(to)?,
        ))
    }

    #[must_use]
    /// Construct a UCI string version of this move.
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from_square(), self.to_square())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from_square(), self.to_square())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_survive_packing() {
        for from in Square::ALL {
            let m = Move::new(from, Square::H8);
            assert_eq!(m.from_square(), from);
            assert_eq!(m.to_square(), Square::H8);
        }
        let m = Move::new(Square::H8, Square::A1);
        assert_eq!(m.from_square(), Square::H8);
        assert_eq!(m.to_square(), Square::A1);
    }

    #[test]
    fn uci_text() {
        let m = Move::new(Square::E2, Square::E4);
        assert_eq!(m.to_uci(), "e2e4");
        assert_eq!(m.to_string(), "e2e4");
        assert_eq!(Move::from_uci("e2e4"), Ok(m));
    }

    #[test]
    fn bad_uci_text() {
        assert!(Move::from_uci("").is_err());
        assert!(Move::from_uci("e2").is_err());
        assert!(Move::from_uci("e2e9").is_err());
        assert!(Move::from_uci("z2e4").is_err());
        assert!(Move::from_uci("e2e4e6").is_err());
    }
}
