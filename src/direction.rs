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

//! Directions, which are signed offsets between square indices.

use std::ops::{Add, Mul, Neg};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A difference between two squares, measured along the square index axis.
/// Moving one rank up is `+8` and moving one file right is `+1`.
///
/// Applying a direction to a whole `Bitboard` is a plain shift (see
/// `Bitboard::shift`), which knows nothing about the edges of the board.
pub struct Direction(pub i8);

impl Direction {
    /* Cardinal directions */

    /// A `Direction` corresponding to a move "north" from White's point of
    /// view, in the direction a white pawn would travel.
    pub const N: Direction = Direction(8);

    /// A `Direction` corresponding to a move "south" from White's point of
    /// view.
    pub const S: Direction = Direction(-8);

    /// A `Direction` corresponding to a move "east" from White's point of view.
    pub const E: Direction = Direction(1);

    /// A `Direction` corresponding to a move "west" from White's point of view.
    pub const W: Direction = Direction(-1);

    /* Composite directions */

    pub const NE: Direction = Direction(Direction::N.0 + Direction::E.0);
    pub const NW: Direction = Direction(Direction::N.0 + Direction::W.0);
    pub const SE: Direction = Direction(Direction::S.0 + Direction::E.0);
    pub const SW: Direction = Direction(Direction::S.0 + Direction::W.0);

    /* Knight leaps */

    pub const NNE: Direction = Direction(Direction::N.0 + Direction::NE.0);
    pub const ENE: Direction = Direction(Direction::E.0 + Direction::NE.0);
    pub const ESE: Direction = Direction(Direction::E.0 + Direction::SE.0);
    pub const SSE: Direction = Direction(Direction::S.0 + Direction::SE.0);
    pub const SSW: Direction = Direction(Direction::S.0 + Direction::SW.0);
    pub const WSW: Direction = Direction(Direction::W.0 + Direction::SW.0);
    pub const WNW: Direction = Direction(Direction::W.0 + Direction::NW.0);
    pub const NNW: Direction = Direction(Direction::N.0 + Direction::NW.0);

    /// The directions that a rook can move, along only one step.
    pub const ROOK_DIRECTIONS: [Direction; 4] =
        [Direction::N, Direction::S, Direction::E, Direction::W];

    /// The directions that a bishop can move, along only one step.
    pub const BISHOP_DIRECTIONS: [Direction; 4] =
        [Direction::NW, Direction::NE, Direction::SW, Direction::SE];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Direction; 8] = [
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
        Direction::NNW,
    ];

    /// The steps that a king can make.
    pub const KING_STEPS: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];
}

impl Neg for Direction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Direction(-self.0)
    }
}

impl Mul<Direction> for i8 {
    type Output = Direction;
    fn mul(self, rhs: Direction) -> Direction {
        Direction(self * rhs.0)
    }
}

impl Add<Direction> for Direction {
    type Output = Self;
    fn add(self, rhs: Direction) -> Self::Output {
        Direction(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions() {
        assert_eq!(-Direction::E, Direction::W);
        assert_eq!(-Direction::N, Direction::S);
        assert_eq!(-Direction::NE, Direction::SW);
        assert_eq!(-Direction::NNE, Direction::SSW);
    }

    #[test]
    fn knight_leap_values() {
        assert_eq!(Direction::NNE, Direction(17));
        assert_eq!(Direction::ENE, Direction(10));
        assert_eq!(Direction::WSW, Direction(-10));
        assert_eq!(Direction::SSW, Direction(-17));
    }

    #[test]
    fn scale_direction() {
        assert_eq!(2 * Direction::N, Direction(16));
        assert_eq!(Direction::N + Direction::N + Direction::E, Direction::NNE);
    }
}
