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

//! Attack lookups for every piece type.
//!
//! Knight and king attacks come from small step tables, built once by
//! shifting each origin square along the piece's steps. Bishop, rook, and
//! queen attacks come from the magic tables in [`crate::magic`].

use once_cell::sync::Lazy;

use super::{magic::MAGIC, Bitboard, Color, Direction, Square};

/// The knight's leaps, each paired with the squares it may leave from
/// without wrapping around the side of the board.
const KNIGHT_LEAPS: [(Direction, Bitboard); 8] = [
    (Direction::NNE, Bitboard::NOT_H_FILE),
    (Direction::ENE, Bitboard::NOT_GH_FILE),
    (Direction::ESE, Bitboard::NOT_GH_FILE),
    (Direction::SSE, Bitboard::NOT_H_FILE),
    (Direction::SSW, Bitboard::NOT_A_FILE),
    (Direction::WSW, Bitboard::NOT_AB_FILE),
    (Direction::WNW, Bitboard::NOT_AB_FILE),
    (Direction::NNW, Bitboard::NOT_A_FILE),
];

/// The king's steps, each paired with the squares it may leave from.
const KING_STEPS: [(Direction, Bitboard); 8] = [
    (Direction::N, Bitboard::ALL),
    (Direction::NE, Bitboard::NOT_H_FILE),
    (Direction::E, Bitboard::NOT_H_FILE),
    (Direction::SE, Bitboard::NOT_H_FILE),
    (Direction::S, Bitboard::ALL),
    (Direction::SW, Bitboard::NOT_A_FILE),
    (Direction::W, Bitboard::NOT_A_FILE),
    (Direction::NW, Bitboard::NOT_A_FILE),
];

/// A bitboard of all the squares a knight can move to if its position is
/// the index of the list.
static KNIGHT_MOVES: Lazy<[Bitboard; 64]> = Lazy::new(|| create_step_attacks(&KNIGHT_LEAPS));

/// A bitboard of all the squares a king can move to if his position is the
/// index in the list.
static KING_MOVES: Lazy<[Bitboard; 64]> = Lazy::new(|| create_step_attacks(&KING_STEPS));

/// Build a step table. Shifts that run off the top or bottom of the board
/// simply drop out, and the source masks stop shifts that would wrap across
/// the A and H files.
fn create_step_attacks(steps: &[(Direction, Bitboard)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for sq in Square::ALL {
        let origin = Bitboard::from(sq);
        for &(dir, sources) in steps {
            attacks[sq as usize] |= (origin & sources).shift(dir);
        }
    }

    attacks
}

#[inline(always)]
#[must_use]
/// Get the squares a knight on `sq` attacks.
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_MOVES[sq as usize]
}

#[inline(always)]
#[must_use]
/// Get the squares a king on `sq` attacks.
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_MOVES[sq as usize]
}

#[inline(always)]
#[must_use]
/// Get the squares a bishop on `sq` attacks when the squares in `occupancy`
/// are occupied. The first occupied square along each ray is included.
pub fn bishop_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    MAGIC.bishop_attacks(occupancy, sq)
}

#[inline(always)]
#[must_use]
/// Get the squares a rook on `sq` attacks when the squares in `occupancy`
/// are occupied. The first occupied square along each ray is included.
pub fn rook_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    MAGIC.rook_attacks(occupancy, sq)
}

#[inline(always)]
#[must_use]
/// Get the squares a queen on `sq` attacks: the union of the bishop and rook
/// attacks from the same square.
pub fn queen_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    bishop_attacks(occupancy, sq) | rook_attacks(occupancy, sq)
}

#[inline(always)]
#[must_use]
/// Get every square attacked diagonally by the pawns in `pawns` belonging to
/// `color`, whether or not anything stands there.
///
/// # Examples
///
/// ```
/// use magpie::{movegen::pawn_attacks, Bitboard, Color, Square};
///
/// let pawns = Bitboard::from(Square::A2) | Bitboard::from(Square::E4);
/// let expected = Bitboard::from(Square::B3)
///     | Bitboard::from(Square::D5)
///     | Bitboard::from(Square::F5);
/// assert_eq!(pawn_attacks(pawns, Color::White), expected);
/// ```
pub fn pawn_attacks(pawns: Bitboard, color: Color) -> Bitboard {
    let consts = color.constants();
    (pawns & !consts.left_edge).shift(consts.left_capture)
        | (pawns & !consts.right_edge).shift(consts.right_capture)
}
