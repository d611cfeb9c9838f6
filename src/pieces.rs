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

//! The pieces belonging to one side, and pseudo-legal move generation for
//! them.

use super::{
    fen::BoardArray,
    movegen::{
        bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
    },
    Bitboard, Color, Direction, Move, Piece, Square,
};

use std::ops::Index;

#[derive(Clone, Debug, PartialEq, Eq)]
/// The placement of every piece of one color, as one bitboard per piece
/// type. No two of the bitboards share a square.
pub struct PieceSet {
    /// The side these pieces belong to.
    color: Color,
    /// The squares of each piece type, indexed by `Piece as usize`.
    pieces: [Bitboard; Piece::NUM_TYPES],
}

impl PieceSet {
    #[must_use]
    /// Get the pieces of `color` in the standard starting position.
    pub fn starting(color: Color) -> PieceSet {
        PieceSet {
            color,
            pieces: color.constants().start,
        }
    }

    #[must_use]
    /// Collect the pieces of `color` from a board array. Pieces of the other
    /// color are ignored.
    pub fn from_board_array(board: &BoardArray, color: Color) -> PieceSet {
        let mut pieces = [Bitboard::EMPTY; Piece::NUM_TYPES];
        for sq in Square::ALL {
            if let Some((c, pt)) = board[sq as usize] {
                if c == color {
                    pieces[pt as usize].insert(sq);
                }
            }
        }

        PieceSet { color, pieces }
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of these pieces.
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    /// Get the total material value of these pieces. Kings count for nothing.
    pub fn material(&self) -> i16 {
        Piece::ALL
            .into_iter()
            .map(|pt| i16::from(self[pt].len()) * pt.value())
            .sum()
    }

    #[must_use]
    /// Get every square occupied by one of these pieces.
    pub fn occupancy(&self) -> Bitboard {
        self.pieces
            .iter()
            .fold(Bitboard::EMPTY, |occupancy, &bb| occupancy | bb)
    }

    #[must_use]
    /// Get the type of the piece on `sq`, if one of these pieces is there.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&pt| self[pt].contains(sq))
    }

    #[must_use]
    /// Get every square which these pieces attack, treating the squares in
    /// `occupancy` as blockers for sliding pieces. Pawns attack both of their
    /// diagonals whether or not anything stands there.
    pub fn attacks(&self, occupancy: Bitboard) -> Bitboard {
        let mut attacked = pawn_attacks(self[Piece::Pawn], self.color);
        for sq in self[Piece::Knight] {
            attacked |= knight_attacks(sq);
        }
        for sq in self[Piece::Bishop] {
            attacked |= bishop_attacks(occupancy, sq);
        }
        for sq in self[Piece::Rook] {
            attacked |= rook_attacks(occupancy, sq);
        }
        for sq in self[Piece::Queen] {
            attacked |= queen_attacks(occupancy, sq);
        }
        for sq in self[Piece::King] {
            attacked |= king_attacks(sq);
        }

        attacked
    }

    #[must_use]
    /// Generate every pseudo-legal move for these pieces.
    ///
    /// `opponent` is the set of squares occupied by the other side, and
    /// `opponent_attacks` is every square the other side attacks. The king
    /// never moves onto an attacked square; no other check of legality is
    /// made.
    ///
    /// Moves are generated in a fixed order: pawn single pushes, pawn double
    /// pushes, left pawn captures, right pawn captures, then knight, bishop,
    /// rook, queen, and king moves. Within each group, moves are ordered by
    /// origin square and then by destination square.
    pub fn moves(&self, opponent: Bitboard, opponent_attacks: Bitboard) -> Vec<Move> {
        let consts = self.color.constants();
        let own = self.occupancy();
        let free = !(own | opponent);
        let mut moves = Vec::new();

        // pawns
        let pawns = self[Piece::Pawn];
        let single_pushes = pawns.shift(consts.push) & free;
        let double_pushes =
            (single_pushes & consts.start_rank.shift(consts.push)).shift(consts.push) & free;
        let left_captures = (pawns & !consts.left_edge).shift(consts.left_capture) & opponent;
        let right_captures = (pawns & !consts.right_edge).shift(consts.right_capture) & opponent;
        append_pawn_moves(&mut moves, single_pushes, consts.push);
        append_pawn_moves(&mut moves, double_pushes, 2 * consts.push);
        append_pawn_moves(&mut moves, left_captures, consts.left_capture);
        append_pawn_moves(&mut moves, right_captures, consts.right_capture);

        // everything else
        let occupancy = own | opponent;
        append_piece_moves(&mut moves, self[Piece::Knight], !own, knight_attacks);
        append_piece_moves(&mut moves, self[Piece::Bishop], !own, |sq| {
            bishop_attacks(occupancy, sq)
        });
        append_piece_moves(&mut moves, self[Piece::Rook], !own, |sq| {
            rook_attacks(occupancy, sq)
        });
        append_piece_moves(&mut moves, self[Piece::Queen], !own, |sq| {
            queen_attacks(occupancy, sq)
        });
        append_piece_moves(
            &mut moves,
            self[Piece::King],
            !own & !opponent_attacks,
            king_attacks,
        );

        moves
    }
}

/// Add a pawn move for every destination in `targets`, where each pawn
/// traveled along `dir` to get there.
fn append_pawn_moves(moves: &mut Vec<Move>, targets: Bitboard, dir: Direction) {
    moves.extend(targets.map(|to| Move::new(to - dir, to)));
}

/// Add a move from each square in `origins` to each square it attacks which
/// is also in `allowed`.
fn append_piece_moves(
    moves: &mut Vec<Move>,
    origins: Bitboard,
    allowed: Bitboard,
    attacks: impl Fn(Square) -> Bitboard,
) {
    for from in origins {
        moves.extend((attacks(from) & allowed).map(|to| Move::new(from, to)));
    }
}

impl Index<Piece> for PieceSet {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by the given piece type.
    fn index(&self, index: Piece) -> &Self::Output {
        &self.pieces[index as usize]
    }
}
