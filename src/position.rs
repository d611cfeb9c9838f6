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

//! Positions: both sides' pieces and the player to move.

use super::{
    fen::{self, BoardArray},
    Bitboard, Color, Error, Move, Piece, PieceSet, Rank, Square,
};

use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A position on the board: where every piece stands, and whose turn it is.
///
/// Each side always has exactly one king; constructors reject anything else.
pub struct Position {
    /// The pieces of each side, indexed by `Color as usize`.
    sides: [PieceSet; 2],
    /// The player to move.
    side_to_move: Color,
}

impl Position {
    #[must_use]
    /// Create the standard starting position, with White to move.
    pub fn new() -> Position {
        Position {
            sides: [
                PieceSet::starting(Color::White),
                PieceSet::starting(Color::Black),
            ],
            side_to_move: Color::White,
        }
    }

    /// Create a position from a FEN string.
    ///
    /// # Errors
    ///
    /// Returns an error if the FEN could not be parsed, or if either side does
    /// not have exactly one king.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::Position;
    ///
    /// let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
    /// assert_eq!(pos.moves().len(), 20);
    /// # Ok::<(), magpie::Error>(())
    /// ```
    pub fn from_fen(fen: &str) -> Result<Position, Error> {
        let parsed = fen::parse(fen)?;
        Position::from_board_array(&parsed.board, parsed.side_to_move)
    }

    /// Create a position from a board array and the player to move.
    ///
    /// # Errors
    ///
    /// Returns `Error::KingCount` if either side does not have exactly one
    /// king.
    pub fn from_board_array(board: &BoardArray, side_to_move: Color) -> Result<Position, Error> {
        let sides = [
            PieceSet::from_board_array(board, Color::White),
            PieceSet::from_board_array(board, Color::Black),
        ];
        for set in &sides {
            let count = set[Piece::King].len();
            if count != 1 {
                return Err(Error::KingCount {
                    color: set.color(),
                    count,
                });
            }
        }

        Ok(Position {
            sides,
            side_to_move,
        })
    }

    #[inline(always)]
    #[must_use]
    /// Get the player to move.
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    #[must_use]
    /// Get the pieces of one side.
    pub const fn pieces(&self, color: Color) -> &PieceSet {
        &self.sides[color as usize]
    }

    #[must_use]
    /// Get every occupied square.
    pub fn occupancy(&self) -> Bitboard {
        self.sides[0].occupancy() | self.sides[1].occupancy()
    }

    #[must_use]
    /// Get every square attacked by `color`. The opposing king does not block
    /// attacks, so squares behind it along a slider's line are attacked too
    /// and the king cannot step away along that line.
    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        let blockers = self.occupancy() & !self.pieces(!color)[Piece::King];
        self.pieces(color).attacks(blockers)
    }

    #[must_use]
    /// Generate every pseudo-legal move for the player to move. See
    /// [`PieceSet::moves`] for the order of the moves.
    pub fn moves(&self) -> Vec<Move> {
        let mover = self.side_to_move;
        self.pieces(mover).moves(
            self.pieces(!mover).occupancy(),
            self.attacked_squares(!mover),
        )
    }

    #[must_use]
    /// Get White's material minus Black's material, in pawns.
    pub fn piece_difference(&self) -> i16 {
        self.pieces(Color::White).material() - self.pieces(Color::Black).material()
    }

    #[must_use]
    /// Get the color and type of the piece on `sq`, if there is one.
    pub fn occupant(&self, sq: Square) -> Option<(Color, Piece)> {
        Color::ALL
            .into_iter()
            .find_map(|color| self.pieces(color).piece_at(sq).map(|pt| (color, pt)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Display for Position {
    /// Display this position in a console-ready format. Expresses as a series
    /// of 8 lines, where the topmost line is the 8th rank and the bottommost
    /// is the 1st. White pieces are represented with capital letters, while
    /// black pieces have lowercase.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &rank in Rank::ALL.iter().rev() {
            for sq in rank.bitboard() {
                match self.occupant(sq) {
                    Some((Color::White, pt)) => write!(f, "{}", pt.code())?,
                    Some((Color::Black, pt)) => write!(f, "{}", pt.code().to_ascii_lowercase())?,
                    None => write!(f, ".")?,
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
