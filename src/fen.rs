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

//! Parsing of Forsyth-Edwards Notation into a plain board array.
//!
//! Only the piece placement and the side to move are interpreted. Castling
//! rights, the en passant square and the move clocks may be present but are
//! ignored.

use super::{Color, Error, Piece};

/// The contents of each square, indexed by `Square as usize`.
pub type BoardArray = [Option<(Color, Piece)>; 64];

/// The FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
/// The interpreted fields of a FEN string.
pub struct ParsedFen {
    /// The piece on each square.
    pub board: BoardArray,
    /// The player to move.
    pub side_to_move: Color,
}

/// Parse a FEN string.
///
/// Between 2 and 6 whitespace-separated fields are accepted, so the clocks and
/// castling fields may be left off.
///
/// # Errors
///
/// Returns `Error::Fen` if the placement does not describe exactly 8 ranks of
/// 8 squares, contains an unknown piece letter, or if the field count is
/// wrong. Returns `Error::SideToMove` if the side-to-move field is not `w` or
/// `b`.
///
/// # Examples
///
/// ```
/// use magpie::{fen, Color, Piece, Square};
///
/// let parsed = fen::parse("4k3/8/8/8/8/8/8/4K3 b").unwrap();
/// assert_eq!(parsed.side_to_move, Color::Black);
/// assert_eq!(parsed.board[Square::E1 as usize], Some((Color::White, Piece::King)));
/// ```
pub fn parse(fen: &str) -> Result<ParsedFen, Error> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(2..=6).contains(&fields.len()) {
        return Err(Error::Fen(format!(
            "expected between 2 and 6 fields, got {}",
            fields.len()
        )));
    }

    let board = parse_placement(fields[0])?;

    let mut side_chars = fields[1].chars();
    let side_to_move = match (side_chars.next(), side_chars.next()) {
        (Some(c), None) => Color::try_from(c)?,
        _ => {
            return Err(Error::Fen(format!(
                "side to move `{}` must be a single character",
                fields[1]
            )))
        }
    };

    Ok(ParsedFen {
        board,
        side_to_move,
    })
}

/// Parse the piece placement field, which lists ranks from the eighth down to
/// the first.
fn parse_placement(placement: &str) -> Result<BoardArray, Error> {
    let mut board = [None; 64];
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(Error::Fen(format!("expected 8 ranks, got {}", ranks.len())));
    }

    for (rank_idx, rank_str) in ranks.into_iter().rev().enumerate() {
        let mut file_idx = 0;
        for chr in rank_str.chars() {
            if let Some(run) = chr.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(Error::Fen(format!("illegal empty run `{chr}`")));
                }
                file_idx += run as usize;
            } else {
                let piece = Piece::from_code(chr.to_ascii_uppercase())
                    .ok_or_else(|| Error::Fen(format!("illegal piece code `{chr}`")))?;
                let color = if chr.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file_idx >= 8 {
                    return Err(Error::Fen(format!(
                        "rank {} has more than 8 squares",
                        rank_idx + 1
                    )));
                }
                board[rank_idx * 8 + file_idx] = Some((color, piece));
                file_idx += 1;
            }
        }
        if file_idx != 8 {
            return Err(Error::Fen(format!(
                "rank {} has {file_idx} squares, expected 8",
                rank_idx + 1
            )));
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn start_position() {
        let parsed = parse(START_FEN).unwrap();
        assert_eq!(parsed.side_to_move, Color::White);
        assert_eq!(
            parsed.board[Square::A1 as usize],
            Some((Color::White, Piece::Rook))
        );
        assert_eq!(
            parsed.board[Square::E1 as usize],
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            parsed.board[Square::D8 as usize],
            Some((Color::Black, Piece::Queen))
        );
        assert_eq!(
            parsed.board[Square::H7 as usize],
            Some((Color::Black, Piece::Pawn))
        );
        assert_eq!(parsed.board[Square::E4 as usize], None);
        assert_eq!(parsed.board.iter().filter(|s| s.is_some()).count(), 32);
    }

    #[test]
    fn short_forms_accepted() {
        assert!(parse("8/8/8/8/8/8/8/8 w").is_ok());
        assert!(parse("8/8/8/8/8/8/8/8 b KQkq").is_ok());
        assert!(parse("8/8/8/8/8/8/8/8 b - -").is_ok());
        assert!(parse("8/8/8/8/8/8/8/8 w - - 0").is_ok());
    }

    #[test]
    fn field_count() {
        assert!(matches!(parse(""), Err(Error::Fen(_))));
        assert!(matches!(parse("8/8/8/8/8/8/8/8"), Err(Error::Fen(_))));
        assert!(matches!(
            parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(Error::Fen(_))
        ));
    }

    #[test]
    fn bad_side_to_move() {
        assert_eq!(
            parse("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(Error::SideToMove('x'))
        );
        assert!(matches!(
            parse("8/8/8/8/8/8/8/8 white - - 0 1"),
            Err(Error::Fen(_))
        ));
    }

    #[test]
    fn bad_placement() {
        // seven ranks
        assert!(matches!(parse("8/8/8/8/8/8/8 w"), Err(Error::Fen(_))));
        // nine ranks
        assert!(matches!(parse("8/8/8/8/8/8/8/8/8 w"), Err(Error::Fen(_))));
        // short rank
        assert!(matches!(parse("7/8/8/8/8/8/8/8 w"), Err(Error::Fen(_))));
        // long rank
        assert!(matches!(parse("8p/8/8/8/8/8/8/8 w"), Err(Error::Fen(_))));
        assert!(matches!(parse("44p/8/8/8/8/8/8/8 w"), Err(Error::Fen(_))));
        // unknown piece
        assert!(matches!(parse("8/8/8/3x4/8/8/8/8 w"), Err(Error::Fen(_))));
        // zero-length run
        assert!(matches!(parse("08/8/8/8/8/8/8/8 w"), Err(Error::Fen(_))));
    }

    #[test]
    fn ranks_are_read_top_down() {
        let parsed = parse("7k/8/8/8/8/8/8/K7 w").unwrap();
        assert_eq!(
            parsed.board[Square::H8 as usize],
            Some((Color::Black, Piece::King))
        );
        assert_eq!(
            parsed.board[Square::A1 as usize],
            Some((Color::White, Piece::King))
        );
    }
}
