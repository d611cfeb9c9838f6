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

//! The error type for everything in this crate that can fail on bad input.

use super::Color;

use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
/// An error arising from text or a position that could not be accepted.
pub enum Error {
    /// A FEN string was malformed. The message says what was wrong with it.
    Fen(String),
    /// The side-to-move code of a FEN was neither `w` nor `b`.
    SideToMove(char),
    /// An algebraic square or a UCI move could not be parsed.
    Square(String),
    /// A side did not have exactly one king.
    KingCount {
        /// The side with the wrong number of kings.
        color: Color,
        /// How many kings that side actually had.
        count: u8,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Fen(msg) => write!(f, "invalid FEN: {msg}"),
            Error::SideToMove(c) => write!(f, "invalid side to move `{c}`, expected `w` or `b`"),
            Error::Square(msg) => write!(f, "{msg}"),
            Error::KingCount { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly 1")
            }
        }
    }
}

impl std::error::Error for Error {}
