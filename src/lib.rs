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
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Pseudo-legal move generation for chess, built on bitboards and magic
//! lookup tables for sliding pieces.
//!
//! A [`Position`] owns one [`PieceSet`] per side. Asking it for its
//! [`moves`](Position::moves) routes generation to the side to move, which
//! consults the shared, lazily built attack tables in [`movegen`] and
//! [`magic`].

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use bitboard::{Bitboard, Subsets};

mod color;
pub use color::{Color, SideConstants};

mod direction;
pub use direction::Direction;

mod error;
pub use error::Error;

pub mod fen;

pub mod magic;

pub mod movegen;

mod moves;
pub use moves::Move;

mod piece;
pub use piece::Piece;

mod pieces;
pub use pieces::PieceSet;

mod position;
pub use position::Position;

mod square;
pub use square::{File, Rank, Square};
