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

//! Print the pseudo-legal moves of a position.
//!
//! Takes one optional argument: a FEN string. The starting position is used
//! if none is given.

use std::process::ExitCode;

use magpie::Position;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let pos = if args.is_empty() {
        Position::new()
    } else {
        // FEN fields may arrive as separate arguments if the string was not
        // quoted
        match Position::from_fen(&args.join(" ")) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("could not load position: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    print!("{pos}");
    println!("side to move: {}", pos.side_to_move());
    println!("material difference: {}", pos.piece_difference());

    let moves = pos.moves();
    let listing: Vec<String> = moves.iter().map(ToString::to_string).collect();
    println!("moves: {}", listing.join(" "));
    println!("{} moves", moves.len());

    ExitCode::SUCCESS
}
