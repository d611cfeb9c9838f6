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

//! A binary program used to search for magic numbers.
//!
//! # Arguments
//!
//! Each argument is given to the binary in order, as follows:
//! 1. "rook" or "bishop", determining whether the searcher should find magic
//!    numbers for a rook or bishop.
//! 1. (optional) The square for which we should find magic numbers, or "all"
//!    for every square. Defaults to "all".
//! 1. (optional) The number of candidates to try per square.
//! 1. (optional) The random seed to use.
//!
//! Found magics are printed as lines of a Rust array, ready to be pasted over
//! the saved tables in `magic.rs`.

use std::{process::ExitCode, sync::atomic::AtomicBool, thread::scope};

use magpie::{
    magic::{find_magic, Slider},
    Square,
};

/// The number of threads searching for each square's magic.
const NUM_THREADS: u64 = 8;

/// The default number of candidates to try for each square.
const DEFAULT_TRIES: u64 = 100_000_000;

/// The default random seed.
const DEFAULT_SEED: u64 = 12345;

struct Args {
    slider: Slider,
    squares: Vec<Square>,
    tries: u64,
    seed: u64,
}

fn main() -> ExitCode {
    let Ok(args) = parse_args() else {
        eprintln!("usage: wizard rook|bishop [square|all] [tries] [seed]");
        return ExitCode::FAILURE;
    };

    println!(
        "searching for {} magics at {} bits on {} square(s)",
        args.slider,
        args.slider.table_bits(),
        args.squares.len()
    );

    let mut all_found = true;
    for &sq in &args.squares {
        match search(args.slider, sq, args.tries, args.seed) {
            Some(magic) => println!("    {magic:#018x}, // {sq}"),
            None => {
                println!("    // no magic found for {sq}");
                all_found = false;
            }
        }
    }

    if all_found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Split `tries` candidates for one square across several threads, each with
/// its own seed. All threads stop as soon as one of them finds a magic.
fn search(slider: Slider, sq: Square, tries: u64, seed: u64) -> Option<u64> {
    let tries_per_thread = tries.div_ceil(NUM_THREADS);
    let done = AtomicBool::new(false);
    let done = &done;
    scope(|s| {
        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|thread_id| {
                s.spawn(move || {
                    let rng = fastrand::Rng::with_seed(
                        seed ^ (u64::from(sq as u8) << 8) ^ (thread_id << 16),
                    );
                    find_magic(slider, sq, &rng, tries_per_thread, done)
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|h| h.join().ok().flatten())
            .next()
    })
}

/// Attempt to parse the command-line arguments.
fn parse_args() -> Result<Args, ()> {
    let args = std::env::args().collect::<Vec<String>>();
    if !(2..=5).contains(&args.len()) {
        return Err(());
    }

    let slider = match args[1].as_str() {
        "rook" => Slider::Rook,
        "bishop" => Slider::Bishop,
        _ => return Err(()),
    };
    let squares = match args.get(2).map(String::as_str) {
        None | Some("all") => Square::ALL.to_vec(),
        Some(s) => vec![Square::from_algebraic(s).map_err(|_| ())?],
    };
    let tries = match args.get(3) {
        Some(s) => s.parse().map_err(|_| ())?,
        None => DEFAULT_TRIES,
    };
    let seed = match args.get(4) {
        Some(s) => s.parse().map_err(|_| ())?,
        None => DEFAULT_SEED,
    };

    Ok(Args {
        slider,
        squares,
        tries,
        seed,
    })
}
