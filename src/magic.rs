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

//! Magic bitboards, used for generating bishop, rook, and queen moves.
//!
//! Each slider gets one table per square of a fixed width: `2^12` entries for
//! rooks and `2^9` for bishops. An occupancy is hashed into its table by
//! masking it down to the squares which could block the slider, multiplying
//! by a per-square magic number, and keeping the top bits.

use super::{Bitboard, Direction, Square};

use nohash_hasher::IntMap;
use once_cell::sync::Lazy;

use std::{
    fmt::{Display, Formatter},
    sync::atomic::{AtomicBool, Ordering},
};

/// A master copy of the main magic table. Used for generating bishop,
/// rook, and queen moves.
pub static MAGIC: Lazy<AttacksTable> = Lazy::new(AttacksTable::load);

/// The main diagonal, from A1 to H8.
const MAIN_DIAGONAL: Bitboard = Bitboard::new(0x8040_2010_0804_0201);

/// The main anti-diagonal, from H1 to A8.
const ANTI_DIAGONAL: Bitboard = Bitboard::new(0x0102_0408_1020_4080);

/// A saved list of magics for rooks created using `wizard`. Every magic maps
/// the relevant occupancies of its square to distinct indices.
const SAVED_ROOK_MAGICS: [u64; 64] = [
    0x4080_0020_4000_1480, // a1
    0x0040_0010_0140_2000, // b1
    0x0300_2000_1810_4100, // c1
    0x2100_0409_0110_0120, // d1
    0x8a00_0600_0408_2070, // e1
    0x0080_0144_0002_0080, // f1
    0x1100_2500_208a_0004, // g1
    0x0900_0042_2201_8100, // h1
    0x0208_8002_28c0_0081, // a2
    0x2280_4010_0340_2000, // b2
    0x0008_8010_0020_0184, // c2
    0x0001_0020_1000_0900, // d2
    0x0182_0006_0010_6008, // e2
    0x2058_8004_0080_0200, // f2
    0x0004_8002_0080_0900, // g2
    0x052d_0012_0040_a100, // h2
    0x0540_0880_0080_24c1, // a3
    0x2000_8480_4002_2000, // b3
    0x0400_4100_1100_6000, // c3
    0x0040_a100_3001_0108, // d3
    0x1204_8080_0800_0402, // e3
    0x0802_8080_0400_2201, // f3
    0x1002_8080_5200_0500, // g3
    0x0004_0a00_2112_4184, // h3
    0x0640_0128_8008_8040, // a4
    0x8410_4000_8020_008a, // b4
    0x0400_2008_8010_0080, // c4
    0x2001_0121_0009_1004, // d4
    0x1200_0d01_0008_0010, // e4
    0x6004_0004_0120_1008, // f4
    0x7500_aa04_0008_4110, // g4
    0x0100_0052_0004_0981, // h4
    0x0040_8040_0280_0020, // a5
    0x0470_0020_0640_0240, // b5
    0x0001_2000_8080_1000, // c5
    0x0000_0812_0200_2040, // d5
    0x00c0_8044_0080_0800, // e5
    0x9000_800a_0080_0400, // f5
    0x0001_0004_0100_0600, // g5
    0x0042_1088_ca00_2401, // h5
    0x0000_c000_228d_8000, // a6
    0x6410_0420_1440_4001, // b6
    0x1002_0040_8226_0014, // c6
    0x206a_0088_11c2_0021, // d6
    0x0002_0018_1022_0024, // e6
    0x2001_0200_0400_8080, // f6
    0x1000_0801_100c_001a, // g6
    0x0048_0082_5402_0011, // h6
    0x0680_1020_4088_0080, // a7
    0x0010_2040_4000_1180, // b7
    0x0070_20c0_4400_1010, // c7
    0x4021_0024_8406_2002, // d7
    0x0010_0520_0874_0200, // e7
    0x2021_0110_10a0_0c90, // f7
    0x0003_ff95_e5e6_a4c0, // g7
    0x9800_0481_0065_1140, // h7
    0x0404_1b00_4080_0161, // a8
    0x0080_2088_0840_0101, // b8
    0x1020_0009_0040_0421, // c8
    0x0004_0840_2004_1002, // d8
    0x0010_0c90_0248_2001, // e8
    0x0822_0024_0810_4502, // f8
    0x8088_0100_480a_0084, // g8
    0x2084_0024_0880_4502, // h8
];

/// A saved list of magics for bishops created using `wizard`.
const SAVED_BISHOP_MAGICS: [u64; 64] = [
    0x2224_208c_0800_2040, // a1
    0xfc09_6285_4a77_f576, // b1
    0x0012_2808_c102_a004, // c1
    0x2851_2400_8240_0440, // d1
    0x0011_1040_1100_0202, // e1
    0x0008_2208_2000_0010, // f1
    0xfc0a_66c6_4a7e_f576, // g1
    0x1104_0288_0802_3040, // h1
    0xfc08_46a6_4a34_fff6, // a2
    0xfc08_7a87_4a3c_f7f6, // b2
    0x0009_8802_0420_a000, // c2
    0x8000_4404_0080_8200, // d2
    0x208c_8450_c001_3407, // e2
    0x1980_1105_2010_8030, // f2
    0xfc08_64ae_59b4_ff76, // g2
    0x3c08_60af_4b35_ff76, // h2
    0x8001_2000_a209_0200, // a3
    0x41a0_1cfa_d64a_affc, // b3
    0x0604_0002_04a2_0202, // c3
    0x0002_8208_0602_4000, // d3
    0x008a_0024_2201_0201, // e3
    0x2082_0040_8801_0802, // f3
    0x7c0c_028f_5b34_ff76, // g3
    0xfc0a_028e_5ab4_df76, // h3
    0x0810_0420_d104_1080, // a4
    0x0904_5100_0210_0100, // b4
    0x0202_2808_0406_4403, // c4
    0x004c_0040_0c03_0082, // d4
    0x0602_0010_0200_5011, // e4
    0x7209_0200_c108_9000, // f4
    0x4211_4104_2400_8805, // g4
    0x0002_8484_2126_0804, // h4
    0xc001_0412_1121_2004, // a5
    0x0208_0188_0004_4800, // b5
    0x0080_2064_1058_0800, // c5
    0x0000_2011_0008_0084, // d5
    0x0208_0034_0009_4100, // e5
    0x2190_4102_0000_4058, // f5
    0x0188_8214_0180_8080, // g5
    0x2006_0a02_0000_c4c0, // h5
    0xdcef_d9b5_4bfc_c09f, // a6
    0xf95f_fa76_5afd_602b, // b6
    0x200a_1041_1000_2040, // c6
    0x0800_000c_0831_0c00, // d6
    0x0218_0401_0a01_0400, // e6
    0x1092_2004_0022_4100, // f6
    0x43ff_9a5c_f4ca_0c01, // g6
    0x4bff_cd8e_7c58_7601, // h6
    0xfc0f_f286_5334_f576, // a7
    0xfc0b_f6ce_5924_f576, // b7
    0x8052_2060_8c30_0001, // c7
    0x2084_1050_4202_0400, // d7
    0xe018_8010_2206_0220, // e7
    0x0001_1220_4901_0200, // f7
    0xc3ff_b7dc_36ca_8c89, // g7
    0xc3ff_8a54_f4ca_2c89, // h7
    0xffff_fcfc_fd79_edff, // a8
    0xfc08_63fc_cb14_7576, // b8
    0x40a0_0400_6213_3000, // c8
    0x0142_0280_0084_0400, // d8
    0x0009_0900_1006_1200, // e8
    0x0800_8445_2810_0308, // f8
    0xfc08_7e8e_4bb2_f736, // g8
    0x43ff_9e4e_f4ca_2c89, // h8
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece whose moves are looked up in a magic table.
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    /// Both sliders.
    pub const ALL: [Slider; 2] = [Slider::Bishop, Slider::Rook];

    #[must_use]
    /// The number of index bits in this slider's table for each square.
    pub const fn table_bits(self) -> u8 {
        match self {
            Slider::Bishop => 9,
            Slider::Rook => 12,
        }
    }

    #[must_use]
    /// The number of entries in this slider's table for each square.
    pub const fn table_size(self) -> usize {
        1 << self.table_bits()
    }

    #[must_use]
    /// The directions along which this slider moves.
    pub const fn directions(self) -> &'static [Direction; 4] {
        match self {
            Slider::Bishop => &Direction::BISHOP_DIRECTIONS,
            Slider::Rook => &Direction::ROOK_DIRECTIONS,
        }
    }

    #[must_use]
    /// Get the magic number for `sq` that this crate ships with.
    pub const fn saved_magic(self, sq: Square) -> u64 {
        match self {
            Slider::Bishop => SAVED_BISHOP_MAGICS[sq as usize],
            Slider::Rook => SAVED_ROOK_MAGICS[sq as usize],
        }
    }

    #[must_use]
    /// Create the mask of squares whose occupancy can change the attacks of
    /// this slider on `sq`. The last square along each ray is never
    /// relevant, since the slider reaches it whether it is occupied or not.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{magic::Slider, Bitboard, Square};
    ///
    /// assert_eq!(
    ///     Slider::Rook.relevant_mask(Square::A1),
    ///     Bitboard::new(0x0001_0101_0101_017E)
    /// );
    /// ```
    pub fn relevant_mask(self, sq: Square) -> Bitboard {
        let rank = sq.rank() as i8;
        let file = sq.file() as i8;
        let lines = match self {
            Slider::Bishop => {
                (MAIN_DIAGONAL.shift(Direction(8 * (rank - file)))
                    | ANTI_DIAGONAL.shift(Direction(8 * (rank + file - 7))))
                    & Bitboard::NOT_EDGE
            }
            Slider::Rook => {
                (sq.rank().bitboard() & Bitboard::NOT_RANK_END)
                    | (sq.file().bitboard() & Bitboard::NOT_FILE_END)
            }
        };

        lines & !Bitboard::from(sq)
    }
}

impl Display for Slider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slider::Bishop => write!(f, "bishop"),
            Slider::Rook => write!(f, "rook"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Two different relevant occupancies which a magic number sends to the same
/// table index.
pub struct Collision {
    /// The index both occupancies hash to.
    pub index: usize,
    /// The occupancy which claimed the index first.
    pub first: Bitboard,
    /// The occupancy which collided with it.
    pub second: Bitboard,
}

#[derive(Clone, Debug)]
/// A complete magic table which can generate moves for rooks and bishops.
pub struct AttacksTable {
    rook_table: SliderTable,
    bishop_table: SliderTable,
}

impl AttacksTable {
    /// Create a pre-loaded `AttacksTable` from the saved magics.
    ///
    /// # Panics
    ///
    /// Panics if any saved magic maps two relevant occupancies of its square
    /// to the same index.
    fn load() -> AttacksTable {
        AttacksTable {
            rook_table: SliderTable::load(Slider::Rook),
            bishop_table: SliderTable::load(Slider::Bishop),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a rook on `sq` could make, given the set of
    /// occupied squares `occupancy`.
    pub fn rook_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.rook_table.attacks(occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a bishop on `sq` could make, given the set of
    /// occupied squares `occupancy`.
    pub fn bishop_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.bishop_table.attacks(occupancy, sq)
    }
}

/// The masks, magics, and attack sets of one slider for all 64 squares.
#[derive(Clone, Debug)]
struct SliderTable {
    /// The relevant-occupancy mask of each square.
    masks: [Bitboard; 64],
    /// The magic number of each square.
    magics: [u64; 64],
    /// `64 * 2^bits` attack sets. The table for square `sq` starts at
    /// `sq << bits`.
    attacks: Vec<Bitboard>,
    /// The number of index bits per square.
    bits: u8,
}

impl SliderTable {
    fn load(slider: Slider) -> SliderTable {
        let bits = slider.table_bits();
        let mut table = SliderTable {
            masks: [Bitboard::EMPTY; 64],
            magics: [0; 64],
            attacks: vec![Bitboard::EMPTY; 64 * slider.table_size()],
            bits,
        };

        for sq in Square::ALL {
            let mask = slider.relevant_mask(sq);
            let magic = slider.saved_magic(sq);
            if let Some(collision) = find_collision(slider, sq, magic) {
                panic!(
                    "saved {slider} magic for {sq} collides at index {}: {:#x} and {:#x}",
                    collision.index,
                    collision.first.as_u64(),
                    collision.second.as_u64()
                );
            }

            table.masks[sq as usize] = mask;
            table.magics[sq as usize] = magic;
            let base = (sq as usize) << bits;
            for occupancy in mask.subsets() {
                table.attacks[base + magic_index(occupancy, mask, magic, bits)] =
                    ray_attacks(slider, sq, occupancy);
            }
        }

        table
    }

    #[inline(always)]
    fn attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        let i = sq as usize;
        let key = magic_index(occupancy, self.masks[i], self.magics[i], self.bits);
        self.attacks[(i << self.bits) + key]
    }
}

#[inline(always)]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
/// Use magic hashing to get the index of `occupancy` within one square's
/// table. Only the squares of `occupancy` inside `mask` matter. The result is
/// always less than `2^bits`.
pub fn magic_index(occupancy: Bitboard, mask: Bitboard, magic: u64, bits: u8) -> usize {
    ((occupancy & mask) * magic >> (64 - bits)) as usize
}

/// Check whether `magic` sends every subset of the relevant mask of `sq` to a
/// distinct index at `slider`'s table width. Returns the first collision
/// found, or `None` if the magic is usable.
#[must_use]
pub fn find_collision(slider: Slider, sq: Square, magic: u64) -> Option<Collision> {
    let mask = slider.relevant_mask(sq);
    let bits = slider.table_bits();
    let mut claimed: IntMap<usize, Bitboard> = IntMap::default();

    for occupancy in mask.subsets() {
        let index = magic_index(occupancy, mask, magic, bits);
        if let Some(&first) = claimed.get(&index) {
            return Some(Collision {
                index,
                first,
                second: occupancy,
            });
        }
        claimed.insert(index, occupancy);
    }

    None
}

/// Construct the squares attacked by `slider` on `sq` by walking each of its
/// rays until it leaves the board or hits a square in `occupancy`. The
/// blocking square is included.
///
/// This is slow and is only used for filling and checking the magic tables.
#[must_use]
pub fn ray_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for &dir in slider.directions() {
        let mut current_square = sq;
        while let Some(next_square) = current_square.checked_step(dir, 1) {
            result.insert(next_square);
            if occupancy.contains(next_square) {
                break;
            }
            current_square = next_square;
        }
    }

    result
}

#[inline(always)]
#[must_use]
/// Generate a random, mostly-empty magic candidate.
pub fn random_sparse_magic(rng: &fastrand::Rng) -> u64 {
    rng.u64(..) & rng.u64(..) & rng.u64(..)
}

/// Try up to `tries` random candidates for a magic number for `slider` on
/// `sq`. Returns the first candidate without collisions.
///
/// The search gives up early once `done` is set, and sets `done` itself on
/// success, so several searches for the same square can share one flag.
pub fn find_magic(
    slider: Slider,
    sq: Square,
    rng: &fastrand::Rng,
    tries: u64,
    done: &AtomicBool,
) -> Option<u64> {
    let magic = (0..tries)
        .take_while(|_| !done.load(Ordering::Relaxed))
        .map(|_| random_sparse_magic(rng))
        .find(|&magic| find_collision(slider, sq, magic).is_none())?;
    done.store(true, Ordering::Relaxed);

    Some(magic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn rook_mask() {
        assert_eq!(
            Slider::Rook.relevant_mask(Square::A1),
            Bitboard::new(0x0001_0101_0101_017E)
        );
        assert_eq!(
            Slider::Rook.relevant_mask(Square::E1),
            Bitboard::new(0x0010_1010_1010_106E)
        );
        assert_eq!(
            Slider::Rook.relevant_mask(Square::E5),
            Bitboard::new(0x0010_106E_1010_1000)
        );
    }

    #[test]
    fn bishop_mask() {
        assert_eq!(
            Slider::Bishop.relevant_mask(Square::A1),
            Bitboard::new(0x0040_2010_0804_0200)
        );
        assert_eq!(
            Slider::Bishop.relevant_mask(Square::E1),
            Bitboard::new(0x0000_0000_0244_2800)
        );
        assert_eq!(
            Slider::Bishop.relevant_mask(Square::E5),
            Bitboard::new(0x0044_2800_2844_0200)
        );
    }

    #[test]
    /// The relevant squares are exactly the empty-board attacks minus the
    /// last square on each ray.
    fn masks_match_rays() {
        for slider in Slider::ALL {
            for sq in Square::ALL {
                let mut expected = Bitboard::EMPTY;
                for &dir in slider.directions() {
                    let mut current = sq;
                    while let Some(next) = current.checked_step(dir, 1) {
                        if next.checked_step(dir, 1).is_some() {
                            expected.insert(next);
                        }
                        current = next;
                    }
                }
                assert_eq!(slider.relevant_mask(sq), expected, "{slider} on {sq}");
            }
        }
    }

    #[test]
    /// Every saved magic sends every relevant occupancy of its square to its
    /// own index.
    fn saved_magics_have_no_collisions() {
        for slider in Slider::ALL {
            for sq in Square::ALL {
                assert_eq!(
                    find_collision(slider, sq, slider.saved_magic(sq)),
                    None,
                    "{slider} on {sq}"
                );
            }
        }
    }

    #[test]
    fn indices_fit_in_table() {
        for slider in Slider::ALL {
            for sq in Square::ALL {
                let mask = slider.relevant_mask(sq);
                let magic = slider.saved_magic(sq);
                for occupancy in mask.subsets() {
                    assert!(
                        magic_index(occupancy, mask, magic, slider.table_bits())
                            < slider.table_size()
                    );
                }
            }
        }
    }

    #[test]
    /// Looking up every relevant occupancy gives the ray-marched attacks.
    fn lookups_match_rays_exhaustively() {
        for sq in Square::ALL {
            for occupancy in Slider::Rook.relevant_mask(sq).subsets() {
                assert_eq!(
                    MAGIC.rook_attacks(occupancy, sq),
                    ray_attacks(Slider::Rook, sq, occupancy)
                );
            }
            for occupancy in Slider::Bishop.relevant_mask(sq).subsets() {
                assert_eq!(
                    MAGIC.bishop_attacks(occupancy, sq),
                    ray_attacks(Slider::Bishop, sq, occupancy)
                );
            }
        }
    }

    #[test]
    /// Occupied squares outside the relevant mask do not change the lookup.
    fn lookups_match_rays_on_random_boards() {
        let rng = fastrand::Rng::with_seed(0x5EED);
        for _ in 0..10_000 {
            let occupancy = Bitboard::new(rng.u64(..) & rng.u64(..));
            let sq = Square::ALL[rng.usize(..64)];
            assert_eq!(
                MAGIC.rook_attacks(occupancy, sq),
                ray_attacks(Slider::Rook, sq, occupancy)
            );
            assert_eq!(
                MAGIC.bishop_attacks(occupancy, sq),
                ray_attacks(Slider::Bishop, sq, occupancy)
            );
        }
    }

    #[test]
    fn rook_attacks() {
        // rook on A1 boxed in by pieces on A2 and B1
        assert_eq!(
            MAGIC.rook_attacks(Bitboard::new(0x103), Square::A1),
            Bitboard::new(0x102)
        );
        // same, but with other pieces on the board to be masked out
        assert_eq!(
            MAGIC.rook_attacks(Bitboard::new(0x1FC3), Square::A1),
            Bitboard::new(0x102)
        );
        // empty board from D4: its rank and file
        assert_eq!(
            MAGIC.rook_attacks(Bitboard::EMPTY, Square::D4),
            (Rank::Four.bitboard() | File::D.bitboard()) & !Bitboard::from(Square::D4)
        );
    }

    #[test]
    fn bishop_attacks() {
        // cases in order:
        // bishop on A1 is blocked by piece on B2, so it only has 1 attack
        // bishop on A8 is blocked by piece on B7, so it only has 1 attack
        // bishop is in board start position on C1
        // bishop in board start position on F1
        let cases = [
            (Bitboard::new(0x0000_0000_0000_0201), Square::A1, Bitboard::new(0x0000_0000_0000_0200)),
            (Bitboard::new(0x0102_0000_0000_0000), Square::A8, Bitboard::new(0x0002_0000_0000_0000)),
            (Bitboard::new(0xFFFF_0000_0000_FFFF), Square::C1, Bitboard::new(0x0000_0000_0000_0A00)),
            (Bitboard::new(0xFFFF_0000_0000_FFFF), Square::F1, Bitboard::new(0x0000_0000_0000_5000)),
        ];
        for (occupancy, sq, attacks) in cases {
            assert_eq!(MAGIC.bishop_attacks(occupancy, sq), attacks);
            assert_eq!(ray_attacks(Slider::Bishop, sq, occupancy), attacks);
        }
    }

    #[test]
    fn search_finds_working_magic() {
        let rng = fastrand::Rng::with_seed(12345);
        let done = AtomicBool::new(false);
        let magic = find_magic(Slider::Bishop, Square::A1, &rng, 1_000_000, &done)
            .expect("no bishop magic found for a1");
        assert_eq!(find_collision(Slider::Bishop, Square::A1, magic), None);
        assert!(done.load(Ordering::Relaxed));
    }

    #[test]
    /// A search whose flag is already set tries nothing.
    fn search_stops_when_done() {
        let rng = fastrand::Rng::with_seed(12345);
        let done = AtomicBool::new(true);
        assert_eq!(
            find_magic(Slider::Bishop, Square::A1, &rng, 1_000_000, &done),
            None
        );
    }

    #[test]
    /// The shipped tables load and agree with the ray walk.
    fn saved_tables_load() {
        assert_eq!(
            MAGIC.rook_attacks(Bitboard::EMPTY, Square::A1),
            ray_attacks(Slider::Rook, Square::A1, Bitboard::EMPTY)
        );
        assert_eq!(Slider::Bishop.saved_magic(Square::H8), 0x43ff_9e4e_f4ca_2c89);
    }
}
