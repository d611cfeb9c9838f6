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

//! Bitboards, data structures used to efficiently represent sets of squares.

use super::{Direction, Square};

use std::{
    fmt::{Display, Formatter, Result},
    iter::{FusedIterator, Iterator},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not},
};

/// A bitboard, which uses an integer to express a set of `Square`s.
/// This expression allows the efficient computation of set intersection, union,
/// disjunction, element selection, and more, all in constant time.
///
/// Nearly all board-related representations use `Bitboard`s as a key part of
/// their construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard representing the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{Bitboard, Square};
    ///
    /// let sq = Square::A1; // this could be any square
    /// assert!(!Bitboard::EMPTY.contains(sq));
    /// ```
    pub const EMPTY: Bitboard = Bitboard::new(0);

    /// A bitboard containing all 64 squares on the board, i.e. the universal
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::Bitboard;
    ///
    /// assert_eq!(Bitboard::ALL.count(), 64);
    /// ```
    pub const ALL: Bitboard = Bitboard::new(!0);

    /// Every square except those on the A file. Sources stepping west must be
    /// masked with this before shifting.
    pub const NOT_A_FILE: Bitboard = Bitboard::new(0xFEFE_FEFE_FEFE_FEFE);

    /// Every square except those on the A and B files.
    pub const NOT_AB_FILE: Bitboard = Bitboard::new(0xFCFC_FCFC_FCFC_FCFC);

    /// Every square except those on the H file. Sources stepping east must be
    /// masked with this before shifting.
    pub const NOT_H_FILE: Bitboard = Bitboard::new(0x7F7F_7F7F_7F7F_7F7F);

    /// Every square except those on the G and H files.
    pub const NOT_GH_FILE: Bitboard = Bitboard::new(0x3F3F_3F3F_3F3F_3F3F);

    /// Every square not on the A or H file, i.e. not at either end of its rank.
    pub const NOT_RANK_END: Bitboard = Bitboard::new(0x7E7E_7E7E_7E7E_7E7E);

    /// Every square not on the first or eighth rank, i.e. not at either end of
    /// its file.
    pub const NOT_FILE_END: Bitboard = Bitboard::new(0x00FF_FFFF_FFFF_FF00);

    /// Every square not on the edge of the board.
    pub const NOT_EDGE: Bitboard = Bitboard::new(0x007E_7E7E_7E7E_7E00);

    #[inline(always)]
    #[must_use]
    /// Construct a new Bitboard from a numeric literal.
    /// Internally, `Bitboard`s are 64-bit integers, where the LSB represents
    /// whether the square A1 is an element, the second-least bit represents the
    /// square B1, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// bb.insert(Square::A1);
    ///
    /// assert_eq!(bb, Bitboard::new(1));
    /// ```
    pub const fn new(x: u64) -> Bitboard {
        Bitboard(x)
    }

    #[inline(always)]
    #[must_use]
    /// Get the raw integer behind this bitboard.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this bitboard contains a given square.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{Bitboard, Square};
    ///
    /// assert!(Bitboard::new(1).contains(Square::A1));
    /// assert!(!(Bitboard::new(2).contains(Square::A1)));
    /// ```
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u8) != 0
    }

    #[inline(always)]
    /// Add a square to the set of squares contained in this `Bitboard`.
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq as u8;
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    /// Compute the number of squares contained in this `Bitboard`.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// assert!(bb.len() == 0);
    /// bb.insert(Square::A1);
    /// assert!(bb.len() == 1);
    /// ```
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline(always)]
    #[must_use]
    /// Count the number of trailing zeros (i.e. empty squares between A1 and
    /// the first non-empty square) in this bitboard.
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    #[must_use]
    #[inline(always)]
    /// Determine whether this bitboard is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    #[must_use]
    /// Shift every square in this bitboard by `dir`. Positive directions shift
    /// toward H8, negative directions toward A1.
    ///
    /// No edge handling is done here: a square on the H file shifted east
    /// lands on the A file of the next rank. Mask the source with one of the
    /// `NOT_*` constants before shifting if that matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::{Bitboard, Direction, Square};
    ///
    /// let e4 = Bitboard::from(Square::E4);
    /// assert_eq!(e4.shift(Direction::N), Bitboard::from(Square::E5));
    /// assert_eq!(e4.shift(Direction::SW), Bitboard::from(Square::D3));
    /// ```
    pub const fn shift(self, dir: Direction) -> Bitboard {
        let amount = dir.0.unsigned_abs();
        if dir.0 >= 0 {
            Bitboard(self.0 << amount)
        } else {
            Bitboard(self.0 >> amount)
        }
    }

    #[must_use]
    /// Get an iterator over every subset of this bitboard, starting with the
    /// empty set. A bitboard with `n` squares has `2^n` subsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie::Bitboard;
    ///
    /// let subsets: Vec<Bitboard> = Bitboard::new(0b101).subsets().collect();
    /// assert_eq!(
    ///     subsets,
    ///     vec![
    ///         Bitboard::new(0b000),
    ///         Bitboard::new(0b001),
    ///         Bitboard::new(0b100),
    ///         Bitboard::new(0b101),
    ///     ]
    /// );
    /// ```
    pub const fn subsets(self) -> Subsets {
        Subsets {
            mask: self.0,
            next: Some(0),
        }
    }
}

/// An iterator over every subset of a mask, produced by
/// [`Bitboard::subsets`].
pub struct Subsets {
    mask: u64,
    next: Option<u64>,
}

impl Iterator for Subsets {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // carry-rippler: the next subset in counting order
        let following = current.wrapping_sub(self.mask) & self.mask;
        self.next = (following != 0).then_some(following);
        Some(Bitboard(current))
    }
}

impl FusedIterator for Subsets {}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Compute the intersection of the sets represented by this bitboard and
    /// the right-hand side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use magpie::Square;
    /// # use magpie::Bitboard;
    /// let bb1 = Bitboard::new(7); // {A1, B1, C1}
    /// let bb2 = Bitboard::new(14); // {B1, C1, D1}
    /// let intersection = bb1 & bb2; // {B1, C1}
    /// assert!(!intersection.contains(Square::A1));
    /// assert!(intersection.contains(Square::B1));
    /// assert!(intersection.contains(Square::C1));
    /// assert!(!intersection.contains(Square::D1));
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Mul<u64> for Bitboard {
    type Output = u64;

    #[inline(always)]
    /// Multiply the raw value of this bitboard by a magic number, wrapping on
    /// overflow.
    fn mul(self, rhs: u64) -> Self::Output {
        self.0.wrapping_mul(rhs)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u8)
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for row_idx in 0..8 {
            for col_idx in 0..8 {
                let bit = 1 << ((8 * (7 - row_idx)) + col_idx);
                if bit & self.0 == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "1 ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[allow(clippy::copy_iterator)]
impl Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        let result = Square::ALL[self.trailing_zeros() as usize];
        self.0 &= self.0 - 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_ascending() {
        let bb = Bitboard::from(Square::H8) | Bitboard::from(Square::C3) | Bitboard::from(Square::A1);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::A1, Square::C3, Square::H8]);
    }

    #[test]
    fn each_square_yielded_once() {
        let mut seen = Bitboard::EMPTY;
        for sq in Bitboard::new(0x8100_0000_0000_0081) {
            assert!(!seen.contains(sq));
            seen.insert(sq);
        }
        assert_eq!(seen, Bitboard::new(0x8100_0000_0000_0081));
    }

    #[test]
    fn shift_crosses_edges_unmasked() {
        let h4 = Bitboard::from(Square::H4);
        assert_eq!(h4.shift(Direction::E), Bitboard::from(Square::A5));
        assert!((h4 & Bitboard::NOT_H_FILE).shift(Direction::E).is_empty());
        assert!(Bitboard::from(Square::H8).shift(Direction::N).is_empty());
        assert!(Bitboard::from(Square::A1).shift(Direction::S).is_empty());
    }

    #[test]
    fn edge_masks_agree_with_files_and_ranks() {
        use crate::{File, Rank};

        assert_eq!(Bitboard::NOT_A_FILE, !File::A.bitboard());
        assert_eq!(Bitboard::NOT_AB_FILE, !(File::A.bitboard() | File::B.bitboard()));
        assert_eq!(Bitboard::NOT_H_FILE, !File::H.bitboard());
        assert_eq!(Bitboard::NOT_GH_FILE, !(File::G.bitboard() | File::H.bitboard()));
        assert_eq!(Bitboard::NOT_RANK_END, Bitboard::NOT_A_FILE & Bitboard::NOT_H_FILE);
        assert_eq!(Bitboard::NOT_FILE_END, !(Rank::One.bitboard() | Rank::Eight.bitboard()));
        assert_eq!(Bitboard::NOT_EDGE, Bitboard::NOT_RANK_END & Bitboard::NOT_FILE_END);
    }

    #[test]
    fn subsets_are_complete_and_distinct() {
        let mask = Bitboard::new(0x0010_1010_1010_106e);
        let subsets: Vec<Bitboard> = mask.subsets().collect();
        assert_eq!(subsets.len(), 1 << mask.len());
        for (i, &a) in subsets.iter().enumerate() {
            assert_eq!(a & !mask, Bitboard::EMPTY);
            for &b in &subsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn subsets_of_empty() {
        let subsets: Vec<Bitboard> = Bitboard::EMPTY.subsets().collect();
        assert_eq!(subsets, vec![Bitboard::EMPTY]);
    }
}
