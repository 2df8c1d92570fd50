//! Puzzle configurations and the legal-move relation between them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};

/// One of the three pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
	Left,
	Middle,
	Right,
}

impl Peg {
	/// Fixed enumeration order used for move generation.
	pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

	pub fn index(self) -> usize {
		match self {
			Peg::Left => 0,
			Peg::Middle => 1,
			Peg::Right => 2,
		}
	}

	pub fn label(self) -> char {
		match self {
			Peg::Left => 'A',
			Peg::Middle => 'B',
			Peg::Right => 'C',
		}
	}

	pub fn from_label(c: char) -> Result<Self> {
		match c {
			'A' => Ok(Peg::Left),
			'B' => Ok(Peg::Middle),
			'C' => Ok(Peg::Right),
			other => Err(Error::InvalidPeg(other)),
		}
	}
}

/// A full assignment of disks to pegs, one peg per disk.
///
/// A disk may only rest on disks with a higher index, so the lowest index on a
/// peg is the one that can be lifted. Cloning is cheap; the peg sequence is
/// shared and never mutated once built.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration(Arc<[Peg]>);

impl Configuration {
	/// Every disk stacked on `peg`.
	pub fn uniform(disk_count: usize, peg: Peg) -> Self {
		Self(vec![peg; disk_count].into())
	}

	/// The conventional start state: all disks on the left peg.
	pub fn start(disk_count: usize) -> Self {
		Self::uniform(disk_count, Peg::Left)
	}

	/// The conventional goal state: all disks on the right peg.
	pub fn goal(disk_count: usize) -> Self {
		Self::uniform(disk_count, Peg::Right)
	}

	pub fn disk_count(&self) -> usize {
		self.0.len()
	}

	pub fn pegs_slice(&self) -> &[Peg] {
		&self.0
	}

	/// Disk indices resting on each peg, ascending (topmost first).
	pub fn pegs(&self) -> [Vec<usize>; 3] {
		let mut pegs: [Vec<usize>; 3] = Default::default();
		for (disk, peg) in self.0.iter().enumerate() {
			pegs[peg.index()].push(disk);
		}
		pegs
	}

	/// Lowest disk index on each peg, i.e. the disk that can be lifted.
	fn top_disks(&self) -> [Option<usize>; 3] {
		let mut tops = [None; 3];
		for (disk, peg) in self.0.iter().enumerate().rev() {
			tops[peg.index()] = Some(disk);
		}
		tops
	}

	/// Configuration after moving `disk` onto `to`.
	fn with_disk_on(&self, disk: usize, to: Peg) -> Self {
		let mut pegs = self.0.to_vec();
		pegs[disk] = to;
		Self(pegs.into())
	}

	/// All configurations reachable in one legal move.
	///
	/// Pegs are scanned `from` then `to` in [`Peg::ALL`] order, so successors
	/// come out in the same order on every call.
	pub fn legal_moves(&self) -> Vec<Configuration> {
		let tops = self.top_disks();
		let mut moves = Vec::with_capacity(3);
		for from in Peg::ALL {
			let Some(disk) = tops[from.index()] else {
				continue;
			};
			for to in Peg::ALL {
				if from == to {
					continue;
				}
				let accepts = match tops[to.index()] {
					None => true,
					Some(resident) => resident > disk,
				};
				if accepts {
					moves.push(self.with_disk_on(disk, to));
				}
			}
		}
		moves
	}
}

impl fmt::Display for Configuration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for peg in self.0.iter() {
			write!(f, "{}", peg.label())?;
		}
		Ok(())
	}
}

impl fmt::Debug for Configuration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Configuration({self})")
	}
}

impl FromStr for Configuration {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		if s.is_empty() {
			return Err(Error::EmptyConfiguration);
		}
		let pegs = s.chars().map(Peg::from_label).collect::<Result<Vec<_>>>()?;
		Ok(Self(pegs.into()))
	}
}
