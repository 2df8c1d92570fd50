//! User-facing settings and their validation.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::engine::canvas::CanvasSize;
use crate::engine::layout::LayoutKind;
use crate::error::{Error, Result};

/// Largest puzzle the UI offers; the state space grows as 3^n.
pub const MAX_DISKS: u32 = 6;

/// A disk count in `1..=MAX_DISKS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiskCount(u32);

impl DiskCount {
	pub fn get(self) -> usize {
		self.0 as usize
	}

	/// `2^n - 1`, the optimal number of moves.
	pub fn optimal_moves(self) -> usize {
		(1usize << self.0) - 1
	}
}

impl Default for DiskCount {
	fn default() -> Self {
		Self(3)
	}
}

impl TryFrom<u32> for DiskCount {
	type Error = Error;

	fn try_from(requested: u32) -> Result<Self> {
		if (1..=MAX_DISKS).contains(&requested) {
			Ok(Self(requested))
		} else {
			Err(Error::DiskCountOutOfRange {
				requested,
				max: MAX_DISKS,
			})
		}
	}
}

impl fmt::Display for DiskCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// How long the solution playback lingers on each state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnimationSpeed {
	Slow,
	#[default]
	Medium,
	Fast,
}

impl AnimationSpeed {
	pub const ALL: [AnimationSpeed; 3] = [AnimationSpeed::Slow, AnimationSpeed::Medium, AnimationSpeed::Fast];

	pub fn step_delay(self) -> Duration {
		Duration::from_millis(match self {
			AnimationSpeed::Slow => 1500,
			AnimationSpeed::Medium => 1000,
			AnimationSpeed::Fast => 500,
		})
	}

	pub fn name(self) -> &'static str {
		match self {
			AnimationSpeed::Slow => "slow",
			AnimationSpeed::Medium => "medium",
			AnimationSpeed::Fast => "fast",
		}
	}
}

impl FromStr for AnimationSpeed {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"slow" => Ok(AnimationSpeed::Slow),
			"medium" => Ok(AnimationSpeed::Medium),
			"fast" => Ok(AnimationSpeed::Fast),
			_ => Err(Error::UnknownSpeed(s.to_string())),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HanoiConfig {
	pub disk_count: DiskCount,
	pub layout: LayoutKind,
	pub speed: AnimationSpeed,
	pub canvas: CanvasSize,
}
