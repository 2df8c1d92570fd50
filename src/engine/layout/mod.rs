//! Node placement strategies.
//!
//! Every strategy reads a finished [`NodeTable`] and returns a fresh
//! [`PositionTable`] covering exactly its keys. Nothing is updated in place;
//! switching strategy or resizing the canvas recomputes the whole table.

mod force;
mod hierarchical;
mod radial;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use super::state::Configuration;
use super::tree::NodeTable;
use crate::error::{Error, Result};

pub use force::{ForceParams, force_directed};
pub use hierarchical::hierarchical;
pub use radial::radial;

/// Seed used by [`layout`] when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x4a4f_4e41_4e4f_4921;

/// Pixel coordinates on the canvas the layout was computed for.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(&self, other: &Position) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}
}

pub type PositionTable = HashMap<Configuration, Position>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
	#[default]
	Hierarchical,
	Radial,
	Force,
}

impl LayoutKind {
	pub const ALL: [LayoutKind; 3] = [LayoutKind::Hierarchical, LayoutKind::Radial, LayoutKind::Force];

	pub fn name(self) -> &'static str {
		match self {
			LayoutKind::Hierarchical => "hierarchical",
			LayoutKind::Radial => "radial",
			LayoutKind::Force => "force",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			LayoutKind::Hierarchical => "Hierarchical",
			LayoutKind::Radial => "Radial",
			LayoutKind::Force => "Force-directed",
		}
	}

	/// Lenient lookup: anything unrecognized means hierarchical.
	pub fn from_name(name: &str) -> Self {
		name.parse().unwrap_or_else(|_| {
			warn!("unknown layout `{name}`, falling back to hierarchical");
			LayoutKind::Hierarchical
		})
	}
}

impl fmt::Display for LayoutKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for LayoutKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"hierarchical" => Ok(LayoutKind::Hierarchical),
			"radial" => Ok(LayoutKind::Radial),
			"force" | "force-directed" => Ok(LayoutKind::Force),
			_ => Err(Error::UnknownLayout(s.to_string())),
		}
	}
}

/// Positions every node of `table` on a `width` x `height` canvas.
///
/// The force strategy is seeded with [`DEFAULT_SEED`]; use [`layout_seeded`]
/// for a different starting scatter.
pub fn layout(kind: LayoutKind, table: &NodeTable, width: f64, height: f64) -> PositionTable {
	layout_seeded(kind, table, width, height, DEFAULT_SEED)
}

pub fn layout_seeded(
	kind: LayoutKind,
	table: &NodeTable,
	width: f64,
	height: f64,
	seed: u64,
) -> PositionTable {
	let (width, height) = (width.max(0.0), height.max(0.0));
	let positions = match kind {
		LayoutKind::Hierarchical => hierarchical(table, width, height),
		LayoutKind::Radial => radial(table, width, height),
		LayoutKind::Force => force_directed(table, width, height, &ForceParams::default(), seed),
	};
	debug!(
		"{kind} layout: {} nodes on {width}x{height}",
		positions.len()
	);
	positions
}
