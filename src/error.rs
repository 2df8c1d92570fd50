//! Error type for the boundary checks around the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("disk count {requested} is outside 1..={max}")]
	DiskCountOutOfRange { requested: u32, max: u32 },

	#[error("unknown layout `{0}` (expected hierarchical, radial or force)")]
	UnknownLayout(String),

	#[error("unknown animation speed `{0}` (expected slow, medium or fast)")]
	UnknownSpeed(String),

	#[error("invalid peg label `{0}` (expected A, B or C)")]
	InvalidPeg(char),

	#[error("a configuration needs at least one disk")]
	EmptyConfiguration,
}
