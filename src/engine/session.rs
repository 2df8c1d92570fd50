//! Incremental exploration: grow the tree a level at a time and keep a
//! layout in step with it.

use std::time::Duration;

use log::info;

use super::canvas::{CanvasSize, canvas_size};
use super::layout::{DEFAULT_SEED, LayoutKind, PositionTable, layout_seeded};
use super::path::solution_path;
use super::state::Configuration;
use super::stats::{Stats, stats};
use super::tree::{DepthBound, NodeTable, build};
use crate::config::{AnimationSpeed, DiskCount, HanoiConfig};

/// Owns the current tree and its positions.
///
/// Every mutation builds a replacement table or layout and swaps it in whole.
#[derive(Clone, Debug)]
pub struct Explorer {
	disk_count: DiskCount,
	bound: DepthBound,
	table: NodeTable,
	positions: PositionTable,
	layout: LayoutKind,
	canvas: CanvasSize,
	/// When set, the canvas is re-fitted to the tree on every relayout.
	container_width: Option<f64>,
	seed: u64,
	/// Bumped by every [`Explorer::generate`]; playbacks from an older tree
	/// see a different value and stop.
	generation: u64,
}

impl Explorer {
	/// An explorer with nothing built yet; call [`Explorer::generate`].
	pub fn new(config: &HanoiConfig) -> Self {
		Self {
			disk_count: config.disk_count,
			bound: DepthBound::RootOnly,
			table: NodeTable::default(),
			positions: PositionTable::new(),
			layout: config.layout,
			canvas: config.canvas,
			container_width: None,
			seed: DEFAULT_SEED,
			generation: 0,
		}
	}

	pub fn disk_count(&self) -> DiskCount {
		self.disk_count
	}

	pub fn bound(&self) -> DepthBound {
		self.bound
	}

	pub fn table(&self) -> &NodeTable {
		&self.table
	}

	pub fn positions(&self) -> &PositionTable {
		&self.positions
	}

	pub fn layout_kind(&self) -> LayoutKind {
		self.layout
	}

	pub fn canvas(&self) -> CanvasSize {
		self.canvas
	}

	/// Takes effect on the next [`Explorer::generate`].
	pub fn set_disk_count(&mut self, disk_count: DiskCount) {
		self.disk_count = disk_count;
	}

	/// Seed for subsequent force layouts.
	pub fn set_seed(&mut self, seed: u64) {
		self.seed = seed;
	}

	/// Starts over with just the root.
	pub fn generate(&mut self) {
		self.bound = DepthBound::RootOnly;
		self.table = build(self.disk_count.get(), self.bound);
		self.generation += 1;
		info!("generated tree for {} disks", self.disk_count);
		self.relayout();
	}

	/// Rebuilds one level deeper. Does nothing before the first generate.
	pub fn expand_one_level(&mut self) {
		self.expand_to(self.bound.deeper());
	}

	/// Rebuilds with `bound`, so a request made against an older bound does
	/// not stack with one already applied. Does nothing before the first
	/// generate or when the tree is already at `bound`.
	pub fn expand_to(&mut self, bound: DepthBound) {
		if self.table.is_empty() || self.bound == bound {
			return;
		}
		self.bound = bound;
		self.table = build(self.disk_count.get(), self.bound);
		info!(
			"expanded to bound {:?}: {} nodes",
			self.bound.as_signed(),
			self.table.len()
		);
		self.relayout();
	}

	/// Whether another expansion can still grow the tree toward the goal.
	pub fn can_expand(&self) -> bool {
		if self.table.is_empty() {
			return false;
		}
		let last_useful = self.disk_count.optimal_moves() as i64 - 1;
		self.bound.as_signed().is_some_and(|bound| bound < last_useful)
	}

	/// Changes strategy and keeps the current canvas sizing mode.
	pub fn set_layout(&mut self, kind: LayoutKind) {
		self.layout = kind;
		self.relayout();
	}

	/// Sizes the canvas from the tree and the container from now on.
	pub fn fit_to(&mut self, container_width: f64) {
		self.container_width = Some(container_width);
		self.relayout();
	}

	/// Recomputes every position, re-fitting the canvas first when a
	/// container width is known.
	pub fn relayout(&mut self) {
		if let Some(container_width) = self.container_width {
			self.canvas = canvas_size(&self.table, container_width);
		}
		info!(
			"{} layout on {}x{}",
			self.layout, self.canvas.width, self.canvas.height
		);
		self.positions = if self.table.is_empty() {
			PositionTable::new()
		} else {
			layout_seeded(
				self.layout,
				&self.table,
				self.canvas.width,
				self.canvas.height,
				self.seed,
			)
		};
	}

	pub fn solution_path(&self) -> Vec<Configuration> {
		solution_path(&self.table, self.disk_count.get())
	}

	pub fn stats(&self) -> Stats {
		stats(&self.table)
	}

	/// Plays the current solution path, tied to this tree's generation.
	pub fn playback(&self, speed: AnimationSpeed) -> Playback {
		Playback::new(self.solution_path(), speed, self.generation)
	}
}

/// Steps through a precomputed path, one state per tick.
#[derive(Clone, Debug)]
pub struct Playback {
	path: Vec<Configuration>,
	cursor: usize,
	speed: AnimationSpeed,
	generation: u64,
}

impl Playback {
	fn new(path: Vec<Configuration>, speed: AnimationSpeed, generation: u64) -> Self {
		Self {
			path,
			cursor: 0,
			speed,
			generation,
		}
	}

	pub fn delay(&self) -> Duration {
		self.speed.step_delay()
	}

	pub fn is_finished(&self) -> bool {
		self.cursor >= self.path.len()
	}

	pub fn remaining(&self) -> usize {
		self.path.len().saturating_sub(self.cursor)
	}

	/// Whether `explorer` has generated a new tree since this playback began.
	pub fn is_stale(&self, explorer: &Explorer) -> bool {
		self.generation != explorer.generation
	}
}

impl Iterator for Playback {
	type Item = Configuration;

	fn next(&mut self) -> Option<Configuration> {
		let state = self.path.get(self.cursor)?.clone();
		self.cursor += 1;
		Some(state)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn explorer(disks: u32) -> Explorer {
		let config = HanoiConfig {
			disk_count: DiskCount::try_from(disks).unwrap(),
			..HanoiConfig::default()
		};
		Explorer::new(&config)
	}

	#[test]
	fn nothing_built_before_generate() {
		let mut e = explorer(3);
		assert!(e.table().is_empty());
		assert!(!e.can_expand());
		e.expand_one_level();
		assert!(e.table().is_empty());
		assert_eq!(e.stats(), Stats::default());
	}

	#[test]
	fn generate_builds_root_and_positions_it() {
		let mut e = explorer(3);
		e.generate();
		assert_eq!(e.table().len(), 1);
		assert_eq!(e.positions().len(), 1);
		assert_eq!(e.bound(), DepthBound::RootOnly);
		assert!(e.can_expand());
	}

	#[test]
	fn expanding_until_blocked_reaches_the_goal() {
		let mut e = explorer(3);
		e.generate();
		let mut expansions = 0;
		while e.can_expand() {
			e.expand_one_level();
			expansions += 1;
			assert_eq!(e.positions().len(), e.table().len());
		}
		// Bounds -1 ..= 6 minus the starting one.
		assert_eq!(expansions, 7);
		assert_eq!(e.bound(), DepthBound::Max(6));
		assert_eq!(e.solution_path().len(), 8);
		assert_eq!(e.stats().total_nodes, 27);
	}

	#[test]
	fn repeated_expand_request_applies_once() {
		let mut e = explorer(3);
		e.generate();
		let target = e.bound().deeper();
		e.expand_to(target);
		let len = e.table().len();
		e.expand_to(target);
		assert_eq!(e.bound(), DepthBound::Max(0));
		assert_eq!(e.table().len(), len);
	}

	#[test]
	fn generate_resets_previous_expansion() {
		let mut e = explorer(2);
		e.generate();
		e.expand_one_level();
		e.expand_one_level();
		assert!(e.table().len() > 1);
		e.generate();
		assert_eq!(e.table().len(), 1);
	}

	#[test]
	fn disk_count_change_applies_on_generate() {
		let mut e = explorer(2);
		e.generate();
		e.set_disk_count(DiskCount::try_from(4).unwrap());
		assert_eq!(e.table().root().unwrap().disk_count(), 2);
		e.generate();
		assert_eq!(e.table().root().unwrap().disk_count(), 4);
	}

	#[test]
	fn switching_layout_recomputes_positions() {
		let mut e = explorer(2);
		e.generate();
		e.expand_one_level();
		let before = e.positions().clone();
		e.set_layout(LayoutKind::Radial);
		assert_eq!(e.layout_kind(), LayoutKind::Radial);
		assert_eq!(e.canvas(), CanvasSize::default());
		assert_ne!(&before, e.positions());
	}

	#[test]
	fn fitted_canvas_follows_tree_growth() {
		let mut e = explorer(3);
		e.fit_to(1000.0);
		e.generate();
		assert_eq!(e.canvas(), CanvasSize { width: 940.0, height: 800.0 });
		while e.can_expand() {
			e.expand_one_level();
		}
		let depth = e.table().max_depth().unwrap() as f64;
		assert_eq!(e.canvas().height, (depth + 1.0) * 120.0 + 200.0);

		e.set_layout(LayoutKind::Force);
		assert_eq!(e.canvas().height, (depth + 1.0) * 120.0 + 200.0);
		assert_eq!(e.canvas().width, 1000.0);
	}

	#[test]
	fn relayout_reshuffles_force_with_new_seed() {
		let mut e = explorer(2);
		e.set_layout(LayoutKind::Force);
		e.generate();
		e.expand_one_level();
		e.expand_one_level();
		let before = e.positions().clone();
		e.relayout();
		assert_eq!(&before, e.positions());
		e.set_seed(DEFAULT_SEED + 1);
		e.relayout();
		assert_ne!(&before, e.positions());
	}

	#[test]
	fn playback_goes_stale_after_generate() {
		let mut e = explorer(2);
		e.generate();
		while e.can_expand() {
			e.expand_one_level();
		}
		let playback = e.playback(AnimationSpeed::Slow);
		assert_eq!(playback.remaining(), 4);
		e.expand_one_level();
		assert!(!playback.is_stale(&e));
		e.generate();
		assert!(playback.is_stale(&e));
		assert!(!e.playback(AnimationSpeed::Slow).is_stale(&e));
	}

	#[test]
	fn playback_walks_path_in_order() {
		let path: Vec<Configuration> = ["AA", "BA", "BC"].iter().map(|s| s.parse().unwrap()).collect();
		let mut playback = Playback::new(path.clone(), AnimationSpeed::Fast, 0);
		assert_eq!(playback.delay(), Duration::from_millis(500));
		assert_eq!(playback.remaining(), 3);
		assert_eq!(playback.next(), Some(path[0].clone()));
		let rest: Vec<_> = playback.by_ref().collect();
		assert_eq!(rest, path[1..].to_vec());
		assert!(playback.is_finished());
		assert_eq!(playback.next(), None);
	}
}
