//! Canvas geometry derived from the tree: sizing and hit testing.

use super::layout::{Position, PositionTable};
use super::state::Configuration;
use super::tree::NodeTable;

pub const MAX_CANVAS_WIDTH: f64 = 1200.0;
pub const MIN_CANVAS_HEIGHT: f64 = 800.0;
/// Radius, in pixels, within which a pointer counts as over a node.
pub const HIT_RADIUS: f64 = 35.0;

const CONTAINER_PADDING: f64 = 60.0;
const LEVEL_HEIGHT: f64 = 120.0;
const NODE_WIDTH: f64 = 100.0;
const EXTRA_SPACE: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	pub width: f64,
	pub height: f64,
}

impl Default for CanvasSize {
	fn default() -> Self {
		Self {
			width: MAX_CANVAS_WIDTH,
			height: MIN_CANVAS_HEIGHT,
		}
	}
}

/// Canvas dimensions that fit `table` inside a container `container_width`
/// pixels wide. Grows past the container when a level is too wide.
pub fn canvas_size(table: &NodeTable, container_width: f64) -> CanvasSize {
	let mut width = MAX_CANVAS_WIDTH.min(container_width - CONTAINER_PADDING).max(0.0);
	let mut height = MIN_CANVAS_HEIGHT;

	let levels = table.levels();
	if !levels.is_empty() {
		let max_depth = (levels.len() - 1) as f64;
		height = height.max((max_depth + 1.0) * LEVEL_HEIGHT + EXTRA_SPACE);
		let widest = levels.iter().map(Vec::len).max().unwrap_or(0) as f64;
		width = width.max(widest * NODE_WIDTH + EXTRA_SPACE);
	}
	CanvasSize { width, height }
}

/// The first state whose node covers `(x, y)`.
///
/// `order` fixes which node wins when several overlap; pass the node table's
/// keys for discovery order.
pub fn node_at<'a>(
	order: impl IntoIterator<Item = &'a Configuration>,
	positions: &PositionTable,
	x: f64,
	y: f64,
) -> Option<&'a Configuration> {
	let pointer = Position::new(x, y);
	order.into_iter().find(|state| {
		positions
			.get(*state)
			.is_some_and(|p| p.distance_to(&pointer) <= HIT_RADIUS)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::layout::{LayoutKind, layout};
	use crate::engine::tree::{DepthBound, build};

	#[test]
	fn empty_tree_uses_container_width() {
		let size = canvas_size(&NodeTable::default(), 900.0);
		assert_eq!(size, CanvasSize { width: 840.0, height: 800.0 });
	}

	#[test]
	fn width_capped_for_large_container() {
		let size = canvas_size(&build(1, DepthBound::RootOnly), 3000.0);
		assert_eq!(size.width, 1200.0);
	}

	#[test]
	fn deep_tree_grows_canvas() {
		let table = build(4, DepthBound::Unbounded);
		let size = canvas_size(&table, 1000.0);
		let depth = table.max_depth().unwrap() as f64;
		assert_eq!(size.height, (depth + 1.0) * 120.0 + 200.0);
		let widest = table.levels().iter().map(Vec::len).max().unwrap() as f64;
		assert_eq!(size.width, (widest * 100.0 + 200.0).max(940.0));
	}

	#[test]
	fn hit_test_finds_nearby_node_only() {
		let table = build(2, DepthBound::RootOnly);
		let positions = layout(LayoutKind::Hierarchical, &table, 1200.0, 800.0);
		let root = table.root().unwrap();
		let p = positions[root];
		assert_eq!(node_at(table.keys(), &positions, p.x + 20.0, p.y), Some(root));
		assert_eq!(node_at(table.keys(), &positions, p.x + 36.0, p.y), None);
	}
}
