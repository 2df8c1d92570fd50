use super::{Position, PositionTable};
use crate::engine::tree::NodeTable;

const TOP_MARGIN: f64 = 50.0;
const MIN_LEVEL_SPACING: f64 = 100.0;
const MIN_NODE_SPACING: f64 = 80.0;
const SIDE_MARGIN: f64 = 100.0;

/// One row per depth, each row centered horizontally.
pub fn hierarchical(table: &NodeTable, width: f64, height: f64) -> PositionTable {
	let levels = table.levels();
	let mut positions = PositionTable::with_capacity(table.len());
	if levels.is_empty() {
		return positions;
	}

	let level_spacing = MIN_LEVEL_SPACING.max((height - 100.0) / levels.len() as f64);
	for (depth, states) in levels.iter().enumerate() {
		let y = TOP_MARGIN + depth as f64 * level_spacing;
		let count = states.len() as f64;
		let spacing = MIN_NODE_SPACING.max((width - 2.0 * SIDE_MARGIN) / (count + 1.0));
		let row_width = (count - 1.0) * spacing;
		let start_x = (width - row_width) / 2.0;
		for (i, state) in states.iter().enumerate() {
			positions.insert((*state).clone(), Position::new(start_x + i as f64 * spacing, y));
		}
	}
	positions
}
