use std::f64::consts::TAU;

use super::{Position, PositionTable};
use crate::engine::tree::NodeTable;

const RING_MARGIN: f64 = 150.0;

/// Concentric rings around the canvas center, one ring per depth.
pub fn radial(table: &NodeTable, width: f64, height: f64) -> PositionTable {
	let levels = table.levels();
	let mut positions = PositionTable::with_capacity(table.len());
	if levels.is_empty() {
		return positions;
	}

	let (cx, cy) = (width / 2.0, height / 2.0);
	let max_radius = (cx.min(cy) - RING_MARGIN).max(0.0);
	let max_depth = levels.len() - 1;

	for (depth, states) in levels.iter().enumerate() {
		let radius = if max_depth > 0 {
			max_radius * depth as f64 / max_depth as f64
		} else {
			0.0
		};
		let angle_step = if states.len() > 1 {
			TAU / states.len() as f64
		} else {
			0.0
		};
		for (i, state) in states.iter().enumerate() {
			let angle = i as f64 * angle_step;
			positions.insert(
				(*state).clone(),
				Position::new(cx + radius * angle.cos(), cy + radius * angle.sin()),
			);
		}
	}
	positions
}
