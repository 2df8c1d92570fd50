use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::state::Highlight;
use crate::engine::{Configuration, Explorer, Position};

const DISK_COLORS: &[&str] = &[
	"#e41a1c", "#377eb8", "#4daf4a", "#ff7f00", "#984ea3", "#a65628", "#f781bf", "#999999",
];

const NODE_RADIUS: f64 = 30.0;
const HOVER_RADIUS: f64 = 35.0;
const DISK_HEIGHT: f64 = 6.0;

pub fn render(explorer: &Explorer, highlight: &Highlight, ctx: &CanvasRenderingContext2d) {
	let canvas = explorer.canvas();
	ctx.clear_rect(0.0, 0.0, canvas.width, canvas.height);
	if explorer.positions().is_empty() {
		return;
	}
	draw_edges(explorer, ctx);
	draw_nodes(explorer, highlight, ctx);
}

fn draw_edges(explorer: &Explorer, ctx: &CanvasRenderingContext2d) {
	let positions = explorer.positions();
	ctx.set_stroke_style_str("#dee2e6");
	ctx.set_line_width(2.0);
	for (parent, child) in explorer.table().edges() {
		let (Some(from), Some(to)) = (positions.get(parent), positions.get(child)) else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}

fn draw_nodes(explorer: &Explorer, highlight: &Highlight, ctx: &CanvasRenderingContext2d) {
	let positions = explorer.positions();
	for state in explorer.table().keys() {
		if let Some(pos) = positions.get(state) {
			draw_node(state, pos, highlight, ctx);
		}
	}
}

fn draw_node(state: &Configuration, pos: &Position, highlight: &Highlight, ctx: &CanvasRenderingContext2d) {
	let (hovered, selected) = (highlight.is_hovered(state), highlight.is_selected(state));
	let radius = if hovered { HOVER_RADIUS } else { NODE_RADIUS };

	ctx.begin_path();
	let _ = ctx.arc(pos.x, pos.y, radius, 0.0, TAU);
	ctx.set_fill_style_str(if selected {
		"#667eea"
	} else if hovered {
		"#a8b5ff"
	} else {
		"#ffffff"
	});
	ctx.fill();
	ctx.set_stroke_style_str(if hovered { "#667eea" } else { "#dee2e6" });
	ctx.set_line_width(if hovered { 3.0 } else { 2.0 });
	ctx.stroke();

	draw_tower(state, pos, radius, ctx);

	ctx.set_fill_style_str("#495057");
	ctx.set_font("bold 12px Arial");
	ctx.set_text_align("center");
	let _ = ctx.fill_text(&state.to_string(), pos.x, pos.y + radius + 20.0);
}

/// Three pegs with the configuration's disks stacked on them, widest at the
/// bottom.
fn draw_tower(state: &Configuration, pos: &Position, radius: f64, ctx: &CanvasRenderingContext2d) {
	let peg_xs = [pos.x - radius * 0.4, pos.x, pos.x + radius * 0.4];

	ctx.set_stroke_style_str("#6c757d");
	ctx.set_line_width(3.0);
	for x in peg_xs {
		ctx.begin_path();
		ctx.move_to(x, pos.y - radius * 0.6);
		ctx.line_to(x, pos.y + radius * 0.6);
		ctx.stroke();
	}

	ctx.set_stroke_style_str("#000000");
	ctx.set_line_width(1.0);
	for (x, disks) in peg_xs.into_iter().zip(state.pegs()) {
		// Higher index is the wider disk and sits lower.
		for (level, disk) in disks.into_iter().rev().enumerate() {
			let width = (disk + 1) as f64 * 4.0;
			let y = pos.y + radius * 0.4 - level as f64 * DISK_HEIGHT;
			ctx.set_fill_style_str(DISK_COLORS[disk % DISK_COLORS.len()]);
			ctx.fill_rect(x - width / 2.0, y - DISK_HEIGHT / 2.0, width, DISK_HEIGHT);
			ctx.stroke_rect(x - width / 2.0, y - DISK_HEIGHT / 2.0, width, DISK_HEIGHT);
		}
	}
}
