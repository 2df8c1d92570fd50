use hanoi_state_graph::engine::{
	Configuration, DepthBound, LayoutKind, Peg, Position, Stats, build, canvas_size, layout,
	layout_seeded, solution_path, stats,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

#[test]
fn full_tree_sizes_are_powers_of_three() {
	for n in 1..=6usize {
		let table = build(n, DepthBound::Unbounded);
		assert_eq!(table.len(), 3usize.pow(n as u32), "n={n}");
	}
}

#[test]
fn solution_needs_two_to_the_n_minus_one_moves() {
	for n in 1..=6usize {
		let table = build(n, DepthBound::Unbounded);
		let path = solution_path(&table, n);
		assert_eq!(path.len(), 1 << n, "n={n}");
	}
	let three = solution_path(&build(3, DepthBound::Unbounded), 3);
	let text: Vec<String> = three.iter().map(ToString::to_string).collect();
	assert_eq!(text.first().map(String::as_str), Some("AAA"));
	assert_eq!(text.last().map(String::as_str), Some("CCC"));
}

#[test]
fn root_only_build_for_every_disk_count() {
	for n in 1..=6 {
		let table = build(n, DepthBound::from(-1));
		assert_eq!(table.len(), 1);
		assert_eq!(
			stats(&table),
			Stats {
				total_nodes: 1,
				total_moves: 0,
				tree_depth: 0,
				solution_path_length: 0,
			}
		);
	}
}

#[test]
fn hierarchical_rows_fit_a_sized_canvas() {
	for n in 1..=5 {
		let table = build(n, DepthBound::Unbounded);
		let size = canvas_size(&table, 1260.0);
		let positions = layout(LayoutKind::Hierarchical, &table, size.width, size.height);
		let levels = table.levels();
		for (state, node) in table.iter() {
			let p = positions[state];
			assert!((0.0..=size.width).contains(&p.x), "n={n} {state} x={}", p.x);
			let row_y = positions[levels[node.depth][0]].y;
			assert_eq!(p.y, row_y);
		}
	}
}

#[test]
fn radial_rings_span_center_to_max_radius() {
	let table = build(4, DepthBound::Unbounded);
	let positions = layout(LayoutKind::Radial, &table, 1200.0, 900.0);
	let center = Position::new(600.0, 450.0);
	let max_radius = 450.0 - 150.0;
	let max_depth = table.max_depth().unwrap();

	assert!(positions[&Configuration::start(4)].distance_to(&center) < TOLERANCE);
	for (state, node) in table.iter().filter(|(_, n)| n.depth == max_depth) {
		let d = positions[state].distance_to(&center);
		assert!((d - max_radius).abs() < TOLERANCE, "{state}: {d}");
	}
}

#[test]
fn unknown_layout_name_lays_out_hierarchically() {
	let table = build(3, DepthBound::Max(2));
	let fallback = layout(LayoutKind::from_name("treemap"), &table, 1200.0, 800.0);
	assert_eq!(fallback, layout(LayoutKind::Hierarchical, &table, 1200.0, 800.0));
}

fn peg() -> impl Strategy<Value = Peg> {
	prop_oneof![Just(Peg::Left), Just(Peg::Middle), Just(Peg::Right)]
}

proptest! {
	#[test]
	fn random_walks_change_one_disk_per_move(
		n in 1usize..=6,
		choices in prop::collection::vec(any::<prop::sample::Index>(), 1..40),
	) {
		let mut current = Configuration::start(n);
		for choice in choices {
			let moves = current.legal_moves();
			prop_assert!(!moves.is_empty());
			prop_assert!(moves.len() <= 6);
			let next = moves[choice.index(moves.len())].clone();
			prop_assert_eq!(next.disk_count(), n);
			let changed = current
				.pegs_slice()
				.iter()
				.zip(next.pegs_slice())
				.filter(|(a, b)| a != b)
				.count();
			prop_assert_eq!(changed, 1);
			current = next;
		}
	}

	#[test]
	fn any_configuration_has_two_or_three_moves(pegs in prop::collection::vec(peg(), 1..=6)) {
		let text: String = pegs.iter().map(|p| p.label()).collect();
		let config: Configuration = text.parse().unwrap();
		let moves = config.legal_moves();
		// The top disk of the whole puzzle always has two targets; one more
		// move exists unless every disk shares a single peg.
		let occupied = pegs.iter().collect::<std::collections::HashSet<_>>().len();
		prop_assert_eq!(moves.len(), if occupied == 1 { 2 } else { 3 });
	}

	#[test]
	fn deeper_bounds_extend_shallower_trees(n in 1usize..=4, bound in 0usize..16) {
		let shallow = build(n, DepthBound::Max(bound));
		let deep = build(n, DepthBound::Max(bound + 1));
		prop_assert!(deep.len() >= shallow.len());
		for (state, node) in shallow.iter() {
			let other = deep.get(state);
			prop_assert!(other.is_some(), "{} missing", state);
			let other = other.unwrap();
			prop_assert_eq!(other.depth, node.depth);
			prop_assert_eq!(&other.parent, &node.parent);
		}
	}

	#[test]
	fn force_layout_respects_margins(
		n in 1usize..=3,
		bound in -1i64..8,
		seed in any::<u64>(),
		width in 200.0f64..1600.0,
		height in 200.0f64..1200.0,
	) {
		let table = build(n, DepthBound::from(bound));
		let positions = layout_seeded(LayoutKind::Force, &table, width, height, seed);
		prop_assert_eq!(positions.len(), table.len());
		for p in positions.values() {
			prop_assert!((100.0..=width - 100.0).contains(&p.x));
			prop_assert!((100.0..=height - 100.0).contains(&p.y));
		}
	}
}
