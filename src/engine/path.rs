use std::collections::{HashMap, HashSet, VecDeque};

use super::state::Configuration;
use super::tree::NodeTable;

/// Shortest route from `start` to `goal` along the tree's child links.
///
/// Both ends are included. Empty when the goal has not been discovered yet
/// or `start` is not in the table.
pub fn find_path(
	table: &NodeTable,
	start: &Configuration,
	goal: &Configuration,
) -> Vec<Configuration> {
	if !table.contains(start) {
		return Vec::new();
	}

	let mut came_from: HashMap<&Configuration, &Configuration> = HashMap::new();
	let mut visited: HashSet<&Configuration> = HashSet::from([start]);
	let mut queue = VecDeque::from([start]);

	while let Some(state) = queue.pop_front() {
		if state == goal {
			return unwind(&came_from, start, state);
		}
		let Some(node) = table.get(state) else {
			continue;
		};
		for child in &node.children {
			if visited.insert(child) {
				came_from.insert(child, state);
				queue.push_back(child);
			}
		}
	}
	Vec::new()
}

fn unwind(
	came_from: &HashMap<&Configuration, &Configuration>,
	start: &Configuration,
	goal: &Configuration,
) -> Vec<Configuration> {
	let mut path = vec![goal.clone()];
	let mut current = goal;
	while current != start {
		match came_from.get(current) {
			Some(&prev) => {
				path.push(prev.clone());
				current = prev;
			}
			None => return Vec::new(),
		}
	}
	path.reverse();
	path
}

/// Path from the all-left start to the all-right goal.
pub fn solution_path(table: &NodeTable, disk_count: usize) -> Vec<Configuration> {
	find_path(
		table,
		&Configuration::start(disk_count),
		&Configuration::goal(disk_count),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::tree::{DepthBound, build};

	#[test]
	fn full_tree_yields_optimal_solution() {
		for n in 1..=5usize {
			let table = build(n, DepthBound::Unbounded);
			let path = solution_path(&table, n);
			assert_eq!(path.len(), 1 << n, "n={n}");
			assert_eq!(path.first(), Some(&Configuration::start(n)));
			assert_eq!(path.last(), Some(&Configuration::goal(n)));
		}
	}

	#[test]
	fn consecutive_states_are_one_move_apart() {
		let table = build(3, DepthBound::Unbounded);
		let path = solution_path(&table, 3);
		for pair in path.windows(2) {
			assert!(pair[0].legal_moves().contains(&pair[1]), "{} -> {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn shallow_tree_has_no_path() {
		let table = build(3, DepthBound::Max(2));
		assert!(solution_path(&table, 3).is_empty());
	}

	#[test]
	fn empty_table_has_no_path() {
		assert!(solution_path(&NodeTable::default(), 3).is_empty());
	}

	#[test]
	fn start_equal_to_goal_is_single_state() {
		let table = build(2, DepthBound::Max(0));
		let root = Configuration::start(2);
		assert_eq!(find_path(&table, &root, &root), vec![root]);
	}

	#[test]
	fn path_between_inner_nodes_follows_children() {
		let table = build(2, DepthBound::Unbounded);
		let from: Configuration = "BA".parse().unwrap();
		let to = table.get(&from).unwrap().children[0].clone();
		assert_eq!(find_path(&table, &from, &to), vec![from, to]);
	}
}
