use super::tree::NodeTable;

/// Summary counts shown alongside the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
	pub total_nodes: usize,
	/// Number of parent/child links recorded in the tree.
	pub total_moves: usize,
	pub tree_depth: usize,
	/// Equal to `tree_depth`; only the optimal move count once the tree
	/// reaches the goal.
	pub solution_path_length: usize,
}

pub fn stats(table: &NodeTable) -> Stats {
	let tree_depth = table.max_depth().unwrap_or(0);
	Stats {
		total_nodes: table.len(),
		total_moves: table.iter().map(|(_, node)| node.children.len()).sum(),
		tree_depth,
		solution_path_length: tree_depth,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::tree::{DepthBound, build};

	#[test]
	fn empty_table_is_all_zero() {
		assert_eq!(stats(&NodeTable::default()), Stats::default());
	}

	#[test]
	fn root_only() {
		let s = stats(&build(4, DepthBound::RootOnly));
		assert_eq!(
			s,
			Stats {
				total_nodes: 1,
				total_moves: 0,
				tree_depth: 0,
				solution_path_length: 0,
			}
		);
	}

	#[test]
	fn full_tree_counts() {
		let s = stats(&build(3, DepthBound::Unbounded));
		assert_eq!(s.total_nodes, 27);
		assert_eq!(s.total_moves, 26);
		assert_eq!(s.tree_depth, 7);
		assert_eq!(s.solution_path_length, 7);
	}
}
