//! Breadth-first construction of the puzzle's state tree.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::debug;

use super::state::Configuration;

/// How deep a build may expand.
///
/// Nodes at depth `<= n` under [`DepthBound::Max`] are expanded, so their
/// children one level further down are discovered but never expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DepthBound {
	/// Only the root, nothing expanded.
	#[default]
	RootOnly,
	Max(usize),
	Unbounded,
}

impl DepthBound {
	/// Whether a node at `depth` gets its successors enumerated.
	pub fn expands(self, depth: usize) -> bool {
		match self {
			DepthBound::RootOnly => false,
			DepthBound::Max(max) => depth <= max,
			DepthBound::Unbounded => true,
		}
	}

	/// The next bound when growing the tree by one level.
	pub fn deeper(self) -> Self {
		match self {
			DepthBound::RootOnly => DepthBound::Max(0),
			DepthBound::Max(max) => DepthBound::Max(max + 1),
			DepthBound::Unbounded => DepthBound::Unbounded,
		}
	}

	/// Signed form where `-1` means root only and `None` means unbounded.
	pub fn as_signed(self) -> Option<i64> {
		match self {
			DepthBound::RootOnly => Some(-1),
			DepthBound::Max(max) => Some(max as i64),
			DepthBound::Unbounded => None,
		}
	}
}

impl From<i64> for DepthBound {
	fn from(bound: i64) -> Self {
		if bound < 0 {
			DepthBound::RootOnly
		} else {
			DepthBound::Max(bound as usize)
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	pub depth: usize,
	pub parent: Option<Configuration>,
	/// In discovery order.
	pub children: Vec<Configuration>,
}

/// The BFS tree: one node per discovered configuration.
///
/// Iteration follows discovery order, which is also non-decreasing depth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeTable {
	nodes: HashMap<Configuration, Node>,
	order: Vec<Configuration>,
}

impl NodeTable {
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn get(&self, state: &Configuration) -> Option<&Node> {
		self.nodes.get(state)
	}

	pub fn contains(&self, state: &Configuration) -> bool {
		self.nodes.contains_key(state)
	}

	pub fn root(&self) -> Option<&Configuration> {
		self.order.first()
	}

	pub fn keys(&self) -> impl Iterator<Item = &Configuration> {
		self.order.iter()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Configuration, &Node)> {
		self.order.iter().map(|state| (state, &self.nodes[state]))
	}

	/// Parent/child pairs, parents in discovery order.
	pub fn edges(&self) -> impl Iterator<Item = (&Configuration, &Configuration)> {
		self.iter()
			.flat_map(|(state, node)| node.children.iter().map(move |child| (state, child)))
	}

	pub fn max_depth(&self) -> Option<usize> {
		self.nodes.values().map(|node| node.depth).max()
	}

	/// States grouped by depth; level `d` lists depth-`d` states in discovery
	/// order.
	pub fn levels(&self) -> Vec<Vec<&Configuration>> {
		let mut levels: Vec<Vec<&Configuration>> = Vec::new();
		for (state, node) in self.iter() {
			if levels.len() <= node.depth {
				levels.resize_with(node.depth + 1, Vec::new);
			}
			levels[node.depth].push(state);
		}
		levels
	}

	fn insert_root(&mut self, root: Configuration) {
		self.nodes.insert(
			root.clone(),
			Node {
				depth: 0,
				parent: None,
				children: Vec::new(),
			},
		);
		self.order.push(root);
	}

	/// Records `child` under `parent` unless it was seen before.
	fn discover(&mut self, parent: &Configuration, child: Configuration, depth: usize) -> bool {
		match self.nodes.entry(child.clone()) {
			Entry::Occupied(_) => return false,
			Entry::Vacant(slot) => {
				slot.insert(Node {
					depth,
					parent: Some(parent.clone()),
					children: Vec::new(),
				});
			}
		}
		if let Some(node) = self.nodes.get_mut(parent) {
			node.children.push(child.clone());
		}
		self.order.push(child);
		true
	}
}

/// Builds the BFS tree rooted at the all-left configuration.
///
/// `disk_count` must be at least 1. Every configuration is recorded at most
/// once, under the first parent that reaches it.
pub fn build(disk_count: usize, bound: DepthBound) -> NodeTable {
	debug_assert!(disk_count >= 1, "a puzzle needs at least one disk");

	let root = Configuration::start(disk_count);
	let mut table = NodeTable::default();
	table.insert_root(root.clone());

	let mut queue = VecDeque::from([(root, 0usize)]);
	while let Some((state, depth)) = queue.pop_front() {
		if !bound.expands(depth) {
			continue;
		}
		for child in state.legal_moves() {
			if table.discover(&state, child.clone(), depth + 1) {
				queue.push_back((child, depth + 1));
			}
		}
	}

	debug!(
		"built state tree: disks={disk_count} bound={bound:?} nodes={} depth={:?}",
		table.len(),
		table.max_depth()
	);
	table
}
