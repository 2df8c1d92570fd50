//! Tower-of-Hanoi state-graph engine.
//!
//! The engine is synchronous and target independent. A build produces a
//! [`NodeTable`]; layouts, path finding and statistics all read that table
//! and return new values rather than updating anything in place.
//!
//! ```
//! use hanoi_state_graph::engine::{DepthBound, LayoutKind, build, layout, solution_path, stats};
//!
//! let table = build(3, DepthBound::Unbounded);
//! let positions = layout(LayoutKind::Radial, &table, 1200.0, 800.0);
//! assert_eq!(positions.len(), 27);
//! assert_eq!(solution_path(&table, 3).len(), 8);
//! assert_eq!(stats(&table).total_nodes, 27);
//! ```

pub mod canvas;
pub mod layout;
pub mod path;
pub mod session;
pub mod state;
pub mod stats;
pub mod tree;

pub use canvas::{CanvasSize, canvas_size, node_at};
pub use layout::{LayoutKind, Position, PositionTable, layout, layout_seeded};
pub use path::{find_path, solution_path};
pub use session::{Explorer, Playback};
pub use state::{Configuration, Peg};
pub use stats::{Stats, stats};
pub use tree::{DepthBound, Node, NodeTable, build};
