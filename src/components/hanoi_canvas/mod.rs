//! Canvas view of the state tree.
//!
//! Draws the tree edges and one tower miniature per configuration at the
//! positions computed by the engine, and reports hover and click hits back
//! through a shared [`Highlight`].

mod component;
mod render;
mod state;

pub use component::HanoiCanvas;
pub use state::Highlight;
