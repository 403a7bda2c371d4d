//! Records produced for external tooling.

pub mod streamlines;

pub use streamlines::{BOX_EDGES, CellBox, Highlight, Streamline};
