//! Terminal rendering pipeline.
//!
//! FrameBuffer (what to show) → DiffRenderer (what changed) →
//! StatefulCellRenderer (minimal escape codes) → OutputBuffer (one flush).

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
