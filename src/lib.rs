//! folio-tui - a single-page personal portfolio rendered as a reactive
//! terminal UI.
//!
//! The page is a vertical document of sections (hero, projects, work and
//! education timelines, skills, contact, footer) rendered into a tall frame
//! buffer; the terminal window is a viewport scrolled over it. Scroll
//! position drives the fixed chrome: a spring-smoothed progress bar, the
//! navbar's opaque-after-threshold styling, and one-way section reveal
//! transitions.
//!
//! # Architecture
//!
//! - [`content`] - the immutable dataset
//! - [`types`] / [`renderer`] - cells, colors, and the diff-based pipeline
//! - [`layout`] - text measurement and the Taffy-backed document column
//! - [`state`] - scroll offset, spring filter, reveal lifecycle
//! - [`theme`] - semantic color presets
//! - [`sections`] - pure view functions, one per page section
//! - [`shell`] / [`app`] - composition root and the event loop

pub mod app;
pub mod content;
pub mod layout;
pub mod renderer;
pub mod sections;
pub mod shell;
pub mod state;
pub mod theme;
pub mod types;

pub use app::{run, AppConfig};
pub use content::Content;
pub use shell::Shell;
