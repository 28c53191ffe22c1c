//! Scroll-reactive page state: offset, smoothed progress, section reveals.

pub mod reveal;
pub mod scroll;
pub mod spring;

pub use reveal::{Reveal, RevealPhase};
pub use scroll::{ScrollState, SCROLL_THRESHOLD};
pub use spring::Spring;
