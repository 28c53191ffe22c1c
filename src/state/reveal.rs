//! One-way section reveal.
//!
//! Sections start hidden and transition to revealed the first time they
//! intersect the viewport. The transition fires exactly once: scrolling
//! away and back, or reversing direction, never un-reveals. After firing,
//! an animation fraction ramps 0→1 and drives a short slide-up (from a
//! 3-row offset) plus a fade.

/// Rows a section starts below its resting position.
pub const SLIDE_ROWS: u16 = 3;

/// Seconds for the reveal animation to complete.
pub const REVEAL_DURATION: f32 = 0.5;

/// Minimum brightness at the start of the fade.
const DIM_FLOOR: f32 = 0.25;

/// Where a section is in its reveal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Not yet seen; renders hidden.
    #[default]
    Pending,
    /// Seen at least once; never goes back.
    Revealed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    phase: RevealPhase,
    fraction: f32,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Animation fraction in `[0, 1]`. Zero while pending.
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Feed the current viewport intersection.
    ///
    /// Returns `true` if this call fired the transition. `visible = false`
    /// never changes anything.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && self.phase == RevealPhase::Pending {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Returns `true` while the animation is still running (more frames
    /// wanted). Pending sections never animate.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.phase == RevealPhase::Pending || self.fraction >= 1.0 {
            return false;
        }
        self.fraction = (self.fraction + dt / REVEAL_DURATION).min(1.0);
        self.fraction < 1.0
    }

    /// Rows the section still sits below its resting position.
    pub fn slide_rows(&self) -> u16 {
        match self.phase {
            RevealPhase::Pending => SLIDE_ROWS,
            RevealPhase::Revealed => ((1.0 - self.fraction) * SLIDE_ROWS as f32).round() as u16,
        }
    }

    /// Brightness factor for the fade, `[DIM_FLOOR, 1]`.
    pub fn dim_factor(&self) -> f32 {
        match self.phase {
            RevealPhase::Pending => DIM_FLOOR,
            RevealPhase::Revealed => DIM_FLOOR + (1.0 - DIM_FLOOR) * self.fraction,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
