//! Spring filter for the scroll progress indicator.
//!
//! The raw progress value jumps in steps as the page scrolls by whole rows;
//! the indicator follows it through a damped spring so the bar glides. The
//! tuning (stiffness 100, damping 30) is overdamped (damping ratio 1.5),
//! so the output never overshoots its target: while the target only
//! increases, the filtered value is monotone non-decreasing.

pub const STIFFNESS: f32 = 100.0;
pub const DAMPING: f32 = 30.0;

/// Below this distance (and velocity) the spring snaps to rest.
pub const REST_DELTA: f32 = 0.001;

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    pub fn new(initial: f32) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            stiffness: STIFFNESS,
            damping: DAMPING,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to a value with no animation.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring is at rest on its target.
    pub fn settled(&self) -> bool {
        (self.target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_DELTA
    }

    /// Advance the simulation by `dt` seconds. Returns the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }

        let accel = self.stiffness * (self.target - self.position) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        if self.settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }

        self.position
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);

        for _ in 0..600 {
            spring.step(DT);
        }

        assert!(spring.settled());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_spring_never_overshoots() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);

        for _ in 0..600 {
            let v = spring.step(DT);
            assert!(v <= 1.0 + REST_DELTA, "overshot: {v}");
        }
    }

    #[test]
    fn test_spring_monotone_under_increasing_target() {
        let mut spring = Spring::new(0.0);
        let mut last = 0.0;

        // Target ratchets upward as a downward scroll would drive it
        for i in 0..300 {
            spring.set_target((i as f32 / 299.0).min(1.0));
            let v = spring.step(DT);
            assert!(v >= last - REST_DELTA, "regressed: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn test_snap_to() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.step(DT);

        spring.snap_to(0.5);
        assert_eq!(spring.value(), 0.5);
        assert!(spring.settled());
    }

    #[test]
    fn test_settled_spring_holds() {
        let mut spring = Spring::new(0.3);
        assert!(spring.settled());
        assert_eq!(spring.step(DT), 0.3);
    }
}
