//! Damped spring follower used to smooth scroll-linked parallax layers.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

pub const DEFAULT_STIFFNESS: f64 = 100.0;
pub const DEFAULT_DAMPING: f64 = 30.0;
pub const DEFAULT_MASS: f64 = 1.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;
/// Larger frame gaps are split so the integration stays stable.
const MAX_STEP_SECS: f64 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(initial: f64) -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance the simulation by `dt_secs` and return the new value.
    ///
    /// Snaps onto the target once both distance and speed are below rest
    /// thresholds.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        let mut remaining = dt_secs.max(0.0);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            let displacement = self.value - self.target;
            let force = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += force / self.mass * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Step every spring by `dt_secs`; `true` while any of them is still moving.
pub fn step_all(springs: &mut [Spring], dt_secs: f64) -> bool {
    let mut moving = false;
    for spring in springs.iter_mut() {
        spring.step(dt_secs);
        moving |= !spring.is_settled();
    }
    moving
}
