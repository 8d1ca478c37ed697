//! Piecewise-linear keyframe interpolation.
//!
//! Every animated scalar on the page (opacity, translation, rotation, scale)
//! is a function of a progress value in `[0, 1]`. Keyframes are `(t, value)`
//! pairs; outside the first/last `t` the output clamps to that keyframe.

#[cfg(test)]
#[path = "keyframes_test.rs"]
mod keyframes_test;

/// Interpolate `progress` across sorted `(t, value)` keyframes.
///
/// Empty input yields `0.0`. A single keyframe is a constant.
pub fn interpolate(progress: f64, frames: &[(f64, f64)]) -> f64 {
    let Some(&(first_t, first_v)) = frames.first() else {
        return 0.0;
    };
    if !progress.is_finite() || progress <= first_t {
        return first_v;
    }
    for pair in frames.windows(2) {
        let (t0, v0) = pair[0];
        let (t1, v1) = pair[1];
        if progress <= t1 {
            let span = t1 - t0;
            if span <= 0.0 {
                return v1;
            }
            return v0 + (v1 - v0) * ((progress - t0) / span);
        }
    }
    frames.last().map_or(first_v, |&(_, v)| v)
}

/// Owned keyframe track, sorted by `t` on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    frames: Vec<(f64, f64)>,
}

impl Keyframes {
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Self {
        let mut frames: Vec<(f64, f64)> = inputs.iter().copied().zip(outputs.iter().copied()).collect();
        frames.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { frames }
    }

    /// Two-point track from `0.0 -> from` to `1.0 -> to`.
    pub fn linear(from: f64, to: f64) -> Self {
        Self { frames: vec![(0.0, from), (1.0, to)] }
    }

    pub fn at(&self, progress: f64) -> f64 {
        interpolate(progress, &self.frames)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
