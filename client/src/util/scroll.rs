//! Scroll-progress mapping for scroll-linked sections.
//!
//! Progress is `0.0` when the element's top edge meets the viewport bottom
//! and `1.0` when its bottom edge leaves the viewport top. Layer tracks map
//! that progress to a [`Transform`] through [`Keyframes`].

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use super::keyframes::Keyframes;

/// Progress of an element through the viewport, clamped to `[0, 1]`.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 || !travel.is_finite() {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

/// Resolved transform for one animated layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { translate_y: 0.0, rotate_deg: 0.0, scale: 1.0, opacity: 1.0 }
    }
}

impl Transform {
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({:.2}px) rotate({:.2}deg) scale({:.3}); opacity: {:.3};",
            self.translate_y, self.rotate_deg, self.scale, self.opacity
        )
    }
}

/// Optional per-property tracks; a missing track leaves the default value.
#[derive(Clone, Debug, Default)]
pub struct LayerTracks {
    pub translate_y: Option<Keyframes>,
    pub rotate: Option<Keyframes>,
    pub scale: Option<Keyframes>,
    pub opacity: Option<Keyframes>,
}

impl LayerTracks {
    pub fn resolve(&self, progress: f64) -> Transform {
        let base = Transform::default();
        Transform {
            translate_y: self.translate_y.as_ref().map_or(base.translate_y, |k| k.at(progress)),
            rotate_deg: self.rotate.as_ref().map_or(base.rotate_deg, |k| k.at(progress)),
            scale: self.scale.as_ref().map_or(base.scale, |k| k.at(progress)),
            opacity: self.opacity.as_ref().map_or(base.opacity, |k| k.at(progress)),
        }
    }
}

/// Scale pulse shared by the parallax band and the workstation.
pub fn pulse_scale() -> Keyframes {
    Keyframes::new(&[0.0, 0.5, 1.0], &[0.8, 1.0, 0.8])
}

/// Fade in over the first fifth, hold, fade out over the last fifth.
pub fn band_opacity() -> Keyframes {
    Keyframes::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])
}

/// Decorative layers of the achievements parallax band.
pub struct ParallaxLayers {
    pub y1: Keyframes,
    pub y2: Keyframes,
    pub y3: Keyframes,
    pub y4: Keyframes,
    pub rotate1: Keyframes,
    pub rotate2: Keyframes,
    pub scale: Keyframes,
    pub opacity: Keyframes,
}

impl Default for ParallaxLayers {
    fn default() -> Self {
        Self {
            y1: Keyframes::linear(0.0, -200.0),
            y2: Keyframes::linear(0.0, -100.0),
            y3: Keyframes::linear(0.0, -300.0),
            y4: Keyframes::linear(0.0, 150.0),
            rotate1: Keyframes::linear(0.0, 45.0),
            rotate2: Keyframes::linear(0.0, -30.0),
            scale: pulse_scale(),
            opacity: band_opacity(),
        }
    }
}

/// Workstation illustration tracks.
pub fn workstation_tracks() -> LayerTracks {
    LayerTracks {
        translate_y: Some(Keyframes::linear(100.0, -100.0)),
        rotate: Some(Keyframes::linear(0.0, 10.0)),
        scale: Some(pulse_scale()),
        opacity: None,
    }
}
