//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure geometry and timing math lives here next to the small amount of
//! browser glue (`dark_mode`, `viewport`) so components stay declarative and
//! the math stays testable without a DOM.

pub mod chart;
pub mod color;
pub mod dark_mode;
pub mod filter;
pub mod highlight;
pub mod keyframes;
pub mod liveness;
pub mod scroll;
pub mod spring;
pub mod viewport;
