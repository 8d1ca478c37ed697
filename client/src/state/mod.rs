//! Client state machines.
//!
//! DESIGN
//! ======
//! Each module is plain data plus transitions; components hold them in
//! signals and drive them from timers or DOM events.

pub mod carousel;
pub mod code_preview;
pub mod contact;
pub mod loader;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod typewriter;
