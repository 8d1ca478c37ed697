//! Page section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section owns its entrance latch and timers, reads the shared theme
//! from context, and renders static content from module-level tables.

pub mod about;
pub mod code_editor;
pub mod contact;
pub mod cta;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod loader;
pub mod navbar;
pub mod parallax_section;
pub mod projects;
pub mod scroll_to_top;
pub mod section_heading;
pub mod services;
pub mod skills;
pub mod skills_chart;
pub mod testimonials;
pub mod workstation;
