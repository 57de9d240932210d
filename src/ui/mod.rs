//! UI modules for the idea generator
//!
//! Rendering code split out of IdeaApp: the idea panel and the shared chrome
//! around it.

mod components;
mod idea_panel;
pub mod theme;

pub use components::{render_about_dialog, render_top_bar};
pub use idea_panel::render_idea_panel;
