//! Application state modules
//!
//! State structs own their fields and poll methods. Results flow back to
//! IdeaApp as events instead of direct mutation.

mod idea;
mod ui;

pub use idea::{IdeaState, RequestState};
pub use ui::UiState;

/// Events that state poll methods can return.
#[derive(Debug)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// A fetch was refused because nobody is signed in
    AuthRequired,

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
