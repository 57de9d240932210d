//! UI-related application state

use crate::ui::theme::{Theme, ThemePreset};

/// UI-related state
pub struct UiState {
    /// Selected theme preset
    pub theme_preset: ThemePreset,
    /// Colors of the selected preset
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
    /// Whether the last trigger was refused for lack of sign-in
    pub show_sign_in_hint: bool,
}

impl UiState {
    pub fn new(preset: ThemePreset) -> Self {
        Self {
            theme_preset: preset,
            current_theme: preset.theme(),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
            show_sign_in_hint: false,
        }
    }

    /// Switch to another preset; applied on the next frame
    pub fn set_preset(&mut self, preset: ThemePreset) {
        if preset != self.theme_preset {
            self.theme_preset = preset;
            self.current_theme = preset.theme();
            self.theme_dirty = true;
        }
    }
}
