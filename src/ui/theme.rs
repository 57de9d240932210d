use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Slate,
    Indigo,
    Emerald,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Slate, ThemePreset::Indigo, ThemePreset::Emerald]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Slate => "Slate",
            ThemePreset::Indigo => "Indigo",
            ThemePreset::Emerald => "Emerald",
        }
    }

    /// Parse a preset from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Slate => Theme::slate(),
            ThemePreset::Indigo => Theme::indigo(),
            ThemePreset::Emerald => Theme::emerald(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_card: Color32,
    pub bg_light: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_pressed: Color32,

    pub error: Color32,
    pub border: Color32,
}

impl Theme {
    /// Slate background with a blue accent
    pub fn slate() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(2, 6, 23),    // Slate-950
            bg_dark: Color32::from_rgb(15, 23, 42),     // Slate-900
            bg_card: Color32::from_rgb(22, 31, 52),
            bg_light: Color32::from_rgb(30, 41, 59),    // Slate-800

            text_primary: Color32::from_rgb(241, 245, 249),   // Slate-100
            text_secondary: Color32::from_rgb(203, 213, 225), // Slate-300
            text_muted: Color32::from_rgb(148, 163, 184),     // Slate-400

            accent: Color32::from_rgb(59, 130, 246),         // Blue-500
            accent_hover: Color32::from_rgb(37, 99, 235),    // Blue-600
            accent_pressed: Color32::from_rgb(29, 78, 216),  // Blue-700

            error: Color32::from_rgb(248, 113, 113), // Red-400
            border: Color32::from_rgb(51, 65, 85),   // Slate-700
        }
    }

    /// Deep indigo background with a violet accent
    pub fn indigo() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(15, 12, 41),
            bg_dark: Color32::from_rgb(30, 27, 75),   // Indigo-950
            bg_card: Color32::from_rgb(40, 36, 94),
            bg_light: Color32::from_rgb(55, 48, 163), // Indigo-800

            text_primary: Color32::from_rgb(238, 242, 255),
            text_secondary: Color32::from_rgb(199, 210, 254),
            text_muted: Color32::from_rgb(165, 180, 252),

            accent: Color32::from_rgb(139, 92, 246),        // Violet-500
            accent_hover: Color32::from_rgb(124, 58, 237),  // Violet-600
            accent_pressed: Color32::from_rgb(109, 40, 217), // Violet-700

            error: Color32::from_rgb(251, 113, 133), // Rose-400
            border: Color32::from_rgb(67, 56, 202),  // Indigo-700
        }
    }

    /// Near-black green background with an emerald accent
    pub fn emerald() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(3, 12, 9),
            bg_dark: Color32::from_rgb(6, 24, 18),
            bg_card: Color32::from_rgb(12, 36, 28),
            bg_light: Color32::from_rgb(6, 78, 59), // Emerald-900

            text_primary: Color32::from_rgb(236, 253, 245),
            text_secondary: Color32::from_rgb(167, 243, 208),
            text_muted: Color32::from_rgb(110, 190, 160),

            accent: Color32::from_rgb(16, 185, 129),       // Emerald-500
            accent_hover: Color32::from_rgb(5, 150, 105),  // Emerald-600
            accent_pressed: Color32::from_rgb(4, 120, 87), // Emerald-700

            error: Color32::from_rgb(252, 165, 165), // Red-300
            border: Color32::from_rgb(6, 95, 70),    // Emerald-800
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_darkest;
        visuals.faint_bg_color = self.bg_card;
        visuals.extreme_bg_color = self.bg_darkest;

        visuals.widgets.noninteractive.bg_fill = self.bg_card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        // Buttons are accent-filled, darkening on hover and press
        visuals.widgets.inactive.bg_fill = self.accent;
        visuals.widgets.inactive.weak_bg_fill = self.accent;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.accent_hover;
        visuals.widgets.hovered.weak_bg_fill = self.accent_hover;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent_pressed;
        visuals.widgets.active.weak_bg_fill = self.accent_pressed;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.open.bg_fill = self.bg_light;
        visuals.widgets.open.weak_bg_fill = self.bg_light;

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
