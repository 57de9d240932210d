use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui;

use crate::auth::{AuthGate, LocalSession};
use crate::client::IdeaClient;
use crate::config::Config;
use crate::state::{IdeaState, StateEvent, UiState};
use crate::ui::{self, theme::ThemePreset};

/// Main application state
pub struct IdeaApp {
    /// Application configuration
    pub(crate) config: Config,
    /// Where config edits are saved; None leaves the file untouched
    pub(crate) config_path: Option<PathBuf>,
    /// Resolved backend origin
    pub(crate) origin: String,
    /// Idea widget state
    pub(crate) idea: IdeaState,
    /// Sign-in session, present only when sign-in is required
    pub(crate) session: Option<LocalSession>,
    /// UI state (theme, dialogs)
    pub(crate) ui: UiState,
    /// Status message for the status bar
    pub(crate) status_message: String,
}

impl IdeaApp {
    /// Build the application from a loaded configuration and resolved origin
    pub fn new(config: Config, config_path: Option<PathBuf>, origin: String) -> Result<Self> {
        let client = IdeaClient::new(&origin)?;
        tracing::info!("Using idea backend at {}", client.url());

        let session = config
            .auth
            .require_sign_in
            .then(|| LocalSession::new(config.auth.sign_in_url.clone()));
        let gate = session
            .as_ref()
            .map(LocalSession::gate)
            .unwrap_or(AuthGate::Open);

        // With the gate engaged nothing is fetched until the viewer asks
        let fetch_on_activate = config.ui.fetch_on_start && !gate.is_engaged();
        let idea = IdeaState::new(Arc::new(client), gate, fetch_on_activate);

        let ui = UiState::new(config.ui.theme);

        Ok(Self {
            config,
            config_path,
            origin,
            idea,
            session,
            ui,
            status_message: "Ready".to_string(),
        })
    }

    /// Trigger a new idea request from the UI
    pub(crate) fn request_idea(&mut self) {
        if let Some(event) = self.idea.request_idea() {
            self.handle_event(event);
        }
    }

    pub(crate) fn sign_in(&mut self) {
        if let Some(ref session) = self.session {
            session.sign_in();
            self.ui.show_sign_in_hint = false;
            self.status_message = "Signed in".to_string();
        }
    }

    pub(crate) fn sign_out(&mut self) {
        if let Some(ref session) = self.session {
            session.sign_out();
            self.idea.reset();
            self.status_message = "Signed out".to_string();
        }
    }

    /// Switch theme and persist the choice
    pub(crate) fn set_theme(&mut self, preset: ThemePreset) {
        if preset == self.config.ui.theme {
            return;
        }
        self.ui.set_preset(preset);
        self.config.ui.theme = preset;
        self.save_config();
    }

    fn save_config(&self) {
        let Some(ref path) = self.config_path else {
            tracing::debug!("Config was not loaded from disk, not saving");
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::StatusMessage(msg) => self.status_message = msg,
            StateEvent::AuthRequired => {
                self.ui.show_sign_in_hint = true;
                self.status_message = "Sign in to generate ideas".to_string();
            }
            StateEvent::LogError(msg) => tracing::error!("{}", msg),
            StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
        }
    }
}

impl eframe::App for IdeaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Initial fetch happens once, on the first frame
        if let Some(event) = self.idea.activate() {
            self.handle_event(event);
        }

        for event in self.idea.poll(ctx) {
            self.handle_event(event);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui::render_top_bar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .color(self.ui.current_theme.text_muted)
                        .size(12.0),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_idea_panel(self, ui);
        });

        ui::render_about_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestState;

    fn gated_config() -> Config {
        let mut config = Config::default();
        config.auth.require_sign_in = true;
        config
    }

    #[test]
    fn test_open_app_has_no_session() {
        let app = IdeaApp::new(Config::default(), None, "http://127.0.0.1:8000".to_string()).unwrap();
        assert!(app.session.is_none());
        assert!(!app.idea.gate().is_engaged());
        assert!(app.idea.is_permitted());
    }

    #[test]
    fn test_theme_change_leaves_unreadable_config_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let broken = "[ui\ntheme = \"emerald\"\nrequire_sign_in = true\n";
        std::fs::write(&path, broken).unwrap();

        let (config, config_path) = Config::load_for_app(Some(path.clone()));
        let mut app = IdeaApp::new(config, config_path, "http://127.0.0.1:8000".to_string()).unwrap();
        app.set_theme(ThemePreset::Indigo);

        assert_eq!(app.ui.theme_preset, ThemePreset::Indigo);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_theme_change_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let (config, config_path) = Config::load_for_app(Some(path.clone()));
        let mut app = IdeaApp::new(config, config_path, "http://127.0.0.1:8000".to_string()).unwrap();
        app.set_theme(ThemePreset::Emerald);

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.ui.theme, ThemePreset::Emerald);
    }

    #[test]
    fn test_gated_app_prompts_before_fetching() {
        let mut app = IdeaApp::new(gated_config(), None, "http://127.0.0.1:8000".to_string()).unwrap();

        // Signed out: activation and triggers never reach the network
        assert!(app.idea.activate().is_none());
        app.request_idea();
        assert!(app.ui.show_sign_in_hint);
        assert_eq!(app.status_message, "Sign in to generate ideas");
        assert_eq!(app.idea.state(), &RequestState::Idle);
        assert_eq!(app.idea.requests_issued(), 0);

        app.sign_in();
        assert!(!app.ui.show_sign_in_hint);
        assert!(app.idea.is_permitted());

        app.sign_out();
        assert!(!app.idea.is_permitted());
        assert_eq!(app.idea.state(), &RequestState::Idle);
    }
}
