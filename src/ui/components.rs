//! Shared UI components: top bar, account affordance, About dialog

use eframe::egui::{self, RichText};

use crate::app::IdeaApp;
use crate::ui::theme::ThemePreset;

/// Render the top bar: theme picker, About, and the account affordance
pub fn render_top_bar(app: &mut IdeaApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.horizontal(|ui| {
        ui.label(RichText::new("ideagen").strong().color(theme.accent));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_account(app, ui);

            if ui.button("About").clicked() {
                app.ui.show_about_dialog = true;
            }

            let mut selected = app.ui.theme_preset;
            egui::ComboBox::from_id_salt("theme_select")
                .selected_text(selected.name())
                .show_ui(ui, |ui| {
                    for preset in ThemePreset::all() {
                        ui.selectable_value(&mut selected, *preset, preset.name());
                    }
                });
            app.set_theme(selected);
        });
    });
}

/// Sign-in or account controls, shown only when sign-in is required
fn render_account(app: &mut IdeaApp, ui: &mut egui::Ui) {
    let Some(signed_in) = app.session.as_ref().map(|s| s.is_signed_in()) else {
        return;
    };
    let label_color = app.ui.current_theme.text_secondary;

    if signed_in {
        if ui.button("Sign out").clicked() {
            app.sign_out();
        }
        ui.label(RichText::new("Signed in").color(label_color));
    } else if ui.button("Sign in").clicked() {
        app.sign_in();
    }
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut IdeaApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();
    let origin = app.origin.clone();

    egui::Window::new("About")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 220.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Business Idea Generator")
                        .size(20.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(RichText::new("Backend").color(theme.text_secondary));
                if ui.link(origin.as_str()).clicked() {
                    if let Err(e) = open::that(&origin) {
                        tracing::warn!("Failed to open {}: {}", origin, e);
                    }
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });
}
