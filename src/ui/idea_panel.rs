//! Idea panel rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::IdeaApp;
use crate::state::RequestState;
use crate::ui::theme::Theme;

/// Render the header, the idea card and the trigger button.
///
/// With the sign-in gate engaged and nobody signed in, a sign-in prompt
/// replaces the card and button.
pub fn render_idea_panel(app: &mut IdeaApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        ui.add_space(32.0);

        ui.label(
            RichText::new("Business Idea Generator")
                .size(36.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new("AI-powered innovation at your fingertips")
                .color(theme.text_secondary),
        );
        ui.add_space(32.0);

        if app.idea.gate().is_engaged() && !app.idea.is_permitted() {
            render_sign_in_prompt(app, ui, &theme);
            return;
        }

        render_card(app, ui, &theme);

        ui.add_space(20.0);

        let button = egui::Button::new(
            RichText::new("Generate another idea").color(theme.text_primary),
        )
        .corner_radius(egui::CornerRadius::same(16))
        .min_size(Vec2::new(180.0, 34.0));

        if ui.add(button).clicked() {
            app.request_idea();
        }
    });
}

/// Card showing exactly one view for the current request state
fn render_card(app: &mut IdeaApp, ui: &mut egui::Ui, theme: &Theme) {
    let state = app.idea.state().clone();

    egui::Frame::new()
        .fill(theme.bg_card)
        .corner_radius(egui::CornerRadius::same(24))
        .inner_margin(egui::Margin::same(32))
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(220.0);
            ui.vertical_centered(|ui| render_request_view(ui, &state, theme));
        });
}

/// The view for one request state. Idea and error text are shown verbatim,
/// line breaks included.
fn render_request_view(ui: &mut egui::Ui, state: &RequestState, theme: &Theme) {
    match state {
        RequestState::Idle => {
            ui.label(
                RichText::new("Press the button below to generate an idea.")
                    .color(theme.text_muted),
            );
        }
        RequestState::Loading => {
            ui.spinner();
            ui.add_space(8.0);
            ui.label(RichText::new(state.description()).color(theme.text_muted));
        }
        RequestState::Done(idea) => {
            ui.label(RichText::new(idea).color(theme.text_primary).size(16.0));
        }
        RequestState::Error(message) => {
            ui.label(RichText::new(message).color(theme.error));
        }
    }
}

fn render_sign_in_prompt(app: &mut IdeaApp, ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.bg_card)
        .corner_radius(egui::CornerRadius::same(24))
        .inner_margin(egui::Margin::same(32))
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Sign in to generate business ideas")
                        .size(18.0)
                        .color(theme.text_primary),
                );
                if app.ui.show_sign_in_hint {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("You need to be signed in before requesting an idea.")
                            .color(theme.text_muted),
                    );
                }
                ui.add_space(16.0);
                if ui.button("Sign in").clicked() {
                    app.sign_in();
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::epaint::Shape;

    fn collect_text(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_string()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Render one state headless and return every painted string
    fn painted_text(state: &RequestState) -> Vec<String> {
        let ctx = egui::Context::default();
        let theme = Theme::slate();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| render_request_view(ui, state, &theme));
        });

        let mut text = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut text);
        }
        text
    }

    #[test]
    fn test_idea_text_is_shown_verbatim() {
        let idea = "Line one\n# not a heading\n1. not a list *either*";
        let text = painted_text(&RequestState::Done(idea.to_string()));
        assert!(text.iter().any(|t| t == idea), "painted: {:?}", text);
    }

    #[test]
    fn test_error_message_is_shown() {
        let text = painted_text(&RequestState::Error("Error: server overloaded".to_string()));
        assert!(text.iter().any(|t| t == "Error: server overloaded"));
    }

    #[test]
    fn test_loading_shows_description() {
        let text = painted_text(&RequestState::Loading);
        assert!(text.iter().any(|t| t == "Generating your business idea..."));
    }
}
