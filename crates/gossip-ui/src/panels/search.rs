//! Search bar: the single text input plus Send / New Search buttons.

use egui::{self, RichText, Vec2};
use crate::theme::*;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Submit the draft as a query
    Submit(String),
    /// Clear the draft and start over
    NewSearch,
}

/// Render the search bar over `draft`.
///
/// Submission is offered only while no query is in flight and the draft
/// has visible text. `focus` moves keyboard focus into the field.
pub fn search_bar(
    ui: &mut egui::Ui,
    draft: &mut String,
    busy: bool,
    show_new_search: bool,
    focus: bool,
) -> Option<SearchAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let reserved = if show_new_search { 190.0 } else { 80.0 };
        let input = egui::TextEdit::singleline(draft)
            .hint_text("Ask about the latest celebrity news...")
            .desired_width((ui.available_width() - reserved).max(120.0))
            .font(egui::FontId::proportional(15.0));

        let response = ui.add(input);
        if focus {
            response.request_focus();
        }

        let send_enabled = !busy && !draft.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(
                RichText::new("Send").color(if send_enabled { USER_TEXT } else { TEXT_SECONDARY }),
            )
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(64.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if send_enabled && (enter || send_btn.clicked()) {
            action = Some(SearchAction::Submit(draft.clone()));
            response.request_focus();
        }

        if show_new_search
            && ui
                .add(
                    egui::Button::new(RichText::new("New Search").color(TEXT_PRIMARY))
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING),
                )
                .clicked()
        {
            action = Some(SearchAction::NewSearch);
        }
    });

    action
}
