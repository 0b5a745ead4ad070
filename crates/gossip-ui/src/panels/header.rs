//! Top bar: title, status line and the Sources toggle.

use egui::{self, Align, Layout, RichText};
use crate::state::UiState;
use crate::theme::*;

pub fn header_bar(ui: &mut egui::Ui, state: &mut UiState, show_results: bool) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Gossip")
                .strong()
                .color(ACCENT)
                .size(18.0),
        );
        ui.separator();

        let status_color = if state.is_busy() || state.catalog.is_loading() {
            WARNING
        } else {
            SUCCESS
        };
        ui.label(RichText::new(&state.status_text).color(status_color).small());

        if show_results {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.selectable_label(state.sidebar_open, "Sources").clicked() {
                    state.toggle_sidebar();
                }
            });
        }
    });
}
