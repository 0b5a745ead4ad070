//! Sources side panel: per-source article counts.

use egui::{self, RichText};
use gossip_types::article::SourceCount;
use crate::theme::*;

pub const NO_SOURCES_HINT: &str = "No sources yet. Ask a question to see sources.";

pub fn sources_panel(ui: &mut egui::Ui, sources: &[SourceCount], has_answers: bool) {
    ui.heading(RichText::new("Sources").color(TEXT_PRIMARY).strong());
    ui.separator();

    if !has_answers || sources.is_empty() {
        ui.label(RichText::new(NO_SOURCES_HINT).color(TEXT_SECONDARY).small());
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in sources {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&entry.source).color(TEXT_PRIMARY).strong());
                        ui.label(RichText::new(count_label(entry.count)).color(TEXT_SECONDARY).small());
                    });
                ui.add_space(4.0);
            }
        });
}

pub fn count_label(count: usize) -> String {
    format!("{} articles", count)
}
