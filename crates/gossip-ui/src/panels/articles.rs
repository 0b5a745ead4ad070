//! Landing view: "Recent Articles" card grid.

use egui::{self, RichText};
use gossip_types::article::{Article, CatalogStatus};
use crate::theme::*;

const DESCRIPTION_PREVIEW_CHARS: usize = 140;

/// Render the catalog as cards. Returns the index of a clicked card.
pub fn article_grid(
    ui: &mut egui::Ui,
    articles: &[Article],
    catalog: CatalogStatus,
) -> Option<usize> {
    let mut clicked = None;

    ui.heading(RichText::new("Recent Articles").color(TEXT_PRIMARY).strong());
    ui.add_space(8.0);

    if catalog.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading articles...").color(TEXT_SECONDARY));
        });
        return None;
    }

    if articles.is_empty() {
        ui.label(RichText::new("No articles available").color(TEXT_SECONDARY));
        return None;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (i, article) in articles.iter().enumerate() {
                    if article_card(ui, article).clicked() {
                        clicked = Some(i);
                    }
                }
            });
        });

    clicked
}

fn article_card(ui: &mut egui::Ui, article: &Article) -> egui::Response {
    let frame = egui::Frame::default()
        .fill(BG_SECONDARY)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                egui::Frame::default()
                    .fill(ACCENT_SOFT)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&article.source).color(ACCENT).small());
                    });
                ui.add_space(4.0);
                ui.label(RichText::new(&article.title).color(TEXT_PRIMARY).strong());
                if let Some(description) = &article.description {
                    ui.label(
                        RichText::new(description_preview(description))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                }
                if let Some(date) = publication_label(article) {
                    ui.label(RichText::new(date).color(TEXT_SECONDARY).small());
                }
            });
        });

    frame
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// First few sentences' worth of a description, ellipsized on a char boundary
pub fn description_preview(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// Human-readable publication date; unparseable dates are shown as sent
pub fn publication_label(article: &Article) -> Option<String> {
    match article.published_at() {
        Some(dt) => Some(dt.format("%b %-d, %Y").to_string()),
        None => article
            .publication_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
    }
}
