//! Chat panel: the conversation transcript and thinking indicator.

use egui::{self, Align, Layout, RichText, ScrollArea};
use gossip_types::message::{Message, Role};
use crate::theme::*;

pub fn chat_panel(ui: &mut egui::Ui, messages: &[Message], thinking: bool) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, message);
                ui.add_space(6.0);
            }

            if thinking {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Gossip is thinking...").color(TEXT_SECONDARY).italics());
                });
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (layout, bg, fg) = match message.role {
        Role::User => (Layout::right_to_left(Align::Min), USER_BUBBLE, USER_TEXT),
        Role::Assistant => (Layout::left_to_right(Align::Min), BG_SECONDARY, TEXT_PRIMARY),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .stroke(egui::Stroke::new(1.0, BORDER))
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.vertical(|ui| {
                    ui.label(RichText::new(message.role.label()).color(fg).strong().small());
                    ui.label(RichText::new(&message.text).color(fg));
                });
            });
    });
}
