//! Main egui application: composes the panels and drives the session.

use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel, TopBottomPanel};
use futures::future::LocalBoxFuture;

use gossip_core::controller::{SessionController, ViewState};
use gossip_core::event_bus::EventBus;
use gossip_core::ports::{CatalogPort, QueryPort};
use gossip_platform::{HttpCatalogClient, HttpQueryProxy};
use gossip_types::config::{SearchConfig, DEFAULT_API_BASE_URL};
use gossip_ui::panels::search::SearchAction;
use gossip_ui::panels::{articles, chat, header, search, sources};
use gossip_ui::state::UiState;
use gossip_ui::theme;

/// The main application state
pub struct GossipApp {
    ui_state: UiState,
    event_bus: EventBus,
    session: SessionController,
    first_frame: bool,
}

impl GossipApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = SearchConfig::from_env(option_env!("API_BASE_URL"));
        let event_bus = EventBus::new();

        let query: Rc<dyn QueryPort> = match HttpQueryProxy::new(&config.api) {
            Ok(proxy) => Rc::new(proxy),
            Err(e) => {
                log::warn!("{}. Falling back to {}", e, DEFAULT_API_BASE_URL);
                Rc::new(HttpQueryProxy::with_url(format!("{}/query", DEFAULT_API_BASE_URL)))
            }
        };
        let catalog: Rc<dyn CatalogPort> = Rc::new(HttpCatalogClient::new(&config.catalog));

        let session = SessionController::new(query, catalog, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            session,
            first_frame: true,
        }
    }

    /// Run a controller future to completion in the background
    fn spawn(task: LocalBoxFuture<'static, ()>, ctx: &egui::Context) {
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            task.await;
            ctx.request_repaint();
        });
    }

    fn apply(&mut self, action: SearchAction, ctx: &egui::Context) {
        match action {
            SearchAction::Submit(text) => {
                if let Some(task) = self.session.submit(&text) {
                    Self::spawn(task, ctx);
                }
            }
            SearchAction::NewSearch => self.session.new_search(),
        }
    }

    fn search_section(&mut self, ui: &mut egui::Ui, view: &ViewState) -> Option<SearchAction> {
        let mut draft = view.input.clone();
        let focus = self.ui_state.take_focus_request();
        let action = search::search_bar(ui, &mut draft, view.request_in_flight, view.show_results, focus);
        if draft != view.input {
            self.session.set_input(draft);
        }
        action
    }
}

impl eframe::App for GossipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            if let Some(task) = self.session.load_catalog() {
                Self::spawn(task, ctx);
            }
            self.first_frame = false;
        }

        // Drain events from the session controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let view = self.session.view_state();
        if view.thinking || view.catalog.is_loading() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            header::header_bar(ui, &mut self.ui_state, view.show_results);
        });

        // ── Sources side panel ───────────────────────────────
        if view.show_results && self.ui_state.sidebar_open {
            SidePanel::right("sources_panel")
                .min_width(220.0)
                .max_width(320.0)
                .show(ctx, |ui| {
                    sources::sources_panel(ui, &view.sources, view.has_answers);
                });
        }

        // ── Main content ─────────────────────────────────────
        let mut action = None;
        let mut selected = None;
        CentralPanel::default().show(ctx, |ui| {
            if view.show_results {
                action = self.search_section(ui, &view);
                ui.separator();
                chat::chat_panel(ui, &view.messages, view.thinking);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.heading(
                        egui::RichText::new("What's the latest gossip?")
                            .color(theme::TEXT_PRIMARY)
                            .size(28.0)
                            .strong(),
                    );
                    ui.add_space(12.0);
                });
                action = self.search_section(ui, &view);
                ui.add_space(16.0);
                selected = articles::article_grid(ui, &view.articles, view.catalog);
            }
        });

        if let Some(index) = selected {
            if let Some(article) = view.articles.get(index) {
                self.session.select_article(article);
            }
        }
        if let Some(action) = action {
            self.apply(action, ctx);
        }
    }
}

impl Drop for GossipApp {
    fn drop(&mut self) {
        self.session.teardown();
    }
}
