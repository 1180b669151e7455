//! Dashboard application entry point

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::dashboard::components::show_alert;
use crate::dashboard::state::{DashboardAction, DropQueue, PreviewSlot, UploadViewState};
use crate::dashboard::theme;
use crate::dashboard::views::{
    render_footer, render_header, render_history_view, render_result_view, render_upload_view,
};
use crate::recognition::UploadClient;
use crate::session::{
    DecodedPreview, PreviewReference, SelectedImage, SubmitRequest, UploadOutcome, UploadSession,
};

/// Below this width the two cards stack vertically
const TWO_COLUMN_MIN_WIDTH: f32 = 760.0;

/// The main dashboard application
pub struct DashboardApp {
    /// Selection, result and alert state
    session: UploadSession,
    /// Upload card state
    upload_view: UploadViewState,
    /// Client for the recognition service
    client: Arc<UploadClient>,
    /// Runtime the submission tasks run on
    runtime: Runtime,
    /// Submission outcomes flowing back to the UI thread
    outcome_tx: Sender<UploadOutcome>,
    outcome_rx: Receiver<UploadOutcome>,
    /// Decoded previews flowing back to the UI thread
    preview_tx: Sender<DecodedPreview>,
    preview_rx: Receiver<DecodedPreview>,
    /// Drops held back while an alert is open
    drop_queue: DropQueue,
    /// Whether theme has been applied
    theme_applied: bool,
    /// Initial window size
    window_size: [f32; 2],
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(config: &AppConfig, initial: Option<SelectedImage>) -> Result<Self> {
        let client = UploadClient::new(&config.service)?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let (outcome_tx, outcome_rx) = unbounded();
        let (preview_tx, preview_rx) = unbounded();

        let mut session = UploadSession::new();
        if let Some(image) = initial {
            session.select_file(image);
        }

        info!("Submitting to {}", client.endpoint());

        Ok(Self {
            session,
            upload_view: UploadViewState::default(),
            client: Arc::new(client),
            runtime,
            outcome_tx,
            outcome_rx,
            preview_tx,
            preview_rx,
            drop_queue: DropQueue::default(),
            theme_applied: false,
            window_size: [config.window.width, config.window.height],
        })
    }

    /// Create eframe options for the dashboard window
    pub fn options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size([420.0, 520.0])
                .with_drag_and_drop(true)
                .with_title("License Plate System"),
            ..Default::default()
        }
    }

    /// Read a file from disk and make it the selection
    fn select_path(&mut self, path: &Path) {
        match SelectedImage::from_path(path) {
            Ok(image) => self.session.select_file(image),
            Err(e) => self.session.report_error(&e),
        }
    }

    /// Start a submission in the background
    fn submit(&mut self, ctx: &egui::Context) {
        match self.session.submit() {
            Ok(request) => self.spawn_submission(request, ctx.clone()),
            Err(e) => debug!("Submit not started: {}", e),
        }
    }

    fn spawn_submission(&self, request: SubmitRequest, ctx: egui::Context) {
        let client = Arc::clone(&self.client);
        let outcome_tx = self.outcome_tx.clone();

        self.runtime.spawn(async move {
            let result = client.recognize(&request.image).await;
            // The receiver lives as long as the app; a send error means we are shutting down
            let _ = outcome_tx.send(UploadOutcome {
                ticket: request.ticket,
                result,
            });
            ctx.request_repaint();
        });
    }

    /// Apply finished submissions to the session
    fn process_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.session.complete(outcome.ticket, outcome.result);
        }
    }

    /// Keep the preview slot in step with the current selection
    ///
    /// Decoding runs on the runtime's blocking pool so large photos never
    /// stall a frame.
    fn sync_preview(&mut self, ctx: &egui::Context) {
        while let Ok(decoded) = self.preview_rx.try_recv() {
            self.upload_view.preview.accept(ctx, decoded);
        }

        let Some(preview) = self.session.preview() else {
            self.upload_view.preview = PreviewSlot::Empty;
            return;
        };
        if self.upload_view.preview.id() == Some(preview.id()) {
            return;
        }

        self.upload_view.preview = PreviewSlot::Decoding(preview.id());
        self.spawn_decode(preview.clone(), ctx.clone());
    }

    fn spawn_decode(&self, preview: PreviewReference, ctx: egui::Context) {
        let preview_tx = self.preview_tx.clone();

        self.runtime.spawn_blocking(move || {
            let decoded = DecodedPreview {
                id: preview.id(),
                uri: preview.uri().to_string(),
                pixels: preview.decode(),
            };
            let _ = preview_tx.send(decoded);
            ctx.request_repaint();
        });
    }

    /// Select the last file dropped onto the window, once no alert blocks it
    fn process_dropped_files(&mut self, ctx: &egui::Context, blocked: bool) {
        let incoming = ctx.input(|i| i.raw.dropped_files.last().cloned());
        let Some(file) = self.drop_queue.next(incoming, blocked) else {
            return;
        };

        if let Some(bytes) = file.bytes {
            let name = if file.name.is_empty() { "upload".to_string() } else { file.name };
            let mut image = SelectedImage::new(name, bytes);
            if !file.mime.is_empty() {
                image = image.with_content_type(file.mime);
            }
            self.session.select_file(image);
        } else if let Some(path) = file.path {
            self.select_path(&path);
        }
    }

    fn handle_action(&mut self, action: DashboardAction, ctx: &egui::Context) {
        match action {
            DashboardAction::SelectPath(path) => self.select_path(&path),
            DashboardAction::Submit => self.submit(ctx),
        }
    }

    /// Upload and result cards, side by side when there is room
    fn render_cards(&mut self, ui: &mut egui::Ui) -> Option<DashboardAction> {
        let mut action = None;

        if ui.available_width() >= TWO_COLUMN_MIN_WIDTH {
            ui.columns(2, |columns| {
                action = render_upload_view(&mut columns[0], &mut self.upload_view, &self.session);
                render_result_view(&mut columns[1], &self.session);
            });
        } else {
            action = render_upload_view(ui, &mut self.upload_view, &self.session);
            ui.add_space(24.0);
            render_result_view(ui, &self.session);
        }

        action
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        self.process_outcomes();

        let alert_open = self.session.alert().is_some();
        self.process_dropped_files(ctx, alert_open);

        // Keep the spinner moving while a request is in flight
        if self.session.is_loading() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(theme::ThemeColors::BG_CARD))
            .show(ctx, render_header);

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::none().fill(theme::ThemeColors::BG_PAGE))
            .show(ctx, render_footer);

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.add_enabled_ui(!alert_open, |ui| {
                            action = self.render_cards(ui);
                            ui.add_space(32.0);
                            render_history_view(ui, self.session.history());
                        });
                    });
            });
        });

        if let Some(action) = action {
            self.handle_action(action, ctx);
        }

        self.sync_preview(ctx);

        if let Some(message) = self.session.alert() {
            if show_alert(ctx, message) {
                self.session.dismiss_alert();
            }
        }
    }
}

/// Run the dashboard application
pub fn run_dashboard(app: DashboardApp) -> Result<(), eframe::Error> {
    let options = app.options();
    eframe::run_native(
        "License Plate System",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
