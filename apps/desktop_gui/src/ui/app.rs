use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{Intent, UiEvent},
        orchestration::dispatch_backend_command,
        reducer::{apply_event, apply_intent},
        state::{AppState, View},
    },
    ui::{panels, theme, widgets},
};

pub struct BigHouseApp {
    state: AppState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    theme_applied: bool,
}

impl BigHouseApp {
    pub fn new(state: AppState, cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            state,
            cmd_tx,
            ui_rx,
            theme_applied: false,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        let transition = apply_intent(std::mem::take(&mut self.state), intent);
        self.state = transition.state;
        for cmd in transition.commands {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state = apply_event(std::mem::take(&mut self.state), event);
        }
    }

    fn flush_side_effects(&mut self, ctx: &egui::Context) {
        if let Some(url) = self.state.pending_open_url.take() {
            tracing::info!("opening browser for google sign-in");
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }

        let Some(download) = self.state.pending_download.take() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&download.filename)
            .add_filter("Word", &["docx"])
            .save_file()
        else {
            tracing::debug!(filename = %download.filename, "report save cancelled");
            return;
        };
        match std::fs::write(&path, &download.document) {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = download.document.len(), "report saved");
                self.dispatch(Intent::ReportSaved);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to save report: {err}");
                self.state.status = format!("Failed to save report: {err}");
            }
        }
    }
}

impl eframe::App for BigHouseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events();

        let mut intents = Vec::new();
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            intents.push(Intent::CloseDropdowns);
            intents.push(Intent::DismissModal);
        }

        egui::TopBottomPanel::bottom("status_bar")
            .show_separator_line(false)
            .show(ctx, |ui| widgets::status_line(ui, &self.state));

        match self.state.view {
            View::Landing => panels::landing::show(ctx, &self.state, &mut intents),
            View::Auth => panels::auth::show(ctx, &self.state, &mut intents),
            View::Pricing => panels::pricing::show(ctx, &self.state, &mut intents),
            View::Dashboard => panels::dashboard::show(ctx, &self.state, &mut intents),
        }

        for intent in intents {
            self.dispatch(intent);
        }
        self.flush_side_effects(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
