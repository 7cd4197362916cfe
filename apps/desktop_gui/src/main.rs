mod backend_bridge;
mod controller;
mod i18n;
mod ui;

use clap::Parser;
use client_core::{google_auth_url, load_settings, OAuthCallback};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime},
    controller::{
        events::UiEvent, orchestration::dispatch_backend_command, reducer::startup_commands,
        state::AppState,
    },
    i18n::Language,
    ui::BigHouseApp,
};

#[derive(Parser, Debug)]
#[command(name = "bighouse-gui", about = "BIG HOUSE real-estate analytics")]
struct Args {
    /// Redirect location from the Google sign-in flow, carrying `?token=`.
    #[arg(long)]
    callback: Option<String>,
    /// Interface language: it, en, fr, de, es or pt.
    #[arg(long)]
    lang: Option<String>,
    #[arg(long)]
    api_base: Option<String>,
}

fn oauth_token(callback: Option<&str>) -> Option<String> {
    match OAuthCallback::consume(callback?) {
        Ok(Some(callback)) => {
            tracing::info!(location = %callback.scrubbed_location(), "received oauth callback");
            Some(callback.into_token())
        }
        Ok(None) => {
            tracing::warn!("oauth callback carries no token");
            None
        }
        Err(err) => {
            tracing::warn!("ignoring malformed oauth callback: {err}");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_base) = args.api_base.as_deref() {
        settings.api_base = client_core::config::normalize_api_base(api_base);
    }
    let requested = args.lang.as_deref().unwrap_or(&settings.language);
    let language = requested.parse::<Language>().unwrap_or_else(|err| {
        tracing::warn!("{err}; falling back to {}", Language::default());
        Language::default()
    });
    tracing::info!(api_base = %settings.api_base, %language, "starting desktop client");

    let mut state = AppState::new(language, google_auth_url(&settings.api_base));
    let token = oauth_token(args.callback.as_deref());

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(settings, cmd_rx, ui_tx);

    for cmd in startup_commands(token) {
        dispatch_backend_command(&cmd_tx, cmd, &mut state.status);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BIG HOUSE")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BIG HOUSE",
        options,
        Box::new(move |_cc| Ok(Box::new(BigHouseApp::new(state, cmd_tx, ui_rx)))),
    )
}
