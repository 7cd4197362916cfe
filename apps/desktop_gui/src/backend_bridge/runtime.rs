//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    ClientError, ClientSettings, FileTokenStore, GateDecision, MarketClient, SessionManager,
};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::{
    domain::{Feature, UserProfile},
    protocol::report_filename,
};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{AuthFlow, UiError, UiErrorContext, UiEvent},
};

fn send_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("ui event queue full; dropping event"),
        Err(TrySendError::Disconnected(_)) => tracing::debug!("ui gone; dropping event"),
    }
}

fn auth_outcome(
    flow: AuthFlow,
    context: UiErrorContext,
    outcome: Result<UserProfile, ClientError>,
) -> UiEvent {
    match outcome {
        Ok(profile) => UiEvent::SignedIn { flow, profile },
        Err(err) => {
            tracing::warn!(?flow, "sign-in failed: {err}");
            UiEvent::AuthFailed {
                flow,
                error: UiError::from_client_error(context, &err),
            }
        }
    }
}

/// Maps the failure of a gated call onto the event the view reacts to.
fn feature_failure(feature: Feature, context: UiErrorContext, err: ClientError) -> UiEvent {
    match err {
        ClientError::UpgradeRequired { .. } => UiEvent::FeatureDenied {
            feature,
            decision: GateDecision::UpgradeRequired,
        },
        ClientError::LimitReached { .. } => UiEvent::FeatureDenied {
            feature,
            decision: GateDecision::LimitReached,
        },
        err if err.is_session_expired() => UiEvent::SessionExpired,
        err => {
            tracing::warn!(?feature, "feature call failed: {err}");
            UiEvent::FeatureFailed {
                feature,
                error: UiError::from_client_error(context, &err),
            }
        }
    }
}

/// Runs one command to completion. Commands never wait on each other.
pub async fn handle_command(session: &SessionManager, cmd: BackendCommand) -> Vec<UiEvent> {
    match cmd {
        BackendCommand::RestoreSession => match session.restore().await {
            Ok(Some(profile)) => vec![UiEvent::SignedIn {
                flow: AuthFlow::Restore,
                profile,
            }],
            Ok(None) => Vec::new(),
            Err(err) => vec![auth_outcome(
                AuthFlow::Restore,
                UiErrorContext::General,
                Err(err),
            )],
        },
        BackendCommand::Register {
            email,
            password,
            name,
        } => vec![auth_outcome(
            AuthFlow::Register,
            UiErrorContext::Register,
            session.register(&email, &password, &name).await,
        )],
        BackendCommand::Login { email, password } => vec![auth_outcome(
            AuthFlow::Login,
            UiErrorContext::Login,
            session.login(&email, &password).await,
        )],
        BackendCommand::CompleteOAuth { token } => vec![auth_outcome(
            AuthFlow::OAuth,
            UiErrorContext::OAuth,
            session.complete_oauth(&token).await,
        )],
        BackendCommand::Logout => match session.logout().await {
            Ok(()) => vec![UiEvent::SignedOut],
            Err(err) => {
                tracing::warn!("sign-out could not clear stored token: {err}");
                vec![
                    UiEvent::SignedOut,
                    UiEvent::Error(UiError::from_client_error(UiErrorContext::General, &err)),
                ]
            }
        },
        BackendCommand::Upgrade { plan } => match session.upgrade(plan).await {
            Ok(profile) => vec![UiEvent::UpgradeCompleted(profile)],
            Err(err) if err.is_session_expired() => vec![UiEvent::SessionExpired],
            Err(err) => {
                tracing::warn!(%plan, "upgrade failed: {err}");
                vec![UiEvent::UpgradeFailed(UiError::from_client_error(
                    UiErrorContext::Upgrade,
                    &err,
                ))]
            }
        },
        BackendCommand::DeepResearch { query } => match session.deep_research(&query).await {
            Ok(response) => {
                let mut events = vec![UiEvent::DeepResearchCompleted(response)];
                if let Some(profile) = session.profile().await {
                    events.push(UiEvent::ProfileRefreshed(profile));
                }
                events
            }
            Err(err) => vec![feature_failure(
                Feature::DeepResearch,
                UiErrorContext::DeepResearch,
                err,
            )],
        },
        BackendCommand::Calculate { request } => match session.calculate(&request).await {
            Ok(result) => {
                let mut events = vec![UiEvent::CalculationCompleted { request, result }];
                if let Some(profile) = session.profile().await {
                    events.push(UiEvent::ProfileRefreshed(profile));
                }
                events
            }
            Err(err) => vec![feature_failure(
                Feature::Calculator,
                UiErrorContext::Calculate,
                err,
            )],
        },
        BackendCommand::GenerateReport { request, result } => {
            match session.generate_report(&request, &result).await {
                Ok(document) => vec![UiEvent::ReportReady {
                    filename: report_filename(&request.city),
                    document,
                }],
                Err(err) if err.is_session_expired() => vec![UiEvent::SessionExpired],
                Err(err) => {
                    tracing::warn!("report generation failed: {err}");
                    vec![UiEvent::ReportFailed(UiError::from_client_error(
                        UiErrorContext::Report,
                        &err,
                    ))]
                }
            }
        }
    }
}

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                send_ui_event(
                    &ui_tx,
                    UiEvent::Error(UiError::backend_startup(format!(
                        "failed to build runtime: {err}"
                    ))),
                );
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let api = Arc::new(MarketClient::new(settings.api_base.clone()));
            let store = Arc::new(FileTokenStore::new(settings.token_path.clone()));
            let session = Arc::new(SessionManager::new(api, store));
            tracing::info!(
                api_base = %settings.api_base,
                token_path = %settings.token_path.display(),
                "backend worker ready"
            );

            while let Ok(cmd) = cmd_rx.recv() {
                let session = Arc::clone(&session);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let name = cmd.name();
                    tracing::debug!(command = name, "backend command started");
                    for event in handle_command(&session, cmd).await {
                        send_ui_event(&ui_tx, event);
                    }
                });
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    });
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
