//! Pure state transitions. Each intent or event takes the current state by
//! value and returns the next one plus the backend work it requires.

use client_core::{can_use, gate_navigation, GateDecision};
use shared::domain::{Feature, Plan};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{AuthFlow, Intent, UiEvent},
        state::{
            AppState, AuthForm, AuthMode, Calculation, CalculatorForm, Message, Modal, Notice,
            NoticeKind, ReportDownload, View,
        },
    },
};

#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub commands: Vec<BackendCommand>,
}

impl Transition {
    fn stay(state: AppState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }

    fn with(state: AppState, command: BackendCommand) -> Self {
        Self {
            state,
            commands: vec![command],
        }
    }
}

/// Work queued before the first frame. A token handed over by the OAuth
/// redirect replaces whatever was persisted, so the two are never raced.
pub fn startup_commands(oauth_token: Option<String>) -> Vec<BackendCommand> {
    match oauth_token {
        Some(token) => vec![BackendCommand::CompleteOAuth { token }],
        None => vec![BackendCommand::RestoreSession],
    }
}

fn navigate(mut state: AppState, view: View) -> AppState {
    if view == View::Dashboard && !state.has_token {
        state.auth_mode = AuthMode::Login;
        return navigate(state, View::Auth);
    }
    if state.view != view {
        state.auth_form = AuthForm::default();
        state.auth_error = None;
        state.search_query.clear();
        state.deep_query.clear();
        state.calculator = CalculatorForm::default();
    }
    state.view = view;
    state.dropdown = None;
    state.modal = None;
    state.card_plan = None;
    state
}

fn open_gate_modal(mut state: AppState, decision: GateDecision) -> AppState {
    state.modal = match decision {
        GateDecision::Allowed => state.modal,
        GateDecision::UpgradeRequired => Some(Modal::Upgrade),
        GateDecision::LimitReached => Some(Modal::Limit),
    };
    state
}

fn select_tab(mut state: AppState, feature: Feature) -> AppState {
    state.dropdown = None;
    match gate_navigation(feature, state.user.as_ref()) {
        GateDecision::Allowed => {
            state.tab = feature;
            state
        }
        denied => open_gate_modal(state, denied),
    }
}

/// Local pre-check before a metered call. Only skips requests the server would
/// certainly refuse; with no profile loaded yet the request goes out and the
/// server decides.
fn precheck(state: &AppState, feature: Feature) -> GateDecision {
    match state.user.as_ref() {
        Some(user) if !can_use(feature, Some(user)) => gate_navigation(feature, Some(user)),
        _ => GateDecision::Allowed,
    }
}

fn request_upgrade(mut state: AppState, plan: Plan) -> Transition {
    if !state.has_token {
        state.notice = Some(Notice {
            kind: NoticeKind::Error,
            message: Message::new("not_logged_in"),
        });
        return Transition::stay(state);
    }
    if state.upgrade_pending {
        return Transition::stay(state);
    }
    state.upgrade_pending = true;
    Transition::with(state, BackendCommand::Upgrade { plan })
}

fn error_notice(key: &'static str, detail: Option<String>) -> Option<Notice> {
    Some(Notice {
        kind: NoticeKind::Error,
        message: Message::with_detail(key, detail),
    })
}

pub fn apply_intent(mut state: AppState, intent: Intent) -> Transition {
    match intent {
        Intent::Navigate(view) => Transition::stay(navigate(state, view)),
        Intent::OpenAuth(mode) => {
            let mut state = navigate(state, View::Auth);
            state.auth_mode = mode;
            Transition::stay(state)
        }
        Intent::SetAuthMode(mode) => {
            state.auth_mode = mode;
            state.auth_error = None;
            Transition::stay(state)
        }
        Intent::ToggleAuthMode => {
            state.auth_mode = state.auth_mode.toggled();
            state.auth_error = None;
            Transition::stay(state)
        }
        Intent::Edit(field, value) => {
            *state.form_value_mut(field) = value;
            Transition::stay(state)
        }
        Intent::SetRenovationLevel(level) => {
            state.calculator.renovation_level = level;
            Transition::stay(state)
        }
        Intent::SubmitAuth => {
            if !state.can_submit_auth() {
                return Transition::stay(state);
            }
            state.auth_loading = true;
            state.auth_error = None;
            let form = &state.auth_form;
            let command = match state.auth_mode {
                AuthMode::Login => BackendCommand::Login {
                    email: form.email.clone(),
                    password: form.password.clone(),
                },
                AuthMode::Register => BackendCommand::Register {
                    email: form.email.clone(),
                    password: form.password.clone(),
                    name: form.name.clone(),
                },
            };
            Transition::with(state, command)
        }
        Intent::StartGoogleSignIn => {
            state.pending_open_url = Some(state.google_auth_url.clone());
            state.notice = Some(Notice {
                kind: NoticeKind::Info,
                message: Message::new("google_opened"),
            });
            Transition::stay(state)
        }
        Intent::Logout => Transition::with(state.signed_out(), BackendCommand::Logout),
        Intent::SelectTab(feature) => Transition::stay(select_tab(state, feature)),
        Intent::SubmitSearch => {
            let query = state.search_query.trim().to_string();
            if query.is_empty() {
                return Transition::stay(state);
            }
            state = select_tab(state, Feature::DeepResearch);
            if state.tab == Feature::DeepResearch {
                state.deep_query = query;
            }
            Transition::stay(state)
        }
        Intent::SubmitDeepResearch => {
            if !state.has_token || !state.can_submit_deep_research() {
                return Transition::stay(state);
            }
            match precheck(&state, Feature::DeepResearch) {
                GateDecision::Allowed => {
                    state.deep_loading = true;
                    let query = state.deep_query.trim().to_string();
                    Transition::with(state, BackendCommand::DeepResearch { query })
                }
                denied => Transition::stay(open_gate_modal(state, denied)),
            }
        }
        Intent::SubmitCalculation => {
            if !state.has_token || state.calc_loading {
                return Transition::stay(state);
            }
            let Some(request) = state.calculator.to_request() else {
                return Transition::stay(state);
            };
            match precheck(&state, Feature::Calculator) {
                GateDecision::Allowed => {
                    state.calc_loading = true;
                    Transition::with(state, BackendCommand::Calculate { request })
                }
                denied => Transition::stay(open_gate_modal(state, denied)),
            }
        }
        Intent::DownloadReport => {
            if !state.has_token || state.report_loading {
                return Transition::stay(state);
            }
            let Some(Calculation { request, result }) = state.calculation.clone() else {
                return Transition::stay(state);
            };
            state.report_loading = true;
            Transition::with(state, BackendCommand::GenerateReport { request, result })
        }
        Intent::ReportSaved => {
            state.notice = Some(Notice {
                kind: NoticeKind::Success,
                message: Message::new("report_saved"),
            });
            Transition::stay(state)
        }
        Intent::ToggleBilling => {
            state.billing = state.billing.toggled();
            Transition::stay(state)
        }
        Intent::ChoosePlan(Plan::Free) => request_upgrade(state, Plan::Free),
        Intent::ChoosePlan(plan) => {
            state.card_plan = Some(plan);
            Transition::stay(state)
        }
        Intent::ActivateCard => match state.card_plan {
            Some(plan) => request_upgrade(state, plan),
            None => Transition::stay(state),
        },
        Intent::SkipCard => {
            state.card_plan = None;
            request_upgrade(state, Plan::Free)
        }
        Intent::CloseCard => {
            state.card_plan = None;
            Transition::stay(state)
        }
        Intent::DismissModal => {
            state.modal = None;
            Transition::stay(state)
        }
        Intent::ModalToPricing => {
            state.modal = None;
            Transition::stay(navigate(state, View::Pricing))
        }
        Intent::SetLanguage(language) => {
            state.language = language;
            state.dropdown = None;
            Transition::stay(state)
        }
        Intent::ToggleDropdown(dropdown) => {
            state.dropdown = if state.dropdown == Some(dropdown) {
                None
            } else {
                Some(dropdown)
            };
            Transition::stay(state)
        }
        Intent::CloseDropdowns => {
            state.dropdown = None;
            Transition::stay(state)
        }
        Intent::DismissNotice => {
            state.notice = None;
            Transition::stay(state)
        }
    }
}

fn clear_feature_loading(state: &mut AppState, feature: Feature) {
    match feature {
        Feature::Search => {}
        Feature::DeepResearch => state.deep_loading = false,
        Feature::Calculator => state.calc_loading = false,
    }
}

pub fn apply_event(mut state: AppState, event: UiEvent) -> AppState {
    match event {
        UiEvent::SignedIn { flow, profile } => {
            state.has_token = true;
            state.user = Some(profile);
            state.auth_loading = false;
            state.auth_error = None;
            match flow {
                AuthFlow::Register => navigate(state, View::Pricing),
                AuthFlow::Login | AuthFlow::OAuth => navigate(state, View::Dashboard),
                AuthFlow::Restore => state,
            }
        }
        UiEvent::AuthFailed { flow, error } => {
            state.auth_loading = false;
            match flow {
                AuthFlow::Login | AuthFlow::Register if error.is_transport() => {
                    state.auth_error = Some(Message::new("network_error"));
                }
                AuthFlow::Login if error.requires_reauth() => {
                    state.auth_error = Some(Message::new("auth_error"));
                }
                AuthFlow::Login => {
                    state.auth_error = Some(Message::with_detail(
                        "unknown_error",
                        error.detail().map(str::to_string),
                    ));
                }
                AuthFlow::Register => {
                    state.auth_error = Some(Message::with_detail(
                        "registration_failed",
                        error.detail().map(str::to_string),
                    ));
                }
                AuthFlow::OAuth | AuthFlow::Restore => {
                    state.has_token = false;
                    state.user = None;
                    state.notice = if error.is_transport() {
                        error_notice("network_error", None)
                    } else if error.requires_reauth() {
                        error_notice("session_expired", None)
                    } else {
                        error_notice("unknown_error", error.detail().map(str::to_string))
                    };
                }
            }
            state
        }
        // The view already reset when logout was requested.
        UiEvent::SignedOut if !state.has_token => state,
        UiEvent::SignedOut => state.signed_out(),
        UiEvent::SessionExpired => {
            let mut state = state.signed_out();
            state.notice = error_notice("session_expired", None);
            state
        }
        UiEvent::ProfileRefreshed(profile) => {
            state.has_token = true;
            state.user = Some(profile);
            state
        }
        UiEvent::UpgradeCompleted(profile) => {
            state.upgrade_pending = false;
            state.user = Some(profile);
            let mut state = navigate(state, View::Dashboard);
            state.notice = Some(Notice {
                kind: NoticeKind::Success,
                message: Message::new("upgrade_success"),
            });
            state
        }
        UiEvent::UpgradeFailed(error) => {
            state.upgrade_pending = false;
            state.notice = if error.is_transport() {
                error_notice("network_error", None)
            } else {
                error_notice("upgrade_failed", error.detail().map(str::to_string))
            };
            state
        }
        UiEvent::DeepResearchCompleted(response) => {
            state.deep_loading = false;
            state.deep_result = Some(response.result);
            state
        }
        UiEvent::CalculationCompleted { request, result } => {
            state.calc_loading = false;
            state.calculation = Some(Calculation { request, result });
            state
        }
        UiEvent::ReportReady { filename, document } => {
            state.report_loading = false;
            state.pending_download = Some(ReportDownload { filename, document });
            state
        }
        UiEvent::ReportFailed(error) => {
            state.report_loading = false;
            state.status = error.status_text();
            state
        }
        UiEvent::FeatureDenied { feature, decision } => {
            clear_feature_loading(&mut state, feature);
            open_gate_modal(state, decision)
        }
        UiEvent::FeatureFailed { feature, error } => {
            clear_feature_loading(&mut state, feature);
            state.status = error.status_text();
            state
        }
        UiEvent::Error(error) => {
            state.status = error.status_text();
            state
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
