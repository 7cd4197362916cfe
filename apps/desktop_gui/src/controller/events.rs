//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{ClientError, GateDecision};
use shared::{
    domain::{Feature, Plan, RenovationLevel, UserProfile},
    protocol::{CalculateRequest, CalculationResult, DeepResearchResponse},
};

use crate::{
    controller::state::{AuthMode, Dropdown, FormField, View},
    i18n::Language,
};

/// User input, folded into the state by [`crate::controller::reducer::apply_intent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(View),
    OpenAuth(AuthMode),
    SetAuthMode(AuthMode),
    ToggleAuthMode,
    Edit(FormField, String),
    SetRenovationLevel(RenovationLevel),
    SubmitAuth,
    StartGoogleSignIn,
    Logout,
    SelectTab(Feature),
    SubmitSearch,
    SubmitDeepResearch,
    SubmitCalculation,
    DownloadReport,
    ReportSaved,
    ToggleBilling,
    ChoosePlan(Plan),
    ActivateCard,
    SkipCard,
    CloseCard,
    DismissModal,
    ModalToPricing,
    SetLanguage(Language),
    ToggleDropdown(Dropdown),
    CloseDropdowns,
    DismissNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Register,
    OAuth,
    Restore,
}

/// Backend completions, folded into the state by
/// [`crate::controller::reducer::apply_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SignedIn {
        flow: AuthFlow,
        profile: UserProfile,
    },
    AuthFailed {
        flow: AuthFlow,
        error: UiError,
    },
    SignedOut,
    SessionExpired,
    ProfileRefreshed(UserProfile),
    UpgradeCompleted(UserProfile),
    UpgradeFailed(UiError),
    DeepResearchCompleted(DeepResearchResponse),
    CalculationCompleted {
        request: CalculateRequest,
        result: CalculationResult,
    },
    ReportReady {
        filename: String,
        document: Vec<u8>,
    },
    ReportFailed(UiError),
    /// The server refused a gated call (403 / 429).
    FeatureDenied {
        feature: Feature,
        decision: GateDecision,
    },
    FeatureFailed {
        feature: Feature,
        error: UiError,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Login,
    Register,
    OAuth,
    Upgrade,
    DeepResearch,
    Calculate,
    Report,
    General,
}

impl UiErrorContext {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "Backend startup failed",
            UiErrorContext::Login => "Login failed",
            UiErrorContext::Register => "Registration failed",
            UiErrorContext::OAuth => "Google sign-in failed",
            UiErrorContext::Upgrade => "Upgrade failed",
            UiErrorContext::DeepResearch => "Deep research failed",
            UiErrorContext::Calculate => "Calculation failed",
            UiErrorContext::Report => "Report generation failed",
            UiErrorContext::General => "Request failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
    detail: Option<String>,
}

impl UiError {
    /// The backend worker could not start; nothing the user did caused it.
    pub fn backend_startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
            detail: None,
        }
    }

    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::MissingToken
            | ClientError::InvalidCredentials
            | ClientError::Unauthorized => UiErrorCategory::Auth,
            ClientError::Transport(_) => UiErrorCategory::Transport,
            ClientError::Rejected { status, .. } if (400..500).contains(status) => {
                UiErrorCategory::Validation
            }
            ClientError::Decode(_) => UiErrorCategory::Validation,
            _ => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.to_string(),
            detail: err.detail().map(str::to_string),
        }
    }

    pub fn requires_reauth(&self) -> bool {
        self.category == UiErrorCategory::Auth
    }

    pub fn is_transport(&self) -> bool {
        self.category == UiErrorCategory::Transport
    }

    /// One-line text for the status bar, prefixed with the action that failed.
    pub fn status_text(&self) -> String {
        format!("{}: {}", self.context.label(), self.message)
    }

    /// Server-supplied `detail`, when the response carried one.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_are_neither_auth_nor_transport() {
        let err = UiError::from_client_error(UiErrorContext::Login, &ClientError::Decode("x".into()));
        assert_eq!(err.category, UiErrorCategory::Validation);
        assert!(!err.requires_reauth());
        assert!(!err.is_transport());
    }

    #[test]
    fn keeps_server_detail_from_client_errors() {
        let err = UiError::from_client_error(
            UiErrorContext::Register,
            &ClientError::Rejected {
                status: 400,
                detail: Some("Email già registrata".into()),
            },
        );
        assert_eq!(err.category, UiErrorCategory::Validation);
        assert_eq!(err.detail(), Some("Email già registrata"));
        assert!(err.status_text().starts_with("Registration failed: "));
    }

    #[test]
    fn unauthorized_requires_reauth() {
        let err = UiError::from_client_error(UiErrorContext::Upgrade, &ClientError::Unauthorized);
        assert!(err.requires_reauth());
    }

    #[test]
    fn startup_failure_names_the_backend() {
        let err = UiError::backend_startup("failed to build runtime");
        assert_eq!(err.status_text(), "Backend startup failed: failed to build runtime");
    }
}
