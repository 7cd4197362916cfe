//! Backend commands queued from UI to backend worker.

use shared::{
    domain::Plan,
    protocol::{CalculateRequest, CalculationResult},
};

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    RestoreSession,
    Register {
        email: String,
        password: String,
        name: String,
    },
    Login {
        email: String,
        password: String,
    },
    CompleteOAuth {
        token: String,
    },
    Logout,
    Upgrade {
        plan: Plan,
    },
    DeepResearch {
        query: String,
    },
    Calculate {
        request: CalculateRequest,
    },
    GenerateReport {
        request: CalculateRequest,
        result: CalculationResult,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::RestoreSession => "restore_session",
            BackendCommand::Register { .. } => "register",
            BackendCommand::Login { .. } => "login",
            BackendCommand::CompleteOAuth { .. } => "complete_oauth",
            BackendCommand::Logout => "logout",
            BackendCommand::Upgrade { .. } => "upgrade",
            BackendCommand::DeepResearch { .. } => "deep_research",
            BackendCommand::Calculate { .. } => "calculate",
            BackendCommand::GenerateReport { .. } => "generate_report",
        }
    }
}
