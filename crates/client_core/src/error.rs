use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no session token available; sign in first")]
    MissingToken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session expired (401 unauthorized)")]
    Unauthorized,
    #[error("feature requires a higher plan (403 forbidden)")]
    UpgradeRequired { detail: Option<String> },
    #[error("usage limit reached (429 too many requests)")]
    LimitReached { detail: Option<String> },
    #[error("request rejected with status {status}{}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },
    #[error("network transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed server response: {0}")]
    Decode(String),
    #[error("token storage failure: {0}")]
    Storage(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl ClientError {
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => ClientError::Unauthorized,
            403 => ClientError::UpgradeRequired { detail },
            429 => ClientError::LimitReached { detail },
            _ => ClientError::Rejected { status, detail },
        }
    }

    /// HTTP status that caused the error, `None` for local or transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::InvalidCredentials => Some(400),
            ClientError::Unauthorized => Some(401),
            ClientError::UpgradeRequired { .. } => Some(403),
            ClientError::LimitReached { .. } => Some(429),
            ClientError::Rejected { status, .. } => Some(*status),
            ClientError::MissingToken
            | ClientError::Transport(_)
            | ClientError::Decode(_)
            | ClientError::Storage(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::UpgradeRequired { detail }
            | ClientError::LimitReached { detail }
            | ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::MissingToken)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
