use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex as StdMutex},
};

use serde_json::{Map, Value};
use shared::{
    domain::{Plan, UserProfile},
    protocol::{
        CalculateRequest, CalculationResult, DeepResearchResponse, RegisterRequest,
    },
};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    error::{ClientError, ClientResult},
    MarketApi,
};

/// Key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn load(&self) -> ClientResult<Option<String>>;
    fn save(&self, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// JSON object on disk holding the token under [`TOKEN_STORAGE_KEY`]. Other keys
/// in the file are preserved.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> ClientResult<Map<String, Value>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(ClientError::Storage(format!(
                    "failed to read '{}': {err}",
                    self.path.display()
                )))
            }
        };
        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => {
                warn!(
                    "discarding unreadable token file '{}'",
                    self.path.display()
                );
                Ok(Map::new())
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                ClientError::Storage(format!(
                    "failed to create '{}': {err}",
                    parent.display()
                ))
            })?;
        }
        let body = serde_json::to_vec_pretty(map)
            .map_err(|err| ClientError::Storage(err.to_string()))?;
        fs::write(&self.path, body).map_err(|err| {
            ClientError::Storage(format!("failed to write '{}': {err}", self.path.display()))
        })?;
        restrict_permissions(&self.path);
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        warn!("could not restrict permissions on '{}': {err}", path.display());
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self
            .read_map()?
            .get(TOKEN_STORAGE_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        let mut map = self.read_map()?;
        map.insert(TOKEN_STORAGE_KEY.into(), Value::String(token.to_string()));
        self.write_map(&map)
    }

    fn clear(&self) -> ClientResult<()> {
        let mut map = self.read_map()?;
        if map.remove(TOKEN_STORAGE_KEY).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: StdMutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: StdMutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        Ok(())
    }
}

#[derive(Debug)]
struct Session {
    token: String,
    profile: Option<UserProfile>,
}

/// Owns the bearer token and the cached profile. Every authenticated call goes
/// through here so a 401 anywhere tears the session down.
pub struct SessionManager {
    api: Arc<dyn MarketApi>,
    store: Arc<dyn TokenStore>,
    state: Mutex<Option<Session>>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn MarketApi>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: Mutex::new(None),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.state.lock().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn profile(&self) -> Option<UserProfile> {
        self.state
            .lock()
            .await
            .as_ref()
            .and_then(|s| s.profile.clone())
    }

    /// Picks up a token persisted by an earlier run.
    pub async fn restore(&self) -> ClientResult<Option<UserProfile>> {
        let Some(token) = self.store.load()? else {
            return Ok(None);
        };
        *self.state.lock().await = Some(Session {
            token,
            profile: None,
        });
        info!("session: restoring persisted token");
        match self.refresh_profile().await {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                // Rejections already cleared everything; otherwise keep the
                // stored token for the next launch but stay signed out now.
                self.state.lock().await.take();
                Err(err)
            }
        }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<UserProfile> {
        let token = self
            .api
            .register(&RegisterRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
                name: name.trim().to_string(),
            })
            .await?;
        info!("session: registration accepted");
        self.establish(token).await
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<UserProfile> {
        let token = self.api.login(email.trim(), password).await?;
        info!("session: password login accepted");
        self.establish(token).await
    }

    pub async fn complete_oauth(&self, token: &str) -> ClientResult<UserProfile> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ClientError::MissingToken);
        }
        info!("session: adopting token from oauth redirect");
        self.establish(token.to_string()).await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.state.lock().await.take();
        self.store.clear()?;
        info!("session: signed out");
        Ok(())
    }

    /// Fetches `/users/me`. Any HTTP rejection ends the session; transport
    /// failures leave it untouched.
    pub async fn refresh_profile(&self) -> ClientResult<UserProfile> {
        let token = self.token().await.ok_or(ClientError::MissingToken)?;
        match self.api.fetch_profile(&token).await {
            Ok(profile) => {
                let mut guard = self.state.lock().await;
                if let Some(session) = guard.as_mut().filter(|s| s.token == token) {
                    session.profile = Some(profile.clone());
                }
                Ok(profile)
            }
            Err(err) if err.status().is_some() => {
                warn!("session: profile request rejected ({err}); clearing session");
                self.expire().await;
                Err(ClientError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn upgrade(&self, plan: Plan) -> ClientResult<UserProfile> {
        let token = self.token().await.ok_or(ClientError::MissingToken)?;
        let outcome = self.api.upgrade(&token, plan).await;
        self.settle(outcome, false).await?;
        info!(plan = %plan, "session: plan upgrade accepted");
        self.refresh_profile().await
    }

    pub async fn deep_research(&self, query: &str) -> ClientResult<DeepResearchResponse> {
        let token = self.token().await.ok_or(ClientError::MissingToken)?;
        let outcome = self.api.deep_research(&token, query).await;
        self.settle(outcome, true).await
    }

    pub async fn calculate(&self, request: &CalculateRequest) -> ClientResult<CalculationResult> {
        let token = self.token().await.ok_or(ClientError::MissingToken)?;
        let outcome = self.api.calculate(&token, request).await;
        self.settle(outcome, true).await
    }

    pub async fn generate_report(
        &self,
        request: &CalculateRequest,
        result: &CalculationResult,
    ) -> ClientResult<Vec<u8>> {
        let token = self.token().await.ok_or(ClientError::MissingToken)?;
        let outcome = self.api.generate_report(&token, request, result).await;
        self.settle(outcome, false).await
    }

    async fn establish(&self, token: String) -> ClientResult<UserProfile> {
        self.store.save(&token)?;
        *self.state.lock().await = Some(Session {
            token,
            profile: None,
        });
        match self.refresh_profile().await {
            Ok(profile) => Ok(profile),
            Err(err) => {
                warn!("session: sign-in accepted but profile unavailable ({err}); discarding token");
                self.expire().await;
                Err(err)
            }
        }
    }

    async fn settle<T>(&self, outcome: ClientResult<T>, metered: bool) -> ClientResult<T> {
        match outcome {
            Ok(value) => {
                if metered {
                    if let Err(err) = self.refresh_profile().await {
                        warn!("session: usage refresh after metered call failed: {err}");
                    }
                }
                Ok(value)
            }
            Err(ClientError::Unauthorized) => {
                self.expire().await;
                Err(ClientError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    async fn expire(&self) {
        self.state.lock().await.take();
        if let Err(err) = self.store.clear() {
            warn!("session: failed to clear persisted token: {err}");
        }
    }
}
