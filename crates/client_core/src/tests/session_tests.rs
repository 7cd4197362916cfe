use std::{
    env, fs,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex as StdMutex,
    },
    time::{SystemTime, UNIX_EPOCH},
};

use super::*;
use serde_json::Map;
use shared::domain::{RenovationLevel, Usage};

struct FakeApi {
    profile_status: StdMutex<Option<u16>>,
    feature_status: StdMutex<Option<u16>>,
    profile_undecodable: AtomicBool,
    profile_calls: AtomicUsize,
    seen_tokens: StdMutex<Vec<String>>,
}

impl FakeApi {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            profile_status: StdMutex::new(None),
            feature_status: StdMutex::new(None),
            profile_undecodable: AtomicBool::new(false),
            profile_calls: AtomicUsize::new(0),
            seen_tokens: StdMutex::new(Vec::new()),
        })
    }

    fn fail_profile_with(&self, status: u16) {
        *self.profile_status.lock().expect("lock") = Some(status);
    }

    fn fail_features_with(&self, status: u16) {
        *self.feature_status.lock().expect("lock") = Some(status);
    }

    fn feature_outcome(&self, token: &str) -> ClientResult<()> {
        self.seen_tokens.lock().expect("lock").push(token.to_string());
        match *self.feature_status.lock().expect("lock") {
            Some(status) => Err(ClientError::from_status(status, None)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MarketApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<String> {
        if request.email == "taken@example.com" {
            return Err(ClientError::Rejected {
                status: 400,
                detail: Some("Email già registrata".into()),
            });
        }
        Ok("tok-register".into())
    }

    async fn login(&self, _email: &str, password: &str) -> ClientResult<String> {
        if password == "secret" {
            Ok("tok-login".into())
        } else {
            Err(ClientError::InvalidCredentials)
        }
    }

    async fn fetch_profile(&self, token: &str) -> ClientResult<UserProfile> {
        let calls = self.profile_calls.fetch_add(1, Ordering::SeqCst) as u32;
        self.seen_tokens.lock().expect("lock").push(token.to_string());
        if let Some(status) = *self.profile_status.lock().expect("lock") {
            return Err(ClientError::from_status(status, None));
        }
        if self.profile_undecodable.load(Ordering::SeqCst) {
            return Err(ClientError::Decode("profile body is not an object".into()));
        }
        Ok(UserProfile {
            name: "Mario Rossi".into(),
            email: "mario@example.com".into(),
            plan: Plan::Pro,
            usage: Usage {
                deepresearch: calls,
                calculator: 0,
            },
        })
    }

    async fn upgrade(&self, token: &str, _plan: Plan) -> ClientResult<()> {
        self.feature_outcome(token)
    }

    async fn deep_research(&self, token: &str, query: &str) -> ClientResult<DeepResearchResponse> {
        self.feature_outcome(token)?;
        Ok(DeepResearchResponse {
            result: format!("report for {query}"),
            extra: Map::new(),
        })
    }

    async fn calculate(
        &self,
        token: &str,
        _request: &CalculateRequest,
    ) -> ClientResult<CalculationResult> {
        self.feature_outcome(token)?;
        Ok(CalculationResult::default())
    }

    async fn generate_report(
        &self,
        token: &str,
        _request: &CalculateRequest,
        _result: &CalculationResult,
    ) -> ClientResult<Vec<u8>> {
        self.feature_outcome(token)?;
        Ok(vec![1, 2, 3])
    }
}

fn manager(api: Arc<FakeApi>, store: Arc<MemoryTokenStore>) -> SessionManager {
    SessionManager::new(api, store)
}

fn calculation() -> CalculateRequest {
    CalculateRequest {
        buy_price: 180000.0,
        surface: 65.0,
        city: "Napoli".into(),
        renovation_level: RenovationLevel::Low,
    }
}

#[tokio::test]
async fn login_persists_token_and_caches_profile() {
    let api = FakeApi::new();
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(api.clone(), store.clone());

    let profile = session
        .login(" mario@example.com ", "secret")
        .await
        .expect("login");

    assert_eq!(profile.plan, Plan::Pro);
    assert_eq!(store.load().expect("load").as_deref(), Some("tok-login"));
    assert_eq!(session.token().await.as_deref(), Some("tok-login"));
    assert_eq!(session.profile().await, Some(profile));
}

#[tokio::test]
async fn wrong_password_leaves_no_session() {
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(FakeApi::new(), store.clone());

    let err = session
        .login("mario@example.com", "nope")
        .await
        .expect_err("bad password");

    assert!(matches!(err, ClientError::InvalidCredentials));
    assert!(session.token().await.is_none());
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn registration_rejection_keeps_detail() {
    let session = manager(FakeApi::new(), Arc::new(MemoryTokenStore::default()));

    let err = session
        .register("taken@example.com", "pw", "Mario")
        .await
        .expect_err("duplicate");

    assert_eq!(err.detail(), Some("Email già registrata"));
    assert!(session.token().await.is_none());
}

#[tokio::test]
async fn rejected_profile_request_destroys_session() {
    let api = FakeApi::new();
    api.fail_profile_with(500);
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(api, store.clone());

    let err = session
        .register("new@example.com", "pw", "Nuovo")
        .await
        .expect_err("profile rejected");

    assert!(matches!(err, ClientError::Unauthorized));
    assert!(session.token().await.is_none());
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn unreadable_profile_after_login_discards_token() {
    let api = FakeApi::new();
    api.profile_undecodable.store(true, Ordering::SeqCst);
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(api, store.clone());

    let err = session
        .login("mario@example.com", "secret")
        .await
        .expect_err("profile unreadable");

    assert!(matches!(err, ClientError::Decode(_)));
    assert!(session.token().await.is_none());
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn unreadable_profile_on_restore_keeps_stored_token_only() {
    let api = FakeApi::new();
    api.profile_undecodable.store(true, Ordering::SeqCst);
    let store = Arc::new(MemoryTokenStore::with_token("tok-previous"));
    let session = manager(api, store.clone());

    let err = session.restore().await.expect_err("profile unreadable");

    assert!(matches!(err, ClientError::Decode(_)));
    assert!(session.token().await.is_none());
    assert_eq!(store.load().expect("load").as_deref(), Some("tok-previous"));
}

#[tokio::test]
async fn restore_reuses_persisted_token() {
    let api = FakeApi::new();
    let store = Arc::new(MemoryTokenStore::with_token("tok-previous"));
    let session = manager(api.clone(), store);

    let profile = session.restore().await.expect("restore");

    assert!(profile.is_some());
    assert_eq!(session.token().await.as_deref(), Some("tok-previous"));
    assert_eq!(
        api.seen_tokens.lock().expect("lock").as_slice(),
        ["tok-previous".to_string()]
    );
}

#[tokio::test]
async fn restore_without_token_is_a_no_op() {
    let api = FakeApi::new();
    let session = manager(api.clone(), Arc::new(MemoryTokenStore::default()));

    assert_eq!(session.restore().await.expect("restore"), None);
    assert_eq!(api.profile_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn metered_success_refreshes_usage() {
    let api = FakeApi::new();
    let session = manager(api.clone(), Arc::new(MemoryTokenStore::default()));
    session.login("mario@example.com", "secret").await.expect("login");
    let calls_after_login = api.profile_calls.load(Ordering::SeqCst);

    let response = session.deep_research("Roma").await.expect("deep research");
    session.calculate(&calculation()).await.expect("calculate");

    assert_eq!(response.result, "report for Roma");
    assert_eq!(
        api.profile_calls.load(Ordering::SeqCst),
        calls_after_login + 2
    );
    let cached = session.profile().await.expect("profile");
    assert_eq!(cached.usage.deepresearch, (calls_after_login + 1) as u32);
}

#[tokio::test]
async fn report_generation_does_not_refresh_usage() {
    let api = FakeApi::new();
    let session = manager(api.clone(), Arc::new(MemoryTokenStore::default()));
    session.login("mario@example.com", "secret").await.expect("login");
    let calls_after_login = api.profile_calls.load(Ordering::SeqCst);

    let bytes = session
        .generate_report(&calculation(), &CalculationResult::default())
        .await
        .expect("report");

    assert_eq!(bytes, vec![1, 2, 3]);
    assert_eq!(api.profile_calls.load(Ordering::SeqCst), calls_after_login);
}

#[tokio::test]
async fn gate_rejections_keep_the_session() {
    let api = FakeApi::new();
    let session = manager(api.clone(), Arc::new(MemoryTokenStore::default()));
    session.login("mario@example.com", "secret").await.expect("login");

    api.fail_features_with(403);
    let forbidden = session.deep_research("Roma").await.expect_err("403");
    assert!(matches!(forbidden, ClientError::UpgradeRequired { .. }));

    api.fail_features_with(429);
    let limited = session.calculate(&calculation()).await.expect_err("429");
    assert!(matches!(limited, ClientError::LimitReached { .. }));

    assert!(session.token().await.is_some());
}

#[tokio::test]
async fn unauthorized_feature_call_forces_logout() {
    let api = FakeApi::new();
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(api.clone(), store.clone());
    session.login("mario@example.com", "secret").await.expect("login");

    api.fail_features_with(401);
    let err = session.upgrade(Plan::Plus).await.expect_err("401");

    assert!(err.is_session_expired());
    assert!(session.token().await.is_none());
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn feature_without_session_is_never_sent() {
    let api = FakeApi::new();
    let session = manager(api.clone(), Arc::new(MemoryTokenStore::default()));

    let err = session.deep_research("Roma").await.expect_err("no token");

    assert!(matches!(err, ClientError::MissingToken));
    assert!(api.seen_tokens.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn oauth_completion_adopts_redirect_token() {
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(FakeApi::new(), store.clone());

    session.complete_oauth(" tok-google ").await.expect("oauth");
    assert_eq!(store.load().expect("load").as_deref(), Some("tok-google"));

    let err = session.complete_oauth("  ").await.expect_err("empty");
    assert!(matches!(err, ClientError::MissingToken));
}

#[tokio::test]
async fn logout_clears_persisted_token() {
    let store = Arc::new(MemoryTokenStore::default());
    let session = manager(FakeApi::new(), store.clone());
    session.login("mario@example.com", "secret").await.expect("login");

    session.logout().await.expect("logout");

    assert!(session.token().await.is_none());
    assert!(store.load().expect("load").is_none());
}

#[test]
fn file_token_store_keeps_token_under_fixed_key() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("bighouse_token_store_{suffix}"));
    let path = root.join("nested").join("session.json");
    fs::create_dir_all(&root).expect("temp root");
    fs::write(root.join("unrelated"), b"x").expect("unrelated file");

    let store = FileTokenStore::new(&path);
    assert!(store.load().expect("empty load").is_none());

    store.save("tok-file").expect("save");
    let raw: serde_json::Value =
        serde_json::from_slice(&fs::read(&path).expect("read")).expect("json");
    assert_eq!(raw[session::TOKEN_STORAGE_KEY], "tok-file");
    assert_eq!(store.load().expect("load").as_deref(), Some("tok-file"));

    fs::write(&path, br#"{"token":"tok-file","lang":"en"}"#).expect("rewrite");
    store.clear().expect("clear");
    let raw: serde_json::Value =
        serde_json::from_slice(&fs::read(&path).expect("read")).expect("json");
    assert!(raw.get(session::TOKEN_STORAGE_KEY).is_none());
    assert_eq!(raw["lang"], "en");

    fs::remove_dir_all(root).expect("cleanup");
}
