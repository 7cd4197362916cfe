use super::*;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use shared::domain::RenovationLevel;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct RecordedRequest {
    path: &'static str,
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    deep_research_usage: Arc<AtomicU32>,
}

impl ServerState {
    async fn record(&self, path: &'static str, headers: &HeaderMap, body: Value) {
        self.requests.lock().await.push(RecordedRequest {
            path,
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
    }

    async fn last(&self, path: &str) -> RecordedRequest {
        self.requests
            .lock()
            .await
            .iter()
            .rev()
            .find(|r| r.path == path)
            .cloned()
            .expect("request recorded")
    }
}

type Rejection = (StatusCode, Json<Value>);

fn reject(status: StatusCode, detail: &str) -> Rejection {
    (status, Json(json!({ "detail": detail })))
}

// Token values drive the server's answer so each test picks its scenario.
fn gate(headers: &HeaderMap) -> Result<String, Rejection> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    match token.as_deref() {
        None | Some("tok-expired") => Err(reject(StatusCode::UNAUTHORIZED, "Credenziali non valide")),
        Some("tok-free") => Err(reject(
            StatusCode::FORBIDDEN,
            "Upgrade richiesto per questa funzione",
        )),
        Some("tok-limited") => Err(reject(
            StatusCode::TOO_MANY_REQUESTS,
            "Limite giornaliero raggiunto. Passa a Plus.",
        )),
        Some(token) => Ok(token.to_string()),
    }
}

async fn handle_register(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Rejection> {
    state.record("/auth/register", &headers, body.clone()).await;
    if body["email"] == "taken@example.com" {
        return Err(reject(StatusCode::BAD_REQUEST, "Email già registrata"));
    }
    Ok(Json(json!({ "access_token": "tok-register", "token_type": "bearer" })))
}

async fn handle_login(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<Value>, Rejection> {
    state
        .record("/auth/token", &headers, json!(form.clone()))
        .await;
    let username = form.get("username").map(String::as_str);
    let password = form.get("password").map(String::as_str);
    if username == Some("mario@example.com") && password == Some("secret") {
        Ok(Json(json!({ "access_token": "tok-login", "token_type": "bearer" })))
    } else {
        Err(reject(StatusCode::BAD_REQUEST, "Email o password errati"))
    }
}

async fn handle_me(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Result<Json<Value>, Rejection> {
    state.record("/users/me", &headers, Value::Null).await;
    let token = match gate(&headers) {
        Ok(token) => token,
        Err((status, body)) if status == StatusCode::UNAUTHORIZED => return Err((status, body)),
        Err(_) => "tok-gated".to_string(),
    };
    let plan = if token == "tok-gated" { "free" } else { "pro" };
    Ok(Json(json!({
        "name": "Mario Rossi",
        "email": "mario@example.com",
        "plan": plan,
        "usage": {
            "deepresearch": state.deep_research_usage.load(Ordering::SeqCst),
            "calcola": 0
        }
    })))
}

async fn handle_upgrade(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Rejection> {
    state.record("/billing/upgrade", &headers, body.clone()).await;
    gate(&headers)?;
    Ok(Json(json!({ "status": "success", "new_plan": body["plan"] })))
}

async fn handle_deep_research(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Rejection> {
    state
        .record("/features/deep-research", &headers, body.clone())
        .await;
    gate(&headers)?;
    state.deep_research_usage.fetch_add(1, Ordering::SeqCst);
    Ok(Json(json!({
        "result": format!("Analisi per: {}", body["query"].as_str().unwrap_or_default()),
        "properties_count": 3,
        "remaining_usage": 1
    })))
}

async fn handle_calculate(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Rejection> {
    state.record("/features/calculate", &headers, body).await;
    gate(&headers)?;
    Ok(Json(json!({
        "renovation_cost": 42000,
        "estimated_value": 310000,
        "roi": 18.5,
        "duration_months": 6
    })))
}

async fn handle_report(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Vec<u8>, Rejection> {
    state
        .record("/features/generate-report", &headers, body)
        .await;
    gate(&headers)?;
    Ok(b"PK\x03\x04report-bytes".to_vec())
}

async fn spawn_api_server() -> (String, ServerState) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let state = ServerState::default();
    let app = Router::new()
        .route("/auth/register", post(handle_register))
        .route("/auth/token", post(handle_login))
        .route("/users/me", get(handle_me))
        .route("/billing/upgrade", post(handle_upgrade))
        .route("/features/deep-research", post(handle_deep_research))
        .route("/features/calculate", post(handle_calculate))
        .route("/features/generate-report", post(handle_report))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), state)
}

fn sample_calculation() -> CalculateRequest {
    CalculateRequest {
        buy_price: 250000.0,
        surface: 80.0,
        city: "Milano".into(),
        renovation_level: RenovationLevel::High,
    }
}

#[tokio::test]
async fn register_sends_json_and_returns_token() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(format!("{base}/"));

    let token = client
        .register(&RegisterRequest {
            email: "new@example.com".into(),
            password: "pw".into(),
            name: "Nuovo Utente".into(),
        })
        .await
        .expect("register");

    assert_eq!(token, "tok-register");
    let recorded = state.last("/auth/register").await;
    assert_eq!(recorded.body["name"], "Nuovo Utente");
    assert!(recorded.authorization.is_none());
}

#[tokio::test]
async fn register_failure_carries_server_detail() {
    let (base, _state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let err = client
        .register(&RegisterRequest {
            email: "taken@example.com".into(),
            password: "pw".into(),
            name: "Mario".into(),
        })
        .await
        .expect_err("duplicate email");

    match err {
        ClientError::Rejected { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail.as_deref(), Some("Email già registrata"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn login_posts_form_encoded_credentials() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let token = client
        .login("mario@example.com", "secret")
        .await
        .expect("login");

    assert_eq!(token, "tok-login");
    let recorded = state.last("/auth/token").await;
    assert_eq!(recorded.body["username"], "mario@example.com");
    assert_eq!(recorded.body["password"], "secret");
}

#[tokio::test]
async fn login_rejection_is_invalid_credentials() {
    let (base, _state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let err = client
        .login("mario@example.com", "wrong")
        .await
        .expect_err("bad password");
    assert!(matches!(err, ClientError::InvalidCredentials));
}

#[tokio::test]
async fn profile_request_carries_bearer_token() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let profile = client.fetch_profile("tok-login").await.expect("profile");

    assert_eq!(profile.plan, Plan::Pro);
    assert_eq!(profile.name, "Mario Rossi");
    let recorded = state.last("/users/me").await;
    assert_eq!(recorded.authorization.as_deref(), Some("Bearer tok-login"));
}

#[tokio::test]
async fn expired_token_on_profile_is_unauthorized() {
    let (base, _state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let err = client
        .fetch_profile("tok-expired")
        .await
        .expect_err("expired");
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn feature_calls_map_gate_statuses() {
    let (base, _state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let forbidden = client
        .deep_research("tok-free", "Napoli 200k")
        .await
        .expect_err("forbidden");
    assert!(matches!(forbidden, ClientError::UpgradeRequired { .. }));
    assert_eq!(
        forbidden.detail(),
        Some("Upgrade richiesto per questa funzione")
    );

    let limited = client
        .calculate("tok-limited", &sample_calculation())
        .await
        .expect_err("limited");
    assert!(matches!(limited, ClientError::LimitReached { .. }));

    let expired = client
        .deep_research("tok-expired", "Roma")
        .await
        .expect_err("expired");
    assert!(expired.is_session_expired());
}

#[tokio::test]
async fn deep_research_returns_result_text() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let response = client
        .deep_research("tok-login", "Milano NoLo bilocale")
        .await
        .expect("deep research");

    assert_eq!(response.result, "Analisi per: Milano NoLo bilocale");
    assert_eq!(response.extra["properties_count"], 3);
    let recorded = state.last("/features/deep-research").await;
    assert_eq!(recorded.body, json!({ "query": "Milano NoLo bilocale" }));
}

#[tokio::test]
async fn calculate_sends_form_values() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    let result = client
        .calculate("tok-login", &sample_calculation())
        .await
        .expect("calculate");

    assert_eq!(
        result.display(CalculationResult::DURATION_MONTHS).as_deref(),
        Some("6")
    );
    let recorded = state.last("/features/calculate").await;
    assert_eq!(
        recorded.body,
        json!({
            "buy_price": 250000.0,
            "surface": 80.0,
            "city": "Milano",
            "renovation_level": "alto"
        })
    );
}

#[tokio::test]
async fn report_echoes_calculation_and_returns_document_bytes() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(base);
    let request = sample_calculation();
    let result = client
        .calculate("tok-login", &request)
        .await
        .expect("calculate");

    let document = client
        .generate_report("tok-login", &request, &result)
        .await
        .expect("report");

    assert_eq!(document, b"PK\x03\x04report-bytes".to_vec());
    let recorded = state.last("/features/generate-report").await;
    assert_eq!(recorded.body["city"], "Milano");
    assert_eq!(recorded.body["roi"], 18.5);
    assert_eq!(recorded.body["renovation_cost"], 42000);
}

#[tokio::test]
async fn upgrade_sends_plan_name() {
    let (base, state) = spawn_api_server().await;
    let client = MarketClient::new(base);

    client.upgrade("tok-login", Plan::Plus).await.expect("upgrade");
    let recorded = state.last("/billing/upgrade").await;
    assert_eq!(recorded.body, json!({ "plan": "plus" }));

    let err = client
        .upgrade("tok-expired", Plan::Pro)
        .await
        .expect_err("expired");
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = MarketClient::new(format!("http://{addr}"));
    let err = client
        .login("mario@example.com", "secret")
        .await
        .expect_err("no server");
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn session_manager_over_http_tracks_usage_counters() {
    let (base, _state) = spawn_api_server().await;
    let session = SessionManager::new(
        Arc::new(MarketClient::new(base)),
        Arc::new(MemoryTokenStore::default()),
    );

    let profile = session
        .login("mario@example.com", "secret")
        .await
        .expect("login");
    assert_eq!(profile.usage.deepresearch, 0);

    session
        .deep_research("Roma affitti brevi")
        .await
        .expect("deep research");

    let refreshed = session.profile().await.expect("profile cached");
    assert_eq!(refreshed.usage.deepresearch, 1);
}
