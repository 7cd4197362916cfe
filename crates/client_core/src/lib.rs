use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Plan, UserProfile},
    error::ApiError,
    protocol::{
        report_payload, CalculateRequest, CalculationResult, DeepResearchRequest,
        DeepResearchResponse, LoginForm, RegisterRequest, TokenResponse, UpgradeRequest,
    },
};
use tracing::debug;

pub mod access;
pub mod config;
pub mod error;
pub mod oauth;
pub mod session;

pub use access::{can_use, gate_navigation, remaining_quota, GateDecision, Quota};
pub use config::{load_settings, ClientSettings};
pub use error::{ClientError, ClientResult};
pub use oauth::{google_auth_url, OAuthCallback};
pub use session::{FileTokenStore, MemoryTokenStore, SessionManager, TokenStore};

/// Remote API surface. Implemented over HTTP by [`MarketClient`]; tests swap in
/// in-memory fakes.
#[async_trait]
pub trait MarketApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<String>;
    async fn login(&self, email: &str, password: &str) -> ClientResult<String>;
    async fn fetch_profile(&self, token: &str) -> ClientResult<UserProfile>;
    async fn upgrade(&self, token: &str, plan: Plan) -> ClientResult<()>;
    async fn deep_research(&self, token: &str, query: &str) -> ClientResult<DeepResearchResponse>;
    async fn calculate(
        &self,
        token: &str,
        request: &CalculateRequest,
    ) -> ClientResult<CalculationResult>;
    async fn generate_report(
        &self,
        token: &str,
        request: &CalculateRequest,
        result: &CalculationResult,
    ) -> ClientResult<Vec<u8>>;
}

pub struct MarketClient {
    http: Client,
    api_base: String,
}

impl MarketClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: config::normalize_api_base(&api_base.into()),
        }
    }

    pub fn google_auth_url(&self) -> String {
        oauth::google_auth_url(&self.api_base)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    fn authorized(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }
}

async fn rejection(res: Response) -> (u16, Option<String>) {
    let status = res.status().as_u16();
    let body = res.bytes().await.unwrap_or_default();
    let detail = ApiError::from_response(status, &body).message;
    (status, Some(detail).filter(|d| !d.is_empty()))
}

async fn decode_json<T: DeserializeOwned>(res: Response) -> ClientResult<T> {
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| ClientError::Decode(err.to_string()))
}

/// Maps a non-success status of an authenticated call onto the error taxonomy.
async fn ensure_success(res: Response) -> ClientResult<Response> {
    if res.status().is_success() {
        return Ok(res);
    }
    let (status, detail) = rejection(res).await;
    Err(ClientError::from_status(status, detail))
}

#[async_trait]
impl MarketApi for MarketClient {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<String> {
        let res = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        if !res.status().is_success() {
            let (status, detail) = rejection(res).await;
            return Err(ClientError::Rejected { status, detail });
        }
        let body: TokenResponse = decode_json(res).await?;
        Ok(body.access_token)
    }

    async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let res = self
            .http
            .post(self.url("/auth/token"))
            .form(&LoginForm {
                username: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        if !res.status().is_success() {
            debug!(status = res.status().as_u16(), "login rejected");
            return Err(ClientError::InvalidCredentials);
        }
        let body: TokenResponse = decode_json(res).await?;
        Ok(body.access_token)
    }

    async fn fetch_profile(&self, token: &str) -> ClientResult<UserProfile> {
        let res = self
            .authorized(self.http.get(self.url("/users/me")), token)
            .send()
            .await?;
        decode_json(ensure_success(res).await?).await
    }

    async fn upgrade(&self, token: &str, plan: Plan) -> ClientResult<()> {
        let res = self
            .authorized(self.http.post(self.url("/billing/upgrade")), token)
            .json(&UpgradeRequest { plan })
            .send()
            .await?;
        ensure_success(res).await?;
        Ok(())
    }

    async fn deep_research(&self, token: &str, query: &str) -> ClientResult<DeepResearchResponse> {
        let res = self
            .authorized(self.http.post(self.url("/features/deep-research")), token)
            .json(&DeepResearchRequest {
                query: query.to_string(),
            })
            .send()
            .await?;
        decode_json(ensure_success(res).await?).await
    }

    async fn calculate(
        &self,
        token: &str,
        request: &CalculateRequest,
    ) -> ClientResult<CalculationResult> {
        let res = self
            .authorized(self.http.post(self.url("/features/calculate")), token)
            .json(request)
            .send()
            .await?;
        decode_json(ensure_success(res).await?).await
    }

    async fn generate_report(
        &self,
        token: &str,
        request: &CalculateRequest,
        result: &CalculationResult,
    ) -> ClientResult<Vec<u8>> {
        let res = self
            .authorized(self.http.post(self.url("/features/generate-report")), token)
            .json(&report_payload(request, result))
            .send()
            .await?;
        let document = ensure_success(res).await?.bytes().await?;
        Ok(document.to_vec())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;
