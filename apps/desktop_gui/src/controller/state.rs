//! Everything the window renders. Owned by the UI thread and replaced wholesale
//! by the reducers; nothing here is persisted.

use shared::{
    domain::{BillingPeriod, Feature, Plan, RenovationLevel, UserProfile},
    protocol::{CalculateRequest, CalculationResult},
};

use crate::i18n::{tr, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Auth,
    Pricing,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Upgrade,
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Language,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Name,
    SearchQuery,
    DeepQuery,
    BuyPrice,
    Surface,
    City,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorForm {
    pub buy_price: String,
    pub surface: String,
    pub city: String,
    pub renovation_level: RenovationLevel,
}

impl CalculatorForm {
    /// `None` until both numeric fields parse.
    pub fn to_request(&self) -> Option<CalculateRequest> {
        let buy_price = parse_amount(&self.buy_price)?;
        let surface = parse_amount(&self.surface)?;
        Some(CalculateRequest {
            buy_price,
            surface,
            city: self.city.trim().to_string(),
            renovation_level: self.renovation_level,
        })
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// A completed calculation together with the input that produced it; the
/// report is generated from this pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub request: CalculateRequest,
    pub result: CalculationResult,
}

/// Localized text resolved at render time so a language switch re-renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: &'static str,
    pub detail: Option<String>,
}

impl Message {
    pub fn new(key: &'static str) -> Self {
        Self { key, detail: None }
    }

    pub fn with_detail(key: &'static str, detail: Option<String>) -> Self {
        Self { key, detail }
    }

    pub fn render(&self, lang: Language) -> String {
        let text = tr(lang, self.key);
        match self.detail.as_deref() {
            Some(detail) => format!("{text}: {detail}"),
            None => text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDownload {
    pub filename: String,
    pub document: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub view: View,
    pub tab: Feature,
    pub auth_mode: AuthMode,
    pub language: Language,
    pub google_auth_url: String,

    pub has_token: bool,
    pub user: Option<UserProfile>,

    pub auth_form: AuthForm,
    pub auth_loading: bool,
    pub auth_error: Option<Message>,

    pub search_query: String,
    pub deep_query: String,
    pub deep_result: Option<String>,
    pub deep_loading: bool,
    pub calculator: CalculatorForm,
    pub calculation: Option<Calculation>,
    pub calc_loading: bool,
    pub report_loading: bool,

    pub billing: BillingPeriod,
    pub modal: Option<Modal>,
    pub card_plan: Option<Plan>,
    pub upgrade_pending: bool,
    pub dropdown: Option<Dropdown>,

    pub notice: Option<Notice>,
    pub status: String,

    pub pending_download: Option<ReportDownload>,
    pub pending_open_url: Option<String>,
}

impl AppState {
    pub fn new(language: Language, google_auth_url: impl Into<String>) -> Self {
        Self {
            language,
            google_auth_url: google_auth_url.into(),
            ..Self::default()
        }
    }

    /// Fresh state after the session ends; only configuration survives.
    pub fn signed_out(&self) -> Self {
        Self::new(self.language, self.google_auth_url.clone())
    }

    pub fn form_value(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.auth_form.email,
            FormField::Password => &self.auth_form.password,
            FormField::Name => &self.auth_form.name,
            FormField::SearchQuery => &self.search_query,
            FormField::DeepQuery => &self.deep_query,
            FormField::BuyPrice => &self.calculator.buy_price,
            FormField::Surface => &self.calculator.surface,
            FormField::City => &self.calculator.city,
        }
    }

    pub(crate) fn form_value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Email => &mut self.auth_form.email,
            FormField::Password => &mut self.auth_form.password,
            FormField::Name => &mut self.auth_form.name,
            FormField::SearchQuery => &mut self.search_query,
            FormField::DeepQuery => &mut self.deep_query,
            FormField::BuyPrice => &mut self.calculator.buy_price,
            FormField::Surface => &mut self.calculator.surface,
            FormField::City => &mut self.calculator.city,
        }
    }

    pub fn can_submit_deep_research(&self) -> bool {
        !self.deep_loading && !self.deep_query.trim().is_empty()
    }

    pub fn can_submit_calculation(&self) -> bool {
        !self.calc_loading && self.calculator.to_request().is_some()
    }

    pub fn can_submit_auth(&self) -> bool {
        !self.auth_loading
    }
}
