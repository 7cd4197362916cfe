use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{Plan, RenovationLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Form-encoded body of the password grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeRequest {
    pub plan: Plan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepResearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepResearchResponse {
    #[serde(default)]
    pub result: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub buy_price: f64,
    pub surface: f64,
    pub city: String,
    pub renovation_level: RenovationLevel,
}

/// Calculator output. The server owns the shape; fields are kept verbatim so the
/// report call can echo them back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationResult {
    pub fields: Map<String, Value>,
}

impl CalculationResult {
    pub const RENOVATION_COST: &'static str = "renovation_cost";
    pub const ESTIMATED_VALUE: &'static str = "estimated_value";
    pub const ROI: &'static str = "roi";
    pub const DURATION_MONTHS: &'static str = "duration_months";

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Plain-text rendering of a scalar field, `None` when absent or structured.
    pub fn display(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

/// Body of `/features/generate-report`: the calculator input followed by every
/// result field, result fields overriding on collision.
pub fn report_payload(request: &CalculateRequest, result: &CalculationResult) -> Value {
    let mut body = match serde_json::to_value(request) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for (key, value) in &result.fields {
        body.insert(key.clone(), value.clone());
    }
    Value::Object(body)
}

pub fn report_filename(city: &str) -> String {
    let city: String = city
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("Report_Immobiliare_{city}.docx")
}
