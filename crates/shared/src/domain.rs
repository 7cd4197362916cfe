use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-feature daily allowance on the mid tier.
pub const DAILY_QUOTA: u32 = 2;

const PRO_MONTHLY_EUR: f64 = 5.99;
const PLUS_MONTHLY_EUR: f64 = 9.99;
const YEARLY_DISCOUNT: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Plus,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Plus];

    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Plus => "plus",
        }
    }

    pub fn monthly_price_eur(self) -> f64 {
        match self {
            Plan::Free => 0.0,
            Plan::Pro => PRO_MONTHLY_EUR,
            Plan::Plus => PLUS_MONTHLY_EUR,
        }
    }

    /// Price label shown on the pricing cards, without currency symbol.
    pub fn display_price(self, period: BillingPeriod) -> String {
        match (self, period) {
            (Plan::Free, _) => "0".to_string(),
            (plan, BillingPeriod::Monthly) => format!("{:.2}", plan.monthly_price_eur()),
            (plan, BillingPeriod::Yearly) => {
                format!("{:.2}", plan.monthly_price_eur() * YEARLY_DISCOUNT)
            }
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Plan {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "pro" => Ok(Plan::Pro),
            "plus" => Ok(Plan::Plus),
            other => Err(format!("unknown plan '{other}' (expected free, pro or plus)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn toggled(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }
}

/// Dashboard features. Only the last two are metered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feature {
    #[default]
    Search,
    DeepResearch,
    Calculator,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Search, Feature::DeepResearch, Feature::Calculator];

    pub fn is_gated(self) -> bool {
        !matches!(self, Feature::Search)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub deepresearch: u32,
    #[serde(default, rename = "calcola")]
    pub calculator: u32,
}

impl Usage {
    pub fn count(&self, feature: Feature) -> u32 {
        match feature {
            Feature::Search => 0,
            Feature::DeepResearch => self.deepresearch,
            Feature::Calculator => self.calculator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub plan: Plan,
    #[serde(default)]
    pub usage: Usage,
}

impl UserProfile {
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RenovationLevel {
    #[serde(rename = "basso")]
    Low,
    #[default]
    #[serde(rename = "medio")]
    Medium,
    #[serde(rename = "alto")]
    High,
}

impl RenovationLevel {
    pub const ALL: [RenovationLevel; 3] = [
        RenovationLevel::Low,
        RenovationLevel::Medium,
        RenovationLevel::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RenovationLevel::Low => "basso",
            RenovationLevel::Medium => "medio",
            RenovationLevel::High => "alto",
        }
    }
}

impl std::str::FromStr for RenovationLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basso" | "low" => Ok(RenovationLevel::Low),
            "medio" | "medium" => Ok(RenovationLevel::Medium),
            "alto" | "high" => Ok(RenovationLevel::High),
            other => Err(format!("unknown renovation level '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_reads_server_usage_keys() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"name":"Mario","email":"m@x.it","plan":"pro","usage":{"deepresearch":1,"calcola":2}}"#,
        )
        .expect("profile");
        assert_eq!(profile.plan, Plan::Pro);
        assert_eq!(profile.usage.count(Feature::DeepResearch), 1);
        assert_eq!(profile.usage.count(Feature::Calculator), 2);
        assert_eq!(profile.initial(), 'M');
    }

    #[test]
    fn yearly_price_applies_discount() {
        assert_eq!(Plan::Pro.display_price(BillingPeriod::Monthly), "5.99");
        assert_eq!(Plan::Pro.display_price(BillingPeriod::Yearly), "4.79");
        assert_eq!(Plan::Plus.display_price(BillingPeriod::Yearly), "7.99");
        assert_eq!(Plan::Free.display_price(BillingPeriod::Yearly), "0");
    }

    #[test]
    fn renovation_level_uses_italian_wire_names() {
        assert_eq!(
            serde_json::to_string(&RenovationLevel::High).expect("serialize"),
            "\"alto\""
        );
        assert_eq!("low".parse::<RenovationLevel>(), Ok(RenovationLevel::Low));
    }
}
