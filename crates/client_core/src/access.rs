//! Client-side plan and quota gate.
//!
//! The API server enforces plans and daily quotas (403 / 429). These checks only
//! avoid sending requests that are certain to be refused; a stale profile can
//! still let a request through, and the server answer always wins.

use shared::domain::{Feature, Plan, UserProfile, DAILY_QUOTA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    UpgradeRequired,
    LimitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    Unlimited,
    Remaining(u32),
    Locked,
}

pub fn can_use(feature: Feature, user: Option<&UserProfile>) -> bool {
    let Some(user) = user else {
        return false;
    };
    if !feature.is_gated() {
        return true;
    }
    match user.plan {
        Plan::Free => false,
        Plan::Plus => true,
        Plan::Pro => user.usage.count(feature) < DAILY_QUOTA,
    }
}

/// Two-stage check run before switching dashboard tabs: plan eligibility first,
/// then quota.
pub fn gate_navigation(feature: Feature, user: Option<&UserProfile>) -> GateDecision {
    if !feature.is_gated() {
        return GateDecision::Allowed;
    }
    match user {
        None => GateDecision::UpgradeRequired,
        Some(profile) if profile.plan == Plan::Free => GateDecision::UpgradeRequired,
        Some(_) if !can_use(feature, user) => GateDecision::LimitReached,
        Some(_) => GateDecision::Allowed,
    }
}

pub fn remaining_quota(feature: Feature, user: &UserProfile) -> Quota {
    if !feature.is_gated() {
        return Quota::Unlimited;
    }
    match user.plan {
        Plan::Free => Quota::Locked,
        Plan::Plus => Quota::Unlimited,
        Plan::Pro => Quota::Remaining(DAILY_QUOTA.saturating_sub(user.usage.count(feature))),
    }
}

#[cfg(test)]
#[path = "tests/access_tests.rs"]
mod tests;
