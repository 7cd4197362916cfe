use super::*;
use shared::domain::Usage;

fn user(plan: Plan, deepresearch: u32, calculator: u32) -> UserProfile {
    UserProfile {
        name: "Mario Rossi".into(),
        email: "mario@example.com".into(),
        plan,
        usage: Usage {
            deepresearch,
            calculator,
        },
    }
}

const GATED: [Feature; 2] = [Feature::DeepResearch, Feature::Calculator];

#[test]
fn free_tier_never_uses_gated_features() {
    for feature in GATED {
        for dr in 0..6 {
            for calc in 0..6 {
                assert!(!can_use(feature, Some(&user(Plan::Free, dr, calc))));
            }
        }
    }
}

#[test]
fn plus_tier_always_uses_gated_features() {
    for feature in GATED {
        for count in [0, 1, 2, 3, 50, u32::MAX] {
            assert!(can_use(feature, Some(&user(Plan::Plus, count, count))));
        }
    }
}

#[test]
fn pro_tier_is_bounded_by_the_matching_counter_only() {
    for dr in 0..5 {
        for calc in 0..5 {
            let profile = user(Plan::Pro, dr, calc);
            assert_eq!(can_use(Feature::DeepResearch, Some(&profile)), dr < 2);
            assert_eq!(can_use(Feature::Calculator, Some(&profile)), calc < 2);
        }
    }
}

#[test]
fn search_needs_only_a_signed_in_user() {
    for plan in Plan::ALL {
        assert!(can_use(Feature::Search, Some(&user(plan, 9, 9))));
    }
    assert!(!can_use(Feature::Search, None));
}

#[test]
fn navigation_checks_plan_before_quota() {
    assert_eq!(
        gate_navigation(Feature::Search, None),
        GateDecision::Allowed
    );
    assert_eq!(
        gate_navigation(Feature::DeepResearch, None),
        GateDecision::UpgradeRequired
    );
    // Exhausted counters on the free tier still report the plan problem first.
    assert_eq!(
        gate_navigation(Feature::Calculator, Some(&user(Plan::Free, 5, 5))),
        GateDecision::UpgradeRequired
    );
    assert_eq!(
        gate_navigation(Feature::Calculator, Some(&user(Plan::Pro, 0, 2))),
        GateDecision::LimitReached
    );
    assert_eq!(
        gate_navigation(Feature::DeepResearch, Some(&user(Plan::Pro, 1, 2))),
        GateDecision::Allowed
    );
    assert_eq!(
        gate_navigation(Feature::DeepResearch, Some(&user(Plan::Plus, 40, 40))),
        GateDecision::Allowed
    );
}

#[test]
fn remaining_quota_reflects_plan() {
    assert_eq!(
        remaining_quota(Feature::DeepResearch, &user(Plan::Free, 0, 0)),
        Quota::Locked
    );
    assert_eq!(
        remaining_quota(Feature::DeepResearch, &user(Plan::Pro, 1, 0)),
        Quota::Remaining(1)
    );
    assert_eq!(
        remaining_quota(Feature::Calculator, &user(Plan::Pro, 0, 7)),
        Quota::Remaining(0)
    );
    assert_eq!(
        remaining_quota(Feature::Calculator, &user(Plan::Plus, 0, 7)),
        Quota::Unlimited
    );
    assert_eq!(
        remaining_quota(Feature::Search, &user(Plan::Free, 0, 0)),
        Quota::Unlimited
    );
}
