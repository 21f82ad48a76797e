//! Property-based tests for the decision engine.
//!
//! These verify the invariants that must hold across the whole input space:
//! admin omnipotence, rejected-case immutability, separation of duties,
//! decision shape, and determinism.

use crate::capabilities::capability_matrix;
use crate::engine::{evaluate, evaluate_tag};
use caseguard_types::{
    Action, Case, CaseId, CaseStatus, Decision, RiskLevel, Role, Subject, SubjectId, ids,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::User), Just(Role::Guest)]
}

fn arb_non_admin_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Guest)]
}

fn arb_status() -> impl Strategy<Value = CaseStatus> {
    prop_oneof![
        Just(CaseStatus::Draft),
        Just(CaseStatus::PendingApproval),
        Just(CaseStatus::Approved),
        Just(CaseStatus::Rejected),
        Just(CaseStatus::InProgress),
        Just(CaseStatus::Completed),
        Just(CaseStatus::Cancelled),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

/// Subject ids, including the empty id used by anonymous guest flows.
fn arb_subject_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[a-z][a-z0-9-]{0,11}").unwrap(),
    ]
}

fn arb_risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
        Just(RiskLevel::Critical),
    ]
}

fn arb_case() -> impl Strategy<Value = Case> {
    (
        arb_status(),
        arb_subject_id(),
        prop::collection::btree_set(arb_subject_id(), 0..4),
        arb_risk(),
    )
        .prop_map(|(status, creator, members, risk_level)| Case {
            id: CaseId::new("C-prop"),
            status,
            creator_id: SubjectId::new(creator),
            members: members.into_iter().map(SubjectId::new).collect(),
            risk_level,
        })
}

fn arb_subject() -> impl Strategy<Value = Subject> {
    (arb_role(), arb_subject_id()).prop_map(|(role, id)| Subject::new(role, id))
}

fn arb_resource() -> impl Strategy<Value = Option<Case>> {
    prop::option::of(arb_case())
}

fn shape_is_consistent(decision: &Decision) -> Result<(), TestCaseError> {
    if decision.allowed {
        prop_assert!(decision.code.is_none(), "allow must carry no code");
        prop_assert!(decision.reason.is_none(), "allow must carry no reason");
        prop_assert!(decision.required_role.is_none());
    } else {
        prop_assert!(decision.code.is_some(), "deny must carry a code");
        prop_assert!(
            decision.reason.as_deref().is_some_and(|r| !r.is_empty()),
            "deny must carry a non-empty reason"
        );
    }
    Ok(())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Admins are allowed every action, for every resource or none.
    #[test]
    fn admin_omnipotence(action in arb_action(), resource in arb_resource(), id in arb_subject_id()) {
        let subject = Subject::new(Role::Admin, id);
        let decision = evaluate(&subject, action, resource.as_ref());
        prop_assert!(decision.allowed);
    }

    /// Every decision is either a clean allow or a reasoned deny.
    #[test]
    fn decision_shape_is_consistent(
        subject in arb_subject(),
        action in arb_action(),
        resource in arb_resource(),
    ) {
        let decision = evaluate(&subject, action, resource.as_ref());
        shape_is_consistent(&decision)?;
    }

    /// Identical inputs produce structurally identical decisions.
    #[test]
    fn evaluation_is_deterministic(
        subject in arb_subject(),
        action in arb_action(),
        resource in arb_resource(),
    ) {
        let first = evaluate(&subject, action, resource.as_ref());
        let second = evaluate(&subject, action, resource.as_ref());
        prop_assert_eq!(first, second);
    }

    /// The snapshot is read, never changed.
    #[test]
    fn snapshot_is_never_mutated(
        subject in arb_subject(),
        action in arb_action(),
        case in arb_case(),
    ) {
        let before = case.clone();
        let _ = evaluate(&subject, action, Some(&case));
        prop_assert_eq!(case, before);
    }

    /// No non-admin edits a rejected case, regardless of ownership.
    #[test]
    fn rejected_cases_are_immutable(
        role in arb_non_admin_role(),
        case in arb_case(),
    ) {
        let mut case = case;
        case.status = CaseStatus::Rejected;
        // Give the subject the strongest possible standing: creator.
        let subject = Subject { role, id: case.creator_id.clone() };

        let decision = evaluate(&subject, Action::CaseEdit, Some(&case));
        prop_assert!(!decision.allowed);
    }

    /// Non-admins never approve or reject, and the user-tier denial names
    /// ADMIN as the required role.
    #[test]
    fn separation_of_duties(
        role in arb_non_admin_role(),
        resource in arb_resource(),
        id in arb_subject_id(),
    ) {
        let subject = Subject::new(role, id);
        for action in [Action::CaseApprove, Action::CaseReject] {
            let decision = evaluate(&subject, action, resource.as_ref());
            prop_assert!(!decision.allowed);
            if role == Role::User {
                prop_assert_eq!(decision.required_role, Some(Role::Admin));
            }
        }
    }

    /// For non-admins an allowed edit implies a DRAFT snapshot: the REJECTED
    /// branch of the ownership rule is always neutralized by the override.
    #[test]
    fn non_admin_edit_implies_draft(
        role in arb_non_admin_role(),
        case in arb_case(),
        id in arb_subject_id(),
    ) {
        let subject = Subject::new(role, id);
        let decision = evaluate(&subject, Action::CaseEdit, Some(&case));
        if decision.allowed {
            prop_assert_eq!(case.status, CaseStatus::Draft);
        }
    }

    /// Guests only ever obtain view or check-in.
    #[test]
    fn guest_allowances_are_view_or_check_in(
        action in arb_action(),
        resource in arb_resource(),
    ) {
        let subject = Subject::new(Role::Guest, "");
        let decision = evaluate(&subject, action, resource.as_ref());
        if decision.allowed {
            prop_assert!(matches!(action, Action::CaseView | Action::CaseCheckIn));
        }
    }

    /// Unknown tags deny cleanly for non-admins, whatever the inputs.
    #[test]
    fn unknown_tags_deny_cleanly(
        role in arb_non_admin_role(),
        resource in arb_resource(),
        tag in "[a-z]{1,8}:[a-z_-]{1,12}",
    ) {
        prop_assume!(Action::parse(&tag).is_none());
        let subject = Subject::new(role, "u1");
        let decision = evaluate_tag(&subject, &tag, resource.as_ref());
        prop_assert!(!decision.allowed);
        prop_assert_eq!(decision.code.as_deref(), Some(ids::CODE_UNDEFINED_POLICY));
    }

    /// Capability matrices are deterministic and total over the case-scoped
    /// action set.
    #[test]
    fn capability_matrix_is_deterministic(subject in arb_subject(), case in arb_case()) {
        let first = capability_matrix(&subject, &case);
        let second = capability_matrix(&subject, &case);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), Action::CASE_SCOPED.len());
        for entry in &first {
            shape_is_consistent(&entry.decision)?;
        }
    }
}
