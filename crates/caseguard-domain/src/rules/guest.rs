use caseguard_types::{Action, Case, CaseStatus, Decision, Role, Subject, ids};

const GUEST_REASON: &str = "Guests have restricted access. Contact the activity owner for permission.";

/// Guest tier: terminal for guest subjects.
///
/// Guests may view any non-draft case and check in to in-progress activities.
/// Everything else, including every resource-independent action, is denied.
pub fn apply(subject: &Subject, action: Action, resource: Option<&Case>) -> Option<Decision> {
    if subject.role != Role::Guest {
        return None;
    }

    Some(match action {
        Action::CaseView => match resource {
            None => resource_required(),
            Some(case) if case.status != CaseStatus::Draft => Decision::allow(),
            Some(_) => Decision::deny(ids::CODE_GUEST_RESTRICTED, GUEST_REASON),
        },
        Action::CaseCheckIn => match resource {
            None => resource_required(),
            Some(case) if case.status == CaseStatus::InProgress => Decision::allow(),
            Some(_) => Decision::deny(ids::CODE_GUEST_RESTRICTED, GUEST_REASON),
        },
        _ => Decision::deny(ids::CODE_GUEST_RESTRICTED, GUEST_REASON),
    })
}

fn resource_required() -> Decision {
    Decision::deny(
        ids::CODE_RESOURCE_REQUIRED,
        "This action requires a case snapshot; none was provided.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{case_with_status, guest};

    #[test]
    fn guest_views_non_draft() {
        for status in [
            CaseStatus::PendingApproval,
            CaseStatus::Approved,
            CaseStatus::Rejected,
            CaseStatus::InProgress,
            CaseStatus::Completed,
            CaseStatus::Cancelled,
        ] {
            let case = case_with_status(status);
            let decision = apply(&guest(), Action::CaseView, Some(&case)).unwrap();
            assert!(decision.allowed, "guest should view {status}");
        }
    }

    #[test]
    fn guest_never_sees_drafts() {
        let case = case_with_status(CaseStatus::Draft);
        let decision = apply(&guest(), Action::CaseView, Some(&case)).unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.code.as_deref(), Some(ids::CODE_GUEST_RESTRICTED));
    }

    #[test]
    fn guest_check_in_only_in_progress() {
        let ongoing = case_with_status(CaseStatus::InProgress);
        assert!(apply(&guest(), Action::CaseCheckIn, Some(&ongoing)).unwrap().allowed);

        let approved = case_with_status(CaseStatus::Approved);
        let decision = apply(&guest(), Action::CaseCheckIn, Some(&approved)).unwrap();
        assert!(!decision.allowed);
    }

    #[test]
    fn guest_is_denied_everything_else() {
        let case = case_with_status(CaseStatus::InProgress);
        for action in [
            Action::CaseCreate,
            Action::CaseEdit,
            Action::CaseDelete,
            Action::CaseApprove,
            Action::CaseReject,
            Action::CaseQrDisplay,
            Action::CaseReport,
            Action::AdminPolicyManage,
            Action::AdminUserManage,
        ] {
            let decision = apply(&guest(), action, Some(&case)).unwrap();
            assert!(!decision.allowed, "guest should be denied {action}");
            assert_eq!(decision.code.as_deref(), Some(ids::CODE_GUEST_RESTRICTED));
            assert!(decision.reason.is_some());
        }
    }

    #[test]
    fn guest_view_without_snapshot_degrades_to_denial() {
        let decision = apply(&guest(), Action::CaseView, None).unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.code.as_deref(), Some(ids::CODE_RESOURCE_REQUIRED));
    }

    #[test]
    fn non_guests_fall_through() {
        assert!(apply(&Subject::new(Role::User, "u1"), Action::CaseView, None).is_none());
    }
}
