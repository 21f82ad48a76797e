use caseguard_types::{Action, Case, CaseStatus, Decision, Role, Subject, ids};

/// User tier: the default path for non-admin, non-guest subjects. Total over
/// the closed action set; the engine has already handled the admin bypass,
/// the rejected-immutability override, and the guest tier.
pub fn apply(subject: &Subject, action: Action, resource: Option<&Case>) -> Decision {
    match action {
        // Global read visibility for authenticated users, and anyone may
        // open a draft.
        Action::CaseView | Action::CaseCreate => Decision::allow(),

        // Separation of duties: a creator may never self-approve, so the
        // transition actions are withheld from every non-admin regardless of
        // ownership or resource.
        Action::CaseApprove | Action::CaseReject => Decision::deny_requiring(
            ids::CODE_ROLE_INSUFFICIENT,
            "Only administrators can approve or reject activity cases.",
            Role::Admin,
        ),

        Action::CaseQrDisplay => with_case(resource, |case| {
            if case.has_owner_rights(&subject.id) && case.status == CaseStatus::InProgress {
                return Decision::allow();
            }
            let code = if case.has_owner_rights(&subject.id) {
                ids::CODE_STATUS_INELIGIBLE
            } else {
                ids::CODE_NOT_OWNER_OR_MEMBER
            };
            Decision::deny(
                code,
                "Only the creator, assigned managers, or administrators can display \
                 the QR code, and only while the activity is in progress.",
            )
        }),

        Action::CaseEdit => with_case(resource, |case| {
            // The REJECTED branch is encoded for fidelity with the ownership
            // rule; the immutability override has already excluded it.
            if case.has_owner_rights(&subject.id)
                && matches!(case.status, CaseStatus::Draft | CaseStatus::Rejected)
            {
                return Decision::allow();
            }
            if !case.has_owner_rights(&subject.id) {
                Decision::deny(
                    ids::CODE_NOT_OWNER_OR_MEMBER,
                    "Only the case creator or assigned members can edit this case.",
                )
            } else {
                Decision::deny(
                    ids::CODE_STATUS_INELIGIBLE,
                    format!("Cases cannot be edited while in {} status.", case.status),
                )
            }
        }),

        Action::CaseDelete => with_case(resource, |case| {
            if case.is_creator(&subject.id) && case.status == CaseStatus::Draft {
                return Decision::allow();
            }
            let code = if case.is_creator(&subject.id) {
                ids::CODE_STATUS_INELIGIBLE
            } else {
                ids::CODE_NOT_OWNER_OR_MEMBER
            };
            Decision::deny(code, "Deletion is only allowed for your own drafts.")
        }),

        Action::CaseCheckIn => with_case(resource, |case| {
            if matches!(case.status, CaseStatus::InProgress | CaseStatus::Approved) {
                Decision::allow()
            } else {
                Decision::deny(
                    ids::CODE_STATUS_INELIGIBLE,
                    "Check-in is only available for ongoing or approved activities.",
                )
            }
        }),

        Action::CaseReport => with_case(resource, |case| {
            if matches!(case.status, CaseStatus::InProgress | CaseStatus::Completed) {
                Decision::allow()
            } else {
                Decision::deny(
                    ids::CODE_STATUS_INELIGIBLE,
                    "Reporting is available once the activity starts.",
                )
            }
        }),

        Action::AdminPolicyManage | Action::AdminUserManage => Decision::deny_requiring(
            ids::CODE_ROLE_INSUFFICIENT,
            "Administration requires Administrator privileges.",
            Role::Admin,
        ),
    }
}

/// Guard every resource dereference: a resource-dependent rule invoked with
/// no snapshot denies instead of panicking.
fn with_case(resource: Option<&Case>, rule: impl FnOnce(&Case) -> Decision) -> Decision {
    match resource {
        Some(case) => rule(case),
        None => Decision::deny(
            ids::CODE_RESOURCE_REQUIRED,
            "This action requires a case snapshot; none was provided.",
        ),
    }
}
