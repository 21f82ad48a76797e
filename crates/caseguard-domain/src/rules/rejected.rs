use caseguard_types::{Action, Case, CaseStatus, Decision, ids};

/// Immutability of rejected cases.
///
/// Fires for any non-admin subject, including the creator, and must be
/// evaluated before the ownership-based edit rule: the generic edit rule
/// nominally covers `{DRAFT, REJECTED}`, and this override is what
/// neutralizes the REJECTED branch.
pub fn apply(action: Action, resource: Option<&Case>) -> Option<Decision> {
    let case = resource?;
    if action == Action::CaseEdit && case.status == CaseStatus::Rejected {
        return Some(Decision::deny(
            ids::CODE_REJECTED_IMMUTABLE,
            "Rejected cases are archived for audit purposes and cannot be modified. \
             Create a new case based on this record instead.",
        ));
    }
    None
}
