use crate::engine::evaluate;
use caseguard_types::{Action, Case, CapabilityEntry, Subject};

/// Evaluate every case-scoped action for one subject against one snapshot.
///
/// Entries come back in the declaration order of [`Action::CASE_SCOPED`], so
/// two runs over the same inputs produce byte-identical reports. Page callers
/// use this to render a whole action bar from a single snapshot read.
pub fn capability_matrix(subject: &Subject, case: &Case) -> Vec<CapabilityEntry> {
    Action::CASE_SCOPED
        .into_iter()
        .map(|action| CapabilityEntry {
            action: action.as_tag().to_string(),
            decision: evaluate(subject, action, Some(case)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin, case, user};
    use caseguard_types::CaseStatus;

    #[test]
    fn matrix_covers_case_scoped_actions_in_order() {
        let snapshot = case(CaseStatus::InProgress, "jane", &["alex"]);
        let matrix = capability_matrix(&user("jane"), &snapshot);

        let tags: Vec<&str> = matrix.iter().map(|e| e.action.as_str()).collect();
        let expected: Vec<&str> = Action::CASE_SCOPED.iter().map(|a| a.as_tag()).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn matrix_agrees_with_single_evaluation() {
        let snapshot = case(CaseStatus::Draft, "u1", &[]);
        let subject = user("u2");
        for entry in capability_matrix(&subject, &snapshot) {
            let action = Action::parse(&entry.action).unwrap();
            assert_eq!(entry.decision, evaluate(&subject, action, Some(&snapshot)));
        }
    }

    #[test]
    fn admin_matrix_is_all_allowed() {
        let snapshot = case(CaseStatus::Rejected, "someone", &[]);
        assert!(
            capability_matrix(&admin(), &snapshot)
                .iter()
                .all(|e| e.decision.allowed)
        );
    }
}
