use caseguard_types::{Decision, Role, Subject};

/// Admin bypass: no action is withheld from administrators, for any resource
/// or none. Evaluated before everything else, including the rejected-case
/// immutability override.
pub fn apply(subject: &Subject) -> Option<Decision> {
    (subject.role == Role::Admin).then(Decision::allow)
}
