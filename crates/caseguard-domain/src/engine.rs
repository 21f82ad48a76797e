use crate::rules;
use caseguard_types::{Action, Case, Decision, Role, Subject, ids};

/// Evaluate one action for one subject against an optional case snapshot.
///
/// Deterministic and side-effect free; never panics for well-formed input.
/// The tier order is load-bearing:
///
/// 1. admin bypass
/// 2. resource guard for resource-dependent actions
/// 3. immutability of rejected cases (wins over ownership)
/// 4. guest restrictions
/// 5. user rules (total over the closed action set)
pub fn evaluate(subject: &Subject, action: Action, resource: Option<&Case>) -> Decision {
    if let Some(decision) = rules::admin::apply(subject) {
        return decision;
    }
    if action.requires_resource() && resource.is_none() {
        return Decision::deny(
            ids::CODE_RESOURCE_REQUIRED,
            "This action requires a case snapshot; none was provided.",
        );
    }
    if let Some(decision) = rules::rejected::apply(action, resource) {
        return decision;
    }
    if let Some(decision) = rules::guest::apply(subject, action, resource) {
        return decision;
    }
    rules::user::apply(subject, action, resource)
}

/// Boundary wrapper for callers still holding a string tag.
///
/// The admin bypass precedes tag recognition; for everyone else an
/// unrecognized tag resolves to the undefined-policy denial, never an error,
/// because the gating caller must always receive a decision to render.
pub fn evaluate_tag(subject: &Subject, tag: &str, resource: Option<&Case>) -> Decision {
    if subject.role == Role::Admin {
        return Decision::allow();
    }
    match Action::parse(tag) {
        Some(action) => evaluate(subject, action, resource),
        None => Decision::deny(ids::CODE_UNDEFINED_POLICY, "Policy undefined for this context."),
    }
}
