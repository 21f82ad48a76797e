use caseguard_types::{Decision, Subject};
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a decision record.
///
/// Identity fields:
/// - subject role and id
/// - action tag (as requested, recognized or not)
/// - resource id (if present)
/// - outcome: allowed flag and deny code
pub fn fingerprint_for_decision(
    subject: &Subject,
    action_tag: &str,
    resource_id: Option<&str>,
    decision: &Decision,
) -> String {
    let role = subject.role.to_string();
    let outcome = if decision.allowed { "allow" } else { "deny" };
    let mut parts = vec![
        role.as_str(),
        subject.id.as_str(),
        action_tag,
        resource_id.unwrap_or("~"),
        outcome,
    ];
    if let Some(code) = decision.code.as_deref() {
        parts.push(code);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
