//! The `decide` use case: evaluate one action and produce a decision record.

use anyhow::Context;
use caseguard_types::{Case, Decision, DecisionRecord, SCHEMA_DECISION_V1, Subject, ToolMeta};
use time::OffsetDateTime;

/// Input for the decide use case.
#[derive(Clone, Debug)]
pub struct DecideInput<'a> {
    /// Subject document (JSON text).
    pub subject_json: &'a str,
    /// Action tag as requested; may be unrecognized.
    pub action: &'a str,
    /// Case snapshot document (JSON text), when the caller holds one.
    pub case_json: Option<&'a str>,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    pub record: DecisionRecord,
}

/// Run the decide use case: parse inputs, evaluate, wrap in an envelope.
///
/// Malformed input documents are the only error path. An unrecognized action
/// tag or a missing snapshot is a denial inside the record, not an error.
pub fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    let subject: Subject =
        serde_json::from_str(input.subject_json).context("parse subject document")?;

    let case: Option<Case> = match input.case_json {
        Some(text) => Some(serde_json::from_str(text).context("parse case document")?),
        None => None,
    };

    let decision = caseguard_domain::evaluate_tag(&subject, input.action, case.as_ref());

    let resource_id = case.as_ref().map(|c| c.id.clone());
    let fingerprint = caseguard_domain::fingerprint_for_decision(
        &subject,
        input.action,
        resource_id.as_ref().map(|id| id.as_str()),
        &decision,
    );

    let record = DecisionRecord {
        schema: SCHEMA_DECISION_V1.to_string(),
        tool: ToolMeta {
            name: "caseguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        evaluated_at: OffsetDateTime::now_utc(),
        subject,
        action: input.action.to_string(),
        resource_id,
        decision,
        fingerprint: Some(fingerprint),
    };

    Ok(DecideOutput { record })
}

/// Map a decision to an exit code: 0 = allowed, 2 = denied.
pub fn decision_exit_code(decision: &Decision) -> i32 {
    if decision.allowed { 0 } else { 2 }
}
