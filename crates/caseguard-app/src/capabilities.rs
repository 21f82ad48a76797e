//! The `capabilities` use case: evaluate the whole action bar for one case.

use anyhow::Context;
use caseguard_types::{Case, CapabilityReport, SCHEMA_CAPABILITIES_V1, Subject, ToolMeta};
use time::OffsetDateTime;

/// Input for the capabilities use case.
#[derive(Clone, Debug)]
pub struct CapabilitiesInput<'a> {
    /// Subject document (JSON text).
    pub subject_json: &'a str,
    /// Case snapshot document (JSON text).
    pub case_json: &'a str,
}

/// Run the capabilities use case: parse inputs, evaluate every case-scoped
/// action, wrap in a report envelope.
pub fn run_capabilities(input: CapabilitiesInput<'_>) -> anyhow::Result<CapabilityReport> {
    let subject: Subject =
        serde_json::from_str(input.subject_json).context("parse subject document")?;
    let case: Case = serde_json::from_str(input.case_json).context("parse case document")?;

    let entries = caseguard_domain::capability_matrix(&subject, &case);

    Ok(CapabilityReport {
        schema: SCHEMA_CAPABILITIES_V1.to_string(),
        tool: ToolMeta {
            name: "caseguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        evaluated_at: OffsetDateTime::now_utc(),
        subject,
        case_id: case.id,
        case_status: case.status,
        entries,
    })
}
