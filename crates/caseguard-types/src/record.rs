use crate::model::{CaseId, CaseStatus, Decision, Subject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for caseguard artifacts.
pub const SCHEMA_DECISION_V1: &str = "caseguard.decision.v1";
pub const SCHEMA_CAPABILITIES_V1: &str = "caseguard.capabilities.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// One evaluated decision, wrapped for artifact output.
///
/// `action` is the tag as requested by the caller, which may be a tag the
/// engine does not recognize; the decision then carries the undefined-policy
/// code. The record is a snapshot of one evaluation, never a cacheable grant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionRecord {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub evaluated_at: OffsetDateTime,
    pub subject: Subject,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<CaseId>,
    pub decision: Decision,

    /// Stable identifier intended for dedup and trending. A hash of the
    /// decision identity fields (subject, action, resource, outcome).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// One action's verdict within a capability report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CapabilityEntry {
    pub action: String,
    pub decision: Decision,
}

/// Every case-scoped action evaluated for one subject against one snapshot.
///
/// Entries are in declaration order of the action set, so reports diff
/// cleanly across runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CapabilityReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub evaluated_at: OffsetDateTime,
    pub subject: Subject,
    pub case_id: CaseId,
    pub case_status: CaseStatus,
    pub entries: Vec<CapabilityEntry>,
}
