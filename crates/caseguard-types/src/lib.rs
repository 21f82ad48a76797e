//! Stable DTOs and IDs used across the caseguard workspace.
//!
//! This crate is intentionally boring:
//! - the subject / case / decision data model
//! - stable action tags and deny codes
//! - decision record and capability report envelopes
//! - explain registry for denial guidance

#![forbid(unsafe_code)]

pub mod action;
pub mod explain;
pub mod ids;
pub mod model;
pub mod record;

pub use action::Action;
pub use explain::{Explanation, lookup_explanation};
pub use model::{Case, CaseId, CaseStatus, Decision, RiskLevel, Role, Subject, SubjectId};
pub use record::{
    CapabilityEntry, CapabilityReport, DecisionRecord, SCHEMA_CAPABILITIES_V1, SCHEMA_DECISION_V1,
    ToolMeta,
};
