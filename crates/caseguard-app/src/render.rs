//! Render use cases: JSON artifacts and renderable conversions.

use anyhow::Context;
use caseguard_render::{RenderableDecision, RenderableEntry, RenderableMatrix};
use caseguard_types::{CapabilityReport, Decision, DecisionRecord};

pub fn render_markdown(matrix: &RenderableMatrix) -> String {
    caseguard_render::render_markdown(matrix)
}

pub fn to_renderable_decision(decision: &Decision) -> RenderableDecision {
    RenderableDecision {
        allowed: decision.allowed,
        code: decision.code.clone(),
        reason: decision.reason.clone(),
        required_role: decision.required_role.map(|role| role.to_string()),
    }
}

pub fn to_renderable_matrix(report: &CapabilityReport) -> RenderableMatrix {
    RenderableMatrix {
        subject_id: report.subject.id.to_string(),
        subject_role: report.subject.role.to_string(),
        case_id: report.case_id.to_string(),
        case_status: report.case_status.to_string(),
        entries: report
            .entries
            .iter()
            .map(|entry| RenderableEntry {
                action: entry.action.clone(),
                decision: to_renderable_decision(&entry.decision),
            })
            .collect(),
    }
}

/// Serialize a decision record as pretty JSON with a trailing newline.
pub fn serialize_record(record: &DecisionRecord) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(record).context("serialize decision record")?;
    out.push('\n');
    Ok(out)
}

/// Serialize a capability report as pretty JSON with a trailing newline.
pub fn serialize_report(report: &CapabilityReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize capability report")?;
    out.push('\n');
    Ok(out)
}
