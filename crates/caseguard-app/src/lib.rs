//! Use case orchestration for caseguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, types, and render layers. It is intentionally thin; the rule logic
//! lives in `caseguard-domain` and the CLI only handles argument parsing and
//! I/O.

#![forbid(unsafe_code)]

mod capabilities;
mod decide;
mod explain;
mod render;

pub use capabilities::{CapabilitiesInput, run_capabilities};
pub use decide::{DecideInput, DecideOutput, decision_exit_code, run_decide};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{
    render_markdown, serialize_record, serialize_report, to_renderable_decision,
    to_renderable_matrix,
};
