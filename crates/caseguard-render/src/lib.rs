//! Rendering utilities for decision consumers (permission gate, Markdown).
//!
//! Everything here is data-in, data-out: the gate returns an outcome value for
//! the UI layer to interpret, never markup.

#![forbid(unsafe_code)]

mod gate;
mod markdown;
mod model;

pub use gate::{GateMode, GateOutcome, gate, tooltip};
pub use markdown::render_markdown;
pub use model::{RenderableDecision, RenderableEntry, RenderableMatrix};
