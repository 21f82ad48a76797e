use crate::model::RenderableDecision;

/// What the gate does with a denied control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateMode {
    /// Remove the control entirely.
    Hide,
    /// Keep the control visible but inert, with an explanatory tooltip.
    Disable,
}

/// The gate's verdict for one guarded control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Allowed: render the control as-is.
    Render,
    /// Denied in hide mode.
    Hidden,
    /// Denied in disable mode; the tooltip carries the reason and, when the
    /// rule names one, a required-role hint.
    Disabled { tooltip: String },
}

/// Gate one control on a decision.
///
/// Decisions must not be cached across renders: callers re-evaluate whenever
/// the case status may have changed.
pub fn gate(decision: &RenderableDecision, mode: GateMode) -> GateOutcome {
    if decision.allowed {
        return GateOutcome::Render;
    }
    match mode {
        GateMode::Hide => GateOutcome::Hidden,
        GateMode::Disable => GateOutcome::Disabled {
            tooltip: tooltip(decision),
        },
    }
}

/// Tooltip text for a denied control.
pub fn tooltip(decision: &RenderableDecision) -> String {
    let mut out = String::from("Access Restricted: ");
    out.push_str(
        decision
            .reason
            .as_deref()
            .unwrap_or("You do not have permission to perform this action."),
    );
    if let Some(role) = &decision.required_role {
        out.push_str(&format!("\nRequires Role: {}", role));
    }
    out
}
