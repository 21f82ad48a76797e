use crate::model::RenderableMatrix;

pub fn render_markdown(matrix: &RenderableMatrix) -> String {
    let mut out = String::new();

    out.push_str("# Caseguard capability report\n\n");
    out.push_str(&format!(
        "- Subject: `{}` ({})\n- Case: `{}` ({})\n",
        matrix.subject_id, matrix.subject_role, matrix.case_id, matrix.case_status
    ));

    let allowed = matrix.entries.iter().filter(|e| e.decision.allowed).count();
    out.push_str(&format!(
        "- Allowed: {} / {}\n\n",
        allowed,
        matrix.entries.len()
    ));

    if matrix.entries.is_empty() {
        out.push_str("No actions evaluated.\n");
        return out;
    }

    out.push_str("## Actions\n\n");

    for entry in &matrix.entries {
        if entry.decision.allowed {
            out.push_str(&format!("- [ALLOW] `{}`\n", entry.action));
            continue;
        }
        out.push_str(&format!(
            "- [DENY] `{}` / `{}` — {}\n",
            entry.action,
            entry.decision.code.as_deref().unwrap_or(""),
            entry.decision.reason.as_deref().unwrap_or("")
        ));
        if let Some(role) = &entry.decision.required_role {
            out.push_str(&format!("  - requires role: {}\n", role));
        }
    }

    out
}
