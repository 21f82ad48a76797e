//! The `explain` use case: look up action tag and deny code documentation.

use caseguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available action tags and deny codes.
    NotFound {
        identifier: String,
        available_tags: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for an action tag or deny code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_tags: explain::all_action_tags(),
            available_codes: explain::all_deny_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Guidance\n");
    out.push_str("--------\n");
    out.push_str(exp.guidance);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    tags: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown action tag or deny code: {}\n\n", identifier));
    out.push_str("Available action tags:\n");
    for tag in tags {
        out.push_str(&format!("  - {}\n", tag));
    }
    out.push_str("\nAvailable deny codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_action_tag() {
        let output = run_explain("case:qr-display");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_deny_code() {
        let output = run_explain("rejected_immutable");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        let ExplainOutput::NotFound {
            identifier,
            available_tags,
            available_codes,
        } = output
        else {
            panic!("expected NotFound");
        };
        assert_eq!(identifier, "not_a_real_thing");
        assert!(!available_tags.is_empty());
        assert!(!available_codes.is_empty());
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain("case:edit") else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with(exp.title));
        assert!(formatted.contains("Guidance"));
        assert!(formatted.contains(exp.guidance));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["case:one", "case:two"], &["code_one"]);
        assert!(formatted.contains("Unknown action tag or deny code: missing"));
        assert!(formatted.contains("Available action tags:"));
        assert!(formatted.contains("case:one"));
        assert!(formatted.contains("case:two"));
        assert!(formatted.contains("Available deny codes:"));
        assert!(formatted.contains("code_one"));
    }
}
