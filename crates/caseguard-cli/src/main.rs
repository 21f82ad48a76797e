//! CLI entry point for caseguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `caseguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use caseguard_app::{
    CapabilitiesInput, DecideInput, ExplainOutput, decision_exit_code, render_markdown,
    run_capabilities, run_decide, run_explain, serialize_record, serialize_report,
    to_renderable_decision, to_renderable_matrix,
};
use caseguard_render::{GateMode, GateOutcome, gate};
use caseguard_types::DecisionRecord;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "caseguard",
    version,
    about = "Authorization decisions for activity case management"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one action for a subject and emit a decision record.
    Decide {
        /// Path to the subject JSON document.
        #[arg(long)]
        subject: Utf8PathBuf,

        /// Action tag to evaluate (e.g. "case:qr-display").
        #[arg(long)]
        action: String,

        /// Path to the case snapshot JSON document, when the action targets one.
        #[arg(long)]
        case: Option<Utf8PathBuf>,

        /// Write the decision record to this file in addition to stdout.
        #[arg(long)]
        record_out: Option<Utf8PathBuf>,
    },

    /// Evaluate every case-scoped action and write a capability report.
    Capabilities {
        /// Path to the subject JSON document.
        #[arg(long)]
        subject: Utf8PathBuf,

        /// Path to the case snapshot JSON document.
        #[arg(long)]
        case: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/caseguard/capabilities.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/caseguard/capabilities.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render the gate outcome for a previously emitted decision record.
    Gate {
        /// Path to the decision record JSON file.
        record: Utf8PathBuf,

        /// What to do with a denied control (hide or disable).
        #[arg(long, default_value = "disable")]
        mode: String,
    },

    /// Explain an action tag or deny code.
    Explain {
        /// The action tag (e.g. "case:edit") or deny code (e.g. "rejected_immutable").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Decide {
            subject,
            action,
            case,
            record_out,
        } => cmd_decide(&subject, &action, case.as_deref(), record_out.as_deref()),
        Commands::Capabilities {
            subject,
            case,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_capabilities(&subject, &case, &report_out, write_markdown, &markdown_out),
        Commands::Gate { record, mode } => cmd_gate(&record, &mode),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_decide(
    subject: &camino::Utf8Path,
    action: &str,
    case: Option<&camino::Utf8Path>,
    record_out: Option<&camino::Utf8Path>,
) -> anyhow::Result<()> {
    let subject_json = std::fs::read_to_string(subject)
        .with_context(|| format!("read subject document: {}", subject))?;
    let case_json = match case {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("read case document: {}", path))?,
        ),
        None => None,
    };

    let output = run_decide(DecideInput {
        subject_json: &subject_json,
        action,
        case_json: case_json.as_deref(),
    })?;

    let serialized = serialize_record(&output.record)?;
    print!("{}", serialized);

    if let Some(path) = record_out {
        write_text_file(path, &serialized).context("write decision record")?;
    }

    let code = decision_exit_code(&output.record.decision);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_capabilities(
    subject: &camino::Utf8Path,
    case: &camino::Utf8Path,
    report_out: &camino::Utf8Path,
    write_markdown: bool,
    markdown_out: &camino::Utf8Path,
) -> anyhow::Result<()> {
    let subject_json = std::fs::read_to_string(subject)
        .with_context(|| format!("read subject document: {}", subject))?;
    let case_json =
        std::fs::read_to_string(case).with_context(|| format!("read case document: {}", case))?;

    let report = run_capabilities(CapabilitiesInput {
        subject_json: &subject_json,
        case_json: &case_json,
    })?;

    let serialized = serialize_report(&report)?;
    write_text_file(report_out, &serialized).context("write capability report")?;

    if write_markdown {
        let matrix = to_renderable_matrix(&report);
        let md = render_markdown(&matrix);
        write_text_file(markdown_out, &md).context("write markdown")?;
    }

    Ok(())
}

fn cmd_gate(record_path: &camino::Utf8Path, mode: &str) -> anyhow::Result<()> {
    let mode = parse_gate_mode(mode)?;
    let record_text = std::fs::read_to_string(record_path)
        .with_context(|| format!("read decision record: {}", record_path))?;
    let record: DecisionRecord =
        serde_json::from_str(&record_text).context("parse decision record")?;

    let renderable = to_renderable_decision(&record.decision);
    match gate(&renderable, mode) {
        GateOutcome::Render => println!("render"),
        GateOutcome::Hidden => println!("hidden"),
        GateOutcome::Disabled { tooltip } => println!("disabled\n{}", tooltip),
    }

    Ok(())
}

fn parse_gate_mode(mode: &str) -> anyhow::Result<GateMode> {
    match mode {
        "hide" => Ok(GateMode::Hide),
        "disable" => Ok(GateMode::Disable),
        other => anyhow::bail!("unknown gate mode: {other} (expected hide or disable)"),
    }
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", caseguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_tags,
            available_codes,
        } => {
            eprint!(
                "{}",
                caseguard_app::format_not_found(&identifier, available_tags, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
