//! CLI entry point for claimcheck.
//!
//! This module is intentionally thin: it handles argument parsing, logging, I/O, and exit
//! codes. All verification logic lives in the `claimcheck-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use claimcheck_app::{
    ExplainOutput, VerifyInput, format_explanation, format_not_found, parse_report_json,
    render_markdown, render_text, run_explain, run_verify, serialize_report, to_renderable,
};
use claimcheck_settings::Overrides;
use claimcheck_types::ClaimReportV1;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EMPTY_CLAIM: &str = "please enter a claim to verify";

#[derive(Parser, Debug)]
#[command(
    name = "claimcheck",
    version,
    about = "Verify factual claims against curated facts, rankings, fact-checks, and encyclopedia references"
)]
struct Cli {
    /// Path to claimcheck config TOML (a missing file is allowed).
    #[arg(long, global = true, default_value = "claimcheck.toml")]
    config: Utf8PathBuf,

    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a claim and print the verdict.
    Verify {
        /// The claim to verify.
        claim: String,

        /// Output format for stdout.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Skip fact-check and encyclopedia lookups.
        #[arg(long)]
        offline: bool,

        /// Override profile (standard|offline).
        #[arg(long)]
        profile: Option<String>,

        /// Override the fact-check language hint.
        #[arg(long)]
        language: Option<String>,

        /// Override the per-call timeout in milliseconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a verdict label and which stage produces it.
    Explain {
        /// Verdict label, e.g. "Likely False" or likely-false.
        verdict: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Verify {
            claim,
            format,
            report_out,
            offline,
            profile,
            language,
            timeout_ms,
        } => {
            let overrides = Overrides {
                profile,
                language,
                timeout_ms,
                offline,
                api_key: None,
            };
            cmd_verify(&cli.config, &claim, overrides, format, report_out.as_deref())
        }
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Explain { verdict } => cmd_explain(&verdict),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("claimcheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_verify(
    config: &Utf8Path,
    claim: &str,
    overrides: Overrides,
    format: Format,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    if claim.trim().is_empty() {
        eprintln!("{EMPTY_CLAIM}");
        return Ok(2);
    }

    // Missing config file is allowed (defaults apply).
    let config_text = std::fs::read_to_string(config).unwrap_or_default();
    debug!(config = %config, found = !config_text.is_empty(), "config loaded");

    let output = run_verify(VerifyInput {
        claim,
        config_text: &config_text,
        overrides,
        env: |name| std::env::var(name).ok(),
    })?;

    if let Some(path) = report_out {
        write_report_file(path, &output.report).context("write report json")?;
    }

    match format {
        Format::Json => {
            let data = serialize_report(&output.report)?;
            println!("{}", String::from_utf8_lossy(&data));
        }
        Format::Markdown => print!("{}", render_markdown(&to_renderable(&output.report))),
        Format::Text => print!("{}", render_text(&to_renderable(&output.report))),
    }

    Ok(0)
}

fn write_report_file(path: &Utf8Path, report: &ClaimReportV1) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data)
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_bytes(out_path, md.as_bytes()).context("write markdown output")?,
        None => print!("{md}"),
    }
    Ok(0)
}

fn cmd_explain(verdict: &str) -> anyhow::Result<i32> {
    match run_explain(verdict) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", format_not_found(&identifier, &available));
            Ok(1)
        }
    }
}
