//! Developer tasks (schema generation, report conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use claimcheck_app::{VerifyInput, run_verify, serialize_report};
use claimcheck_settings::Overrides;
use claimcheck_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Project root (parent of the xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(|p| p.to_path_buf())
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(claimcheck_types::ClaimReportV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(claimcheck_settings::ClaimcheckConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "claimcheck.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "claimcheck.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &missing {
        eprintln!("missing schema: {name}");
    }
    for name in &mismatched {
        eprintln!("schema out of date: {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("schema validation failed")
}

/// Claims with a known offline outcome, one per static stage and one for the floor verdict.
const CONFORMANCE_CLAIMS: &[(&str, &str)] = &[
    ("how many countries are in the world", "Verified"),
    ("India is the 10th largest economy", "False"),
    ("Canada is the 2nd largest country by area", "True"),
    ("pigs can fly", "Unverified"),
];

/// Run the offline pipeline over known claims and validate every report against the
/// generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("report schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("compile report schema: {e}"))?;

    let mut failures = Vec::new();
    for (claim, expected) in CONFORMANCE_CLAIMS {
        let output = run_verify(VerifyInput {
            claim,
            config_text: "",
            overrides: Overrides {
                offline: true,
                ..Overrides::default()
            },
            env: |_| None,
        })
        .with_context(|| format!("verify {claim:?}"))?;

        let bytes = serialize_report(&output.report)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes).context("reparse report")?;
        let value = normalize_nondeterministic(value);

        for err in validator.iter_errors(&value) {
            failures.push(format!("{claim:?}: {err}"));
        }
        let verdict = value["result"]["verdict"].as_str().unwrap_or_default();
        if verdict != *expected {
            failures.push(format!("{claim:?}: expected {expected}, got {verdict}"));
        } else {
            println!("✓ {claim:?} -> {verdict}");
        }
    }

    if failures.is_empty() {
        println!("\nAll {} reports conform.", CONFORMANCE_CLAIMS.len());
        return Ok(());
    }
    for f in &failures {
        eprintln!("  - {f}");
    }
    bail!("{} conformance failure(s)", failures.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate offline reports against the report schema");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());
    match cmd.as_str() {
        "help" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "print-schema-ids" => {
            println!("{}", claimcheck_types::SCHEMA_REPORT_V1);
            println!("{}", claimcheck_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        "conform" => conform(),
        other => {
            print_help();
            bail!("unknown xtask command: {other}")
        }
    }
}
