//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(papers_types::PapersReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(papers_settings::PapersConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "papers.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "papers.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden fixture reports against papers.report.v1");
    eprintln!("  normalize-golden  Rewrite golden reports with placeholder timestamps/version");
    eprintln!("  explain-coverage  Validate all rule IDs and codes have explanations");
}

/// Token pattern for outcome codes: lowercase snake case.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Every `expected.report.json` under tests/fixtures, sorted by fixture name.
fn golden_reports() -> anyhow::Result<Vec<(String, PathBuf)>> {
    let dir = fixtures_dir();
    let mut out = Vec::new();

    for entry in fs::read_dir(&dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry?;
        let golden = entry.path().join("expected.report.json");
        if golden.exists() {
            out.push((entry.file_name().to_string_lossy().to_string(), golden));
        }
    }

    out.sort();
    Ok(out)
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Validate golden reports against the generated report schema.
///
/// Also checks that each determination names a known rule and a well-formed
/// code, and that `decisions` mirrors the determinations in order.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to JSON")?;
    let validator = jsonschema::draft202012::new(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {e}"))?;
    println!("✓ papers.report.v1 schema compiles");

    let known_rules = papers_types::explain::all_rule_ids();
    let mut errors = Vec::new();
    let reports = golden_reports()?;

    for (fixture, path) in &reports {
        let value = read_json(path)?;

        for err in validator.iter_errors(&value) {
            errors.push(format!("{fixture}: schema validation: {err}"));
        }

        let determinations = value
            .get("determinations")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        let decisions = value
            .get("decisions")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        if determinations.len() != decisions.len() {
            errors.push(format!(
                "{fixture}: {} decisions but {} determinations",
                decisions.len(),
                determinations.len()
            ));
        }

        for (i, det) in determinations.iter().enumerate() {
            let rule_id = det.get("rule_id").and_then(|v| v.as_str()).unwrap_or("");
            let code = det.get("code").and_then(|v| v.as_str()).unwrap_or("");

            if !known_rules.contains(&rule_id) {
                errors.push(format!("{fixture}: determinations[{i}] unknown rule_id '{rule_id}'"));
            }
            if !is_valid_token(code) {
                errors.push(format!("{fixture}: determinations[{i}] invalid code '{code}'"));
            }
            if det.get("index").and_then(|v| v.as_u64()) != Some(i as u64) {
                errors.push(format!("{fixture}: determinations[{i}] index out of order"));
            }
            if decisions.get(i) != det.get("decision") {
                errors.push(format!("{fixture}: decisions[{i}] disagrees with its determination"));
            }
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("✓ {} golden reports conform", reports.len());
    Ok(())
}

/// Replace nondeterministic fields in golden reports with placeholders.
fn normalize_golden() -> anyhow::Result<()> {
    for (fixture, path) in golden_reports()? {
        let normalized = papers_test_util::normalize_nondeterministic(read_json(&path)?);
        let mut json = serde_json::to_string_pretty(&normalized)?;
        json.push('\n');
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Normalized {fixture}");
    }
    Ok(())
}

/// Validate that all rule IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_ids = papers_types::explain::all_rule_ids();
    let codes = papers_types::explain::all_codes();

    let mut errors = Vec::new();

    for (kind, id) in rule_ids
        .iter()
        .map(|id| ("Rule ID", id))
        .chain(codes.iter().map(|c| ("Code", c)))
    {
        match papers_types::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{kind} '{id}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{kind} '{id}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{kind} '{id}' has empty remediation"));
                }
            }
            None => errors.push(format!("{kind} '{id}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule IDs have explanations", rule_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Explain coverage validation failed with {} errors", errors.len())
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "normalize-golden" => normalize_golden(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
