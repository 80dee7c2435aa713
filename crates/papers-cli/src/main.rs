//! CLI entry point for papers.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `papers-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use papers_app::{
    DecideInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_decisions, render_markdown, render_trail, report_exit_code, run_decide, run_explain,
    runtime_error_report, to_renderable, write_report, write_text,
};
use papers_input::DatasetPaths;
use papers_settings::Overrides;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "papers.toml";

#[derive(Parser, Debug)]
#[command(
    name = "papers",
    version,
    about = "Entry decisions for travelers arriving in Kanadia"
)]
struct Cli {
    /// Path to papers config TOML (defaults to ./papers.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (standard|strict|legacy).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Reference date for date checks (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long, global = true)]
    as_of: Option<String>,

    /// Evaluate travelers on a single thread.
    #[arg(long, global = true)]
    sequential: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON array of decisions.
    Json,
    /// One decision per line.
    Plain,
    /// One line per traveler with the deciding rule and reason.
    Trail,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide every traveler and write the report.
    Decide {
        /// Travelers JSON document.
        #[arg(long)]
        travelers: Utf8PathBuf,

        /// Watchlist JSON document.
        #[arg(long)]
        watchlist: Utf8PathBuf,

        /// Countries JSON document.
        #[arg(long)]
        countries: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/papers/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/papers/comment.md")]
        markdown_out: Utf8PathBuf,

        /// How to print decisions to stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/papers/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id or code.
    Explain {
        /// The rule_id (e.g., "admission.watchlist") or code (e.g., "visa_expired") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Decide {
            travelers,
            watchlist,
            countries,
            report_out,
            write_markdown,
            markdown_out,
            format,
        } => cmd_decide(
            &cli,
            DatasetPaths {
                travelers,
                watchlist,
                countries,
            },
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
            *format,
        ),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. under a test harness) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn cmd_decide(
    cli: &Cli,
    datasets: DatasetPaths<'_>,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_config(cli.config.as_deref())?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            as_of: cli.as_of.clone(),
            parallel: cli.sequential.then_some(false),
        };

        let output = run_decide(DecideInput {
            config_text: &config_text,
            overrides,
            datasets,
        })?;

        write_report(report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if let Some(path) = markdown_out {
            write_text(path, &render_markdown(&renderable)).context("write markdown")?;
        }

        match format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&output.report.decisions).context("serialize decisions")?
            ),
            OutputFormat::Plain => {
                for line in render_decisions(&renderable) {
                    println!("{line}");
                }
            }
            OutputFormat::Trail => {
                for line in render_trail(&renderable) {
                    println!("{line}");
                }
            }
        }

        Ok(report_exit_code(&output.report))
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "decide failed");
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report(report_out, &report);
            eprintln!("papers error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// An explicit `--config` must exist; the implicit default may be absent.
fn read_config(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    match explicit {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG);
            if path.exists() {
                std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
            } else {
                Ok(String::new())
            }
        }
    }
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
