//! The `decide` use case: load datasets, evaluate every traveler, and produce a report.

use anyhow::Context;
use papers_input::DatasetPaths;
use papers_settings::{Overrides, ResolvedConfig};
use papers_types::{PapersData, PapersReport, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the decide use case.
#[derive(Clone, Debug)]
pub struct DecideInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub datasets: DatasetPaths<'a>,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    pub report: PapersReport,
    /// The resolved configuration used, with `as_of` filled in.
    pub resolved_config: ResolvedConfig,
}

/// Run the decide use case: parse config, load datasets, evaluate, produce report.
pub fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        papers_settings::PapersConfigV1::default()
    } else {
        papers_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let mut resolved =
        papers_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;
    if resolved.effective.as_of.is_none() {
        resolved.effective.as_of = Some(started_at.date());
    }

    let datasets = papers_input::load_datasets(input.datasets).context("load datasets")?;

    let _span = tracing::info_span!(
        "decide",
        profile = %resolved.effective.profile,
        travelers = datasets.travelers.len()
    )
    .entered();

    let domain_report =
        papers_domain::evaluate(&datasets.travelers, &datasets.reference, &resolved.effective)
            .context("evaluate travelers")?;

    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;

    tracing::info!(
        accept = domain_report.counts.accept,
        reject = domain_report.counts.reject,
        secondary = domain_report.counts.secondary,
        quarantine = domain_report.counts.quarantine,
        duration_ms,
        "decisions made"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "papers".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            ended_at: Some(ended_at),
            duration_ms: Some(duration_ms),
        },
        summary: domain_report.counts.clone(),
        decisions: domain_report.decisions(),
        data: PapersData {
            profile: resolved.effective.profile.clone(),
            home_country: resolved.effective.home_country.clone(),
            as_of: resolved.effective.as_of.map(|d| d.to_string()),
            travelers_evaluated: domain_report.travelers_evaluated(),
        },
        determinations: domain_report.determinations,
        error: None,
    };

    Ok(DecideOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map a report to an exit code: 0 = decisions made, 1 = tool error.
pub fn report_exit_code(report: &PapersReport) -> i32 {
    if report.error.is_some() { 1 } else { 0 }
}
