use anyhow::Context;
use papers_render::{
    RenderableData, RenderableDecision, RenderableDetermination, RenderableError,
    RenderableReport, RenderableSummary,
};
use papers_types::{
    Decision, DecisionCounts, PapersData, PapersReport, ReportEnvelope, RunMeta,
    SCHEMA_REPORT_V1, ToolError, ToolMeta, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<PapersReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse papers report")
}

pub fn serialize_report(report: &PapersReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &PapersReport) -> RenderableReport {
    RenderableReport {
        summary: RenderableSummary {
            accept: report.summary.accept,
            reject: report.summary.reject,
            secondary: report.summary.secondary,
            quarantine: report.summary.quarantine,
        },
        determinations: report
            .determinations
            .iter()
            .map(|d| RenderableDetermination {
                index: d.index,
                decision: renderable_decision(d.decision),
                rule_id: d.rule_id.clone(),
                code: d.code.clone(),
                message: d.message.clone(),
            })
            .collect(),
        error: report.error.as_ref().map(|e| RenderableError {
            code: e.code.clone(),
            message: e.message.clone(),
        }),
        data: RenderableData {
            profile: report.data.profile.clone(),
            home_country: report.data.home_country.clone(),
            as_of: report.data.as_of.clone(),
            travelers_evaluated: report.data.travelers_evaluated,
        },
    }
}

fn renderable_decision(decision: Decision) -> RenderableDecision {
    match decision {
        Decision::Accept => RenderableDecision::Accept,
        Decision::Reject => RenderableDecision::Reject,
        Decision::Secondary => RenderableDecision::Secondary,
        Decision::Quarantine => RenderableDecision::Quarantine,
    }
}

/// A report for a run that failed before any traveler was decided.
pub fn runtime_error_report(message: &str) -> PapersReport {
    let now = OffsetDateTime::now_utc();

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "papers".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at: now,
            ended_at: Some(now),
            duration_ms: Some(0),
        },
        summary: DecisionCounts::default(),
        decisions: Vec::new(),
        determinations: Vec::new(),
        error: Some(ToolError {
            rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            help: Some("Fix the input or configuration error and re-run papers.".to_string()),
        }),
        data: PapersData {
            profile: "unknown".to_string(),
            home_country: String::new(),
            as_of: None,
            travelers_evaluated: 0,
        },
    }
}
