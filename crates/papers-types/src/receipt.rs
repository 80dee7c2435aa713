use crate::decision::{Decision, DecisionCounts, Determination};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for papers decision reports.
pub const SCHEMA_REPORT_V1: &str = "papers.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolError {
    pub rule_id: String,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Papers-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PapersData {
    pub profile: String,
    pub home_country: String,

    /// Reference date used for visa expiry (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,

    pub travelers_evaluated: u32,
}

/// The decision report envelope.
///
/// `decisions` is the plain, order-preserving outcome sequence; `determinations`
/// carries the per-traveler trail in the same order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PapersData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub summary: DecisionCounts,
    pub decisions: Vec<Decision>,
    pub determinations: Vec<Determination>,

    /// Set when the run failed before any traveler was evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,

    pub data: TData,
}

pub type PapersReport = ReportEnvelope<PapersData>;
