use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "papers.config.v1";

/// `papers.toml` schema v1.
///
/// Every field is optional; unset fields fall back to the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PapersConfigV1 {
    /// Optional schema string for tooling (`papers.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `standard` (default), `strict`, or `legacy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Country code of the admitting jurisdiction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_country: Option<String>,

    /// Origin/home country missing from reference data: `error`, `reject`, or `cleared`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_country: Option<String>,

    /// Transit country missing from reference data: `cleared` or `quarantine`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_transit_country: Option<String>,

    /// Visa validity window in days; `0` checks the date format only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_max_age_days: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_passport_format: Option<bool>,

    /// Reference date (`YYYY-MM-DD`) for date checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,

    /// Evaluate travelers in parallel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}
