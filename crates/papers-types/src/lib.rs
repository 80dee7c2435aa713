//! Stable DTOs and IDs used across the papers workspace.
//!
//! This crate is intentionally boring:
//! - the closed decision enumeration
//! - stable string IDs for rules and outcome codes
//! - the emitted report envelope
//! - explain registry for rule and code guidance

#![forbid(unsafe_code)]

pub mod decision;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use decision::{Decision, DecisionCounts, Determination, ParseDecisionError};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    PapersData, PapersReport, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, ToolError, ToolMeta,
};
