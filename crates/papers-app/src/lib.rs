//! Use case orchestration for papers.
//!
//! This crate provides the application layer: use cases that coordinate the domain, input, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod decide;
mod explain;
mod render;
mod report;

pub use decide::{DecideInput, DecideOutput, report_exit_code, run_decide};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_decisions, render_markdown, render_trail, write_report, write_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
