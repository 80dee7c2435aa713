//! Rendering utilities for human-facing surfaces (Markdown summaries, plain text).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod plain;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableDecision, RenderableDetermination, RenderableError,
    RenderableReport, RenderableSummary,
};
pub use plain::{render_decisions, render_trail};
