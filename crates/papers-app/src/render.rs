//! Render use cases: markdown and plain text from in-memory reports, plus output writers.

use anyhow::Context;
use camino::Utf8Path;
use papers_render::RenderableReport;
use papers_types::PapersReport;

use crate::report::serialize_report;

pub fn render_markdown(report: &RenderableReport) -> String {
    papers_render::render_markdown(report)
}

pub fn render_decisions(report: &RenderableReport) -> Vec<String> {
    papers_render::render_decisions(report)
}

pub fn render_trail(report: &RenderableReport) -> Vec<String> {
    papers_render::render_trail(report)
}

/// Serialize and write a report, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &PapersReport) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    write_bytes(path, &bytes)
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}
