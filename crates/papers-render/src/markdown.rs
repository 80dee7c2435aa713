use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Papers decision report\n\n");

    let data = &report.data;
    out.push_str(&format!(
        "- Profile: `{}` (home country `{}`)\n",
        data.profile, data.home_country
    ));
    if let Some(as_of) = &data.as_of {
        out.push_str(&format!("- As of: {as_of}\n"));
    }
    let s = &report.summary;
    out.push_str(&format!(
        "- Travelers: {} (Accept {}, Reject {}, Secondary {}, Quarantine {})\n\n",
        data.travelers_evaluated, s.accept, s.reject, s.secondary, s.quarantine
    ));

    if let Some(err) = &report.error {
        out.push_str(&format!("> Error (`{}`): {}\n\n", err.code, err.message));
    }

    if report.determinations.is_empty() {
        out.push_str("No travelers evaluated.\n");
        return out;
    }

    out.push_str("## Decisions\n\n");
    out.push_str("| # | Decision | Rule | Code | Reason |\n");
    out.push_str("|---|----------|------|------|--------|\n");

    for d in &report.determinations {
        out.push_str(&format!(
            "| {} | **{}** | `{}` | `{}` | {} |\n",
            d.index,
            d.decision.label(),
            d.rule_id,
            d.code,
            escape_cell(&d.message)
        ));
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
