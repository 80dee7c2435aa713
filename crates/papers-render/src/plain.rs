use crate::RenderableReport;

/// One decision label per traveler, in input order.
pub fn render_decisions(report: &RenderableReport) -> Vec<String> {
    report
        .determinations
        .iter()
        .map(|d| d.decision.label().to_string())
        .collect()
}

/// One line per traveler with the deciding rule and reason.
///
/// Format: `#{index} {decision} [{rule_id}:{code}] {message}`
pub fn render_trail(report: &RenderableReport) -> Vec<String> {
    report
        .determinations
        .iter()
        .map(|d| {
            let message = d.message.replace('\r', " ").replace('\n', " ");
            format!(
                "#{} {} [{}:{}] {}",
                d.index,
                d.decision.label(),
                d.rule_id,
                d.code,
                message
            )
        })
        .collect()
}
