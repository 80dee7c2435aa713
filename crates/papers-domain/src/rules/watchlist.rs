use super::{Gate, Outcome, RuleContext};
use crate::error::EvaluationError;
use papers_types::{Decision, ids};
use serde_json::json;

pub fn run(ctx: &RuleContext<'_>) -> Result<Gate, EvaluationError> {
    let t = ctx.traveler;
    let watchlist = &ctx.reference.watchlist;

    if let Some(entry) = t.passport().and_then(|p| watchlist.match_passport(p)) {
        return Ok(Gate::Decide(
            Outcome::new(
                Decision::Secondary,
                ids::RULE_WATCHLIST,
                ids::CODE_PASSPORT_MATCH,
                "passport number matches a watchlist entry",
            )
            .with_data(json!({ "watchlist_entry": entry })),
        ));
    }

    if let (Some(first), Some(last)) = (t.first_name(), t.last_name())
        && let Some(entry) = watchlist.match_name(first, last)
    {
        return Ok(Gate::Decide(
            Outcome::new(
                Decision::Secondary,
                ids::RULE_WATCHLIST,
                ids::CODE_NAME_MATCH,
                format!("name '{first} {last}' matches a watchlist entry"),
            )
            .with_data(json!({ "watchlist_entry": entry })),
        ));
    }

    Ok(Gate::Pass)
}
