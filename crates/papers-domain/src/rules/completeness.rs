use super::utils::{is_passport_format, parse_iso_date};
use super::{Gate, Outcome, RuleContext};
use crate::error::EvaluationError;
use papers_types::{Decision, ids};
use serde_json::json;

pub fn run(ctx: &RuleContext<'_>) -> Result<Gate, EvaluationError> {
    let t = ctx.traveler;

    let required = [
        ("passport", t.passport()),
        ("first_name", t.first_name()),
        ("last_name", t.last_name()),
        ("entry_reason", t.entry_reason()),
        ("birth_date", t.birth_date()),
        ("home.country", t.home_country()),
        ("from.country", t.from_country()),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Ok(Gate::Decide(
            Outcome::new(
                Decision::Reject,
                ids::RULE_COMPLETENESS,
                ids::CODE_MISSING_FIELD,
                format!("missing required field(s): {}", missing.join(", ")),
            )
            .with_data(json!({ "missing": missing })),
        ));
    }

    // Completeness held, so these are present.
    let birth_date = t.birth_date().unwrap_or_default();
    let birth_ok = match (parse_iso_date(birth_date), ctx.cfg.as_of) {
        (None, _) => false,
        (Some(born), Some(as_of)) => born <= as_of,
        (Some(_), None) => true,
    };
    if !birth_ok {
        return Ok(Gate::Decide(
            Outcome::new(
                Decision::Reject,
                ids::RULE_COMPLETENESS,
                ids::CODE_MALFORMED_BIRTH_DATE,
                format!("birth date '{birth_date}' is not a valid past YYYY-MM-DD date"),
            )
            .with_data(json!({ "birth_date": birth_date })),
        ));
    }

    if ctx.cfg.check_passport_format {
        let passport = t.passport().unwrap_or_default();
        if !is_passport_format(passport) {
            return Ok(Gate::Decide(Outcome::new(
                Decision::Reject,
                ids::RULE_COMPLETENESS,
                ids::CODE_MALFORMED_PASSPORT,
                "passport number is not five dash-separated groups of five characters",
            )));
        }
    }

    Ok(Gate::Pass)
}
