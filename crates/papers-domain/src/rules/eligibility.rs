use super::utils::parse_iso_date;
use super::{Outcome, RuleContext};
use crate::error::{CountryRole, EvaluationError};
use crate::model::{EntryReason, normalize_code};
use crate::policy::UnknownCountryPolicy;
use papers_types::{Decision, ids};
use serde_json::json;

/// Terminal rule: every traveler reaching it gets Accept or Reject.
pub fn run(ctx: &RuleContext<'_>) -> Result<Outcome, EvaluationError> {
    let t = ctx.traveler;
    let home = t.home_country().unwrap_or_default();

    if ctx.cfg.is_home_country(home) {
        return Ok(Outcome::new(
            Decision::Accept,
            ids::RULE_ELIGIBILITY,
            ids::CODE_RETURNING_RESIDENT,
            format!("home country is {}", normalize_code(&ctx.cfg.home_country)),
        ));
    }

    let reason = EntryReason::parse(t.entry_reason().unwrap_or_default());

    let required = match ctx.reference.countries.get(home) {
        Some(country) => country.requires_visa(reason),
        None => match ctx.cfg.unknown_country {
            UnknownCountryPolicy::Error => {
                return Err(EvaluationError::UnknownCountry {
                    index: ctx.index,
                    role: CountryRole::Home,
                    code: home.to_string(),
                });
            }
            UnknownCountryPolicy::Reject => {
                return Ok(Outcome::new(
                    Decision::Reject,
                    ids::RULE_ELIGIBILITY,
                    ids::CODE_UNKNOWN_COUNTRY,
                    format!("home country '{home}' is not in the country reference data"),
                )
                .with_data(json!({ "country": normalize_code(home), "role": "home" })));
            }
            UnknownCountryPolicy::Cleared => false,
        },
    };

    if !required {
        return Ok(Outcome::new(
            Decision::Accept,
            ids::RULE_ELIGIBILITY,
            ids::CODE_VISA_NOT_REQUIRED,
            format!(
                "no visa required for entry reason '{}' from {}",
                t.entry_reason().unwrap_or_default(),
                normalize_code(home)
            ),
        ));
    }

    let reject = |code: &'static str, message: String| {
        Outcome::new(Decision::Reject, ids::RULE_ELIGIBILITY, code, message)
    };

    let Some(raw) = t.visa_date() else {
        return Ok(reject(
            ids::CODE_VISA_MISSING,
            format!("a visa is required from {} but none was presented", normalize_code(home)),
        ));
    };

    let Some(issued) = parse_iso_date(raw) else {
        return Ok(reject(
            ids::CODE_VISA_MALFORMED_DATE,
            format!("visa date '{raw}' is not a YYYY-MM-DD date"),
        )
        .with_data(json!({ "visa_date": raw })));
    };

    if let Some(as_of) = ctx.cfg.as_of {
        let age_days = (as_of - issued).whole_days();
        let too_old = ctx
            .cfg
            .visa_max_age_days
            .is_some_and(|max| max > 0 && age_days >= i64::from(max));

        if issued > as_of || too_old {
            return Ok(reject(
                ids::CODE_VISA_EXPIRED,
                format!("visa issued {raw} is not valid on {as_of}"),
            )
            .with_data(json!({
                "visa_date": raw,
                "as_of": as_of.to_string(),
                "age_days": age_days,
                "max_age_days": ctx.cfg.visa_max_age_days,
            })));
        }
    }

    Ok(Outcome::new(
        Decision::Accept,
        ids::RULE_ELIGIBILITY,
        ids::CODE_VISA_VALID,
        format!("visa issued {raw} is valid"),
    ))
}
