use super::{Gate, Outcome, RuleContext};
use crate::error::{CountryRole, EvaluationError};
use crate::model::normalize_code;
use crate::policy::{UnknownCountryPolicy, UnknownTransitPolicy};
use papers_types::{Decision, ids};
use serde_json::json;

pub fn run(ctx: &RuleContext<'_>) -> Result<Gate, EvaluationError> {
    let countries = &ctx.reference.countries;

    if let Some(origin) = ctx.traveler.from_country() {
        match countries.get(origin) {
            Some(country) => {
                if let Some(advisory) = country.advisory() {
                    return Ok(Gate::Decide(
                        Outcome::new(
                            Decision::Quarantine,
                            ids::RULE_MEDICAL_ADVISORY,
                            ids::CODE_ORIGIN_ADVISORY,
                            format!(
                                "origin country {} is under medical advisory: {advisory}",
                                normalize_code(origin)
                            ),
                        )
                        .with_data(json!({ "country": normalize_code(origin), "advisory": advisory })),
                    ));
                }
            }
            None => match ctx.cfg.unknown_country {
                UnknownCountryPolicy::Error => {
                    return Err(EvaluationError::UnknownCountry {
                        index: ctx.index,
                        role: CountryRole::Origin,
                        code: origin.to_string(),
                    });
                }
                UnknownCountryPolicy::Reject => {
                    return Ok(Gate::Decide(
                        Outcome::new(
                            Decision::Reject,
                            ids::RULE_MEDICAL_ADVISORY,
                            ids::CODE_UNKNOWN_COUNTRY,
                            format!("origin country '{origin}' is not in the country reference data"),
                        )
                        .with_data(json!({ "country": normalize_code(origin), "role": "origin" })),
                    ));
                }
                UnknownCountryPolicy::Cleared => {}
            },
        }
    }

    let Some(via) = ctx.traveler.via_country() else {
        return Ok(Gate::Pass);
    };

    match countries.get(via) {
        Some(country) => match country.advisory() {
            Some(advisory) => Ok(Gate::Decide(
                Outcome::new(
                    Decision::Quarantine,
                    ids::RULE_MEDICAL_ADVISORY,
                    ids::CODE_TRANSIT_ADVISORY,
                    format!(
                        "transit country {} is under medical advisory: {advisory}",
                        normalize_code(via)
                    ),
                )
                .with_data(json!({ "country": normalize_code(via), "advisory": advisory })),
            )),
            None => Ok(Gate::Pass),
        },
        None => match ctx.cfg.unknown_transit_country {
            UnknownTransitPolicy::Cleared => Ok(Gate::Pass),
            UnknownTransitPolicy::Quarantine => Ok(Gate::Decide(
                Outcome::new(
                    Decision::Quarantine,
                    ids::RULE_MEDICAL_ADVISORY,
                    ids::CODE_UNKNOWN_TRANSIT_COUNTRY,
                    format!("transit country '{via}' has no medical clearance on record"),
                )
                .with_data(json!({ "country": normalize_code(via) })),
            )),
        },
    }
}
