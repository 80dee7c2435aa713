use crate::error::EvaluationError;
use crate::fingerprint::traveler_ref;
use crate::model::{ReferenceData, TravelerRecord};
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use crate::rules::{self, RuleContext};
use papers_types::{Decision, Determination};
use rayon::prelude::*;

/// Evaluates every traveler against the rule chain.
///
/// The output is index-aligned with `travelers` whether or not evaluation runs
/// in parallel. The first error by input position is returned.
pub fn evaluate(
    travelers: &[TravelerRecord],
    reference: &ReferenceData,
    cfg: &EffectiveConfig,
) -> Result<DomainReport, EvaluationError> {
    let results: Vec<Result<Determination, EvaluationError>> = if cfg.parallel {
        travelers
            .par_iter()
            .enumerate()
            .map(|(index, traveler)| evaluate_one(index, traveler, reference, cfg))
            .collect()
    } else {
        travelers
            .iter()
            .enumerate()
            .map(|(index, traveler)| evaluate_one(index, traveler, reference, cfg))
            .collect()
    };

    let determinations = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let report = DomainReport::from_determinations(determinations);

    tracing::debug!(
        travelers = report.travelers_evaluated(),
        accept = report.counts.accept,
        reject = report.counts.reject,
        secondary = report.counts.secondary,
        quarantine = report.counts.quarantine,
        "evaluation finished"
    );

    Ok(report)
}

/// Plain decision sequence, one per traveler.
pub fn decide(
    travelers: &[TravelerRecord],
    reference: &ReferenceData,
    cfg: &EffectiveConfig,
) -> Result<Vec<Decision>, EvaluationError> {
    evaluate(travelers, reference, cfg).map(|r| r.decisions())
}

fn evaluate_one(
    index: usize,
    traveler: &TravelerRecord,
    reference: &ReferenceData,
    cfg: &EffectiveConfig,
) -> Result<Determination, EvaluationError> {
    let ctx = RuleContext {
        index,
        traveler,
        reference,
        cfg,
    };
    let outcome = rules::run_chain(&ctx)?;

    tracing::trace!(
        index,
        decision = %outcome.decision,
        rule_id = outcome.rule_id,
        code = outcome.code,
        "traveler decided"
    );

    Ok(Determination {
        index,
        decision: outcome.decision,
        rule_id: outcome.rule_id.to_string(),
        code: outcome.code.to_string(),
        message: outcome.message,
        traveler_ref: traveler.passport().map(traveler_ref),
        data: outcome.data,
    })
}
