//! The admission rule chain.
//!
//! Gates run in a fixed priority order (missing data, health, security); the
//! first gate that decides wins. A traveler that clears every gate is decided by
//! the eligibility rule, which always produces an outcome.

use crate::error::EvaluationError;
use crate::model::{ReferenceData, TravelerRecord};
use crate::policy::EffectiveConfig;
use papers_types::{Decision, ids};
use serde_json::Value;

mod completeness;
mod eligibility;
mod medical;
mod utils;
mod watchlist;


/// Everything a rule may look at for one traveler.
pub(crate) struct RuleContext<'a> {
    pub index: usize,
    pub traveler: &'a TravelerRecord,
    pub reference: &'a ReferenceData,
    pub cfg: &'a EffectiveConfig,
}

/// A rule's decision before it is tied to a traveler position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Outcome {
    pub decision: Decision,
    pub rule_id: &'static str,
    pub code: &'static str,
    pub message: String,
    pub data: Value,
}

impl Outcome {
    pub fn new(
        decision: Decision,
        rule_id: &'static str,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            decision,
            rule_id,
            code,
            message: message.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// Result of a gate: either the traveler moves on, or the gate decides.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Gate {
    Pass,
    Decide(Outcome),
}

type GateFn = fn(&RuleContext<'_>) -> Result<Gate, EvaluationError>;

const GATES: [(&str, GateFn); 3] = [
    (ids::RULE_COMPLETENESS, completeness::run),
    (ids::RULE_MEDICAL_ADVISORY, medical::run),
    (ids::RULE_WATCHLIST, watchlist::run),
];

pub(crate) fn run_chain(ctx: &RuleContext<'_>) -> Result<Outcome, EvaluationError> {
    for (rule_id, gate) in GATES {
        match gate(ctx)? {
            Gate::Pass => tracing::trace!(index = ctx.index, rule_id, "gate passed"),
            Gate::Decide(outcome) => return Ok(outcome),
        }
    }
    eligibility::run(ctx)
}
