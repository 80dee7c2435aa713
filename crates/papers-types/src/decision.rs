use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// Admission outcome for a single traveler.
///
/// The set is closed: every traveler gets exactly one of these four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Decision {
    Accept,
    Reject,
    Secondary,
    Quarantine,
}

impl Decision {
    pub const ALL: [Decision; 4] = [
        Decision::Accept,
        Decision::Reject,
        Decision::Secondary,
        Decision::Quarantine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "Accept",
            Decision::Reject => "Reject",
            Decision::Secondary => "Secondary",
            Decision::Quarantine => "Quarantine",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDecisionError(String);

impl fmt::Display for ParseDecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown decision: {} (expected Accept|Reject|Secondary|Quarantine)",
            self.0
        )
    }
}

impl std::error::Error for ParseDecisionError {}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decision::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDecisionError(s.to_string()))
    }
}

/// The decision trail for one traveler: which rule decided, and why.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Determination {
    /// Position of the traveler in the input sequence (0-based).
    pub index: usize,
    pub decision: Decision,
    pub rule_id: String,
    pub code: String,
    pub message: String,

    /// SHA-256 of the passport number, when one was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traveler_ref: Option<String>,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionCounts {
    pub accept: u32,
    pub reject: u32,
    pub secondary: u32,
    pub quarantine: u32,
}

impl DecisionCounts {
    pub fn from_decisions<'a, I>(decisions: I) -> Self
    where
        I: IntoIterator<Item = &'a Decision>,
    {
        let mut counts = DecisionCounts::default();
        for d in decisions {
            counts.record(*d);
        }
        counts
    }

    /// Count one decision. Tallies saturate at `u32::MAX`.
    pub fn record(&mut self, decision: Decision) {
        let slot = match decision {
            Decision::Accept => &mut self.accept,
            Decision::Reject => &mut self.reject,
            Decision::Secondary => &mut self.secondary,
            Decision::Quarantine => &mut self.quarantine,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        self.accept
            .saturating_add(self.reject)
            .saturating_add(self.secondary)
            .saturating_add(self.quarantine)
    }
}
