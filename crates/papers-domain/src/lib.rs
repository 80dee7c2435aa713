//! Pure admission evaluation (no IO).
//!
//! Input: traveler records plus watchlist and country reference data built elsewhere.
//! Output: one decision per traveler, in input order, with the rule that decided it.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;
mod rules;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{decide, evaluate};
pub use error::{CountryRole, EvaluationError};
pub use fingerprint::traveler_ref;
