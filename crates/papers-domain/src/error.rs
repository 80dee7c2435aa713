use std::fmt;
use thiserror::Error;

/// Which country reference of a traveler failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountryRole {
    Origin,
    Home,
}

impl fmt::Display for CountryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryRole::Origin => f.write_str("origin"),
            CountryRole::Home => f.write_str("home"),
        }
    }
}

/// Input errors that stop a run. Per-traveler rule failures are decisions, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("traveler #{index}: {role} country '{code}' is not in the country reference data")]
    UnknownCountry {
        index: usize,
        role: CountryRole,
        code: String,
    },
}
