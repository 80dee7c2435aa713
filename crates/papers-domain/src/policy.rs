use time::Date;

/// What to do when a traveler's origin or home country is missing from the reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownCountryPolicy {
    /// Stop the run with an input error.
    Error,
    /// Reject the traveler.
    Reject,
    /// Treat the country as having no advisory and no visa requirement.
    Cleared,
}

/// What to do when a traveler's transit country is missing from the reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownTransitPolicy {
    Cleared,
    Quarantine,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Country code of the admitting jurisdiction.
    pub home_country: String,
    pub unknown_country: UnknownCountryPolicy,
    pub unknown_transit_country: UnknownTransitPolicy,
    /// Visa validity window in days. `None` checks the date format only.
    pub visa_max_age_days: Option<u32>,
    pub check_passport_format: bool,
    /// Reference date for date comparisons. Without it only formats are checked.
    pub as_of: Option<Date>,
    pub parallel: bool,
}

impl EffectiveConfig {
    pub fn is_home_country(&self, code: &str) -> bool {
        code.trim().eq_ignore_ascii_case(self.home_country.trim())
    }
}
