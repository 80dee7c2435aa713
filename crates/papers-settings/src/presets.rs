use papers_domain::policy::{EffectiveConfig, UnknownCountryPolicy, UnknownTransitPolicy};

pub const PROFILES: [&str; 3] = ["standard", "strict", "legacy"];

const HOME_COUNTRY: &str = "KAN";
const VISA_MAX_AGE_DAYS: u32 = 730;

/// Preset profiles are opinionated defaults. Unknown names yield `None`.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "standard" => Some(standard_profile()),
        "strict" => Some(strict_profile()),
        "legacy" => Some(legacy_profile()),
        _ => None,
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "standard".to_string(),
        home_country: HOME_COUNTRY.to_string(),
        unknown_country: UnknownCountryPolicy::Error,
        unknown_transit_country: UnknownTransitPolicy::Cleared,
        visa_max_age_days: Some(VISA_MAX_AGE_DAYS),
        check_passport_format: false,
        as_of: None,
        parallel: true,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        unknown_country: UnknownCountryPolicy::Reject,
        unknown_transit_country: UnknownTransitPolicy::Quarantine,
        check_passport_format: true,
        ..standard_profile()
    }
}

// Unknown countries are cleared and visa dates are format-checked only.
fn legacy_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "legacy".to_string(),
        unknown_country: UnknownCountryPolicy::Cleared,
        visa_max_age_days: None,
        ..standard_profile()
    }
}
