use crate::model::{
    CountryRecord, Location, ReferenceData, TravelerRecord, Visa, VisaRequirements,
    WatchlistEntry,
};
use crate::policy::{EffectiveConfig, UnknownCountryPolicy, UnknownTransitPolicy};
use time::macros::date;

pub const PASSPORT: &str = "AAAAA-AAAAA-AAAAA-AAAAA-AAAAA";

pub fn location(country: &str) -> Location {
    Location {
        city: Some("Bala".to_string()),
        region: Some("Unknown".to_string()),
        country: Some(country.to_string()),
    }
}

/// A complete record for a KAN resident coming home.
pub fn returning_resident() -> TravelerRecord {
    TravelerRecord {
        passport: Some(PASSPORT.to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        entry_reason: Some("returning".to_string()),
        birth_date: Some("1990-01-01".to_string()),
        home: Some(location("KAN")),
        from: Some(location("KAN")),
        via: None,
        visa: None,
    }
}

/// A complete visitor record from `home`, optionally carrying a visa.
pub fn visitor(home: &str, visa_date: Option<&str>) -> TravelerRecord {
    TravelerRecord {
        passport: Some("VVVVV-11111-22222-33333-44444".to_string()),
        first_name: Some("Ola".to_string()),
        last_name: Some("Nordmann".to_string()),
        entry_reason: Some("visit".to_string()),
        home: Some(location(home)),
        from: Some(location(home)),
        visa: visa_date.map(|d| Visa {
            country: Some(home.to_string()),
            date: Some(d.to_string()),
            code: Some("CFR6X-XSMVA".to_string()),
        }),
        ..returning_resident()
    }
}

pub fn country(code: &str) -> CountryRecord {
    CountryRecord {
        code: code.to_string(),
        name: Some(code.to_string()),
        medical_advisory: None,
        visa: VisaRequirements::default(),
    }
}

pub fn country_with_advisory(code: &str, advisory: &str) -> CountryRecord {
    CountryRecord {
        medical_advisory: Some(advisory.to_string()),
        ..country(code)
    }
}

pub fn country_requiring_visa(code: &str, visit: bool, transit: bool) -> CountryRecord {
    CountryRecord {
        visa: VisaRequirements { visit, transit },
        ..country(code)
    }
}

pub fn watch(passport: &str, first_name: &str, last_name: &str) -> WatchlistEntry {
    WatchlistEntry {
        passport: passport.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

pub fn reference(watchlist: Vec<WatchlistEntry>, countries: Vec<CountryRecord>) -> ReferenceData {
    ReferenceData::new(watchlist, countries)
}

/// The `standard` profile pinned to 2024-06-01, evaluated sequentially.
pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        home_country: "KAN".to_string(),
        unknown_country: UnknownCountryPolicy::Error,
        unknown_transit_country: UnknownTransitPolicy::Cleared,
        visa_max_age_days: Some(730),
        check_passport_format: false,
        as_of: Some(date!(2024 - 06 - 01)),
        parallel: false,
    }
}
