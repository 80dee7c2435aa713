//! Fuzz target for the decision engine.
//!
//! Goal: every traveler gets exactly one decision, in input order, and the
//! engine never panics. Unknown-country errors are allowed under the
//! `Error` policy.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use papers_domain::model::{
    CountryRecord, Location, ReferenceData, TravelerRecord, Visa, VisaRequirements,
    WatchlistEntry,
};
use papers_domain::policy::{EffectiveConfig, UnknownCountryPolicy, UnknownTransitPolicy};

#[derive(Arbitrary, Debug)]
struct TravelerInput {
    passport: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    entry_reason: Option<String>,
    birth_date: Option<String>,
    home: Option<String>,
    from: Option<String>,
    via: Option<String>,
    visa_date: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct CountryInput {
    code: String,
    advisory: Option<String>,
    visit: bool,
    transit: bool,
}

#[derive(Arbitrary, Debug)]
struct EngineInput {
    travelers: Vec<TravelerInput>,
    watchlist: Vec<(String, String, String)>,
    countries: Vec<CountryInput>,
    /// 0 = error, 1 = reject, otherwise cleared.
    unknown_country: u8,
    quarantine_unknown_transit: bool,
    visa_max_age_days: Option<u32>,
    check_passport_format: bool,
    /// Days since 2000-01-01 for `as_of`.
    as_of_offset: Option<u16>,
    parallel: bool,
}

fn location(country: Option<String>) -> Option<Location> {
    country.map(|c| Location {
        country: Some(c),
        ..Location::default()
    })
}

fn traveler(input: TravelerInput) -> TravelerRecord {
    TravelerRecord {
        passport: input.passport,
        first_name: input.first_name,
        last_name: input.last_name,
        entry_reason: input.entry_reason,
        birth_date: input.birth_date,
        home: location(input.home),
        from: location(input.from),
        via: location(input.via),
        visa: input.visa_date.map(|date| Visa {
            date: Some(date),
            ..Visa::default()
        }),
    }
}

fuzz_target!(|input: EngineInput| {
    if input.travelers.len() > 64 || input.countries.len() > 64 || input.watchlist.len() > 64 {
        return;
    }

    let reference = ReferenceData::new(
        input
            .watchlist
            .into_iter()
            .map(|(passport, first_name, last_name)| WatchlistEntry {
                passport,
                first_name,
                last_name,
            })
            .collect(),
        input
            .countries
            .into_iter()
            .map(|c| CountryRecord {
                code: c.code,
                name: None,
                medical_advisory: c.advisory,
                visa: VisaRequirements {
                    visit: c.visit,
                    transit: c.transit,
                },
            })
            .collect(),
    );

    let base = time::Date::from_calendar_date(2000, time::Month::January, 1)
        .expect("valid base date");
    let cfg = EffectiveConfig {
        profile: "fuzz".to_string(),
        home_country: "KAN".to_string(),
        unknown_country: match input.unknown_country {
            0 => UnknownCountryPolicy::Error,
            1 => UnknownCountryPolicy::Reject,
            _ => UnknownCountryPolicy::Cleared,
        },
        unknown_transit_country: if input.quarantine_unknown_transit {
            UnknownTransitPolicy::Quarantine
        } else {
            UnknownTransitPolicy::Cleared
        },
        visa_max_age_days: input.visa_max_age_days,
        check_passport_format: input.check_passport_format,
        as_of: input
            .as_of_offset
            .map(|days| base + time::Duration::days(i64::from(days))),
        parallel: input.parallel,
    };

    let travelers: Vec<TravelerRecord> = input.travelers.into_iter().map(traveler).collect();

    if let Ok(report) = papers_domain::evaluate(&travelers, &reference, &cfg) {
        assert_eq!(report.determinations.len(), travelers.len());
        for (idx, det) in report.determinations.iter().enumerate() {
            assert_eq!(det.index, idx);
        }
    }
});
