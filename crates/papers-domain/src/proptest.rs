//! Property-based tests for the domain crate.
//!
//! These cover the invariants the rule chain must hold for any input:
//! - one decision per traveler, index-aligned
//! - missing required data always rejects
//! - gate priority (quarantine before watchlist before eligibility)

use crate::engine::evaluate;
use crate::model::{Location, TravelerRecord, Visa};
use crate::policy::{EffectiveConfig, UnknownCountryPolicy};
use crate::test_support::{
    config, country, country_requiring_visa, country_with_advisory, location, reference,
    returning_resident, watch,
};
use papers_types::Decision;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[A-Za-z0-9 -]{0,12}".prop_map(Some),
    ]
}

fn arb_country_code() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("KAN".to_string())),
        Just(Some("gor".to_string())),
        Just(Some("UTO".to_string())),
        Just(Some("ZZZ".to_string())),
    ]
}

fn arb_location() -> impl Strategy<Value = Option<Location>> {
    prop::option::of(arb_country_code().prop_map(|country| Location {
        country,
        ..Location::default()
    }))
}

fn arb_date() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (1950i32..2030, 1u8..13, 1u8..29)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
        "[0-9/.-]{0,10}".prop_map(Some),
    ]
}

fn arb_traveler() -> impl Strategy<Value = TravelerRecord> {
    (
        (arb_field(), arb_field(), arb_field()),
        prop_oneof![
            Just(Some("returning".to_string())),
            Just(Some("visit".to_string())),
            Just(Some("transit".to_string())),
            arb_field(),
        ],
        arb_date(),
        (arb_location(), arb_location(), arb_location()),
        prop::option::of(arb_date().prop_map(|date| Visa {
            date,
            ..Visa::default()
        })),
    )
        .prop_map(
            |((passport, first_name, last_name), entry_reason, birth_date, (home, from, via), visa)| {
                TravelerRecord {
                    passport,
                    first_name,
                    last_name,
                    entry_reason,
                    birth_date,
                    home,
                    from,
                    via,
                    visa,
                }
            },
        )
}

/// Lenient config so unknown countries never abort the run.
fn lenient() -> EffectiveConfig {
    EffectiveConfig {
        unknown_country: UnknownCountryPolicy::Cleared,
        ..config()
    }
}

/// Which required field to blank out.
fn arb_required_field() -> impl Strategy<Value = usize> {
    0usize..7
}

fn without_field(mut t: TravelerRecord, field: usize) -> TravelerRecord {
    match field {
        0 => t.passport = None,
        1 => t.first_name = Some("   ".to_string()),
        2 => t.last_name = None,
        3 => t.entry_reason = Some(String::new()),
        4 => t.birth_date = None,
        5 => t.home = None,
        _ => t.from = Some(Location::default()),
    }
    t
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn one_decision_per_traveler_in_order(
        travelers in prop::collection::vec(arb_traveler(), 0..40),
        parallel in any::<bool>(),
    ) {
        let reference = reference(
            vec![watch("AAAAA-AAAAA-AAAAA-AAAAA-AAAAA", "Jane", "Doe")],
            vec![
                country("KAN"),
                country_requiring_visa("GOR", true, true),
                country_with_advisory("UTO", "Cholera"),
            ],
        );
        let cfg = EffectiveConfig { parallel, ..lenient() };

        let report = evaluate(&travelers, &reference, &cfg).expect("lenient config never errors");
        prop_assert_eq!(report.determinations.len(), travelers.len());
        prop_assert_eq!(report.counts.total() as usize, travelers.len());
        for (i, d) in report.determinations.iter().enumerate() {
            prop_assert_eq!(d.index, i);
        }
    }

    #[test]
    fn missing_required_field_always_rejects(
        base in arb_traveler(),
        field in arb_required_field(),
    ) {
        let reference = reference(
            vec![watch("AAAAA-AAAAA-AAAAA-AAAAA-AAAAA", "Jane", "Doe")],
            vec![country_with_advisory("KAN", "Ebola")],
        );
        let t = without_field(base, field);

        let report = evaluate(&[t], &reference, &config()).expect("completeness decides first");
        prop_assert_eq!(report.determinations[0].decision, Decision::Reject);
    }

    #[test]
    fn origin_advisory_beats_watchlist(
        first in "[A-Z][a-z]{1,8}",
        last in "[A-Z][a-z]{1,8}",
        listed in any::<bool>(),
    ) {
        let mut watchlist = vec![];
        if listed {
            watchlist.push(watch("", &first, &last));
        }
        let reference = reference(
            watchlist,
            vec![country("KAN"), country_with_advisory("GOR", "Ebola")],
        );
        let t = TravelerRecord {
            first_name: Some(first),
            last_name: Some(last),
            from: Some(location("GOR")),
            ..returning_resident()
        };

        let report = evaluate(&[t], &reference, &config()).expect("evaluate");
        prop_assert_eq!(report.determinations[0].decision, Decision::Quarantine);
    }

    #[test]
    fn passport_match_is_secondary_even_for_residents(passport in "[A-Z0-9]{5}(-[A-Z0-9]{5}){4}") {
        let reference = reference(vec![watch(&passport, "", "")], vec![country("KAN")]);
        let t = TravelerRecord {
            passport: Some(passport),
            ..returning_resident()
        };

        let report = evaluate(&[t], &reference, &config()).expect("evaluate");
        prop_assert_eq!(report.determinations[0].decision, Decision::Secondary);
    }
}
