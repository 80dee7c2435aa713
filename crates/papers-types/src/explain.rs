//! Explain registry for admission rules and outcome codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// What the traveler (or the data owner) has to fix.
    pub remediation: &'static str,
    /// Before/after traveler record examples.
    pub examples: ExamplePair,
}

/// Before and after traveler record examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A record that triggers the outcome.
    pub before: &'static str,
    /// A record that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_COMPLETENESS => Some(explain_completeness()),
        ids::RULE_MEDICAL_ADVISORY => Some(explain_medical_advisory()),
        ids::RULE_WATCHLIST => Some(explain_watchlist()),
        ids::RULE_ELIGIBILITY => Some(explain_eligibility()),

        // Codes
        ids::CODE_MISSING_FIELD => Some(explain_missing_field()),
        ids::CODE_MALFORMED_BIRTH_DATE => Some(explain_malformed_birth_date()),
        ids::CODE_MALFORMED_PASSPORT => Some(explain_malformed_passport()),
        ids::CODE_ORIGIN_ADVISORY => Some(explain_origin_advisory()),
        ids::CODE_TRANSIT_ADVISORY => Some(explain_transit_advisory()),
        ids::CODE_UNKNOWN_TRANSIT_COUNTRY => Some(explain_unknown_transit_country()),
        ids::CODE_PASSPORT_MATCH => Some(explain_passport_match()),
        ids::CODE_NAME_MATCH => Some(explain_name_match()),
        ids::CODE_RETURNING_RESIDENT => Some(explain_returning_resident()),
        ids::CODE_VISA_NOT_REQUIRED => Some(explain_visa_not_required()),
        ids::CODE_VISA_VALID => Some(explain_visa_valid()),
        ids::CODE_VISA_MISSING => Some(explain_visa_missing()),
        ids::CODE_VISA_MALFORMED_DATE => Some(explain_visa_malformed_date()),
        ids::CODE_VISA_EXPIRED => Some(explain_visa_expired()),
        ids::CODE_UNKNOWN_COUNTRY => Some(explain_unknown_country()),

        _ => None,
    }
}

/// List all known rule IDs, in evaluation order.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_COMPLETENESS,
        ids::RULE_MEDICAL_ADVISORY,
        ids::RULE_WATCHLIST,
        ids::RULE_ELIGIBILITY,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_FIELD,
        ids::CODE_MALFORMED_BIRTH_DATE,
        ids::CODE_MALFORMED_PASSPORT,
        ids::CODE_ORIGIN_ADVISORY,
        ids::CODE_TRANSIT_ADVISORY,
        ids::CODE_UNKNOWN_TRANSIT_COUNTRY,
        ids::CODE_PASSPORT_MATCH,
        ids::CODE_NAME_MATCH,
        ids::CODE_RETURNING_RESIDENT,
        ids::CODE_VISA_NOT_REQUIRED,
        ids::CODE_VISA_VALID,
        ids::CODE_VISA_MISSING,
        ids::CODE_VISA_MALFORMED_DATE,
        ids::CODE_VISA_EXPIRED,
        ids::CODE_UNKNOWN_COUNTRY,
    ]
}

// --- Rule-level explanations ---

fn explain_completeness() -> Explanation {
    Explanation {
        title: "Complete Application",
        description: "\
Rejects applications that are missing required information.

Every traveler record must carry:
- passport
- first_name and last_name
- entry_reason
- birth_date (YYYY-MM-DD)
- home.country
- from.country

A field that is present but empty counts as missing. Incomplete records are
rejected outright; they are never checked for advisories, the watchlist or visas.",
        remediation: "\
Resubmit the application with every required field filled in. Dates use the
YYYY-MM-DD format.",
        examples: ExamplePair {
            before: r#"{
  "first_name": "Jane",
  "last_name": "Doe",
  "entry_reason": "returning",
  "birth_date": "1990-01-01",
  "home": { "country": "KAN" },
  "from": { "country": "KAN" }
}"#,
            after: r#"{
  "passport": "AAAAA-AAAAA-AAAAA-AAAAA-AAAAA",
  "first_name": "Jane",
  "last_name": "Doe",
  "entry_reason": "returning",
  "birth_date": "1990-01-01",
  "home": { "country": "KAN" },
  "from": { "country": "KAN" }
}"#,
        },
    }
}

fn explain_medical_advisory() -> Explanation {
    Explanation {
        title: "Medical Advisory",
        description: "\
Sends travelers to quarantine when the country they are arriving from, or a
country they travelled through, has an active medical advisory.

This rule runs before the watchlist and visa rules: a traveler under advisory is
quarantined even if they would otherwise be referred to secondary inspection.",
        remediation: "\
None at the border. The traveler is held until cleared by health officials.",
        examples: ExamplePair {
            before: r#"{ "from": { "country": "ELE" } }   // ELE: medical_advisory = "Ebola""#,
            after: r#"{ "from": { "country": "GOR" } }   // GOR: medical_advisory = """#,
        },
    }
}

fn explain_watchlist() -> Explanation {
    Explanation {
        title: "Watchlist",
        description: "\
Refers travelers to secondary inspection when they match a watchlist entry.

A match is either:
- the passport number equals an entry's passport number, or
- both first and last name equal the same entry's first and last name.

Either condition alone is sufficient. Comparison is exact.",
        remediation: "\
The traveler proceeds to secondary inspection where an officer confirms or
clears the match.",
        examples: ExamplePair {
            before: r#"{ "passport": "E3X9K-2LMQ1-8ZPRT-44HJD-QW2YU" }   // listed on the watchlist"#,
            after: r#"{ "passport": "AAAAA-AAAAA-AAAAA-AAAAA-AAAAA" }   // not listed"#,
        },
    }
}

fn explain_eligibility() -> Explanation {
    Explanation {
        title: "Home Country and Visa Eligibility",
        description: "\
Decides admission for travelers who passed every earlier rule.

Residents of the home jurisdiction (KAN by default) are accepted. Everyone else
is checked against their home country's visa requirements: a `visit` entry uses
the visitor visa requirement, a `transit` entry uses the transit visa
requirement, and any other entry reason needs no visa. When a visa is required
it must be present and its date must be a valid YYYY-MM-DD date within the
configured validity window.",
        remediation: "\
Obtain a visa for the declared entry reason and include its issue date.",
        examples: ExamplePair {
            before: r#"{
  "entry_reason": "visit",
  "home": { "country": "BRD" },
  "visa": { "date": "2001-01-01" }
}"#,
            after: r#"{
  "entry_reason": "visit",
  "home": { "country": "BRD" },
  "visa": { "date": "2024-03-15", "code": "CFR6X-XSMVA" }
}"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_missing_field() -> Explanation {
    let mut exp = explain_completeness();
    exp.title = "Missing Field";
    exp
}

fn explain_malformed_birth_date() -> Explanation {
    Explanation {
        title: "Malformed Birth Date",
        description: "\
The birth date is not a valid YYYY-MM-DD calendar date, or lies after the
reference date of the run.",
        remediation: "\
Correct the birth date on the application.",
        examples: ExamplePair {
            before: r#"{ "birth_date": "01/02/1990" }"#,
            after: r#"{ "birth_date": "1990-02-01" }"#,
        },
    }
}

fn explain_malformed_passport() -> Explanation {
    Explanation {
        title: "Malformed Passport Number",
        description: "\
The passport number is not five groups of five letters or digits separated by
dashes. This check only runs when `check_passport_format` is enabled (the
`strict` profile enables it).",
        remediation: "\
Copy the passport number exactly as printed, including dashes.",
        examples: ExamplePair {
            before: r#"{ "passport": "AAAAAAAAAA" }"#,
            after: r#"{ "passport": "AAAAA-AAAAA-AAAAA-AAAAA-AAAAA" }"#,
        },
    }
}

fn explain_origin_advisory() -> Explanation {
    let mut exp = explain_medical_advisory();
    exp.title = "Origin Country Under Medical Advisory";
    exp
}

fn explain_transit_advisory() -> Explanation {
    let mut exp = explain_medical_advisory();
    exp.title = "Transit Country Under Medical Advisory";
    exp
}

fn explain_unknown_transit_country() -> Explanation {
    Explanation {
        title: "Unknown Transit Country",
        description: "\
The traveler passed through a country that is not in the country reference
data. With `unknown_transit_country = \"quarantine\"` the traveler is
quarantined because their exposure cannot be assessed.",
        remediation: "\
Add the country to the reference data, or correct the `via.country` code.",
        examples: ExamplePair {
            before: r#"{ "via": { "country": "ZZZ" } }"#,
            after: r#"{ "via": { "country": "GOR" } }"#,
        },
    }
}

fn explain_passport_match() -> Explanation {
    let mut exp = explain_watchlist();
    exp.title = "Watchlist Passport Match";
    exp
}

fn explain_name_match() -> Explanation {
    let mut exp = explain_watchlist();
    exp.title = "Watchlist Name Match";
    exp
}

fn explain_returning_resident() -> Explanation {
    Explanation {
        title: "Returning Resident",
        description: "\
The traveler's home country is the home jurisdiction. Residents are accepted
regardless of entry reason once the earlier rules pass.",
        remediation: "\
Nothing to do.",
        examples: ExamplePair {
            before: r#"{ "home": { "country": "KAN" }, "entry_reason": "returning" }"#,
            after: r#"{ "home": { "country": "KAN" }, "entry_reason": "returning" }"#,
        },
    }
}

fn explain_visa_not_required() -> Explanation {
    Explanation {
        title: "Visa Not Required",
        description: "\
The traveler's home country does not require a visa for the declared entry
reason, or the entry reason is neither `visit` nor `transit`.",
        remediation: "\
Nothing to do.",
        examples: ExamplePair {
            before: r#"{ "entry_reason": "visit", "home": { "country": "GOR" } }"#,
            after: r#"{ "entry_reason": "visit", "home": { "country": "GOR" } }"#,
        },
    }
}

fn explain_visa_valid() -> Explanation {
    let mut exp = explain_eligibility();
    exp.title = "Visa Valid";
    exp
}

fn explain_visa_missing() -> Explanation {
    Explanation {
        title: "Visa Missing",
        description: "\
A visa is required for the declared entry reason but the application does not
include one (or the visa has no date).",
        remediation: "\
Obtain the required visa and include it on the application.",
        examples: ExamplePair {
            before: r#"{ "entry_reason": "transit", "home": { "country": "LUG" } }"#,
            after: r#"{
  "entry_reason": "transit",
  "home": { "country": "LUG" },
  "visa": { "date": "2024-01-10" }
}"#,
        },
    }
}

fn explain_visa_malformed_date() -> Explanation {
    Explanation {
        title: "Visa Date Malformed",
        description: "\
The visa date is not a valid YYYY-MM-DD calendar date.",
        remediation: "\
Copy the visa issue date exactly as printed on the visa.",
        examples: ExamplePair {
            before: r#"{ "visa": { "date": "2024-13-40" } }"#,
            after: r#"{ "visa": { "date": "2024-12-01" } }"#,
        },
    }
}

fn explain_visa_expired() -> Explanation {
    Explanation {
        title: "Visa Expired",
        description: "\
The visa was issued too long before the reference date (730 days by default),
or its issue date lies in the future.",
        remediation: "\
Renew the visa before travelling.",
        examples: ExamplePair {
            before: r#"{ "visa": { "date": "2010-06-01" } }"#,
            after: r#"{ "visa": { "date": "2024-06-01" } }"#,
        },
    }
}

fn explain_unknown_country() -> Explanation {
    Explanation {
        title: "Unknown Country",
        description: "\
The traveler's origin or home country is not in the country reference data.
Under the `reject` policy such travelers are rejected; under the default `error`
policy the whole run stops so the reference data can be fixed.",
        remediation: "\
Add the country to the reference data, or correct the country code.",
        examples: ExamplePair {
            before: r#"{ "home": { "country": "ZZZ" } }"#,
            after: r#"{ "home": { "country": "GOR" } }"#,
        },
    }
}
