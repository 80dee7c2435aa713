use anyhow::Context;
use papers_domain::model::{
    CountryRecord, Location, TravelerRecord, Visa, VisaRequirements, WatchlistEntry,
};
use serde_json::{Map, Value};

/// Parse the travelers document: a JSON array of traveler objects.
///
/// Only the top-level shape is validated. Entries that are not objects, and
/// fields of the wrong JSON type, come through as absent so the completeness
/// rule can reject them.
pub fn parse_travelers(text: &str) -> anyhow::Result<Vec<TravelerRecord>> {
    let doc: Value = serde_json::from_str(text).context("parse travelers JSON")?;
    let Value::Array(items) = doc else {
        anyhow::bail!("travelers document must be a JSON array");
    };
    Ok(items.iter().map(traveler_from_value).collect())
}

/// Parse the watchlist document: a JSON array of `{passport, first_name, last_name}`.
pub fn parse_watchlist(text: &str) -> anyhow::Result<Vec<WatchlistEntry>> {
    let doc: Value = serde_json::from_str(text).context("parse watchlist JSON")?;
    let Value::Array(items) = doc else {
        anyhow::bail!("watchlist document must be a JSON array");
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let obj = item
                .as_object()
                .with_context(|| format!("watchlist entry #{idx} is not an object"))?;
            Ok(WatchlistEntry {
                passport: str_field(obj, "passport").unwrap_or_default(),
                first_name: str_field(obj, "first_name").unwrap_or_default(),
                last_name: str_field(obj, "last_name").unwrap_or_default(),
            })
        })
        .collect()
}

/// Parse the countries document.
///
/// Accepts either an object keyed by country code or an array of objects carrying
/// a `code` field.
pub fn parse_countries(text: &str) -> anyhow::Result<Vec<CountryRecord>> {
    let doc: Value = serde_json::from_str(text).context("parse countries JSON")?;
    match doc {
        Value::Object(map) => map
            .iter()
            .map(|(code, v)| country_from_value(code, v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let code = v
                    .get("code")
                    .and_then(Value::as_str)
                    .with_context(|| format!("country entry #{idx} has no string `code`"))?;
                country_from_value(code, v)
            })
            .collect(),
        _ => anyhow::bail!("countries document must be a JSON object or array"),
    }
}

fn traveler_from_value(value: &Value) -> TravelerRecord {
    let Some(obj) = value.as_object() else {
        return TravelerRecord::default();
    };

    TravelerRecord {
        passport: str_field(obj, "passport"),
        first_name: str_field(obj, "first_name"),
        last_name: str_field(obj, "last_name"),
        entry_reason: str_field(obj, "entry_reason"),
        birth_date: str_field(obj, "birth_date"),
        home: location_field(obj, "home"),
        from: location_field(obj, "from"),
        via: location_field(obj, "via"),
        visa: obj.get("visa").and_then(Value::as_object).map(|v| Visa {
            country: str_field(v, "country"),
            date: str_field(v, "date"),
            code: str_field(v, "code"),
        }),
    }
}

fn location_field(obj: &Map<String, Value>, key: &str) -> Option<Location> {
    let loc = obj.get(key)?.as_object()?;
    Some(Location {
        city: str_field(loc, "city"),
        region: str_field(loc, "region"),
        country: str_field(loc, "country").map(|c| c.trim().to_ascii_uppercase()),
    })
}

fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn country_from_value(code: &str, value: &Value) -> anyhow::Result<CountryRecord> {
    let obj = value
        .as_object()
        .with_context(|| format!("country {code} is not an object"))?;

    Ok(CountryRecord {
        code: code.trim().to_ascii_uppercase(),
        name: str_field(obj, "name"),
        medical_advisory: str_field(obj, "medical_advisory"),
        visa: VisaRequirements {
            visit: flag(obj, "visitor_visa_required")
                .with_context(|| format!("country {code}"))?,
            transit: flag(obj, "transit_visa_required")
                .with_context(|| format!("country {code}"))?,
        },
    })
}

/// Visa-required flags appear as `"0"`/`"1"`, booleans, or integers. Absent is `false`.
fn flag(obj: &Map<String, Value>, key: &str) -> anyhow::Result<bool> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => anyhow::bail!("{key} must be 0 or 1, got {n}"),
        },
        Some(Value::String(s)) => match s.trim() {
            "0" | "" => Ok(false),
            "1" => Ok(true),
            other => anyhow::bail!("{key} must be \"0\" or \"1\", got \"{other}\""),
        },
        Some(other) => anyhow::bail!("{key} has unsupported value {other}"),
    }
}
