use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// A place a traveler lives in, departed from, or passed through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visa {
    pub country: Option<String>,
    /// Issue date, expected as `YYYY-MM-DD`.
    pub date: Option<String>,
    pub code: Option<String>,
}

/// One entry application, as handed over by the loading layer.
///
/// Every field is optional here: absence is a rule outcome, not a load error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelerRecord {
    pub passport: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub entry_reason: Option<String>,
    pub birth_date: Option<String>,
    pub home: Option<Location>,
    pub from: Option<Location>,
    pub via: Option<Location>,
    pub visa: Option<Visa>,
}

impl TravelerRecord {
    pub fn passport(&self) -> Option<&str> {
        present(self.passport.as_deref())
    }

    pub fn first_name(&self) -> Option<&str> {
        present(self.first_name.as_deref())
    }

    pub fn last_name(&self) -> Option<&str> {
        present(self.last_name.as_deref())
    }

    pub fn entry_reason(&self) -> Option<&str> {
        present(self.entry_reason.as_deref())
    }

    pub fn birth_date(&self) -> Option<&str> {
        present(self.birth_date.as_deref())
    }

    pub fn home_country(&self) -> Option<&str> {
        location_country(self.home.as_ref())
    }

    pub fn from_country(&self) -> Option<&str> {
        location_country(self.from.as_ref())
    }

    pub fn via_country(&self) -> Option<&str> {
        location_country(self.via.as_ref())
    }

    pub fn visa_date(&self) -> Option<&str> {
        self.visa.as_ref().and_then(|v| present(v.date.as_deref()))
    }
}

fn location_country(location: Option<&Location>) -> Option<&str> {
    location.and_then(|l| present(l.country.as_deref()))
}

/// Blank strings count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Declared purpose of entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryReason {
    Returning,
    Visit,
    Transit,
    Other,
}

impl EntryReason {
    /// Categories match exactly; any other spelling needs no visa.
    pub fn parse(value: &str) -> Self {
        match value {
            "returning" => EntryReason::Returning,
            "visit" => EntryReason::Visit,
            "transit" => EntryReason::Transit,
            _ => EntryReason::Other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub passport: String,
    pub first_name: String,
    pub last_name: String,
}

/// Watchlist indexed for exact-match lookups.
#[derive(Clone, Debug, Default)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
    by_passport: HashMap<String, usize>,
    by_name: HashMap<(String, String), usize>,
}

impl Watchlist {
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        let mut by_passport = HashMap::new();
        let mut by_name = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            // Blank keys would match nothing real; keep them out of the index.
            if !entry.passport.is_empty() {
                by_passport.entry(entry.passport.clone()).or_insert(idx);
            }
            if !entry.first_name.is_empty() && !entry.last_name.is_empty() {
                by_name
                    .entry((entry.first_name.clone(), entry.last_name.clone()))
                    .or_insert(idx);
            }
        }

        Self {
            entries,
            by_passport,
            by_name,
        }
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first entry listing this passport number.
    pub fn match_passport(&self, passport: &str) -> Option<usize> {
        self.by_passport.get(passport).copied()
    }

    /// Index of the first entry listing both names together.
    pub fn match_name(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.by_name
            .get(&(first_name.to_string(), last_name.to_string()))
            .copied()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisaRequirements {
    pub visit: bool,
    pub transit: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    pub name: Option<String>,
    /// Empty or absent means cleared.
    pub medical_advisory: Option<String>,
    pub visa: VisaRequirements,
}

impl CountryRecord {
    /// Any non-empty value is an active advisory, whitespace included.
    pub fn advisory(&self) -> Option<&str> {
        self.medical_advisory.as_deref().filter(|v| !v.is_empty())
    }

    pub fn requires_visa(&self, reason: EntryReason) -> bool {
        match reason {
            EntryReason::Visit => self.visa.visit,
            EntryReason::Transit => self.visa.transit,
            EntryReason::Returning | EntryReason::Other => false,
        }
    }
}

/// Country reference data keyed by upper-cased country code.
#[derive(Clone, Debug, Default)]
pub struct CountryCatalog {
    by_code: BTreeMap<String, CountryRecord>,
}

impl CountryCatalog {
    /// The first record wins when two codes collide after normalization.
    pub fn new(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        let mut by_code = BTreeMap::new();
        for record in records {
            match by_code.entry(normalize_code(&record.code)) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(slot) => {
                    tracing::warn!(
                        code = %slot.key(),
                        ignored = %record.code,
                        "duplicate country code in reference data"
                    );
                }
            }
        }
        Self { by_code }
    }

    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.by_code.get(&normalize_code(code))
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Read-only reference data shared by every traveler evaluation in a run.
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    pub watchlist: Watchlist,
    pub countries: CountryCatalog,
}

impl ReferenceData {
    pub fn new(watchlist: Vec<WatchlistEntry>, countries: Vec<CountryRecord>) -> Self {
        Self {
            watchlist: Watchlist::new(watchlist),
            countries: CountryCatalog::new(countries),
        }
    }
}
