//! Dataset adapters: read and parse the traveler, watchlist, and country JSON documents.
//!
//! This crate is allowed to do filesystem IO. Evaluation lives in `papers-domain`.

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use camino::Utf8Path;
use papers_domain::model::{ReferenceData, TravelerRecord};

pub use parse::{parse_countries, parse_travelers, parse_watchlist};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a travelers document. **Never panics** on any input.
    pub fn parse_travelers(text: &str) -> anyhow::Result<usize> {
        Ok(parse::parse_travelers(text)?.len())
    }

    /// Parse arbitrary text as a watchlist document. **Never panics** on any input.
    pub fn parse_watchlist(text: &str) -> anyhow::Result<usize> {
        Ok(parse::parse_watchlist(text)?.len())
    }

    /// Parse arbitrary text as a countries document. **Never panics** on any input.
    pub fn parse_countries(text: &str) -> anyhow::Result<usize> {
        Ok(parse::parse_countries(text)?.len())
    }
}

/// The three datasets a decision run needs.
#[derive(Clone, Debug)]
pub struct Datasets {
    pub travelers: Vec<TravelerRecord>,
    pub reference: ReferenceData,
}

/// Paths to the three input documents.
#[derive(Clone, Copy, Debug)]
pub struct DatasetPaths<'a> {
    pub travelers: &'a Utf8Path,
    pub watchlist: &'a Utf8Path,
    pub countries: &'a Utf8Path,
}

/// Read and parse all three documents.
pub fn load_datasets(paths: DatasetPaths<'_>) -> anyhow::Result<Datasets> {
    let travelers = load_travelers(paths.travelers)?;
    let watchlist = read(paths.watchlist)
        .and_then(|text| parse::parse_watchlist(&text))
        .with_context(|| format!("load watchlist {}", paths.watchlist))?;
    let countries = read(paths.countries)
        .and_then(|text| parse::parse_countries(&text))
        .with_context(|| format!("load countries {}", paths.countries))?;

    tracing::debug!(
        travelers = travelers.len(),
        watchlist = watchlist.len(),
        countries = countries.len(),
        "datasets loaded"
    );

    Ok(Datasets {
        travelers,
        reference: ReferenceData::new(watchlist, countries),
    })
}

pub fn load_travelers(path: &Utf8Path) -> anyhow::Result<Vec<TravelerRecord>> {
    read(path)
        .and_then(|text| parse::parse_travelers(&text))
        .with_context(|| format!("load travelers {path}"))
}

fn read(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {path}"))
}
