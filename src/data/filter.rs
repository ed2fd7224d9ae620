use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};
use crate::config::ALL_SITES;

// ---------------------------------------------------------------------------
// Filter inputs: the current values of the two widgets
// ---------------------------------------------------------------------------

/// Dropdown value: every site, or one named site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a dropdown token. `ALL` selects every site; any other
    /// string is taken as a site name, known or not.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a record passes this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Inclusive payload window in kg. `lo > hi` is legal and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.lo && payload_kg <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Indices of records at the selected site.
pub fn site_indices(dataset: &LaunchDataset, site: &SiteSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records inside the payload window, then narrowed to the
/// selected site.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg))
        .filter(|(_, rec)| site.matches(rec))
        .map(|(i, _)| i)
        .collect()
}
