use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as encoded by the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode a raw class value. Anything but 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class, used as the y coordinate of the scatter chart.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kg.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with indices computed once at load time.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, in order of first appearance.
    pub sites: Vec<String>,
    /// Distinct booster version categories, in order of first appearance.
    pub booster_categories: Vec<String>,
    /// Observed payload bounds; `None` for an empty table.
    pub payload_min: Option<f64>,
    pub payload_max: Option<f64>,
}

impl LaunchDataset {
    /// Build the derived indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut payload_min: Option<f64> = None;
        let mut payload_max: Option<f64> = None;

        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
            let p = rec.payload_mass_kg;
            payload_min = Some(payload_min.map_or(p, |m| m.min(p)));
            payload_max = Some(payload_max.map_or(p, |m| m.max(p)));
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `[min, max]` payload, if any rows exist.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        Some((self.payload_min?, self.payload_max?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_version_category: booster.to_string(),
        }
    }

    #[test]
    fn test_indices_keep_first_appearance_order() {
        let ds = LaunchDataset::from_records(vec![
            rec("KSC LC-39A", 5000.0, 1, "FT"),
            rec("CCAFS LC-40", 0.0, 0, "v1.0"),
            rec("KSC LC-39A", 2500.0, 0, "v1.0"),
            rec("VAFB SLC-4E", 9600.0, 1, "B4"),
        ]);
        assert_eq!(ds.sites, vec!["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_categories, vec!["FT", "v1.0", "B4"]);
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
        assert!(ds.sites.is_empty());
    }

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }
}
