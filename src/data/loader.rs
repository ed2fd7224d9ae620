use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Problems with the table's shape or contents (as opposed to I/O or CSV
/// framing errors, which come through `csv::Error`).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("line {line}: payload '{value}' is not a number")]
    InvalidPayload { line: u64, value: String },
    #[error("line {line}: class '{value}' is not 0 or 1")]
    InvalidClass { line: u64, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening launch data {}", path.display()))?;
    load_reader(file).with_context(|| format!("reading launch data {}", path.display()))
}

/// Load the launch table from any CSV source with a header row.
///
/// Only the four dashboard columns are read; anything else in the file
/// (flight number, mission outcome, booster version, ...) is ignored.
pub fn load_reader<R: io::Read>(source: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let site_idx = column(COL_LAUNCH_SITE)?;
    let payload_idx = column(COL_PAYLOAD_MASS)?;
    let class_idx = column(COL_CLASS)?;
    let booster_idx = column(COL_BOOSTER_CATEGORY)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // File line of this row: the header is line 1.
        let fallback_line = row_no as u64 + 2;
        let record = result.with_context(|| format!("CSV line {fallback_line}"))?;
        let line = record.position().map_or(fallback_line, |p| p.line());
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let payload_mass_kg = parse_payload(field(payload_idx), line)?;
        let outcome = parse_class(field(class_idx), line)?;

        records.push(LaunchRecord {
            launch_site: field(site_idx).to_string(),
            payload_mass_kg,
            outcome,
            booster_version_category: field(booster_idx).to_string(),
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Cell parsers --

fn parse_payload(s: &str, line: u64) -> Result<f64, LoadError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidPayload {
            line,
            value: s.to_string(),
        })
}

/// `class` is normally written as an integer, but float exports ("1.0")
/// show up too.
fn parse_class(s: &str, line: u64) -> Result<Outcome, LoadError> {
    let class = s.parse::<i64>().ok().or_else(|| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.fract() == 0.0)
            .map(|v| v as i64)
    });
    class
        .and_then(Outcome::from_class)
        .ok_or_else(|| LoadError::InvalidClass {
            line,
            value: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,KSC LC-39A,1,5000.0,F9 FT B1031.1,FT
5,CCAFS SLC-40,1,9600.0,F9 B5 B1046.1,B5
";

    #[test]
    fn test_load_reader_reads_dashboard_columns() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 5);
        assert_eq!(
            ds.sites,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(ds.booster_categories, vec!["v1.0", "v1.1", "FT", "B5"]);
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));

        let ksc = &ds.records[3];
        assert_eq!(ksc.launch_site, "KSC LC-39A");
        assert_eq!(ksc.payload_mass_kg, 5000.0);
        assert_eq!(ksc.outcome, Outcome::Success);
        assert_eq!(ksc.booster_version_category, "FT");
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn(col)) => assert_eq!(*col, COL_PAYLOAD_MASS),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_class_is_rejected() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   KSC LC-39A,3,100,FT\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::InvalidClass { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   KSC LC-39A,1,heavy,FT\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::InvalidPayload { line: 2, .. })
        ));
    }

    #[test]
    fn test_bad_row_reports_file_line() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   KSC LC-39A,1,100,FT\n\
                   KSC LC-39A,1,200,FT\n\
                   VAFB SLC-4E,yes,300,FT\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::InvalidClass { line: 4, .. })
        ));
        assert_eq!(err.to_string(), "line 4: class 'yes' is not 0 or 1");
    }

    #[test]
    fn test_float_class_is_accepted() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   KSC LC-39A,1.0,100,FT\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].outcome, Outcome::Success);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_file(Path::new("does/not/exist/launches.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("launches.csv"));
    }
}
