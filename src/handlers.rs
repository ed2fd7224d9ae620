//! The two reactive handlers. Both are pure: same dataset and inputs give
//! the same [`ChartSpec`].

use crate::chart::{ChartSpec, PieChart, PieSegment, ScatterChart, ScatterSeries};
use crate::color::{ColorMap, Rgb};
use crate::data::filter::{filtered_indices, site_indices, PayloadRange, SiteSelection};
use crate::data::loader::{COL_CLASS, COL_PAYLOAD_MASS};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Outcome proportion (pie)
// ---------------------------------------------------------------------------

/// Success share per site for `All`, or success vs. failure counts for a
/// single site. A single-site pie always carries both segments; an unknown
/// site simply yields two zero segments.
pub fn success_pie(dataset: &LaunchDataset, site: &SiteSelection) -> ChartSpec {
    let pie = match site {
        SiteSelection::All => {
            let colors = ColorMap::new(&dataset.sites);
            let segments = dataset
                .sites
                .iter()
                .map(|name| {
                    let successes = dataset
                        .records
                        .iter()
                        .filter(|r| r.launch_site == *name && r.outcome.is_success())
                        .count();
                    PieSegment {
                        label: name.clone(),
                        value: successes as f64,
                        color: colors.color_for(name),
                    }
                })
                .collect();
            PieChart {
                title: "Total Success Launches for All Sites".to_string(),
                segments,
            }
        }
        SiteSelection::Site(name) => {
            let rows = site_indices(dataset, site);
            let successes = rows
                .iter()
                .filter(|&&i| dataset.records[i].outcome.is_success())
                .count();
            let failures = rows.len() - successes;
            PieChart {
                title: format!("Total Launches by Outcome for {name}"),
                segments: vec![
                    PieSegment {
                        label: Outcome::Success.label().to_string(),
                        value: successes as f64,
                        color: Rgb::GREEN,
                    },
                    PieSegment {
                        label: Outcome::Failure.label().to_string(),
                        value: failures as f64,
                        color: Rgb::RED,
                    },
                ],
            }
        }
    };
    ChartSpec::Pie(pie)
}

// ---------------------------------------------------------------------------
// Payload vs. outcome (scatter)
// ---------------------------------------------------------------------------

/// Outcome class against payload mass for launches inside `range` (and at
/// `site`), one series per booster version category.
///
/// Category colours are assigned over the whole dataset so a category keeps
/// its colour as the filters change. Categories with no surviving points
/// are left out.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ChartSpec {
    let rows = filtered_indices(dataset, site, range);
    let colors = ColorMap::new(&dataset.booster_categories);

    let series = dataset
        .booster_categories
        .iter()
        .filter_map(|category| {
            let points: Vec<[f64; 2]> = rows
                .iter()
                .map(|&i| &dataset.records[i])
                .filter(|r| r.booster_version_category == *category)
                .map(|r| [r.payload_mass_kg, f64::from(r.outcome.class())])
                .collect();
            if points.is_empty() {
                return None;
            }
            Some(ScatterSeries {
                name: category.clone(),
                color: colors.color_for(category),
                points,
            })
        })
        .collect();

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for {name}"),
    };

    ChartSpec::Scatter(ScatterChart {
        title,
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn rec(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_version_category: booster.to_string(),
        }
    }

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("CCAFS LC-40", 0.0, 0, "v1.0"),
            rec("CCAFS LC-40", 2000.0, 1, "v1.1"),
            rec("KSC LC-39A", 5000.0, 1, "F9 v1.1"),
            rec("KSC LC-39A", 3000.0, 1, "FT"),
            rec("VAFB SLC-4E", 500.0, 0, "v1.1"),
            rec("VAFB SLC-4E", 9600.0, 0, "B4"),
            rec("CCAFS SLC-40", 4000.0, 1, "B5"),
        ])
    }

    fn pie(spec: ChartSpec) -> PieChart {
        match spec {
            ChartSpec::Pie(p) => p,
            other => panic!("expected pie, got {other:?}"),
        }
    }

    fn scatter(spec: ChartSpec) -> ScatterChart {
        match spec {
            ChartSpec::Scatter(s) => s,
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    fn segment<'a>(p: &'a PieChart, label: &str) -> &'a PieSegment {
        p.segments
            .iter()
            .find(|s| s.label == label)
            .unwrap_or_else(|| panic!("no '{label}' segment"))
    }

    fn series<'a>(s: &'a ScatterChart, name: &str) -> Option<&'a ScatterSeries> {
        s.series.iter().find(|x| x.name == name)
    }

    fn all_sites_scatter(ds: &LaunchDataset, lo: f64, hi: f64) -> ScatterChart {
        scatter(payload_scatter(ds, &SiteSelection::All, PayloadRange::new(lo, hi)))
    }

    #[test]
    fn test_all_sites_pie_has_one_segment_per_site() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &SiteSelection::All));
        assert_eq!(p.segments.len(), ds.sites.len());
        assert_eq!(p.title, "Total Success Launches for All Sites");

        let values: Vec<f64> = p.segments.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_single_site_pie_has_success_and_failure() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &SiteSelection::from_token("CCAFS LC-40")));
        assert_eq!(p.title, "Total Launches by Outcome for CCAFS LC-40");
        assert_eq!(p.segments.len(), 2);
        assert_eq!(segment(&p, "Success").value, 1.0);
        assert_eq!(segment(&p, "Failure").value, 1.0);
    }

    #[test]
    fn test_site_without_successes_is_all_red() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &SiteSelection::from_token("VAFB SLC-4E")));
        let success = segment(&p, "Success");
        let failure = segment(&p, "Failure");
        assert_eq!(success.value, 0.0);
        assert_eq!(success.color, Rgb::GREEN);
        assert_eq!(failure.value, 2.0);
        assert_eq!(failure.color, Rgb::RED);
        assert_eq!(p.fractions(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_unknown_site_pie_is_empty_not_a_fault() {
        let ds = dataset();
        let spec = success_pie(&ds, &SiteSelection::from_token("Boca Chica"));
        assert!(spec.is_empty());
        assert_eq!(pie(spec).segments.len(), 2);
    }

    #[test]
    fn test_scatter_includes_point_in_range() {
        let ds = dataset();
        let s = all_sites_scatter(&ds, 4000.0, 6000.0);
        let f9 = series(&s, "F9 v1.1").unwrap();
        assert_eq!(f9.points, vec![[5000.0, 1.0]]);
        assert_eq!(s.title, "Payload vs. Outcome for All Sites");
        assert_eq!(s.x_label, "Payload Mass (kg)");
        assert_eq!(s.y_label, "class");
    }

    #[test]
    fn test_scatter_excludes_point_out_of_range() {
        let ds = dataset();
        let s = all_sites_scatter(&ds, 0.0, 1000.0);
        assert!(series(&s, "F9 v1.1").is_none());
        assert_eq!(s.point_count(), 2);
    }

    #[test]
    fn test_scatter_filters_by_site() {
        let ds = dataset();
        let s = scatter(payload_scatter(
            &ds,
            &SiteSelection::from_token("KSC LC-39A"),
            PayloadRange::new(0.0, 10_000.0),
        ));
        assert_eq!(s.title, "Payload vs. Outcome for KSC LC-39A");
        let names: Vec<&str> = s.series.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["F9 v1.1", "FT"]);
    }

    #[test]
    fn test_inverted_range_gives_empty_scatter() {
        let ds = dataset();
        let s = all_sites_scatter(&ds, 6000.0, 1000.0);
        assert_eq!(s.point_count(), 0);
        assert!(s.series.is_empty());
        assert!(ChartSpec::Scatter(s).is_empty());
    }

    #[test]
    fn test_booster_colour_is_stable_across_filters() {
        let ds = dataset();
        let wide = all_sites_scatter(&ds, 0.0, 10_000.0);
        let narrow = all_sites_scatter(&ds, 4500.0, 10_000.0);
        assert_eq!(
            series(&wide, "B4").unwrap().color,
            series(&narrow, "B4").unwrap().color
        );
    }

    #[test]
    fn test_handlers_are_idempotent() {
        let ds = dataset();
        let site = SiteSelection::from_token("CCAFS LC-40");
        let range = PayloadRange::new(0.0, 5000.0);
        assert_eq!(
            payload_scatter(&ds, &site, range).to_json().unwrap(),
            payload_scatter(&ds, &site, range).to_json().unwrap()
        );
        assert_eq!(
            success_pie(&ds, &SiteSelection::All).to_json().unwrap(),
            success_pie(&ds, &SiteSelection::All).to_json().unwrap()
        );
    }
}
