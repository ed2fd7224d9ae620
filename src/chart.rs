//! Renderer-independent chart descriptions.
//!
//! Handlers return a [`ChartSpec`]; the UI draws whatever spec is current
//! for each placeholder. Specs serialize to JSON so two renders can be
//! compared byte for byte.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::color::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(p) => &p.title,
            ChartSpec::Scatter(s) => &s.title,
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(p) => p.total() <= 0.0,
            ChartSpec::Scatter(s) => s.point_count() == 0,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serializing chart spec")
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub segments: Vec<PieSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    /// Share of the whole for each segment, in segment order. All zeros when
    /// the pie is empty.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.segments
            .iter()
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Rgb,
    /// `[x, y]` pairs.
    pub points: Vec<[f64; 2]>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_fractions() {
        let pie = PieChart {
            title: "t".into(),
            segments: vec![
                PieSegment {
                    label: "a".into(),
                    value: 3.0,
                    color: Rgb::GREEN,
                },
                PieSegment {
                    label: "b".into(),
                    value: 1.0,
                    color: Rgb::RED,
                },
            ],
        };
        assert_eq!(pie.fractions(), vec![0.75, 0.25]);
        assert!(!ChartSpec::Pie(pie).is_empty());
    }

    #[test]
    fn test_zero_pie_is_empty() {
        let pie = PieChart {
            title: "t".into(),
            segments: vec![PieSegment {
                label: "a".into(),
                value: 0.0,
                color: Rgb::GREEN,
            }],
        };
        assert_eq!(pie.fractions(), vec![0.0]);
        assert!(ChartSpec::Pie(pie).is_empty());
    }

    #[test]
    fn test_json_is_tagged() {
        let spec = ChartSpec::Scatter(ScatterChart {
            title: "Payload".into(),
            x_label: "x".into(),
            y_label: "y".into(),
            series: Vec::new(),
        });
        let json = spec.to_json().unwrap();
        assert!(json.starts_with(r#"{"kind":"scatter","title":"Payload""#));
        assert!(spec.is_empty());
    }
}
