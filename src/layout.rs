//! Static widget tree of the dashboard. Built once at startup and only read
//! afterwards; the chart placeholders are filled from callback outputs.

use crate::callback::{ChartTarget, WidgetId, WidgetValues};
use crate::color::Rgb;
use crate::config::{DashboardConfig, ALL_SITES};
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Heading {
        text: String,
        color: Rgb,
    },
    Dropdown {
        id: WidgetId,
        options: Vec<DropdownOption>,
        default: String,
        placeholder: String,
        searchable: bool,
    },
    Label(String),
    RangeSlider {
        id: WidgetId,
        min: f64,
        max: f64,
        step: f64,
        marks: Vec<SliderMark>,
        initial: PayloadRange,
    },
    Graph(ChartTarget),
    Spacer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub widgets: Vec<Widget>,
}

impl DashboardLayout {
    pub fn new(dataset: &LaunchDataset, config: &DashboardConfig) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(config.sites.iter().map(|s| DropdownOption {
            label: s.clone(),
            value: s.clone(),
        }));

        let span = config.payload_max - config.payload_min;
        let steps = (span / config.payload_step).round() as usize;
        let marks = (0..=steps)
            .map(|i| {
                let value = config.payload_min + i as f64 * config.payload_step;
                SliderMark {
                    value,
                    label: format!("{value} Kg"),
                }
            })
            .collect();

        // The observed range is used as-is even when it pokes outside the
        // slider's fixed domain.
        let initial = match dataset.payload_bounds() {
            Some((lo, hi)) => {
                if lo < config.payload_min || hi > config.payload_max {
                    log::warn!(
                        "observed payload range [{lo}, {hi}] kg exceeds slider domain [{}, {}]",
                        config.payload_min,
                        config.payload_max
                    );
                }
                PayloadRange::new(lo, hi)
            }
            None => PayloadRange::new(config.payload_min, config.payload_max),
        };

        let widgets = vec![
            Widget::Heading {
                text: config.window_title.clone(),
                color: Rgb::HEADING,
            },
            Widget::Dropdown {
                id: WidgetId::SiteDropdown,
                options,
                default: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            Widget::Spacer,
            Widget::Graph(ChartTarget::SuccessPie),
            Widget::Spacer,
            Widget::Label("Payload range (Kg):".to_string()),
            Widget::RangeSlider {
                id: WidgetId::PayloadSlider,
                min: config.payload_min,
                max: config.payload_max,
                step: config.payload_step,
                marks,
                initial,
            },
            Widget::Graph(ChartTarget::PayloadScatter),
        ];

        DashboardLayout { widgets }
    }

    /// Widget values before any user interaction.
    pub fn initial_values(&self) -> WidgetValues {
        let mut values = WidgetValues {
            site: SiteSelection::All,
            payload: PayloadRange::new(f64::NEG_INFINITY, f64::INFINITY),
        };
        for widget in &self.widgets {
            match widget {
                Widget::Dropdown { default, .. } => {
                    values.site = SiteSelection::from_token(default);
                }
                Widget::RangeSlider { initial, .. } => values.payload = *initial,
                _ => {}
            }
        }
        values
    }

    /// Chart placeholders in display order.
    pub fn graphs(&self) -> Vec<ChartTarget> {
        self.widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Graph(target) => Some(*target),
                _ => None,
            })
            .collect()
    }
}
