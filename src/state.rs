use std::collections::BTreeMap;
use std::sync::Arc;

use crate::callback::{
    dashboard_callbacks, CallbackRegistry, ChartTarget, WidgetId, WidgetValues,
};
use crate::chart::ChartSpec;
use crate::config::DashboardConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::layout::DashboardLayout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
pub struct AppState {
    /// Launch table, loaded once and never mutated.
    pub dataset: Arc<LaunchDataset>,

    pub layout: DashboardLayout,

    /// Current value of every input widget.
    pub values: WidgetValues,

    /// Latest spec published to each chart placeholder.
    pub charts: BTreeMap<ChartTarget, ChartSpec>,

    registry: CallbackRegistry,
}

impl AppState {
    /// Build the layout, wire the callbacks, and render every chart once.
    pub fn new(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Self {
        let layout = DashboardLayout::new(&dataset, config);
        let values = layout.initial_values();
        let registry = dashboard_callbacks();

        let mut state = Self {
            dataset,
            layout,
            values,
            charts: BTreeMap::new(),
            registry,
        };
        let outputs = state.registry.dispatch_all(&state.dataset, &state.values);
        state.publish(outputs);

        log::info!("{} callbacks wired", state.registry.len());
        for widget in [WidgetId::SiteDropdown, WidgetId::PayloadSlider] {
            let targets = state.registry.targets_of(widget);
            log::debug!("{} drives {targets:?}", widget.id());
        }
        for target in state.unwired_graphs() {
            log::warn!("no callback publishes to {target}");
        }
        state
    }

    /// Chart placeholders in the layout that no callback has filled.
    pub fn unwired_graphs(&self) -> Vec<ChartTarget> {
        self.layout
            .graphs()
            .into_iter()
            .filter(|target| !self.charts.contains_key(target))
            .collect()
    }

    /// Dropdown changed.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.values.site == site {
            return;
        }
        log::debug!("site selection → {site}");
        self.values.site = site;
        self.notify(WidgetId::SiteDropdown);
    }

    /// Slider changed.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if self.values.payload == range {
            return;
        }
        log::debug!("payload range → [{}, {}]", range.lo, range.hi);
        self.values.payload = range;
        self.notify(WidgetId::PayloadSlider);
    }

    pub fn chart(&self, target: ChartTarget) -> Option<&ChartSpec> {
        self.charts.get(&target)
    }

    fn notify(&mut self, widget: WidgetId) {
        let outputs = self.registry.dispatch(widget, &self.dataset, &self.values);
        self.publish(outputs);
    }

    fn publish(&mut self, outputs: Vec<(ChartTarget, ChartSpec)>) {
        for (target, spec) in outputs {
            if log::log_enabled!(log::Level::Trace) {
                match spec.to_json() {
                    Ok(json) => log::trace!("{target} ← {json}"),
                    Err(e) => log::warn!("{target}: {e:#}"),
                }
            }
            self.charts.insert(target, spec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn state() -> AppState {
        let rows = [
            ("KSC LC-39A", 5000.0, Outcome::Success, "F9 v1.1"),
            ("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1"),
            ("CCAFS LC-40", 3000.0, Outcome::Success, "FT"),
        ];
        let ds = LaunchDataset::from_records(
            rows.iter()
                .map(|&(site, payload, outcome, booster)| LaunchRecord {
                    launch_site: site.to_string(),
                    payload_mass_kg: payload,
                    outcome,
                    booster_version_category: booster.to_string(),
                })
                .collect(),
        );
        AppState::new(Arc::new(ds), &DashboardConfig::default())
    }

    #[test]
    fn test_both_charts_exist_after_startup() {
        let s = state();
        assert_eq!(
            s.chart(ChartTarget::SuccessPie).unwrap().title(),
            "Total Success Launches for All Sites"
        );
        assert_eq!(
            s.chart(ChartTarget::PayloadScatter).unwrap().title(),
            "Payload vs. Outcome for All Sites"
        );
        assert_eq!(s.values.payload, PayloadRange::new(500.0, 5000.0));
    }

    #[test]
    fn test_every_layout_graph_is_wired() {
        let mut s = state();
        assert!(s.unwired_graphs().is_empty());

        s.charts.remove(&ChartTarget::PayloadScatter);
        assert_eq!(s.unwired_graphs(), vec![ChartTarget::PayloadScatter]);
    }

    #[test]
    fn test_site_change_updates_both_charts() {
        let mut s = state();
        s.set_site(SiteSelection::from_token("VAFB SLC-4E"));
        assert_eq!(
            s.chart(ChartTarget::SuccessPie).unwrap().title(),
            "Total Launches by Outcome for VAFB SLC-4E"
        );
        assert_eq!(
            s.chart(ChartTarget::PayloadScatter).unwrap().title(),
            "Payload vs. Outcome for VAFB SLC-4E"
        );
    }

    #[test]
    fn test_range_change_leaves_pie_alone() {
        let mut s = state();
        let pie_before = s.chart(ChartTarget::SuccessPie).cloned();
        s.set_payload_range(PayloadRange::new(4000.0, 6000.0));
        assert_eq!(s.chart(ChartTarget::SuccessPie).cloned(), pie_before);
        match s.chart(ChartTarget::PayloadScatter).unwrap() {
            ChartSpec::Scatter(sc) => assert_eq!(sc.point_count(), 1),
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn test_same_inputs_give_identical_json() {
        let mut s = state();
        let first = s.chart(ChartTarget::PayloadScatter).unwrap();
        let first = first.to_json().unwrap();
        s.set_payload_range(PayloadRange::new(0.0, 1000.0));
        s.set_payload_range(PayloadRange::new(500.0, 5000.0));
        let again = s.chart(ChartTarget::PayloadScatter).unwrap();
        let again = again.to_json().unwrap();
        assert_eq!(first, again);
    }
}
