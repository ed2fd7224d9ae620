//! Observer-style wiring between input widgets and chart placeholders.
//!
//! Each callback names the widgets it reads and the chart it writes. When a
//! widget's value changes, every callback subscribed to that widget runs
//! and its spec is published to its target.

use std::collections::BTreeMap;
use std::fmt;

use crate::chart::ChartSpec;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::handlers;

/// Input widgets whose value can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetId {
    SiteDropdown,
    PayloadSlider,
}

impl WidgetId {
    pub fn id(self) -> &'static str {
        match self {
            WidgetId::SiteDropdown => "site-dropdown",
            WidgetId::PayloadSlider => "payload-slider",
        }
    }
}

/// Chart placeholders that callbacks publish to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartTarget {
    SuccessPie,
    PayloadScatter,
}

impl ChartTarget {
    pub fn id(self) -> &'static str {
        match self {
            ChartTarget::SuccessPie => "success-pie-chart",
            ChartTarget::PayloadScatter => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Current value of every input widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetValues {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

type Handler = Box<dyn Fn(&LaunchDataset, &WidgetValues) -> ChartSpec>;

pub struct Callback {
    pub output: ChartTarget,
    handler: Handler,
}

impl Callback {
    pub fn invoke(&self, dataset: &LaunchDataset, values: &WidgetValues) -> ChartSpec {
        (self.handler)(dataset, values)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
    /// widget → indices into `callbacks`, in registration order.
    subscriptions: BTreeMap<WidgetId, Vec<usize>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to every widget in `inputs`, publishing to `output`.
    pub fn register<F>(&mut self, inputs: &[WidgetId], output: ChartTarget, handler: F)
    where
        F: Fn(&LaunchDataset, &WidgetValues) -> ChartSpec + 'static,
    {
        let idx = self.callbacks.len();
        for &input in inputs {
            let subs = self.subscriptions.entry(input).or_default();
            if !subs.contains(&idx) {
                subs.push(idx);
            }
        }
        self.callbacks.push(Callback {
            output,
            handler: Box::new(handler),
        });
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Targets that would be re-rendered by a change to `widget`.
    pub fn targets_of(&self, widget: WidgetId) -> Vec<ChartTarget> {
        self.subscriptions
            .get(&widget)
            .map(|subs| subs.iter().map(|&i| self.callbacks[i].output).collect())
            .unwrap_or_default()
    }

    /// Run every callback subscribed to `changed`.
    pub fn dispatch(
        &self,
        changed: WidgetId,
        dataset: &LaunchDataset,
        values: &WidgetValues,
    ) -> Vec<(ChartTarget, ChartSpec)> {
        let Some(subs) = self.subscriptions.get(&changed) else {
            return Vec::new();
        };
        log::debug!(
            "{} changed, running {} callback(s)",
            changed.id(),
            subs.len()
        );
        subs.iter()
            .map(|&i| {
                let cb = &self.callbacks[i];
                (cb.output, cb.invoke(dataset, values))
            })
            .collect()
    }

    /// Run every callback once, e.g. for the first frame.
    pub fn dispatch_all(
        &self,
        dataset: &LaunchDataset,
        values: &WidgetValues,
    ) -> Vec<(ChartTarget, ChartSpec)> {
        self.callbacks
            .iter()
            .map(|cb| (cb.output, cb.invoke(dataset, values)))
            .collect()
    }
}

/// The dashboard's wiring: dropdown → pie, dropdown + slider → scatter.
pub fn dashboard_callbacks() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    registry.register(&[WidgetId::SiteDropdown], ChartTarget::SuccessPie, |ds, v| {
        handlers::success_pie(ds, &v.site)
    });
    registry.register(
        &[WidgetId::SiteDropdown, WidgetId::PayloadSlider],
        ChartTarget::PayloadScatter,
        |ds, v| handlers::payload_scatter(ds, &v.site, v.payload),
    );
    registry
}
