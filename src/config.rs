use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Token the site dropdown uses for "every site".
pub const ALL_SITES: &str = "ALL";

/// Fixed settings for the dashboard. There are no CLI flags; everything is
/// a compiled-in default (`RUST_LOG` is the only runtime knob).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV file read once at startup.
    pub dataset_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Slider domain in kg.
    pub payload_min: f64,
    pub payload_max: f64,
    pub payload_step: f64,
    /// Sites offered by the dropdown in addition to `ALL`.
    pub sites: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1100.0, 900.0],
            min_window_size: [600.0, 500.0],
            payload_min: 0.0,
            payload_max: 10_000.0,
            payload_step: 1_000.0,
            sites: ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
