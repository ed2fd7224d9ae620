use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, in the column layout of the launch records CSV.
#[derive(Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// A booster generation: how many flights, typical payload, reliability.
struct Era {
    category: &'static str,
    flights: u32,
    payload_kg: (f64, f64),
    success_rate: f64,
    sites: &'static [(&'static str, f64)],
}

const ERAS: &[Era] = &[
    Era {
        category: "v1.0",
        flights: 5,
        payload_kg: (0.0, 700.0),
        success_rate: 0.0,
        sites: &[("CCAFS LC-40", 1.0)],
    },
    Era {
        category: "v1.1",
        flights: 15,
        payload_kg: (500.0, 4500.0),
        success_rate: 0.35,
        sites: &[("CCAFS LC-40", 0.8), ("VAFB SLC-4E", 0.2)],
    },
    Era {
        category: "FT",
        flights: 24,
        payload_kg: (2000.0, 7000.0),
        success_rate: 0.65,
        sites: &[("CCAFS LC-40", 0.3), ("KSC LC-39A", 0.45), ("VAFB SLC-4E", 0.25)],
    },
    Era {
        category: "B4",
        flights: 8,
        payload_kg: (2500.0, 9600.0),
        success_rate: 0.5,
        sites: &[("CCAFS SLC-40", 0.4), ("KSC LC-39A", 0.3), ("VAFB SLC-4E", 0.3)],
    },
    // Heavy enough to run past the dashboard slider's 10 t ceiling.
    Era {
        category: "B5",
        flights: 4,
        payload_kg: (3600.0, 15600.0),
        success_rate: 0.75,
        sites: &[("CCAFS SLC-40", 0.75), ("KSC LC-39A", 0.25)],
    },
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Pick from `(item, weight)` pairs.
    fn weighted<'a>(&mut self, choices: &[(&'a str, f64)]) -> &'a str {
        let total: f64 = choices.iter().map(|(_, w)| w).sum();
        let mut roll = self.next_f64() * total;
        for &(item, w) in choices {
            if roll < w {
                return item;
            }
            roll -= w;
        }
        choices.last().map(|&(item, _)| item).unwrap_or_default()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut flight_number = 0;
    let mut core = 1000;
    for era in ERAS {
        for _ in 0..era.flights {
            flight_number += 1;
            core += 1;

            let payload = rng.uniform(era.payload_kg.0, era.payload_kg.1).round();
            let success = rng.next_f64() < era.success_rate;
            let row = LaunchRow {
                flight_number,
                launch_site: rng.weighted(era.sites),
                class: u8::from(success),
                payload_mass_kg: payload,
                booster_version: format!("F9 {}  B{core}", era.category),
                booster_version_category: era.category,
            };
            writer
                .serialize(&row)
                .with_context(|| format!("writing flight {flight_number}"))?;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {flight_number} launches to {output_path}");
    Ok(())
}
