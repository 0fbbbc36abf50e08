//! Runtime settings: the simulation config plus demo-only switches.
//!
//! | Variable         | Effect                                              |
//! |------------------|-----------------------------------------------------|
//! | `LTC_CONFIG`     | JSON file with `SimConfig` fields (others default)  |
//! | `TRUCKS_TO_SHOW` | truck count; leading integer, clamped to the max    |
//! | `LTC_SEED`       | RNG seed                                            |
//! | `LTC_OUTPUT_DIR` | record CSV output into this directory               |
//! | `LTC_RENDER`     | `0`/`false` disables the text dashboard             |

use std::path::PathBuf;

use anyhow::{Context, Result};
use ltc_core::SimConfig;

pub const COMMAND_CHANNEL_CAPACITY: usize = 32;

pub struct Settings {
    pub sim:        SimConfig,
    pub output_dir: Option<PathBuf>,
    pub render:     bool,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let mut sim = match std::env::var("LTC_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_json::from_str::<SimConfig>(&text)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => SimConfig::default(),
        };

        if let Ok(requested) = std::env::var("TRUCKS_TO_SHOW") {
            sim = sim.with_requested_trucks(&requested);
        }
        if let Ok(seed) = std::env::var("LTC_SEED") {
            sim.seed = seed
                .trim()
                .parse()
                .with_context(|| format!("LTC_SEED must be an integer, got {seed:?}"))?;
        }

        let output_dir = std::env::var_os("LTC_OUTPUT_DIR").map(PathBuf::from);
        let render = !matches!(std::env::var("LTC_RENDER").as_deref(), Ok("0") | Ok("false"));

        Ok(Self { sim, output_dir, render })
    }
}
