use crate::consts::{DEFAULT_REPORT_EVERY, DEFAULT_TEMP_END, DEFAULT_TEMP_START, MAX_OASIS_CAP};
use crate::error::{RfResult, RiverForgeError};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a tuning run is parameterized by.
#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuneParams {
    #[command(flatten)]
    pub anneal: AnnealParams,
    #[command(flatten)]
    pub weights: ScoreWeights,
}

/// Historical rule sets. One unified deriver/scorer serves all three; a
/// variant is just a parameter preset.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// River-only search: snake moves exclusively, early stop at T <= 1.0.
    Minimal,
    /// Snake plus dessert toggles, 70/30 move split.
    Classic,
    /// Snake, desserts and suburb growth, 60/25/15 move split.
    Extended,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealParams {
    #[arg(long, default_value_t = DEFAULT_TEMP_START)]
    pub temp_start: f64,
    #[arg(long, default_value_t = DEFAULT_TEMP_END)]
    pub temp_end: f64,

    /// The loop stops the moment temperature falls to or below this,
    /// independently of the wall-clock deadline.
    #[arg(long, default_value_t = 0.1)]
    pub temp_floor: f64,

    /// Nominal iteration budget shaping the cooling curve. Temperature
    /// floors at `temp_end` once this many iterations have elapsed.
    #[arg(long, default_value_t = 500_000)]
    pub total_iterations: usize,

    /// Hard wall-clock deadline in seconds.
    #[arg(long, default_value_t = 300)]
    pub time_limit_secs: u64,

    #[arg(long, default_value_t = 0.6)]
    pub p_regrow: f64,
    #[arg(long, default_value_t = 0.25)]
    pub p_dessert: f64,
    #[arg(long, default_value_t = 0.15)]
    pub p_suburb: f64,

    #[arg(long, default_value_t = DEFAULT_REPORT_EVERY)]
    pub report_every: usize,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            temp_start: DEFAULT_TEMP_START,
            temp_end: DEFAULT_TEMP_END,
            temp_floor: 0.1,
            total_iterations: 500_000,
            time_limit_secs: 300,
            p_regrow: 0.6,
            p_dessert: 0.25,
            p_suburb: 0.15,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

impl AnnealParams {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Minimal => Self {
                temp_floor: 1.0,
                total_iterations: 100_000,
                time_limit_secs: 120,
                p_regrow: 1.0,
                p_dessert: 0.0,
                p_suburb: 0.0,
                ..Self::default()
            },
            Variant::Classic => Self {
                p_regrow: 0.7,
                p_dessert: 0.3,
                p_suburb: 0.0,
                ..Self::default()
            },
            Variant::Extended => Self::default(),
        }
    }

    /// Overwrites fields the user actually passed on the command line,
    /// leaving variant-preset values in place otherwise.
    pub fn merge_from_cli(&mut self, cli: &AnnealParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(temp_start, "temp_start");
        update_if_present!(temp_end, "temp_end");
        update_if_present!(temp_floor, "temp_floor");
        update_if_present!(total_iterations, "total_iterations");
        update_if_present!(time_limit_secs, "time_limit_secs");
        update_if_present!(p_regrow, "p_regrow");
        update_if_present!(p_dessert, "p_dessert");
        update_if_present!(p_suburb, "p_suburb");
        update_if_present!(report_every, "report_every");
    }

    pub fn validate(&self) -> RfResult<()> {
        if self.total_iterations == 0 {
            return Err(RiverForgeError::Config(
                "total_iterations must be at least 1".into(),
            ));
        }
        if !(self.temp_start.is_finite() && self.temp_end.is_finite() && self.temp_floor.is_finite())
        {
            return Err(RiverForgeError::Config(
                "temperatures must be finite".into(),
            ));
        }
        if self.temp_start <= 0.0 {
            return Err(RiverForgeError::Config(
                "temp_start must be positive".into(),
            ));
        }
        let probs = [self.p_regrow, self.p_dessert, self.p_suburb];
        if probs.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(RiverForgeError::Config(
                "move probabilities must be non-negative".into(),
            ));
        }
        if probs.iter().sum::<f64>() <= 0.0 {
            return Err(RiverForgeError::Config(
                "at least one move probability must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Weights of the scoring terms. The defaults reproduce the historical
/// game-balance heuristics.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Base bonus of a thicket cell, doubled per adjacent river cell.
    #[arg(long, default_value_t = 2.0)]
    pub thicket_base: f64,

    /// Flat per-oasis bonus.
    #[arg(long, default_value_t = 30.0)]
    pub oasis_bonus: f64,

    /// Global cap on the number of oases that score; clamped to 50.
    #[arg(long, default_value_t = MAX_OASIS_CAP)]
    pub max_oasis: u32,

    /// Scale applied to the capped raw suburb sum.
    #[arg(long, default_value_t = 10.0)]
    pub suburb_scale: f64,

    /// Cap on the raw per-cell suburb sum, applied before scaling.
    #[arg(long, default_value_t = 25.0)]
    pub suburb_cap: f64,

    /// Per-maquis penalty factor, multiplied by 2^(river neighbors).
    #[arg(long, default_value_t = 0.5)]
    pub maquis_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            thicket_base: 2.0,
            oasis_bonus: 30.0,
            max_oasis: MAX_OASIS_CAP,
            suburb_scale: 10.0,
            suburb_cap: 25.0,
            maquis_penalty: 0.5,
        }
    }
}

impl ScoreWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        Ok(weights)
    }

    pub fn merge_from_cli(&mut self, cli: &ScoreWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(thicket_base, "thicket_base");
        update_if_present!(oasis_bonus, "oasis_bonus");
        update_if_present!(max_oasis, "max_oasis");
        update_if_present!(suburb_scale, "suburb_scale");
        update_if_present!(suburb_cap, "suburb_cap");
        update_if_present!(maquis_penalty, "maquis_penalty");
    }

    /// Clamps `max_oasis` to the hard ceiling and rejects non-finite
    /// weights. Must pass before a run starts.
    pub fn validate(&mut self) -> RfResult<()> {
        if self.max_oasis > MAX_OASIS_CAP {
            tracing::warn!(
                "max_oasis {} exceeds the cap, clamping to {}",
                self.max_oasis,
                MAX_OASIS_CAP
            );
            self.max_oasis = MAX_OASIS_CAP;
        }
        let values = [
            self.thicket_base,
            self.oasis_bonus,
            self.suburb_scale,
            self.suburb_cap,
            self.maquis_penalty,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RiverForgeError::Config(
                "score weights must be finite".into(),
            ));
        }
        Ok(())
    }
}
