use crate::config::{AnnealParams, ScoreWeights};
use crate::error::RfResult;
use crate::error::RiverForgeError;
use crate::grid::GridMask;
use crate::layout;
use crate::moves::{self, MoveWeights};
use crate::scoring::score_layout;
use crate::state::SearchState;
use fastrand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Runtime knobs of one annealing run, decoupled from the CLI layer.
#[derive(Debug, Clone)]
pub struct AnnealOptions {
    pub temp_start: f64,
    pub temp_end: f64,
    /// Early-stop threshold, distinct from the wall-clock deadline: the
    /// loop exits the instant temperature reaches this, deadline or not.
    pub temp_floor: f64,
    /// Shapes the cooling curve only; the deadline is `time_limit`, an
    /// independent knob.
    pub total_iterations: usize,
    pub time_limit: Duration,
    pub moves: MoveWeights,
    pub report_every: usize,
}

impl From<&AnnealParams> for AnnealOptions {
    fn from(params: &AnnealParams) -> Self {
        Self {
            temp_start: params.temp_start,
            temp_end: params.temp_end,
            temp_floor: params.temp_floor,
            total_iterations: params.total_iterations,
            time_limit: Duration::from_secs(params.time_limit_secs),
            moves: MoveWeights {
                regrow: params.p_regrow,
                dessert: params.p_dessert,
                suburb: params.p_suburb,
            },
            report_every: params.report_every,
        }
    }
}

/// Observer invoked every `report_every` iterations. Return `false` to
/// stop the run early. The annealing loop itself performs no I/O.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, iteration: usize, current: f64, best: f64, temperature: f64) -> bool;
}

/// No-op sink for headless runs and tests.
impl ProgressSink for () {
    fn on_progress(&self, _: usize, _: f64, _: f64, _: f64) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct AnnealResult {
    pub best: SearchState,
    pub best_score: f64,
    pub iterations: usize,
    pub elapsed: Duration,
}

/// The annealing controller. Owns the read-only mask, the score weights
/// and the schedule; each `run` call is an independent, reentrant search.
#[derive(Debug)]
pub struct Annealer {
    mask: GridMask,
    weights: ScoreWeights,
    options: AnnealOptions,
}

impl Annealer {
    /// Validates everything that must abort before the loop starts:
    /// a usable cell exists, a usable border cell exists, and the numeric
    /// configuration is sane. `max_oasis` above the cap is clamped here.
    pub fn new(mask: GridMask, mut weights: ScoreWeights, options: AnnealOptions) -> RfResult<Self> {
        mask.validate()?;
        if !mask.has_usable_border() {
            return Err(RiverForgeError::NoStartCell);
        }
        weights.validate()?;
        if options.total_iterations == 0 {
            return Err(RiverForgeError::Config(
                "total_iterations must be at least 1".into(),
            ));
        }
        let move_total = options.moves.regrow + options.moves.dessert + options.moves.suburb;
        if !move_total.is_finite() || move_total <= 0.0 {
            return Err(RiverForgeError::Config(
                "move weights must sum to a positive value".into(),
            ));
        }
        Ok(Self {
            mask,
            weights,
            options,
        })
    }

    pub fn mask(&self) -> &GridMask {
        &self.mask
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// One seeded annealing run: initialize, iterate until the deadline or
    /// the temperature floor, return the best state seen.
    pub fn run<S: ProgressSink>(&self, seed: Option<u64>, sink: &S) -> RfResult<AnnealResult> {
        let mut rng = match seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };

        let start_cell = self.mask.choose_start(&mut rng)?;
        let snake = moves::regrow(&self.mask, &[start_cell], 0, &mut rng);
        let mut current = SearchState::new(snake, self.mask.height(), self.mask.width());
        let mut current_score = score_layout(&layout::derive(&self.mask, &current), &self.weights);
        let mut best = current.clone();
        let mut best_score = current_score;

        let started = Instant::now();
        let mut iteration = 0usize;

        while started.elapsed() < self.options.time_limit {
            iteration += 1;
            let frac = (iteration as f64 / self.options.total_iterations as f64).min(1.0);
            let temperature =
                self.options.temp_start * (1.0 - frac) + self.options.temp_end * frac;
            if temperature <= self.options.temp_floor {
                break;
            }

            let kind = moves::pick(&self.options.moves, &mut rng);
            let candidate = moves::apply(&self.mask, &current, kind, &mut rng);
            let candidate_score =
                score_layout(&layout::derive(&self.mask, &candidate), &self.weights);
            let delta = candidate_score - current_score;

            if delta >= 0.0 || rng.f64() < (delta / temperature).exp() {
                current = candidate;
                current_score = candidate_score;
                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            }

            if iteration % self.options.report_every == 0
                && !sink.on_progress(iteration, current_score, best_score, temperature)
            {
                break;
            }
        }

        Ok(AnnealResult {
            best,
            best_score,
            iterations: iteration,
            elapsed: started.elapsed(),
        })
    }

    /// Independent parallel multi-start: best of `attempts` runs. Seeded
    /// runs stay reproducible via fixed per-attempt offsets.
    pub fn run_multi<S: ProgressSink>(
        &self,
        attempts: usize,
        seed: Option<u64>,
        sink: &S,
    ) -> RfResult<AnnealResult> {
        if attempts <= 1 {
            return self.run(seed, sink);
        }
        let results: Vec<AnnealResult> = (0..attempts)
            .into_par_iter()
            .map(|i| self.run(seed.map(|s| s + 100 * i as u64), sink))
            .collect::<RfResult<Vec<_>>>()?;
        results
            .into_iter()
            .reduce(|a, b| if b.best_score > a.best_score { b } else { a })
            .ok_or_else(|| RiverForgeError::Config("attempts must be at least 1".into()))
    }
}
