use crate::reports;
use clap::{ArgMatches, Args};
use riverforge_core::annealer::{AnnealOptions, Annealer, ProgressSink};
use riverforge_core::config::{AnnealParams, ScoreWeights, TuneParams, Variant};
use riverforge_core::error::RfResult;
use riverforge_core::grid::GridMask;
use riverforge_core::{layout, stats};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TuneArgs {
    /// Mask file: one line per row, '.' usable, '#' blocked
    #[arg(short, long)]
    pub mask: PathBuf,

    /// Rule-set preset; individual flags below override its fields
    #[arg(short, long, value_enum, default_value_t = Variant::Extended)]
    pub variant: Variant,

    /// Optional JSON score-weights file
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    #[command(flatten)]
    pub params: TuneParams,

    /// Wall-clock budget in seconds (overrides the variant preset)
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// Independent multi-start attempts; the best result wins
    #[arg(short = 'a', long, default_value_t = 1)]
    pub attempts: usize,

    /// RNG seed for reproducible runs
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

struct CliLogger;
impl ProgressSink for CliLogger {
    fn on_progress(&self, iteration: usize, current: f64, best: f64, temperature: f64) -> bool {
        info!(
            "Iter {:7} | Current: {:9.1} | Best: {:9.1} | T: {:6.2}",
            iteration, current, best, temperature
        );
        true
    }
}

pub fn run(args: TuneArgs, matches: &ArgMatches) -> RfResult<()> {
    let mask = GridMask::parse(&fs::read_to_string(&args.mask)?)?;
    info!(
        "📂 Loaded mask {} ({} x {}, {} usable cells)",
        args.mask.display(),
        mask.height(),
        mask.width(),
        mask.usable_count()
    );

    let mut anneal = AnnealParams::for_variant(args.variant);
    anneal.merge_from_cli(&args.params.anneal, matches);
    anneal.validate()?;

    let mut weights = match &args.weights {
        Some(path) => {
            info!("⚖️  Loading score weights from {}", path.display());
            ScoreWeights::load_from_file(path)?
        }
        None => ScoreWeights::default(),
    };
    weights.merge_from_cli(&args.params.weights, matches);

    let mut options = AnnealOptions::from(&anneal);
    if let Some(t) = args.time {
        options.time_limit = Duration::from_secs(t);
    }

    let annealer = Annealer::new(mask, weights, options)?;

    info!(
        "🚀 Tuning ({:?} variant, {} attempt{})...",
        args.variant,
        args.attempts,
        if args.attempts == 1 { "" } else { "s" }
    );
    let result = annealer.run_multi(args.attempts, args.seed, &CliLogger)?;

    let best_layout = layout::derive(annealer.mask(), &result.best);
    let layout_stats = stats::reduce(&best_layout);

    info!("=== 🏆 FINAL RESULT ===");
    info!(
        "Score: {:.2} | River length: {} | {} iterations in {:.1?}",
        result.best_score,
        result.best.snake.len(),
        result.iterations,
        result.elapsed
    );

    reports::grid::print_layout(&best_layout);
    reports::tables::print_tile_counts(&stats::tile_counts(&best_layout));
    reports::tables::print_stats(&layout_stats);
    Ok(())
}
