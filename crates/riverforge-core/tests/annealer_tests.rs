use riverforge_core::annealer::{AnnealOptions, Annealer};
use riverforge_core::config::{AnnealParams, ScoreWeights, Variant};
use riverforge_core::error::RiverForgeError;
use riverforge_core::grid::GridMask;
use riverforge_core::layout::derive;
use riverforge_core::scoring::score_layout;
use std::time::Duration;

fn quick_options(total_iterations: usize, temp_floor: f64) -> AnnealOptions {
    let mut options = AnnealOptions::from(&AnnealParams::default());
    options.total_iterations = total_iterations;
    options.temp_floor = temp_floor;
    options.time_limit = Duration::from_secs(30);
    options
}

#[test]
fn zero_time_budget_returns_the_initial_state() {
    let mask = GridMask::open(6, 6);
    let mut options = quick_options(1_000, 0.1);
    options.time_limit = Duration::ZERO;
    let annealer = Annealer::new(mask.clone(), ScoreWeights::default(), options).unwrap();
    let result = annealer.run(Some(11), &()).unwrap();

    assert_eq!(result.iterations, 0);
    assert!(!result.best.snake.is_empty());
    assert!(result.best.invariants_hold(&mask));
    let layout = derive(&mask, &result.best);
    assert_eq!(
        score_layout(&layout, annealer.weights()),
        result.best_score
    );
}

#[test]
fn temperature_floor_stops_before_the_nominal_budget() {
    // With a floor of 1.0 the linear schedule bottoms out around 99% of
    // the way through the budget, well before the deadline.
    let mask = GridMask::open(5, 5);
    let annealer =
        Annealer::new(mask, ScoreWeights::default(), quick_options(1_000, 1.0)).unwrap();
    let result = annealer.run(Some(3), &()).unwrap();
    assert!(result.iterations < 1_000);
    assert!(result.iterations >= 900);
}

#[test]
fn default_floor_stops_exactly_when_the_schedule_bottoms_out() {
    let mask = GridMask::open(5, 5);
    let annealer =
        Annealer::new(mask, ScoreWeights::default(), quick_options(1_000, 0.1)).unwrap();
    let result = annealer.run(Some(3), &()).unwrap();
    // frac clamps to 1.0 at the budget, temperature hits temp_end == floor.
    assert_eq!(result.iterations, 1_000);
}

#[test]
fn best_state_satisfies_all_invariants() {
    let mask = GridMask::parse("......\n..##..\n......\n.#....\n......").unwrap();
    let annealer =
        Annealer::new(mask.clone(), ScoreWeights::default(), quick_options(2_000, 0.1)).unwrap();
    let result = annealer.run(Some(21), &()).unwrap();
    assert!(result.best.invariants_hold(&mask));
    assert!(result.best_score > 0.0);
}

#[test]
fn empty_mask_is_rejected_before_the_run() {
    let mask = GridMask::from_fn(4, 4, |_| false);
    let err = Annealer::new(mask, ScoreWeights::default(), quick_options(100, 0.1)).unwrap_err();
    assert!(matches!(err, RiverForgeError::EmptyMask));
}

#[test]
fn interior_only_mask_is_rejected_as_unstartable() {
    let mask = GridMask::from_fn(4, 4, |(i, j)| (1..3).contains(&i) && (1..3).contains(&j));
    let err = Annealer::new(mask, ScoreWeights::default(), quick_options(100, 0.1)).unwrap_err();
    assert!(matches!(err, RiverForgeError::NoStartCell));
}

#[test]
fn zero_iteration_budget_is_a_config_error() {
    let mask = GridMask::open(4, 4);
    let err = Annealer::new(mask, ScoreWeights::default(), quick_options(0, 0.1)).unwrap_err();
    assert!(matches!(err, RiverForgeError::Config(_)));
}

#[test]
fn oversized_oasis_cap_is_clamped_at_construction() {
    let mask = GridMask::open(4, 4);
    let weights = ScoreWeights {
        max_oasis: 99,
        ..Default::default()
    };
    let annealer = Annealer::new(mask, weights, quick_options(100, 0.1)).unwrap();
    assert_eq!(annealer.weights().max_oasis, 50);
}

#[test]
fn multi_start_returns_the_best_of_the_attempt_seeds() {
    let mask = GridMask::open(8, 8);
    let annealer =
        Annealer::new(mask, ScoreWeights::default(), quick_options(1_500, 0.1)).unwrap();

    let multi = annealer.run_multi(3, Some(40), &()).unwrap();
    let singles: Vec<f64> = (0..3)
        .map(|i| annealer.run(Some(40 + 100 * i), &()).unwrap().best_score)
        .collect();
    let expected = singles.iter().cloned().fold(f64::MIN, f64::max);
    assert_eq!(multi.best_score, expected);
}

#[test]
fn variant_presets_match_the_historical_configurations() {
    let minimal = AnnealParams::for_variant(Variant::Minimal);
    assert_eq!(minimal.total_iterations, 100_000);
    assert_eq!(minimal.temp_floor, 1.0);
    assert_eq!(minimal.time_limit_secs, 120);
    assert_eq!(minimal.p_regrow, 1.0);
    assert_eq!(minimal.p_suburb, 0.0);

    let classic = AnnealParams::for_variant(Variant::Classic);
    assert_eq!(classic.p_regrow, 0.7);
    assert_eq!(classic.p_dessert, 0.3);
    assert_eq!(classic.p_suburb, 0.0);
    assert_eq!(classic.temp_floor, 0.1);
    assert_eq!(classic.time_limit_secs, 300);

    let extended = AnnealParams::for_variant(Variant::Extended);
    assert_eq!(extended.p_regrow, 0.6);
    assert_eq!(extended.p_dessert, 0.25);
    assert_eq!(extended.p_suburb, 0.15);
    assert_eq!(extended.total_iterations, 500_000);
}

#[test]
fn negative_move_probability_fails_validation() {
    let params = AnnealParams {
        p_dessert: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        params.validate(),
        Err(RiverForgeError::Config(_))
    ));
}
