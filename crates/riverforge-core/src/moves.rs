use crate::consts::REGROW_STEP_LIMIT;
use crate::grid::{Coord, GridMask};
use crate::state::{FlagGrid, SearchState};
use fastrand::Rng;

/// The randomized local moves the controller routes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Regrow,
    DessertToggle,
    SuburbGrow,
}

/// Relative routing weights; need not sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct MoveWeights {
    pub regrow: f64,
    pub dessert: f64,
    pub suburb: f64,
}

/// Routes one uniform draw to a move kind by cumulative weight.
pub fn pick(weights: &MoveWeights, rng: &mut Rng) -> MoveKind {
    let total = weights.regrow + weights.dessert + weights.suburb;
    let draw = rng.f64() * total;
    if draw < weights.regrow {
        MoveKind::Regrow
    } else if draw < weights.regrow + weights.dessert {
        MoveKind::DessertToggle
    } else {
        MoveKind::SuburbGrow
    }
}

pub fn apply(mask: &GridMask, state: &SearchState, kind: MoveKind, rng: &mut Rng) -> SearchState {
    match kind {
        MoveKind::Regrow => regrow_move(mask, state, rng),
        MoveKind::DessertToggle => dessert_toggle(mask, state, rng),
        MoveKind::SuburbGrow => suburb_grow(mask, state, rng),
    }
}

fn is_extension(mask: &GridMask, occupied: &FlagGrid, head: Coord, cell: Coord) -> bool {
    // Adjacency to the head is guaranteed by the caller drawing candidates
    // from the head's neighborhood; the remaining legality checks are
    // usability, novelty, and self-avoidance.
    mask.usable(cell)
        && !occupied.get(cell)
        && mask.neighbors(cell).all(|n| !occupied.get(n) || n == head)
}

/// Truncates the snake after `trunc_index` and regrows it by repeatedly
/// picking a uniformly random legal extension. Stops when no legal
/// candidate remains or after [`REGROW_STEP_LIMIT`] steps.
pub fn regrow(
    mask: &GridMask,
    snake: &[Coord],
    trunc_index: usize,
    rng: &mut Rng,
) -> Vec<Coord> {
    let mut grown = snake[..=trunc_index].to_vec();
    let mut occupied = FlagGrid::empty(mask.height(), mask.width());
    for &cell in &grown {
        occupied.set(cell, true);
    }
    let mut head = grown[grown.len() - 1];

    for _ in 0..REGROW_STEP_LIMIT {
        let candidates: Vec<Coord> = mask
            .neighbors(head)
            .filter(|&c| is_extension(mask, &occupied, head, c))
            .collect();
        if candidates.is_empty() {
            break;
        }
        let next = candidates[rng.usize(0..candidates.len())];
        grown.push(next);
        occupied.set(next, true);
        head = next;
    }
    grown
}

/// Path-regrowth move: uniform truncation point, random regrowth, then
/// flag cleanup for cells absorbed into the snake. Returns the input
/// unchanged (as a clone) on a single-cell snake.
pub fn regrow_move(mask: &GridMask, state: &SearchState, rng: &mut Rng) -> SearchState {
    if state.snake.len() <= 1 {
        return state.clone();
    }
    let trunc_index = rng.usize(0..state.snake.len());
    let snake = regrow(mask, &state.snake, trunc_index, rng);

    let mut desserts = state.desserts.clone();
    let mut suburbs = state.suburbs.clone();
    for &cell in &snake {
        desserts.set(cell, false);
        suburbs.set(cell, false);
    }
    // Clearing suburb flags can split the blob; keep the largest component
    // so cluster connectivity survives every move.
    let suburbs = retain_largest_cluster(suburbs);

    SearchState {
        snake,
        desserts,
        suburbs,
    }
}

fn retain_largest_cluster(flags: FlagGrid) -> FlagGrid {
    if flags.count() <= 1 {
        return flags;
    }
    let (h, w) = (flags.height(), flags.width());
    let mut seen = FlagGrid::empty(h, w);
    let mut best: Option<FlagGrid> = None;
    let mut best_size = 0usize;

    for seed in flags.iter_set() {
        if seen.get(seed) {
            continue;
        }
        let mut component = FlagGrid::empty(h, w);
        let mut stack = vec![seed];
        let mut size = 0usize;
        seen.set(seed, true);
        component.set(seed, true);
        while let Some(cell) = stack.pop() {
            size += 1;
            for n in flags.neighbors(cell) {
                if flags.get(n) && !seen.get(n) {
                    seen.set(n, true);
                    component.set(n, true);
                    stack.push(n);
                }
            }
        }
        if size > best_size {
            best_size = size;
            best = Some(component);
        }
    }
    best.unwrap_or(flags)
}

/// Dessert-toggle move: flips the flag of one uniformly chosen usable
/// non-path cell adjacent to the snake. No legal candidate means no-op.
pub fn dessert_toggle(mask: &GridMask, state: &SearchState, rng: &mut Rng) -> SearchState {
    let occupied = state.snake_grid();
    let candidates: Vec<Coord> = mask
        .cells()
        .filter(|&c| {
            mask.usable(c) && !occupied.get(c) && mask.neighbors(c).any(|n| occupied.get(n))
        })
        .collect();
    if candidates.is_empty() {
        return state.clone();
    }
    let cell = candidates[rng.usize(0..candidates.len())];
    let mut next = state.clone();
    next.desserts.toggle(cell);
    next
}

/// Suburb-growth move: adds one uniformly chosen usable, non-path,
/// non-suburb cell whose addition keeps the suburb blob connected (any
/// such cell when no suburb exists yet). Add-only; no legal candidate
/// means no-op.
pub fn suburb_grow(mask: &GridMask, state: &SearchState, rng: &mut Rng) -> SearchState {
    let occupied = state.snake_grid();
    let have_suburbs = !state.suburbs.is_empty();
    let candidates: Vec<Coord> = mask
        .cells()
        .filter(|&c| {
            mask.usable(c)
                && !occupied.get(c)
                && !state.suburbs.get(c)
                && (!have_suburbs || mask.neighbors(c).any(|n| state.suburbs.get(n)))
        })
        .collect();
    if candidates.is_empty() {
        return state.clone();
    }
    let cell = candidates[rng.usize(0..candidates.len())];
    let mut next = state.clone();
    next.suburbs.set(cell, true);
    next
}
