use crate::config::ScoreWeights;
use crate::layout::{Layout, Tile};

/// Scores a derived layout. Pure: the same layout and weights always
/// produce the same score.
///
/// Terms, all additive:
/// - every `Thicket` earns `thicket_base * 2^r` where `r` counts `River`
///   4-neighbors (an `Oasis` neighbor does not count);
/// - `Oasis` cells earn a flat `oasis_bonus` each, capped globally at
///   `max_oasis` cells;
/// - every `Suburb` contributes `base * 2^r` to a raw sum (base 2 when all
///   four neighbors are suburbs, else 1); the raw sum is capped at
///   `suburb_cap` and then scaled by `suburb_scale`;
/// - every `Maquis` subtracts `maquis_penalty * 2^r`.
pub fn score_layout(layout: &Layout, weights: &ScoreWeights) -> f64 {
    let mut total = 0.0;
    let mut oasis_count = 0usize;
    let mut suburb_raw = 0.0f64;

    for (cell, tile) in layout.cells() {
        match tile {
            Tile::Thicket => {
                let r = layout.river_neighbors(cell);
                total += weights.thicket_base * (1u32 << r) as f64;
            }
            Tile::Oasis => {
                oasis_count += 1;
            }
            Tile::Suburb => {
                let suburb_neighbors = layout
                    .neighbors(cell)
                    .filter(|&n| layout.tile(n) == Tile::Suburb)
                    .count();
                let base = if suburb_neighbors == 4 { 2.0 } else { 1.0 };
                let r = layout.river_neighbors(cell);
                suburb_raw += base * (1u32 << r) as f64;
            }
            Tile::Maquis => {
                let r = layout.river_neighbors(cell);
                total -= weights.maquis_penalty * (1u32 << r) as f64;
            }
            Tile::Blocked | Tile::River | Tile::Dessert => {}
        }
    }

    total += weights.oasis_bonus * oasis_count.min(weights.max_oasis as usize) as f64;
    total += weights.suburb_scale * suburb_raw.min(weights.suburb_cap);
    total
}
