use crate::layout::{Layout, Tile};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Presentation-layer game-balance numbers reduced from a final layout.
/// Not consumed by the optimizer; pure function of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutStats {
    pub attack_speed: f64,
    pub enemy_attack_speed: f64,
    pub everything_health: f64,
    pub income: f64,
}

/// Reduces a layout into [`LayoutStats`]:
/// - thickets add `2 * 2^r` attack speed (`r` = adjacent river cells);
/// - desserts drain `2^r` of everything's health;
/// - oases shave 0.5 attack speed and 1 enemy attack speed each;
/// - maquis cells drain `0.5 * 2^r` health and 0.5 enemy attack speed;
/// - suburbs add 1 income each, 2 when fully surrounded by suburbs.
///
/// Enemy attack speed floors at -50 and everything's health at 1.
pub fn reduce(layout: &Layout) -> LayoutStats {
    let mut attack_speed = 0.0;
    let mut enemy_attack_speed: f64 = 0.0;
    let mut everything_health = 100.0;
    let mut income = 0.0;

    for (cell, tile) in layout.cells() {
        match tile {
            Tile::Thicket => {
                let r = layout.river_neighbors(cell);
                attack_speed += 2.0 * (1u32 << r) as f64;
            }
            Tile::Dessert => {
                let r = layout.river_neighbors(cell);
                everything_health -= (1u32 << r) as f64;
            }
            Tile::Oasis => {
                attack_speed -= 0.5;
                enemy_attack_speed -= 1.0;
            }
            Tile::Maquis => {
                let r = layout.river_neighbors(cell);
                everything_health -= 0.5 * (1u32 << r) as f64;
                enemy_attack_speed -= 0.5;
            }
            Tile::Suburb => {
                let suburb_neighbors = layout
                    .neighbors(cell)
                    .filter(|&n| layout.tile(n) == Tile::Suburb)
                    .count();
                income += if suburb_neighbors == 4 { 2.0 } else { 1.0 };
            }
            Tile::Blocked | Tile::River => {}
        }
    }

    LayoutStats {
        attack_speed,
        enemy_attack_speed: enemy_attack_speed.max(-50.0),
        everything_health: everything_health.max(1.0),
        income,
    }
}

/// Per-kind tile tally, in declaration order.
pub fn tile_counts(layout: &Layout) -> Vec<(Tile, usize)> {
    Tile::iter().map(|kind| (kind, layout.count(kind))).collect()
}
