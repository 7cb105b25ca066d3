use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use riverforge_core::layout::Tile;
use riverforge_core::stats::LayoutStats;

pub fn print_tile_counts(counts: &[(Tile, usize)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Tile", "Count"]);
    for (kind, count) in counts {
        table.add_row(vec![
            Cell::new(kind.to_string()),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

pub fn print_stats(stats: &LayoutStats) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec![
        Cell::new("Attack speed"),
        Cell::new(format!("{:.1}", stats.attack_speed)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Enemy attack speed"),
        Cell::new(format!("{:.1}", stats.enemy_attack_speed)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Everything's health"),
        Cell::new(format!("{:.1}%", stats.everything_health)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Income"),
        Cell::new(format!("{:.1}", stats.income)).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}
