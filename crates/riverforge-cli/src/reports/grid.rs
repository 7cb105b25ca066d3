use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use riverforge_core::grid::GridMask;
use riverforge_core::layout::{Layout, Tile};

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Blocked => Color::DarkGrey,
        Tile::River => Color::Blue,
        Tile::Oasis => Color::Cyan,
        Tile::Suburb => Color::Yellow,
        Tile::Dessert => Color::Red,
        Tile::Thicket => Color::Green,
        Tile::Maquis => Color::DarkGreen,
    }
}

pub fn print_layout(layout: &Layout) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for i in 0..layout.height() {
        let cells: Vec<Cell> = (0..layout.width())
            .map(|j| {
                let tile = layout.tile((i, j));
                Cell::new(tile.glyph())
                    .fg(tile_color(tile))
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_mask(mask: &GridMask) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for i in 0..mask.height() {
        let cells: Vec<Cell> = (0..mask.width())
            .map(|j| {
                let (glyph, color) = if mask.usable((i, j)) {
                    ('.', Color::Green)
                } else {
                    ('#', Color::DarkGrey)
                };
                Cell::new(glyph)
                    .fg(color)
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}
