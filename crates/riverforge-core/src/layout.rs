use crate::grid::{neighbors4, Coord, GridMask};
use crate::state::SearchState;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Symbolic tile kind of one cell in the derived layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Tile {
    Blocked,
    River,
    Oasis,
    Suburb,
    Dessert,
    Thicket,
    Maquis,
}

impl Tile {
    /// Single-character label used by grid reports.
    pub fn glyph(&self) -> char {
        match self {
            Tile::Blocked => '#',
            Tile::River => '~',
            Tile::Oasis => 'O',
            Tile::Suburb => 'S',
            Tile::Dessert => 'D',
            Tile::Thicket => 'T',
            Tile::Maquis => 'M',
        }
    }
}

/// A derived tile classification grid. Never authoritative state: always
/// recomputed from (mask, state) via [`derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    height: usize,
    width: usize,
    tiles: Vec<Tile>,
}

impl Layout {
    /// Builds a layout from raw tiles; mainly for tests and external
    /// renderers. [`derive`] is the only producer inside the optimizer.
    pub fn from_tiles(height: usize, width: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), height * width);
        Self {
            height,
            width,
            tiles,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tile(&self, (i, j): Coord) -> Tile {
        self.tiles[i * self.width + j]
    }

    fn set(&mut self, (i, j): Coord, tile: Tile) {
        self.tiles[i * self.width + j] = tile;
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        let w = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, &t)| ((idx / w, idx % w), t))
    }

    pub fn count(&self, kind: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    pub fn neighbors(&self, cell: Coord) -> impl Iterator<Item = Coord> {
        neighbors4(self.height, self.width, cell)
    }

    /// Number of 4-neighbors classified exactly as `River`. Oasis cells
    /// are path cells too but do not count here; the balance rules treat
    /// them as spent.
    pub fn river_neighbors(&self, cell: Coord) -> usize {
        self.neighbors(cell)
            .filter(|&n| self.tile(n) == Tile::River)
            .count()
    }
}

/// Derives the tile classification from the mask and the optimization
/// state. Pure and deterministic: same inputs, same layout.
///
/// Classification runs in passes: unusable cells become `Blocked`; path
/// cells become `River`; remaining usable cells become `Suburb`, `Dessert`
/// (flagged and adjacent to the path) or `Thicket`. Then path cells with a
/// `Dessert` neighbor are rewritten to `Oasis`, and `Thicket` cells with a
/// `Dessert` neighbor are rewritten to `Maquis`.
pub fn derive(mask: &GridMask, state: &SearchState) -> Layout {
    let (h, w) = (mask.height(), mask.width());
    let occupied = state.snake_grid();
    let mut layout = Layout {
        height: h,
        width: w,
        tiles: vec![Tile::Thicket; h * w],
    };

    for cell in mask.cells() {
        let tile = if !mask.usable(cell) {
            Tile::Blocked
        } else if occupied.get(cell) {
            Tile::River
        } else if state.suburbs.get(cell) {
            Tile::Suburb
        } else if state.desserts.get(cell) && mask.neighbors(cell).any(|n| occupied.get(n)) {
            Tile::Dessert
        } else {
            Tile::Thicket
        };
        layout.set(cell, tile);
    }

    for cell in mask.cells() {
        if layout.tile(cell) == Tile::River
            && layout.neighbors(cell).any(|n| layout.tile(n) == Tile::Dessert)
        {
            layout.set(cell, Tile::Oasis);
        }
    }

    let upgrades: Vec<Coord> = layout
        .cells()
        .filter(|&(cell, tile)| {
            tile == Tile::Thicket
                && layout.neighbors(cell).any(|n| layout.tile(n) == Tile::Dessert)
        })
        .map(|(cell, _)| cell)
        .collect();
    for cell in upgrades {
        layout.set(cell, Tile::Maquis);
    }

    layout
}
