mod common;

use common::{mask, state_with_snake};
use riverforge_core::grid::GridMask;
use riverforge_core::layout::{derive, Tile};
use rstest::rstest;

#[test]
fn open_grid_classifies_river_and_thicket() {
    let m = GridMask::open(3, 3);
    let state = state_with_snake(&m, &[(0, 0), (0, 1), (0, 2)]);
    let layout = derive(&m, &state);
    for j in 0..3 {
        assert_eq!(layout.tile((0, j)), Tile::River);
    }
    for i in 1..3 {
        for j in 0..3 {
            assert_eq!(layout.tile((i, j)), Tile::Thicket);
        }
    }
}

#[test]
fn unusable_cells_are_blocked() {
    let m = mask("..#\n...");
    let state = state_with_snake(&m, &[(1, 0)]);
    let layout = derive(&m, &state);
    assert_eq!(layout.tile((0, 2)), Tile::Blocked);
    assert_eq!(layout.tile((1, 0)), Tile::River);
}

#[test]
fn dessert_needs_path_adjacency() {
    let m = GridMask::open(3, 3);
    let mut state = state_with_snake(&m, &[(0, 0), (0, 1), (0, 2)]);
    state.desserts.set((1, 1), true);
    state.desserts.set((2, 2), true); // not adjacent to the snake
    let layout = derive(&m, &state);
    assert_eq!(layout.tile((1, 1)), Tile::Dessert);
    assert_eq!(layout.tile((2, 2)), Tile::Thicket);
}

#[test]
fn path_cell_next_to_dessert_becomes_oasis() {
    let m = GridMask::open(3, 3);
    let mut state = state_with_snake(&m, &[(0, 0), (0, 1), (0, 2)]);
    state.desserts.set((1, 1), true);
    let layout = derive(&m, &state);
    assert_eq!(layout.tile((0, 1)), Tile::Oasis);
    assert_eq!(layout.tile((0, 0)), Tile::River);
    assert_eq!(layout.tile((0, 2)), Tile::River);
}

#[test]
fn thicket_next_to_dessert_upgrades_to_maquis() {
    let m = GridMask::open(3, 3);
    let mut state = state_with_snake(&m, &[(0, 0), (0, 1), (0, 2)]);
    state.desserts.set((1, 1), true);
    let layout = derive(&m, &state);
    assert_eq!(layout.tile((1, 0)), Tile::Maquis);
    assert_eq!(layout.tile((1, 2)), Tile::Maquis);
    assert_eq!(layout.tile((2, 1)), Tile::Maquis);
    assert_eq!(layout.tile((2, 0)), Tile::Thicket);
    assert_eq!(layout.tile((2, 2)), Tile::Thicket);
}

#[test]
fn suburb_flag_wins_over_dessert_flag() {
    let m = GridMask::open(3, 3);
    let mut state = state_with_snake(&m, &[(0, 0), (0, 1), (0, 2)]);
    state.suburbs.set((1, 1), true);
    state.desserts.set((1, 1), true);
    let layout = derive(&m, &state);
    assert_eq!(layout.tile((1, 1)), Tile::Suburb);
    // No dessert means no oasis upgrade either.
    assert_eq!(layout.tile((0, 1)), Tile::River);
}

#[rstest]
#[case(Tile::Blocked, '#')]
#[case(Tile::River, '~')]
#[case(Tile::Oasis, 'O')]
#[case(Tile::Suburb, 'S')]
#[case(Tile::Dessert, 'D')]
#[case(Tile::Thicket, 'T')]
#[case(Tile::Maquis, 'M')]
fn glyphs_are_stable(#[case] tile: Tile, #[case] glyph: char) {
    assert_eq!(tile.glyph(), glyph);
}

#[test]
fn derivation_is_pure() {
    let m = mask("....\n.#..\n....");
    let mut state = state_with_snake(&m, &[(0, 0), (0, 1), (0, 2)]);
    state.desserts.set((1, 2), true);
    state.suburbs.set((2, 0), true);
    assert_eq!(derive(&m, &state), derive(&m, &state));
}
