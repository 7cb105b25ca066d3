#![allow(dead_code)]

use riverforge_core::grid::GridMask;
use riverforge_core::state::SearchState;

/// Builds a mask from the text format; panics on malformed input since
/// test fixtures are hand-written.
pub fn mask(text: &str) -> GridMask {
    GridMask::parse(text).expect("test mask must parse")
}

/// State with the given snake and empty flag grids sized to the mask.
pub fn state_with_snake(mask: &GridMask, snake: &[(usize, usize)]) -> SearchState {
    SearchState::new(snake.to_vec(), mask.height(), mask.width())
}
