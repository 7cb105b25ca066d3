pub mod annealer;
pub mod config;
pub mod consts;
pub mod error;
pub mod grid;
pub mod layout;
pub mod moves;
pub mod scoring;
pub mod state;
pub mod stats;

pub use annealer::{AnnealOptions, AnnealResult, Annealer, ProgressSink};
pub use error::{RfResult, RiverForgeError};
pub use grid::{Coord, GridMask};
pub use layout::{derive, Layout, Tile};
pub use state::SearchState;
