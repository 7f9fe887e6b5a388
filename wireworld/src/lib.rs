// lib.rs - Wireworld cellular automaton
//
// Core: `cell`, `grid`, `neighbors`, `engine`. Around it: the double-buffered
// `simulation` driver, the text file `loader`, plain-text `display` and the
// built-in `patterns` used by the interactive runner.

pub mod cell;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod grid;
pub mod loader;
pub mod neighbors;
pub mod patterns;
pub mod simulation;

pub use cell::Cell;
pub use config::{RunConfig, SizeMode};
pub use engine::{StepReport, step};
pub use error::{GridError, LoadError};
pub use grid::{Dims, Grid, Pos};
pub use neighbors::{Offset, OffsetSet, neighbors_in_bounds};
pub use simulation::Simulation;
