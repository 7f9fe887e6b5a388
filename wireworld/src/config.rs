// config.rs - Run configuration shared by the runners

use std::path::Path;

use crate::error::LoadResult;
use crate::grid::{Dims, Grid};
use crate::loader;

pub const DEFAULT_GENERATIONS: u64 = 1000;

/// How the grid shape is decided when loading a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeMode {
    /// The file must have exactly this shape.
    Fixed(Dims),
    /// Take the shape from the file.
    Infer,
}

impl SizeMode {
    pub fn expected(self) -> Option<Dims> {
        match self {
            SizeMode::Fixed(dims) => Some(dims),
            SizeMode::Infer => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub size: SizeMode,
    /// Frames printed by the batch runner; one step follows each frame.
    pub generations: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: SizeMode::Fixed(Dims::default()),
            generations: DEFAULT_GENERATIONS,
        }
    }
}

impl RunConfig {
    pub fn load(&self, path: impl AsRef<Path>) -> LoadResult<Grid> {
        loader::load(path, self.size.expected())
    }
}
