//! # World Generation Entry Point
//!
//! `generate()` is one synchronous unit of work: a fresh grid is
//! allocated, filled and extracted before the call returns. Nothing is
//! cached between calls, so identical inputs rebuild identical worlds.

use serde::{Deserialize, Serialize};

use crate::error::WorldResult;
use crate::grid::VoxelGrid;
use crate::instance::{Instance, InstanceExtractor};
use crate::terrain::{GenerationParams, TerrainGenerator};

/// World dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSize {
    /// Horizontal extent (X and Z).
    pub width: i32,
    /// Vertical extent (Y).
    pub height: i32,
}

impl WorldSize {
    /// Creates a new world size.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self::new(64, 32)
    }
}

/// Output of one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedWorld {
    /// Filled grid, annotated with instance handles.
    pub grid: VoxelGrid,
    /// Renderable blocks, indexed by instance handle.
    pub instances: Vec<Instance>,
}

impl GeneratedWorld {
    /// Fraction of solid blocks that were culled, in `[0, 1]`.
    #[must_use]
    pub fn culled_fraction(&self) -> f64 {
        let solid = self.grid.solid_count();
        if solid == 0 {
            return 0.0;
        }
        1.0 - self.instances.len() as f64 / solid as f64
    }
}

/// Generates a world from scratch.
///
/// # Errors
///
/// Returns [`crate::WorldError::InvalidDimension`] if either dimension is
/// not positive, or [`crate::WorldError::VolumeTooLarge`] if the volume
/// cannot be allocated.
pub fn generate(size: WorldSize, params: &GenerationParams) -> WorldResult<GeneratedWorld> {
    let mut grid = VoxelGrid::new(size.width, size.height)?;

    TerrainGenerator::new(params).fill(&mut grid);
    let instances = InstanceExtractor::extract(&mut grid);

    tracing::debug!(
        width = size.width,
        height = size.height,
        seed = params.seed,
        solid = grid.solid_count(),
        instances = instances.len(),
        "world generated"
    );

    Ok(GeneratedWorld { grid, instances })
}
