//! # Terrain Generation
//!
//! Turns a seeded noise field into a height field and fills every column
//! of a [`VoxelGrid`] with dirt below, grass at, and empty above the
//! column height.

use serde::{Deserialize, Serialize};

use crate::block::BlockType;
use crate::grid::VoxelGrid;
use crate::noise::SimplexNoise;

/// Shape of the height field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Horizontal stretch of the noise field. Larger is smoother.
    pub scale: f64,
    /// Amplitude of the noise, as a fraction of the world height.
    pub magnitude: f64,
    /// Base level, as a fraction of the world height.
    pub offset: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            scale: 30.0,
            magnitude: 0.5,
            offset: 0.2,
        }
    }
}

/// Everything that determines a world besides its dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Noise seed.
    pub seed: u64,
    /// Height field shape.
    pub terrain: TerrainParams,
}

/// Height-field terrain generator.
///
/// Holds no state besides the seeded noise, so one generator can fill
/// any number of grids.
pub struct TerrainGenerator {
    /// Height field noise.
    noise: SimplexNoise,
    /// Height field shape.
    terrain: TerrainParams,
}

impl TerrainGenerator {
    /// Creates a generator for the given parameters.
    #[must_use]
    pub fn new(params: &GenerationParams) -> Self {
        Self {
            noise: SimplexNoise::new(params.seed),
            terrain: params.terrain,
        }
    }

    /// Terrain height of column `(x, z)` in a world `grid_height` tall.
    ///
    /// Always in `[0, grid_height - 1]`, whatever the magnitude and offset.
    #[must_use]
    pub fn column_height(&self, x: i32, z: i32, grid_height: i32) -> i32 {
        let value = self.noise.sample(
            f64::from(x) / self.terrain.scale,
            f64::from(z) / self.terrain.scale,
        );
        let scaled_noise = self.terrain.offset + self.terrain.magnitude * value;

        // Saturating cast: NaN -> 0, +-inf -> i64 bounds.
        let height = (f64::from(grid_height) * scaled_noise).floor() as i64;
        height.clamp(0, i64::from(grid_height.max(1) - 1)) as i32
    }

    /// Fills every column of `grid`.
    ///
    /// Each column gets dirt for `y < h`, grass at `y == h`, and empty
    /// above. The fill runs through `y == grid.height()`; that last probe
    /// is outside the grid and is dropped by the write policy.
    pub fn fill(&self, grid: &mut VoxelGrid) {
        let (width, height) = (grid.width(), grid.height());

        for x in 0..width {
            for z in 0..width {
                let column = self.column_height(x, z, height);

                for y in 0..=height {
                    let block = match y.cmp(&column) {
                        std::cmp::Ordering::Less => BlockType::Dirt,
                        std::cmp::Ordering::Equal => BlockType::Grass,
                        std::cmp::Ordering::Greater => BlockType::Empty,
                    };
                    grid.set_type_id(x, y, z, block);
                }
            }
        }
    }
}
