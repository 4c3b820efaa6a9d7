//! # Instance Extraction
//!
//! Scans a filled [`VoxelGrid`] and emits one [`Instance`] per block the
//! renderer has to draw.
//!
//! A block is drawn when it is solid and at least one of its six
//! axis-adjacent neighbours is empty. Neighbours outside the grid read as
//! empty, so the outer shell of the world is never culled. Fully
//! surrounded blocks are skipped, which keeps render cost proportional
//! to surface area rather than volume.
//!
//! ## Handles
//!
//! The scan runs X outer, Y middle, Z inner. Each emitted block gets the
//! index of its instance as `instance_handle`, so handles are dense,
//! start at 0, and match a parallel renderer-side buffer.

use crate::block::BlockType;
use crate::grid::VoxelGrid;

/// Offsets to the six axis-adjacent neighbours.
pub const NEIGHBOR_OFFSETS: [(i32, i32, i32); 6] = [
    (0, 1, 0),  // up
    (0, -1, 0), // down
    (1, 0, 0),  // +x
    (-1, 0, 0), // -x
    (0, 0, 1),  // +z
    (0, 0, -1), // -z
];

/// One renderable voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instance {
    /// Grid coordinate `[x, y, z]` of the block.
    pub position: [i32; 3],
    /// Registry color `0xRRGGBB` of the block's type.
    pub color: u32,
    /// Block type, kept for renderers that batch by material.
    pub block_type: BlockType,
}

/// Returns true if every neighbour of `(x, y, z)` is solid and in bounds.
#[must_use]
pub fn is_obscured(grid: &VoxelGrid, x: i32, y: i32, z: i32) -> bool {
    NEIGHBOR_OFFSETS
        .iter()
        .all(|&(dx, dy, dz)| !grid.get(x + dx, y + dy, z + dz).is_empty())
}

/// Occlusion-culling instance extractor.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstanceExtractor;

impl InstanceExtractor {
    /// Builds the instance list for `grid` and writes the handles back.
    ///
    /// Handles left over from a previous pass are cleared first, so after
    /// this call a cell has a handle iff it is solid and exposed.
    pub fn extract(grid: &mut VoxelGrid) -> Vec<Instance> {
        grid.clear_instance_handles();

        let mut instances = Vec::new();
        // The grid caps its volume at `VoxelGrid::MAX_CELLS`, so every
        // handle fits and the counter never saturates.
        let mut next_handle: u32 = 0;
        let (width, height) = (grid.width(), grid.height());

        for x in 0..width {
            for y in 0..height {
                for z in 0..width {
                    let block = grid.get(x, y, z);
                    if block.is_empty() || is_obscured(grid, x, y, z) {
                        continue;
                    }

                    let handle = next_handle;
                    next_handle = next_handle.saturating_add(1);
                    instances.push(Instance {
                        position: [x, y, z],
                        color: block.type_id.color(),
                        block_type: block.type_id,
                    });
                    grid.set_instance_handle(x, y, z, Some(handle));
                }
            }
        }

        instances
    }
}
