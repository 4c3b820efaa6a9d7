//! # Voxel Grid
//!
//! The world is a single bounded volume of `width x height x width`
//! cells (X and Z share `width`, Y uses `height`).
//!
//! ## Storage
//!
//! Cells live in one flat allocation, addressed as
//! `x + z * width + y * width * width`, so a horizontal layer is
//! contiguous.
//!
//! ## Bounds Policy
//!
//! Every accessor takes signed coordinates. Anything outside the volume
//! reads as [`Block::EMPTY`] and writes are silently dropped, so callers
//! can probe one cell past any edge without special-casing.

use crate::block::{Block, BlockType};
use crate::error::{WorldError, WorldResult};

/// Dense, bounded 3D array of blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    /// Horizontal extent (X and Z).
    width: i32,
    /// Vertical extent (Y).
    height: i32,
    /// Block data (indexed as `x + z * width + y * width * width`).
    blocks: Box<[Block]>,
}

impl VoxelGrid {
    /// Creates a grid with every cell set to the empty sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimension`] if `width` or `height` is
    /// not positive, and [`WorldError::VolumeTooLarge`] if the cell count
    /// exceeds [`VoxelGrid::MAX_CELLS`] or the allocation fails.
    pub fn new(width: i32, height: i32) -> WorldResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimension { width, height });
        }

        let too_large = WorldError::VolumeTooLarge { width, height };
        let cells = u64::from(width.unsigned_abs())
            .checked_mul(u64::from(width.unsigned_abs()))
            .and_then(|layer| layer.checked_mul(u64::from(height.unsigned_abs())))
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .and_then(|cells| usize::try_from(cells).ok())
            .ok_or(too_large)?;

        // Never hand an unrepresentable layout to the allocator.
        cells
            .checked_mul(std::mem::size_of::<Block>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(too_large)?;

        let mut blocks = Vec::new();
        blocks.try_reserve_exact(cells).map_err(|_| too_large)?;
        blocks.resize(cells, Block::EMPTY);

        Ok(Self {
            width,
            height,
            blocks: blocks.into_boxed_slice(),
        })
    }

    /// Largest cell count a grid may hold: every cell must be addressable by
    /// a `u32` instance handle.
    pub const MAX_CELLS: u64 = u32::MAX as u64;

    /// Horizontal extent (X and Z).
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent (Y).
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if `(x, y, z)` addresses a stored cell.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y) && (0..self.width).contains(&z)
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        let w = self.width as usize;
        Some(x as usize + z as usize * w + y as usize * w * w)
    }

    /// Gets the block at `(x, y, z)`, or [`Block::EMPTY`] outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Block {
        self.index(x, y, z).map_or(Block::EMPTY, |i| self.blocks[i])
    }

    /// Sets the block type at `(x, y, z)`. No-op outside the grid.
    #[inline]
    pub fn set_type_id(&mut self, x: i32, y: i32, z: i32, type_id: BlockType) {
        if let Some(i) = self.index(x, y, z) {
            self.blocks[i].type_id = type_id;
        }
    }

    /// Sets the instance handle at `(x, y, z)`. No-op outside the grid.
    #[inline]
    pub fn set_instance_handle(&mut self, x: i32, y: i32, z: i32, handle: Option<u32>) {
        if let Some(i) = self.index(x, y, z) {
            self.blocks[i].instance_handle = handle;
        }
    }

    /// Clears every instance handle, leaving block types untouched.
    pub fn clear_instance_handles(&mut self) {
        for block in self.blocks.iter_mut() {
            block.instance_handle = None;
        }
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_empty()).count()
    }

    /// Iterates every coordinate in scan order: X outer, Y middle, Z inner.
    ///
    /// Instance handles are assigned in this order.
    pub fn coords(&self) -> impl Iterator<Item = (i32, i32, i32)> {
        let (width, height) = (self.width, self.height);
        (0..width).flat_map(move |x| {
            (0..height).flat_map(move |y| (0..width).map(move |z| (x, y, z)))
        })
    }
}
