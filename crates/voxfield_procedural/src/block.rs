//! # Block Registry
//!
//! Block identities and their static descriptors.
//!
//! Block type IDs are a small dense enumeration, so the registry is a
//! plain array indexed by ID: lookups are O(1) and never scan.

use serde::{Deserialize, Serialize};

/// Static description of a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockDescriptor {
    /// Numeric block type ID.
    pub id: u8,
    /// Human-readable name.
    pub name: &'static str,
    /// Display color as `0xRRGGBB`.
    pub color: u32,
}

/// Material of a voxel cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockType {
    /// No solid material. Never rendered and never occludes.
    #[default]
    Empty = 0,
    /// Top layer of every terrain column.
    Grass = 1,
    /// Everything below the grass layer.
    Dirt = 2,
}

/// Registry indexed by `BlockType as usize`.
static REGISTRY: [BlockDescriptor; 3] = [
    BlockDescriptor { id: 0, name: "empty", color: 0x00_0000 },
    BlockDescriptor { id: 1, name: "grass", color: 0x55_9020 },
    BlockDescriptor { id: 2, name: "dirt", color: 0x80_7020 },
];

impl BlockType {
    /// Every registered block type, in ID order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Grass, Self::Dirt];

    /// Returns the numeric ID.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a block type by numeric ID.
    #[inline]
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Empty),
            1 => Some(Self::Grass),
            2 => Some(Self::Dirt),
            _ => None,
        }
    }

    /// Returns the registry entry for this type.
    #[inline]
    #[must_use]
    pub fn descriptor(self) -> &'static BlockDescriptor {
        &REGISTRY[self as usize]
    }

    /// Returns the display color as `0xRRGGBB`.
    #[inline]
    #[must_use]
    pub fn color(self) -> u32 {
        self.descriptor().color
    }

    /// Returns the registry name.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Returns true for the empty sentinel.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A single voxel cell.
///
/// `instance_handle` is only set on cells that were emitted by the last
/// instance extraction, and indexes that pass's instance list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    /// Material of this cell.
    pub type_id: BlockType,
    /// Slot in the current instance list, if rendered.
    pub instance_handle: Option<u32>,
}

impl Block {
    /// The empty sentinel, also returned for out-of-bounds reads.
    pub const EMPTY: Self = Self {
        type_id: BlockType::Empty,
        instance_handle: None,
    };

    /// Creates an unrendered block of the given type.
    #[inline]
    #[must_use]
    pub const fn new(type_id: BlockType) -> Self {
        Self {
            type_id,
            instance_handle: None,
        }
    }

    /// Returns true if this cell holds no solid material.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.type_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_indexed_by_id() {
        for block_type in BlockType::ALL {
            assert_eq!(block_type.descriptor().id, block_type.id());
            assert_eq!(BlockType::from_id(block_type.id()), Some(block_type));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(BlockType::from_id(3), None);
        assert_eq!(BlockType::from_id(255), None);
    }

    #[test]
    fn test_names_and_colors() {
        assert_eq!(BlockType::Grass.name(), "grass");
        assert_eq!(BlockType::Dirt.name(), "dirt");
        assert_eq!(BlockType::Grass.color(), 0x55_9020);
        assert_eq!(BlockType::Dirt.color(), 0x80_7020);
    }

    #[test]
    fn test_default_block_is_empty_sentinel() {
        assert_eq!(Block::default(), Block::EMPTY);
        assert!(Block::EMPTY.is_empty());
        assert!(!Block::new(BlockType::Dirt).is_empty());
    }
}
