//! Instance data for the renderer.
//!
//! The renderer never sees the voxel grid. It receives an
//! [`InstanceBatch`]: one [`InstanceRaw`] per instance, in instance-handle
//! order, ready to upload as a per-instance vertex buffer for a unit cube.

use bytemuck::{Pod, Zeroable};
use voxfield_procedural::{Instance, WorldSize};

/// Per-instance data sent to the GPU.
///
/// 32 bytes, two `vec4`s.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    /// Cell centre (x, y, z) in world units, w = 1.
    pub position: [f32; 4],
    /// Linear 0..1 RGB from the block registry, alpha = 1.
    pub color: [f32; 4],
}

impl InstanceRaw {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Packs one instance. Cubes are unit-sized and centred on their cell.
    #[must_use]
    pub fn from_instance(instance: &Instance) -> Self {
        let [x, y, z] = instance.position;
        Self {
            position: [x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5, 1.0],
            color: rgb_to_rgba(instance.color),
        }
    }
}

/// Splits `0xRRGGBB` into normalized RGBA.
#[inline]
#[must_use]
pub fn rgb_to_rgba(rgb: u32) -> [f32; 4] {
    let channel = |shift: u32| f32::from(((rgb >> shift) & 0xFF) as u8) / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Packed instance list of one generated world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceBatch {
    /// Instances in handle order.
    instances: Vec<InstanceRaw>,
}

impl InstanceBatch {
    /// Packs `instances`; slot `i` holds the instance with handle `i`.
    #[must_use]
    pub fn pack(instances: &[Instance]) -> Self {
        Self {
            instances: instances.iter().map(InstanceRaw::from_instance).collect(),
        }
    }

    /// Worst-case instance count for a world of `size`: one per cell.
    ///
    /// Renderers that allocate once per size can size their buffer with this.
    #[must_use]
    pub fn capacity_for(size: WorldSize) -> usize {
        let width = size.width.max(0) as usize;
        let height = size.height.max(0) as usize;
        width.saturating_mul(width).saturating_mul(height)
    }

    /// Number of instances to draw.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true if there is nothing to draw.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instances in handle order.
    #[must_use]
    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    /// Returns the batch as bytes for GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
