//! # VOXFIELD Procedural Generation
//!
//! Deterministic voxel terrain for a single bounded world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same size, seed and terrain shape always produce the same world
//! 2. **Bounded**: One fixed `width x height x width` volume, no streaming
//! 3. **Headless**: No rendering API; the output is a plain instance list
//!
//! ## Core Components
//!
//! - `BlockType`: Block registry (id -> name, color)
//! - `VoxelGrid`: Dense block storage with out-of-bounds-as-empty access
//! - `SimplexNoise`: Seeded 2D coherent noise
//! - `TerrainGenerator`: Height-field fill of every column
//! - `InstanceExtractor`: Occlusion culling into renderable instances
//!
//! ## Example
//!
//! ```rust
//! use voxfield_procedural::{generate, GenerationParams, WorldSize};
//!
//! let world = generate(WorldSize::new(16, 8), &GenerationParams::default()).unwrap();
//! for instance in &world.instances {
//!     let [x, y, z] = instance.position;
//!     assert!(world.grid.get(x, y, z).instance_handle.is_some());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod error;
pub mod grid;
pub mod instance;
pub mod noise;
pub mod terrain;
pub mod world;

pub use block::{Block, BlockDescriptor, BlockType};
pub use error::{WorldError, WorldResult};
pub use grid::VoxelGrid;
pub use instance::{is_obscured, Instance, InstanceExtractor, NEIGHBOR_OFFSETS};
pub use noise::SimplexNoise;
pub use terrain::{GenerationParams, TerrainGenerator, TerrainParams};
pub use world::{generate, GeneratedWorld, WorldSize};
