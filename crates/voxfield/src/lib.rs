//! # VOXFIELD
//!
//! Host-side glue around the voxel generator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   WorldConfig   ┌──────────────────────────┐
//! │ editor / CLI │ ──────────────> │ WorldSession             │
//! └──────────────┘   (on change)   │  generate() ─> snapshot  │
//!                                  └────────────┬─────────────┘
//!                                               │ Arc<WorldSnapshot>
//!                                               ▼
//!                                  ┌──────────────────────────┐
//!                                  │ renderer: InstanceBatch  │
//!                                  └──────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML world configuration and editor ranges
//! - `session`: Regeneration and snapshot publication
//! - `render`: GPU-ready instance packing

pub mod config;
pub mod render;
pub mod session;

pub use voxfield_procedural as procedural;

pub use config::{ConfigError, ConfigResult, ParamRanges, WorldConfig};
pub use render::{InstanceBatch, InstanceRaw};
pub use session::{WorldSession, WorldSnapshot};
