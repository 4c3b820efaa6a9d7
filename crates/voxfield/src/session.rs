//! # World Session
//!
//! Owns the current configuration and the latest generated world.
//!
//! ## Publication
//!
//! ```text
//!   apply(config) ──> generate() ──> Arc<WorldSnapshot> ──swap──> current
//!                                                                   │
//!   renderer ─────────────────────────── snapshot() ────────────────┘
//! ```
//!
//! Generation runs outside the snapshot lock. The finished snapshot is
//! published with a single pointer swap, so a reader holds either the
//! old world or the new one, never a half-built grid.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use voxfield_procedural::{generate, GeneratedWorld, WorldResult};

use crate::config::WorldConfig;
use crate::render::InstanceBatch;

/// One published world.
#[derive(Debug)]
pub struct WorldSnapshot {
    /// Configuration this world was generated from.
    pub config: WorldConfig,
    /// Grid and instance list.
    pub world: GeneratedWorld,
    /// GPU-ready instances, same order as `world.instances`.
    pub batch: InstanceBatch,
}

impl WorldSnapshot {
    /// Generates a snapshot for `config`.
    ///
    /// # Errors
    ///
    /// Propagates dimension errors from the generator.
    pub fn build(config: WorldConfig) -> WorldResult<Self> {
        let world = generate(config.size, &config.params)?;
        let batch = InstanceBatch::pack(&world.instances);
        Ok(Self { config, world, batch })
    }
}

/// Regenerating holder of the current world.
///
/// Shareable across threads: writers are serialized, readers only ever
/// clone an `Arc`.
#[derive(Debug)]
pub struct WorldSession {
    /// Latest published snapshot.
    current: RwLock<Arc<WorldSnapshot>>,
    /// Serializes regeneration.
    writer: Mutex<()>,
    /// Number of snapshots published, including the first.
    generation: AtomicU64,
}

impl WorldSession {
    /// Creates a session and generates the first world.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if `config` has invalid dimensions.
    pub fn new(config: WorldConfig) -> WorldResult<Self> {
        let snapshot = WorldSnapshot::build(config)?;
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
            writer: Mutex::new(()),
            generation: AtomicU64::new(1),
        })
    }

    /// Returns the latest published world.
    #[must_use]
    pub fn snapshot(&self) -> Arc<WorldSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Returns the configuration of the latest published world.
    #[must_use]
    pub fn config(&self) -> WorldConfig {
        self.current.read().config
    }

    /// Number of snapshots published so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Applies a configuration change.
    ///
    /// Regenerates only if `config` differs from the current one. Returns
    /// `Ok(true)` if a new world was published.
    ///
    /// # Errors
    ///
    /// Returns the generator's error; the previous world stays published.
    pub fn apply(&self, config: WorldConfig) -> WorldResult<bool> {
        let _writer = self.writer.lock();

        if self.current.read().config == config {
            return Ok(false);
        }

        let snapshot = match WorldSnapshot::build(config) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("config rejected, keeping previous world: {err}");
                return Err(err);
            }
        };

        tracing::info!(
            width = config.size.width,
            height = config.size.height,
            seed = config.params.seed,
            instances = snapshot.batch.len(),
            "world regenerated"
        );

        *self.current.write() = Arc::new(snapshot);
        self.generation.fetch_add(1, Ordering::AcqRel);
        Ok(true)
    }

    /// Edits the current configuration in place and applies the result.
    ///
    /// # Errors
    ///
    /// Same as [`WorldSession::apply`].
    pub fn update(&self, edit: impl FnOnce(&mut WorldConfig)) -> WorldResult<bool> {
        let mut config = self.config();
        edit(&mut config);
        self.apply(config)
    }
}
