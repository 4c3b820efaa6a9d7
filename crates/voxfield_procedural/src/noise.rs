//! # Simplex Noise Implementation
//!
//! Seeded 2D simplex noise for terrain height fields.
//!
//! ## Determinism Guarantee
//!
//! The permutation table is shuffled with ChaCha8 seeded from the world
//! seed, and sampling only uses `+`, `-`, `*` and an integer floor. No
//! platform math-library call is involved, so a given seed produces
//! **exactly** the same values on any platform, any time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pre-computed permutation table for noise.
///
/// This is computed once from the seed and reused.
#[derive(Clone)]
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// 2D gradients: the X/Y components of the 12 cube-edge directions.
    const GRADIENTS: [[i8; 2]; 12] = [
        [1, 1], [-1, 1], [1, -1], [-1, -1],
        [1, 0], [-1, 0], [1, 0], [-1, 0],
        [0, 1], [0, -1], [0, 1], [0, -1],
    ];

    /// Creates a new permutation table from a seed.
    fn new(seed: u64) -> Self {
        let mut perm = [0u8; 512];

        // Identity permutation, then Fisher-Yates with a portable RNG.
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for i in (1..256u32).rev() {
            // u32 draws, so 32- and 64-bit targets consume the RNG identically.
            let j = rng.gen_range(0..=i);
            perm.swap(i as usize, j as usize);
        }

        // Double the table to avoid index wrapping
        perm.copy_within(0..256, 256);

        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    /// Gets a gradient for a given hash.
    #[inline]
    fn gradient(hash: u8) -> [i8; 2] {
        Self::GRADIENTS[(hash % 12) as usize]
    }
}

/// 2D Simplex noise generator.
///
/// Produces smooth, continuous noise values in the range [-1, 1].
///
/// # Example
///
/// ```rust
/// use voxfield_procedural::SimplexNoise;
///
/// let noise = SimplexNoise::new(42);
/// let value = noise.sample(100.5, 200.3);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
#[derive(Clone)]
pub struct SimplexNoise {
    /// The permutation table.
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid.
    const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D simplex grid.
    const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Samples 2D simplex noise at the given coordinates.
    ///
    /// Non-finite input samples as `0.0`.
    ///
    /// # Returns
    ///
    /// A value in the range [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }

        // Skew input coordinates to simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to get first corner in simplex
        let unskew = i.wrapping_add(j) as f64 * Self::G2;
        let x0 = x - (i as f64 - unskew);
        let y0 = y - (j as f64 - unskew);

        // Upper or lower triangle
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        // Offsets for second and third corners
        let x1 = x0 - f64::from(i1 as u8) + Self::G2;
        let y1 = y0 - f64::from(j1 as u8) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        // Hash coordinates to get gradient indices
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let perm = &self.perm_table;
        let gi0 = perm.get(ii + perm.get(jj) as usize);
        let gi1 = perm.get(ii + i1 + perm.get(jj + j1) as usize);
        let gi2 = perm.get(ii + 1 + perm.get(jj + 1) as usize);

        let n0 = contribution(x0, y0, gi0);
        let n1 = contribution(x1, y1, gi1);
        let n2 = contribution(x2, y2, gi2);

        // 70 normalizes the sum to [-1, 1]
        70.0 * (n0 + n1 + n2)
    }
}

/// Calculates the contribution from one corner of the simplex.
#[inline]
fn contribution(x: f64, y: f64, gradient_index: u8) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let grad = PermutationTable::gradient(gradient_index);
        let t2 = t * t;
        t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
    }
}

/// Integer floor via truncation, exact for every finite `f64` in range.
#[inline]
fn fast_floor(x: f64) -> i64 {
    let xi = x as i64;
    if x < xi as f64 { xi.saturating_sub(1) } else { xi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let noise1 = SimplexNoise::new(12345);
        let noise2 = SimplexNoise::new(12345);

        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(
                noise1.sample(x, y).to_bits(),
                noise2.sample(x, y).to_bits(),
                "Noise should be deterministic"
            );
        }
    }

    #[test]
    fn test_different_seeds_different_fields() {
        let noise1 = SimplexNoise::new(1);
        let noise2 = SimplexNoise::new(2);

        let differs = (0..64).any(|i| {
            let x = f64::from(i) * 0.37 + 0.5;
            let y = f64::from(i) * 0.21 + 0.25;
            noise1.sample(x, y) != noise2.sample(x, y)
        });
        assert!(differs, "Different seeds should produce different fields");
    }

    #[test]
    fn test_permutation_is_a_permutation() {
        let table = PermutationTable::new(7);
        let mut seen = [false; 256];
        for &v in &table.perm[..256] {
            assert!(!seen[v as usize], "duplicate entry {v}");
            seen[v as usize] = true;
        }
        assert_eq!(table.perm[..256], table.perm[256..]);
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise::new(42);

        for i in 0..10000 {
            let x = (f64::from(i) * 0.1) - 500.0;
            let y = (f64::from(i) * 0.13) - 650.0;
            let value = noise.sample(x, y);

            assert!(
                (-1.0..=1.0).contains(&value),
                "Value {value} out of range at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new(42);

        let (x, y, delta) = (100.0, 100.0, 0.001);
        let v1 = noise.sample(x, y);
        let v2 = noise.sample(x + delta, y);
        let v3 = noise.sample(x, y + delta);

        assert!((v1 - v2).abs() < 0.01, "Noise should be continuous");
        assert!((v1 - v3).abs() < 0.01, "Noise should be continuous");
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // All three corner contributions vanish at the origin.
        assert_eq!(SimplexNoise::new(9).sample(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_non_finite_input() {
        let noise = SimplexNoise::new(3);
        assert_eq!(noise.sample(f64::NAN, 1.0), 0.0);
        assert_eq!(noise.sample(1.0, f64::INFINITY), 0.0);
        assert_eq!(noise.sample(f64::NEG_INFINITY, f64::NAN), 0.0);
    }

    #[test]
    fn test_fast_floor() {
        assert_eq!(fast_floor(1.5), 1);
        assert_eq!(fast_floor(-1.5), -2);
        assert_eq!(fast_floor(-2.0), -2);
        assert_eq!(fast_floor(0.0), 0);
    }
}
