//! # Perlin Noise Module
//!
//! A seedable implementation of classic improved Perlin gradient noise.
//!
//! The permutation table is a seeded shuffle of `0..=255`, duplicated to 512 entries so
//! corner hashing never has to wrap. The generator also implements
//! [`noise::NoiseFn`] so it can be plugged into anything that accepts a noise source.

use noise::NoiseFn;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u32 = 0;

/// Deterministic 3D coherent noise.
///
/// Two generators built from the same seed produce bit-identical output.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    seed: u32,
    permutation: [u8; 512],
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl PerlinNoise {
    /// Builds the permutation table for `seed`.
    pub fn new(seed: u32) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        fastrand::Rng::with_seed(seed as u64).shuffle(&mut table);

        Self::with_table(seed, table)
    }

    /// Builds a generator from an explicit permutation of `0..=255`.
    #[cfg(test)]
    pub(crate) fn from_permutation(table: [u8; 256]) -> Self {
        Self::with_table(DEFAULT_SEED, table)
    }

    fn with_table(seed: u32, table: [u8; 256]) -> Self {
        let mut permutation = [0u8; 512];
        permutation[..256].copy_from_slice(&table);
        permutation[256..].copy_from_slice(&table);

        PerlinNoise { seed, permutation }
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The first 256 entries of the permutation table.
    pub fn permutation(&self) -> &[u8] {
        &self.permutation[..256]
    }

    fn p(&self, i: usize) -> usize {
        self.permutation[i] as usize
    }

    /// Samples the noise field at `(x, y, z)`.
    ///
    /// Output lies in roughly `[-1, 1]` and is zero at every integer lattice point.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        // Unit cube containing the point
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let zi = (z.floor() as i32 & 255) as usize;

        // Position inside the cube
        let x = x - x.floor();
        let y = y - y.floor();
        let z = z - z.floor();

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(self.p(aa), x, y, z), grad(self.p(ba), x - 1.0, y, z)),
                lerp(
                    u,
                    grad(self.p(ab), x, y - 1.0, z),
                    grad(self.p(bb), x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(self.p(aa + 1), x, y, z - 1.0),
                    grad(self.p(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(self.p(ab + 1), x, y - 1.0, z - 1.0),
                    grad(self.p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }
}

impl NoiseFn<f64, 3> for PerlinNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.noise(point[0], point[1], point[2])
    }
}

/// `6t^5 - 15t^4 + 10t^3`
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Picks one of 12 gradient directions from the low 4 bits of `hash` and dots it with
/// `(x, y, z)`.
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ken Perlin's reference permutation.
    const REFERENCE_PERMUTATION: [u8; 256] = [
        151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
        140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
        247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
        57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
        74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
        60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
        65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
        200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
        52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
        207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
        119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
        129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
        218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
        81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
        184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
        222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
    ];

    #[test]
    fn reference_permutation_matches_published_values() {
        let perlin = PerlinNoise::from_permutation(REFERENCE_PERMUTATION);
        let samples = [
            ((3.14, 42.0, 7.0), 0.13691995878400012),
            ((0.5, 0.5, 0.5), -0.25),
            ((-1.25, 2.75, 10.5), -0.2553577423095703),
            ((12.3, -4.56, 0.789), 0.3188212430481463),
        ];
        for ((x, y, z), expected) in samples {
            let value = perlin.noise(x, y, z);
            assert!((value - expected).abs() < 1e-12, "noise({x}, {y}, {z}) = {value}");
        }
    }

    #[test]
    fn permutation_is_a_permutation() {
        let perlin = PerlinNoise::new(42);
        let mut values = perlin.permutation().to_vec();
        values.sort_unstable();
        assert_eq!(values, (0..=255u8).collect::<Vec<_>>());
        assert_eq!(&perlin.permutation[..256], &perlin.permutation[256..]);
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let a = PerlinNoise::new(7);
        let b = PerlinNoise::new(7);
        for i in 0..200 {
            let x = i as f64 * 0.37 - 20.0;
            let y = i as f64 * 0.11;
            let z = i as f64 * -0.53 + 3.0;
            assert_eq!(a.noise(x, y, z).to_bits(), b.noise(x, y, z).to_bits());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = PerlinNoise::new(1);
        let b = PerlinNoise::new(2);
        assert_ne!(a.permutation(), b.permutation());
        let differs = (0..100).any(|i| {
            let x = i as f64 * 0.31 + 0.5;
            a.noise(x, 0.0, x * 0.7) != b.noise(x, 0.0, x * 0.7)
        });
        assert!(differs);
    }

    #[test]
    fn zero_at_lattice_points() {
        let perlin = PerlinNoise::default();
        for (x, y, z) in [(0.0, 0.0, 0.0), (3.0, -2.0, 7.0), (-100.0, 0.0, 255.0)] {
            assert_eq!(perlin.noise(x, y, z), 0.0);
        }
    }

    #[test]
    fn output_is_bounded_and_continuous() {
        let perlin = PerlinNoise::new(99);
        let mut previous = perlin.noise(0.0, 0.0, 0.0);
        for i in 1..2000 {
            let t = i as f64 * 0.001;
            let value = perlin.noise(t * 13.0, 0.25, -t * 7.0);
            assert!((-1.1..=1.1).contains(&value), "{value}");
            assert!((value - previous).abs() < 0.1);
            previous = value;
        }
    }

    #[test]
    fn noise_fn_matches_inherent_method() {
        let perlin = PerlinNoise::new(3);
        assert_eq!(perlin.get([1.25, 0.5, -3.75]), perlin.noise(1.25, 0.5, -3.75));
    }

    #[test]
    fn fade_hits_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }
}
