//! Seeded 3D simplex noise.
//!
//! The permutation table is shuffled once from a fixed xorshift seed, so every
//! instance built with the same seed returns bit-identical samples for the same
//! coordinates. Output lies roughly in [-1, 1].

const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// 32-bit xorshift (13, 17, 5) with an arithmetic right shift, reduced to a byte.
#[derive(Clone, Copy, Debug)]
struct XorShift32(i32);

impl XorShift32 {
    fn next_byte(&mut self) -> usize {
        let mut s = self.0;
        s ^= s.wrapping_shl(13);
        s ^= s >> 17;
        s ^= s.wrapping_shl(5);
        self.0 = s;
        (s.unsigned_abs() % 256) as usize
    }
}

#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl SimplexNoise {
    pub fn new(seed: i32) -> Self {
        let mut p = [0u8; 256];
        for (i, v) in p.iter_mut().enumerate() {
            *v = i as u8;
        }
        let mut rng = XorShift32(seed);
        for i in (1..256).rev() {
            let n = rng.next_byte() % (i + 1);
            p.swap(i, n);
        }
        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }
        Self { perm, perm_mod12 }
    }

    #[inline]
    fn hash(&self, i: usize, j: usize, k: usize) -> usize {
        let pk = self.perm[k] as usize;
        let pj = self.perm[j + pk] as usize;
        self.perm_mod12[i + pj] as usize
    }

    pub fn noise3d(&self, xin: f64, yin: f64, zin: f64) -> f64 {
        // Skew into simplex cell space
        let s = (xin + yin + zin) * F3;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let k = (zin + s).floor();
        let t = (i + j + k) * G3;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);
        let z0 = zin - (k - t);

        let (o1, o2) = simplex_corners(x0, y0, z0);

        let x1 = x0 - o1[0] + G3;
        let y1 = y0 - o1[1] + G3;
        let z1 = z0 - o1[2] + G3;
        let x2 = x0 - o2[0] + 2.0 * G3;
        let y2 = y0 - o2[1] + 2.0 * G3;
        let z2 = z0 - o2[2] + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let kk = (k as i64 & 255) as usize;
        // Gradients follow a fixed +x, +y, +z path whatever the simplex ordering.
        let gi0 = self.hash(ii, jj, kk);
        let gi1 = self.hash(ii + 1, jj, kk);
        let gi2 = self.hash(ii + 1, jj + 1, kk);
        let gi3 = self.hash(ii + 1, jj + 1, kk + 1);

        let n0 = corner(gi0, x0, y0, z0);
        let n1 = corner(gi1, x1, y1, z1);
        let n2 = corner(gi2, x2, y2, z2);
        let n3 = corner(gi3, x3, y3, z3);
        32.0 * (n0 + n1 + n2 + n3)
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(crate::constants::NOISE_SEED)
    }
}

/// Offsets of the second and third simplex corners for the cell-local point.
#[inline]
fn simplex_corners(x0: f64, y0: f64, z0: f64) -> ([f64; 3], [f64; 3]) {
    if x0 >= y0 {
        if y0 >= z0 {
            ([1.0, 0.0, 0.0], [1.0, 1.0, 0.0])
        } else if x0 >= z0 {
            ([1.0, 0.0, 0.0], [1.0, 0.0, 1.0])
        } else {
            ([0.0, 0.0, 1.0], [1.0, 0.0, 1.0])
        }
    } else if y0 < z0 {
        ([0.0, 0.0, 1.0], [0.0, 1.0, 1.0])
    } else if x0 < z0 {
        ([0.0, 1.0, 0.0], [0.0, 1.0, 1.0])
    } else {
        ([0.0, 1.0, 0.0], [1.0, 1.0, 0.0])
    }
}

#[inline]
fn corner(gi: usize, x: f64, y: f64, z: f64) -> f64 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let g = GRAD3[gi];
    let t2 = t * t;
    t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_a_shuffle_of_all_bytes() {
        let n = SimplexNoise::default();
        let mut seen = [false; 256];
        for &v in &n.perm[..256] {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(&n.perm[..256], &n.perm[256..]);
    }

    #[test]
    fn lattice_origin_is_zero() {
        let n = SimplexNoise::default();
        assert_eq!(n.noise3d(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn shuffle_from_seed_1337_starts_with_known_bytes() {
        let n = SimplexNoise::default();
        assert_eq!(&n.perm[..8], &[37, 106, 232, 153, 206, 105, 48, 181]);
    }
}
