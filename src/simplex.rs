use crate::gradient::{dot2, dot3};
use crate::permutation::Permutation;

const SQRT3: f64 = 1.7320508075688772;
const F2: f64 = 0.5 * (SQRT3 - 1.0);
const G2: f64 = (3.0 - SQRT3) / 6.0;
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

/// Scales the 2D corner sum to roughly `[-1, 1]`.
const SCALE_2D: f64 = 70.0;
const SCALE_3D: f64 = 32.0;

const FALLOFF_2D: f64 = 0.5;
const FALLOFF_3D: f64 = 0.6;

#[inline(always)]
fn corner2(gradient: usize, x: f64, y: f64) -> f64 {
    let t = FALLOFF_2D - x * x - y * y;
    if t > 0.0 {
        (t * t) * (t * t) * dot2(gradient, x, y)
    } else {
        0.0
    }
}

#[inline(always)]
fn corner3(gradient: usize, x: f64, y: f64, z: f64) -> f64 {
    let t = FALLOFF_3D - x * x - y * y - z * z;
    if t > 0.0 {
        (t * t) * (t * t) * dot3(gradient, x, y, z)
    } else {
        0.0
    }
}

/// Wraps a floored lattice coordinate into `0..256`. Out-of-range and
/// non-finite values saturate in the cast, so the mask always applies.
#[inline(always)]
fn lattice_index(coord: f64) -> usize {
    (coord as i64 & 255) as usize
}

/// Single octave of 2D simplex noise.
pub fn noise2(permutation: &Permutation, x: f64, y: f64) -> f64 {
    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();

    // Unskew the cell origin back to input space.
    let t = (i + j) * G2;
    let x0 = x - (i - t);
    let y0 = y - (j - t);

    // Lower or upper triangle of the skewed square.
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = lattice_index(i);
    let jj = lattice_index(j);
    let gi0 = permutation.get(ii + permutation.get(jj));
    let gi1 = permutation.get(ii + i1 + permutation.get(jj + j1));
    let gi2 = permutation.get(ii + 1 + permutation.get(jj + 1));

    SCALE_2D * (corner2(gi0, x0, y0) + corner2(gi1, x1, y1) + corner2(gi2, x2, y2))
}

/// Offsets of the second and third tetrahedron corners, picked by ranking
/// the position inside the skewed cube.
#[inline(always)]
fn traversal_order(x0: f64, y0: f64, z0: f64) -> ([usize; 3], [usize; 3]) {
    if x0 >= y0 {
        if y0 >= z0 {
            ([1, 0, 0], [1, 1, 0])
        } else if x0 >= z0 {
            ([1, 0, 0], [1, 0, 1])
        } else {
            ([0, 0, 1], [1, 0, 1])
        }
    } else if y0 < z0 {
        ([0, 0, 1], [0, 1, 1])
    } else if x0 < z0 {
        ([0, 1, 0], [0, 1, 1])
    } else {
        ([0, 1, 0], [1, 1, 0])
    }
}

/// Single octave of 3D simplex noise.
pub fn noise3(permutation: &Permutation, x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let i = (x + s).floor();
    let j = (y + s).floor();
    let k = (z + s).floor();

    let t = (i + j + k) * G3;
    let x0 = x - (i - t);
    let y0 = y - (j - t);
    let z0 = z - (k - t);

    let ([i1, j1, k1], [i2, j2, k2]) = traversal_order(x0, y0, z0);

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = lattice_index(i);
    let jj = lattice_index(j);
    let kk = lattice_index(k);
    let hash = |a: usize, b: usize, c: usize| {
        permutation.get(ii + a + permutation.get(jj + b + permutation.get(kk + c)))
    };
    let gi0 = hash(0, 0, 0);
    let gi1 = hash(i1, j1, k1);
    let gi2 = hash(i2, j2, k2);
    let gi3 = hash(1, 1, 1);

    SCALE_3D * (
        corner3(gi0, x0, y0, z0)
        + corner3(gi1, x1, y1, z1)
        + corner3(gi2, x2, y2, z2)
        + corner3(gi3, x3, y3, z3)
    )
}
