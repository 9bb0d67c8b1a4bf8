/// Gradient directions shared by the 2D and 3D kernels.
///
/// The twelve cube-edge midpoints, padded to sixteen with four repeats so a
/// 4-bit hash picks one without a modulo. The 2D kernel only reads `x` and `y`.
#[rustfmt::skip]
pub const GRADIENTS: [[i32; 3]; 16] = [
    [1, 1, 0], [-1, 1, 0], [1, -1, 0], [-1, -1, 0],
    [1, 0, 1], [-1, 0, 1], [1, 0, -1], [-1, 0, -1],
    [0, 1, 1], [0, -1, 1], [0, 1, -1], [0, -1, -1],
    [1, 1, 0], [0, -1, 1], [-1, 1, 0], [0, -1, -1],
];

pub const GRADIENT_MASK: usize = GRADIENTS.len() - 1;

#[inline(always)]
pub fn dot2(index: usize, x: f64, y: f64) -> f64 {
    let g = GRADIENTS[index & GRADIENT_MASK];
    g[0] as f64 * x + g[1] as f64 * y
}

#[inline(always)]
pub fn dot3(index: usize, x: f64, y: f64, z: f64) -> f64 {
    let g = GRADIENTS[index & GRADIENT_MASK];
    g[0] as f64 * x + g[1] as f64 * y + g[2] as f64 * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_unit_steps() {
        for g in GRADIENTS {
            assert!(g.iter().all(|c| (-1..=1).contains(c)));
            // Two non-zero components each.
            assert_eq!(g.iter().filter(|&&c| c != 0).count(), 2);
        }
    }

    #[test]
    fn no_gradient_vanishes_in_2d() {
        for g in GRADIENTS {
            assert!(g[0] != 0 || g[1] != 0);
        }
    }

    #[test]
    fn dot_products() {
        assert_eq!(dot2(0, 0.25, 0.5), 0.75);
        assert_eq!(dot3(7, 0.25, 0.5, 2.0), -2.25);
        // Index is masked.
        assert_eq!(dot3(16 + 7, 0.25, 0.5, 2.0), -2.25);
    }
}
