//! Scalar geometry helpers shared by the dot field, the integrator and the
//! proximity graph.

use rand::Rng;

/// Euclidean norm of `(dx, dy)`
#[inline]
pub fn diagonal_length(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Uniform value in `[lo, hi)`.
///
/// `hi == lo` always yields `lo`. A reversed range is not corrected: the
/// result then lies in `(hi, lo]`, which is the caller's configuration error.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    rng.random::<f32>() * (hi - lo) + lo
}

/// Spatial margin around the viewport, proportional to its diagonal.
///
/// Dots are seeded up to this far outside the visible area and the same
/// value is the maximum connection distance between two dots.
#[inline]
pub fn padding_margin(viewport_w: f32, viewport_h: f32, max_vertex_length: f32) -> f32 {
    max_vertex_length * diagonal_length(viewport_w, viewport_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ConstantRng;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_diagonal_length() {
        assert_eq!(diagonal_length(3.0, 4.0), 5.0);
        assert_eq!(diagonal_length(-3.0, -4.0), 5.0);
        assert_eq!(diagonal_length(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_random_between_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between(&mut rng, 2.0, 6.0);
            assert!((2.0..6.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_random_between_degenerate_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(random_between(&mut rng, 3.0, 3.0), 3.0);
        }
    }

    #[test]
    fn test_random_between_stub_draws() {
        assert_eq!(random_between(&mut ConstantRng::zero(), 2.0, 6.0), 2.0);
        assert_eq!(random_between(&mut ConstantRng::half(), 2.0, 6.0), 4.0);
    }

    #[test]
    fn test_random_between_reversed_range_is_not_swapped() {
        assert_eq!(random_between(&mut ConstantRng::half(), 6.0, 2.0), 4.0);
        // Zero draw lands on the first bound, which is now the upper one
        assert_eq!(random_between(&mut ConstantRng::zero(), 6.0, 2.0), 6.0);
    }

    #[test]
    fn test_padding_margin() {
        // 0.2 * 5000
        let margin = padding_margin(3000.0, 4000.0, 0.2);
        assert!((margin - 1000.0).abs() < 1e-3);
        assert_eq!(padding_margin(0.0, 0.0, 0.2), 0.0);
    }
}
