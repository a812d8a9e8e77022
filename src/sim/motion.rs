//! Per-tick motion integration
//!
//! Dots move in a straight step along their heading, then the heading drifts
//! by a small random amount so paths wander instead of running straight.
//! Leaving the padded region teleports a dot to the opposite edge.

use rand::Rng;

use super::dot::Dot;
use crate::geometry::padding_margin;
use crate::options::Options;

/// Perturb a heading by a symmetric random amount in `[-range/2, range/2)`
#[inline]
pub fn deviate_heading<R: Rng + ?Sized>(rng: &mut R, heading: f32, range: f32) -> f32 {
    heading + (rng.random::<f32>() * range - range / 2.0)
}

/// Teleporting wraparound: below `low` jumps to `high`, above `high` to `low`
#[inline]
pub fn wrap_position(position: f32, low: f32, high: f32) -> f32 {
    if position < low {
        high
    } else if position > high {
        low
    } else {
        position
    }
}

/// Advance one dot by one tick.
///
/// The wrap band extends half the padding margin past each edge, so it is
/// narrower than the band dots are seeded in and the connection radius.
pub fn advance<R: Rng + ?Sized>(
    rng: &mut R,
    dot: &Dot,
    viewport_w: f32,
    viewport_h: f32,
    options: &Options,
) -> Dot {
    let max_distance = padding_margin(viewport_w, viewport_h, options.max_vertex_length) / 2.0;
    let step = dot.step();
    Dot {
        x: wrap_position(dot.x + step.x, -max_distance, viewport_w + max_distance),
        y: wrap_position(dot.y + step.y, -max_distance, viewport_h + max_distance),
        heading: deviate_heading(rng, dot.heading, options.dot_course_deviation),
        ..*dot
    }
}

/// Advance every dot, producing a new collection in the same order
pub fn advance_field<R: Rng + ?Sized>(
    rng: &mut R,
    dots: &[Dot],
    viewport_w: f32,
    viewport_h: f32,
    options: &Options,
) -> Vec<Dot> {
    dots.iter()
        .map(|dot| advance(rng, dot, viewport_w, viewport_h, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ConstantRng;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::FRAC_PI_2;

    fn dot_at(x: f32, y: f32, heading: f32) -> Dot {
        Dot {
            x,
            y,
            radius: 3.0,
            speed: 3.0,
            heading,
        }
    }

    #[test]
    fn test_wrap_position() {
        assert_eq!(wrap_position(-1.0, 0.0, 100.0), 100.0);
        assert_eq!(wrap_position(101.0, 0.0, 100.0), 0.0);
        assert_eq!(wrap_position(50.0, 0.0, 100.0), 50.0);
        // Bounds themselves are inside
        assert_eq!(wrap_position(0.0, 0.0, 100.0), 0.0);
        assert_eq!(wrap_position(100.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_deviate_heading_stub_draws() {
        assert_eq!(deviate_heading(&mut ConstantRng::half(), 1.0, 0.05), 1.0);
        let d = deviate_heading(&mut ConstantRng::zero(), 1.0, 0.05);
        assert!((d - (1.0 - 0.025)).abs() < 1e-6);
        assert_eq!(deviate_heading(&mut ConstantRng::zero(), 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_deviate_heading_is_bounded() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let d = deviate_heading(&mut rng, 0.0, 0.05);
            assert!((-0.025..0.025).contains(&d));
        }
    }

    #[test]
    fn test_advance_moves_along_heading() {
        let options = Options::default();
        let dot = dot_at(100.0, 100.0, FRAC_PI_2);
        let next = advance(&mut ConstantRng::half(), &dot, 800.0, 600.0, &options);
        assert!((next.x - 100.0).abs() < 1e-4);
        assert!((next.y - 103.0).abs() < 1e-4);
        assert_eq!(next.heading, dot.heading);
        assert_eq!(next.radius, dot.radius);
        assert_eq!(next.speed, dot.speed);
    }

    #[test]
    fn test_advance_wraps_at_half_margin() {
        let options = Options::default();
        let (w, h) = (300.0, 400.0);
        // margin = 0.2 * 500 = 100, wrap band = 50 past each edge
        let leaving_left = dot_at(-49.0, 200.0, std::f32::consts::PI);
        let next = advance(&mut ConstantRng::half(), &leaving_left, w, h, &options);
        assert!((next.x - (w + 50.0)).abs() < 1e-3);

        let leaving_bottom = dot_at(150.0, h + 49.0, FRAC_PI_2);
        let next = advance(&mut ConstantRng::half(), &leaving_bottom, w, h, &options);
        assert!((next.y + 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_field_preserves_cardinality_and_order() {
        let options = Options::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let dots = crate::sim::dot::create_field(&mut rng, 1350.0, 1000.0, &options);
        let mut next = dots.clone();
        for _ in 0..120 {
            next = advance_field(&mut rng, &next, 1350.0, 1000.0, &options);
        }
        assert_eq!(next.len(), dots.len());
        for (before, after) in dots.iter().zip(&next) {
            assert_eq!(before.radius, after.radius);
            assert_eq!(before.speed, after.speed);
        }
    }
}
