//! Disc-overlap geometry
//!
//! Pure predicates over squared distances; used by spawn placement to
//! reject crowded candidate positions and exposed to the host for
//! collision logic.

use super::state::Disc;

/// Circle-circle intersection: true iff the squared center distance is
/// strictly less than `(ra + rb)²`. Symmetric; a disc always overlaps
/// itself.
#[inline]
pub fn discs_overlap(a: &Disc, b: &Disc) -> bool {
    let d = b.position - a.position;
    let reach = a.radius + b.radius;
    d.length_squared() < reach * reach
}

/// True iff `disc` comes within `min_separation` of overlapping any member
/// of `others`. Short-circuits on the first hit; iteration order does not
/// affect the result.
///
/// With `min_separation = 0` this is plain pairwise overlap against a
/// group. A positive separation rejects candidate spawn positions that
/// would land merely close to an existing body.
pub fn disc_overlaps_any<'a, I>(disc: &Disc, others: I, min_separation: f64) -> bool
where
    I: IntoIterator<Item = &'a Disc>,
{
    others.into_iter().any(|other| {
        let d = other.position - disc.position;
        let reach = other.radius + disc.radius + min_separation;
        d.length_squared() < reach * reach
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Disc, ENEMY_COLOR};
    use glam::DVec2;

    fn disc(x: f64, y: f64, radius: f64) -> Disc {
        Disc::new(radius, DVec2::new(x, y), ENEMY_COLOR)
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = disc(0.0, 0.0, 0.1);
        let b = disc(0.15, 0.0, 0.1);
        assert!(discs_overlap(&a, &b));
        assert!(discs_overlap(&b, &a));
    }

    #[test]
    fn test_self_overlap() {
        let a = disc(0.3, -0.2, 0.05);
        assert!(discs_overlap(&a, &a));
    }

    #[test]
    fn test_tangent_discs_do_not_overlap() {
        // Exactly touching is not overlapping (strict inequality)
        let a = disc(0.0, 0.0, 0.1);
        let b = disc(0.2, 0.0, 0.1);
        assert!(!discs_overlap(&a, &b));
    }

    #[test]
    fn test_separated_discs() {
        let a = disc(-0.5, -0.5, 0.0125);
        let b = disc(0.5, 0.5, 0.1);
        assert!(!discs_overlap(&a, &b));
    }

    #[test]
    fn test_overlaps_any_with_margin() {
        let candidate = disc(0.0, 0.0, 0.1);
        let others = [disc(0.25, 0.0, 0.1)];
        // Gap is 0.05: clear without margin, blocked with one
        assert!(!disc_overlaps_any(&candidate, &others, 0.0));
        assert!(disc_overlaps_any(&candidate, &others, 0.06));
    }

    #[test]
    fn test_overlaps_any_empty_group() {
        let candidate = disc(0.0, 0.0, 0.1);
        let others: [Disc; 0] = [];
        assert!(!disc_overlaps_any(&candidate, &others, 0.5));
    }
}
