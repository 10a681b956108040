//! Intersection routines between straight curves and planes.
//!
//! Parameter tolerances are expressed as a length: a parameter `t` on a
//! segment of length `L` is accepted up to `eps / L` outside `[0, 1]`, so
//! that touching endpoints count as intersecting.

use crate::math::scalar::{abs, clamp};
use crate::math::{Point, Real};

use super::curve::{Line, LineSegment};
use super::surface::Plane;

/// Where two segments meet.
#[derive(Debug, Clone, Copy)]
pub struct SegmentIntersection<T, const N: usize> {
    /// The shared point, evaluated on the first segment.
    pub point: Point<T, N>,
    /// Parameter of `point` along the first segment, in `[0, 1]`.
    pub t: T,
    /// Parameter of `point` along the second segment, in `[0, 1]`.
    pub u: T,
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is judged on the angle, `|d1 x d2| <= eps * |d1| * |d2|`.
#[must_use]
pub fn line_line_intersect_2d<T: Real>(a: &Line<T, 2>, b: &Line<T, 2>) -> Option<(T, T)> {
    let d1 = a.direction();
    let d2 = b.direction();
    let cross = d1.cross(d2);
    if abs(cross) <= T::eps() * d1.magnitude() * d2.magnitude() {
        return None;
    }
    let delta = *b.anchor() - *a.anchor();
    let t = delta.cross(d2) / cross;
    let u = delta.cross(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Solves `a.start + t * d1 = b.start + u * d2` with the perp-dot
/// determinant `d1 x d2`. Segments within `eps` of parallel (by angle) are
/// checked for collinear overlap, then for a crossing or touching endpoint.
#[must_use]
pub fn segment_segment_intersect_2d<T: Real>(
    a: &LineSegment<T, 2>,
    b: &LineSegment<T, 2>,
) -> Option<SegmentIntersection<T, 2>> {
    if a.is_degenerate() || b.is_degenerate() {
        return endpoint_contact(a, b);
    }

    let eps = T::eps();
    let d1 = a.direction();
    let d2 = b.direction();
    let len1 = d1.magnitude();
    let delta = *b.start() - *a.start();

    let denom = d1.cross(&d2);
    let solve = || (delta.cross(&d2) / denom, delta.cross(&d1) / denom);
    if abs(denom) > eps * len1 * d2.magnitude() {
        let (t, u) = solve();
        return bounded_hit(a, b, t, u);
    }

    // |d1 x delta| / |d1| is the distance from b.start to a's carrier.
    if abs(d1.cross(&delta)) <= eps * len1 {
        return collinear_overlap(a, b);
    }
    near_parallel_contact(a, b, (abs(denom) > T::zero()).then(solve))
}

/// Bounded segment-segment intersection in 3D.
///
/// With `n = d1 x d2`, the carriers are skew when `|n . (p2 - p1)|` exceeds
/// `eps * |n|`, i.e. when their common perpendicular is longer than `eps`.
/// Otherwise the system is solved within the common plane:
/// `t = ((delta x d2) . n) / |n|^2` and `u = ((delta x d1) . n) / |n|^2`.
#[must_use]
pub fn segment_segment_intersect_3d<T: Real>(
    a: &LineSegment<T, 3>,
    b: &LineSegment<T, 3>,
) -> Option<SegmentIntersection<T, 3>> {
    if a.is_degenerate() || b.is_degenerate() {
        return endpoint_contact(a, b);
    }

    let eps = T::eps();
    let d1 = a.direction();
    let d2 = b.direction();
    let len1 = d1.magnitude();
    let delta = *b.start() - *a.start();

    let n = d1.cross(&d2);
    let n_len = n.magnitude();
    let n_sq = n_len * n_len;
    let solve = || (delta.cross(&d2).dot(&n) / n_sq, delta.cross(&d1).dot(&n) / n_sq);
    if n_len > eps * len1 * d2.magnitude() {
        if abs(n.dot(&delta)) > eps * n_len {
            return None;
        }
        let (t, u) = solve();
        return bounded_hit(a, b, t, u);
    }

    if d1.cross(&delta).magnitude() <= eps * len1 {
        return collinear_overlap(a, b);
    }
    near_parallel_contact(a, b, (n_len > T::zero()).then(solve))
}

/// Accepts the carrier-line solution `(t, u)` when it lies on both segments.
fn bounded_hit<T: Real, const N: usize>(
    a: &LineSegment<T, N>,
    b: &LineSegment<T, N>,
    t: T,
    u: T,
) -> Option<SegmentIntersection<T, N>> {
    let eps = T::eps();
    let tol_t = eps / a.length();
    let tol_u = eps / b.length();
    let one = T::one();
    let zero = T::zero();
    if t < -tol_t || t > one + tol_t || u < -tol_u || u > one + tol_u {
        return None;
    }
    let t = clamp(t, zero, one);
    Some(SegmentIntersection {
        point: a.lerp(t),
        t,
        u: clamp(u, zero, one),
    })
}

/// Nearly parallel, non-collinear segments.
///
/// The solved parameters are ill-conditioned here, so a crossing is only
/// trusted once its point is confirmed to lie on `b`. Failing that, the
/// segments can still touch at an endpoint.
fn near_parallel_contact<T: Real, const N: usize>(
    a: &LineSegment<T, N>,
    b: &LineSegment<T, N>,
    params: Option<(T, T)>,
) -> Option<SegmentIntersection<T, N>> {
    params
        .and_then(|(t, u)| bounded_hit(a, b, t, u))
        .filter(|hit| b.distance(&hit.point) <= T::eps())
        .or_else(|| endpoint_contact(a, b))
}

/// Overlap of two segments known to share a carrier line.
///
/// Reports the first point of `a` that also lies on `b`.
fn collinear_overlap<T: Real, const N: usize>(
    a: &LineSegment<T, N>,
    b: &LineSegment<T, N>,
) -> Option<SegmentIntersection<T, N>> {
    let carrier = a.to_line();
    let s0 = carrier.parameter_of(b.start());
    let s1 = carrier.parameter_of(b.end());
    let (lo, hi) = if s0 <= s1 { (s0, s1) } else { (s1, s0) };

    let tol = T::eps() / a.length();
    if hi < -tol || lo > T::one() + tol {
        return None;
    }

    let t = clamp(lo, T::zero(), T::one());
    let point = a.lerp(t);
    Some(SegmentIntersection {
        point,
        t,
        u: b.closest_parameter(&point),
    })
}

/// Earliest endpoint of either segment lying within `eps` of the other.
///
/// Also covers degenerate segments, which are all endpoint.
fn endpoint_contact<T: Real, const N: usize>(
    a: &LineSegment<T, N>,
    b: &LineSegment<T, N>,
) -> Option<SegmentIntersection<T, N>> {
    let eps = T::eps();
    let mut best = None;

    for (point, t) in [(*a.start(), T::zero()), (*a.end(), T::one())] {
        if b.distance(&point) <= eps {
            let hit = SegmentIntersection {
                point,
                t,
                u: b.closest_parameter(&point),
            };
            best = earlier(best, hit);
        }
    }
    for (q, u) in [(*b.start(), T::zero()), (*b.end(), T::one())] {
        if a.distance(&q) <= eps {
            let t = a.closest_parameter(&q);
            let hit = SegmentIntersection {
                point: a.lerp(t),
                t,
                u,
            };
            best = earlier(best, hit);
        }
    }
    best
}

fn earlier<T: Real, const N: usize>(
    best: Option<SegmentIntersection<T, N>>,
    hit: SegmentIntersection<T, N>,
) -> Option<SegmentIntersection<T, N>> {
    match best {
        Some(prev) if prev.t <= hit.t => Some(prev),
        _ => Some(hit),
    }
}

/// Relationship of a line with a plane.
#[derive(Debug, Clone, Copy)]
pub enum LinePlaneRelation<T> {
    /// Line crosses the plane at a single point, `point = line.point_at(t)`.
    Point { point: Point<T, 3>, t: T },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line with a plane.
#[must_use]
pub fn line_plane_intersect<T: Real>(line: &Line<T, 3>, plane: &Plane<T>) -> LinePlaneRelation<T> {
    let eps = T::eps();
    let denom = plane.normal().dot(line.direction());
    // Signed distance of the anchor, negated: how far to travel along n.
    let numer = -plane.distance(line.anchor());

    if abs(denom) < eps {
        if abs(numer) < eps {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        LinePlaneRelation::Point {
            point: line.point_at(t),
            t,
        }
    }
}
