//! 2D geometry utilities shared by the stitch generators.
//!
//! Everything here operates on plain millimetre [`Point`] slices. Contours
//! are treated as closed when the last point numerically equals the first;
//! the helpers preserve that closure in their output.

use stitchkit_core::types::Point;

/// Origin of the design coordinate space.
pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

/// Default tolerance for path simplification.
pub const SIMPLIFY_TOLERANCE_MM: f64 = 0.05;

/// Rotates a point around a center by the given angle in degrees
/// (counter-clockwise in the Y-up frame).
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg.abs() < 1e-6 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}

/// Removes adjacent points closer together than `tolerance`.
pub fn dedupe_points(points: &[Point], tolerance: f64) -> Vec<Point> {
    let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        match cleaned.last() {
            Some(last) if last.distance_to(p) <= tolerance => {}
            _ => cleaned.push(*p),
        }
    }
    cleaned
}

/// Signed area of a contour via the shoelace formula. Negative for clockwise
/// winding in the Y-up frame.
pub fn signed_area(points: &[Point]) -> f64 {
    let ring = ring_of(points);
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].x * ring[j].y;
        area -= ring[j].x * ring[i].y;
    }
    area / 2.0
}

/// Returns the contour with clockwise winding, reversing it if needed.
/// The averaged-normal offset expands clockwise contours for positive
/// distances, so fills normalize winding before offsetting.
pub fn ensure_clockwise(points: &[Point]) -> Vec<Point> {
    if signed_area(points) > 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// Offsets a closed contour by displacing each vertex along its averaged
/// edge normal with a mitered corner multiplier.
///
/// Positive distances expand clockwise contours; negative distances inset.
/// Contours with fewer than three distinct vertices are returned unchanged.
/// No topology cleanup is performed: the caller keeps offset magnitudes
/// small enough that the contour stays simple.
pub fn offset_polygon(points: &[Point], distance: f64) -> Vec<Point> {
    let closed = is_closed(points);
    let ring = ring_of(points);
    let n = ring.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let curr = ring[i];
        let next = ring[(i + 1) % n];

        let (n1x, n1y) = edge_normal(prev, curr);
        let (n2x, n2y) = edge_normal(curr, next);

        let mut ax = n1x + n2x;
        let mut ay = n1y + n2y;
        let len = (ax * ax + ay * ay).sqrt();
        if len > 1e-12 {
            ax /= len;
            ay /= len;
        } else {
            // Opposed edges, the averaged normal vanishes.
            ax = n1x;
            ay = n1y;
        }

        let dot = n1x * n2x + n1y * n2y;
        let miter = (1.0 / ((1.0 + dot) / 2.0).max(0.1)).min(2.0);

        out.push(Point::new(
            curr.x + distance * miter * ax,
            curr.y + distance * miter * ay,
        ));
    }
    if closed {
        let first = out[0];
        out.push(first);
    }
    out
}

/// Ramer-Douglas-Peucker simplification with the given tolerance.
///
/// Paths with two or fewer points are returned unchanged. Uses an explicit
/// worklist instead of recursion so pathological inputs cannot exhaust the
/// stack.
pub fn simplify_path(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut worklist = vec![(0usize, n - 1)];
    while let Some((lo, hi)) = worklist.pop() {
        if hi <= lo + 1 {
            continue;
        }
        let mut max_dist = 0.0;
        let mut max_idx = lo;
        for i in (lo + 1)..hi {
            let d = perpendicular_distance(points[i], points[lo], points[hi]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }
        if max_dist > tolerance {
            keep[max_idx] = true;
            worklist.push((lo, max_idx));
            worklist.push((max_idx, hi));
        }
    }

    points
        .iter()
        .zip(keep.iter())
        .filter(|(_, &k)| k)
        .map(|(p, _)| *p)
        .collect()
}

/// Resamples a path at a uniform arc-length spacing.
///
/// The first original vertex is preserved and the last is appended; interior
/// samples fall every `spacing` millimetres along the path.
pub fn resample_path(points: &[Point], spacing: f64) -> Vec<Point> {
    if points.len() < 2 || spacing <= 0.0 {
        return points.to_vec();
    }

    let mut out = vec![points[0]];
    let mut carried = 0.0;
    for window in points.windows(2) {
        let a = window[0];
        let b = window[1];
        let seg = a.distance_to(&b);
        if seg < 1e-12 {
            continue;
        }
        let mut travelled = spacing - carried;
        while travelled < seg - 1e-9 {
            let t = travelled / seg;
            out.push(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t));
            travelled += spacing;
        }
        carried = seg - (travelled - spacing);
    }
    out.push(*points.last().expect("non-empty path"));
    out
}

/// Even-odd point-in-polygon test against a single contour.
pub fn point_in_polygon(x: f64, y: f64, points: &[Point]) -> bool {
    let ring = ring_of(points);
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = ring[i];
        let pj = ring[j];
        if ((pi.y > y) != (pj.y > y))
            && (x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True when the contour's last point repeats its first.
pub fn is_closed(points: &[Point]) -> bool {
    points.len() > 1 && points.first() == points.last()
}

/// The contour without its duplicated closing vertex.
pub fn ring_of(points: &[Point]) -> &[Point] {
    if is_closed(points) {
        &points[..points.len() - 1]
    } else {
        points
    }
}

fn edge_normal(from: Point, to: Point) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-12 {
        return (0.0, 0.0);
    }
    (-dy / len, dx / len)
}

fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-24 {
        return p.distance_to(&a);
    }
    ((dy * p.x - dx * p.y + b.x * a.y - b.y * a.x).abs()) / len_sq.sqrt()
}
