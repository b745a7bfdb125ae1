//! Path sequencing: orders a layer's polygons to minimize frame travel.
//!
//! Greedy nearest-join: starting from the needle's implicit home at the
//! origin, repeatedly pick the polygon whose closest vertex is nearest the
//! current head, rotate it to start at that vertex, and continue from its
//! end. O(N * V) over polygon count and total vertex count, which is fine
//! for design-sized inputs.

use stitchkit_core::types::Point;

use crate::geometry::{is_closed, ring_of, ORIGIN};

/// Reorders closed polygons by greedy nearest-join from the origin, rotating
/// each so stitching starts at the vertex closest to the previous end.
/// Ties break toward the earlier polygon in input order.
pub fn sequence_polygons(polygons: &[Vec<Point>]) -> Vec<Vec<Point>> {
    let mut head = ORIGIN;
    let mut visited = vec![false; polygons.len()];
    let mut ordered = Vec::with_capacity(polygons.len());

    for _ in 0..polygons.len() {
        let mut best: Option<(usize, usize, f64)> = None;
        for (poly_idx, polygon) in polygons.iter().enumerate() {
            if visited[poly_idx] || polygon.is_empty() {
                continue;
            }
            for (vert_idx, vertex) in ring_of(polygon).iter().enumerate() {
                let d = head.distance_squared_to(vertex);
                if best.map_or(true, |(_, _, best_d)| d < best_d) {
                    best = Some((poly_idx, vert_idx, d));
                }
            }
        }
        let Some((poly_idx, vert_idx, _)) = best else {
            break;
        };
        visited[poly_idx] = true;
        let rotated = rotate_to_start(&polygons[poly_idx], vert_idx);
        if let Some(last) = rotated.last() {
            head = *last;
        }
        ordered.push(rotated);
    }
    ordered
}

/// Rotates a polygon so the given ring vertex becomes its first point.
///
/// A closed polygon's duplicated closing vertex is stripped before the
/// rotation and re-appended after, so closure and winding survive.
pub fn rotate_to_start(polygon: &[Point], start: usize) -> Vec<Point> {
    let closed = is_closed(polygon);
    let ring = ring_of(polygon);
    if ring.is_empty() || start >= ring.len() {
        return polygon.to_vec();
    }
    let mut rotated: Vec<Point> = Vec::with_capacity(polygon.len());
    rotated.extend_from_slice(&ring[start..]);
    rotated.extend_from_slice(&ring[..start]);
    if closed {
        let first = rotated[0];
        rotated.push(first);
    }
    rotated
}
