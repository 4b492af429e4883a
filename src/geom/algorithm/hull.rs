use std::cmp::Ordering;

use geo::Coord;

/// Compute the convex hull of a point set with Andrew's monotone chain.
///
/// Points are deduplicated and sorted lexicographically by `(x, y)`. The hull is returned in
/// counter-clockwise order starting from the lowest-x point, without repeating the first point.
/// Collinear points on hull edges are excluded. With fewer than 3 distinct points the sorted,
/// deduplicated input is returned unchanged (no polygon can be formed).
pub fn convex_hull(points: &[Coord<f64>]) -> Vec<Coord<f64>> {
    let mut points = points.to_vec();
    points.sort_by(lexicographic);
    points.dedup();
    if points.len() < 3 { return points }

    #[inline]
    fn cross(o: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    }

    // Pop points from the chain while they make a non-left turn.
    fn chain<'a>(points: impl Iterator<Item = &'a Coord<f64>>, capacity: usize) -> Vec<Coord<f64>> {
        let mut chain: Vec<Coord<f64>> = Vec::with_capacity(capacity);
        for &p in points {
            while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
                chain.pop();
            }
            chain.push(p);
        }
        chain
    }

    let mut lower = chain(points.iter(), points.len());
    let mut upper = chain(points.iter().rev(), points.len());

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
}

#[inline]
fn lexicographic(a: &Coord<f64>, b: &Coord<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
