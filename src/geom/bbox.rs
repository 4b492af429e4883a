use geo::{Coord, Rect};

/// Smallest rectangle covering every coordinate, or `None` for an empty input.
pub fn bounding_rect(coords: impl IntoIterator<Item = Coord<f64>>) -> Option<Rect<f64>> {
    coords.into_iter()
        .map(|c| Rect::new(c, c))
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}
