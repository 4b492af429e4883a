mod algorithm;
mod bbox;

pub use algorithm::convex_hull;
pub use bbox::bounding_rect;
