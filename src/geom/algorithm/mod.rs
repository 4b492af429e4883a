mod hull;

pub use hull::convex_hull;
