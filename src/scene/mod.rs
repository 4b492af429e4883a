mod legend;
mod scene;

pub use legend::{legend_for, LegendEntry};
pub use scene::{assemble, Scene};
