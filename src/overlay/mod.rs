mod feature;
mod merge;

pub use feature::OverlayFeature;
pub use merge::{merge, merge_str, OverlayMerge};
