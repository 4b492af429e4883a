mod edit;
mod visibility;

pub use edit::{EditState, FeatureEditor};
pub use visibility::Visibility;
