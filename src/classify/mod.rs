mod classifier;
mod company;
mod marker;

pub use classifier::{classify, Classifier};
pub use company::{canonical_company, CompanyColorTable};
pub use marker::{MarkerCategory, MarkerFeature, MarkerShape};
