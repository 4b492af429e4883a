mod aggregate;

pub use aggregate::{aggregate, JobHullFeature};
