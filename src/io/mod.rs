//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `csv` - CSV format for survey rows
//! - `geojson` - GeoJSON format for scene export
//!
//! Overlay GeoJSON is read by the overlay merger, which reports failures as typed errors.

mod csv;
mod geojson;

pub use csv::{read_rows_csv, read_rows_csv_str};
pub use geojson::{scene_to_geojson, write_scene};
