#![doc = "polemap public API"]
mod annotation;
mod classify;
mod config;
mod error;
mod geom;
mod interact;
mod io;
mod job;
mod overlay;
mod pipeline;
mod record;
mod scene;

#[doc(inline)]
pub use annotation::{Annotation, FeatureStyle};

#[doc(inline)]
pub use classify::{classify, canonical_company, Classifier, CompanyColorTable, MarkerCategory, MarkerFeature, MarkerShape};

#[doc(inline)]
pub use config::{ColorEntry, CompanyAlias, MapConfig, StyleConfig, ViewMode};

#[doc(inline)]
pub use error::{EditError, OverlayLoadError, PipelineError};

#[doc(inline)]
pub use geom::{bounding_rect, convex_hull};

#[doc(inline)]
pub use interact::{EditState, FeatureEditor, Visibility};

#[doc(inline)]
pub use io::{read_rows_csv, read_rows_csv_str, scene_to_geojson, write_scene};

#[doc(inline)]
pub use job::{aggregate, JobHullFeature};

#[doc(inline)]
pub use overlay::{merge, merge_str, OverlayFeature, OverlayMerge};

#[doc(inline)]
pub use pipeline::{build_scene, SceneBuild};

#[doc(inline)]
pub use record::{filter, filter_records, ColumnGroups, FilterStats, Filtered, PoleRecord, RawRow, RowTable};

#[doc(inline)]
pub use scene::{assemble, legend_for, LegendEntry, Scene};
