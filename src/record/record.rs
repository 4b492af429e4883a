use geo::Coord;

use crate::record::{columns::{JOB_NAME, LATITUDE, LONGITUDE, NODE_TYPE, SCID}, ColumnGroups, RawRow};

/// One surveyed pole. Immutable once parsed from its row.
#[derive(Debug, Clone, PartialEq)]
pub struct PoleRecord {
    pub job_name: String,
    pub node_type: String,
    pub scid: String,
    pub latitude: f64,
    pub longitude: f64,
    pub mr_levels: Vec<String>,  // Non-blank MR level cells, column order
    pub mr_costs: Vec<String>,   // Non-blank MR cost cells, column order
    pub warnings: Vec<String>,   // Non-blank warning cells, column order
    pub companies: Vec<String>,  // Non-blank company cells, column order
}

impl PoleRecord {
    /// Construct a pole record with no attribute groups.
    pub fn new(job_name: impl Into<String>, scid: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            job_name: job_name.into(),
            node_type: "pole".into(),
            scid: scid.into(),
            latitude,
            longitude,
            mr_levels: Vec::new(),
            mr_costs: Vec::new(),
            warnings: Vec::new(),
            companies: Vec::new(),
        }
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    pub fn with_levels<S: Into<String>>(mut self, levels: impl IntoIterator<Item = S>) -> Self {
        self.mr_levels = non_blank(levels);
        self
    }

    pub fn with_costs<S: Into<String>>(mut self, costs: impl IntoIterator<Item = S>) -> Self {
        self.mr_costs = non_blank(costs);
        self
    }

    pub fn with_warnings<S: Into<String>>(mut self, warnings: impl IntoIterator<Item = S>) -> Self {
        self.warnings = non_blank(warnings);
        self
    }

    pub fn with_companies<S: Into<String>>(mut self, companies: impl IntoIterator<Item = S>) -> Self {
        self.companies = non_blank(companies);
        self
    }

    /// Parse a row using the detected column groups.
    ///
    /// Returns `None` when latitude or longitude is blank or not a finite number;
    /// such rows are skipped rather than aborting the run.
    pub fn from_row(row: &RawRow, groups: &ColumnGroups) -> Option<Self> {
        let latitude = parse_coord(row.get(LATITUDE))?;
        let longitude = parse_coord(row.get(LONGITUDE))?;
        let cells = |columns: &[String]| non_blank(columns.iter().filter_map(|c| row.get(c)));

        Some(Self {
            job_name: row.get(JOB_NAME).unwrap_or_default().to_string(),
            node_type: row.get(NODE_TYPE).unwrap_or_default().to_string(),
            scid: row.get(SCID).unwrap_or_default().to_string(),
            latitude,
            longitude,
            mr_levels: cells(&groups.mr_levels),
            mr_costs: cells(&groups.mr_costs),
            warnings: cells(&groups.warnings),
            companies: cells(&groups.companies),
        })
    }

    /// First non-blank MR level, if any.
    #[inline] pub fn level(&self) -> Option<&str> { self.mr_levels.first().map(String::as_str) }

    /// First non-blank MR cost, if any.
    #[inline] pub fn cost(&self) -> Option<&str> { self.mr_costs.first().map(String::as_str) }

    /// Position as `(lat, lon)`.
    #[inline] pub fn position(&self) -> (f64, f64) { (self.latitude, self.longitude) }

    /// Position as a planar coordinate: x is longitude, y is latitude.
    #[inline] pub fn coord(&self) -> Coord<f64> { Coord { x: self.longitude, y: self.latitude } }
}

/// Trim every value and keep the non-empty ones.
fn non_blank<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Vec<String> {
    values.into_iter()
        .map(|v| v.into().trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn parse_coord(cell: Option<&str>) -> Option<f64> {
    cell?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
