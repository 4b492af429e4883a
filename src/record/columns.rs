use crate::error::PipelineError;

pub(crate) const JOB_NAME: &str = "job_name";
pub(crate) const LATITUDE: &str = "latitude";
pub(crate) const LONGITUDE: &str = "longitude";
pub(crate) const NODE_TYPE: &str = "node_type";
pub(crate) const SCID: &str = "scid";

const REQUIRED: [&str; 5] = [JOB_NAME, LATITUDE, LONGITUDE, NODE_TYPE, SCID];

/// Optional column groups detected from the header, each in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroups {
    pub mr_levels: Vec<String>,
    pub mr_costs: Vec<String>,
    pub warnings: Vec<String>,
    pub companies: Vec<String>,
}

impl ColumnGroups {
    /// Detect column groups by name pattern and check that every required column is present.
    ///
    /// MR level columns start with `mr_level`; cost, warning and company columns contain
    /// `mr_cost`, `warning` and `company`. Matching is case-insensitive. The warning group may be empty.
    pub fn detect<S: AsRef<str>>(columns: &[S]) -> Result<Self, PipelineError> {
        let names = columns.iter().map(|c| c.as_ref()).collect::<Vec<_>>();

        let groups = Self {
            mr_levels: matching(&names, |name| name.starts_with("mr_level")),
            mr_costs: matching(&names, |name| name.contains("mr_cost")),
            warnings: matching(&names, |name| name.contains("warning")),
            companies: matching(&names, |name| name.contains("company")),
        };

        let mut missing = REQUIRED.iter()
            .filter(|required| !names.contains(*required))
            .map(|required| required.to_string())
            .collect::<Vec<_>>();
        if groups.mr_levels.is_empty() { missing.push("MR_level*".into()) }
        if groups.mr_costs.is_empty() { missing.push("*MR_cost*".into()) }
        if groups.companies.is_empty() { missing.push("*company*".into()) }

        if !missing.is_empty() { return Err(PipelineError::Configuration { missing }) }
        Ok(groups)
    }
}

/// Names whose lowercased form satisfies `pred`, in header order.
fn matching(names: &[&str], pred: impl Fn(&str) -> bool) -> Vec<String> {
    names.iter()
        .filter(|name| pred(&name.to_lowercase()))
        .map(|name| name.to_string())
        .collect()
}
