use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;
use tracing::{debug, warn};

use crate::{config::ViewMode, record::{columns::{JOB_NAME, NODE_TYPE}, ColumnGroups, PoleRecord, RawRow}};

static COPY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)copy").expect("valid regex"));
static PLA_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bPLA\b").expect("valid regex"));
static PLA_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s*\bPLA\b").expect("valid regex"));
static SCID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));
static EXCLUDED_COMPANY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bAT&T\b|\bCharter\b").expect("valid regex"));

/// Number of rows removed by each filter rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub input: usize,
    pub copies: usize,              // Job name contains "copy"
    pub not_pole: usize,            // Node type is not "pole"
    pub missing_coords: usize,      // Latitude/longitude blank or unparseable
    pub bad_scid: usize,            // SCID is not all digits
    pub superseded: usize,          // Non-PLA job replaced by its PLA variant (Utility)
    pub pla_excluded: usize,        // PLA job hidden from the MR view
    pub excluded_company: usize,    // AT&T / Charter poles (Utility)
    pub kept: usize,
}

/// Records surviving the filter, in input order.
#[derive(Debug, Clone, Default)]
pub struct Filtered {
    pub records: Vec<PoleRecord>,
    pub stats: FilterStats,
}

/// Parse and filter input rows for the given view.
pub fn filter(rows: &[RawRow], groups: &ColumnGroups, mode: ViewMode) -> Filtered {
    let mut stats = FilterStats { input: rows.len(), ..Default::default() };
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        if is_copy(row.get(JOB_NAME).unwrap_or_default()) { stats.copies += 1; continue }
        if !is_pole(row.get(NODE_TYPE).unwrap_or_default()) { stats.not_pole += 1; continue }
        let Some(record) = PoleRecord::from_row(row, groups) else { stats.missing_coords += 1; continue };
        if !has_valid_scid(&record.scid) { stats.bad_scid += 1; continue }
        records.push(record);
    }
    if stats.missing_coords > 0 {
        warn!(rows = stats.missing_coords, "skipped rows with blank or unparseable coordinates");
    }

    finish(records, mode, stats)
}

/// Apply the filter rules to already-parsed records. Applying it twice yields the same records.
pub fn filter_records(records: Vec<PoleRecord>, mode: ViewMode) -> Filtered {
    let mut stats = FilterStats { input: records.len(), ..Default::default() };

    let records = records.into_iter()
        .filter(|record| {
            if is_copy(&record.job_name) { stats.copies += 1; return false }
            if !is_pole(&record.node_type) { stats.not_pole += 1; return false }
            if !(record.latitude.is_finite() && record.longitude.is_finite()) { stats.missing_coords += 1; return false }
            if !has_valid_scid(&record.scid) { stats.bad_scid += 1; return false }
            true
        })
        .collect::<Vec<_>>();

    finish(records, mode, stats)
}

/// Apply the view-specific rules, which look at the whole record set.
fn finish(records: Vec<PoleRecord>, mode: ViewMode, mut stats: FilterStats) -> Filtered {
    let records = match mode {
        ViewMode::Utility => {
            let before = records.len();
            let records = supersede_pla(records);
            stats.superseded = before - records.len();

            let before = records.len();
            let records = records.into_iter()
                .filter(|record| !record.companies.iter().any(|c| EXCLUDED_COMPANY.is_match(c)))
                .collect::<Vec<_>>();
            stats.excluded_company = before - records.len();
            records
        }
        ViewMode::Mr => {
            let before = records.len();
            let records = records.into_iter()
                .filter(|record| !has_pla_token(&record.job_name))
                .collect::<Vec<_>>();
            stats.pla_excluded = before - records.len();
            records
        }
    };

    stats.kept = records.len();
    debug!(?stats, view = mode.to_str(), "filtered pole records");
    Filtered { records, stats }
}

/// Where a job has a PLA variant, keep only the PLA rows for that base job name.
fn supersede_pla(records: Vec<PoleRecord>) -> Vec<PoleRecord> {
    let superseded = records.iter()
        .filter(|record| has_pla_token(&record.job_name))
        .map(|record| base_job_name(&record.job_name))
        .collect::<AHashSet<_>>();

    records.into_iter()
        .filter(|record| has_pla_token(&record.job_name) || !superseded.contains(&base_job_name(&record.job_name)))
        .collect()
}

#[inline]
fn is_copy(job_name: &str) -> bool { COPY.is_match(job_name) }

#[inline]
fn is_pole(node_type: &str) -> bool { node_type.trim().eq_ignore_ascii_case("pole") }

#[inline]
fn has_valid_scid(scid: &str) -> bool { SCID.is_match(scid) }

#[inline]
fn has_pla_token(job_name: &str) -> bool { PLA_TOKEN.is_match(job_name) }

/// Job name with any standalone "PLA" token (and whitespace before it) removed.
fn base_job_name(job_name: &str) -> String {
    PLA_SUFFIX.replace_all(job_name, "").into_owned()
}
