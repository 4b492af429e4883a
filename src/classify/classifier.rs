use crate::{
    classify::{company::record_companies, CompanyColorTable, MarkerCategory, MarkerFeature},
    config::{StyleConfig, ViewMode},
    record::PoleRecord,
};

const NONE_HTML: &str = "<i>None</i>";

/// Classify one record for the given view.
pub fn classify(record: &PoleRecord, mode: ViewMode, styles: &StyleConfig, companies: &CompanyColorTable) -> MarkerFeature {
    Classifier::new(mode, styles, companies).classify(record)
}

/// Classifies records against fixed style tables and a run's company colors.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    mode: ViewMode,
    styles: &'a StyleConfig,
    companies: &'a CompanyColorTable,
}

impl<'a> Classifier<'a> {
    pub fn new(mode: ViewMode, styles: &'a StyleConfig, companies: &'a CompanyColorTable) -> Self {
        Self { mode, styles, companies }
    }

    pub fn classify(&self, record: &PoleRecord) -> MarkerFeature {
        let (category, tooltip_html, popup_text) = match self.mode {
            ViewMode::Mr => self.classify_mr(record),
            ViewMode::Utility => self.classify_utility(record),
        };

        MarkerFeature {
            position: record.position(),
            color: category.color(self.styles, self.companies).to_string(),
            shape: category.shape(),
            radius: self.styles.marker_radius,
            category,
            tooltip_html,
            popup_text,
            scid: record.scid.clone(),
            job_name: record.job_name.clone(),
        }
    }

    /// Classify every record, preserving order.
    pub fn classify_all(&self, records: &[PoleRecord]) -> Vec<MarkerFeature> {
        records.iter().map(|record| self.classify(record)).collect()
    }

    fn classify_mr(&self, record: &PoleRecord) -> (MarkerCategory, String, Option<String>) {
        let level = record.level();
        let mut tooltip = format!(
            "<b>SCID:</b> {}<br><b>MR Level:</b> {}<br><b>Cost:</b> {}",
            record.scid,
            level.unwrap_or(NONE_HTML),
            record.cost().unwrap_or(NONE_HTML),
        );

        let category = if !record.warnings.is_empty() {
            tooltip.push_str("<br><b>Warnings:</b> ");
            tooltip.push_str(&record.warnings.join("; "));
            MarkerCategory::Warning
        } else {
            match level {
                Some(level) if self.styles.level_color(level).is_some() => MarkerCategory::StyledLevel(level.to_string()),
                _ => MarkerCategory::MissingLevel,
            }
        };

        (category, tooltip, Some(record.job_name.clone()))
    }

    fn classify_utility(&self, record: &PoleRecord) -> (MarkerCategory, String, Option<String>) {
        let mut companies = record_companies(record, self.styles);
        let listed = if companies.is_empty() { NONE_HTML.to_string() } else { companies.join(", ") };
        let tooltip = format!("<b>SCID:</b> {}<br><b>Companies:</b> {}", record.scid, listed);

        let category = match companies.len() {
            0 => MarkerCategory::NoCompany,
            1 => MarkerCategory::SingleCompany(companies.remove(0)),
            _ => MarkerCategory::MultiCompany,
        };

        (category, tooltip, None)
    }
}
