use crate::{
    classify::{CompanyColorTable, MarkerShape},
    config::{StyleConfig, ViewMode},
};

/// One legend row: label, swatch color and swatch glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub swatch: MarkerShape,
}

impl LegendEntry {
    fn new(label: &str, color: &str, swatch: MarkerShape) -> Self {
        Self { label: label.to_string(), color: color.to_string(), swatch }
    }
}

/// Legend for a view: style table entries for MR, company colors for Utility.
pub fn legend_for(mode: ViewMode, styles: &StyleConfig, companies: &CompanyColorTable) -> Vec<LegendEntry> {
    match mode {
        ViewMode::Mr => styles.levels.iter()
            .map(|entry| LegendEntry::new(&entry.name, &entry.color, MarkerShape::Circle))
            .chain([
                LegendEntry::new("Missing MR", &styles.missing_color, MarkerShape::Circle),
                LegendEntry::new("Warnings", &styles.warning_color, MarkerShape::Square),
            ])
            .collect(),
        ViewMode::Utility => companies.entries()
            .map(|(name, color)| LegendEntry::new(name, color, MarkerShape::Circle))
            .chain([
                LegendEntry::new("Multiple Companies", &styles.multi_company_color, MarkerShape::Square),
                LegendEntry::new("No Company", &styles.no_company_color, MarkerShape::Cross),
            ])
            .collect(),
    }
}
