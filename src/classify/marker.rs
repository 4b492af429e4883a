use crate::{classify::CompanyColorTable, config::StyleConfig};

/// Marker category assigned to a pole. Exactly one per record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    StyledLevel(String),    // MR level with a style entry
    MissingLevel,           // MR level blank or unknown
    Warning,                // MR record carrying warnings
    SingleCompany(String),  // Exactly one canonical company
    MultiCompany,           // More than one canonical company
    NoCompany,              // No company data
}

/// Glyph used to draw a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    Cross,
}

impl MarkerShape {
    pub fn to_str(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Square => "square",
            MarkerShape::Cross => "cross",
        }
    }

    /// Fill opacity of the glyph; the cross is a text glyph and has no fill.
    pub fn fill_opacity(&self) -> Option<f64> {
        match self {
            MarkerShape::Circle => Some(0.8),
            MarkerShape::Square => Some(0.9),
            MarkerShape::Cross => None,
        }
    }

    /// Whether the glyph is drawn with an outline. Circles are fill only.
    pub fn stroke(&self) -> bool {
        matches!(self, MarkerShape::Square)
    }
}

impl MarkerCategory {
    pub fn to_str(&self) -> &'static str {
        match self {
            MarkerCategory::StyledLevel(_) => "styled_level",
            MarkerCategory::MissingLevel => "missing_level",
            MarkerCategory::Warning => "warning",
            MarkerCategory::SingleCompany(_) => "single_company",
            MarkerCategory::MultiCompany => "multi_company",
            MarkerCategory::NoCompany => "no_company",
        }
    }

    /// The level or company name carried by the category, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            MarkerCategory::StyledLevel(value) | MarkerCategory::SingleCompany(value) => Some(value),
            _ => None,
        }
    }

    /// Marker glyph for this category.
    pub fn shape(&self) -> MarkerShape {
        match self {
            MarkerCategory::StyledLevel(_)
            | MarkerCategory::MissingLevel
            | MarkerCategory::SingleCompany(_) => MarkerShape::Circle,
            MarkerCategory::Warning | MarkerCategory::MultiCompany => MarkerShape::Square,
            MarkerCategory::NoCompany => MarkerShape::Cross,
        }
    }

    /// Marker color for this category.
    pub fn color<'a>(&self, styles: &'a StyleConfig, companies: &'a CompanyColorTable) -> &'a str {
        match self {
            MarkerCategory::StyledLevel(level) => styles.level_color(level).unwrap_or(styles.missing_color.as_str()),
            MarkerCategory::MissingLevel => styles.missing_color.as_str(),
            MarkerCategory::Warning => styles.warning_color.as_str(),
            MarkerCategory::SingleCompany(name) => companies.get(name).unwrap_or_else(|| styles.palette_color(0)),
            MarkerCategory::MultiCompany => styles.multi_company_color.as_str(),
            MarkerCategory::NoCompany => styles.no_company_color.as_str(),
        }
    }
}

/// A classified pole, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerFeature {
    pub position: (f64, f64), // (lat, lon)
    pub category: MarkerCategory,
    pub color: String,
    pub shape: MarkerShape,
    pub radius: u32,           // Marker radius in pixels
    pub tooltip_html: String,
    pub popup_text: Option<String>,
    pub scid: String,
    pub job_name: String,
}

impl MarkerFeature {
    #[inline] pub fn latitude(&self) -> f64 { self.position.0 }

    #[inline] pub fn longitude(&self) -> f64 { self.position.1 }
}
