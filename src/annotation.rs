//! Editable style shared by job hulls and overlay features.

pub(crate) const DEFAULT_COLOR: &str = "blue";
pub(crate) const DEFAULT_LABEL_SIZE: u32 = 10;
pub(crate) const DEFAULT_OPACITY: f64 = 0.95;

/// User-editable style of an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStyle {
    pub color: String,
    pub label: Option<String>,
    pub label_size: u32,
    pub opacity: f64,
}

impl Default for FeatureStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.into(),
            label: None,
            label_size: DEFAULT_LABEL_SIZE,
            opacity: DEFAULT_OPACITY,
        }
    }
}

/// A feature whose style can be read and persisted by the editor.
pub trait Annotation {
    /// Current style, with defaults filled in for absent attributes.
    fn style(&self) -> FeatureStyle;

    /// Persist a style onto the feature.
    fn set_style(&mut self, style: &FeatureStyle);

    /// Job labels are never hidden by the markup toggle.
    fn is_job_label(&self) -> bool { false }
}
