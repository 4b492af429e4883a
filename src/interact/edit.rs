use serde_json::{Map, Value};

use crate::{
    annotation::{Annotation, FeatureStyle},
    config::StyleConfig,
    error::EditError,
    overlay::OverlayFeature,
};

/// State of a feature edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(FeatureStyle),      // Draft style, not yet persisted
    Committed(FeatureStyle),    // Style written back onto the feature
    Cancelled,
}

/// Edit cycle for a single feature: `Idle -> Editing -> Committed | Cancelled`.
///
/// The renderer drives it from its edit interaction (e.g. a right-click). Colors are limited to
/// the markup palette; label size and opacity accept raw user input and keep the previous value
/// when the input does not parse.
#[derive(Debug, Clone)]
pub struct FeatureEditor {
    palette: Vec<String>,
    state: EditState,
}

impl FeatureEditor {
    pub fn new(palette: Vec<String>) -> Self {
        Self { palette, state: EditState::Idle }
    }

    pub fn from_styles(styles: &StyleConfig) -> Self {
        Self::new(styles.markup_colors.clone())
    }

    #[inline] pub fn state(&self) -> &EditState { &self.state }

    #[inline] pub fn palette(&self) -> &[String] { &self.palette }

    /// Start editing a feature, replacing any edit in progress.
    pub fn begin<A: Annotation>(&mut self, feature: &A) {
        self.state = EditState::Editing(feature.style());
    }

    /// Create a feature for a newly drawn shape and start editing it immediately.
    pub fn begin_drawn(&mut self, geometry: Value) -> OverlayFeature {
        let feature = OverlayFeature::new(geometry, Map::new());
        self.begin(&feature);
        feature
    }

    /// Set the draft color. Blank input keeps the current color.
    pub fn set_color(&mut self, input: &str) -> Result<(), EditError> {
        let palette = &self.palette;
        let draft = Self::draft(&mut self.state)?;
        let input = input.trim();
        if input.is_empty() { return Ok(()) }

        let color = palette.iter()
            .find(|c| c.eq_ignore_ascii_case(input))
            .ok_or_else(|| EditError::ColorNotInPalette { color: input.to_string(), allowed: palette.clone() })?;
        draft.color = color.clone();
        Ok(())
    }

    /// Set the draft label. Blank input clears it.
    pub fn set_label(&mut self, input: &str) -> Result<(), EditError> {
        let draft = Self::draft(&mut self.state)?;
        draft.label = Some(input.trim()).filter(|s| !s.is_empty()).map(str::to_string);
        Ok(())
    }

    /// Set the draft label size in pixels from user input.
    pub fn set_label_size(&mut self, input: &str) -> Result<(), EditError> {
        let draft = Self::draft(&mut self.state)?;
        if let Some(size) = input.trim().parse::<u32>().ok().filter(|&size| size > 0) {
            draft.label_size = size;
        }
        Ok(())
    }

    /// Set the draft opacity from a percentage, clamped to `[0, 100]`.
    pub fn set_opacity_percent(&mut self, input: &str) -> Result<(), EditError> {
        let draft = Self::draft(&mut self.state)?;
        if let Some(percent) = input.trim().parse::<f64>().ok().filter(|p| p.is_finite()) {
            draft.opacity = percent.clamp(0.0, 100.0) / 100.0;
        }
        Ok(())
    }

    /// Persist the draft onto the feature.
    pub fn commit<A: Annotation>(&mut self, feature: &mut A) -> Result<FeatureStyle, EditError> {
        let draft = Self::draft(&mut self.state)?.clone();
        feature.set_style(&draft);
        self.state = EditState::Committed(draft.clone());
        Ok(draft)
    }

    /// Abandon the draft; the feature is left untouched.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        Self::draft(&mut self.state)?;
        self.state = EditState::Cancelled;
        Ok(())
    }

    fn draft(state: &mut EditState) -> Result<&mut FeatureStyle, EditError> {
        match state {
            EditState::Editing(draft) => Ok(draft),
            _ => Err(EditError::NotEditing),
        }
    }
}
