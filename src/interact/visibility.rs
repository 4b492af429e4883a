use crate::{annotation::Annotation, job::JobHullFeature, overlay::OverlayFeature, scene::Scene};

/// Layer toggles offered by the renderer.
///
/// The markup toggle hides overlay features but never job hulls, including overlay features
/// flagged as job labels. The label toggle hides job labels only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    markups_hidden: bool,
    labels_hidden: bool,
}

impl Visibility {
    /// Flip the markup toggle; returns whether markups are now hidden.
    pub fn toggle_markups(&mut self) -> bool {
        self.markups_hidden = !self.markups_hidden;
        self.markups_hidden
    }

    /// Flip the job label toggle; returns whether labels are now hidden.
    pub fn toggle_labels(&mut self) -> bool {
        self.labels_hidden = !self.labels_hidden;
        self.labels_hidden
    }

    #[inline] pub fn markups_hidden(&self) -> bool { self.markups_hidden }

    #[inline] pub fn labels_hidden(&self) -> bool { self.labels_hidden }

    /// Overlay features currently shown.
    pub fn visible_overlays<'a>(&self, scene: &'a Scene) -> Vec<&'a OverlayFeature> {
        scene.overlays().iter()
            .filter(|feature| !self.markups_hidden || feature.is_job_label())
            .collect()
    }

    /// Job hulls are always shown.
    pub fn visible_hulls<'a>(&self, scene: &'a Scene) -> &'a [JobHullFeature] {
        scene.hulls()
    }

    /// Job label texts currently shown.
    pub fn visible_hull_labels<'a>(&self, scene: &'a Scene) -> Vec<&'a str> {
        if self.labels_hidden { return Vec::new() }
        scene.hulls().iter()
            .filter_map(|hull| hull.label())
            .collect()
    }
}
