use geo::{Coord, Rect};
use tracing::info;

use crate::{
    classify::{CompanyColorTable, MarkerFeature},
    config::{StyleConfig, ViewMode},
    geom::bounding_rect,
    job::JobHullFeature,
    overlay::OverlayFeature,
    scene::{legend_for, LegendEntry},
};

/// Everything a renderer needs to draw one map.
#[derive(Debug, Clone)]
pub struct Scene {
    view: ViewMode,
    markers: Vec<MarkerFeature>,
    hulls: Vec<JobHullFeature>,
    overlays: Vec<OverlayFeature>,
    legend: Vec<LegendEntry>,
    bounds: Option<Rect<f64>>,
}

impl Scene {
    #[inline] pub fn view(&self) -> ViewMode { self.view }

    #[inline] pub fn markers(&self) -> &[MarkerFeature] { &self.markers }

    /// Job boundary features. Always job labels; never toggled with overlays.
    #[inline] pub fn hulls(&self) -> &[JobHullFeature] { &self.hulls }

    /// User-editable annotation features.
    #[inline] pub fn overlays(&self) -> &[OverlayFeature] { &self.overlays }

    #[inline] pub fn legend(&self) -> &[LegendEntry] { &self.legend }

    /// Bounding box of all markers (x = longitude, y = latitude), or `None` with no markers.
    #[inline] pub fn bounds(&self) -> Option<Rect<f64>> { self.bounds }
}

/// Combine the pipeline outputs into one scene.
pub fn assemble(
    markers: Vec<MarkerFeature>,
    hulls: Vec<JobHullFeature>,
    overlays: Vec<OverlayFeature>,
    mode: ViewMode,
    styles: &StyleConfig,
    companies: &CompanyColorTable,
) -> Scene {
    let bounds = bounding_rect(markers.iter().map(|m| Coord { x: m.longitude(), y: m.latitude() }));
    let legend = legend_for(mode, styles, companies);

    info!(
        view = mode.to_str(),
        markers = markers.len(),
        hulls = hulls.len(),
        overlays = overlays.len(),
        "assembled scene"
    );

    Scene { view: mode, markers, hulls, overlays, legend, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::Classifier, record::PoleRecord};

    #[test]
    fn bounds_cover_all_markers() {
        let styles = StyleConfig::default();
        let table = CompanyColorTable::default();
        let records = vec![
            PoleRecord::new("J1", "1", 26.1, -97.5),
            PoleRecord::new("J1", "2", 26.4, -97.2),
            PoleRecord::new("J2", "3", 25.9, -97.3),
        ];
        let markers = Classifier::new(ViewMode::Mr, &styles, &table).classify_all(&records);
        let scene = assemble(markers, vec![], vec![], ViewMode::Mr, &styles, &table);

        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: -97.5, y: 25.9 });
        assert_eq!(bounds.max(), Coord { x: -97.2, y: 26.4 });
        assert_eq!(scene.markers().len(), 3);
        assert_eq!(scene.view(), ViewMode::Mr);
    }

    #[test]
    fn empty_scene_has_no_bounds() {
        let scene = assemble(vec![], vec![], vec![], ViewMode::Utility, &StyleConfig::default(), &CompanyColorTable::default());
        assert!(scene.bounds().is_none());
        assert_eq!(scene.legend().len(), 2);
    }
}
