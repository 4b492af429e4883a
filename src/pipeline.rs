use tracing::info;

use crate::{
    classify::{Classifier, CompanyColorTable},
    config::{MapConfig, ViewMode},
    error::{OverlayLoadError, PipelineError},
    job::aggregate,
    overlay::merge,
    record::{filter, ColumnGroups, FilterStats, RowTable},
    scene::{assemble, Scene},
};

/// Result of one run: the scene, filter counts, and the overlay failure, if any.
#[derive(Debug)]
pub struct SceneBuild {
    pub scene: Scene,
    pub stats: FilterStats,
    pub overlay_error: Option<OverlayLoadError>,
}

/// Run the full pipeline over an input table.
///
/// Fails only when required columns are missing. An unreadable overlay is reported in
/// [`SceneBuild::overlay_error`] and the scene is built without overlays.
pub fn build_scene(table: &RowTable, config: &MapConfig) -> Result<SceneBuild, PipelineError> {
    let groups = ColumnGroups::detect(table.columns())?;
    let filtered = filter(table.rows(), &groups, config.view);

    let companies = match config.view {
        ViewMode::Utility => CompanyColorTable::build(&filtered.records, &config.styles),
        ViewMode::Mr => CompanyColorTable::default(),
    };

    let markers = Classifier::new(config.view, &config.styles, &companies).classify_all(&filtered.records);
    let hulls = aggregate(&filtered.records);
    let overlays = merge(config.overlay.as_deref());

    info!(
        rows = table.len(),
        kept = filtered.stats.kept,
        companies = companies.len(),
        "built scene"
    );

    let scene = assemble(markers, hulls, overlays.features, config.view, &config.styles, &companies);
    Ok(SceneBuild { scene, stats: filtered.stats, overlay_error: overlays.error })
}
