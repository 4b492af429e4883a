use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use polemap::{build_scene, read_rows_csv, write_scene, MapConfig, StyleConfig};
use tracing::info;

use crate::cli::{BuildArgs, Cli};

pub fn run(_cli: &Cli, args: &BuildArgs) -> Result<()> {
    let out_path: PathBuf = args.output.clone().unwrap_or("./map.geojson".into());

    // Assert output path is not stdout
    if out_path == Path::new("-") { bail!("stdout is not supported."); }
    if out_path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", out_path.display());
    }

    let styles = match &args.styles {
        Some(path) => StyleConfig::from_json_file(path)?,
        None => StyleConfig::default(),
    };
    let mut config = MapConfig::new(args.view.into()).with_styles(styles);
    if let Some(overlay) = &args.overlay { config = config.with_overlay(overlay.clone()) }

    info!(input = %args.input.display(), view = config.view.to_str(), "[build] loading survey rows");
    let table = read_rows_csv(&args.input)?;

    // An unreadable markup file is logged at warn by the overlay merger.
    let build = build_scene(&table, &config)?;

    info!(output = %out_path.display(), "[build] writing scene");
    write_scene(&out_path, &build.scene)?;

    println!(
        "Wrote {} markers, {} job outlines and {} markups to {}",
        build.scene.markers().len(),
        build.scene.hulls().len(),
        build.scene.overlays().len(),
        out_path.display()
    );
    Ok(())
}
