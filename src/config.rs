use std::{fs, path::{Path, PathBuf}};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Which attribute family the map classifies poles by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Mr,         // Make-ready level and cost
    Utility,    // Owning company
}

impl ViewMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            ViewMode::Mr => "mr",
            ViewMode::Utility => "utility",
        }
    }
}

/// A named color, used for MR level styles and fixed company colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub color: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

/// Alternate spelling of a company name, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAlias {
    pub alias: String,
    pub canonical: String,
}

/// Immutable style tables injected into classification and legend building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub levels: Vec<ColorEntry>,
    pub missing_color: String,
    pub warning_color: String,
    pub multi_company_color: String,
    pub no_company_color: String,
    pub palette: Vec<String>,
    pub known_companies: Vec<ColorEntry>,
    pub company_aliases: Vec<CompanyAlias>,
    pub markup_colors: Vec<String>,
    pub marker_radius: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            levels: vec![
                ColorEntry::new("No MR", "green"),
                ColorEntry::new("Comm MR", "yellow"),
                ColorEntry::new("Simple Power MR", "orange"),
                ColorEntry::new("Complex Power MR", "red"),
                ColorEntry::new("Deferred", "gray"),
                ColorEntry::new("Cannot Attach", "black"),
            ],
            missing_color: "purple".into(),
            warning_color: "aqua".into(),
            multi_company_color: "red".into(),
            no_company_color: "red".into(),
            palette: strings(&["blue", "darkblue", "teal", "navy", "magenta", "lime"]),
            known_companies: vec![
                ColorEntry::new("Magic Valley Electric Coop", "#98ff98"),
                ColorEntry::new("AEP", "orange"),
                ColorEntry::new("Brownsville Public Utilities", "aqua"),
                ColorEntry::new("Central Bradford PA", "yellow"),
            ],
            company_aliases: vec![
                CompanyAlias { alias: "magic valley elec coop".into(), canonical: "Magic Valley Electric Coop".into() },
                CompanyAlias { alias: "magic valley electric coop".into(), canonical: "Magic Valley Electric Coop".into() },
            ],
            markup_colors: strings(&["red", "orange", "yellow", "green", "blue", "purple", "aqua", "lime", "black"]),
            marker_radius: 6,
        }
    }
}

impl StyleConfig {
    /// Load a style file; keys left out keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("[config] Failed to read style file: {}", path.display()))?;
        let styles: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("[config] Failed to parse style file {:?}", path))?;
        styles.validate()?;
        Ok(styles)
    }

    /// Check the invariants classification relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.palette.is_empty(), "[config] Style palette must contain at least one color");
        ensure!(!self.markup_colors.is_empty(), "[config] Markup color list must contain at least one color");
        Ok(())
    }

    /// Color for a known MR level, if the level has a style entry.
    pub fn level_color(&self, level: &str) -> Option<&str> {
        self.levels.iter()
            .find(|entry| entry.name == level)
            .map(|entry| entry.color.as_str())
    }

    /// Palette color at `index`, wrapping around once the palette is exhausted.
    pub fn palette_color(&self, index: usize) -> &str {
        match self.palette.len() {
            0 => "blue",
            n => &self.palette[index % n],
        }
    }
}

/// Run configuration: view mode, optional overlay source, style tables.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    pub view: ViewMode,
    pub overlay: Option<PathBuf>,
    pub styles: StyleConfig,
}

impl MapConfig {
    pub fn new(view: ViewMode) -> Self {
        Self { view, ..Default::default() }
    }

    pub fn with_overlay(mut self, path: impl Into<PathBuf>) -> Self {
        self.overlay = Some(path.into());
        self
    }

    pub fn with_styles(mut self, styles: StyleConfig) -> Self {
        self.styles = styles;
        self
    }
}
