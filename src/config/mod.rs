use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Vertex;
use crate::error::RasterError;
use crate::raster::Grid;

fn default_columns() -> usize {
    100
}
fn default_rows() -> usize {
    100
}
fn default_step() -> f64 {
    1.0
}
fn default_inside_char() -> char {
    '+'
}
fn default_outside_char() -> char {
    '.'
}

/// Rasterization settings, usually read from `pnpoly.toml`
///
/// The defaults sample the integer lattice `0..100 x 0..100`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RasterConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default)]
    pub origin_x: f64,
    #[serde(default)]
    pub origin_y: f64,
    #[serde(default = "default_inside_char")]
    pub inside_char: char,
    #[serde(default = "default_outside_char")]
    pub outside_char: char,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            step: default_step(),
            origin_x: 0.0,
            origin_y: 0.0,
            inside_char: default_inside_char(),
            outside_char: default_outside_char(),
        }
    }
}

impl RasterConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse raster config")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Search the usual locations and return the first config that parses
    pub fn load() -> Option<Self> {
        Self::load_from_paths(&get_config_paths())
    }

    /// First config among `paths` that exists and parses, in order
    pub fn load_from_paths(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from(path) {
                Ok(config) => {
                    debug!("loaded raster config from {}", path.display());
                    return Some(config);
                }
                Err(e) => warn!("Skipping config file {}: {:#}", path.display(), e),
            }
        }
        None
    }

    pub fn grid(&self) -> Result<Grid, RasterError> {
        Grid::new(
            Vertex::new(self.origin_x, self.origin_y),
            self.columns,
            self.rows,
            self.step,
        )
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("pnpoly.toml"));
    paths.push(PathBuf::from(".pnpoly.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("pnpoly").join("config.toml"));
        paths.push(config_dir.join("pnpoly.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".pnpoly.toml"));
    }

    paths
}
