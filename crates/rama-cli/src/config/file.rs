use crate::error::{CliError, Result};
use ramakit::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileResidueSpecifier {
    #[serde(rename = "chain-id")]
    pub chain_id: char,
    #[serde(rename = "residue-number")]
    pub residue_number: isize,
}

impl From<FileResidueSpecifier> for core_config::ResidueSpecifier {
    fn from(p: FileResidueSpecifier) -> Self {
        Self {
            chain_id: p.chain_id,
            residue_number: p.residue_number,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSelectionConfig {
    pub phi_atoms: Option<Vec<String>>,
    pub psi_atoms: Option<Vec<String>>,
    pub residue: Option<FileResidueSpecifier>,
    /// Backbone naming convention file, relative to the configuration file.
    pub convention: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileScanConfig {
    pub residue: Option<String>,
    pub phi_start: Option<f64>,
    pub phi_end: Option<f64>,
    pub phi_steps: Option<usize>,
    pub psi_start: Option<f64>,
    pub psi_end: Option<f64>,
    pub psi_steps: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileFigureConfig {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub marker_radius: Option<f64>,
    pub scatter_color: Option<String>,
    pub phi_color: Option<String>,
    pub psi_color: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub selection: Option<FileSelectionConfig>,
    pub scan: Option<FileScanConfig>,
    pub figure: Option<FileFigureConfig>,

    /// Directory of the file this configuration was read from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Resolves a path given in the file against the file's own directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
