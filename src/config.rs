//! JSON configuration for the demo tooling.
use crate::color::HsvRange;
use crate::edges::EdgeOptions;
use crate::segments::HoughOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// Image the pipeline is run on; frame geometry is taken from it.
    pub input: PathBuf,
    #[serde(default)]
    pub hsv: HsvRange,
    #[serde(default)]
    pub edge: EdgeOptions,
    #[serde(default)]
    pub hough: HoughOptions,
    #[serde(default)]
    pub output: DemoOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoOutputConfig {
    /// Where to write the JSON report; omit to print text only.
    pub report_json: Option<PathBuf>,
    /// Directory for intermediate mask/edge PNGs; omit to skip.
    pub debug_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
