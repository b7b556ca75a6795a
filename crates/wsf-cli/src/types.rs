use std::path::PathBuf;

use serde::Serialize;

use wsf_model::FlattenOptions;
use wsf_transform::ReshapeSummary;

#[derive(Debug, Serialize)]
pub struct FlattenResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: FlattenOptions,
    pub duration_ms: u128,
    #[serde(flatten)]
    pub summary: ReshapeSummary,
}
