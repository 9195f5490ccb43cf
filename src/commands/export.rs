//! Export Commands
//!
//! Server-rendered JSON/CSV documents, returned as raw bytes.

use serde::Serialize;

use super::post_for_bytes;
use crate::error::ClientError;
use crate::models::SolveResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportJsonArgs<'a> {
    result: &'a SolveResult,
    include_steps: bool,
}

#[derive(Serialize)]
struct ExportCsvArgs<'a> {
    result: &'a SolveResult,
}

#[derive(Serialize)]
struct ExportComparisonArgs<'a> {
    results: &'a [SolveResult],
}

pub async fn export_json(base: &str, result: &SolveResult, include_steps: bool) -> Result<Vec<u8>, ClientError> {
    post_for_bytes(base, "/export/json", &ExportJsonArgs { result, include_steps }).await
}

pub async fn export_csv(base: &str, result: &SolveResult) -> Result<Vec<u8>, ClientError> {
    post_for_bytes(base, "/export/csv", &ExportCsvArgs { result }).await
}

pub async fn export_comparison_csv(base: &str, results: &[SolveResult]) -> Result<Vec<u8>, ClientError> {
    post_for_bytes(base, "/export/comparison-csv", &ExportComparisonArgs { results }).await
}
