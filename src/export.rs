//! Result Export
//!
//! Asks the service to render a result as JSON or CSV, then hands the bytes
//! to the browser as a file download.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::commands::KnapsackApi;
use crate::error::ClientError;
use crate::models::SolveResult;

pub const COMPARISON_FILENAME: &str = "algorithm-comparison.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Json => "knapsack-result.json",
            ExportFormat::Csv => "knapsack-result.csv",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

/// Somewhere exported bytes end up
pub trait FileSink {
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ClientError>;
}

/// Saves through a temporary object URL and a synthetic link click
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

fn download_error(err: JsValue) -> ClientError {
    ClientError::Download(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl FileSink for BrowserDownload {
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ClientError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ClientError::Download("no document".to_string()))?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let bag = BlobPropertyBag::new();
        bag.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag).map_err(download_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(download_error)?;

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(download_error)?
            .dyn_into()
            .map_err(|_| ClientError::Download("anchor element unavailable".to_string()))?;
        link.set_href(&url);
        link.set_download(filename);

        let clicked = match document.body() {
            Some(body) => body.append_child(&link).map(|_| {
                link.click();
                link.remove();
            }),
            None => {
                link.click();
                Ok(())
            }
        };
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("could not revoke {}: {:?}", url, e);
        }
        clicked.map_err(download_error)
    }
}

/// Export the displayed result. Returns the saved filename.
pub async fn export_result<A: KnapsackApi, S: FileSink>(
    api: &A,
    sink: &S,
    format: ExportFormat,
    current: Option<&SolveResult>,
) -> Result<&'static str, ClientError> {
    let result = current.ok_or(ClientError::NothingToExport)?;

    let bytes = match format {
        ExportFormat::Json => api.export_json(result, true).await?,
        ExportFormat::Csv => api.export_csv(result).await?,
    };

    let filename = format.filename();
    sink.save(filename, format.mime(), &bytes)?;
    log::info!("exported {} ({} bytes)", filename, bytes.len());
    Ok(filename)
}

/// Export the displayed comparison table as CSV.
pub async fn export_comparison<A: KnapsackApi, S: FileSink>(
    api: &A,
    sink: &S,
    results: Option<&[SolveResult]>,
) -> Result<&'static str, ClientError> {
    let results = results
        .filter(|results| !results.is_empty())
        .ok_or(ClientError::NothingToExport)?;

    let bytes = api.export_comparison_csv(results).await?;
    sink.save(COMPARISON_FILENAME, ExportFormat::Csv.mime(), &bytes)?;
    log::info!("exported {} ({} bytes)", COMPARISON_FILENAME, bytes.len());
    Ok(COMPARISON_FILENAME)
}
