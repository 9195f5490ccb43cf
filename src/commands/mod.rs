//! Solver Service Commands
//!
//! Frontend bindings to the remote solver's HTTP endpoints, organized by domain.

mod catalog;
mod export;
mod solve;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::ClientError;
use crate::items::Problem;
use crate::models::{AlgorithmDescriptor, Preset, Recommendation, SolveResult};

// Re-export all public items
pub use catalog::*;
pub use export::*;
pub use solve::*;

/// The remote solver as seen by the rest of the app.
///
/// `HttpApi` talks to the real service; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait KnapsackApi {
    async fn presets(&self) -> Result<Vec<Preset>, ClientError>;

    async fn algorithms(&self) -> Result<Vec<AlgorithmDescriptor>, ClientError>;

    async fn recommend(&self, problem: &Problem) -> Result<Recommendation, ClientError>;

    async fn solve(&self, problem: &Problem, algorithm: &str) -> Result<SolveResult, ClientError>;

    async fn compare(&self, problem: &Problem) -> Result<Vec<SolveResult>, ClientError>;

    async fn export_json(&self, result: &SolveResult, include_steps: bool) -> Result<Vec<u8>, ClientError>;

    async fn export_csv(&self, result: &SolveResult) -> Result<Vec<u8>, ClientError>;

    async fn export_comparison_csv(&self, results: &[SolveResult]) -> Result<Vec<u8>, ClientError>;
}

/// `fetch`-based client for the solver service
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl KnapsackApi for HttpApi {
    async fn presets(&self) -> Result<Vec<Preset>, ClientError> {
        list_presets(&self.base_url).await
    }

    async fn algorithms(&self) -> Result<Vec<AlgorithmDescriptor>, ClientError> {
        list_algorithms(&self.base_url).await
    }

    async fn recommend(&self, problem: &Problem) -> Result<Recommendation, ClientError> {
        recommend(&self.base_url, problem).await
    }

    async fn solve(&self, problem: &Problem, algorithm: &str) -> Result<SolveResult, ClientError> {
        solve(&self.base_url, problem, algorithm).await
    }

    async fn compare(&self, problem: &Problem) -> Result<Vec<SolveResult>, ClientError> {
        compare(&self.base_url, problem).await
    }

    async fn export_json(&self, result: &SolveResult, include_steps: bool) -> Result<Vec<u8>, ClientError> {
        export_json(&self.base_url, result, include_steps).await
    }

    async fn export_csv(&self, result: &SolveResult) -> Result<Vec<u8>, ClientError> {
        export_csv(&self.base_url, result).await
    }

    async fn export_comparison_csv(&self, results: &[SolveResult]) -> Result<Vec<u8>, ClientError> {
        export_comparison_csv(&self.base_url, results).await
    }
}

// ========================
// Transport
// ========================

fn transport(path: &str, err: &JsValue) -> ClientError {
    ClientError::Transport {
        endpoint: path.to_string(),
        message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

async fn send(base: &str, method: &str, path: &str, body: Option<String>) -> Result<Response, ClientError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(body) = body {
        let headers = Headers::new().map_err(|e| transport(path, &e))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| transport(path, &e))?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", base, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| transport(path, &e))?;
    let window = web_sys::window().ok_or_else(|| transport(path, &JsValue::from_str("no window")))?;

    log::debug!("{} {}", method, url);
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| transport(path, &e))?;
    response.dyn_into::<Response>().map_err(|e| transport(path, &e))
}

async fn read_text(path: &str, response: &Response) -> Result<String, ClientError> {
    let promise = response.text().map_err(|e| transport(path, &e))?;
    let text = JsFuture::from(promise).await.map_err(|e| transport(path, &e))?;
    Ok(text.as_string().unwrap_or_default())
}

async fn read_bytes(path: &str, response: &Response) -> Result<Vec<u8>, ClientError> {
    let promise = response.array_buffer().map_err(|e| transport(path, &e))?;
    let buffer = JsFuture::from(promise).await.map_err(|e| transport(path, &e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn encode<B: Serialize>(path: &str, body: &B) -> Result<String, ClientError> {
    serde_json::to_string(body).map_err(|e| ClientError::Decode {
        endpoint: path.to_string(),
        message: e.to_string(),
    })
}

pub(crate) async fn get_json<T: DeserializeOwned>(base: &str, path: &str) -> Result<T, ClientError> {
    let response = send(base, "GET", path, None).await?;
    let body = read_text(path, &response).await?;
    decode_reply(path, response.status(), &body)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    base: &str,
    path: &str,
    body: &B,
) -> Result<T, ClientError> {
    let response = send(base, "POST", path, Some(encode(path, body)?)).await?;
    let body = read_text(path, &response).await?;
    decode_reply(path, response.status(), &body)
}

pub(crate) async fn post_for_bytes<B: Serialize>(base: &str, path: &str, body: &B) -> Result<Vec<u8>, ClientError> {
    let response = send(base, "POST", path, Some(encode(path, body)?)).await?;
    let bytes = read_bytes(path, &response).await?;
    check_download(path, response.status(), bytes)
}

// ========================
// Reply Decoding
// ========================

fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// An `error` field anywhere a payload is expected short-circuits the call.
fn service_error(value: &Value) -> Option<ClientError> {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(|message| ClientError::Service(message.to_string()))
}

pub(crate) fn decode_reply<T: DeserializeOwned>(path: &str, status: u16, body: &str) -> Result<T, ClientError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !is_success(status) => {
            return Err(ClientError::Transport {
                endpoint: path.to_string(),
                message: format!("HTTP {}", status),
            })
        }
        Err(e) => {
            return Err(ClientError::Decode {
                endpoint: path.to_string(),
                message: e.to_string(),
            })
        }
    };

    if let Some(err) = service_error(&value) {
        return Err(err);
    }
    if !is_success(status) {
        return Err(ClientError::Transport {
            endpoint: path.to_string(),
            message: format!("HTTP {}", status),
        });
    }
    serde_json::from_value(value).map_err(|e| ClientError::Decode {
        endpoint: path.to_string(),
        message: e.to_string(),
    })
}

/// Export bodies are opaque documents; only failed statuses are inspected.
pub(crate) fn check_download(path: &str, status: u16, bytes: Vec<u8>) -> Result<Vec<u8>, ClientError> {
    if is_success(status) {
        return Ok(bytes);
    }
    let reported = serde_json::from_slice::<Value>(&bytes)
        .ok()
        .and_then(|value| service_error(&value));
    Err(reported.unwrap_or_else(|| ClientError::Transport {
        endpoint: path.to_string(),
        message: format!("HTTP {}", status),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_short_circuits() {
        let reply: Result<SolveResult, _> = decode_reply("/solve", 400, r#"{"error": "Capacity must be greater than 0"}"#);
        assert_eq!(reply, Err(ClientError::Service("Capacity must be greater than 0".to_string())));

        // Even on a 200
        let reply: Result<SolveResult, _> = decode_reply("/solve", 200, r#"{"error": "Server error: boom"}"#);
        assert_eq!(reply, Err(ClientError::Service("Server error: boom".to_string())));
    }

    #[test]
    fn test_non_json_failure_is_transport() {
        let reply: Result<SolveResult, _> = decode_reply("/solve", 502, "<html>Bad Gateway</html>");
        assert_eq!(
            reply,
            Err(ClientError::Transport { endpoint: "/solve".to_string(), message: "HTTP 502".to_string() })
        );
    }

    #[test]
    fn test_malformed_success_is_decode_error() {
        let reply: Result<SolveResult, _> = decode_reply("/solve", 200, r#"{"maxProfit": "lots"}"#);
        assert!(matches!(reply, Err(ClientError::Decode { .. })));
    }

    #[test]
    fn test_decodes_payload() {
        let reply: Recommendation = decode_reply(
            "/recommend",
            200,
            r#"{
                "algorithm": "dp-tabulation",
                "confidence": 0.95,
                "reason": "Medium dataset",
                "estimatedTime": 0.15,
                "metadata": {
                    "id": "dp-tabulation",
                    "name": "DP Tabulation",
                    "description": "Bottom-up dynamic programming",
                    "timeComplexity": "O(n × W)",
                    "spaceComplexity": "O(n × W)",
                    "optimal": true
                }
            }"#,
        )
        .unwrap();
        assert_eq!(reply.metadata.id, "dp-tabulation");
        assert_eq!(reply.metadata.optimal, Some(true));
    }

    #[test]
    fn test_download_error_body() {
        let body = br#"{"error": "Export error: 'algorithm'"}"#.to_vec();
        assert_eq!(
            check_download("/export/json", 500, body),
            Err(ClientError::Service("Export error: 'algorithm'".to_string()))
        );
        assert_eq!(check_download("/export/csv", 200, b"item,weight\n".to_vec()), Ok(b"item,weight\n".to_vec()));
    }
}
