//! Web-specific data loader that fetches game documents from the static host.

use hoyodex_core::DataLoader;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::paths::asset_path;

/// Fetches `data/<game>.json` relative to the deployment base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebDataLoader;

#[derive(Debug, Error)]
pub enum WebDataError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    #[allow(clippy::future_not_send)]
    async fn fetch_document(&self, path: &str) -> Result<String, Self::Error> {
        let url = asset_path(path);
        let response = dom::fetch_response(&url)
            .await
            .map_err(|err| WebDataError::Request(dom::js_error_message(&err)))?;

        if !response.ok() {
            return Err(WebDataError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text_js = JsFuture::from(
            response
                .text()
                .map_err(|err| WebDataError::Request(dom::js_error_message(&err)))?,
        )
        .await
        .map_err(|err| WebDataError::Request(dom::js_error_message(&err)))?;

        text_js.as_string().ok_or(WebDataError::Utf8)
    }
}
