//! Translation providers behind one trait, so a provider outage is a
//! configuration concern rather than a code-path branch.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const PROVIDER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned status {status}")]
    Api { provider: &'static str, status: u16 },

    #[error("{provider} returned an unexpected payload")]
    Payload { provider: &'static str },
}

/// A single translation backend. The pipeline tries providers in a fixed
/// order decided at startup; no shared engine state is mutated per call.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}

/// Google's unauthenticated gtx endpoint. Responds with a nested JSON array
/// whose first element lists translated segments.
pub struct GoogleTranslate {
    client: Client,
}

impl GoogleTranslate {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(PROVIDER_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(GOOGLE_TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Api {
                provider: self.name(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        parse_google_segments(&body).ok_or(TranslateError::Payload {
            provider: self.name(),
        })
    }
}

/// Joins the translated segments of a gtx response body.
fn parse_google_segments(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let mut out = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(Value::as_str) {
            out.push_str(piece);
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// A LibreTranslate instance; the endpoint is configurable so self-hosted
/// deployments work without code changes.
pub struct LibreTranslate {
    client: Client,
    endpoint: String,
}

impl LibreTranslate {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(PROVIDER_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslate {
    fn name(&self) -> &'static str {
        "libre"
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let request = LibreRequest {
            q: text,
            source: "auto",
            target,
            format: "text",
        };

        let response = self
            .client
            .post(format!("{}/translate", self.endpoint))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Api {
                provider: self.name(),
                status: status.as_u16(),
            });
        }

        let payload: LibreResponse = response.json().await?;
        if payload.translated_text.is_empty() {
            return Err(TranslateError::Payload {
                provider: self.name(),
            });
        }
        Ok(payload.translated_text)
    }
}
