//! Axum route handler for on-demand translation of arbitrary text.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::text::strip_html;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated: String,
}

/// POST /api/v1/jobs/translate
///
/// Cleans the submitted text and runs it through the translation pipeline.
/// Translation failures fall back to the cleaned input; the only
/// client-facing error is an empty submission.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text provided for translation".to_string(),
        ));
    }

    let cleaned = strip_html(&request.text);
    let translated = state.translator.translate_to_english(&cleaned).await;

    Ok(Json(TranslateResponse { translated }))
}
