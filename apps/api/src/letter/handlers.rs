//! Axum route handlers for the Cover Letter API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::letter::pipeline::{generate_letter, render_letter_pdf, run_pipeline, RenderedLetter};
use crate::letter::upload::read_upload_form;
use crate::models::letter::{CoverLetterRequest, GeneratedLetter, LetterModel};
use crate::render::{PDF_FILE_NAME, PDF_MIME_TYPE};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LetterPreviewResponse {
    pub id: Uuid,
    pub letter: String,
    pub model: LetterModel,
    pub generated_at: DateTime<Utc>,
}

impl From<GeneratedLetter> for LetterPreviewResponse {
    fn from(letter: GeneratedLetter) -> Self {
        Self {
            id: letter.id,
            letter: letter.text,
            model: letter.model,
            generated_at: letter.generated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub letter: String,
    #[serde(default)]
    pub author: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cover-letters
///
/// Generates a letter and returns it for preview.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<LetterPreviewResponse>, AppError> {
    preview(&state, request).await
}

/// POST /api/v1/cover-letters/upload
///
/// Multipart variant of `handle_generate`; uploaded text files fill blank fields.
pub async fn handle_generate_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<LetterPreviewResponse>, AppError> {
    let request = read_upload_form(multipart).await?.into_request()?;
    preview(&state, request).await
}

/// POST /api/v1/cover-letters/pdf
///
/// Full pipeline: generate, paginate, and return the PDF as an attachment.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Response, AppError> {
    let _guard = state.gate.acquire_for(request.session_id.as_deref())?;

    let artifact = run_pipeline(
        state.llm.as_ref(),
        &state.settings,
        &state.page_geometry,
        &request,
    )
    .await?;

    info!("Serving cover letter {} as {PDF_FILE_NAME}", artifact.letter.id);
    Ok(pdf_response(artifact.pdf))
}

/// POST /api/v1/render
///
/// Renders an already generated (possibly edited) letter without calling the provider.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let author = request
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or("Candidate");

    let rendered = render_letter_pdf(request.letter.trim(), author, &state.page_geometry).await?;
    Ok(pdf_response(rendered))
}

async fn preview(
    state: &AppState,
    request: CoverLetterRequest,
) -> Result<Json<LetterPreviewResponse>, AppError> {
    let _guard = state.gate.acquire_for(request.session_id.as_deref())?;
    let letter = generate_letter(state.llm.as_ref(), &state.settings, &request).await?;
    Ok(Json(letter.into()))
}

fn pdf_response(rendered: RenderedLetter) -> Response {
    (
        [
            (header::CONTENT_TYPE, PDF_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILE_NAME}\""),
            ),
        ],
        [("x-page-count", rendered.page_count.to_string())],
        rendered.bytes,
    )
        .into_response()
}
