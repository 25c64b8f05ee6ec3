//! Multipart form intake.
//!
//! Text fields: `personal_info`, `job_posting`, `availability`, `model`, `language`, `session_id`.
//! File fields: `personal_file`, `job_file` (plain UTF-8 text). A file is used only
//! when the matching text field is blank.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::letter::{CoverLetterRequest, LetterModel};

#[derive(Debug, Default)]
pub struct UploadForm {
    pub personal_info: Option<String>,
    pub job_posting: Option<String>,
    pub availability: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub session_id: Option<String>,
    pub personal_file: Option<Bytes>,
    pub job_file: Option<Bytes>,
}

impl UploadForm {
    /// Resolves text-vs-file precedence and parses the model selection.
    pub fn into_request(self) -> Result<CoverLetterRequest, AppError> {
        let personal_info = pick_text(self.personal_info, self.personal_file, "personal_file")?;
        let job_posting = pick_text(self.job_posting, self.job_file, "job_file")?;

        let model = match self.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            Some(name) => name.parse::<LetterModel>().map_err(AppError::Validation)?,
            None => LetterModel::default(),
        };

        Ok(CoverLetterRequest {
            personal_info,
            job_posting,
            availability: self.availability,
            model,
            language: self.language,
            session_id: self.session_id,
        })
    }
}

fn pick_text(text: Option<String>, file: Option<Bytes>, field: &str) -> Result<String, AppError> {
    let text = text.unwrap_or_default();
    // Empty-only check: whitespace typed into the field still counts as text.
    if !text.is_empty() {
        return Ok(text);
    }
    match file {
        Some(bytes) if !bytes.is_empty() => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::Validation(format!("Uploaded {field} must be UTF-8 plain text"))
        }),
        _ => Ok(text),
    }
}

/// Reads all form fields. Unknown fields are ignored.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;
        debug!("Multipart field '{name}': {} bytes", data.len());

        match name.as_str() {
            "personal_file" => form.personal_file = Some(data),
            "job_file" => form.job_file = Some(data),
            "personal_info" => form.personal_info = Some(field_text(&name, data)?),
            "job_posting" => form.job_posting = Some(field_text(&name, data)?),
            "availability" => form.availability = Some(field_text(&name, data)?),
            "model" => form.model = Some(field_text(&name, data)?),
            "language" => form.language = Some(field_text(&name, data)?),
            "session_id" => form.session_id = Some(field_text(&name, data)?),
            other => warn!("Ignoring unknown multipart field '{other}'"),
        }
    }

    Ok(form)
}

fn field_text(name: &str, data: Bytes) -> Result<String, AppError> {
    String::from_utf8(data.to_vec())
        .map_err(|_| AppError::Validation(format!("Field '{name}' must be UTF-8 text")))
}
