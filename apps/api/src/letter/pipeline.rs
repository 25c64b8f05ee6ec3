//! Cover Letter Pipeline — the one path from user input to a downloadable PDF.
//!
//! Flow: validate → compose → provider call → trim → paginate → render.
//!
//! Validation failures stop before the provider is called. Provider failures are
//! returned as-is, never retried, and no partial letter is produced.

use tracing::info;

use crate::errors::AppError;
use crate::layout::{paginate, PageGeometry};
use crate::letter::composer::{compose_request, GenerationSettings};
use crate::llm_client::CompletionProvider;
use crate::models::letter::{CoverLetterRequest, GeneratedLetter};
use crate::render::render_pdf;

/// An encoded letter ready for download.
#[derive(Debug, Clone)]
pub struct RenderedLetter {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Both artifacts of a full pipeline run.
#[derive(Debug, Clone)]
pub struct LetterArtifact {
    pub letter: GeneratedLetter,
    pub pdf: RenderedLetter,
}

/// Validates and composes the request, then asks the provider for the letter text.
pub async fn generate_letter(
    provider: &dyn CompletionProvider,
    settings: &GenerationSettings,
    request: &CoverLetterRequest,
) -> Result<GeneratedLetter, AppError> {
    let payload = compose_request(request, settings)?;

    info!(
        "Requesting cover letter: model={}, personal_chars={}, job_chars={}",
        payload.model,
        request.personal_info.len(),
        request.job_posting.len()
    );

    let text = provider.complete(&payload).await?;
    let letter = GeneratedLetter::new(&text, request.model);

    info!(
        "Cover letter {} generated: {} chars",
        letter.id,
        letter.text.len()
    );
    Ok(letter)
}

/// Paginates and encodes `text`. Any text renders, including an empty string.
///
/// Layout and encoding are CPU-bound and run via `spawn_blocking`.
pub async fn render_letter_pdf(
    text: &str,
    author: &str,
    geometry: &PageGeometry,
) -> Result<RenderedLetter, AppError> {
    let text = text.to_string();
    let author = author.to_string();
    let geometry = geometry.clone();

    tokio::task::spawn_blocking(move || -> Result<RenderedLetter, AppError> {
        let document = paginate(&text, &geometry);
        let bytes = render_pdf(&document, &author)?;
        Ok(RenderedLetter {
            bytes,
            page_count: document.page_count(),
        })
    })
    .await
    .map_err(|e| AppError::Render(format!("spawn_blocking failed in PDF render: {e}")))?
}

/// Runs the whole pipeline for one request.
pub async fn run_pipeline(
    provider: &dyn CompletionProvider,
    settings: &GenerationSettings,
    geometry: &PageGeometry,
    request: &CoverLetterRequest,
) -> Result<LetterArtifact, AppError> {
    let letter = generate_letter(provider, settings, request).await?;
    let pdf = render_letter_pdf(&letter.text, &request.author_name(), geometry).await?;

    info!(
        "Cover letter {} rendered: {} page(s), {} bytes",
        letter.id,
        pdf.page_count,
        pdf.bytes.len()
    );
    Ok(LetterArtifact { letter, pdf })
}


#[cfg(test)]
mod tests {
    use super::test_support::FakeProvider;
    use super::*;
    use crate::llm_client::Role;
    use crate::models::letter::LetterModel;

    fn make_request(personal: &str, job: &str) -> CoverLetterRequest {
        CoverLetterRequest {
            personal_info: personal.to_string(),
            job_posting: job.to_string(),
            availability: Some("from March 2026".to_string()),
            model: LetterModel::Gpt4o,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_letter_sends_composed_payload() {
        let provider = FakeProvider::replying("  Dear Hiring Manager,\n\nRegards\n");
        let request = make_request("Jane Doe", "Backend engineer");

        let letter = generate_letter(&provider, &GenerationSettings::default(), &request)
            .await
            .unwrap();

        assert_eq!(letter.text, "Dear Hiring Manager,\n\nRegards");
        assert_eq!(letter.model, LetterModel::Gpt4o);
        assert_eq!(provider.call_count(), 1);

        let sent = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.model, "gpt-4o");
        assert_eq!(sent.max_output_tokens, 850);
        assert_eq!(sent.messages[0].role, Role::System);
        assert!(sent.messages[1].content.contains("Availability: from March 2026"));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_provider() {
        let provider = FakeProvider::replying("unused");
        for (personal, job) in [("", "Backend engineer"), ("Jane Doe", " \n\t")] {
            let result = generate_letter(
                &provider,
                &GenerationSettings::default(),
                &make_request(personal, job),
            )
            .await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_surfaces_verbatim_without_retry() {
        let provider = FakeProvider::failing(429, "Rate limit reached for gpt-4o");
        let result = run_pipeline(
            &provider,
            &GenerationSettings::default(),
            &PageGeometry::default(),
            &make_request("Jane Doe", "Backend engineer"),
        )
        .await;

        match result {
            Err(AppError::Provider(message)) => {
                assert!(message.contains("Rate limit reached for gpt-4o"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_run_pipeline_produces_pdf() {
        let provider = FakeProvider::replying("Dear Hiring Manager,\n\nI am applying.\n\nRegards,\nJane");
        let artifact = run_pipeline(
            &provider,
            &GenerationSettings::default(),
            &PageGeometry::default(),
            &make_request("Jane Doe\njane@example.com", "Backend engineer"),
        )
        .await
        .unwrap();

        assert_eq!(artifact.pdf.page_count, 1);
        assert!(artifact.pdf.bytes.starts_with(b"%PDF-"));
        assert!(artifact.letter.text.starts_with("Dear Hiring Manager,"));
    }

    #[tokio::test]
    async fn test_render_empty_text_is_one_page() {
        let rendered = render_letter_pdf("", "Candidate", &PageGeometry::default())
            .await
            .unwrap();
        assert_eq!(rendered.page_count, 1);
        assert!(rendered.bytes.starts_with(b"%PDF-"));
    }
}
