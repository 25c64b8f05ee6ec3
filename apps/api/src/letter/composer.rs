//! Prompt Composer — turns the user's free-text inputs into a two-message chat request.
//!
//! Validation happens here, before any provider call is possible: a request that
//! fails to compose never reaches the network.

use crate::errors::AppError;
use crate::letter::prompts::{
    AVAILABILITY_LABEL, LANGUAGE_INSTRUCTION, LETTER_PROMPT_TEMPLATE, LETTER_SYSTEM,
};
use crate::llm_client::{ChatMessage, CompletionRequest};
use crate::models::letter::{CoverLetterRequest, LetterModel};

/// Sampling and language settings applied to every composed request.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Fallback output language when the request does not name one.
    pub default_language: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.15,
            max_output_tokens: 850,
            default_language: None,
        }
    }
}

impl From<&crate::config::Config> for GenerationSettings {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            default_language: config.letter_language.clone(),
        }
    }
}

/// Rejects requests missing either required text block.
pub fn validate_request(request: &CoverLetterRequest) -> Result<(), AppError> {
    if request.personal_info.trim().is_empty() {
        return Err(AppError::Validation(
            "Please add your personal info.".to_string(),
        ));
    }
    if request.job_posting.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste the job posting.".to_string(),
        ));
    }
    Ok(())
}

/// Builds the [system, user] message pair.
pub fn compose_messages(
    request: &CoverLetterRequest,
    default_language: Option<&str>,
) -> Result<Vec<ChatMessage>, AppError> {
    validate_request(request)?;

    let mut personal = request.personal_info.trim().to_string();
    if let Some(availability) = non_blank(request.availability.as_deref()) {
        personal.push('\n');
        personal.push_str(AVAILABILITY_LABEL);
        personal.push(' ');
        personal.push_str(availability);
    }

    let user_prompt = LETTER_PROMPT_TEMPLATE
        .replace("{personal}", &personal)
        .replace("{job}", request.job_posting.trim());

    let language = non_blank(request.language.as_deref()).or(non_blank(default_language));
    let system = match language {
        Some(lang) => format!(
            "{LETTER_SYSTEM} {}",
            LANGUAGE_INSTRUCTION.replace("{language}", lang)
        ),
        None => LETTER_SYSTEM.to_string(),
    };

    Ok(vec![ChatMessage::system(system), ChatMessage::user(user_prompt)])
}

/// Composes the full provider payload for a request.
pub fn compose_request(
    request: &CoverLetterRequest,
    settings: &GenerationSettings,
) -> Result<CompletionRequest, AppError> {
    let messages = compose_messages(request, settings.default_language.as_deref())?;
    Ok(CompletionRequest {
        model: model_id(request.model),
        messages,
        temperature: settings.temperature,
        max_output_tokens: settings.max_output_tokens,
    })
}

fn model_id(model: LetterModel) -> String {
    model.as_str().to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;

    fn make_request(personal: &str, job: &str, availability: Option<&str>) -> CoverLetterRequest {
        CoverLetterRequest {
            personal_info: personal.to_string(),
            job_posting: job.to_string(),
            availability: availability.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_two_messages_system_first() {
        let request = make_request("Jane Doe", "Backend engineer", None);
        let messages = compose_messages(&request, None).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[0].content, LETTER_SYSTEM);
    }

    #[test]
    fn test_scenario_availability_line_and_verbatim_blocks() {
        let request = make_request(
            "Jane Doe, 5 years backend",
            "Senior backend engineer, Go, distributed systems",
            Some("from March 2026"),
        );
        let messages = compose_messages(&request, None).unwrap();
        let user = &messages[1].content;
        assert!(user.contains("Jane Doe, 5 years backend\nAvailability: from March 2026\n"));
        assert!(user.contains("Senior backend engineer, Go, distributed systems"));
        assert!(user.lines().any(|l| l == "Availability: from March 2026"));
    }

    #[test]
    fn test_blank_availability_emits_no_line() {
        for availability in [None, Some(""), Some("   \t")] {
            let request = make_request("Jane Doe", "Backend engineer", availability);
            let messages = compose_messages(&request, None).unwrap();
            assert!(
                !messages[1].content.contains("Availability"),
                "unexpected availability line for {availability:?}"
            );
        }
    }

    #[test]
    fn test_availability_is_trimmed() {
        let request = make_request("Jane Doe", "Backend engineer", Some("  immediately \n"));
        let messages = compose_messages(&request, None).unwrap();
        assert!(messages[1]
            .content
            .lines()
            .any(|l| l == "Availability: immediately"));
    }

    #[test]
    fn test_without_availability_matches_template_shape() {
        let request = make_request("Jane Doe", "Backend engineer", None);
        let messages = compose_messages(&request, None).unwrap();
        let expected = LETTER_PROMPT_TEMPLATE
            .replace("{personal}", "Jane Doe")
            .replace("{job}", "Backend engineer");
        assert_eq!(messages[1].content, expected);
    }

    #[test]
    fn test_fixed_instructions_present() {
        let request = make_request("Jane Doe", "Backend engineer", None);
        let user = &compose_messages(&request, None).unwrap()[1].content;
        assert!(user.contains("2-3 relevant skills"));
        assert!(user.contains("request an interview"));
        assert!(user.contains("one page"));
        assert!(user.contains("Return only the letter text."));
    }

    #[test]
    fn test_rejects_blank_required_fields() {
        let missing_personal = make_request("  \n ", "Backend engineer", None);
        assert!(matches!(
            compose_messages(&missing_personal, None),
            Err(AppError::Validation(m)) if m.contains("personal info")
        ));

        let missing_job = make_request("Jane Doe", "", None);
        assert!(matches!(
            compose_messages(&missing_job, None),
            Err(AppError::Validation(m)) if m.contains("job posting")
        ));
    }

    #[test]
    fn test_language_request_overrides_default() {
        let mut request = make_request("Jane Doe", "Backend engineer", None);
        let system = &compose_messages(&request, Some("French")).unwrap()[0].content;
        assert!(system.ends_with("Write the letter in French."));

        request.language = Some("German".to_string());
        let system = &compose_messages(&request, Some("French")).unwrap()[0].content;
        assert!(system.ends_with("Write the letter in German."));
        assert!(!system.contains("French"));
    }

    #[test]
    fn test_compose_request_carries_settings_and_model() {
        let mut request = make_request("Jane Doe", "Backend engineer", None);
        request.model = LetterModel::Gpt4o;
        let settings = GenerationSettings {
            temperature: 0.3,
            max_output_tokens: 600,
            default_language: None,
        };
        let payload = compose_request(&request, &settings).unwrap();
        assert_eq!(payload.model, "gpt-4o");
        assert_eq!(payload.max_output_tokens, 600);
        assert!((payload.temperature - 0.3).abs() < 1e-6);
        assert_eq!(payload.messages.len(), 2);
    }
}
