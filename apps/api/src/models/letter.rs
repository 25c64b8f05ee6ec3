use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The chat models offered in the form. `Gpt4oMini` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterModel {
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl LetterModel {
    pub const ALL: [LetterModel; 3] = [
        LetterModel::Gpt4oMini,
        LetterModel::Gpt4o,
        LetterModel::Gpt35Turbo,
    ];

    /// Model identifier sent to the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterModel::Gpt4oMini => "gpt-4o-mini",
            LetterModel::Gpt4o => "gpt-4o",
            LetterModel::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

impl std::str::FromStr for LetterModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterModel::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("unknown model '{s}'"))
    }
}

impl std::fmt::Display for LetterModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for cover letter generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverLetterRequest {
    pub personal_info: String,
    pub job_posting: String,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub model: LetterModel,
    /// Overrides the configured default output language.
    #[serde(default)]
    pub language: Option<String>,
    /// Client session; at most one generation per session may be in flight.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl CoverLetterRequest {
    /// Name used for the PDF author field: first non-blank line of the personal info.
    pub fn author_name(&self) -> String {
        self.personal_info
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("Candidate")
            .to_string()
    }
}

/// A generated letter. Held in memory for one interaction only, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLetter {
    pub id: Uuid,
    /// Completion text, trimmed of surrounding whitespace.
    pub text: String,
    pub model: LetterModel,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedLetter {
    pub fn new(text: &str, model: LetterModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.trim().to_string(),
            model,
            generated_at: Utc::now(),
        }
    }
}
