// All LLM prompt text for cover letter generation.

/// System instruction sent as the first message of every request.
pub const LETTER_SYSTEM: &str = "You are a professional career coach and technical writer. \
    Write a single-page, professional cover letter tailored to the job posting and the candidate's info. \
    Be concise (approx 250-400 words). Keep a formal tone. \
    If the candidate provided an availability date, mention it in the body. \
    Return only the cover letter text (no extra commentary).";

/// Appended to the system instruction when an output language is requested.
/// Replace `{language}` before sending.
pub const LANGUAGE_INSTRUCTION: &str = "Write the letter in {language}.";

/// User prompt template. Replace `{personal}` and `{job}` before sending.
pub const LETTER_PROMPT_TEMPLATE: &str = r#"Personal information:
{personal}

Job posting:
{job}

Instructions:
- Mention 2-3 relevant skills/experiences matching the job posting.
- Use a formal tone and include a short closing (request an interview).
- Keep it one page.
- Return only the letter text."#;

/// Label for the optional availability line appended to the personal information.
pub const AVAILABILITY_LABEL: &str = "Availability:";
