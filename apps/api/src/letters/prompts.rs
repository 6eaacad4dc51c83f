//! Prompts for cover-letter generation.

pub const COVER_LETTER_SYSTEM: &str = "You are an experienced career writer. You write complete, ready-to-send cover letters with no placeholders and no commentary.";

const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter tailored to this specific job. The letter should be personalized, compelling, and highlight relevant experience from the resume. Do NOT include placeholder brackets like [Your Name] - write it as a complete, ready-to-use letter.

Job Title: {job_title}
Company: {company}
Location: {location}
Job Description: {job_description}

Candidate Resume: {resume_text}

Write a professional, warm, and specific cover letter (3-4 paragraphs). Focus on:
1. Why the candidate is excited about this specific role and company
2. Key relevant experience and achievements from the resume
3. How the candidate's skills align with the job requirements
4. A confident closing with call to action

Return ONLY the cover letter text, no additional commentary."#;

pub struct CoverLetterContext<'a> {
    pub job_title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub job_description: &'a str,
    pub resume_text: &'a str,
}

pub fn build_cover_letter_prompt(ctx: &CoverLetterContext<'_>) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", or_placeholder(ctx.job_title, "Not specified"))
        .replace("{company}", or_placeholder(ctx.company, "Not specified"))
        .replace("{location}", or_placeholder(ctx.location, "Not specified"))
        .replace(
            "{job_description}",
            or_placeholder(ctx.job_description, "Not provided"),
        )
        .replace(
            "{resume_text}",
            or_placeholder(ctx.resume_text, "Not provided"),
        )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
