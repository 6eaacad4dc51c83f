//! Prompts for the match-analysis LLM backend.

use crate::analysis::analyzer::AnalyzeInput;

pub const ANALYZE_SYSTEM: &str = "You are a career coach analyzing how well a candidate matches a job posting. You always respond with valid JSON and nothing else.";

const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze how well this candidate matches the job. Return ONLY valid JSON.

Job Title: {job_title}
Company: {company}
Job Description: {job_description}

Candidate Resume: {resume_text}

Return this exact JSON format:
{
  "matchScore": <number 0-100>,
  "matchLevel": "<Strong Match|Good Match|Fair Match|Needs Work>",
  "summary": "<2-3 sentence summary of the candidate's fit>",
  "experienceLevel": "<Entry-Level|Mid-Level|Senior|Staff/Principal>",
  "skills": {
    "matched": ["skill1", "skill2"],
    "missing": ["skill1", "skill2"]
  },
  "actionItems": [
    {"action": "<specific thing to do>", "priority": "<high|medium|low>"},
    {"action": "<specific thing to do>", "priority": "<high|medium|low>"},
    {"action": "<specific thing to do>", "priority": "<high|medium|low>"}
  ],
  "interviewTopics": ["<topic to prepare for>", "<topic to prepare for>", "<topic to prepare for>"],
  "resumeKeywords": ["<keyword to add>", "<keyword to add>", "<keyword to add>"],
  "recommendations": ["tip1", "tip2", "tip3"]
}

Guidelines:
- skills.matched and skills.missing should be SHORT labels (1-3 words max, e.g. "React", "Node.js", "System Design")
- actionItems should be specific and actionable (e.g. "Build a portfolio project using their tech stack" not "Learn more skills")
- interviewTopics should be concrete subjects the candidate should study
- resumeKeywords are exact terms from the job posting to weave into the resume"#;

/// Fills the analysis prompt. Blank fields degrade to explicit markers so
/// the model does not hallucinate them.
pub fn build_analyze_prompt(input: &AnalyzeInput) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace(
            "{job_title}",
            or_placeholder(&input.job_title, "Not specified"),
        )
        .replace("{company}", or_placeholder(&input.company, "Not specified"))
        .replace(
            "{job_description}",
            or_placeholder(&input.job_description, "Not provided"),
        )
        .replace(
            "{resume_text}",
            or_placeholder(&input.resume_text, "Not provided"),
        )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
