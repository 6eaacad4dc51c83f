//! Local fallback analyzer — deterministic keyword-overlap scoring used when
//! the LLM is unreachable or unconfigured.
//!
//! Matching is substring-based on a fixed vocabulary, deliberately not
//! word-boundary aware: "java" matches inside "javascript". That coarse
//! behavior is part of the contract this scorer has always had, and callers
//! (and tests) rely on it. Do not tighten it to token matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Recognized skills and technologies, in canonical order. All lowercase;
/// inputs are lowercased before matching. Order matters: `matched` and
/// `missing` lists preserve vocabulary order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "php",
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "node.js",
    "express",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "firebase",
    "dynamodb",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "ci/cd",
    "git",
    "github",
    "agile",
    "scrum",
    "html",
    "css",
    "tailwind",
    "sass",
    "rest",
    "graphql",
    "api",
    "microservices",
    "machine learning",
    "deep learning",
    "ai",
    "tensorflow",
    "pytorch",
    "data science",
    "data analysis",
    "pandas",
    "numpy",
];

/// Qualitative label derived from the match score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    #[serde(rename = "Strong Match")]
    Strong,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl MatchLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            MatchLevel::Strong
        } else if score >= 50 {
            MatchLevel::Good
        } else if score >= 35 {
            MatchLevel::Fair
        } else {
            MatchLevel::NeedsWork
        }
    }
}

/// Seniority signal detected in the job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry-Level", alias = "Entry")]
    Entry,
    #[serde(rename = "Mid-Level")]
    Mid,
    #[serde(rename = "Senior")]
    Senior,
    #[serde(rename = "Staff/Principal", alias = "Staff")]
    Staff,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExperienceLevel::Entry => "Entry-Level",
            ExperienceLevel::Mid => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Staff => "Staff/Principal",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub action: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// The analysis result shape shared by the LLM analyzer and the local
/// fallback. Serialized camelCase so both produce exactly what the UI and
/// the analysis cache expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_score: u8,
    pub match_level: MatchLevel,
    pub summary: String,
    pub experience_level: ExperienceLevel,
    pub skills: SkillBreakdown,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default)]
    pub interview_topics: Vec<String>,
    #[serde(default)]
    pub resume_keywords: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Scores a resume against a job description without any network access.
///
/// Pure and total: any pair of strings (including empty) produces a report,
/// and identical inputs always produce identical output. When the job
/// description contains no recognized vocabulary term the score is a fixed 50
/// rather than an undefined 0/0 ratio.
pub fn local_analyze(job_description: &str, resume_text: &str) -> MatchReport {
    let desc = job_description.to_lowercase();
    let resume = resume_text.to_lowercase();

    let job_skills: Vec<&str> = SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|s| desc.contains(s))
        .collect();
    let my_skills: Vec<&str> = SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|s| resume.contains(s))
        .collect();

    let matched: Vec<&str> = job_skills
        .iter()
        .copied()
        .filter(|s| my_skills.contains(s))
        .collect();
    let missing: Vec<&str> = job_skills
        .iter()
        .copied()
        .filter(|s| !matched.contains(s))
        .collect();

    let match_score = if job_skills.is_empty() {
        50
    } else {
        // Round half-up; bounded by construction since matched ⊆ job_skills.
        (100.0 * matched.len() as f64 / job_skills.len() as f64).round() as u8
    };

    let experience_level = detect_experience_level(&desc);

    let summary = if resume_text.is_empty() {
        "Please upload a resume for a personalized score.".to_string()
    } else {
        format!(
            "Based on keyword analysis, you match {} of {} key skills for this {} position.",
            matched.len(),
            job_skills.len(),
            experience_level
        )
    };

    let interview_topics: Vec<String> = if missing.is_empty() {
        vec![
            "Company background".to_string(),
            "Role expectations".to_string(),
            "Team structure".to_string(),
        ]
    } else {
        missing.iter().take(3).map(|s| s.to_string()).collect()
    };

    let resume_keywords: Vec<String> = job_skills.iter().take(5).map(|s| s.to_string()).collect();

    MatchReport {
        match_score,
        match_level: MatchLevel::from_score(match_score),
        summary,
        experience_level,
        skills: SkillBreakdown {
            matched: matched.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
        },
        action_items: vec![
            ActionItem {
                action: "Tailor your resume to highlight matching skills".to_string(),
                priority: Priority::High,
            },
            ActionItem {
                action: "Add missing keywords from the job description".to_string(),
                priority: Priority::Medium,
            },
            ActionItem {
                action: "Research the company culture and values".to_string(),
                priority: Priority::Low,
            },
        ],
        interview_topics,
        resume_keywords,
        recommendations: vec![
            "Tailor your resume keywords".to_string(),
            "Highlight relevant projects".to_string(),
            "Research the company values".to_string(),
        ],
    }
}

/// First-match priority scan over the lowercased job description.
/// Senior markers win over junior markers, which win over staff markers.
fn detect_experience_level(desc_lower: &str) -> ExperienceLevel {
    const SENIOR: [&str; 3] = ["senior", "lead", "sr."];
    const ENTRY: [&str; 3] = ["junior", "entry", "jr."];
    const STAFF: [&str; 3] = ["principal", "staff", "architect"];

    if SENIOR.iter().any(|m| desc_lower.contains(m)) {
        ExperienceLevel::Senior
    } else if ENTRY.iter().any(|m| desc_lower.contains(m)) {
        ExperienceLevel::Entry
    } else if STAFF.iter().any(|m| desc_lower.contains(m)) {
        ExperienceLevel::Staff
    } else {
        ExperienceLevel::Mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_always_bounded() {
        let inputs = [
            ("", ""),
            ("react aws docker sql", ""),
            ("react", "react aws docker sql python"),
            ("nothing recognizable here", "react"),
        ];
        for (desc, resume) in inputs {
            let report = local_analyze(desc, resume);
            assert!(report.match_score <= 100);
        }
    }

    #[test]
    fn test_matched_and_missing_partition_job_skills() {
        let report = local_analyze(
            "We need React, AWS, Docker and PostgreSQL experience",
            "React and Docker background",
        );
        // "sql" rides along inside "PostgreSQL": substring matching again.
        assert_eq!(report.skills.matched, vec!["react", "docker"]);
        assert_eq!(report.skills.missing, vec!["sql", "postgresql", "aws"]);
        for skill in &report.skills.matched {
            assert!(!report.skills.missing.contains(skill));
        }
    }

    #[test]
    fn test_no_recognized_skills_scores_fifty() {
        let report = local_analyze("Looking for a carpenter with woodworking chops", "");
        assert_eq!(report.match_score, 50);
        assert!(report.skills.matched.is_empty());
        assert!(report.skills.missing.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let report = local_analyze("", "");
        assert_eq!(report.match_score, 50);
        assert!(report.skills.matched.is_empty());
        assert!(report.skills.missing.is_empty());
        assert_eq!(
            report.summary,
            "Please upload a resume for a personalized score."
        );
    }

    #[test]
    fn test_senior_react_aws_example() {
        let report = local_analyze(
            "Looking for a Senior React and AWS engineer",
            "I have 5 years of React experience",
        );
        assert_eq!(report.skills.matched, vec!["react"]);
        assert_eq!(report.skills.missing, vec!["aws"]);
        assert_eq!(report.match_score, 50); // 1 of 2
        assert_eq!(report.match_level, MatchLevel::Good);
        assert_eq!(report.experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_java_substring_matches_javascript() {
        // Substring matching is part of the contract: a resume mentioning
        // only JavaScript still satisfies a JD asking for Java.
        let report = local_analyze("Java developer wanted", "I write javascript every day");
        assert!(report.skills.matched.contains(&"java".to_string()));
        assert!(report.skills.missing.is_empty());
    }

    #[test]
    fn test_lists_preserve_vocabulary_order() {
        let report = local_analyze(
            "python and javascript and rust and typescript",
            "no relevant skills",
        );
        // "java" rides along as a substring of "javascript".
        assert_eq!(
            report.skills.missing,
            vec!["javascript", "typescript", "python", "java", "rust"]
        );
    }

    #[test]
    fn test_score_rounds_half_up() {
        // 1 of 8 job skills matched → 12.5 → 13.
        let report = local_analyze(
            "ruby php angular vue flask redis docker terraform",
            "ruby only",
        );
        assert_eq!(report.skills.missing.len(), 7);
        assert_eq!(report.match_score, 13);
        assert_eq!(report.match_level, MatchLevel::NeedsWork);
    }

    #[test]
    fn test_experience_level_priority_order() {
        assert_eq!(
            detect_experience_level("senior staff architect"),
            ExperienceLevel::Senior
        );
        assert_eq!(
            detect_experience_level("junior role on a staff team"),
            ExperienceLevel::Entry
        );
        assert_eq!(
            detect_experience_level("principal engineer"),
            ExperienceLevel::Staff
        );
        assert_eq!(detect_experience_level("engineer"), ExperienceLevel::Mid);
    }

    #[test]
    fn test_summary_mentions_counts_and_level() {
        let report = local_analyze("Senior React and AWS engineer", "React experience");
        assert_eq!(
            report.summary,
            "Based on keyword analysis, you match 1 of 2 key skills for this Senior position."
        );
    }

    #[test]
    fn test_interview_topics_from_missing_capped_at_three() {
        let report = local_analyze("python java ruby php angular", "");
        assert_eq!(report.interview_topics.len(), 3);
        assert_eq!(report.interview_topics, vec!["python", "java", "ruby"]);
    }

    #[test]
    fn test_interview_topics_generic_when_nothing_missing() {
        let report = local_analyze("react role", "react background");
        assert_eq!(
            report.interview_topics,
            vec!["Company background", "Role expectations", "Team structure"]
        );
    }

    #[test]
    fn test_resume_keywords_capped_at_five() {
        let report = local_analyze("python java ruby php angular vue django", "");
        assert_eq!(report.resume_keywords.len(), 5);
    }

    #[test]
    fn test_idempotent() {
        let desc = "Senior Rust engineer, Kubernetes and PostgreSQL";
        let resume = "Rust and PostgreSQL background";
        assert_eq!(local_analyze(desc, resume), local_analyze(desc, resume));
    }

    #[test]
    fn test_match_level_thresholds() {
        assert_eq!(MatchLevel::from_score(100), MatchLevel::Strong);
        assert_eq!(MatchLevel::from_score(70), MatchLevel::Strong);
        assert_eq!(MatchLevel::from_score(69), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(50), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(49), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(35), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(34), MatchLevel::NeedsWork);
        assert_eq!(MatchLevel::from_score(0), MatchLevel::NeedsWork);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = local_analyze("Senior React and AWS engineer", "React experience");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"matchScore\":50"));
        assert!(json.contains("\"matchLevel\":\"Good Match\""));
        assert!(json.contains("\"experienceLevel\":\"Senior\""));
        let back: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_remote_shape_deserializes() {
        // The exact JSON shape the LLM is prompted to return.
        let json = r#"{
            "matchScore": 82,
            "matchLevel": "Strong Match",
            "summary": "Great fit overall.",
            "experienceLevel": "Staff",
            "skills": {"matched": ["React"], "missing": ["Kubernetes"]},
            "actionItems": [{"action": "Build a demo with their stack", "priority": "high"}],
            "interviewTopics": ["System design"],
            "resumeKeywords": ["React"],
            "recommendations": ["Quantify your impact"]
        }"#;
        let report: MatchReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.match_score, 82);
        assert_eq!(report.experience_level, ExperienceLevel::Staff);
        assert_eq!(report.action_items[0].priority, Priority::High);
    }
}
