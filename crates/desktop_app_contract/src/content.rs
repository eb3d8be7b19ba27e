//! Portfolio content document shared by the resume, projects, skills and profile panels.
//!
//! Every section defaults when absent so partially authored documents still decode.

use platform_host::ContentSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading the portfolio content document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The host could not fetch the document.
    #[error("failed to fetch content document: {0}")]
    Fetch(String),
    /// The document body was not valid content JSON.
    #[error("failed to decode content document: {0}")]
    Decode(String),
    /// The host answered with an empty document.
    #[error("content document is empty")]
    Unavailable,
}

/// Root of `/data/content.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    /// Owner profile.
    pub user: UserProfile,
    /// Resume section.
    pub resume: ResumeSection,
    /// Skill lists by category.
    pub skills: SkillsSection,
    /// GitHub profile settings.
    pub github: GitHubSection,
    /// Headline statistics shown in the header.
    pub stats: StatsSection,
    /// Project catalog.
    pub projects: Vec<ProjectRecord>,
}

/// Owner profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Short biography.
    pub bio: String,
    /// City or region.
    pub location: String,
    /// Contact address.
    pub email: String,
    /// GitHub profile URL.
    pub github: String,
    /// LeetCode profile URL.
    pub leetcode: String,
}

/// Resume section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSection {
    /// Professional summary paragraph.
    pub summary: String,
    /// Work history, most recent first.
    pub experience: Vec<ExperienceEntry>,
    /// Degrees.
    pub education: Vec<EducationEntry>,
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    /// Role title.
    pub title: String,
    /// Employer.
    pub company: String,
    /// Free-form period label such as `2022 - Present`.
    pub period: String,
    /// Role summary.
    pub description: String,
    /// Technologies used in the role.
    pub technologies: Vec<String>,
}

/// One degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    /// Degree name.
    pub degree: String,
    /// School.
    pub institution: String,
    /// Graduation year label.
    pub year: String,
    /// Optional grade point average label.
    pub gpa: Option<String>,
}

/// Skill lists keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsSection {
    /// Programming languages.
    pub languages: Vec<String>,
    /// Frontend frameworks and tooling.
    pub frontend: Vec<String>,
    /// Backend frameworks and datastores.
    pub backend: Vec<String>,
    /// Cloud platforms and infrastructure.
    pub cloud: Vec<String>,
    /// Developer tools.
    pub tools: Vec<String>,
    /// AI and machine learning.
    pub ai: Vec<String>,
}

/// GitHub profile settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubSection {
    /// Account name.
    pub username: String,
    /// Repository names pinned on the profile.
    pub pinned_repos: Vec<String>,
}

/// Headline statistics. Zero means "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSection {
    /// Total stars across repositories.
    pub github_stars: u32,
    /// Commits in the trailing year.
    pub github_commits: u32,
    /// Solved LeetCode problems.
    pub leetcode_solved: u32,
}

/// One portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Stable project key.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Detail view description.
    pub long_description: String,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Source repository URL.
    pub github: Option<String>,
    /// Live demo URL.
    pub demo: Option<String>,
    /// Screenshot URL.
    pub image: Option<String>,
    /// Lifecycle label: `completed`, `in-progress` or `planned`.
    pub status: String,
    /// Shown in the featured list.
    pub featured: bool,
}

/// Decodes a raw content document body.
pub fn decode_content_document(raw: &str) -> Result<ContentDocument, ContentError> {
    if raw.trim().is_empty() {
        return Err(ContentError::Unavailable);
    }
    serde_json::from_str(raw).map_err(|err| ContentError::Decode(err.to_string()))
}

/// Fetches and decodes the content document from `source`.
pub async fn load_content_document(
    source: &dyn ContentSource,
) -> Result<ContentDocument, ContentError> {
    let raw = source.load_document().await.map_err(ContentError::Fetch)?;
    decode_content_document(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use platform_host::{NoopContentSource, StaticContentSource};
    use pretty_assertions::assert_eq;

    const SITE_DOCUMENT: &str = include_str!("../../site/public/data/content.json");

    #[test]
    fn site_document_decodes_every_section() {
        let document = decode_content_document(SITE_DOCUMENT).expect("site document");
        assert!(!document.user.name.is_empty());
        assert!(!document.resume.experience.is_empty());
        assert!(!document.skills.languages.is_empty());
        assert!(!document.github.username.is_empty());
        assert!(document.stats.github_stars > 0);
        assert!(document.projects.iter().any(|project| project.featured));
    }

    #[test]
    fn partial_document_keeps_section_defaults() {
        let document =
            decode_content_document(r#"{"user":{"name":"Sanjay"},"stats":{"githubStars":12}}"#)
                .expect("partial document");
        assert_eq!(document.user.name, "Sanjay");
        assert_eq!(document.user.email, "");
        assert_eq!(
            document.stats,
            StatsSection {
                github_stars: 12,
                github_commits: 0,
                leetcode_solved: 0,
            }
        );
        assert!(document.projects.is_empty());
    }

    #[test]
    fn camel_case_project_fields_decode() {
        let document = decode_content_document(
            r#"{"projects":[{"id":"p1","title":"P","longDescription":"long","status":"in-progress","featured":true,"demo":"https://demo"}]}"#,
        )
        .expect("projects");
        let project = &document.projects[0];
        assert_eq!(project.long_description, "long");
        assert_eq!(project.status, "in-progress");
        assert_eq!(project.demo.as_deref(), Some("https://demo"));
        assert_eq!(project.github, None);
    }

    #[test]
    fn malformed_and_empty_bodies_are_typed_errors() {
        assert!(matches!(
            decode_content_document("{not json"),
            Err(ContentError::Decode(_))
        ));
        assert_eq!(
            decode_content_document("  \n"),
            Err(ContentError::Unavailable)
        );
    }

    #[test]
    fn load_maps_source_failures_to_fetch_errors() {
        let err = block_on(load_content_document(&NoopContentSource)).expect_err("noop source");
        assert!(matches!(err, ContentError::Fetch(_)));

        let source = StaticContentSource::new(r#"{"github":{"username":"sanjay","pinnedRepos":["a"]}}"#);
        let document = block_on(load_content_document(&source)).expect("static source");
        assert_eq!(document.github.pinned_repos, vec!["a".to_string()]);
    }
}
