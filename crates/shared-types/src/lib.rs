//! Data model shared between the portfolio backend and its admin dashboard.
//!
//! Every content record is a flat serde struct with a `Default` impl. The
//! defaults are the placeholder copy shown before the site owner has saved
//! anything; the store applies them whenever a document is missing, so the
//! rendering side never has to branch on absent fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hero/profile document: name, headline, bio and the media URLs the
/// dashboard upload forms maintain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub about_image_url: Option<String>,
    pub resume_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Your Title".to_string(),
            bio: "A short introduction goes here.".to_string(),
            image_url: None,
            about_image_url: None,
            resume_url: None,
        }
    }
}

/// About section: three paragraphs, edited as one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

impl Default for About {
    fn default() -> Self {
        Self {
            paragraph1: "Tell visitors who you are.".to_string(),
            paragraph2: "Describe what you work on.".to_string(),
            paragraph3: "Say what you are looking for.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_icon_name: Option<String>,
    pub skills: Vec<Skill>,
}

/// Skills document: the full set of categories, replaced wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub skills_data: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Comma-separated tag list, kept as entered in the dashboard form.
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projects {
    pub projects_data: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    /// Display date as entered ("June 2024"), not parsed.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificates {
    pub certificates_data: Vec<Certificate>,
}

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Everything the public site needs for one page load, assembled from the
/// individual content documents with defaults filling any gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub certificates: Certificates,
}

// Requests exchanged with the dashboard forms. Each form saves its whole
// section, so updates are full replacements rather than patches.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub title: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAboutRequest {
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSkillsRequest {
    pub skills_data: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProjectsRequest {
    pub projects_data: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCertificatesRequest {
    pub certificates_data: Vec<Certificate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
