//! Typed access to the content collections.
//!
//! Each public-site section lives in one fixed-name document under the
//! `content` collection; contact submissions append to their own collection.
//! Missing documents fall back to the record's `Default` here, at the read
//! boundary, so callers never deal with partially-present data.

use chrono::{DateTime, Utc};
use portfolio_types::{
    About, Certificates, ContactSubmission, Profile, Projects, SiteContent, Skills,
    UpdateAboutRequest, UpdateCertificatesRequest, UpdateProfileRequest, UpdateProjectsRequest,
    UpdateSkillsRequest,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiResult;

use super::ContentStore;

const CONTENT: &str = "content";
const CONTACT_SUBMISSIONS: &str = "contactSubmissions";

/// Which profile media slot an upload should land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaTarget {
    Profile,
    About,
    Project,
    Resume,
}

async fn get_or_default<T>(store: &dyn ContentStore, doc: &str) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    match store.get_document(CONTENT, doc).await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(T::default()),
    }
}

async fn put<T: serde::Serialize>(store: &dyn ContentStore, doc: &str, record: &T) -> ApiResult<()> {
    store
        .set_document(CONTENT, doc, serde_json::to_value(record)?)
        .await
}

pub async fn profile(store: &dyn ContentStore) -> ApiResult<Profile> {
    get_or_default(store, "profile").await
}

pub async fn about(store: &dyn ContentStore) -> ApiResult<About> {
    get_or_default(store, "about").await
}

pub async fn skills(store: &dyn ContentStore) -> ApiResult<Skills> {
    get_or_default(store, "skills").await
}

pub async fn projects(store: &dyn ContentStore) -> ApiResult<Projects> {
    get_or_default(store, "projects").await
}

pub async fn certificates(store: &dyn ContentStore) -> ApiResult<Certificates> {
    get_or_default(store, "certificates").await
}

/// Assemble the full public page payload, defaulting any missing section.
pub async fn site_content(store: &dyn ContentStore) -> ApiResult<SiteContent> {
    Ok(SiteContent {
        profile: profile(store).await?,
        about: about(store).await?,
        skills: skills(store).await?,
        projects: projects(store).await?,
        certificates: certificates(store).await?,
    })
}

/// Save the profile text fields, preserving the media URLs the upload
/// endpoints maintain separately.
pub async fn save_profile(
    store: &dyn ContentStore,
    request: UpdateProfileRequest,
) -> ApiResult<Profile> {
    let mut current = profile(store).await?;
    current.name = request.name;
    current.title = request.title;
    current.bio = request.bio;
    put(store, "profile", &current).await?;
    Ok(current)
}

pub async fn save_about(store: &dyn ContentStore, request: UpdateAboutRequest) -> ApiResult<About> {
    let record = About {
        paragraph1: request.paragraph1,
        paragraph2: request.paragraph2,
        paragraph3: request.paragraph3,
    };
    put(store, "about", &record).await?;
    Ok(record)
}

pub async fn save_skills(
    store: &dyn ContentStore,
    request: UpdateSkillsRequest,
) -> ApiResult<Skills> {
    let record = Skills {
        skills_data: request.skills_data,
    };
    put(store, "skills", &record).await?;
    Ok(record)
}

pub async fn save_projects(
    store: &dyn ContentStore,
    request: UpdateProjectsRequest,
) -> ApiResult<Projects> {
    let record = Projects {
        projects_data: request.projects_data,
    };
    put(store, "projects", &record).await?;
    Ok(record)
}

pub async fn save_certificates(
    store: &dyn ContentStore,
    request: UpdateCertificatesRequest,
) -> ApiResult<Certificates> {
    let record = Certificates {
        certificates_data: request.certificates_data,
    };
    put(store, "certificates", &record).await?;
    Ok(record)
}

/// Point one of the profile's media slots at a freshly uploaded asset.
pub async fn set_profile_media(
    store: &dyn ContentStore,
    target: MediaTarget,
    url: &str,
) -> ApiResult<()> {
    let mut current = profile(store).await?;
    match target {
        MediaTarget::Profile => current.image_url = Some(url.to_string()),
        MediaTarget::About => current.about_image_url = Some(url.to_string()),
        MediaTarget::Resume => current.resume_url = Some(url.to_string()),
        // project images are embedded in the projects document by the
        // dashboard form, nothing to persist here
        MediaTarget::Project => return Ok(()),
    }
    put(store, "profile", &current).await
}

/// Store one contact form submission with a server-side timestamp.
pub async fn add_contact_submission(
    store: &dyn ContentStore,
    name: &str,
    email: &str,
    message: &str,
    submitted_at: DateTime<Utc>,
) -> ApiResult<String> {
    let fields = serde_json::json!({
        "name": name,
        "email": email,
        "message": message,
        "submitted_at": submitted_at.to_rfc3339(),
    });
    store.add_document(CONTACT_SUBMISSIONS, fields).await
}

/// Contact submissions, newest first.
pub async fn contact_submissions(store: &dyn ContentStore) -> ApiResult<Vec<ContactSubmission>> {
    let documents = store
        .list_documents(CONTACT_SUBMISSIONS, "submitted_at", true)
        .await?;

    let mut submissions = Vec::with_capacity(documents.len());
    for (id, mut value) in documents {
        if let Some(map) = value.as_object_mut() {
            map.insert("id".to_string(), serde_json::Value::String(id));
        }
        match serde_json::from_value::<ContactSubmission>(value) {
            Ok(submission) => submissions.push(submission),
            // a malformed legacy document should not take down the inbox
            Err(e) => tracing::warn!("skipping unreadable contact submission: {}", e),
        }
    }
    Ok(submissions)
}
