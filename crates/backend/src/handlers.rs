//! HTTP handlers for the public site content, the contact form, and the
//! session-gated admin content API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::Utc;
use portfolio_types::{
    About, Certificates, ContactResponse, ContactSubmission, Profile, Projects, SiteContent,
    Skills, UpdateAboutRequest, UpdateCertificatesRequest, UpdateProfileRequest,
    UpdateProjectsRequest, UpdateSkillsRequest, UploadResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::store::content::{self, MediaTarget};
use crate::store::MediaStore;
use crate::AppState;

// Public site

/// Everything the marketing page needs in one response, with defaults for
/// any section the owner has not saved yet.
pub async fn get_site_content(State(state): State<AppState>) -> ApiResult<Json<SiteContent>> {
    Ok(Json(content::site_content(state.store.as_ref()).await?))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "Invalid email address."))]
    pub email: String,
    #[validate(length(
        min = 10,
        max = 500,
        message = "Message must be between 10 and 500 characters."
    ))]
    pub message: String,
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> ApiResult<Json<ContactResponse>> {
    form.validate()?;

    content::add_contact_submission(
        state.store.as_ref(),
        &form.name,
        &form.email,
        &form.message,
        Utc::now(),
    )
    .await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Your message has been sent successfully!".to_string(),
    }))
}

// Admin content API (everything below runs behind the auth gate)

fn require_non_empty(value: &str, field: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} is required", field)));
    }
    Ok(())
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<Profile>> {
    require_non_empty(&request.name, "name")?;
    require_non_empty(&request.title, "title")?;
    require_non_empty(&request.bio, "bio")?;
    Ok(Json(
        content::save_profile(state.store.as_ref(), request).await?,
    ))
}

pub async fn update_about(
    State(state): State<AppState>,
    Json(request): Json<UpdateAboutRequest>,
) -> ApiResult<Json<About>> {
    require_non_empty(&request.paragraph1, "paragraph1")?;
    require_non_empty(&request.paragraph2, "paragraph2")?;
    require_non_empty(&request.paragraph3, "paragraph3")?;
    Ok(Json(
        content::save_about(state.store.as_ref(), request).await?,
    ))
}

pub async fn update_skills(
    State(state): State<AppState>,
    Json(request): Json<UpdateSkillsRequest>,
) -> ApiResult<Json<Skills>> {
    for category in &request.skills_data {
        require_non_empty(&category.category, "category")?;
        if category.skills.is_empty() {
            return Err(ApiError::bad_request(
                "each category needs at least one skill",
            ));
        }
        for skill in &category.skills {
            require_non_empty(&skill.name, "skill name")?;
        }
    }
    Ok(Json(
        content::save_skills(state.store.as_ref(), request).await?,
    ))
}

pub async fn update_projects(
    State(state): State<AppState>,
    Json(request): Json<UpdateProjectsRequest>,
) -> ApiResult<Json<Projects>> {
    for project in &request.projects_data {
        require_non_empty(&project.title, "project title")?;
        require_non_empty(&project.description, "project description")?;
        require_non_empty(&project.tags, "project tags")?;
    }
    Ok(Json(
        content::save_projects(state.store.as_ref(), request).await?,
    ))
}

pub async fn update_certificates(
    State(state): State<AppState>,
    Json(request): Json<UpdateCertificatesRequest>,
) -> ApiResult<Json<Certificates>> {
    for certificate in &request.certificates_data {
        require_non_empty(&certificate.title, "certificate title")?;
        require_non_empty(&certificate.issuer, "certificate issuer")?;
        require_non_empty(&certificate.date, "certificate date")?;
    }
    Ok(Json(
        content::save_certificates(state.store.as_ref(), request).await?,
    ))
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ContactSubmission>>> {
    Ok(Json(
        content::contact_submissions(state.store.as_ref()).await?,
    ))
}

// Media uploads

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Which profile media slot the uploaded asset should be wired into;
    /// omitted for assets the dashboard embeds itself (project images).
    pub target: Option<MediaTarget>,
}

fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

async fn read_file_field(multipart: &mut Multipart) -> ApiResult<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| ApiError::bad_request("file field must declare a content type"))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
        return Ok((content_type, bytes.to_vec()));
    }
    Err(ApiError::bad_request("missing file field"))
}

pub async fn upload_image(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (content_type, bytes) = read_file_field(&mut multipart).await?;
    let extension = image_extension(&content_type)
        .ok_or_else(|| ApiError::bad_request("only JPEG, PNG, WebP or GIF images are accepted"))?;
    if bytes.is_empty() {
        return Err(ApiError::bad_request("uploaded file is empty"));
    }

    let file_name = format!("{}.{}", Uuid::new_v4(), extension);
    let url = state
        .media
        .upload(&file_name, &content_type, bytes)
        .await?;

    match params.target {
        Some(target @ (MediaTarget::Profile | MediaTarget::About)) => {
            content::set_profile_media(state.store.as_ref(), target, &url).await?;
        }
        Some(MediaTarget::Resume) => {
            return Err(ApiError::bad_request("use the resume upload endpoint"));
        }
        Some(MediaTarget::Project) | None => {}
    }

    tracing::info!(%url, "image uploaded");
    Ok(Json(UploadResponse { url }))
}

pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (content_type, bytes) = read_file_field(&mut multipart).await?;
    if content_type != "application/pdf" {
        return Err(ApiError::bad_request("resume must be a PDF"));
    }
    if bytes.is_empty() {
        return Err(ApiError::bad_request("uploaded file is empty"));
    }

    let file_name = format!("{}.pdf", Uuid::new_v4());
    let url = state
        .media
        .upload(&file_name, &content_type, bytes)
        .await?;

    content::set_profile_media(state.store.as_ref(), MediaTarget::Resume, &url).await?;

    tracing::info!(%url, "resume uploaded");
    Ok(Json(UploadResponse { url }))
}
