//! Media CDN client backing the [`MediaStore`] trait.
//!
//! Uploads go to a hosted upload endpoint as multipart form data with basic
//! auth; the CDN answers with the public URL of the stored asset.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

use super::MediaStore;

#[derive(Clone)]
pub struct CdnClient {
    http: reqwest::Client,
    upload_url: String,
    api_key: String,
}

impl CdnClient {
    pub fn new(upload_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: upload_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from `CDN_UPLOAD_URL` and `CDN_API_KEY`.
    pub fn from_env() -> ApiResult<Self> {
        let upload_url =
            std::env::var("CDN_UPLOAD_URL").map_err(|_| ApiError::missing_env("CDN_UPLOAD_URL"))?;
        let api_key =
            std::env::var("CDN_API_KEY").map_err(|_| ApiError::missing_env("CDN_API_KEY"))?;
        Ok(Self::new(upload_url, api_key))
    }
}

#[derive(Debug, Deserialize)]
struct CdnUploadResponse {
    secure_url: String,
}

#[async_trait]
impl MediaStore for CdnClient {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response: CdnUploadResponse = self
            .http
            .post(&self.upload_url)
            .header(
                AUTHORIZATION,
                format!("Basic {}", BASE64.encode(&self.api_key)),
            )
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.secure_url)
    }
}
