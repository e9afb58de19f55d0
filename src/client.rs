use crate::config::Config;
use crate::error::{Error, Result};
use crate::file::{UploadConstraints, UploadFile};
use crate::http::{api_paths, HttpClient};
use crate::models::{HealthStatus, SystemStats, VerificationResult};
use log::error;
use reqwest::multipart::{Form, Part};

/// Client for interacting with the MitraVerify API
pub struct Client {
    http_client: HttpClient,
    constraints: UploadConstraints,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let constraints = UploadConstraints::new(config.max_file_size);
        let http_client = HttpClient::new(config)?;
        Ok(Self {
            http_client,
            constraints,
        })
    }

    /// Create a client from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    pub fn constraints(&self) -> &UploadConstraints {
        &self.constraints
    }

    /// Run the upload checks without sending anything
    pub fn validate_file(&self, file: &UploadFile) -> Result<()> {
        self.constraints.validate(file)
    }

    /// Check if the API is healthy
    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.fetch_health()
            .await
            .inspect_err(|err| error!("Health check failed: {err}"))
    }

    async fn fetch_health(&self) -> Result<HealthStatus> {
        let response = self.http_client.get(api_paths::HEALTH).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HealthCheckFailed {
                status: status.as_u16(),
            });
        }
        self.http_client.read_json(response).await
    }

    /// Verify text content for misinformation
    pub async fn verify_text(&self, text: &str) -> Result<VerificationResult> {
        self.submit_text(text)
            .await
            .inspect_err(|err| error!("Text verification failed: {err}"))
    }

    async fn submit_text(&self, text: &str) -> Result<VerificationResult> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let form = Form::new().text("text", text.to_string());
        let response = self
            .http_client
            .post_form(api_paths::VERIFY_TEXT, form)
            .await?;
        self.http_client.interpret_response(response).await
    }

    /// Verify an image for manipulation
    pub async fn verify_image(&self, file: &UploadFile) -> Result<VerificationResult> {
        self.submit_image(file)
            .await
            .inspect_err(|err| error!("Image verification failed: {err}"))
    }

    async fn submit_image(&self, file: &UploadFile) -> Result<VerificationResult> {
        self.constraints.validate(file)?;

        let form = Form::new().part("file", file_part(file)?);
        let response = self
            .http_client
            .post_form(api_paths::VERIFY_IMAGE, form)
            .await?;
        self.http_client.interpret_response(response).await
    }

    /// Verify text and/or an image in one call (multimodal).
    ///
    /// Whitespace-only text counts as absent.
    pub async fn verify_content(
        &self,
        text: Option<&str>,
        file: Option<&UploadFile>,
    ) -> Result<VerificationResult> {
        self.submit_content(text, file)
            .await
            .inspect_err(|err| error!("Content verification failed: {err}"))
    }

    async fn submit_content(
        &self,
        text: Option<&str>,
        file: Option<&UploadFile>,
    ) -> Result<VerificationResult> {
        let text = text.map(str::trim).filter(|t| !t.is_empty());
        if text.is_none() && file.is_none() {
            return Err(Error::MissingInput);
        }

        if let Some(file) = file {
            self.constraints.validate(file)?;
        }

        let mut form = Form::new();
        if let Some(text) = text {
            form = form.text("text", text.to_string());
        }
        if let Some(file) = file {
            form = form.part("file", file_part(file)?);
        }

        let response = self
            .http_client
            .post_form(api_paths::VERIFY_CONTENT, form)
            .await?;
        self.http_client.interpret_response(response).await
    }

    /// Get system statistics and supported formats
    pub async fn get_stats(&self) -> Result<SystemStats> {
        self.fetch_stats()
            .await
            .inspect_err(|err| error!("Failed to get stats: {err}"))
    }

    async fn fetch_stats(&self) -> Result<SystemStats> {
        let response = self.http_client.get(api_paths::STATS).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::StatsRequestFailed {
                status: status.as_u16(),
            });
        }
        self.http_client.read_json(response).await
    }
}

fn file_part(file: &UploadFile) -> Result<Part> {
    Ok(Part::bytes(file.data.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type())?)
}
