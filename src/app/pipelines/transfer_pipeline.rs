use crate::core::transform::transform_users;
use crate::core::{
    ConfigProvider, Credentials, DestinationUser, Pipeline, SourceUser, SubmissionEnvelope,
    SubmitResponse,
};
use crate::utils::error::{Result, TransferError};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// 從來源 API 取得使用者、轉成目的端格式後一次送出
pub struct HttpTransferPipeline<C: ConfigProvider> {
    pub(crate) config: C,
    pub(crate) credentials: Credentials,
    pub(crate) client: Client,
}

impl<C: ConfigProvider> HttpTransferPipeline<C> {
    pub fn new(config: C, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    /// Reads the credentials file named by the config. Fails before any
    /// request is made when the file is missing or malformed.
    pub fn from_config(config: C) -> Result<Self> {
        let credentials = Credentials::from_file(config.credentials_path())?;
        tracing::debug!("Loaded credentials for user '{}'", credentials.userid);
        Ok(Self::new(config, credentials))
    }

    fn with_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.timeout_seconds() {
            Some(seconds) => request.timeout(Duration::from_secs(seconds)),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for HttpTransferPipeline<C> {
    async fn extract(&self) -> Result<Vec<SourceUser>> {
        tracing::debug!("Making API request to: {}", self.config.source_endpoint());
        let request = self.with_timeout(self.client.get(self.config.source_endpoint()));
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Source response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransferError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| TransferError::MalformedInput {
            message: format!("source response is not a list of users: {}", e),
        })
    }

    async fn transform(&self, users: Vec<SourceUser>) -> Result<Vec<DestinationUser>> {
        Ok(transform_users(&users))
    }

    async fn load(&self, users: Vec<DestinationUser>) -> Result<SubmitResponse> {
        let envelope = SubmissionEnvelope::new(&self.credentials, users);
        tracing::debug!("Submission envelope: {}", envelope.to_redacted_json()?);

        tracing::info!(
            "📤 Submitting {} users to {}",
            envelope.users.len(),
            self.config.destination_endpoint()
        );
        let request = self.with_timeout(
            self.client
                .post(self.config.destination_endpoint())
                .json(&envelope),
        );
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(SubmitResponse { status, body })
    }
}
