use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::{error, info};

use crate::{
    config::MailConfig,
    types::{error::AppError, mail::SendEmail},
};

/// Outbound email seam. An `Err` means the transport did not accept the
/// recipient; callers must not persist anything that assumes delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: SendEmail) -> Result<(), AppError>;
}

/// Resend-style HTTP API transport.
pub struct ResendMailer {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl ResendMailer {
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        let client = ClientBuilder::new()
            .user_agent("bulletin/0.1 (+reqwest)")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Config(format!("building mail client failed: {e}")))?;

        Ok(ResendMailer {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: SendEmail) -> Result<(), AppError> {
        info!("[mail] -> POST {} ({})", self.endpoint, email.subject);

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key) // do NOT log the key
            .json(&email)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("mail send failed: {e}")))?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();
        error!("[mail] API error: HTTP {status}: {body}");
        Err(AppError::Internal(format!("mail API error: HTTP {status}")))
    }
}
