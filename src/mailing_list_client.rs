use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client, ClientBuilder, Url};
use serde::Deserialize;

use crate::configuration::MailingListSettings;
use crate::domain::{SubscriptionRequest, SubscriptionResult};
use crate::routes::error_chain_fmt;

/// Anything that can register a subscription with the mailing list.
pub trait ListSubscriber {
    fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> impl Future<Output = Result<SubscriptionResult, SubscribeError>> + Send;
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to reach the mailing list provider.")]
    Transport(#[source] reqwest::Error),
    #[error("The mailing list provider returned an unexpected response.")]
    UnexpectedResponse(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubscribeError {
    /// Text shown to the visitor in place of a success message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(msg) => msg.clone(),
            Self::Transport(_) | Self::UnexpectedResponse(_) => {
                "Sorry, we could not sign you up right now. Please try again in a moment.".into()
            }
        }
    }
}

pub struct MailingListClient {
    http_client: Client,
    endpoint: Url,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ProviderStatus {
    Success,
    Error,
}

#[derive(Deserialize, Debug)]
struct ProviderResponse {
    result: ProviderStatus,
    msg: String,
}

impl MailingListClient {
    pub fn new(config: &MailingListSettings) -> anyhow::Result<Self> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| anyhow::anyhow!("Invalid signup endpoint: {e}"))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            "application/json"
                .parse()
                .map_err(|e| anyhow::anyhow!("Failed to parse accept header: {e}"))?,
        );

        let http_client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_millis))
            .build()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    fn signup_url(&self, request: &SubscriptionRequest) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("EMAIL", &request.email);
            for (name, value) in &request.fields {
                query.append_pair(name, value);
            }
        }
        url
    }
}

impl ListSubscriber for MailingListClient {
    #[tracing::instrument(
        name = "Registering subscriber with the mailing list",
        skip(self, request),
        fields(subscriber_email = %request.email)
    )]
    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionResult, SubscribeError> {
        let body = self
            .http_client
            .get(self.signup_url(request))
            .send()
            .await
            .map_err(SubscribeError::Transport)?
            .error_for_status()
            .map_err(SubscribeError::Transport)?
            .bytes()
            .await
            .map_err(SubscribeError::Transport)?;

        let response: ProviderResponse = serde_json::from_slice(&body)
            .map_err(|e| SubscribeError::UnexpectedResponse(anyhow::anyhow!(e)))?;

        match response.result {
            ProviderStatus::Success => Ok(SubscriptionResult::new(response.msg)),
            ProviderStatus::Error => {
                tracing::warn!(provider_message = %response.msg, "Signup rejected by the mailing list");
                Err(SubscribeError::Rejected(response.msg))
            }
        }
    }
}
