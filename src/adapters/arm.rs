use crate::domain::model::{ResourceGroup, ResourceGroupParams};
use crate::domain::ports::{ManagementClient, TokenCredential};
use crate::utils::error::{ArmError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

const API_VERSION: &str = "2021-04-01";

/// Resource Manager REST client for a single subscription. One token and one
/// attempt per operation; retry and backoff are left to the caller's rerun.
pub struct ArmClient<T: TokenCredential> {
    http: Client,
    credential: T,
    endpoint: String,
    subscription_id: String,
}

#[derive(Debug, Deserialize)]
struct ResourceGroupPage {
    value: Vec<ResourceGroup>,
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl<T: TokenCredential> ArmClient<T> {
    pub fn new(credential: T, endpoint: String, subscription_id: String) -> Self {
        Self {
            http: Client::new(),
            credential,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            subscription_id,
        }
    }

    fn scope(&self) -> String {
        format!("{}/.default", self.endpoint)
    }

    fn groups_url(&self) -> String {
        format!(
            "{}/subscriptions/{}/resourcegroups",
            self.endpoint, self.subscription_id
        )
    }

    async fn provider_error(response: Response) -> ArmError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        // ARM 錯誤信封：{"error":{"code":..,"message":..}}
        let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.code, envelope.error.message),
            Err(_) => ("Unknown".to_string(), body),
        };
        ArmError::ProviderError {
            status,
            code,
            message,
        }
    }
}

#[async_trait]
impl<T: TokenCredential> ManagementClient for ArmClient<T> {
    async fn create_or_update(
        &self,
        name: &str,
        params: &ResourceGroupParams,
    ) -> Result<ResourceGroup> {
        let token = self.credential.token(&self.scope()).await?;
        let url = format!("{}/{}?api-version={}", self.groups_url(), name, API_VERSION);

        tracing::debug!("PUT {}", url);
        let response = self
            .http
            .put(&url)
            .bearer_auth(&token.token)
            .json(params)
            .send()
            .await?;
        tracing::debug!("ARM response status: {}", response.status());

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::provider_error(response).await)
        }
    }

    async fn list(&self) -> Result<Vec<ResourceGroup>> {
        let token = self.credential.token(&self.scope()).await?;
        let mut url = format!("{}?api-version={}", self.groups_url(), API_VERSION);
        let mut groups = Vec::new();

        // 依序取回所有分頁再回傳
        loop {
            tracing::debug!("GET {}", url);
            let response = self.http.get(&url).bearer_auth(&token.token).send().await?;
            if !response.status().is_success() {
                return Err(Self::provider_error(response).await);
            }

            let page: ResourceGroupPage = response.json().await?;
            groups.extend(page.value);

            match page.next_link {
                Some(next) if !next.is_empty() => url = next,
                _ => break,
            }
        }

        Ok(groups)
    }
}
