use crate::domain::model::AccessToken;
use crate::domain::ports::TokenCredential;
use crate::utils::error::{ArmError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Client-credentials grant against the AAD token endpoint. Construction
/// never fails; missing configuration surfaces as an AuthError on the first
/// token request, matching the deferred behavior of the SDK credentials.
pub struct ClientSecretCredential {
    http: Client,
    authority: String,
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

impl ClientSecretCredential {
    pub fn from_env() -> Self {
        Self {
            http: Client::new(),
            authority: DEFAULT_AUTHORITY.to_string(),
            tenant_id: std::env::var("AZURE_TENANT_ID").ok(),
            client_id: std::env::var("AZURE_CLIENT_ID").ok(),
            client_secret: std::env::var("AZURE_CLIENT_SECRET").ok(),
        }
    }

    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            authority: DEFAULT_AUTHORITY.to_string(),
            tenant_id: Some(tenant_id.into()),
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }

    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    fn require<'a>(value: &'a Option<String>, env_var: &str) -> Result<&'a str> {
        value.as_deref().ok_or_else(|| ArmError::AuthError {
            message: format!("{} is not set", env_var),
        })
    }
}

#[async_trait]
impl TokenCredential for ClientSecretCredential {
    async fn token(&self, scope: &str) -> Result<AccessToken> {
        let tenant_id = Self::require(&self.tenant_id, "AZURE_TENANT_ID")?;
        let client_id = Self::require(&self.client_id, "AZURE_CLIENT_ID")?;
        let client_secret = Self::require(&self.client_secret, "AZURE_CLIENT_SECRET")?;

        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority.trim_end_matches('/'),
            tenant_id
        );

        tracing::debug!("Requesting token from {}", url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("scope", scope),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ArmError::AuthError {
                message: format!("token endpoint returned {}: {}", status, body),
            });
        }

        let payload: TokenResponse = response.json().await?;
        Ok(AccessToken {
            token: payload.access_token,
            expires_on: Utc::now() + chrono::Duration::seconds(payload.expires_in),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_token_round_trip() {
        let server = MockServer::start();
        let token_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/tenant-1/oauth2/v2.0/token")
                .body_contains("grant_type=client_credentials")
                .body_contains("client_id=client-1");
            then.status(200).json_body(serde_json::json!({
                "token_type": "Bearer",
                "access_token": "token-abc",
                "expires_in": 7200
            }));
        });

        let credential = ClientSecretCredential::new("tenant-1", "client-1", "secret-1")
            .with_authority(server.base_url());
        let token = credential
            .token("https://management.azure.com/.default")
            .await
            .unwrap();

        token_mock.assert();
        assert_eq!(token.token, "token-abc");
        assert!(!token.is_expired());
    }

    #[tokio::test]
    async fn test_token_defaults_expiry_when_absent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/tenant-1/oauth2/v2.0/token");
            then.status(200)
                .json_body(serde_json::json!({"access_token": "token-abc"}));
        });

        let credential = ClientSecretCredential::new("tenant-1", "client-1", "secret-1")
            .with_authority(server.base_url());
        let token = credential.token("scope").await.unwrap();

        assert!(token.expires_on > Utc::now() + chrono::Duration::seconds(3000));
    }

    #[tokio::test]
    async fn test_rejected_grant_is_auth_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/tenant-1/oauth2/v2.0/token");
            then.status(401).json_body(serde_json::json!({
                "error": "invalid_client",
                "error_description": "Client authentication failed"
            }));
        });

        let credential = ClientSecretCredential::new("tenant-1", "client-1", "wrong-secret")
            .with_authority(server.base_url());
        let err = credential.token("scope").await.unwrap_err();

        match err {
            ArmError::AuthError { message } => {
                assert!(message.contains("401"));
                assert!(message.contains("invalid_client"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_configuration_fails_without_request() {
        let server = MockServer::start();
        let token_mock = server.mock(|when, then| {
            when.method(POST).path_contains("/oauth2/v2.0/token");
            then.status(200);
        });

        let credential = ClientSecretCredential {
            http: Client::new(),
            authority: server.base_url(),
            tenant_id: None,
            client_id: Some("client-1".to_string()),
            client_secret: Some("secret-1".to_string()),
        };

        let err = credential.token("scope").await.unwrap_err();
        match err {
            ArmError::AuthError { message } => assert!(message.contains("AZURE_TENANT_ID")),
            other => panic!("unexpected error: {other}"),
        }
        token_mock.assert_hits(0);
    }
}
