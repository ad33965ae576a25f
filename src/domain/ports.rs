use crate::domain::model::{AccessToken, ResourceGroup, ResourceGroupParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Opaque credential capability: yields a bearer token for the given scope
/// or fails with an authentication error.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    async fn token(&self, scope: &str) -> Result<AccessToken>;
}

/// Management-plane boundary for a single subscription.
#[async_trait]
pub trait ManagementClient: Send + Sync {
    async fn create_or_update(
        &self,
        name: &str,
        params: &ResourceGroupParams,
    ) -> Result<ResourceGroup>;

    async fn list(&self) -> Result<Vec<ResourceGroup>>;
}
