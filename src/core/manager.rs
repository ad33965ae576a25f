use crate::core::{ManagementClient, ResourceGroup, ResourceGroupParams};
use crate::utils::error::ArmError;
use crate::utils::validation;
use std::collections::HashMap;

/// Facade over the management-plane port. Failures never escape: create
/// collapses to `false`, list to `None`, with the provider/unexpected split
/// visible only in the log text.
pub struct ResourceManager<C: ManagementClient> {
    subscription_id: String,
    client: C,
}

impl<C: ManagementClient> ResourceManager<C> {
    pub fn new(subscription_id: String, client: C) -> Self {
        Self {
            subscription_id,
            client,
        }
    }

    pub async fn create_resource_group(
        &self,
        name: &str,
        location: &str,
        tags: Option<HashMap<String, String>>,
    ) -> bool {
        if let Err(e) = validation::validate_non_empty_string("resource_group", name)
            .and_then(|_| validation::validate_non_empty_string("location", location))
        {
            tracing::error!("Invalid resource group parameters: {}", e);
            return false;
        }

        tracing::info!("Creating resource group: {}", name);

        let params = ResourceGroupParams {
            location: location.to_string(),
            tags: tags.unwrap_or_default(),
        };

        match self.client.create_or_update(name, &params).await {
            Ok(group) => {
                tracing::info!("Resource group created successfully: {}", group.name);
                true
            }
            Err(e) => {
                match &e {
                    ArmError::ProviderError { .. } | ArmError::AuthError { .. } => {
                        tracing::error!("Azure error creating resource group: {}", e)
                    }
                    _ => tracing::error!("Unexpected error: {}", e),
                }
                false
            }
        }
    }

    pub async fn list_resource_groups(&self) -> Option<Vec<ResourceGroup>> {
        tracing::info!(
            "Listing resource groups in subscription {}",
            self.subscription_id
        );

        match self.client.list().await {
            Ok(groups) => {
                tracing::info!("Found {} resource groups", groups.len());
                Some(groups)
            }
            Err(e) => {
                match &e {
                    ArmError::ProviderError { .. } | ArmError::AuthError { .. } => {
                        tracing::error!("Azure error listing resource groups: {}", e)
                    }
                    _ => tracing::error!("Unexpected error: {}", e),
                }
                None
            }
        }
    }
}
