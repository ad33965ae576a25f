use crate::config::{automation_tags, Action, CliConfig};
use crate::core::{ManagementClient, ResourceManager};
use crate::utils::validation::validate_required_field;

/// Executes the requested action and returns the process exit code.
pub async fn dispatch<C: ManagementClient>(
    config: &CliConfig,
    manager: &ResourceManager<C>,
) -> i32 {
    match config.action {
        Action::Create => {
            let name = match validate_required_field("resource_group", &config.resource_group) {
                Ok(name) => name,
                Err(_) => {
                    tracing::error!("Resource group name is required for create action");
                    return 1;
                }
            };

            let tags = automation_tags(config.environment);

            if manager
                .create_resource_group(name, &config.location, Some(tags))
                .await
            {
                tracing::info!("Resource group creation completed successfully");
                0
            } else {
                tracing::error!("Resource group creation failed");
                1
            }
        }
        Action::List => match manager.list_resource_groups().await {
            Some(groups) => {
                tracing::info!("Resource Groups:");
                for group in &groups {
                    tracing::info!("  - {} ({})", group.name, group.location);
                }
                0
            }
            None => {
                tracing::error!("Failed to list resource groups");
                1
            }
        },
    }
}
