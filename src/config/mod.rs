use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "arm-automation")]
#[command(about = "Azure resource group management automation")]
pub struct CliConfig {
    #[arg(long, value_enum, help = "Action to perform")]
    pub action: Action,

    #[arg(long, help = "Azure subscription ID")]
    pub subscription_id: String,

    #[arg(long, help = "Resource group name (required for create action)")]
    pub resource_group: Option<String>,

    #[arg(long, default_value = "West Europe", help = "Azure location")]
    pub location: String,

    #[arg(long, value_enum, default_value_t = Environment::Dev)]
    pub environment: Environment,

    #[arg(long, default_value = "INFO", help = "Logging level (DEBUG, INFO, WARNING, ERROR)")]
    pub log_level: String,

    #[arg(long, default_value = "https://management.azure.com")]
    pub management_endpoint: String,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("subscription_id", &self.subscription_id)?;
        validation::validate_non_empty_string("location", &self.location)?;
        validation::validate_url("management_endpoint", &self.management_endpoint)?;
        if let Some(resource_group) = &self.resource_group {
            validation::validate_non_empty_string("resource_group", resource_group)?;
        }
        Ok(())
    }
}

/// Tag set attached to every resource group this tool creates.
pub fn automation_tags(environment: Environment) -> HashMap<String, String> {
    HashMap::from([
        ("Environment".to_string(), environment.as_str().to_string()),
        ("ManagedBy".to_string(), "DevOps-Automation".to_string()),
        ("Project".to_string(), "DevOps-Tools".to_string()),
    ])
}
