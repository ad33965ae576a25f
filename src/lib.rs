pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::arm::ArmClient;
pub use crate::adapters::credential::ClientSecretCredential;
pub use crate::config::CliConfig;
pub use crate::core::dispatch::dispatch;
pub use crate::core::manager::ResourceManager;
pub use crate::utils::error::{ArmError, Result};
