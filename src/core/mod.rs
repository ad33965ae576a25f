pub mod dispatch;
pub mod manager;

pub use crate::core::manager::ResourceManager;
pub use crate::domain::model::{AccessToken, ResourceGroup, ResourceGroupParams};
pub use crate::domain::ports::{ManagementClient, TokenCredential};
pub use crate::utils::error::Result;
