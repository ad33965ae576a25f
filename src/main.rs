use arm_automation::core::dispatch::dispatch;
use arm_automation::utils::{logger, validation::Validate};
use arm_automation::{ArmClient, ClientSecretCredential, CliConfig, ResourceManager};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if let Err(e) = logger::init_cli_logger(&config.log_level) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting arm-automation CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 憑證與管理客戶端在行程生命週期內共用
    let credential = ClientSecretCredential::from_env();
    let client = ArmClient::new(
        credential,
        config.management_endpoint.clone(),
        config.subscription_id.clone(),
    );
    let manager = ResourceManager::new(config.subscription_id.clone(), client);

    let code = tokio::select! {
        code = dispatch(&config, &manager) => code,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Operation cancelled by user");
            130
        }
    };

    match code {
        0 => println!("✅ Operation completed successfully"),
        130 => eprintln!("❌ Operation cancelled by user"),
        _ => eprintln!("❌ Operation failed"),
    }
    std::process::exit(code);
}
