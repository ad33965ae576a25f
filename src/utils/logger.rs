use crate::utils::error::{ArmError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the Python-style level names (`--log-level`) to tracing directives.
fn parse_level(name: &str) -> Result<&'static str> {
    match name.to_ascii_uppercase().as_str() {
        "DEBUG" => Ok("debug"),
        "INFO" => Ok("info"),
        "WARNING" | "WARN" => Ok("warn"),
        "ERROR" => Ok("error"),
        _ => Err(ArmError::InvalidConfigValueError {
            field: "log_level".to_string(),
            value: name.to_string(),
            reason: "expected DEBUG, INFO, WARNING or ERROR".to_string(),
        }),
    }
}

pub fn init_cli_logger(log_level: &str) -> Result<()> {
    let level = parse_level(log_level)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arm_automation={},info", level)));

    // 重複呼叫時沿用既有的 subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    Ok(())
}
