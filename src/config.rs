use tbl::{BankConfig, Result};

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger, then reads the bank settings from the environment
pub fn configure_app() -> Result<BankConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let bank_config = BankConfig::from_env()?;

    return Ok(bank_config);
}
