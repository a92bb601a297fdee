mod config;

use std::io;

use tbl::{console::Console, Bank, Result};

fn main() -> Result {
    let bank_config = config::configure_app()?;

    let mut bank = Bank::with_config(bank_config);

    log::debug!("Application configured. Opened bank with {:?}", bank.config());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.run(&mut bank)?;

    log::debug!(
        "Session finished with {} customers and {} accounts",
        bank.customers().len(),
        bank.accounts().len()
    );

    Ok(())
}
