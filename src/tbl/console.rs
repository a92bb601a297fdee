use crate::ids::AccountNumber;
use crate::input::{self, Command};
use crate::{Bank, BankError, Customer, Money, Result, Transaction};

use std::io::{self, BufRead, Write};

const MENU: &str = "
================ MENU ================
[d]  Deposit
[s]  Withdraw
[e]  Statement
[x]  Statement (CSV)
[nc] New account
[lc] List accounts
[nu] New customer
[q]  Quit
=> ";

const RULE_WIDTH: usize = 38;

/// Interactive menu loop over any line-based input and output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs commands until the operator quits or the input ends. Rejected operations are reported
    /// and the loop carries on; only I/O failures end it early.
    pub fn run(&mut self, bank: &mut Bank) -> Result {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    log::debug!("End of input, leaving menu loop");
                    break;
                }
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    log::warn!("{e}");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            log::debug!("Running command: {command:?}");

            if command == Command::Quit {
                break;
            }

            if let Err(e) = self.dispatch(bank, command) {
                if e.downcast_ref::<io::Error>().is_some() {
                    return Err(e);
                }

                log::warn!("{command:?} failed: {e}");
                writeln!(self.output, "Operation failed! {e}")?;
            }
        }

        writeln!(self.output, "Thank you for banking with us. Goodbye!")?;
        self.output.flush()?;

        Ok(())
    }

    fn dispatch(&mut self, bank: &mut Bank, command: Command) -> Result {
        match command {
            Command::Deposit => self.transact(bank, Transaction::deposit),
            Command::Withdraw => self.transact(bank, Transaction::withdrawal),
            Command::Statement => self.statement(bank, false),
            Command::ExportStatement => self.statement(bank, true),
            Command::OpenAccount => self.open_account(bank),
            Command::ListAccounts => self.list_accounts(bank),
            Command::RegisterCustomer => self.register_customer(bank),
            Command::Quit => Ok(()),
        }
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();

        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// End of input reads as an empty answer
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        Ok(self.read_line()?.unwrap_or_default())
    }

    fn find_customer<'b>(&mut self, bank: &'b Bank) -> Result<&'b Customer> {
        let tax_id = input::parse_tax_id(&self.prompt("Customer tax ID")?)?;

        let customer = bank
            .find_customer(&tax_id)
            .ok_or(BankError::CustomerNotFound(tax_id))?;

        Ok(customer)
    }

    /// Customers holding several accounts pick one, a blank answer selects the first
    fn select_account(&mut self, customer: &Customer) -> Result<Option<AccountNumber>> {
        let accounts = customer.accounts();

        if accounts.is_empty() {
            return Err(BankError::NoAccount(customer.tax_id().clone()).into());
        }

        if accounts.len() == 1 {
            return Ok(None);
        }

        let listed = accounts
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let answer = self.prompt(&format!("Account number ({listed}) [first]"))?;

        Ok(input::parse_account_number(&answer)?)
    }

    fn transact(&mut self, bank: &mut Bank, build: fn(Money) -> Transaction) -> Result {
        let customer = self.find_customer(bank)?;
        let tax_id = customer.tax_id().clone();
        let number = self.select_account(customer)?;

        let amount = input::parse_amount(&self.prompt("Amount")?)?;

        let record = bank.execute(&tax_id, number, build(amount))?;

        writeln!(
            self.output,
            "{} of R$ {} completed successfully!",
            record.kind(),
            record.amount()
        )?;

        Ok(())
    }

    fn statement(&mut self, bank: &Bank, as_csv: bool) -> Result {
        let customer = self.find_customer(bank)?;
        let number = self.select_account(customer)?;

        let statement = bank.statement(customer.tax_id(), number)?;

        if as_csv {
            write!(self.output, "{}", statement.to_csv()?)?;
        } else {
            writeln!(self.output, "\n{statement}")?;
        }

        Ok(())
    }

    fn open_account(&mut self, bank: &mut Bank) -> Result {
        let tax_id = input::parse_tax_id(&self.prompt("Customer tax ID")?)?;

        let account = bank.open_account(&tax_id)?;

        writeln!(
            self.output,
            "Account created successfully! Account number: {}",
            account.number()
        )?;

        Ok(())
    }

    fn list_accounts(&mut self, bank: &Bank) -> Result {
        if bank.accounts().is_empty() {
            writeln!(self.output, "No accounts registered.")?;
            return Ok(());
        }

        writeln!(self.output, "\nAccounts:")?;

        for account in bank.accounts() {
            let holder = bank.holder_of(account).map(Customer::name).unwrap_or("-");

            writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
            writeln!(self.output, "Agency: {}", account.agency())?;
            writeln!(self.output, "Account: {}", account.number())?;
            writeln!(self.output, "Holder: {holder}")?;
            writeln!(self.output, "Kind: {}", account.kind())?;
        }

        Ok(())
    }

    fn register_customer(&mut self, bank: &mut Bank) -> Result {
        let tax_id = input::parse_tax_id(&self.prompt("Tax ID (numbers only)")?)?;

        // reject before asking for the remaining details
        if bank.find_customer(&tax_id).is_some() {
            return Err(BankError::DuplicateCustomer(tax_id).into());
        }

        let name = input::parse_text(&self.prompt("Full name")?, "Name")?;
        let birth_date = input::parse_date(&self.prompt("Birth date (dd/mm/yyyy)")?)?;
        let address = input::parse_text(
            &self.prompt("Address (street, number - district - city/state)")?,
            "Address",
        )?;

        let customer = bank.register_customer(Customer::new(tax_id, name, birth_date, address))?;

        writeln!(self.output, "Customer {} registered successfully!", customer.name())?;

        Ok(())
    }
}
