use crate::history::TransactionRecord;
use crate::ids::AccountNumber;
use crate::{Account, Money, Result};

use std::fmt;

use csv::Writer;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

const BANNER_WIDTH: usize = 42;

#[derive(Serialize, Debug, PartialEq)]
pub struct StatementRow {
    pub kind: String,
    pub amount: String,
    pub date: String,
}

impl From<&TransactionRecord> for StatementRow {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            kind: record.kind().to_string(),
            amount: record.amount().to_string(),
            date: record.date().format(DATE_FORMAT).to_string(),
        }
    }
}

/// An account's transactions in the order they were applied, followed by its balance
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub agency: String,
    pub number: AccountNumber,
    pub records: Vec<TransactionRecord>,
    pub balance: Money,
}

impl Statement {
    pub fn of(account: &Account) -> Self {
        Self {
            agency: account.agency().to_string(),
            number: account.number(),
            records: account.history().iter().cloned().collect(),
            balance: account.balance(),
        }
    }

    pub fn rows(&self) -> Vec<StatementRow> {
        self.records.iter().map(StatementRow::from).collect()
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);

        for row in self.rows() {
            log::debug!("Serializing statement row: {row:?}");
            wtr.serialize(row)?;
        }

        // serialize only emits the header along with the first row
        if self.records.is_empty() {
            wtr.write_record(["kind", "amount", "date"])?;
        }

        let utf8 = wtr.into_inner()?;
        let string = String::from_utf8(utf8)?;

        Ok(string)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:=^width$}", " STATEMENT ", width = BANNER_WIDTH)?;
        writeln!(f, "Agency: {} | Account: {}", self.agency, self.number)?;
        writeln!(f)?;

        if self.records.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }

        for record in self.records.iter() {
            writeln!(
                f,
                "{}: R$ {} - {}",
                record.kind(),
                record.amount(),
                record.date().format(DATE_FORMAT)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Balance: R$ {}", self.balance)?;
        write!(f, "{}", "=".repeat(BANNER_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TaxId;
    use crate::{CheckingPolicy, Transaction};

    use chrono::NaiveDate;

    fn build_account() -> Account {
        Account::checking(AccountNumber(3), TaxId::new("111"), CheckingPolicy::default())
    }

    fn register(account: &mut Account, transaction: Transaction, day: u32) {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        transaction.register(account, date).unwrap();
    }

    #[test]
    fn text_in_insertion_order() {
        let mut account = build_account();
        register(&mut account, Transaction::deposit(Money::units(1000)), 1);
        register(&mut account, Transaction::withdrawal(Money(250_5000)), 2);
        register(&mut account, Transaction::deposit(Money(1234)), 9);

        let text = Statement::of(&account).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=============== STATEMENT ================");
        assert_eq!(lines[1], "Agency: 0001 | Account: 3");
        assert_eq!(
            &lines[3..6],
            &[
                "Deposit: R$ 1000.00 - 01/03/2024",
                "Withdrawal: R$ 250.50 - 02/03/2024",
                "Deposit: R$ 0.12 - 09/03/2024",
            ]
        );
        assert_eq!(lines[7], "Balance: R$ 749.62");
        assert_eq!(lines[8], "=".repeat(42));
    }

    #[test]
    fn text_without_transactions() {
        let text = Statement::of(&build_account()).to_string();

        assert!(text.contains("No transactions recorded."));
        assert!(text.contains("Balance: R$ 0.00"));
    }

    #[test]
    fn csv() {
        let mut account = build_account();
        register(&mut account, Transaction::deposit(Money::units(100)), 1);
        register(&mut account, Transaction::withdrawal(Money::units(40)), 2);

        let csv = Statement::of(&account).to_csv().unwrap();

        assert_eq!(
            csv,
            "kind,amount,date\nDeposit,100.00,01/03/2024\nWithdrawal,40.00,02/03/2024\n"
        );
    }

    #[test]
    fn csv_without_transactions() {
        let csv = Statement::of(&build_account()).to_csv().unwrap();

        assert_eq!(csv, "kind,amount,date\n");
    }
}
