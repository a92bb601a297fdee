use crate::history::TransactionRecord;
use crate::ids::{AccountNumber, TaxId};
use crate::{Account, BankError, Transaction};

use chrono::NaiveDate;

/// An individual customer. Accounts are held by number, the bank owns the accounts themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(
        tax_id: TaxId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            tax_id,
            name: name.into(),
            birth_date,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn first_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub fn owns(&self, number: AccountNumber) -> bool {
        self.accounts.contains(&number)
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Runs the transaction against one of this customer's own accounts
    pub fn execute_transaction(
        &self,
        transaction: &Transaction,
        account: &mut Account,
        date: NaiveDate,
    ) -> Result<TransactionRecord, BankError> {
        if !self.owns(account.number()) {
            return Err(BankError::AccountNotFound {
                tax_id: self.tax_id.clone(),
                number: account.number(),
            });
        }

        log::debug!(
            "Customer {} executing {transaction:?} on account {}",
            self.tax_id,
            account.number()
        );

        Ok(transaction.register(account, date)?)
    }
}
