use crate::history::TransactionRecord;
use crate::ids::{AccountNumber, TaxId};
use crate::{Account, AccountKind, BankConfig, BankError, Customer, Statement, Transaction};

use chrono::{Local, NaiveDate};

/// Session context holding every customer and account registered during a run
#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    customers: Vec<Customer>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BankConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn register_customer(&mut self, customer: Customer) -> Result<&Customer, BankError> {
        if self.find_customer(customer.tax_id()).is_some() {
            return Err(BankError::DuplicateCustomer(customer.tax_id().clone()));
        }

        log::info!("Registered customer {} ({})", customer.tax_id(), customer.name());

        let index = self.customers.len();
        self.customers.push(customer);

        Ok(&self.customers[index])
    }

    pub fn find_customer(&self, tax_id: &TaxId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.tax_id() == tax_id)
    }

    pub fn first_account_of(&self, customer: &Customer) -> Option<&Account> {
        customer.first_account().and_then(|number| self.account(number))
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// Holder of the given account, if registered with this bank
    pub fn holder_of(&self, account: &Account) -> Option<&Customer> {
        self.find_customer(account.owner())
    }

    /// Opens a checking account using the configured withdrawal policy
    pub fn open_account(&mut self, tax_id: &TaxId) -> Result<&Account, BankError> {
        let kind = AccountKind::Checking(self.config.checking);
        self.open_account_of_kind(tax_id, kind)
    }

    pub fn open_account_of_kind(
        &mut self,
        tax_id: &TaxId,
        kind: AccountKind,
    ) -> Result<&Account, BankError> {
        let number = AccountNumber(self.accounts.len() as u32 + 1);

        let customer = self
            .customers
            .iter_mut()
            .find(|customer| customer.tax_id() == tax_id)
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.clone()))?;

        customer.add_account(number);

        let account =
            Account::new(number, tax_id.clone(), kind).with_agency(self.config.agency.clone());

        log::info!("Opened {kind} account {number} for customer {tax_id}");

        let index = self.accounts.len();
        self.accounts.push(account);

        Ok(&self.accounts[index])
    }

    /// Has the customer execute the transaction against one of their accounts, dated today.
    /// When no account number is given, the customer's first account is used.
    pub fn execute(
        &mut self,
        tax_id: &TaxId,
        number: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<TransactionRecord, BankError> {
        let today = Local::now().date_naive();
        self.execute_on(tax_id, number, transaction, today)
    }

    pub fn execute_on(
        &mut self,
        tax_id: &TaxId,
        number: Option<AccountNumber>,
        transaction: Transaction,
        date: NaiveDate,
    ) -> Result<TransactionRecord, BankError> {
        let customer = self
            .customers
            .iter()
            .find(|customer| customer.tax_id() == tax_id)
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.clone()))?;

        let number = Self::resolve_number(customer, number)?;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| BankError::AccountNotFound {
                tax_id: tax_id.clone(),
                number,
            })?;

        customer.execute_transaction(&transaction, account, date)
    }

    /// Statement for one of the customer's accounts, defaulting to their first account
    pub fn statement(
        &self,
        tax_id: &TaxId,
        number: Option<AccountNumber>,
    ) -> Result<Statement, BankError> {
        let customer = self
            .find_customer(tax_id)
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.clone()))?;

        let number = Self::resolve_number(customer, number)?;

        if !customer.owns(number) {
            return Err(BankError::AccountNotFound {
                tax_id: tax_id.clone(),
                number,
            });
        }

        let account = self.account(number).ok_or_else(|| BankError::AccountNotFound {
            tax_id: tax_id.clone(),
            number,
        })?;

        Ok(Statement::of(account))
    }

    fn resolve_number(
        customer: &Customer,
        number: Option<AccountNumber>,
    ) -> Result<AccountNumber, BankError> {
        match number {
            Some(number) => Ok(number),
            None => customer
                .first_account()
                .ok_or_else(|| BankError::NoAccount(customer.tax_id().clone())),
        }
    }
}
