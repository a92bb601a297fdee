use crate::ids::{AccountNumber, TaxId};
use crate::statement::DATE_FORMAT;
use crate::{Money, MoneyError};

use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Menu option selected by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    ExportStatement,
    OpenAccount,
    ListAccounts,
    RegisterCustomer,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid option: {0:?}. Please try again.")]
    UnknownCommand(String),

    #[error("Invalid amount: {0}")]
    Amount(#[from] MoneyError),

    #[error("Invalid date {0:?}: expected dd/mm/yyyy")]
    Date(String),

    #[error("Invalid account number {0:?}")]
    AccountNumber(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_lowercase().as_str() {
            "d" => Self::Deposit,
            "s" => Self::Withdraw,
            "e" => Self::Statement,
            "x" => Self::ExportStatement,
            "nc" => Self::OpenAccount,
            "lc" => Self::ListAccounts,
            "nu" => Self::RegisterCustomer,
            "q" => Self::Quit,
            _ => return Err(InputError::UnknownCommand(s.trim().to_string())),
        };

        Ok(command)
    }
}

pub fn parse_tax_id(input: &str) -> Result<TaxId, InputError> {
    let tax_id = TaxId::new(input);

    if tax_id.as_str().is_empty() {
        return Err(InputError::Empty("Tax ID"));
    }

    Ok(tax_id)
}

/// Sign is kept, so non-positive amounts reach the account rules untouched
pub fn parse_amount(input: &str) -> Result<Money, InputError> {
    Ok(Money::parse(input)?)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| InputError::Date(input.trim().to_string()))
}

/// A blank answer selects the customer's first account
pub fn parse_account_number(input: &str) -> Result<Option<AccountNumber>, InputError> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(|number| Some(AccountNumber(number)))
        .map_err(|_| InputError::AccountNumber(input.to_string()))
}

pub fn parse_text(input: &str, field: &'static str) -> Result<String, InputError> {
    let text = input.trim();

    if text.is_empty() {
        return Err(InputError::Empty(field));
    }

    Ok(text.to_string())
}
