use crate::ids::{AccountNumber, TaxId};
use crate::AccountError;

use thiserror::Error;

/// Failures of the bank-level operations. Account rule violations pass through unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Customer not found: {0}. Register the customer first.")]
    CustomerNotFound(TaxId),

    #[error("Customer already registered: {0}")]
    DuplicateCustomer(TaxId),

    #[error("Account {number} not found for customer {tax_id}")]
    AccountNotFound { tax_id: TaxId, number: AccountNumber },

    #[error("Customer {0} has no accounts. Open an account first.")]
    NoAccount(TaxId),

    #[error(transparent)]
    Account(#[from] AccountError),
}
