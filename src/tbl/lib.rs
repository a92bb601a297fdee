pub mod account;
mod bank;
mod config;
pub mod console;
mod customer;
mod error;
mod history;
pub mod ids;
pub mod input;
mod money;
mod result;
mod statement;
mod transaction;

pub use account::{Account, AccountError, AccountKind, CheckingPolicy};
pub use bank::Bank;
pub use config::{BankConfig, ConfigError};
pub use customer::Customer;
pub use error::BankError;
pub use history::{History, TransactionKind, TransactionRecord};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use statement::{Statement, StatementRow};
pub use transaction::Transaction;
