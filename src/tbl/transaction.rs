use crate::history::{TransactionKind, TransactionRecord};
use crate::{Account, AccountError, Money};

use chrono::NaiveDate;

/// Transaction represents a requested change to an account's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Self::Deposit { amount }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self::Withdrawal { amount }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    /// Applies the transaction to the account, recording it in the account's history only when
    /// the account accepted the change
    pub fn register(
        &self,
        account: &mut Account,
        date: NaiveDate,
    ) -> Result<TransactionRecord, AccountError> {
        match self {
            Self::Deposit { amount } => account.deposit(*amount)?,
            Self::Withdrawal { amount } => account.withdraw(*amount)?,
        }

        let record = TransactionRecord::new(self.kind(), self.amount(), date);
        let index = account.history_mut().append(record.clone());

        log::info!(
            "{} of {} registered on account {} at history index {index}",
            record.kind(),
            record.amount(),
            account.number(),
        );

        Ok(record)
    }
}
