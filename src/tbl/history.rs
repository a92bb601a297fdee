use crate::Money;

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        };

        f.write_str(name)
    }
}

/// Immutable entry describing a transaction that was applied to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Money,
    date: NaiveDate,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Money, date: NaiveDate) -> Self {
        Self { kind, amount, date }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Represents a WORM (Write Once, Read Many) log of the transactions applied to a single account
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only transactions append to a history, once the account accepted the change
    pub(crate) fn append(&mut self, record: TransactionRecord) -> usize {
        let index = self.records.len();

        self.records.push(record);

        index
    }

    pub fn get_by_index(&self, index: usize) -> Option<&TransactionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.records.iter().filter(|record| record.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
