use crate::history::{History, TransactionKind};
use crate::ids::{AccountNumber, TaxId};
use crate::{Money, MoneyError};

use std::fmt;

use thiserror::Error;

pub const DEFAULT_AGENCY: &str = "0001";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {0}, amounts must be greater than zero")]
    InvalidAmount(Money),

    #[error("Insufficient funds: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Withdrawal of {requested} exceeds the per-withdrawal limit of {limit}")]
    LimitExceeded { requested: Money, limit: Money },

    #[error("Daily withdrawal count exceeded: {made} of {cap} withdrawals already made")]
    DailyCapExceeded { made: usize, cap: usize },

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Withdrawal rules of a checking account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub withdrawal_limit: Money,
    pub daily_withdrawal_cap: usize,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            withdrawal_limit: Money::units(500),
            daily_withdrawal_cap: 3,
        }
    }
}

/// Selected when the account is opened, and never changes afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Standard,
    Checking(CheckingPolicy),
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("Standard"),
            Self::Checking(_) => f.write_str("Checking"),
        }
    }
}

/// A customer's account. The balance only ever changes through `deposit` and `withdraw`, and
/// never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    agency: String,
    owner: TaxId,
    balance: Money,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: AccountNumber, owner: TaxId, kind: AccountKind) -> Self {
        Self {
            number,
            agency: DEFAULT_AGENCY.to_string(),
            owner,
            balance: Money::ZERO,
            history: History::new(),
            kind,
        }
    }

    pub fn standard(number: AccountNumber, owner: TaxId) -> Self {
        Self::new(number, owner, AccountKind::Standard)
    }

    pub fn checking(number: AccountNumber, owner: TaxId, policy: CheckingPolicy) -> Self {
        Self::new(number, owner, AccountKind::Checking(policy))
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = agency.into();
        self
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    /// Tax ID of the customer holding this account
    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        self.balance.add(&amount)?;

        log::debug!("Account {} balance after deposit: {}", self.number, self.balance);

        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        if let AccountKind::Checking(policy) = self.kind {
            self.check_policy(&policy, amount)?;
        }

        self.withdraw_from_balance(amount)
    }

    /// Per-withdrawal limit takes precedence over the withdrawal count, which takes precedence
    /// over any balance rule
    fn check_policy(&self, policy: &CheckingPolicy, amount: Money) -> Result<(), AccountError> {
        let made = self.history.count_of(TransactionKind::Withdrawal);

        if amount > policy.withdrawal_limit {
            return Err(AccountError::LimitExceeded {
                requested: amount,
                limit: policy.withdrawal_limit,
            });
        }

        if made >= policy.daily_withdrawal_cap {
            return Err(AccountError::DailyCapExceeded {
                made,
                cap: policy.daily_withdrawal_cap,
            });
        }

        Ok(())
    }

    fn withdraw_from_balance(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance.sub(&amount)?;

        log::debug!("Account {} balance after withdrawal: {}", self.number, self.balance);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::TransactionRecord;

    use chrono::NaiveDate;
    use proptest::prelude::*;

    const SOME_NUMBER: AccountNumber = AccountNumber(1);

    fn some_owner() -> TaxId {
        TaxId::new("111")
    }

    fn build_standard(balance: Money) -> Account {
        let mut account = Account::standard(SOME_NUMBER, some_owner());
        if balance.is_positive() {
            account.deposit(balance).unwrap();
        }
        account
    }

    fn build_checking(balance: Money, withdrawals_made: usize) -> Account {
        let mut account = Account::checking(SOME_NUMBER, some_owner(), CheckingPolicy::default());
        if balance.is_positive() {
            account.deposit(balance).unwrap();
        }
        for _ in 0..withdrawals_made {
            account.history_mut().append(TransactionRecord::new(
                TransactionKind::Withdrawal,
                Money::units(1),
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            ));
        }
        account
    }

    #[test]
    fn new_account_is_empty() {
        let account = Account::standard(SOME_NUMBER, some_owner());

        assert_eq!(account.number(), SOME_NUMBER);
        assert_eq!(account.agency(), DEFAULT_AGENCY);
        assert_eq!(account.owner(), &some_owner());
        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.history().is_empty());
        assert_eq!(account.kind(), AccountKind::Standard);
    }

    #[test]
    fn with_agency() {
        let account = Account::standard(SOME_NUMBER, some_owner()).with_agency("0042");

        assert_eq!(account.agency(), "0042");
    }

    #[test]
    fn deposit() {
        let mut account = build_standard(Money::ZERO);

        account.deposit(Money::units(100)).unwrap();
        account.deposit(Money(5000)).unwrap();

        assert_eq!(account.balance(), Money(100_5000));
        // recording is left to the transaction
        assert!(account.history().is_empty());
    }

    #[test]
    fn fail_to_deposit_zero() {
        let mut account = build_standard(Money::units(10));

        let err = account.deposit(Money::ZERO).unwrap_err();

        assert_eq!(err, AccountError::InvalidAmount(Money::ZERO));
        assert_eq!(account.balance(), Money::units(10));
    }

    #[test]
    fn fail_to_deposit_past_max() {
        let mut account = build_standard(Money::MAX);

        let err = account.deposit(Money(1)).unwrap_err();

        assert!(matches!(err, AccountError::Money(MoneyError::Overflow(..))));
        assert_eq!(account.balance(), Money::MAX);
    }

    #[test]
    fn withdraw_entire_balance() {
        let mut account = build_standard(Money::units(50));

        account.withdraw(Money::units(50)).unwrap();

        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn fail_to_withdraw_more_than_balance() {
        let mut account = build_standard(Money::units(50));

        let err = account.withdraw(Money(50_0001)).unwrap_err();

        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: Money(50_0001),
                balance: Money::units(50),
            }
        );
        assert_eq!(account.balance(), Money::units(50));
    }

    #[test]
    fn standard_account_has_no_withdrawal_policy() {
        let mut account = build_standard(Money::units(5000));

        for _ in 0..5 {
            account.withdraw(Money::units(600)).unwrap();
        }

        assert_eq!(account.balance(), Money::units(2000));
    }

    #[test]
    fn checking_withdraw_within_policy() {
        let mut account = build_checking(Money::units(1000), 2);

        account.withdraw(Money::units(500)).unwrap();

        assert_eq!(account.balance(), Money::units(500));
    }

    #[test]
    fn checking_fail_to_withdraw_over_limit() {
        let mut account = build_checking(Money::units(1000), 0);

        let err = account.withdraw(Money::units(600)).unwrap_err();

        assert_eq!(
            err,
            AccountError::LimitExceeded {
                requested: Money::units(600),
                limit: Money::units(500),
            }
        );
        assert_eq!(account.balance(), Money::units(1000));
    }

    #[test]
    fn checking_fail_to_withdraw_past_cap() {
        let mut account = build_checking(Money::units(1000), 3);

        let err = account.withdraw(Money::units(1)).unwrap_err();

        assert_eq!(err, AccountError::DailyCapExceeded { made: 3, cap: 3 });
        assert_eq!(account.balance(), Money::units(1000));
    }

    #[test]
    fn checking_limit_checked_before_cap_and_funds() {
        let mut account = build_checking(Money::ZERO, 3);

        let err = account.withdraw(Money::units(600)).unwrap_err();

        assert!(matches!(err, AccountError::LimitExceeded { .. }));
    }

    #[test]
    fn checking_cap_checked_before_funds() {
        let mut account = build_checking(Money::ZERO, 3);

        let err = account.withdraw(Money::units(100)).unwrap_err();

        assert!(matches!(err, AccountError::DailyCapExceeded { .. }));
    }

    #[test]
    fn checking_cap_checked_before_invalid_amount() {
        let mut account = build_checking(Money::units(10), 3);

        let err = account.withdraw(Money(-1)).unwrap_err();

        assert!(matches!(err, AccountError::DailyCapExceeded { .. }));
    }

    #[test]
    fn checking_fail_to_withdraw_more_than_balance() {
        let mut account = build_checking(Money::units(100), 0);

        let err = account.withdraw(Money::units(200)).unwrap_err();

        assert!(matches!(err, AccountError::InsufficientFunds { .. }));
    }

    #[test]
    fn kind_display() {
        assert_eq!(AccountKind::Standard.to_string(), "Standard");
        assert_eq!(
            AccountKind::Checking(CheckingPolicy::default()).to_string(),
            "Checking"
        );
    }

    proptest! {
        #[test]
        fn deposit_increases_balance_by_amount(
            start in 0i64..1_000_000_0000,
            amount in 1i64..1_000_000_0000,
        ) {
            let mut account = build_standard(Money(start));

            account.deposit(Money(amount)).unwrap();

            prop_assert_eq!(account.balance(), Money(start + amount));
        }

        #[test]
        fn non_positive_amounts_leave_account_unchanged(
            start in 0i64..1_000_000_0000,
            amount in -1_000_000_0000i64..=0,
        ) {
            let mut account = build_standard(Money(start));
            let before = account.clone();

            let expected = Err(AccountError::InvalidAmount(Money(amount)));
            prop_assert_eq!(account.deposit(Money(amount)), expected.clone());
            prop_assert_eq!(account.withdraw(Money(amount)), expected);
            prop_assert_eq!(account, before);
        }

        #[test]
        fn standard_withdraw_succeeds_iff_within_balance(
            start in 0i64..1_000_0000,
            amount in -1_000_0000i64..2_000_0000,
        ) {
            let mut account = build_standard(Money(start));

            let result = account.withdraw(Money(amount));

            if amount > 0 && amount <= start {
                prop_assert!(result.is_ok());
                prop_assert_eq!(account.balance(), Money(start - amount));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(account.balance(), Money(start));
            }
        }

        #[test]
        fn checking_withdraw_over_limit_always_fails(
            over in 1i64..1_000_0000,
            withdrawals_made in 0usize..3,
        ) {
            let limit = CheckingPolicy::default().withdrawal_limit;
            let amount = Money(limit.0 + over);
            let mut account = build_checking(Money::units(100_000), withdrawals_made);

            let err = account.withdraw(amount).unwrap_err();

            prop_assert_eq!(err, AccountError::LimitExceeded { requested: amount, limit });
            prop_assert_eq!(account.balance(), Money::units(100_000));
        }
    }
}
