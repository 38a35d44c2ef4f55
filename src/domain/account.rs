//! Account
//!
//! A single in-memory balance guarded by validation rules.
//! Every check runs before the balance is touched, so a rejected
//! operation leaves the account exactly as it was.

use rust_decimal::Decimal;

use super::DomainError;

/// Account holding one balance.
///
/// # Invariants
/// - Balance is never negative after `new` or `deposit` succeed
/// - A failed operation never mutates the balance
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use account_demo::domain::Account;
///
/// let mut account = Account::new(Decimal::new(100, 0)).unwrap();
/// account.deposit(Decimal::new(50, 0)).unwrap();
/// assert_eq!(account.balance(), Decimal::new(150, 0));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    /// Create an account with an initial balance.
    ///
    /// # Errors
    /// - `DomainError::IllegalBalance` if `initial_balance < 0`
    pub fn new(initial_balance: Decimal) -> Result<Self, DomainError> {
        if initial_balance < Decimal::ZERO {
            tracing::debug!(%initial_balance, "rejected negative initial balance");
            return Err(DomainError::illegal_balance(initial_balance));
        }

        tracing::debug!(%initial_balance, "account created");
        Ok(Self {
            balance: initial_balance,
        })
    }

    /// Deposit money into the account.
    ///
    /// # Errors
    /// - `DomainError::IllegalBalance` if `amount < 0`
    /// - `DomainError::Overflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        if amount < Decimal::ZERO {
            tracing::debug!(%amount, balance = %self.balance, "rejected negative deposit");
            return Err(DomainError::illegal_balance(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.overflow(amount))?;
        tracing::debug!(%amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraw money from the account.
    ///
    /// Only sufficiency is checked. A negative amount passes through and
    /// raises the balance; it is logged at warn level rather than rejected.
    ///
    /// # Errors
    /// - `DomainError::InsufficientFunds` if `amount > balance`
    /// - `DomainError::Overflow` if the new balance is not representable
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), DomainError> {
        if amount > self.balance {
            tracing::debug!(%amount, balance = %self.balance, "rejected withdrawal");
            return Err(DomainError::insufficient_funds(amount, self.balance));
        }

        if amount < Decimal::ZERO {
            tracing::warn!(%amount, "negative withdrawal accepted; balance will increase");
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| self.overflow(amount))?;
        tracing::debug!(%amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    fn overflow(&self, amount: Decimal) -> DomainError {
        tracing::error!(%amount, balance = %self.balance, "balance arithmetic overflowed");
        DomainError::overflow(self.balance, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_new() {
        let account = Account::new(dec!(100.0)).unwrap();
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_account_new_zero_allowed() {
        let account = Account::new(Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_account_new_negative_rejected() {
        let result = Account::new(dec!(-0.01));
        assert!(matches!(result, Err(DomainError::IllegalBalance { .. })));
    }

    #[test]
    fn test_account_deposit() {
        let mut account = Account::new(dec!(100)).unwrap();
        account.deposit(dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150));

        account.deposit(Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), dec!(150));
    }

    #[test]
    fn test_account_deposit_negative_rejected() {
        let mut account = Account::new(dec!(100)).unwrap();
        let result = account.deposit(dec!(-1));

        assert_eq!(result, Err(DomainError::illegal_balance(dec!(-1))));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_account_withdraw() {
        let mut account = Account::new(dec!(150)).unwrap();
        account.withdraw(dec!(30)).unwrap();
        assert_eq!(account.balance(), dec!(120));
    }

    #[test]
    fn test_account_withdraw_entire_balance() {
        let mut account = Account::new(dec!(120)).unwrap();
        account.withdraw(dec!(120)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_account_insufficient_funds() {
        let mut account = Account::new(dec!(120)).unwrap();
        let result = account.withdraw(dec!(150));

        assert_eq!(
            result,
            Err(DomainError::insufficient_funds(dec!(150), dec!(120)))
        );
        assert_eq!(account.balance(), dec!(120));
    }

    #[test]
    fn test_repeated_failures_do_not_mutate() {
        let mut account = Account::new(dec!(10)).unwrap();

        for _ in 0..5 {
            assert!(account.withdraw(dec!(11)).is_err());
            assert!(account.deposit(dec!(-3)).is_err());
        }
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut account = Account::new(Decimal::MAX).unwrap();
        let result = account.deposit(Decimal::ONE);

        assert_eq!(result, Err(DomainError::overflow(Decimal::MAX, Decimal::ONE)));
        assert!(!result.unwrap_err().is_client_error());
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_negative_withdrawal_overflow_rejected() {
        let mut account = Account::new(Decimal::MAX).unwrap();
        let result = account.withdraw(-Decimal::ONE);

        assert!(matches!(result, Err(DomainError::Overflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    // Reference behavior: negative withdrawals are not validated
    #[test]
    fn test_negative_withdrawal_increases_balance() {
        let mut account = Account::new(dec!(10)).unwrap();
        account.withdraw(dec!(-5)).unwrap();
        assert_eq!(account.balance(), dec!(15));
    }
}
