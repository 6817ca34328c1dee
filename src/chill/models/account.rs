use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { balance: Money, requested: Money },
}

/// Balance holder owned by exactly one user
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Money,
}

impl Account {
    pub fn new(initial_balance: Money) -> Self {
        Self {
            balance: initial_balance,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result {
        self.balance.add(&amount)
    }

    /// A withdrawal needs strictly more than `amount` on the account, so the
    /// whole balance can never be taken out.
    pub fn can_withdraw(&self, amount: Money) -> bool {
        self.balance > amount
    }

    pub fn withdraw(&mut self, amount: Money) -> Result {
        if !self.can_withdraw(amount) {
            Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            })?
        }

        self.balance.sub(&amount)
    }
}
