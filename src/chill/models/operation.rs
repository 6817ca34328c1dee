use super::Account;

use crate::ids::UserName;
use crate::Money;
use crate::Result;

use std::fmt;

use chrono::{DateTime, Local};

/// Timestamp layout of a rendered history record, e.g. `17 Oct 2026, 14:05`
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y, %H:%M";

/// Discriminant of an operation, used for display and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Deposit,
    Withdrawal,
    Transfer,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::Transfer => "transfer",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    /// The recipient is only referenced by name, its user is resolved by the directory
    Transfer { recipient: UserName },
}

/// A timestamped action on an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    kind: OperationKind,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl Operation {
    pub fn deposit(amount: Money) -> Self {
        Self::at(OperationKind::Deposit, amount, Local::now())
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self::at(OperationKind::Withdrawal, amount, Local::now())
    }

    pub fn transfer(amount: Money, recipient: UserName) -> Self {
        Self::at(OperationKind::Transfer { recipient }, amount, Local::now())
    }

    pub fn at(kind: OperationKind, amount: Money, timestamp: DateTime<Local>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> OperationType {
        match self.kind {
            OperationKind::Deposit => OperationType::Deposit,
            OperationKind::Withdrawal => OperationType::Withdrawal,
            OperationKind::Transfer { .. } => OperationType::Transfer,
        }
    }

    pub fn recipient(&self) -> Option<&UserName> {
        match &self.kind {
            OperationKind::Transfer { recipient } => Some(recipient),
            _ => None,
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Amount as seen by the balance of the user who executed it
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            OperationKind::Deposit => self.amount,
            OperationKind::Withdrawal | OperationKind::Transfer { .. } => {
                Money(self.amount.0.saturating_neg())
            }
        }
    }

    /// Applies this operation to one account.
    ///
    /// For a transfer this is only the sender's half; crediting the recipient is
    /// done by [`crate::models::transfer`].
    pub fn apply(&self, account: &mut Account) -> Result {
        match self.kind {
            OperationKind::Deposit => account.deposit(self.amount),
            OperationKind::Withdrawal | OperationKind::Transfer { .. } => {
                account.withdraw(self.amount)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind().as_str().to_uppercase(),
            self.amount,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}
