use super::{Operation, OperationType};

use crate::Money;
use crate::Result;

/// Running totals of a user's history: per-kind sums and the net change
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total: Money,
    pub deposit: Money,
    pub withdrawal: Money,
    pub transfer: Money,
}

impl Statistics {
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a Operation>) -> Result<Self> {
        let mut statistics = Self::default();

        for operation in history {
            let amount = operation.amount();

            match operation.kind() {
                OperationType::Deposit => statistics.deposit.add(&amount)?,
                OperationType::Withdrawal => statistics.withdrawal.add(&amount)?,
                OperationType::Transfer => statistics.transfer.add(&amount)?,
            }

            statistics.total.add(&operation.signed_amount())?;
        }

        Ok(statistics)
    }
}
