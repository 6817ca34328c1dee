use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalEvent {
    pub amount: Money,
}
