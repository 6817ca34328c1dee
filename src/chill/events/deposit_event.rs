use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositEvent {
    pub amount: Money,
}
