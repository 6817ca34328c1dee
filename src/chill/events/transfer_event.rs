use crate::ids::UserName;
use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub amount: Money,
    pub receiver: UserName,
}
