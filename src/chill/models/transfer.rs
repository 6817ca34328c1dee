use super::{Operation, OperationKind, OperationType, User};

use crate::ids::UserName;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Cannot transfer with an operation of type: {0}")]
    NotATransfer(OperationType),

    #[error("Transfer addressed to {expected} cannot be credited to {found}")]
    RecipientMismatch { expected: UserName, found: UserName },
}

/// Moves the amount of a transfer operation from `sender` to `recipient`.
///
/// Either both sides happen or neither does:
/// - the sender must hold strictly more than the amount,
/// - the recipient gets a paired deposit in its own history,
/// - the transfer itself is appended to the sender's history last.
pub fn transfer(sender: &mut User, recipient: &mut User, operation: Operation) -> Result {
    match operation.recipient() {
        Some(name) if name == recipient.name() => {}
        Some(name) => Err(TransferError::RecipientMismatch {
            expected: name.clone(),
            found: recipient.name().clone(),
        })?,
        None => Err(TransferError::NotATransfer(operation.kind()))?,
    }

    let amount = operation.amount();

    operation.apply(sender.account_mut())?;

    let deposit = Operation::at(OperationKind::Deposit, amount, operation.timestamp());

    if let Err(e) = recipient.execute(deposit) {
        log::warn!(
            "Rolling back transfer of {amount} from {} to {}: {e}",
            sender.name(),
            recipient.name()
        );
        sender.account_mut().deposit(amount)?;
        return Err(e);
    }

    sender.record(operation);

    Ok(())
}
