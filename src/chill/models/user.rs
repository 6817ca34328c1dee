use super::{Account, Operation, Statistics};

use crate::ids::UserName;
use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Transfer of {0} to {1} needs the recipient user, it cannot be executed alone")]
    MissingCounterparty(Money, UserName),
}

/// A bank user: one account and the log of operations it executed.
///
/// The credential is stored and compared in plaintext.
#[derive(Debug, Clone)]
pub struct User {
    name: UserName,
    credential: String,
    account: Account,
    history: Vec<Operation>,
}

impl User {
    pub fn new(name: impl Into<String>, credential: impl Into<String>, account: Account) -> Self {
        Self {
            name: UserName::new(name),
            credential: credential.into(),
            account,
            history: vec![],
        }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn check_credential(&self, credential: &str) -> bool {
        self.credential == credential
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn balance(&self) -> Money {
        self.account.balance()
    }

    /// Executed operations, oldest first
    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    pub fn statistics(&self) -> Result<Statistics> {
        Statistics::from_history(&self.history)
    }

    /// Applies `operation` to this user's account and appends it to the history.
    ///
    /// Nothing is recorded when the account refuses the operation. Transfers
    /// involve a second user and go through [`crate::models::transfer`].
    pub fn execute(&mut self, operation: Operation) -> Result {
        if let Some(recipient) = operation.recipient() {
            Err(OperationError::MissingCounterparty(
                operation.amount(),
                recipient.clone(),
            ))?
        }

        operation.apply(&mut self.account)?;

        log::info!("{}: {operation}", self.name);
        self.history.push(operation);

        Ok(())
    }

    pub(crate) fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub(crate) fn record(&mut self, operation: Operation) {
        log::info!("{}: {operation}", self.name);
        self.history.push(operation);
    }
}
