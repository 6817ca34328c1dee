use crate::ids::{UserId, UserName};
use crate::models::{self, Operation, User};
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Invalid credentials for user: {0}")]
    InvalidCredentials(UserName),

    #[error("Transfer recipient not found: {0}")]
    RecipientNotFound(UserName),

    #[error("User {0} cannot transfer to itself")]
    SelfTransfer(UserName),
}

/// Registry of users, looked up by name or by the id `add` handed out.
///
/// Names are not required to be unique; every name lookup returns the first
/// user added under a name. Ids always address exactly one user.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, user: User) -> UserId {
        if self.find_id(user.name().as_str()).is_some() {
            log::warn!(
                "Duplicate user name {}: lookups by name will keep returning the first one",
                user.name()
            );
        }

        let id = UserId(self.users.len());
        self.users.push(user);

        id
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0)
    }

    pub fn find_id(&self, name: &str) -> Option<UserId> {
        self.users
            .iter()
            .position(|user| user.name() == name)
            .map(UserId)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.find_id(name).and_then(|id| self.get(id))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut User> {
        let id = self.find_id(name)?;
        self.users.get_mut(id.0)
    }

    /// Session lookup: the first user matching both name and credential
    pub fn authenticate(&self, name: &str, credential: &str) -> Result<UserId> {
        let idx = self
            .users
            .iter()
            .position(|user| user.name() == name && user.check_credential(credential))
            .ok_or_else(|| DirectoryError::InvalidCredentials(UserName::new(name)))?;

        Ok(UserId(idx))
    }

    /// Executes `operation` on behalf of the user `sender`.
    ///
    /// Transfers resolve their recipient by name here and run as a single
    /// transaction over both users.
    pub fn execute(&mut self, sender: UserId, operation: Operation) -> Result {
        if self.get(sender).is_none() {
            Err(DirectoryError::UserNotFound(sender))?
        }

        let recipient = match operation.recipient().cloned() {
            None => return self.users[sender.0].execute(operation),
            Some(recipient) => recipient,
        };

        let recipient_id = self
            .find_id(recipient.as_str())
            .ok_or_else(|| DirectoryError::RecipientNotFound(recipient.clone()))?;

        if recipient_id == sender {
            Err(DirectoryError::SelfTransfer(recipient))?
        }

        let (sender, recipient) = self.pair_mut(sender, recipient_id);

        log::debug!(
            "Transferring {} from {} to {}",
            operation.amount(),
            sender.name(),
            recipient.name()
        );

        models::transfer(sender, recipient, operation)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows two distinct users mutably at once
    fn pair_mut(&mut self, first: UserId, second: UserId) -> (&mut User, &mut User) {
        let (first, second) = (first.0, second.0);

        if first < second {
            let (left, right) = self.users.split_at_mut(second);
            (&mut left[first], &mut right[0])
        } else {
            let (left, right) = self.users.split_at_mut(first);
            (&mut right[0], &mut left[second])
        }
    }
}
