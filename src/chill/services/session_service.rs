use crate::directory::Directory;
use crate::events::{DepositEvent, LoginEvent, SessionEvent, TransferEvent, WithdrawalEvent};
use crate::ids::{UserId, UserName};
use crate::models::{Operation, User};
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("No user logged in, cannot process {0} event")]
    NotLoggedIn(&'static str),
}

/// Drives one bank session: who is logged in, and what they do to the directory.
///
/// The logged in user is held by id, so users sharing a name never act on each
/// other's account.
#[derive(Debug)]
pub struct SessionService {
    directory: Directory,
    current_user: Option<UserId>,
}

impl SessionService {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            current_user: None,
        }
    }

    pub fn process_event(&mut self, event: SessionEvent) -> Result {
        log::debug!("Processing session event: {event:?}");

        match event {
            SessionEvent::Login(event) => self.process_login_event(event)?,

            SessionEvent::Logout => self.process_logout_event(),

            SessionEvent::Deposit(event) => self.process_deposit_event(event)?,

            SessionEvent::Withdrawal(event) => self.process_withdrawal_event(event)?,

            SessionEvent::Transfer(event) => self.process_transfer_event(event)?,
        }

        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.and_then(|id| self.directory.get(id))
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn take(self) -> Directory {
        log::debug!("Destructuring SessionService");
        self.directory
    }

    fn process_login_event(&mut self, event: LoginEvent) -> Result {
        let id = self
            .directory
            .authenticate(event.user.as_str(), &event.credential)?;

        log::debug!("User logged in: {} as {id}", event.user);

        if let Some(previous) = self.current_user.replace(id) {
            log::debug!("Replaced session of: {previous}");
        }

        Ok(())
    }

    fn process_logout_event(&mut self) {
        match self.current_user.take() {
            Some(user) => log::debug!("User logged out: {user}"),
            None => log::debug!("Logout without a logged in user"),
        }
    }

    fn process_deposit_event(&mut self, event: DepositEvent) -> Result {
        let user = self.require_user("deposit")?;

        self.directory.execute(user, Operation::deposit(event.amount))
    }

    fn process_withdrawal_event(&mut self, event: WithdrawalEvent) -> Result {
        let user = self.require_user("withdrawal")?;

        self.directory.execute(user, Operation::withdrawal(event.amount))
    }

    fn process_transfer_event(&mut self, event: TransferEvent) -> Result {
        let user = self.require_user("transfer")?;

        self.directory
            .execute(user, Operation::transfer(event.amount, event.receiver))
    }

    fn require_user(&self, event: &'static str) -> Result<UserId> {
        let user = self.current_user.ok_or(SessionError::NotLoggedIn(event))?;

        Ok(user)
    }
}
