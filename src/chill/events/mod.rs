mod deposit_event;
mod login_event;
mod transfer_event;
mod withdrawal_event;

pub use deposit_event::DepositEvent;
pub use login_event::LoginEvent;
pub use transfer_event::TransferEvent;
pub use withdrawal_event::WithdrawalEvent;

/// Typed session event, one per action a bank user can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Login(LoginEvent),
    Logout,
    Deposit(DepositEvent),
    Withdrawal(WithdrawalEvent),
    Transfer(TransferEvent),
}
