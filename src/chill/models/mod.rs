mod account;
mod operation;
mod statistics;
mod transfer;
mod user;

pub use account::{Account, AccountError};
pub use operation::{Operation, OperationKind, OperationType, TIMESTAMP_FORMAT};
pub use statistics::Statistics;
pub use transfer::{transfer, TransferError};
pub use user::{OperationError, User};
