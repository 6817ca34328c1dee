use crate::ids::UserName;
use crate::models::User;
use crate::Money;
use crate::Result;

use serde::{Deserialize, Serialize};

/// Joins the rendered operations of one user inside the `history` column
pub const HISTORY_SEPARATOR: &str = ";";

/// One output row per user: balance plus the totals derived from its history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserReport {
    pub user: UserName,
    pub balance: Money,
    pub total: Money,
    pub deposit: Money,
    pub withdrawal: Money,
    pub transfer: Money,
    pub operations: usize,
    pub history: String,
}

impl UserReport {
    pub fn from_user(user: &User) -> Result<Self> {
        let statistics = user.statistics()?;

        let history = user
            .history()
            .iter()
            .map(|operation| operation.to_string())
            .collect::<Vec<_>>()
            .join(HISTORY_SEPARATOR);

        Ok(Self {
            user: user.name().clone(),
            balance: user.balance(),
            total: statistics.total,
            deposit: statistics.deposit,
            withdrawal: statistics.withdrawal,
            transfer: statistics.transfer,
            operations: user.history().len(),
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{Account, Operation, OperationKind};

    use chrono::{DateTime, Local, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, hour, minute, 0).unwrap()
    }

    #[test]
    fn from_user() {
        let mut user = User::new("Filippo", "asdf", Account::new(Money(500)));

        user.execute(Operation::at(OperationKind::Deposit, Money(1000), at(9, 0)))
            .unwrap();
        user.execute(Operation::at(OperationKind::Withdrawal, Money(200), at(9, 30)))
            .unwrap();

        let mut lombard = User::new("Lombard", "asdf", Account::new(Money(500)));
        let transfer = Operation::at(
            OperationKind::Transfer {
                recipient: UserName::new("Lombard"),
            },
            Money(200),
            at(14, 5),
        );
        crate::models::transfer(&mut user, &mut lombard, transfer).unwrap();

        assert_eq!(
            UserReport::from_user(&user).unwrap(),
            UserReport {
                user: UserName::new("Filippo"),
                balance: Money(1100),
                total: Money(600),
                deposit: Money(1000),
                withdrawal: Money(200),
                transfer: Money(200),
                operations: 3,
                history: "DEPOSIT 1000 CHILL 17 Oct 2026, 09:00;\
                          WITHDRAWAL 200 CHILL 17 Oct 2026, 09:30;\
                          TRANSFER 200 CHILL 17 Oct 2026, 14:05"
                    .to_string(),
            }
        );

        assert_eq!(
            UserReport::from_user(&lombard).unwrap(),
            UserReport {
                user: UserName::new("Lombard"),
                balance: Money(700),
                total: Money(200),
                deposit: Money(200),
                withdrawal: Money(0),
                transfer: Money(0),
                operations: 1,
                history: "DEPOSIT 200 CHILL 17 Oct 2026, 14:05".to_string(),
            }
        );
    }

    #[test]
    fn from_user_without_history() {
        let user = User::new("Blore", "asdf", Account::new(Money(700)));

        let report = UserReport::from_user(&user).unwrap();

        assert_eq!(report.balance, Money(700));
        assert_eq!(report.operations, 0);
        assert_eq!(report.history, "");
    }
}
