pub mod directory;
pub mod events;
pub mod ids;
pub mod input;
pub mod models;
mod money;
mod result;
pub mod services;
mod user_report;

pub use directory::{Directory, DirectoryError};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use user_report::UserReport;

pub fn build_session_service(directory: Directory) -> services::SessionService {
    services::SessionService::new(directory)
}

/// Builds one report row per user, in directory order.
///
/// A user whose statistics cannot be computed is left out of the report with a
/// warning, the other rows are still produced.
pub fn build_report(directory: &Directory) -> Vec<UserReport> {
    directory
        .users()
        .iter()
        .filter_map(|user| match UserReport::from_user(user) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("Skipping report of user {}: {e}", user.name());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{Account, Operation, User};

    #[test]
    fn build_report_skips_user_with_overflowing_statistics() {
        let mut directory = Directory::new();
        directory.add(User::new("Wargrave", "asdf", Account::new(Money(1000))));
        let overflowing = directory.add(User::new("Lombard", "asdf", Account::default()));
        directory.add(User::new("Filippo", "asdf", Account::new(Money(500))));

        let operations = vec![
            Operation::deposit(Money(Money::MAX.0 - 1)),
            Operation::withdrawal(Money(Money::MAX.0 - 2)),
            Operation::deposit(Money(Money::MAX.0 - 1)),
        ];
        for operation in operations {
            directory.execute(overflowing, operation).unwrap();
        }

        assert!(directory.get(overflowing).unwrap().statistics().is_err());

        let names: Vec<_> = build_report(&directory)
            .into_iter()
            .map(|report| report.user.to_string())
            .collect();

        assert_eq!(names, vec!["Wargrave", "Filippo"]);
    }
}
