use crate::events::{DepositEvent, LoginEvent, SessionEvent, TransferEvent, WithdrawalEvent};
use crate::ids::UserName;
use crate::models::{Account, User};
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents a session event row that a string would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: InputEventType,

    pub user: Option<String>,
    pub credential: Option<String>,
    pub amount: Option<String>,
    pub receiver: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputEventType {
    Login,
    Logout,
    Deposit,
    Withdrawal,
    Transfer,
}

/// Represents a row of the users file seeding the directory
#[derive(Deserialize, Debug, Clone)]
pub struct UserRecord {
    pub name: String,
    pub credential: String,
    pub balance: Option<String>,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: please insert a {0:?} value: {1:?}")]
    MissingAmount(InputEventType, InputEvent),

    #[error("Error parsing input event: please insert a positive {0:?} value: {1:?}")]
    NegativeAmount(InputEventType, InputEvent),

    #[error("Error parsing input event: please insert a transfer receiver: {0:?}")]
    MissingReceiver(InputEvent),

    #[error("Error parsing input event: login needs a user and a credential: {0:?}")]
    MissingCredentials(InputEvent),

    #[error("Error parsing user record: negative starting balance: {0:?}")]
    NegativeBalance(UserRecord),
}

/// Empty fields count as missing, whether csv produced `None` or `Some("")`
fn non_empty(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl InputEvent {
    pub fn parse_event(self) -> Result<SessionEvent> {
        let event = match self.typ {
            InputEventType::Login => {
                let (user, credential) = match (non_empty(&self.user), &self.credential) {
                    (Some(user), Some(credential)) => (user, credential),
                    _ => Err(InputParseError::MissingCredentials(self.clone()))?,
                };

                SessionEvent::Login(LoginEvent {
                    user: UserName::new(user),
                    credential: credential.clone(),
                })
            }
            InputEventType::Logout => SessionEvent::Logout,
            InputEventType::Deposit => SessionEvent::Deposit(DepositEvent {
                amount: self.parse_amount()?,
            }),
            InputEventType::Withdrawal => SessionEvent::Withdrawal(WithdrawalEvent {
                amount: self.parse_amount()?,
            }),
            InputEventType::Transfer => {
                let amount = self.parse_amount()?;

                let receiver = non_empty(&self.receiver)
                    .ok_or_else(|| InputParseError::MissingReceiver(self.clone()))?;

                SessionEvent::Transfer(TransferEvent {
                    amount,
                    receiver: UserName::new(receiver),
                })
            }
        };

        Ok(event)
    }

    fn parse_amount(&self) -> Result<Money> {
        let amount = non_empty(&self.amount)
            .ok_or_else(|| InputParseError::MissingAmount(self.typ, self.clone()))?;

        let amount = Money::parse(amount)?;

        if amount.is_negative() {
            Err(InputParseError::NegativeAmount(self.typ, self.clone()))?
        }

        Ok(amount)
    }
}

impl UserRecord {
    pub fn parse_user(self) -> Result<User> {
        let balance = match non_empty(&self.balance) {
            None => Money::ZERO,
            Some(balance) => Money::parse(balance)?,
        };

        if balance.is_negative() {
            Err(InputParseError::NegativeBalance(self.clone()))?
        }

        Ok(User::new(self.name, self.credential, Account::new(balance)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::MoneyError;

    use csv::{ReaderBuilder, Trim};

    const HEADER: &str = "type,user,credential,amount,receiver\n";

    fn parse_rows(rows: &str) -> Vec<Result<SessionEvent>> {
        let data = format!("{HEADER}{rows}");

        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(data.as_bytes());

        let events = rdr
            .deserialize::<InputEvent>()
            .map(|record| record.unwrap().parse_event())
            .collect();

        events
    }

    fn parse_row(row: &str) -> Result<SessionEvent> {
        parse_rows(row).remove(0)
    }

    #[test]
    fn parse_login_and_logout() {
        assert_eq!(
            parse_row("login, Filippo, asdf, ,").unwrap(),
            SessionEvent::Login(LoginEvent {
                user: UserName::new("Filippo"),
                credential: "asdf".to_string(),
            })
        );

        assert_eq!(parse_row("logout,,,,").unwrap(), SessionEvent::Logout);
    }

    #[test]
    fn parse_operations() {
        let events = parse_rows(
            "deposit,,,1000,\n\
             withdrawal,,,200,\n\
             transfer,,,200,Lombard\n",
        );

        let events: Vec<SessionEvent> = events.into_iter().map(|e| e.unwrap()).collect();

        assert_eq!(
            events,
            vec![
                SessionEvent::Deposit(DepositEvent {
                    amount: Money(1000)
                }),
                SessionEvent::Withdrawal(WithdrawalEvent { amount: Money(200) }),
                SessionEvent::Transfer(TransferEvent {
                    amount: Money(200),
                    receiver: UserName::new("Lombard"),
                }),
            ]
        );
    }

    #[test]
    fn fail_to_parse_missing_amount() {
        let err = parse_row("deposit,,,,").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::MissingAmount(InputEventType::Deposit, _))
        ));
    }

    #[test]
    fn fail_to_parse_negative_amount() {
        let err = parse_row("withdrawal,,,-5,").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NegativeAmount(InputEventType::Withdrawal, _))
        ));
    }

    #[test]
    fn fail_to_parse_non_numeric_amount() {
        let err = parse_row("deposit,,,lots,").unwrap_err();

        assert!(err.downcast_ref::<MoneyError>().is_some());
    }

    #[test]
    fn fail_to_parse_missing_receiver() {
        let err = parse_row("transfer,,,100,").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::MissingReceiver(_))
        ));
    }

    #[test]
    fn fail_to_parse_login_without_credential() {
        let err = parse_row("login,Filippo,,,").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::MissingCredentials(_))
        ));
    }

    #[test]
    fn parse_user() {
        let data = "name,credential,balance\nFilippo,asdf,500\nBlore,asdf,\n";

        let users: Vec<User> = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(data.as_bytes())
            .deserialize::<UserRecord>()
            .map(|record| record.unwrap().parse_user().unwrap())
            .collect();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name().as_str(), "Filippo");
        assert_eq!(users[0].balance(), Money(500));
        assert!(users[0].check_credential("asdf"));
        assert_eq!(users[1].balance(), Money(0));
    }

    #[test]
    fn fail_to_parse_user_with_negative_balance() {
        let record = UserRecord {
            name: "Blore".to_string(),
            credential: "asdf".to_string(),
            balance: Some("-1".to_string()),
        };

        let err = record.parse_user().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NegativeBalance(_))
        ));
    }
}
