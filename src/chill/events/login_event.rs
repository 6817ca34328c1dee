use crate::ids::UserName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEvent {
    pub user: UserName,
    pub credential: String,
}
