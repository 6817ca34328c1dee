mod user_id;
mod user_name;

pub use user_id::UserId;
pub use user_name::UserName;
