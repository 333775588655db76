use crate::id::UserId;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : UserId,
    pub login_name : String,
}
