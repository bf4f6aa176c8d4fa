use crate::model::{id::UserId, role::Role};

pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

pub struct UpdateUserProfile {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

pub struct UpdateUserRole {
    pub user_id: UserId,
    pub role: Role,
}
