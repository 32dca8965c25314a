use serde::Serialize;

use crate::store::models::{UserFields, UserUpdate};

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub total_users: usize,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total_users: usize,
}

#[derive(Debug, Serialize)]
pub struct UpdateUserResponse<Id> {
    pub message: &'static str,
    pub user_id: Id,
    pub old_data: UserFields,
    pub new_data: UserFields,
}

impl<Id> From<UserUpdate<Id>> for UpdateUserResponse<Id> {
    fn from(update: UserUpdate<Id>) -> Self {
        Self {
            message: "User updated successfully",
            user_id: update.new.id,
            old_data: update.old,
            new_data: update.new.fields,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
