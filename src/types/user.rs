use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request bodies keep every field optional so a missing field surfaces as a
// 400 with the regular error body instead of a deserializer rejection.

#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub full_name: Option<String>,
    pub mob_num: Option<String>,
    pub pan_num: Option<String>,
    pub manager_id: Option<i32>,
}

/// Create payload after validation; fields are already normalized.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub full_name: String,
    pub mob_num: String,
    pub pan_num: String,
    pub manager_id: i32,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub status: String,
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize, Default)]
pub struct RUserQuery {
    pub user_id: Option<String>,
    pub mob_num: Option<String>,
    pub manager_id: Option<i32>,
}

#[derive(Serialize, Deserialize)]
pub struct UsersRes {
    pub users: Vec<entity::user::Model>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct RUserDelete {
    pub user_id: Option<String>,
    pub mob_num: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RUserUpdate {
    pub user_ids: Option<Vec<String>>,
    pub update_data: Option<UpdateData>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UpdateData {
    pub full_name: Option<String>,
    pub mob_num: Option<String>,
    pub pan_num: Option<String>,
    pub manager_id: Option<i32>,
}

impl UpdateData {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.mob_num.is_none()
            && self.pan_num.is_none()
            && self.manager_id.is_none()
    }

    /// The reassignment path triggers exactly when manager_id is the only
    /// field supplied; returns it in that case.
    pub fn manager_only(&self) -> Option<i32> {
        if self.full_name.is_none() && self.mob_num.is_none() && self.pan_num.is_none() {
            self.manager_id
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct MessageRes {
    pub message: String,
}
