use crate::db::store_service::StoreService;
use crate::db::users::UserFilter;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserQuery, UsersRes};
use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

#[post("/get_users")]
async fn get_users(
    db: web::Data<Arc<StoreService>>,
    body: web::Json<RUserQuery>,
) -> ApiResult<UsersRes> {
    // First non-empty field wins: user_id, then mob_num, then manager_id.
    let filter = if let Some(raw) = body.user_id.as_deref().filter(|s| !s.is_empty()) {
        let id = Uuid::parse_str(raw)
            .map_err(|_| AppError::Validation("user_id must be a valid UUID".to_string()))?;
        UserFilter::ById(id)
    } else if let Some(mob) = body.mob_num.as_deref().filter(|s| !s.is_empty()) {
        UserFilter::ByMobile(mob.to_string())
    } else if let Some(manager_id) = body.manager_id {
        UserFilter::ByManager(manager_id)
    } else {
        UserFilter::All
    };

    let users = db.list_users(filter).await?;
    Ok(ApiResponse::Ok(UsersRes { users }))
}
