use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{MessageRes, RUserDelete};
use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

#[post("/delete_user")]
async fn delete_user(
    db: web::Data<Arc<StoreService>>,
    body: web::Json<RUserDelete>,
) -> ApiResult<MessageRes> {
    let user_id_raw = body.user_id.as_deref().filter(|s| !s.is_empty());
    let mob_num = body.mob_num.as_deref().filter(|s| !s.is_empty());

    if user_id_raw.is_none() && mob_num.is_none() {
        return Err(AppError::Validation(
            "Either user_id or mob_num is required".to_string(),
        ));
    }

    let user_id = user_id_raw
        .map(Uuid::parse_str)
        .transpose()
        .map_err(|_| AppError::Validation("user_id must be a valid UUID".to_string()))?;

    let removed = db
        .delete_users(user_id, mob_num.map(str::to_string))
        .await?;
    if removed == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(ApiResponse::Ok(MessageRes {
        message: "User deleted successfully".to_string(),
    }))
}
