use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::validators::{normalize_mobile, normalize_pan};
use actix_web::{post, web};
use std::sync::Arc;

// Validation short-circuits on the first failing field so exactly one
// response is produced per request.
#[post("/create_user")]
async fn create_user(
    db: web::Data<Arc<StoreService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let full_name = body
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("Full Name is required".to_string()))?
        .to_string();

    let mob_num = body
        .mob_num
        .as_deref()
        .and_then(normalize_mobile)
        .ok_or_else(|| AppError::Validation("Invalid mobile number".to_string()))?;

    let pan_num = body
        .pan_num
        .as_deref()
        .and_then(normalize_pan)
        .ok_or_else(|| AppError::Validation("Invalid PAN number".to_string()))?;

    let manager_id = body
        .manager_id
        .ok_or_else(|| AppError::Validation("Manager id is required".to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            full_name,
            mob_num,
            pan_num,
            manager_id,
        })
        .await?;

    Ok(ApiResponse::Created(UserCreateRes {
        status: "success".to_string(),
        message: "User created successfully".to_string(),
        user_id,
    }))
}
