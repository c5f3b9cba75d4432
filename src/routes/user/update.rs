use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{MessageRes, RUserUpdate, UpdateData};
use crate::utils::validators::{normalize_mobile, normalize_pan};
use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

#[post("/update_user")]
async fn update_user(
    db: web::Data<Arc<StoreService>>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<MessageRes> {
    let ids_raw = body
        .user_ids
        .as_ref()
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| AppError::Validation("user_ids must be a non-empty array".to_string()))?;

    let update_data = body
        .update_data
        .as_ref()
        .filter(|data| !data.is_empty())
        .ok_or_else(|| AppError::Validation("update_data must not be empty".to_string()))?;

    let mut user_ids = Vec::with_capacity(ids_raw.len());
    for raw in ids_raw {
        let id = Uuid::parse_str(raw)
            .map_err(|_| AppError::Validation(format!("Invalid user id: {raw}")))?;
        user_ids.push(id);
    }

    let updated = if let Some(manager_id) = update_data.manager_only() {
        // {manager_id} alone reassigns through the history table and leaves
        // users.manager_id untouched.
        db.reassign_manager(&user_ids, manager_id).await?
    } else {
        let changes = validate_changes(update_data)?;
        db.update_user_fields(&user_ids, &changes).await?
    };

    if updated == 0 {
        return Err(AppError::NotFound("No users were updated".to_string()));
    }

    Ok(ApiResponse::Ok(MessageRes {
        message: format!("{updated} user(s) updated successfully"),
    }))
}

/// Normalizes the supplied fields, failing the whole request on the first
/// invalid one.
fn validate_changes(update_data: &UpdateData) -> Result<UpdateData, AppError> {
    let mut changes = UpdateData {
        manager_id: update_data.manager_id,
        ..Default::default()
    };

    if let Some(full_name) = &update_data.full_name {
        let trimmed = full_name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "Full Name must not be empty".to_string(),
            ));
        }
        changes.full_name = Some(trimmed.to_string());
    }
    if let Some(mob_num) = &update_data.mob_num {
        changes.mob_num = Some(
            normalize_mobile(mob_num)
                .ok_or_else(|| AppError::Validation("Invalid mobile number".to_string()))?,
        );
    }
    if let Some(pan_num) = &update_data.pan_num {
        changes.pan_num = Some(
            normalize_pan(pan_num)
                .ok_or_else(|| AppError::Validation("Invalid PAN number".to_string()))?,
        );
    }

    Ok(changes)
}
