use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use crate::types::user::{DBUserCreate, UpdateData};
use chrono::Utc;
use entity::user::{self, Entity as User};
use entity::user_manager::{self, Entity as UserManager};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

/// Exactly one filter applies per query; the handler picks the first
/// non-empty field in request order.
pub enum UserFilter {
    ById(Uuid),
    ByMobile(String),
    ByManager(i32),
    All,
}

impl StoreService {
    /// Inserts a new user under an active manager. The payload is already
    /// normalized; the manager gate is the last check before the insert.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if !self.is_manager_active(payload.manager_id).await? {
            return Err(AppError::ManagerInactive);
        }

        let user_id = Uuid::new_v4();
        let now = Utc::now();
        user::ActiveModel {
            user_id: Set(user_id),
            full_name: Set(payload.full_name),
            mob_num: Set(payload.mob_num),
            pan_num: Set(payload.pan_num),
            manager_id: Set(payload.manager_id),
            created_at: Set(now),
            updated_at: Set(now),
            is_active: Set(1),
        }
        .insert(&self.db)
        .await?;

        Ok(user_id)
    }

    pub async fn list_users(&self, filter: UserFilter) -> Result<Vec<user::Model>, AppError> {
        let query = match filter {
            UserFilter::ById(id) => User::find().filter(user::Column::UserId.eq(id)),
            UserFilter::ByMobile(mob) => User::find().filter(user::Column::MobNum.eq(mob)),
            UserFilter::ByManager(id) => User::find().filter(user::Column::ManagerId.eq(id)),
            UserFilter::All => User::find(),
        };
        Ok(query.all(&self.db).await?)
    }

    /// Removes rows matching either identifier (OR when both are given).
    /// Returns the number of rows removed; the handler maps 0 to not-found.
    pub async fn delete_users(
        &self,
        user_id: Option<Uuid>,
        mob_num: Option<String>,
    ) -> Result<u64, AppError> {
        let cond = Condition::any()
            .add_option(user_id.map(|id| user::Column::UserId.eq(id)))
            .add_option(mob_num.map(|mob| user::Column::MobNum.eq(mob)));
        let res = User::delete_many().filter(cond).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    /// General bulk update: one SET over every matching user id, always
    /// stamping updated_at. `changes` is already validated and normalized.
    pub async fn update_user_fields(
        &self,
        user_ids: &[Uuid],
        changes: &UpdateData,
    ) -> Result<u64, AppError> {
        let mut am = user::ActiveModel {
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(full_name) = &changes.full_name {
            am.full_name = Set(full_name.clone());
        }
        if let Some(mob_num) = &changes.mob_num {
            am.mob_num = Set(mob_num.clone());
        }
        if let Some(pan_num) = &changes.pan_num {
            am.pan_num = Set(pan_num.clone());
        }
        if let Some(manager_id) = changes.manager_id {
            am.manager_id = Set(manager_id);
        }

        let res = User::update_many()
            .set(am)
            .filter(user::Column::UserId.is_in(user_ids.iter().copied()))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Manager reassignment: append-only history in user_managers. For each
    /// existing user, one transaction demotes the currently active
    /// assignment row and inserts the new one, so a crash can never leave a
    /// user with zero or two active rows. users.manager_id is deliberately
    /// left alone on this path.
    pub async fn reassign_manager(
        &self,
        user_ids: &[Uuid],
        manager_id: i32,
    ) -> Result<u64, AppError> {
        let existing: Vec<Uuid> = User::find()
            .filter(user::Column::UserId.is_in(user_ids.iter().copied()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|u| u.user_id)
            .collect();

        for uid in &existing {
            let txn = self.db.begin().await?;
            let now = Utc::now();

            UserManager::update_many()
                .set(user_manager::ActiveModel {
                    is_active: Set(0),
                    updated_at: Set(now),
                    ..Default::default()
                })
                .filter(user_manager::Column::UserId.eq(*uid))
                .filter(user_manager::Column::IsActive.eq(1))
                .exec(&txn)
                .await?;

            user_manager::ActiveModel {
                user_id: Set(*uid),
                manager_id: Set(manager_id),
                is_active: Set(1),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            txn.commit().await?;
        }

        Ok(existing.len() as u64)
    }
}
