use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use entity::manager::Entity as Manager;
use sea_orm::EntityTrait;

impl StoreService {
    /// Activation gate consulted once before a user insert. The managers
    /// table keeps its flag as text; only the literal "true" passes.
    pub async fn is_manager_active(&self, manager_id: i32) -> Result<bool, AppError> {
        let row = Manager::find_by_id(manager_id).one(&self.db).await?;
        Ok(matches!(row, Some(m) if m.is_active == "true"))
    }
}
