use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Owns the single database connection for the process. Constructed once in
/// main and handed to actix as shared state; dropping it closes the pool.
#[derive(Clone)]
pub struct StoreService {
    pub(crate) db: DatabaseConnection,
}

impl StoreService {
    pub async fn new(url: &str) -> Result<Self, DbErr> {
        log::info!("Connecting to store at {url}...");
        let db = Database::connect(url).await?;
        log::info!("Running migrations...");
        Migrator::up(&db, None).await?;
        log::info!("Store ready.");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
