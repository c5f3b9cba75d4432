use std::sync::Arc;
use tempfile::TempDir;
use user_registry::db::store_service::StoreService;

pub mod client;

pub struct TestContext {
    pub db: Arc<StoreService>,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("test.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let db = Arc::new(
            StoreService::new(&db_url)
                .await
                .expect("Failed to initialize StoreService"),
        );

        TestContext { db, _dir: dir }
    }
}

// Test data helpers
pub mod test_data {
    use user_registry::types::user::RUserCreate;

    pub fn sample_user(manager_id: i32) -> RUserCreate {
        RUserCreate {
            full_name: Some("Test User".to_string()),
            mob_num: Some("9876543210".to_string()),
            pan_num: Some("ABCDE1234F".to_string()),
            manager_id: Some(manager_id),
        }
    }
}
