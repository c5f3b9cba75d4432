use actix_web::{web, App};
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use user_registry::{
    db::store_service::StoreService,
    routes::configure_routes,
    types::user::DBUserCreate,
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<StoreService>,
}

impl TestClient {
    pub fn new(db: Arc<StoreService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(configure_routes)
    }

    /// Managers are seed data in production; tests insert them directly.
    #[allow(dead_code)]
    pub async fn seed_manager(&self, manager_id: i32, is_active: &str) {
        entity::manager::ActiveModel {
            manager_id: Set(manager_id),
            is_active: Set(is_active.to_string()),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to seed manager");
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, manager_id: i32, mob_num: &str) -> Uuid {
        self.db
            .create_user(DBUserCreate {
                full_name: "Test User".to_string(),
                mob_num: mob_num.to_string(),
                pan_num: "ABCDE1234F".to_string(),
                manager_id,
            })
            .await
            .expect("Failed to create test user")
    }
}
