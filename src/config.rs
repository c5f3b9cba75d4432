use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let db_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data.db?mode=rwc".to_string());

        EnvConfig { port, db_url }
    }
}
