use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
}

impl Config {
    /// Reads configuration from the environment. A missing connection
    /// string is fatal: there is no degraded mode to fall back to.
    pub fn init() -> Config {
        dotenv().ok();
        let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        Config { db_url }
    }
}
