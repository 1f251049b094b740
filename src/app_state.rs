use crate::config::Config;
use crate::database::PostgresDatabase;

pub struct AppState {
    pub db: PostgresDatabase,
    pub config: Config,
}
