use crate::core::Config;
use crate::db::DbService;
use crate::services::DishService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Cloned into every handler; all fields are cheap handles.
#[derive(Clone)]
pub struct ServerState {
    pub dishes: DishService,
}

impl ServerState {
    /// Open the database and create the schema
    ///
    /// Schema failures are logged and do not abort startup.
    pub async fn initialize(config: &Config) -> Self {
        let db = DbService::open(&config.database_path, config.db_max_connections);
        db.ensure_schema().await;
        Self::with_db(db)
    }

    /// Build state around an existing database (tests use an in-memory one)
    pub fn with_db(db: DbService) -> Self {
        Self {
            dishes: DishService::new(db),
        }
    }
}
