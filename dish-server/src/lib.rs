//! Dish Server - 菜品管理 HTTP 服务
//!
//! # 架构概述
//!
//! 一个资源 (dish) 的 CRUD 接口 + 平均价格查询，SQLite 存储。
//!
//! ```text
//! api (路由/处理器) → services (业务) → db::repository (SQL) → SQLite
//! ```
//!
//! # 模块结构
//!
//! ```text
//! dish-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由、处理器、CORS
//! ├── services/      # 业务服务
//! ├── db/            # 连接池和仓储
//! └── utils/         # 错误、日志、SQL 构建
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::DishService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

/// Load `.env` if present, then start logging from the resulting config
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());
    config
}
