//! Seating Server - 餐厅桌台分配与排队服务
//!
//! # 架构概述
//!
//! - **座位服务** (`seating`): 设置、空闲桌台池、排队号码、人数分配算法
//! - **存储** (`seating::storage`): 嵌入式 redb，单事务持久化全部状态
//! - **HTTP API** (`api`): axum 路由
//!
//! # 模块结构
//!
//! ```text
//! seating-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── seating/       # 桌台池、排队、分配算法、门面
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use seating::{SeatingError, SeatingService, SeatingStorage};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 `.env`
/// 2. 创建工作目录
/// 3. 初始化日志 (生产环境 JSON 格式)，清理过期日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_dir();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        log_dir.to_str(),
    )?;

    if let Err(e) = cleanup_old_logs(&log_dir) {
        tracing::warn!(error = %e, "Failed to cleanup old logs");
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____            __  _
  / ___/___  ____ _/ /_(_)___  ____ _
  \__ \/ _ \/ __ `/ __/ / __ \/ __ `/
 ___/ /  __/ /_/ / /_/ / / / / /_/ /
/____/\___/\__,_/\__/_/_/ /_/\__, /
                            /____/
    "#
    );
}
