use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | INITIAL_TABLES | - | 首次启动时的桌台数 |
/// | INITIAL_CHAIRS_PER_TABLE | - | 首次启动时的每桌椅子数 |
/// | QUEUE_START | 0 | 排队号码起始值 (第一个号码为 start + 1) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/seating HTTP_PORT=8080 INITIAL_TABLES=12 INITIAL_CHAIRS_PER_TABLE=4 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 首次启动时的桌台数
    pub initial_tables: Option<i64>,
    /// 首次启动时的每桌椅子数
    pub initial_chairs_per_table: Option<i64>,
    /// 排队号码起始值
    pub queue_start: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            initial_tables: std::env::var("INITIAL_TABLES")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            initial_chairs_per_table: std::env::var("INITIAL_CHAIRS_PER_TABLE")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            queue_start: std::env::var("QUEUE_START")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取首次启动的桌台配置
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.initial_tables = None;
        config.initial_chairs_per_table = None;
        config.queue_start = 0;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 首次启动的桌台配置 (两项都设置时才生效)
    pub fn initial_settings(&self) -> Option<(i64, i64)> {
        self.initial_tables.zip(self.initial_chairs_per_table)
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("seating.redb")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
