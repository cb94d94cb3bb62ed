use std::sync::Arc;

use crate::core::{Config, Result};
use crate::seating::{SeatingError, SeatingService, SeatingStorage};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，作为 axum 的 `State` 注入到每个处理器。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | seating | Arc<SeatingService> | 座位服务 (设置、桌台池、排队) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 座位服务
    pub seating: Arc<SeatingService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, seating: Arc<SeatingService>) -> Self {
        Self { config, seating }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建数据库目录
    /// 2. 打开 redb 并恢复座位状态
    /// 3. 若尚未配置且提供了 INITIAL_* 环境变量，写入初始设置
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(config.database_dir())?;

        let db_path = config.database_path();
        let storage = SeatingStorage::open(&db_path).map_err(SeatingError::from)?;
        tracing::info!(path = %db_path.display(), "Seating database opened");

        let seating = SeatingService::open(storage, config.queue_start)?;

        if let Some((tables, chairs)) = config.initial_settings() {
            match seating.provision(tables, chairs) {
                Ok(Some(_)) => {}
                Ok(None) => tracing::debug!("Settings already present, skipping provisioning"),
                Err(SeatingError::Storage(e)) => return Err(SeatingError::Storage(e).into()),
                Err(e) => tracing::warn!(
                    tables,
                    chairs_per_table = chairs,
                    error = %e,
                    "Ignoring invalid initial settings"
                ),
            }
        }

        Ok(Self::new(config.clone(), Arc::new(seating)))
    }
}
