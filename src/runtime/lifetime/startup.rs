use crate::config::DatabaseConfig;
use crate::errors::{AcademyError, Result};
use crate::services::AcademyServices;
use crate::storage::{MemoryStorage, SeaOrmStorage};
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub services: AcademyServices,
}

/// 根据配置选择存储后端并组装服务
async fn create_services(config: &DatabaseConfig) -> Result<AcademyServices> {
    warn!("Attempting to create {} storage backend", config.backend);

    match config.backend.as_str() {
        "sea-orm" => {
            let storage = SeaOrmStorage::connect(config).await?;
            warn!("Storage backend initialized and migrations completed");
            Ok(AcademyServices::new(Arc::new(storage)))
        }
        "memory" => {
            warn!("Using in-memory storage, records are lost on shutdown");
            Ok(AcademyServices::new(Arc::new(MemoryStorage::default())))
        }
        other => Err(AcademyError::storage_backend_not_found(format!(
            "Unknown storage backend '{other}' (supported: sea-orm, memory)"
        ))),
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup(config: &DatabaseConfig) -> Result<StartupContext> {
    let services = create_services(config).await?;
    Ok(StartupContext { services })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_config(backend: &str) -> DatabaseConfig {
        DatabaseConfig {
            backend: backend.to_string(),
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        }
    }

    #[tokio::test]
    async fn test_memory_backend_starts_empty() {
        let startup = prepare_server_startup(&database_config("memory"))
            .await
            .unwrap();
        assert!(startup.services.courses.list_courses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sea_orm_backend_with_sqlite_memory() {
        let startup = prepare_server_startup(&database_config("sea-orm"))
            .await
            .unwrap();
        assert!(startup.services.exams.list_exams().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let err = prepare_server_startup(&database_config("redis"))
            .await
            .err()
            .expect("unknown backend must fail");
        assert_eq!(err.code(), "E005");
    }
}
