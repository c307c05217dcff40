//! 内存存储实现
//!
//! 每个实体一张并发哈希表，ID 由原子计数器分配。用于测试，
//! 也可通过 `database.backend = "memory"` 在无数据库时运行。

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Record, RecordStore};
use crate::errors::Result;
use crate::models::{
    courses::entities::Course, exams::entities::Exam, reevaluations::entities::ReevaluationRequest,
    results::entities::ExamResult,
};

/// 单个实体的内存表
pub struct MemoryTable<T> {
    rows: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryTable<T> {
    async fn find_all(&self) -> Result<Vec<T>> {
        let mut rows: Vec<(i64, T)> = self
            .rows
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        Ok(rows.into_iter().map(|(_, record)| record).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, record: T) -> Result<T> {
        if let Some(id) = record.id()
            && let Some(mut existing) = self.rows.get_mut(&id)
        {
            *existing = record.clone();
            return Ok(record);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = record.with_id(Some(id));
        self.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.rows.remove(&id);
        Ok(())
    }
}

/// 四类实体的内存存储
#[derive(Default)]
pub struct MemoryStorage {
    courses: MemoryTable<Course>,
    exams: MemoryTable<Exam>,
    results: MemoryTable<ExamResult>,
    reevaluations: MemoryTable<ReevaluationRequest>,
}

macro_rules! delegate_to_table {
    ($record:ty, $table:ident) => {
        #[async_trait]
        impl RecordStore<$record> for MemoryStorage {
            async fn find_all(&self) -> Result<Vec<$record>> {
                self.$table.find_all().await
            }

            async fn find_by_id(&self, id: i64) -> Result<Option<$record>> {
                self.$table.find_by_id(id).await
            }

            async fn save(&self, record: $record) -> Result<$record> {
                self.$table.save(record).await
            }

            async fn delete_by_id(&self, id: i64) -> Result<()> {
                self.$table.delete_by_id(id).await
            }
        }
    };
}

delegate_to_table!(Course, courses);
delegate_to_table!(Exam, exams);
delegate_to_table!(ExamResult, results);
delegate_to_table!(ReevaluationRequest, reevaluations);

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str) -> Course {
        Course {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let table = MemoryTable::<Course>::default();
        let first = table.save(course("Orbital Mechanics")).await.unwrap();
        let second = table.save(course("Astrodynamics")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(table.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_save_with_existing_id_overwrites() {
        let table = MemoryTable::<Course>::default();
        let saved = table.save(course("Orbital Mechanics")).await.unwrap();

        let replaced = Course {
            id: saved.id,
            code: Some("AE301".to_string()),
            ..Default::default()
        };
        let result = table.save(replaced.clone()).await.unwrap();

        assert_eq!(result, replaced);
        assert_eq!(table.find_by_id(1).await.unwrap(), Some(replaced));
        assert_eq!(table.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts_fresh() {
        let table = MemoryTable::<Course>::default();
        let saved = table
            .save(Course {
                id: Some(42),
                ..course("Ghost")
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(table.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let table = MemoryTable::<Course>::default();
        table.save(course("A")).await.unwrap();
        table.save(course("B")).await.unwrap();

        table.delete_by_id(1).await.unwrap();
        let after_once = table.find_all().await.unwrap();
        table.delete_by_id(1).await.unwrap();
        table.delete_by_id(99).await.unwrap();

        assert_eq!(table.find_all().await.unwrap(), after_once);
        assert_eq!(after_once.len(), 1);
        assert_eq!(table.find_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let table = MemoryTable::<Course>::default();
        table.save(course("A")).await.unwrap();
        table.delete_by_id(1).await.unwrap();

        let next = table.save(course("B")).await.unwrap();
        assert_eq!(next.id, Some(2));
    }

    #[tokio::test]
    async fn test_storage_keeps_entity_tables_apart() {
        let storage = MemoryStorage::default();
        RecordStore::<Course>::save(&storage, course("Propulsion"))
            .await
            .unwrap();
        let exam = RecordStore::<Exam>::save(&storage, Exam::default())
            .await
            .unwrap();

        assert_eq!(exam.id, Some(1));
        assert_eq!(RecordStore::<Course>::find_all(&storage).await.unwrap().len(), 1);
        assert!(
            RecordStore::<ReevaluationRequest>::find_all(&storage)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
