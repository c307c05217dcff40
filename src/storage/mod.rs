use crate::errors::Result;
use crate::models::{
    courses::entities::Course, exams::entities::Exam, reevaluations::entities::ReevaluationRequest,
    results::entities::ExamResult,
};

pub mod memory_storage;
pub mod sea_orm_storage;

pub use memory_storage::MemoryStorage;
pub use sea_orm_storage::SeaOrmStorage;

/// 可被记录存储持久化的实体
pub trait Record: Clone + Send + Sync + 'static {
    /// 存储层分配的ID，未持久化时为 `None`
    fn id(&self) -> Option<i64>;
    fn with_id(self, id: Option<i64>) -> Self;
}

/// 单个实体类型的记录存储
#[async_trait::async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    // 按ID升序列出全部记录
    async fn find_all(&self) -> Result<Vec<T>>;
    // 通过ID获取记录，不存在时返回 None
    async fn find_by_id(&self, id: i64) -> Result<Option<T>>;
    // 无ID或ID不存在时插入并分配新ID，否则整条覆盖
    async fn save(&self, record: T) -> Result<T>;
    // 删除记录，不存在时不报错
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// 覆盖全部四类实体的存储后端
pub trait Storage:
    RecordStore<Course>
    + RecordStore<Exam>
    + RecordStore<ExamResult>
    + RecordStore<ReevaluationRequest>
    + 'static
{
}

impl<S> Storage for S where
    S: RecordStore<Course>
        + RecordStore<Exam>
        + RecordStore<ExamResult>
        + RecordStore<ReevaluationRequest>
        + 'static
{
}
