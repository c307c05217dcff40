use tracing::debug;

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::services::UpdateOutcome;

pub async fn update_course(
    service: &CourseService,
    id: i64,
    patch: Course,
) -> Result<UpdateOutcome<Course>> {
    if service.store.find_by_id(id).await?.is_none() {
        debug!("Course {} not found, nothing updated", id);
        return Ok(UpdateOutcome::NotFound);
    }

    // 所有可变字段取自 patch，缺省字段被清空；ID 以路径为准
    let replaced = Course {
        id: Some(id),
        ..patch
    };

    let saved = service.store.save(replaced).await?;
    if saved.id != Some(id) {
        // 查询与保存之间课程被删除，撤销新插入的记录
        debug!("Course {} vanished during update", id);
        if let Some(stray) = saved.id {
            service.store.delete_by_id(stray).await?;
        }
        return Ok(UpdateOutcome::NotFound);
    }

    Ok(UpdateOutcome::Updated(saved))
}
