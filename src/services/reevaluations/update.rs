use tracing::debug;

use super::ReevaluationService;
use crate::errors::Result;
use crate::models::reevaluations::entities::ReevaluationRequest;
use crate::services::UpdateOutcome;

pub async fn update_request(
    service: &ReevaluationService,
    id: i64,
    patch: ReevaluationRequest,
) -> Result<UpdateOutcome<ReevaluationRequest>> {
    let Some(mut request) = service.store.find_by_id(id).await? else {
        debug!("Reevaluation request {} not found, nothing updated", id);
        return Ok(UpdateOutcome::NotFound);
    };

    request.student_name = patch.student_name;
    request.course_name = patch.course_name;
    request.reason = patch.reason;
    request.status = patch.status;

    let saved = service.store.save(request).await?;
    if saved.id != Some(id) {
        // 查询与保存之间申请被删除，撤销新插入的记录
        debug!("Reevaluation request {} vanished during update", id);
        if let Some(stray) = saved.id {
            service.store.delete_by_id(stray).await?;
        }
        return Ok(UpdateOutcome::NotFound);
    }

    debug!("Reevaluation request {} now {:?}", id, saved.status);
    Ok(UpdateOutcome::Updated(saved))
}
