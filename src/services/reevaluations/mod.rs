mod update;

use std::sync::Arc;
use tracing::debug;

use super::UpdateOutcome;
use crate::errors::Result;
use crate::models::reevaluations::entities::ReevaluationRequest;
use crate::storage::{Record, RecordStore};

/// 成绩复查申请服务
#[derive(Clone)]
pub struct ReevaluationService {
    store: Arc<dyn RecordStore<ReevaluationRequest>>,
}

impl ReevaluationService {
    pub fn new(store: Arc<dyn RecordStore<ReevaluationRequest>>) -> Self {
        Self { store }
    }

    pub async fn list_requests(&self) -> Result<Vec<ReevaluationRequest>> {
        self.store.find_all().await
    }

    pub async fn get_request(&self, id: i64) -> Result<Option<ReevaluationRequest>> {
        self.store.find_by_id(id).await
    }

    pub async fn create_request(&self, request: ReevaluationRequest) -> Result<ReevaluationRequest> {
        let created = self.store.save(request.with_id(None)).await?;
        debug!(
            "Reevaluation request {:?} created with status {:?}",
            created.id, created.status
        );
        Ok(created)
    }

    pub async fn update_request(
        &self,
        id: i64,
        patch: ReevaluationRequest,
    ) -> Result<UpdateOutcome<ReevaluationRequest>> {
        update::update_request(self, id, patch).await
    }

    pub async fn delete_request(&self, id: i64) -> Result<()> {
        self.store.delete_by_id(id).await?;
        debug!("Reevaluation request {} deleted", id);
        Ok(())
    }
}
