//! ResetDay - Forgets today's interaction so it can be done again.

use std::sync::Arc;

use tracing::info;

use super::session_view::{resolve_session, SessionView};
use crate::domain::foundation::DomainError;
use crate::ports::{CheckInRepository, Clock};

pub struct ResetDayHandler {
    repository: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl ResetDayHandler {
    pub fn new(repository: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Deletes today's record, advice and check-in marker, then re-resolves.
    pub async fn handle(&self) -> Result<SessionView, DomainError> {
        let today = self.clock.today();

        self.repository.delete_records_for(today).await?;
        self.repository.delete_advice(today).await?;
        self.repository.clear_check_in().await?;

        info!(date = %today, "Day reset");

        resolve_session(self.repository.as_ref(), today).await
    }
}

/// Removes all persisted state, preferences included.
pub struct ClearAllHandler {
    repository: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl ClearAllHandler {
    pub fn new(repository: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self) -> Result<SessionView, DomainError> {
        self.repository.clear_all().await?;
        info!("All check-in data cleared");
        resolve_session(self.repository.as_ref(), self.clock.today()).await
    }
}
