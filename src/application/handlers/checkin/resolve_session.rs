//! ResolveSession - Query handler for the current session state.

use std::sync::Arc;

use super::session_view::{resolve_session, SessionView};
use crate::domain::foundation::DomainError;
use crate::ports::{CheckInRepository, Clock};

pub struct ResolveSessionHandler {
    repository: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl ResolveSessionHandler {
    pub fn new(repository: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self) -> Result<SessionView, DomainError> {
        resolve_session(self.repository.as_ref(), self.clock.today()).await
    }
}
