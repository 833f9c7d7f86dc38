//! CompleteOnboarding - Command handler for confirming the three items.

use std::sync::Arc;

use tracing::info;

use super::session_view::{resolve_session, SessionView};
use crate::domain::checkin::{SessionState, UserPreferences};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, Timestamp};
use crate::ports::{CheckInRepository, Clock};

#[derive(Debug, Clone)]
pub struct CompleteOnboardingCommand {
    pub items: Vec<String>,
}

pub struct CompleteOnboardingHandler {
    repository: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl CompleteOnboardingHandler {
    pub fn new(repository: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: CompleteOnboardingCommand) -> Result<SessionView, DomainError> {
        // Preferences are read-only once set
        let current = SessionState::resolve(self.repository.load_preferences().await?.is_some(), false);
        current
            .transition_to(SessionState::DailyInteraction)
            .map_err(|_| {
                DomainError::new(ErrorCode::Conflict, "Onboarding has already been completed")
                    .with_detail("state", current.to_string())
            })?;

        let now = Timestamp::from_datetime(self.clock.now());
        let preferences = UserPreferences::onboard(cmd.items, now)?;
        self.repository.save_preferences(&preferences).await?;

        info!(items = ?preferences.items(), "Onboarding completed");

        resolve_session(self.repository.as_ref(), self.clock.today()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::storage::InMemoryCheckInRepository;

    fn setup() -> (Arc<InMemoryCheckInRepository>, CompleteOnboardingHandler) {
        let repo = Arc::new(InMemoryCheckInRepository::new());
        let clock = Arc::new(FixedClock::at("2024-07-15T08:00:00+08:00").unwrap());
        (repo.clone(), CompleteOnboardingHandler::new(repo, clock))
    }

    fn cmd(items: &[&str]) -> CompleteOnboardingCommand {
        CompleteOnboardingCommand {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn persists_preferences_and_moves_to_daily_interaction() {
        let (repo, handler) = setup();
        let view = handler.handle(cmd(&["lantern", "radio", "pillow"])).await.unwrap();

        assert_eq!(view.state, SessionState::DailyInteraction);
        let stored = repo.load_preferences().await.unwrap().unwrap();
        assert_eq!(stored.items(), &["lantern", "radio", "pillow"]);
    }

    #[tokio::test]
    async fn rejects_wrong_count() {
        let (repo, handler) = setup();
        let err = handler.handle(cmd(&["lantern", "radio"])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(repo.load_preferences().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_second_onboarding() {
        let (_repo, handler) = setup();
        handler.handle(cmd(&["lantern", "radio", "pillow"])).await.unwrap();

        let err = handler
            .handle(cmd(&["flower", "journal", "telescope"]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(
            err.details.get("state"),
            Some(&"daily_interaction".to_string())
        );
    }
}
