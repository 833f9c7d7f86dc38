//! What the client needs to render the current screen.

use serde::Serialize;

use crate::domain::advice::Advice;
use crate::domain::checkin::SessionState;
use crate::domain::foundation::{CalendarDay, DomainError};
use crate::ports::CheckInRepository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub state: SessionState,
    pub today: CalendarDay,
    pub items: Vec<String>,
    /// Present only in the Results state.
    pub advice: Option<Advice>,
    pub last_check_in: Option<CalendarDay>,
}

/// Derives the session from persisted state for `today`.
pub async fn resolve_session(
    repository: &dyn CheckInRepository,
    today: CalendarDay,
) -> Result<SessionView, DomainError> {
    let preferences = repository.load_preferences().await?;
    let has_record = match preferences {
        Some(_) => repository.find_record(today).await?.is_some(),
        None => false,
    };
    let state = SessionState::resolve(preferences.is_some(), has_record);

    let advice = if state == SessionState::Results {
        repository.load_advice(today).await?.map(|cached| cached.advice)
    } else {
        None
    };

    Ok(SessionView {
        state,
        today,
        items: preferences
            .map(|p| p.items().to_vec())
            .unwrap_or_default(),
        advice,
        last_check_in: repository.last_check_in().await?,
    })
}
