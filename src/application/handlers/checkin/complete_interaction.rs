//! CompleteInteraction - Records today's interaction and produces advice.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::info;

use super::session_view::SessionView;
use crate::application::handlers::advice::{GenerateAdviceCommand, GenerateAdviceHandler};
use crate::domain::advice::AdviceResult;
use crate::domain::checkin::{DailyInteractionRecord, InteractionPayload, SessionState};
use crate::domain::foundation::{CalendarDay, DomainError, ErrorCode, StateMachine, Timestamp};
use crate::ports::{CheckInRepository, ChoiceSource, Clock};

/// Seeds handed to the provider fall in `0..SEED_RANGE`.
const SEED_RANGE: usize = 1000;

#[derive(Debug, Clone)]
pub struct CompleteInteractionCommand {
    pub interaction: InteractionPayload,
}

pub struct CompleteInteractionHandler {
    repository: Arc<dyn CheckInRepository>,
    generator: Arc<GenerateAdviceHandler>,
    clock: Arc<dyn Clock>,
    choices: Arc<dyn ChoiceSource>,
    /// Serialises the "no record yet today" check with the writes that follow.
    submit_lock: Arc<Mutex<()>>,
}

impl CompleteInteractionHandler {
    pub fn new(
        repository: Arc<dyn CheckInRepository>,
        generator: Arc<GenerateAdviceHandler>,
        clock: Arc<dyn Clock>,
        choices: Arc<dyn ChoiceSource>,
    ) -> Self {
        Self {
            repository,
            generator,
            clock,
            choices,
            submit_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Generates advice, then persists advice, marker and record together.
    ///
    /// Nothing is written until generation has finished. The writes run in
    /// a spawned task holding the submit lock, so dropping the caller's
    /// future cannot leave the day half-recorded.
    pub async fn handle(&self, cmd: CompleteInteractionCommand) -> Result<SessionView, DomainError> {
        let guard = self.submit_lock.clone().lock_owned().await;

        let now = self.clock.now();
        let today = self.clock.today();

        let preferences = self.repository.load_preferences().await?;
        let has_record = match preferences {
            Some(_) => self.repository.find_record(today).await?.is_some(),
            None => false,
        };
        let current = SessionState::resolve(preferences.is_some(), has_record);
        let state = current
            .transition_to(SessionState::Results)
            .map_err(|_| rejection(current, today))?;
        let Some(preferences) = preferences else {
            return Err(rejection(SessionState::Onboarding, today));
        };

        let record =
            DailyInteractionRecord::new(today, cmd.interaction, Timestamp::from_datetime(now))?;

        // Never fails; falls back internally
        let seed = self.choices.pick(SEED_RANGE) as u32;
        let generated = self
            .generator
            .handle(GenerateAdviceCommand {
                items: preferences.items().to_vec(),
                interaction: record.payload().clone(),
                time_of_day: self.clock.time_of_day(),
                seed: Some(seed),
            })
            .await;

        let cached = AdviceResult::new(today, generated.advice, generated.source, Timestamp::now());
        let interaction_type = record.interaction_type();
        let writes = tokio::spawn(persist(
            self.repository.clone(),
            guard,
            record,
            cached.clone(),
        ));
        writes.await.map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Check-in write task failed: {}", e))
        })??;

        info!(
            date = %today,
            interaction = %interaction_type,
            source = %generated.source,
            "Daily interaction completed"
        );

        Ok(SessionView {
            state,
            today,
            items: preferences.items().to_vec(),
            advice: Some(cached.advice),
            last_check_in: Some(today),
        })
    }
}

/// Advice and marker first, record last: the record is what makes the day
/// resolve to Results.
async fn persist(
    repository: Arc<dyn CheckInRepository>,
    _guard: OwnedMutexGuard<()>,
    record: DailyInteractionRecord,
    advice: AdviceResult,
) -> Result<(), DomainError> {
    repository.save_advice(&advice).await?;
    repository.mark_checked_in(record.date()).await?;
    repository.save_record(&record).await?;
    Ok(())
}

fn rejection(current: SessionState, today: CalendarDay) -> DomainError {
    match current {
        SessionState::Onboarding => DomainError::new(
            ErrorCode::InvalidStateTransition,
            "Onboarding must be completed before the daily interaction",
        ),
        _ => DomainError::new(
            ErrorCode::AlreadyCheckedIn,
            "Today's interaction has already been completed",
        )
        .with_detail("date", today.to_string()),
    }
}
