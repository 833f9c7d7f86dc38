//! SessionOrchestrator - Drives Onboarding → DailyInteraction → Results.
//!
//! Owns one handler per operation and shares the injected ports between
//! them. The HTTP adapter and the binary talk to this type only.

use std::sync::Arc;

use super::complete_interaction::{CompleteInteractionCommand, CompleteInteractionHandler};
use super::complete_onboarding::{CompleteOnboardingCommand, CompleteOnboardingHandler};
use super::draw_interaction::DrawInteractionHandler;
use super::reset_day::{ClearAllHandler, ResetDayHandler};
use super::resolve_session::ResolveSessionHandler;
use super::session_view::SessionView;
use crate::application::handlers::advice::GenerateAdviceHandler;
use crate::domain::checkin::{InteractionPayload, InteractionPrompt};
use crate::domain::foundation::DomainError;
use crate::ports::{CheckInRepository, ChoiceSource, Clock};

pub struct SessionOrchestrator {
    resolve: ResolveSessionHandler,
    onboarding: CompleteOnboardingHandler,
    draw: DrawInteractionHandler,
    interaction: CompleteInteractionHandler,
    reset: ResetDayHandler,
    clear: ClearAllHandler,
}

impl SessionOrchestrator {
    pub fn new(
        repository: Arc<dyn CheckInRepository>,
        generator: Arc<GenerateAdviceHandler>,
        clock: Arc<dyn Clock>,
        choices: Arc<dyn ChoiceSource>,
    ) -> Self {
        Self {
            resolve: ResolveSessionHandler::new(repository.clone(), clock.clone()),
            onboarding: CompleteOnboardingHandler::new(repository.clone(), clock.clone()),
            draw: DrawInteractionHandler::new(choices.clone()),
            interaction: CompleteInteractionHandler::new(
                repository.clone(),
                generator,
                clock.clone(),
                choices,
            ),
            reset: ResetDayHandler::new(repository.clone(), clock.clone()),
            clear: ClearAllHandler::new(repository, clock),
        }
    }

    pub async fn resolve(&self) -> Result<SessionView, DomainError> {
        self.resolve.handle().await
    }

    pub async fn complete_onboarding(&self, items: Vec<String>) -> Result<SessionView, DomainError> {
        self.onboarding
            .handle(CompleteOnboardingCommand { items })
            .await
    }

    pub fn draw_interaction(&self) -> InteractionPrompt {
        self.draw.handle()
    }

    pub async fn complete_interaction(
        &self,
        interaction: InteractionPayload,
    ) -> Result<SessionView, DomainError> {
        self.interaction
            .handle(CompleteInteractionCommand { interaction })
            .await
    }

    pub async fn reset_day(&self) -> Result<SessionView, DomainError> {
        self.reset.handle().await
    }

    pub async fn clear_all(&self) -> Result<SessionView, DomainError> {
        self.clear.handle().await
    }
}
