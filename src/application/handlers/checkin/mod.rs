//! Check-in handlers and the session orchestrator built from them.

mod complete_interaction;
mod complete_onboarding;
mod draw_interaction;
mod orchestrator;
mod reset_day;
mod resolve_session;
mod session_view;

pub use complete_interaction::{CompleteInteractionCommand, CompleteInteractionHandler};
pub use complete_onboarding::{CompleteOnboardingCommand, CompleteOnboardingHandler};
pub use draw_interaction::DrawInteractionHandler;
pub use orchestrator::SessionOrchestrator;
pub use reset_day::{ClearAllHandler, ResetDayHandler};
pub use resolve_session::ResolveSessionHandler;
pub use session_view::{resolve_session, SessionView};
