//! Check-in domain: onboarding items, daily interactions and the session
//! state machine that ties them together.

mod interaction;
mod items;
mod preferences;
mod record;
mod session_state;

pub use interaction::{
    find_slider, ChoiceSpec, InteractionPayload, InteractionPrompt, InteractionType, OptionSpec,
    SenseSpec, SliderSpec, CHOICES, SENSES, SLIDERS, SLIDER_MAX,
};
pub use items::{descriptor_for, find_item, OnboardingItem, ONBOARDING_ITEMS, REQUIRED_ITEM_COUNT};
pub use preferences::UserPreferences;
pub use record::DailyInteractionRecord;
pub use session_state::SessionState;
