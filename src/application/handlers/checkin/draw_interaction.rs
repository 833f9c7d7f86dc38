//! DrawInteraction - Picks today's interaction from the catalogs.

use std::sync::Arc;

use crate::domain::checkin::InteractionPrompt;
use crate::ports::ChoiceSource;

pub struct DrawInteractionHandler {
    choices: Arc<dyn ChoiceSource>,
}

impl DrawInteractionHandler {
    pub fn new(choices: Arc<dyn ChoiceSource>) -> Self {
        Self { choices }
    }

    pub fn handle(&self) -> InteractionPrompt {
        InteractionPrompt::draw(|len| self.choices.pick(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::{ScriptedChoiceSource, SeededChoiceSource};
    use crate::domain::checkin::{CHOICES, SLIDERS};

    #[test]
    fn scripted_picks_choose_type_then_entry() {
        let handler = DrawInteractionHandler::new(Arc::new(ScriptedChoiceSource::new(vec![1, 1])));
        assert_eq!(handler.handle(), InteractionPrompt::Choice { choice: CHOICES[1] });

        let handler = DrawInteractionHandler::new(Arc::new(ScriptedChoiceSource::new(vec![0, 1])));
        assert_eq!(handler.handle(), InteractionPrompt::Slider { slider: SLIDERS[1] });
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let a = DrawInteractionHandler::new(Arc::new(SeededChoiceSource::from_seed(9)));
        let b = DrawInteractionHandler::new(Arc::new(SeededChoiceSource::from_seed(9)));
        for _ in 0..10 {
            assert_eq!(a.handle(), b.handle());
        }
    }
}
