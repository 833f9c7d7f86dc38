//! rand-backed choice sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::ports::ChoiceSource;

/// Uniform picks from a `StdRng`, reproducible when built from a seed.
#[derive(Debug)]
pub struct SeededChoiceSource {
    rng: Mutex<StdRng>,
}

impl SeededChoiceSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl ChoiceSource for SeededChoiceSource {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping each into range. Repeats the
/// last pick once the script runs out.
#[derive(Debug)]
pub struct ScriptedChoiceSource {
    picks: Mutex<(Vec<usize>, usize)>,
}

impl ScriptedChoiceSource {
    pub fn new(picks: Vec<usize>) -> Self {
        Self {
            picks: Mutex::new((picks, 0)),
        }
    }

    /// Always picks the same index.
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl ChoiceSource for ScriptedChoiceSource {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut guard = self.picks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let (picks, cursor) = &mut *guard;
        let raw = match picks.get(*cursor) {
            Some(pick) => {
                *cursor += 1;
                *pick
            }
            None => picks.last().copied().unwrap_or(0),
        };
        raw % len
    }
}
