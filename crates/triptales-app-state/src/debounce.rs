use std::time::Duration;

use crate::SEARCH_DEBOUNCE_DELAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Trailing-edge debouncer. Every `schedule` supersedes the tokens handed out
/// before it; the caller sleeps for `delay()` and fires only if its token is
/// still current.
#[derive(Debug, Clone)]
pub struct Debouncer {
    generation: u64,
    delay: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            generation: 0,
            delay,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self) -> DebounceToken {
        self.generation = self.generation.wrapping_add(1);
        DebounceToken(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, token: DebounceToken) -> bool {
        token.0 == self.generation
    }
}
