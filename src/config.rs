use crate::deck::Deck;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("guesses per round must be between 1 and {max}, got {0}", max = Deck::SIZE)]
    GuessesOutOfRange(usize),
}

/// Settings for a guessing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards to guess per round.
    pub guesses: usize,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Colour correct/incorrect feedback with ANSI styling.
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { guesses: Self::DEFAULT_GUESSES, seed: None, color: true }
    }
}

impl GameConfig {
    pub const DEFAULT_GUESSES: usize = 5;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guesses == 0 || self.guesses > Deck::SIZE {
            return Err(ConfigError::GuessesOutOfRange(self.guesses));
        }
        Ok(())
    }
}
