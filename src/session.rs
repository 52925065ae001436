//! Interactive guessing session over any line-oriented input and text output.
//!
//! The session owns two decks: one that is shuffled for every round and one that
//! stays sorted so the player can see which labels are valid guesses.

use crate::cards::Card;
use crate::config::{ConfigError, GameConfig};
use crate::deck::{Deck, DeckError, ShuffleReport};
use crate::probability::{binomial_probability, sequence_probability};
use crossterm::style::{style, Color, Stylize};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str =
    "Welcome to \"Are You Clairvoyant\" where you can test your ability to predict the future!";
pub const DECK_INTRO: &str = "We'll be using a standard poker deck.";
pub const CHOICES: &str = "To make a prediction, simply enter one of the following:";
pub const GUESS_PROMPT: &str = "Okay, now guess the top card: ";
pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play again? y/n: ";
pub const HIT_MESSAGE: &str = "Wow! Excellent guess! You were right.";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Commentary chosen by how many guesses in a round were right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NotClairvoyant,
    MaybeClairvoyant,
    QuiteRare,
    UnheardOf,
    Vegas,
}

impl Verdict {
    pub const fn for_correct(correct: usize) -> Self {
        match correct {
            0 => Verdict::NotClairvoyant,
            1 => Verdict::MaybeClairvoyant,
            2 => Verdict::QuiteRare,
            3 => Verdict::UnheardOf,
            _ => Verdict::Vegas,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Verdict::NotClairvoyant => "Probably not clairvoyant.",
            Verdict::MaybeClairvoyant => "You may be clairvoyant.",
            Verdict::QuiteRare => "That's quite rare. You might be clairvoyant.",
            Verdict::UnheardOf => "That's unheard of. You've gotta be clairvoyant.",
            Verdict::Vegas => "You've gotta be clairvoyant! Can I take you to Vegas with me?",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One guess and the card it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// The line exactly as entered, minus the line ending.
    pub text: String,
    /// The guess as a card, if it was a valid label at all.
    pub parsed: Option<Card>,
    /// Label of the card that was on top.
    pub actual: String,
    pub hit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub guesses: Vec<GuessResult>,
    pub correct: usize,
    /// Binomial estimate of getting `correct` right by chance.
    pub probability: f64,
    /// Chance of this exact hit/miss sequence.
    pub sequence_probability: f64,
    pub verdict: Verdict,
    pub shuffle: ShuffleReport,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub guesses: usize,
    pub correct: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        self.guesses += outcome.guesses.len();
        self.correct += outcome.correct;
    }
}

#[derive(Debug)]
pub struct Session<R, W> {
    config: GameConfig,
    input: R,
    output: W,
    deck: Deck,
    reference: Deck,
    rng: ChaCha8Rng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: GameConfig, input: R, output: W) -> Result<Self, SessionError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Ok(Self {
            config,
            input,
            output,
            deck: Deck::standard(),
            reference: Deck::standard(),
            rng,
        })
    }

    /// The deck being played with, in its current order.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play rounds until the player answers `n` or the input runs out.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output, "{DECK_INTRO}")?;

        let mut summary = SessionSummary::default();
        loop {
            let outcome = self.play_round()?;
            summary.record(&outcome);

            writeln!(self.output, "{PLAY_AGAIN_PROMPT}")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer == "n" => break,
                Some(_) => {}
                None => {
                    tracing::debug!("input closed at play-again prompt");
                    break;
                }
            }
        }
        tracing::info!(?summary, "session finished");
        Ok(summary)
    }

    /// Show the choices, shuffle, take the guesses and report the score.
    pub fn play_round(&mut self) -> Result<RoundOutcome, SessionError> {
        writeln!(self.output, "{CHOICES}")?;
        self.reference.write_rows(&mut self.output)?;
        writeln!(
            self.output,
            "Get ready to guess {} cards. Press [Enter] to begin.",
            self.config.guesses
        )?;
        self.output.flush()?;
        let _ = self.read_line()?;

        writeln!(self.output, "Shuffling the deck....")?;
        let shuffle = self.deck.shuffle_with(&mut self.rng);
        self.deck.write_rows(&mut self.output)?;

        let mut guesses = Vec::with_capacity(self.config.guesses);
        for position in 0..self.config.guesses {
            write!(self.output, "{GUESS_PROMPT}")?;
            self.output.flush()?;
            // a closed input counts as a blank guess
            let text = self.read_line()?.unwrap_or_default();
            let result = self.check_guess(position, text)?;
            let feedback = if result.hit {
                self.paint(HIT_MESSAGE, Color::Green)
            } else {
                let miss = format!("Sorry, that's not correct. It was actually {}.", result.actual);
                self.paint(&miss, Color::Red)
            };
            writeln!(self.output, "{feedback}")?;
            guesses.push(result);
        }

        let outcome = self.score(guesses, shuffle);
        self.report(&outcome)?;
        tracing::info!(
            correct = outcome.correct,
            guesses = outcome.guesses.len(),
            passes = outcome.shuffle.passes,
            "round finished"
        );
        Ok(outcome)
    }

    fn check_guess(&self, position: usize, text: String) -> Result<GuessResult, SessionError> {
        let actual = self.deck.card_name(position)?;
        let parsed = text.parse::<Card>().ok();
        let hit = text == actual;
        tracing::debug!(position, guess = %text, recognised = parsed.is_some(), hit, "guess");
        Ok(GuessResult { text, parsed, actual, hit })
    }

    fn score(&self, guesses: Vec<GuessResult>, shuffle: ShuffleReport) -> RoundOutcome {
        let hits: Vec<bool> = guesses.iter().map(|g| g.hit).collect();
        let correct = hits.iter().filter(|&&h| h).count();
        let sequence_probability = sequence_probability(&hits);
        tracing::debug!(sequence_probability, "odds of this exact sequence");
        RoundOutcome {
            probability: binomial_probability(correct, guesses.len()),
            sequence_probability,
            verdict: Verdict::for_correct(correct),
            correct,
            guesses,
            shuffle,
        }
    }

    fn report(&mut self, outcome: &RoundOutcome) -> io::Result<()> {
        let total = outcome.guesses.len();
        writeln!(self.output)?;
        if outcome.correct == 0 {
            writeln!(self.output, "You didn't guess any correctly.")?;
        } else {
            writeln!(self.output, "You were right {} out of {total} times.", outcome.correct)?;
        }
        writeln!(
            self.output,
            "The probability of randomly guessing any {} correct out of {total} is {:.2}%.",
            outcome.correct,
            outcome.probability * 100.0
        )?;
        let verdict = self.paint(outcome.verdict.message(), Color::Yellow);
        writeln!(self.output, "{verdict}")
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.config.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Next input line without its line ending, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line is just a
    /// guess that matches no card.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        let line: &str = &line;
        let trimmed = line.strip_suffix('\n').unwrap_or(line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
