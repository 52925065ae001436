use crate::cards::{Card, Face, Suit};
use crate::orderedness;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};

/// Threshold (fraction of the sorted-deck score) a shuffle starts out aiming for.
pub const START_THRESHOLD: f64 = 0.2;
/// Factor applied to the threshold every `RELAX_EVERY` passes.
pub const RELAX_FACTOR: f64 = 1.05;
pub const RELAX_EVERY: u32 = 100;
pub const MIN_PASSES: u32 = 5;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("position {position} out of range for a deck of {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("cannot cut a deck of {len} at {at}")]
    InvalidCut { at: usize, len: usize },
}

/// What a call to [`Deck::shuffle_with`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleReport {
    /// Position whose card ended up on top after the cut.
    pub cut: usize,
    /// Swap passes performed.
    pub passes: u32,
    /// Acceptance threshold in force when the shuffle stopped.
    pub threshold: f64,
    /// Orderedness of the deck after the shuffle.
    pub orderedness: u32,
}

/// A standard 52-card deck that remembers how ordered it was when sorted.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    initial_orderedness: u32,
}

impl Deck {
    pub const SIZE: usize = Suit::COUNT * Face::COUNT;

    /// Sorted deck: Hearts, Diamonds, Spades, Clubs, each Ace through King.
    ///
    /// ```
    /// use clairvoyant::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.card_name(0).unwrap(), "AH");
    /// assert_eq!(deck.card_name(51).unwrap(), "KC");
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for &s in &Suit::ALL {
            for &f in &Face::ALL {
                cards.push(Card::new(f, s));
            }
        }
        let initial_orderedness = orderedness::score(&cards);
        Self { cards, initial_orderedness }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    /// Label (`<face><suit>`) of the card currently at `position`.
    pub fn card_name(&self, position: usize) -> Result<String, DeckError> {
        self.card_at(position)
            .map(|c| c.to_string())
            .ok_or(DeckError::OutOfRange { position, len: self.cards.len() })
    }

    /// Orderedness of the sorted deck, cached at construction.
    pub fn initial_orderedness(&self) -> u32 {
        self.initial_orderedness
    }

    /// Orderedness of the current arrangement.
    pub fn orderedness(&self) -> u32 {
        orderedness::score(&self.cards)
    }

    /// Move the cards from `at` to the bottom onto the top, keeping their order.
    pub fn cut(&mut self, at: usize) -> Result<(), DeckError> {
        if at > self.cards.len() {
            return Err(DeckError::InvalidCut { at, len: self.cards.len() });
        }
        self.cards.rotate_left(at);
        Ok(())
    }

    /// Cut, then swap random pairs until the deck looks disordered enough.
    ///
    /// Each pass makes `len / 2` swaps of two uniformly chosen positions (which
    /// may coincide). The shuffle stops once at least [`MIN_PASSES`] passes are
    /// done and the orderedness is at most `initial_orderedness * threshold`.
    /// The threshold starts at [`START_THRESHOLD`] and grows by [`RELAX_FACTOR`]
    /// every [`RELAX_EVERY`] passes so the loop always terminates.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShuffleReport {
        let size = self.cards.len();
        let cut = rng.random_range(size / 3..2 * size / 3);
        self.cards.rotate_left(cut);

        let baseline = f64::from(self.initial_orderedness);
        let mut threshold = START_THRESHOLD;
        let mut passes = 0u32;
        loop {
            for _ in 0..size / 2 {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                self.cards.swap(a, b);
            }
            passes += 1;
            if passes % RELAX_EVERY == 0 {
                threshold *= RELAX_FACTOR;
                tracing::trace!(passes, threshold, "relaxed shuffle threshold");
            }
            let current = self.orderedness();
            if passes >= MIN_PASSES && f64::from(current) <= baseline * threshold {
                let report = ShuffleReport { cut, passes, threshold, orderedness: current };
                tracing::debug!(?report, "shuffle finished");
                return report;
            }
        }
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) -> ShuffleReport {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng)
    }

    /// Card labels in deck order, 13 to a row.
    pub fn rows(&self) -> Vec<String> {
        self.cards
            .chunks(Face::COUNT)
            .map(|row| row.iter().map(Card::to_string).collect::<Vec<_>>().join(" "))
            .collect()
    }

    /// Write [`Deck::rows`], one per line.
    pub fn write_rows<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for row in self.rows() {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_52_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        assert_eq!(Deck::SIZE, 52);
    }

    #[test]
    fn sorted_deck_baseline() {
        let d = Deck::standard();
        assert_eq!(d.initial_orderedness(), 558);
        assert_eq!(d.orderedness(), 558);
    }

    #[test]
    fn card_name_out_of_range() {
        let d = Deck::standard();
        assert_eq!(d.card_name(52), Err(DeckError::OutOfRange { position: 52, len: 52 }));
    }

    #[test]
    fn cut_moves_bottom_block_to_top() {
        let mut d = Deck::standard();
        d.cut(40).unwrap();
        assert_eq!(d.card_name(0).unwrap(), "2C");
        assert_eq!(d.card_name(11).unwrap(), "KC");
        assert_eq!(d.card_name(12).unwrap(), "AH");
        assert!(matches!(d.cut(53), Err(DeckError::InvalidCut { at: 53, len: 52 })));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        let r1 = d1.shuffle_seeded(42);
        let r2 = d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
        assert_eq!(r1, r2);
    }

    #[test]
    fn shuffle_accepts_a_trait_object_rng() {
        let mut seeded = ChaCha8Rng::seed_from_u64(42);
        let rng: &mut dyn rand::RngCore = &mut seeded;
        let mut d1 = Deck::standard();
        let r1 = d1.shuffle_with(rng);

        let mut d2 = Deck::standard();
        let r2 = d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
        assert_eq!(r1, r2);
    }

    #[test]
    fn shuffle_keeps_baseline() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        assert_eq!(d.initial_orderedness(), 558);
        assert_ne!(d.orderedness(), 558);
    }

    #[test]
    fn rows_of_sorted_deck() {
        let rows = Deck::standard().rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "AH 2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH KH");
        assert_eq!(rows[3], "AC 2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC");
    }

    #[test]
    fn write_rows_emits_four_lines() {
        let mut out = Vec::new();
        Deck::standard().write_rows(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("AH 2H"));
    }
}
