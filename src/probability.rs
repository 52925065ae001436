//! Chance estimates for a run of guesses against a 52-card deck.

use crate::deck::Deck;

const DECK: f64 = Deck::SIZE as f64;

/// Estimated probability of exactly `correct` hits in `total` blind guesses.
///
/// Uses a single per-guess success rate: the average of the chance on the first
/// draw (`1/52`) and on the last draw of the run (`1/(52 - total + 1)`). This
/// ignores how the odds shift between draws, so it only approximates the real
/// chance of a run; see [`sequence_probability`] for the draw-by-draw figure.
///
/// ```
/// use clairvoyant::probability::binomial_probability;
///
/// let p = binomial_probability(1, 5);
/// assert!(p > 0.092 && p < 0.093);
/// ```
pub fn binomial_probability(correct: usize, total: usize) -> f64 {
    if correct > total {
        return 0.0;
    }
    let p = (1.0 / DECK + 1.0 / (DECK - total as f64 + 1.0)) / 2.0;
    let q = 1.0 - p;

    // C(total, correct) built up one factor at a time
    let mut combinations = 1.0;
    let mut hits = 1.0;
    for i in 0..correct {
        combinations = combinations * (total - i) as f64 / (correct - i) as f64;
        hits *= p;
    }
    let mut misses = 1.0;
    for _ in 0..total - correct {
        misses *= q;
    }
    combinations * hits * misses
}

/// Probability of guessing exactly this hit/miss sequence, draw by draw.
///
/// Guess `i` (0-based) is right with chance `1/(52 - i)`.
pub fn sequence_probability(hits: &[bool]) -> f64 {
    hits.iter().enumerate().fold(1.0, |acc, (i, &hit)| {
        let chance = 1.0 / (DECK - i as f64);
        acc * if hit { chance } else { 1.0 - chance }
    })
}
