//! Orderedness heuristic: how much sequential structure remains in a deck.
//!
//! The score is the sum of an adjacency score (pairwise rules over neighbouring
//! cards) and a histogram score (how unevenly each suit and face is spread over
//! the four quarters of the deck). Higher means more ordered.

use crate::cards::{Card, Face, Suit};

pub const SAME_SUIT: u32 = 2;
pub const SAME_FACE: u32 = 8;
pub const CONSECUTIVE: u32 = 6;
pub const SEMI_CONSECUTIVE: u32 = 1;

/// Number of contiguous slices the histogram check splits the deck into.
pub const QUARTERS: usize = 4;
pub const SUIT_SPREAD_WEIGHT: u32 = 3;

const FACES: i8 = Face::COUNT as i8;

/// Total orderedness of `cards`.
pub fn score(cards: &[Card]) -> u32 {
    adjacency_score(cards) + histogram_score(cards)
}

/// True if `to` sits `step` faces after `from`.
///
/// A step may wrap across the King/Ace seam only when `from` is on the seam:
/// ascending steps wrap from a King, descending steps from an Ace. So K→A and
/// K→2 count as +1 and +2, A→K and A→Q as -1 and -2, but Q→A and 2→K are not steps.
pub fn face_step_matches(from: Face, to: Face, step: i8) -> bool {
    let direct = to.ordinal() as i8 - from.ordinal() as i8;
    if direct == step {
        return true;
    }
    match from {
        Face::King if step > 0 => direct + FACES == step,
        Face::Ace if step < 0 => direct - FACES == step,
        _ => false,
    }
}

/// Score for one neighbouring pair. Rules are cumulative.
pub fn pair_score(first: Card, second: Card) -> u32 {
    let (f0, f1) = (first.face(), second.face());
    let mut n = 0;
    if first.suit() == second.suit() {
        n += SAME_SUIT;
    }
    if f0 == f1 {
        n += SAME_FACE;
    }
    if face_step_matches(f0, f1, 1) {
        n += CONSECUTIVE;
    }
    if face_step_matches(f0, f1, -1) {
        n += CONSECUTIVE;
    }
    if face_step_matches(f0, f1, 2) {
        n += SEMI_CONSECUTIVE;
    }
    if face_step_matches(f0, f1, -2) {
        n += SEMI_CONSECUTIVE;
    }
    n
}

/// Sum of `pair_score` over every neighbouring pair, without wraparound.
pub fn adjacency_score(cards: &[Card]) -> u32 {
    cards.windows(2).map(|w| pair_score(w[0], w[1])).sum()
}

/// Spread of suits (weighted) and faces across the deck's quarters.
pub fn histogram_score(cards: &[Card]) -> u32 {
    let suits: u32 = Suit::ALL
        .iter()
        .map(|&suit| quarter_spread(cards, |c| c.suit() == suit) * SUIT_SPREAD_WEIGHT)
        .sum();
    let faces: u32 =
        Face::ALL.iter().map(|&face| quarter_spread(cards, |c| c.face() == face)).sum();
    suits + faces
}

/// Max minus min count of matching cards per quarter.
fn quarter_spread(cards: &[Card], matches: impl Fn(&Card) -> bool) -> u32 {
    let quarter_len = (cards.len() / QUARTERS).max(1);
    let mut histogram = [0u32; QUARTERS];
    for (i, card) in cards.iter().enumerate() {
        if matches(card) {
            histogram[(i / quarter_len).min(QUARTERS - 1)] += 1;
        }
    }
    let high = histogram.iter().copied().max().unwrap_or(0);
    let low = histogram.iter().copied().min().unwrap_or(0);
    high - low
}
