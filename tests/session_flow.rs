use clairvoyant::config::GameConfig;
use clairvoyant::deck::Deck;
use clairvoyant::session::{Session, Verdict, PLAY_AGAIN_PROMPT};

fn config(seed: u64) -> GameConfig {
    GameConfig { seed: Some(seed), color: false, ..GameConfig::default() }
}

/// Top `n` labels of the deck a fresh session with `seed` will deal first.
fn first_round_top(seed: u64, n: usize) -> Vec<String> {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(seed);
    (0..n).map(|i| deck.card_name(i).unwrap()).collect()
}

fn play(seed: u64, input: &str) -> (clairvoyant::session::SessionSummary, String) {
    let mut out = Vec::new();
    let summary = {
        let mut session = Session::new(config(seed), input.as_bytes(), &mut out).unwrap();
        session.run().unwrap()
    };
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn five_right_guesses_reach_vegas() {
    let seed = 2024;
    let mut input = String::from("\n");
    for name in first_round_top(seed, 5) {
        input.push_str(&name);
        input.push('\n');
    }
    input.push_str("n\n");

    let (summary, out) = play(seed, &input);
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.correct, 5);
    assert!(out.contains("You were right 5 out of 5 times."));
    assert!(out.contains(Verdict::Vegas.message()));
    assert_eq!(out.matches("Wow! Excellent guess!").count(), 5);
}

#[test]
fn five_wrong_guesses_are_not_clairvoyant() {
    let (summary, out) = play(9, "\nXX\n\nah\n0H\nhello\nn\n");
    assert_eq!(summary.correct, 0);
    assert_eq!(summary.guesses, 5);
    assert!(out.contains("You didn't guess any correctly."));
    assert!(out.contains(Verdict::NotClairvoyant.message()));
    assert_eq!(out.matches("Sorry, that's not correct. It was actually").count(), 5);
}

#[test]
fn anything_but_n_plays_again() {
    let round = "\na\nb\nc\nd\ne\n";
    let input = format!("{round}y\n{round}N\n{round}n\n");
    let (summary, out) = play(5, &input);
    assert_eq!(summary.rounds, 3);
    assert_eq!(out.matches(PLAY_AGAIN_PROMPT).count(), 3);
    assert_eq!(out.matches("Shuffling the deck....").count(), 3);
}

#[test]
fn closed_input_ends_after_the_round() {
    let (summary, out) = play(11, "");
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.correct, 0);
    assert!(out.starts_with("Welcome to \"Are You Clairvoyant\""));
}

#[test]
fn reference_deck_is_shown_sorted() {
    let (_, out) = play(3, "");
    assert!(out.contains("AH 2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH KH\n"));
    assert!(out.contains("AC 2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC\n"));
}

#[test]
fn shuffled_deck_is_printed_before_guessing() {
    let seed = 77;
    let mut deck = Deck::standard();
    deck.shuffle_seeded(seed);
    let (_, out) = play(seed, "");
    let shuffle_at = out.find("Shuffling the deck....").unwrap();
    let rows_at = out.find(&deck.rows()[0]).unwrap();
    let first_prompt = out.find("Okay, now guess the top card: ").unwrap();
    assert!(shuffle_at < rows_at && rows_at < first_prompt);
}

#[test]
fn round_outcome_reports_probabilities() {
    let seed = 31;
    let top = first_round_top(seed, 5);
    let input = format!("\n{}\nzz\nzz\nzz\nzz\n", top[0]);
    let mut session = Session::new(config(seed), input.as_bytes(), Vec::new()).unwrap();
    let outcome = session.play_round().unwrap();

    assert_eq!(outcome.correct, 1);
    assert_eq!(outcome.verdict, Verdict::MaybeClairvoyant);
    assert!(outcome.guesses[0].hit);
    assert_eq!(outcome.guesses[0].actual, top[0]);
    assert!((outcome.probability - clairvoyant::probability::binomial_probability(1, 5)).abs() < 1e-12);
    assert!(outcome.sequence_probability > 0.0 && outcome.sequence_probability < 1.0 / 52.0);
    assert!(outcome.shuffle.passes >= 5);

    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("The probability of randomly guessing any 1 correct out of 5 is 9.24%."));
}

#[test]
fn shorter_rounds_follow_the_config() {
    let cfg = GameConfig { guesses: 2, ..config(4) };
    let mut session = Session::new(cfg, &b"\nx\ny\nn\n"[..], Vec::new()).unwrap();
    let summary = session.run().unwrap();
    assert_eq!(summary.guesses, 2);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("Get ready to guess 2 cards."));
    assert!(out.contains("out of 2 is"));
}

#[test]
fn garbled_bytes_are_a_miss_not_an_error() {
    let input: &[u8] = b"\n\xff\xfeAH\nb\nc\nd\ne\nn\n";
    let mut session = Session::new(config(8), input, Vec::new()).unwrap();
    let summary = session.run().unwrap();
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.guesses, 5);
    assert_eq!(summary.correct, 0);

    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("You didn't guess any correctly."));
    assert_eq!(out.matches("Sorry, that's not correct.").count(), 5);
}
