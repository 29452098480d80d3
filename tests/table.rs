//! Table integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twenty_one::{
    Card, Console, Deck, DeckError, GameError, Outcome, Participant, PayoutEntry, Round,
    RoundSummary, Session, Suit, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that hands out `draws` in order, first element first.
fn stacked_deck(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn quiet_options() -> TableOptions {
    TableOptions::default().with_pace(Duration::ZERO)
}

/// Console fed from a fixed script. Records everything said to it.
struct ScriptedConsole {
    replies: VecDeque<String>,
    fallback: Option<String>,
    transcript: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConsole {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(ToString::to_string).collect(),
            fallback: None,
            transcript: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Like [`ScriptedConsole::new`], but answers `fallback` once the script
    /// runs out instead of panicking.
    fn with_fallback(replies: &[&str], fallback: &str) -> Self {
        let mut console = Self::new(replies);
        console.fallback = Some(fallback.to_string());
        console
    }

    fn transcript(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.transcript)
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.borrow_mut().push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.transcript.borrow_mut().push(prompt.to_string());
        if let Some(reply) = self.replies.pop_front() {
            return Ok(reply);
        }
        self.fallback
            .clone()
            .map_or_else(|| panic!("no scripted reply left for prompt: {prompt}"), Ok)
    }

    fn pause(&mut self, _duration: Duration) {}
}

fn transcript_contains(transcript: &Rc<RefCell<Vec<String>>>, needle: &str) -> bool {
    transcript.borrow().iter().any(|line| line.contains(needle))
}

fn entry_for(summary: &RoundSummary, seat: usize) -> PayoutEntry {
    summary
        .entries
        .iter()
        .copied()
        .find(|entry| entry.seat == seat)
        .unwrap_or_else(|| panic!("no payout entry for seat {seat}"))
}

fn expected_half_again(bet: usize) -> usize {
    (bet as f64 * 1.5).round() as usize
}

#[test]
fn hand_total_is_an_order_independent_sum() {
    let cards = [card(Suit::Spades, 1), card(Suit::Hearts, 13), card(Suit::Clubs, 3)];

    let mut forward = Participant::bot("Forward", 100);
    for c in cards {
        forward.receive_card(c);
    }
    let mut backward = Participant::bot("Backward", 100);
    for c in cards.iter().rev() {
        backward.receive_card(*c);
    }

    assert_eq!(forward.hand_total(), 24);
    assert_eq!(forward.hand_total(), backward.hand_total());
}

#[test]
fn aces_always_count_eleven() {
    let mut pair_of_aces = Participant::bot("Unlucky", 100);
    pair_of_aces.receive_card(card(Suit::Spades, 1));
    pair_of_aces.receive_card(card(Suit::Hearts, 1));

    // No soft-Ace relief: two Aces are a busted 22.
    assert_eq!(pair_of_aces.hand_total(), 22);
}

#[test]
fn no_card_is_duplicated_or_lost() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::shuffled(&mut rng);

    let mut first = Participant::human(100);
    let mut second = Participant::bot("Other", 100);
    for _ in 0..2 {
        first.receive_card(deck.draw().expect("fresh deck"));
        second.receive_card(deck.draw().expect("fresh deck"));
    }

    assert_eq!(first.hand().len() + second.hand().len() + deck.remaining(), 52);
}

#[test]
fn dealer_and_bot_thresholds_are_deterministic() {
    let mut console = ScriptedConsole::new(&[]);

    let mut dealer = Participant::dealer(100);
    dealer.receive_card(card(Suit::Spades, 10));
    dealer.receive_card(card(Suit::Hearts, 6));
    assert!(dealer.wants_card(&mut console).expect("scripted"));

    dealer.receive_card(card(Suit::Clubs, 1));
    // 27: busted, but the decision rule itself still stands at 17 or more.
    assert!(!dealer.wants_card(&mut console).expect("scripted"));

    let mut standing_dealer = Participant::dealer(100);
    standing_dealer.receive_card(card(Suit::Spades, 10));
    standing_dealer.receive_card(card(Suit::Hearts, 7));
    assert!(!standing_dealer.wants_card(&mut console).expect("scripted"));

    let mut hitting_bot = Participant::bot("Hitter", 100);
    hitting_bot.receive_card(card(Suit::Spades, 10));
    hitting_bot.receive_card(card(Suit::Hearts, 9));
    assert!(hitting_bot.wants_card(&mut console).expect("scripted"));

    let mut standing_bot = Participant::bot("Stander", 100);
    standing_bot.receive_card(card(Suit::Spades, 10));
    standing_bot.receive_card(card(Suit::Diamonds, 10));
    assert!(!standing_bot.wants_card(&mut console).expect("scripted"));
}

#[test]
fn human_bets_are_validated_and_reprompted() {
    let mut console = ScriptedConsole::new(&["abc", "1", "700", "50"]);
    let transcript = console.transcript();
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let mut human = Participant::human(100);
    let bet = human
        .place_bet(&mut console, &options, &mut rng)
        .expect("scripted");

    assert_eq!(bet, 50);
    assert_eq!(human.balance(), 50);
    assert!(transcript_contains(&transcript, "incorrect input"));
    assert!(transcript_contains(&transcript, "not in the accessible range"));
}

#[test]
fn bot_bets_stay_within_bounds_and_are_debited() {
    let mut console = ScriptedConsole::new(&[]);
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let mut bot = Participant::bot("Bettor", 100);
    let bet = bot
        .place_bet(&mut console, &options, &mut rng)
        .expect("no prompts involved");

    assert!((options.min_bet..=100).contains(&bet));
    assert_eq!(bot.balance(), 100 - bet);
}

#[test]
fn natural_21_settles_immediately_at_double_the_bet() {
    let mut deck = stacked_deck(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 9),
    ]);
    let mut roster = vec![Participant::human(100), Participant::dealer(100)];
    let mut console = ScriptedConsole::new(&["10"]);
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let round = Round::new(&mut deck, &mut roster, &mut console, &options, &mut rng);
    let summary = round.run().expect("round should finish");

    assert_eq!(roster[0].hand(), [card(Suit::Spades, 10), card(Suit::Hearts, 1)]);
    assert_eq!(roster[0].hand_total(), 21);

    let entry = entry_for(&summary, 0);
    assert_eq!(entry.outcome, Outcome::Natural);
    assert_eq!(entry.bet, 10);
    assert_eq!(entry.payout, 20);

    // The bet was debited at betting time; the payout is applied by the session.
    assert_eq!(roster[0].balance(), 90);
}

#[test]
fn dealer_bust_pays_every_survivor_one_and_a_half_times() {
    let mut deck = stacked_deck(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 13),
    ]);
    let mut roster = vec![Participant::human(100), Participant::dealer(100)];
    let mut console = ScriptedConsole::new(&["10", "n"]);
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let round = Round::new(&mut deck, &mut roster, &mut console, &options, &mut rng);
    let summary = round.run().expect("round should finish");

    let dealer_entry = entry_for(&summary, 1);
    assert_eq!(dealer_entry.outcome, Outcome::Busted);
    assert_eq!(dealer_entry.payout, 0);

    let human_entry = entry_for(&summary, 0);
    assert_eq!(human_entry.outcome, Outcome::DealerBust);
    assert_eq!(human_entry.payout, 15);

    roster[0].credit(human_entry.payout);
    assert_eq!(roster[0].balance(), 105);
}

#[test]
fn a_busted_player_is_removed_with_no_payout() {
    let mut deck = stacked_deck(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Clubs, 11),
    ]);
    let mut roster = vec![Participant::human(100), Participant::dealer(100)];
    let mut console = ScriptedConsole::new(&["10", "y"]);
    let transcript = console.transcript();
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let round = Round::new(&mut deck, &mut roster, &mut console, &options, &mut rng);
    let summary = round.run().expect("round should finish");

    let human_entry = entry_for(&summary, 0);
    assert_eq!(human_entry.outcome, Outcome::Busted);
    assert_eq!(human_entry.payout, 0);
    assert_eq!(roster[0].balance(), 90);
    assert!(transcript_contains(&transcript, "busted"));

    // With the player gone the dealer is the last hand standing under 21.
    let dealer_entry = entry_for(&summary, 1);
    assert_eq!(dealer_entry.outcome, Outcome::SoleSurvivor);
    assert_eq!(dealer_entry.payout, expected_half_again(dealer_entry.bet));
    assert_eq!(summary.survivors, vec![1]);
}

#[test]
fn matching_the_dealer_is_a_push() {
    let mut deck = stacked_deck(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 7),
    ]);
    let mut roster = vec![Participant::human(100), Participant::dealer(100)];
    let mut console = ScriptedConsole::new(&["10", "n"]);
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let round = Round::new(&mut deck, &mut roster, &mut console, &options, &mut rng);
    let summary = round.run().expect("round should finish");

    let entry = entry_for(&summary, 0);
    assert_eq!(entry.outcome, Outcome::Push);
    assert_eq!(entry.payout, entry.bet);

    roster[0].credit(entry.payout);
    assert_eq!(roster[0].balance(), 100);
}

#[test]
fn settlement_compares_every_survivor_against_the_dealer() {
    let mut deck = stacked_deck(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 8),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Hearts, 13),
        card(Suit::Spades, 12),
    ]);
    let mut roster = vec![
        Participant::human(100),
        Participant::dealer(100),
        Participant::bot("Rival", 100),
    ];
    let mut console = ScriptedConsole::new(&["10", "n"]);
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let round = Round::new(&mut deck, &mut roster, &mut console, &options, &mut rng);
    let summary = round.run().expect("round should finish");

    // Human 18 falls short of the dealer's 20; the bot's 20 ties it.
    let human_entry = entry_for(&summary, 0);
    assert_eq!(human_entry.outcome, Outcome::Lost);
    assert_eq!(human_entry.payout, 0);

    let bot_entry = entry_for(&summary, 2);
    assert_eq!(bot_entry.outcome, Outcome::Push);
    assert_eq!(bot_entry.payout, bot_entry.bet);
}

#[test]
fn an_empty_deck_ends_the_round_with_a_clear_error() {
    let mut deck = Deck::from_cards(Vec::new());
    let mut roster = vec![Participant::human(100), Participant::dealer(100)];
    let mut console = ScriptedConsole::new(&["10"]);
    let options = quiet_options();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let round = Round::new(&mut deck, &mut roster, &mut console, &options, &mut rng);
    let result = round.run();

    assert!(matches!(
        result,
        Err(GameError::Deck(DeckError::Exhausted))
    ));
}

#[test]
fn bot_count_is_validated_before_seating() {
    let console = ScriptedConsole::new(&["0", "1"]);
    let transcript = console.transcript();
    let mut session = Session::new(quiet_options(), console, 17);

    session.generate_bots().expect("scripted");

    let bots: Vec<_> = session
        .roster()
        .iter()
        .filter(|participant| participant.variant() == twenty_one::Variant::Bot)
        .collect();
    assert_eq!(bots.len(), 1);
    assert!(!bots[0].name().is_empty());
    assert_eq!(session.roster().len(), 3);
    assert!(transcript_contains(&transcript, "not in the accessible range"));
    assert!(transcript_contains(&transcript, "You will play with"));
}

#[test]
fn a_full_session_plays_one_round_and_exits() {
    // One bot, minimum bet, stand on everything, decline the rematch.
    let console = ScriptedConsole::with_fallback(&["1", "2"], "n");
    let transcript = console.transcript();
    let mut session = Session::new(quiet_options(), console, 23);

    session.run().expect("session should end cleanly");

    assert!(transcript_contains(&transcript, "TIME FOR BETS"));
    assert!(transcript_contains(&transcript, "Your current balance"));
    assert!(transcript_contains(&transcript, "Thank you for playing"));
}
