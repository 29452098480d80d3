//! The session: roster lifecycle and the play-again loop.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::GameError;
use crate::names::NamePool;
use crate::options::TableOptions;
use crate::participant::Participant;
use crate::round::{Round, RoundSummary};

/// A blackjack session: the deck, the seated roster, and the loop that plays
/// round after round until the player leaves or goes broke.
///
/// The session owns all shared state. Rounds borrow the deck and roster, and
/// hand back a payout summary that the session applies to balances.
pub struct Session<C> {
    options: TableOptions,
    console: C,
    rng: ChaCha8Rng,
    deck: Deck,
    pool: NamePool,
    roster: Vec<Participant>,
    /// Seats still standing when the previous round ended.
    last_survivors: Vec<usize>,
}

impl<C: Console> Session<C> {
    /// Creates a session with the human and the dealer seated.
    ///
    /// Bots join later through [`Session::generate_bots`]. The seed makes the
    /// deck order, seating order, and bot bets reproducible.
    #[must_use]
    pub fn new(options: TableOptions, console: C, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let roster = vec![
            Participant::human(options.starting_balance),
            Participant::dealer(options.starting_balance),
        ];

        Self {
            options,
            console,
            rng,
            deck,
            pool: NamePool::new(),
            roster,
            last_survivors: Vec::new(),
        }
    }

    /// The seated roster, in play order.
    #[must_use]
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    /// Runs the whole session: greeting, bot generation, then rounds until
    /// the player quits or cannot cover the minimum bet.
    ///
    /// # Errors
    ///
    /// Fails on deck or name-pool exhaustion and on console failure. Invalid
    /// input never gets here; it is re-prompted in place.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.console.say(
            "Hello! Nice to see you here. Let's start our BLACKJACK GAME!\n\
             Follow the tips in the game and break a leg!",
        )?;
        self.console.pause(self.options.pace);
        self.generate_bots()?;

        loop {
            self.play_round()?;

            if !self.play_again()? {
                self.console
                    .say("Thank you for playing! Have a great day!")?;
                return Ok(());
            }

            if !self.stay_in_room()? {
                self.full_reset()?;
                self.generate_bots()?;
            }
        }
    }

    /// Prompts for a bot count within the configured bounds, seats that many
    /// bots with pool-drawn names, and shuffles the seating order.
    ///
    /// # Errors
    ///
    /// Fails if the name pool runs dry or the console fails.
    pub fn generate_bots(&mut self) -> Result<(), GameError> {
        let count = self.prompt_bot_count()?;

        let mut names = Vec::with_capacity(count);
        for _ in 0..count {
            let name = self.pool.take(&mut self.rng)?;
            self.roster
                .push(Participant::bot(name, self.options.starting_balance));
            names.push(name);
        }

        self.console.say("Looking for your opponents...")?;
        self.console.pause(self.options.pace);
        self.console
            .say(&format!("You will play with {}", names.join(", ")))?;
        self.console.pause(self.options.pace);

        self.roster.shuffle(&mut self.rng);
        Ok(())
    }

    fn prompt_bot_count(&mut self) -> Result<usize, GameError> {
        loop {
            let line = self.console.ask(&format!(
                "\nEnter the number of computer players ({}-{}) you wanna play with: ",
                self.options.min_bots, self.options.max_bots
            ))?;
            match line.parse::<usize>() {
                Ok(count) if (self.options.min_bots..=self.options.max_bots).contains(&count) => {
                    return Ok(count);
                }
                Ok(_) => self.console.say(
                    "Your number of players is not in the accessible range. Please, try again!",
                )?,
                Err(_) => self.console.say("Can't accept incorrect input. Try again!")?,
            }
        }
    }

    /// Plays one round, applies the payouts, and reports the player's
    /// balance.
    ///
    /// # Errors
    ///
    /// Fails on deck exhaustion or console failure.
    pub fn play_round(&mut self) -> Result<(), GameError> {
        let round = Round::new(
            &mut self.deck,
            &mut self.roster,
            &mut self.console,
            &self.options,
            &mut self.rng,
        );
        let summary = round.run()?;
        self.apply(&summary);
        self.last_survivors = summary.survivors;

        let balance = self.human().balance();
        self.console
            .say(&format!("\nYour current balance: ${balance}"))?;
        Ok(())
    }

    /// Credits every settled payout back to its seat.
    fn apply(&mut self, summary: &RoundSummary) {
        for entry in &summary.entries {
            self.roster[entry.seat].credit(entry.payout);
        }
    }

    /// Asks whether to play another round. Refuses when the player cannot
    /// cover the minimum bet.
    fn play_again(&mut self) -> Result<bool, GameError> {
        loop {
            let line = self.console.ask("\nDo you want to play again? (y/n): ")?;
            match line.as_str() {
                "y" => {
                    if self.human().balance() < self.options.min_bet {
                        self.console.say(
                            "Sorry, you don't have enough money for the minimum bet. Game over.",
                        )?;
                        return Ok(false);
                    }
                    return Ok(true);
                }
                "n" => return Ok(false),
                _ => self
                    .console
                    .say("Invalid input. Please enter \"y\" or \"n\".")?,
            }
        }
    }

    /// Offers to keep the current table when opponents beyond the dealer
    /// survived the last round. Staying rebuilds the deck and re-deals; the
    /// roster and balances carry over.
    fn stay_in_room(&mut self) -> Result<bool, GameError> {
        let human_survived = self
            .last_survivors
            .iter()
            .any(|&seat| self.roster[seat].is_human());
        if self.last_survivors.len() <= 2 || !human_survived {
            return Ok(false);
        }

        loop {
            let line = self.console.ask("\nStay in this room? (y/n): ")?;
            match line.as_str() {
                "y" => {
                    self.reset_room()?;
                    return Ok(true);
                }
                "n" => return Ok(false),
                _ => self
                    .console
                    .say("Invalid input. Please enter \"y\" or \"n\".")?,
            }
        }
    }

    /// Same table, fresh shoe: new deck, cleared and re-dealt hands, dealer
    /// and bot cards concealed again. Balances carry over.
    fn reset_room(&mut self) -> Result<(), GameError> {
        self.deck = Deck::shuffled(&mut self.rng);
        for participant in &mut self.roster {
            participant.clear_hand();
            for _ in 0..2 {
                let card = self.deck.draw()?;
                participant.receive_card(card);
            }
            participant.reveal(false);
        }

        self.console.pause(self.options.pace);
        self.console.say(&format!("\n{}\n", "*".repeat(100)))?;
        self.console.say(
            "Seems you're in love with this table! OK, another game at the same room.",
        )?;
        self.console.pause(self.options.pace);
        Ok(())
    }

    /// New room: fresh deck and dealer, bots dismissed (their names stay
    /// spent), the player's hand re-dealt from the new deck. The player's
    /// balance carries over.
    fn full_reset(&mut self) -> Result<(), GameError> {
        self.deck = Deck::shuffled(&mut self.rng);
        self.roster.retain(Participant::is_human);
        self.roster
            .push(Participant::dealer(self.options.starting_balance));

        // The player's next deal comes from the fresh deck right away; the
        // dealer and the incoming bots wait for the round's dealing phase.
        let deck = &mut self.deck;
        if let Some(human) = self.roster.iter_mut().find(|p| p.is_human()) {
            human.clear_hand();
            for _ in 0..2 {
                human.receive_card(deck.draw()?);
            }
        }
        self.last_survivors.clear();
        Ok(())
    }

    /// The human's seat. The roster always contains exactly one.
    fn human(&self) -> &Participant {
        self.roster
            .iter()
            .find(|participant| participant.is_human())
            .expect("the roster always seats the human")
    }
}
