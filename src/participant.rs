//! Table participants and their per-variant behavior.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::console::Console;
use crate::error::GameError;
use crate::options::TableOptions;
use crate::render;

/// Which kind of participant holds the seat.
///
/// The variant is fixed at construction time; betting and hit/stand behavior
/// dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The human player, prompted through the console.
    Human,
    /// A scripted opponent.
    Bot,
    /// The house dealer.
    Dealer,
}

/// One seat at the table: a name, a hand, a balance, and the current bet.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    variant: Variant,
    hand: Vec<Card>,
    balance: usize,
    bet: usize,
    revealed: bool,
}

impl Participant {
    /// The human player. Plays with an open hand from the first deal.
    #[must_use]
    pub fn human(balance: usize) -> Self {
        Self::seat("YOU", Variant::Human, balance, true)
    }

    /// The house dealer. Starts with its first card concealed.
    #[must_use]
    pub fn dealer(balance: usize) -> Self {
        Self::seat("DEALER", Variant::Dealer, balance, false)
    }

    /// A scripted opponent. Starts with its first card concealed.
    #[must_use]
    pub fn bot(name: &str, balance: usize) -> Self {
        Self::seat(name, Variant::Bot, balance, false)
    }

    fn seat(name: &str, variant: Variant, balance: usize, revealed: bool) -> Self {
        Self {
            name: name.to_string(),
            variant,
            hand: Vec::new(),
            balance,
            bet: 0,
            revealed,
        }
    }

    /// The participant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The participant's variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether this seat is the house dealer.
    #[must_use]
    pub fn is_dealer(&self) -> bool {
        self.variant == Variant::Dealer
    }

    /// Whether this seat is the human player.
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.variant == Variant::Human
    }

    /// The cards currently held.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// The bet staked for the current round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Whether the hand renders face-up.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Appends a drawn card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Plain sum of the hand's point values.
    ///
    /// Aces always count 11, so a hand holding two of them is busted; totals
    /// are never reduced to stay under 21.
    #[must_use]
    pub fn hand_total(&self) -> u32 {
        self.hand.iter().map(|card| u32::from(card.points())).sum()
    }

    /// Empties the hand for a re-deal.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Sets whether the hand renders face-up. The human's hand is always
    /// face-up, so this is a no-op for that seat.
    pub fn reveal(&mut self, revealed: bool) {
        if self.variant != Variant::Human {
            self.revealed = revealed;
        }
    }

    /// Credits a payout back to the balance.
    pub fn credit(&mut self, amount: usize) {
        self.balance += amount;
    }

    /// Renders the hand, concealing the first card while not revealed.
    #[must_use]
    pub fn render_hand(&self) -> String {
        render::render_hand(&self.hand, self.revealed)
    }

    /// Places this round's bet and debits it from the balance immediately.
    ///
    /// The human is prompted for an amount within
    /// `[min_bet, min(max_bet, balance)]` and re-prompted until one is given.
    /// Bots and the dealer draw uniformly from `[min_bet, balance]`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console fails; rejected input re-prompts.
    pub fn place_bet(
        &mut self,
        console: &mut dyn Console,
        options: &TableOptions,
        rng: &mut ChaCha8Rng,
    ) -> Result<usize, GameError> {
        let amount = match self.variant {
            Variant::Human => self.prompt_bet(console, options)?,
            Variant::Bot | Variant::Dealer => {
                // A broke seat still antes the minimum.
                let upper = self.balance.max(options.min_bet);
                rng.random_range(options.min_bet..=upper)
            }
        };

        self.bet = amount;
        self.balance = self.balance.saturating_sub(amount);
        console.say(&format!("{} put {amount}$", self.name))?;
        Ok(amount)
    }

    fn prompt_bet(
        &self,
        console: &mut dyn Console,
        options: &TableOptions,
    ) -> Result<usize, GameError> {
        let upper = options.max_bet.min(self.balance);
        loop {
            let line = console.ask(&format!("Make your bet ({}$-{upper}$): ", options.min_bet))?;
            match line.parse::<usize>() {
                Ok(amount) if (options.min_bet..=upper).contains(&amount) => return Ok(amount),
                Ok(_) => {
                    console.say("Your bet is not in the accessible range. Please, try again!")?;
                }
                Err(_) => console.say("Can't accept incorrect input. Try again!")?,
            }
        }
    }

    /// Decides whether to take another card.
    ///
    /// The human answers a y/n prompt and is re-prompted on anything else.
    /// Bots hit on 19 or less; the dealer hits below 17.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console fails; rejected input re-prompts.
    pub fn wants_card(&self, console: &mut dyn Console) -> Result<bool, GameError> {
        let hit = match self.variant {
            Variant::Human => self.prompt_hit_or_stand(console)?,
            Variant::Bot => self.hand_total() <= 19,
            Variant::Dealer => self.hand_total() < 17,
        };

        if hit {
            console.say(&format!("{} takes one more card.", self.name))?;
        } else {
            console.say(&format!("{} stands.", self.name))?;
        }
        Ok(hit)
    }

    fn prompt_hit_or_stand(&self, console: &mut dyn Console) -> Result<bool, GameError> {
        loop {
            let line = console.ask(&format!(
                "You have {} points.\nDo you want to take one more card? (y/n): ",
                self.hand_total()
            ))?;
            match line.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => console.say("Invalid input. Please enter \"y\" or \"n\".")?,
            }
        }
    }
}
