//! The round controller: one full round from betting to payout.

use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::GameError;
use crate::options::{RoundingMode, TableOptions};
use crate::participant::Participant;

/// Phases of a round, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Every active participant stakes a bet.
    Betting,
    /// Two cards to every empty hand.
    Dealing,
    /// Concealed hands turn face-up.
    Reveal,
    /// The hit/stand loop.
    PlayerTurns,
    /// Standings compared against the dealer.
    Settlement,
    /// Outcomes are final.
    Done,
}

/// How a participant's round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Hit exactly 21; pays double the bet.
    Natural,
    /// The dealer went over 21; pays one and a half times the bet.
    DealerBust,
    /// Last hand standing under 21; pays one and a half times the bet.
    SoleSurvivor,
    /// Beat the dealer's total at settlement; pays one and a half times the bet.
    BeatDealer,
    /// Tied the dealer; the bet comes back, nothing more.
    Push,
    /// Went over 21; the bet is forfeit.
    Busted,
    /// Fell short of the dealer at settlement; the bet is forfeit.
    Lost,
}

/// One settled line of the round: which seat, how it ended, for how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutEntry {
    /// Index of the participant in the roster the round was run over.
    pub seat: usize,
    /// How the round ended for this seat.
    pub outcome: Outcome,
    /// The bet that was staked (already debited at betting time).
    pub bet: usize,
    /// Amount owed back to the balance, stake included where applicable.
    pub payout: usize,
}

/// Everything the session needs to settle and report a finished round.
#[derive(Debug, Clone)]
pub struct RoundSummary {
    /// Settled outcomes, in the order they were decided.
    pub entries: Vec<PayoutEntry>,
    /// Seats still in the round when it ended.
    pub survivors: Vec<usize>,
}

/// Drives one round over the shared deck and an ordered roster.
///
/// The controller owns the active set (seats still eligible to act or win)
/// and walks the phases in order. Payouts are computed here but applied to
/// balances by the caller.
pub struct Round<'a> {
    deck: &'a mut Deck,
    roster: &'a mut [Participant],
    console: &'a mut dyn Console,
    options: &'a TableOptions,
    rng: &'a mut ChaCha8Rng,
    /// Roster indices still in the round, in seating order.
    active: Vec<usize>,
    phase: RoundPhase,
    entries: Vec<PayoutEntry>,
}

impl<'a> Round<'a> {
    /// Sets up a round over every seat in the roster, in roster order.
    pub fn new(
        deck: &'a mut Deck,
        roster: &'a mut [Participant],
        console: &'a mut dyn Console,
        options: &'a TableOptions,
        rng: &'a mut ChaCha8Rng,
    ) -> Self {
        let active = (0..roster.len()).collect();
        Self {
            deck,
            roster,
            console,
            options,
            rng,
            active,
            phase: RoundPhase::Betting,
            entries: Vec::new(),
        }
    }

    /// The phase the controller is currently in.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Runs the round to completion.
    ///
    /// # Errors
    ///
    /// Fails if the deck runs out of cards or the console fails; both end the
    /// session.
    pub fn run(mut self) -> Result<RoundSummary, GameError> {
        self.collect_bets()?;
        self.deal_initial()?;
        self.reveal_hands()?;
        self.player_turns()?;

        Ok(RoundSummary {
            entries: self.entries,
            survivors: self.active,
        })
    }

    /// Every active participant stakes a bet, strictly in seating order.
    fn collect_bets(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::Betting;
        self.console.say("\nTIME FOR BETS\n")?;

        for index in 0..self.active.len() {
            let seat = self.active[index];
            self.roster[seat].place_bet(self.console, self.options, self.rng)?;
            self.console.pause(self.options.pace);
        }
        Ok(())
    }

    /// Two cards to every active participant with an empty hand.
    ///
    /// Room resets pre-deal hands, so a non-empty hand is skipped rather than
    /// topped up.
    fn deal_initial(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::Dealing;
        self.console.say("\nDEALER HANDS OUT CARDS")?;

        for index in 0..self.active.len() {
            let seat = self.active[index];
            if self.roster[seat].hand().is_empty() {
                for _ in 0..2 {
                    let card = self.deck.draw()?;
                    self.roster[seat].receive_card(card);
                }
            }
        }

        self.console.pause(self.options.pace);
        self.console.say("\nYou can look over your cards...\n")?;
        self.show_hands()?;
        Ok(())
    }

    /// Turns the dealer's and every bot's hand face-up.
    fn reveal_hands(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::Reveal;
        self.console.say("\nOK, everyone, open your cards!\n")?;

        for index in 0..self.active.len() {
            let seat = self.active[index];
            self.roster[seat].reveal(true);
        }
        self.show_hands()?;
        Ok(())
    }

    /// The hit/stand loop: terminal checks, then one decision per active
    /// seat, until the round resolves.
    fn player_turns(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::PlayerTurns;

        loop {
            self.console.say("\nSo, what do we have?..")?;
            self.console.pause(self.options.pace);

            if self.check_terminals()? {
                self.phase = RoundPhase::Done;
                return Ok(());
            }

            self.console.say("\nAnyone want to take one more card?\n")?;
            let mut anyone_hit = false;
            for index in 0..self.active.len() {
                let seat = self.active[index];
                if self.roster[seat].wants_card(self.console)? {
                    let card = self.deck.draw()?;
                    self.roster[seat].receive_card(card);
                    anyone_hit = true;
                }
                self.console.pause(self.options.pace);
            }

            if !anyone_hit {
                self.console.say("\nLet's finish our game\n")?;
                self.settle()?;
                self.phase = RoundPhase::Done;
                return Ok(());
            }

            self.console.say("\nLet's look over our cards!\n")?;
            self.show_hands()?;
        }
    }

    /// Evaluates the terminal conditions, first match governing. Returns
    /// whether the round ended.
    fn check_terminals(&mut self) -> Result<bool, GameError> {
        // Busted non-dealers leave the table before anything else is judged.
        let busted: Vec<usize> = self
            .active
            .iter()
            .copied()
            .filter(|&seat| !self.roster[seat].is_dealer() && self.roster[seat].hand_total() > 21)
            .collect();
        for seat in busted {
            let name = self.roster[seat].name().to_string();
            self.console
                .say(&format!("{name}, you are busted! Hit the road!"))?;
            self.active.retain(|&s| s != seat);
            self.entries.push(PayoutEntry {
                seat,
                outcome: Outcome::Busted,
                bet: self.roster[seat].bet(),
                payout: 0,
            });
            self.console.pause(self.options.pace);
        }

        // A busted dealer pays everyone still at the table.
        let dealer_seat = self
            .active
            .iter()
            .copied()
            .find(|&seat| self.roster[seat].is_dealer());
        if let Some(dealer) = dealer_seat {
            if self.roster[dealer].hand_total() > 21 {
                self.console
                    .say("\nThe DEALER is busted! All players in the game are winners!")?;
                self.active.retain(|&s| s != dealer);
                self.entries.push(PayoutEntry {
                    seat: dealer,
                    outcome: Outcome::Busted,
                    bet: self.roster[dealer].bet(),
                    payout: 0,
                });

                for index in 0..self.active.len() {
                    let seat = self.active[index];
                    let bet = self.roster[seat].bet();
                    let payout = self.half_again(bet);
                    self.console.say(&format!(
                        "{}, congrats! Take your prize {payout}$",
                        self.roster[seat].name()
                    ))?;
                    self.entries.push(PayoutEntry {
                        seat,
                        outcome: Outcome::DealerBust,
                        bet,
                        payout,
                    });
                    self.console.pause(self.options.pace);
                }
                return Ok(true);
            }
        }

        // An exact 21 wins on the spot, even mid-round.
        let naturals: Vec<usize> = self
            .active
            .iter()
            .copied()
            .filter(|&seat| !self.roster[seat].is_dealer() && self.roster[seat].hand_total() == 21)
            .collect();
        if !naturals.is_empty() {
            for seat in naturals {
                let bet = self.roster[seat].bet();
                let payout = self.doubled(bet);
                self.console.say(&format!(
                    "\n{}, you are a winner with 21 points! Your prize is {payout}$!",
                    self.roster[seat].name()
                ))?;
                self.entries.push(PayoutEntry {
                    seat,
                    outcome: Outcome::Natural,
                    bet,
                    payout,
                });
            }
            return Ok(true);
        }

        // Everyone else gone: the last hand under 21 collects.
        if self.active.len() == 1 {
            let seat = self.active[0];
            if self.roster[seat].hand_total() < 21 {
                let bet = self.roster[seat].bet();
                let payout = self.half_again(bet);
                self.console.say(&format!(
                    "\n{}, you are the only winner! Your prize is {payout}$!",
                    self.roster[seat].name()
                ))?;
                self.entries.push(PayoutEntry {
                    seat,
                    outcome: Outcome::SoleSurvivor,
                    bet,
                    payout,
                });
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Nobody hit: the round resolves against current standings.
    fn settle(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::Settlement;

        let dealer_total = self
            .roster
            .iter()
            .find(|participant| participant.is_dealer())
            .map_or(0, Participant::hand_total);

        for index in 0..self.active.len() {
            let seat = self.active[index];
            if self.roster[seat].is_dealer() {
                continue;
            }

            let total = self.roster[seat].hand_total();
            let bet = self.roster[seat].bet();
            let name = self.roster[seat].name().to_string();

            if total < 21 && total > dealer_total {
                let payout = self.half_again(bet);
                self.console.say(&format!(
                    "{name}, you beat the DEALER! Your prize is {payout}$!"
                ))?;
                self.entries.push(PayoutEntry {
                    seat,
                    outcome: Outcome::BeatDealer,
                    bet,
                    payout,
                });
            } else if total == dealer_total {
                self.console.say(&format!(
                    "It's a hit! {name} and the DEALER have the same points ({total}). \
                     {name}, take your bet {bet}$ back."
                ))?;
                self.entries.push(PayoutEntry {
                    seat,
                    outcome: Outcome::Push,
                    bet,
                    payout: bet,
                });
            } else {
                self.entries.push(PayoutEntry {
                    seat,
                    outcome: Outcome::Lost,
                    bet,
                    payout: 0,
                });
            }
            self.console.pause(self.options.pace);
        }
        Ok(())
    }

    /// Prints every active hand, with points for face-up hands.
    fn show_hands(&mut self) -> Result<(), GameError> {
        for index in 0..self.active.len() {
            let seat = self.active[index];
            let participant = &self.roster[seat];
            self.console
                .say(&format!("{} has cards:", participant.name()))?;
            self.console.say(&participant.render_hand())?;
            if participant.is_revealed() {
                self.console
                    .say(&format!("Points: {}\n", participant.hand_total()))?;
            }
            self.console.pause(self.options.pace);
        }
        Ok(())
    }

    /// `round(1.5 × bet)` under the table's rounding mode.
    fn half_again(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let amount = bet as f64 * 1.5;
        round_payout(amount, self.options.rounding)
    }

    /// `2 × bet`, routed through the same rounding seam for symmetry.
    fn doubled(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let amount = bet as f64 * 2.0;
        round_payout(amount, self.options.rounding)
    }
}

/// Rounds a payout according to the rounding mode.
fn round_payout(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}
