//! Turn and guess flow for one table of players.
//!
//! A [`Session`] pairs a [`GameState`] with the [`Phase`] the table is in.
//! The presentation layer feeds it [`Event`]s (button presses, the sector the
//! wheel stopped on) and renders the [`Effect`]s each transition reports.
//! The wheel itself is not driven from here: the caller spins a
//! [`crate::shared_wheel_game::SpinEngine`] and reports `SpinLanded`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GameConfig;
use crate::shared_phrase_game::{GameState, GuessOutcome};
use crate::shared_wheel_game::{sector_outcome, WheelSector};
use crate::validation::validate_player_count;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ChoosingPlayers,
    AwaitingSpin,
    Spinning,
    AwaitingLetterGuess,
    LetterCorrect,
    AwaitingPhraseGuess,
    TurnOver,
    Won,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    StartGame { players: usize },
    BeginSpin,
    SpinLanded { sector: usize },
    GuessLetter(char),
    RequestPhraseGuess,
    CancelPhraseGuess,
    GuessPhrase(String),
    Continue,
    NewGame,
}

impl Phase {
    /// Phases in which `BeginSpin` is accepted.
    pub fn accepts_spin(self) -> bool {
        matches!(self, Phase::AwaitingSpin | Phase::LetterCorrect)
    }
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::StartGame { .. } => "StartGame",
            Event::BeginSpin => "BeginSpin",
            Event::SpinLanded { .. } => "SpinLanded",
            Event::GuessLetter(_) => "GuessLetter",
            Event::RequestPhraseGuess => "RequestPhraseGuess",
            Event::CancelPhraseGuess => "CancelPhraseGuess",
            Event::GuessPhrase(_) => "GuessPhrase",
            Event::Continue => "Continue",
            Event::NewGame => "NewGame",
        }
    }
}

/// Something a transition did. Player numbers are 1-based.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Effect {
    StartingPlayer { player: usize },
    PrizeAwarded { player: usize, amount: i32 },
    Bankrupt { player: usize },
    TurnSkipped { player: usize },
    TurnPassed { next_player: usize },
    GuessRejected { letter: char, outcome: GuessOutcome },
    VowelPurchased { letter: char, cost: i32 },
    LettersRevealed { letter: char, count: usize, reward: i32 },
    LetterMissed { letter: char },
    PhraseMissed { guess: String },
    GameWon { player: usize, money: i32, bonus: i32, total: i32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("{event} is not allowed while {phase:?}")]
    UnexpectedEvent { phase: Phase, event: &'static str },
    #[error("{0} players is outside the allowed range")]
    InvalidPlayerCount(usize),
    #[error("sector {0} is not on the wheel")]
    UnknownSector(usize),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Session {
    config: GameConfig,
    game: GameState,
    phase: Phase,
}

/// `(session, event) -> (session, effects)`. The session is consumed even
/// when the event is rejected; [`Session::apply`] keeps it.
pub fn transition<R: Rng + ?Sized>(
    session: Session,
    event: Event,
    rng: &mut R,
) -> Result<(Session, Vec<Effect>), FlowError> {
    let mut next = session;
    let effects = next.apply(event, rng)?;
    Ok((next, effects))
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let game = GameState::new(&config, rng);
        Self { config, game, phase: Phase::ChoosingPlayers }
    }

    pub fn with_phrase(config: GameConfig, phrase: &str) -> Self {
        let game = GameState::with_phrase(&config, phrase);
        Self { config, game, phase: Phase::ChoosingPlayers }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Applies `event` in place. A rejected event leaves the session as it was.
    pub fn apply<R: Rng + ?Sized>(&mut self, event: Event, rng: &mut R) -> Result<Vec<Effect>, FlowError> {
        let mut effects = Vec::new();

        match (self.phase, event) {
            (Phase::ChoosingPlayers, Event::StartGame { players }) => {
                validate_player_count(players, &self.config)
                    .map_err(|_| FlowError::InvalidPlayerCount(players))?;
                self.game.configure(players);
                self.game.pick_random_starting_player(rng);
                log::info!(
                    "New game: {} players, player {} starts",
                    self.game.player_count(),
                    self.game.display_current_player()
                );
                effects.push(Effect::StartingPlayer { player: self.game.display_current_player() });
                self.phase = Phase::AwaitingSpin;
            }
            (Phase::AwaitingSpin | Phase::LetterCorrect, Event::BeginSpin) => {
                self.phase = Phase::Spinning;
            }
            (Phase::Spinning, Event::SpinLanded { sector }) => {
                let outcome = sector_outcome(sector).ok_or(FlowError::UnknownSector(sector))?;
                let player = self.game.display_current_player();
                match outcome {
                    WheelSector::Cash(amount) => {
                        self.game.add_to_current_player(amount);
                        effects.push(Effect::PrizeAwarded { player, amount });
                        self.phase = Phase::AwaitingLetterGuess;
                    }
                    WheelSector::Bankrupt => {
                        self.game.bankrupt_current_player();
                        effects.push(Effect::Bankrupt { player });
                        self.pass_turn(&mut effects);
                    }
                    WheelSector::LoseTurn => {
                        effects.push(Effect::TurnSkipped { player });
                        self.pass_turn(&mut effects);
                    }
                }
            }
            (Phase::AwaitingLetterGuess, Event::GuessLetter(letter)) => {
                self.guess_letter(letter, &mut effects);
            }
            (Phase::LetterCorrect, Event::RequestPhraseGuess) => {
                self.phase = Phase::AwaitingPhraseGuess;
            }
            (Phase::AwaitingPhraseGuess, Event::CancelPhraseGuess) => {
                self.phase = Phase::LetterCorrect;
            }
            (Phase::AwaitingPhraseGuess, Event::GuessPhrase(guess)) => {
                if GameState::compare_phrases(&guess, self.game.secret_phrase()) {
                    self.win(&mut effects);
                } else {
                    effects.push(Effect::PhraseMissed { guess });
                    self.pass_turn(&mut effects);
                }
            }
            (Phase::TurnOver, Event::Continue) => {
                self.phase = Phase::AwaitingSpin;
            }
            (Phase::Won, Event::NewGame) => {
                self.game = GameState::new(&self.config, rng);
                self.phase = Phase::ChoosingPlayers;
            }
            (phase, event) => {
                return Err(FlowError::UnexpectedEvent { phase, event: event.name() });
            }
        }

        Ok(effects)
    }

    fn guess_letter(&mut self, letter: char, effects: &mut Vec<Effect>) {
        let shown = self.game.revealed_phrase();
        let outcome = self.game.evaluate_letter_guess(letter, &shown);
        if !outcome.is_accepted() {
            effects.push(Effect::GuessRejected { letter, outcome });
            return;
        }
        if outcome == GuessOutcome::VowelAccepted {
            effects.push(Effect::VowelPurchased { letter, cost: self.game.vowel_cost() });
        }

        let secret = self.game.secret_phrase().to_string();
        let count = self.game.reveal_letter(letter, &secret);
        if count == 0 {
            effects.push(Effect::LetterMissed { letter });
            self.pass_turn(effects);
            return;
        }

        effects.push(Effect::LettersRevealed { letter, count, reward: self.game.reward_for(count) });
        if self.game.is_solved() {
            self.win(effects);
        } else {
            self.phase = Phase::LetterCorrect;
        }
    }

    fn pass_turn(&mut self, effects: &mut Vec<Effect>) {
        self.game.advance_turn();
        effects.push(Effect::TurnPassed { next_player: self.game.display_current_player() });
        self.phase = Phase::TurnOver;
    }

    fn win(&mut self, effects: &mut Vec<Effect>) {
        let player = self.game.display_current_player();
        log::info!("Player {} solved \"{}\"", player, self.game.secret_phrase());
        effects.push(Effect::GameWon {
            player,
            money: self.game.current_player_balance(),
            bonus: self.game.bonus_money(),
            total: self.game.total_prize(),
        });
        self.phase = Phase::Won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn started(phrase: &str, players: usize) -> (Session, StdRng) {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = Session::with_phrase(GameConfig::default(), phrase);
        session.apply(Event::StartGame { players }, &mut rng).unwrap();
        (session, rng)
    }

    fn land(session: &mut Session, rng: &mut StdRng, sector: usize) -> Vec<Effect> {
        session.apply(Event::BeginSpin, rng).unwrap();
        session.apply(Event::SpinLanded { sector }, rng).unwrap()
    }

    #[test]
    fn test_start_game() {
        let (session, _) = started("wheel of fortune", 3);
        assert_eq!(session.phase(), Phase::AwaitingSpin);
        assert_eq!(session.game().balances(), &[0, 0, 0]);
    }

    #[test]
    fn test_start_game_rejects_bad_player_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = Session::with_phrase(GameConfig::default(), "wheel of fortune");
        let before = session.clone();
        assert_eq!(
            session.apply(Event::StartGame { players: 5 }, &mut rng),
            Err(FlowError::InvalidPlayerCount(5))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_unexpected_event_leaves_session_untouched() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        let before = session.clone();
        let err = session.apply(Event::GuessLetter('w'), &mut rng).unwrap_err();
        assert_eq!(err, FlowError::UnexpectedEvent { phase: Phase::AwaitingSpin, event: "GuessLetter" });
        assert_eq!(session, before);
    }

    #[test]
    fn test_second_spin_rejected_while_spinning() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        assert!(session.phase().accepts_spin());
        session.apply(Event::BeginSpin, &mut rng).unwrap();
        assert!(!session.phase().accepts_spin());
        let before = session.clone();
        assert_eq!(
            session.apply(Event::BeginSpin, &mut rng),
            Err(FlowError::UnexpectedEvent { phase: Phase::Spinning, event: "BeginSpin" })
        );
        assert_eq!(session, before);

        session.apply(Event::SpinLanded { sector: 0 }, &mut rng).unwrap();
        assert!(matches!(
            session.apply(Event::SpinLanded { sector: 3 }, &mut rng),
            Err(FlowError::UnexpectedEvent { .. })
        ));
        assert_eq!(session.game().current_player_balance(), 200);
    }

    #[test]
    fn test_unknown_sector() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        session.apply(Event::BeginSpin, &mut rng).unwrap();
        assert_eq!(
            session.apply(Event::SpinLanded { sector: 8 }, &mut rng),
            Err(FlowError::UnknownSector(8))
        );
        assert_eq!(session.phase(), Phase::Spinning);
    }

    #[test]
    fn test_cash_sector_awaits_letter() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        let player = session.game().display_current_player();
        let effects = land(&mut session, &mut rng, 0);
        assert_eq!(effects, vec![Effect::PrizeAwarded { player, amount: 200 }]);
        assert_eq!(session.game().current_player_balance(), 200);
        assert_eq!(session.phase(), Phase::AwaitingLetterGuess);
    }

    #[test]
    fn test_bankrupt_sector_zeroes_and_passes_turn() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        let first = session.game().current_player();
        land(&mut session, &mut rng, 4);
        session.apply(Event::GuessLetter('w'), &mut rng).unwrap();
        land(&mut session, &mut rng, 1);
        assert_eq!(session.game().balances()[first], 0);
        assert_ne!(session.game().current_player(), first);
        assert_eq!(session.phase(), Phase::TurnOver);

        session.apply(Event::Continue, &mut rng).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingSpin);
    }

    #[test]
    fn test_lose_turn_keeps_money() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        let first = session.game().current_player();
        land(&mut session, &mut rng, 3);
        session.apply(Event::GuessLetter('f'), &mut rng).unwrap();
        let effects = land(&mut session, &mut rng, 5);
        assert_eq!(effects[0], Effect::TurnSkipped { player: first + 1 });
        assert_eq!(session.game().balances()[first], 300);
        assert_eq!(session.phase(), Phase::TurnOver);
    }

    #[test]
    fn test_rejected_guess_stays_on_letter_screen() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        land(&mut session, &mut rng, 2);
        let effects = session.apply(Event::GuessLetter('e'), &mut rng).unwrap();
        assert_eq!(
            effects,
            vec![Effect::GuessRejected { letter: 'e', outcome: GuessOutcome::VowelNeedsPayment }]
        );
        assert_eq!(session.phase(), Phase::AwaitingLetterGuess);

        session.apply(Event::GuessLetter('3'), &mut rng).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingLetterGuess);
    }

    #[test]
    fn test_missed_letter_passes_turn() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        let first = session.game().current_player();
        land(&mut session, &mut rng, 7);
        let effects = session.apply(Event::GuessLetter('z'), &mut rng).unwrap();
        assert_eq!(effects[0], Effect::LetterMissed { letter: 'z' });
        assert_ne!(session.game().current_player(), first);
        assert_eq!(session.phase(), Phase::TurnOver);
    }

    #[test]
    fn test_vowel_purchase_then_reveal() {
        let (mut session, mut rng) = started("early bird gets the worm", 2);
        land(&mut session, &mut rng, 0);
        let effects = session.apply(Event::GuessLetter('e'), &mut rng).unwrap();
        assert_eq!(
            effects,
            vec![
                Effect::VowelPurchased { letter: 'e', cost: 200 },
                Effect::LettersRevealed { letter: 'e', count: 3, reward: 300 },
            ]
        );
        assert_eq!(session.game().current_player_balance(), 300);
        assert_eq!(session.phase(), Phase::LetterCorrect);
    }

    #[test]
    fn test_phrase_guess_back_and_miss() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        let first = session.game().current_player();
        land(&mut session, &mut rng, 0);
        session.apply(Event::GuessLetter('w'), &mut rng).unwrap();
        session.apply(Event::RequestPhraseGuess, &mut rng).unwrap();
        session.apply(Event::CancelPhraseGuess, &mut rng).unwrap();
        assert_eq!(session.phase(), Phase::LetterCorrect);

        session.apply(Event::RequestPhraseGuess, &mut rng).unwrap();
        let effects = session
            .apply(Event::GuessPhrase("Wheel of fortune".to_string()), &mut rng)
            .unwrap();
        assert_eq!(effects[0], Effect::PhraseMissed { guess: "Wheel of fortune".to_string() });
        assert_ne!(session.game().current_player(), first);
        assert_eq!(session.phase(), Phase::TurnOver);
    }

    #[test]
    fn test_phrase_guess_wins() {
        let (mut session, mut rng) = started("wheel of fortune", 2);
        land(&mut session, &mut rng, 6);
        session.apply(Event::GuessLetter('h'), &mut rng).unwrap();
        session.apply(Event::RequestPhraseGuess, &mut rng).unwrap();
        let effects = session
            .apply(Event::GuessPhrase("wheel of fortune".to_string()), &mut rng)
            .unwrap();
        let player = session.game().display_current_player();
        assert_eq!(
            effects,
            vec![Effect::GameWon { player, money: 150, bonus: 19 * 250, total: 150 + 19 * 250 }]
        );
        assert_eq!(session.phase(), Phase::Won);
    }

    #[test]
    fn test_completing_the_board_wins() {
        let (mut session, mut rng) = started("knowledge is power", 2);
        for letter in ['k', 'n', 'w', 'l', 'd', 'g', 's', 'p', 'r'] {
            land(&mut session, &mut rng, 0);
            session.apply(Event::GuessLetter(letter), &mut rng).unwrap();
            assert_eq!(session.phase(), Phase::LetterCorrect);
        }
        for letter in ['o', 'e', 'i'] {
            land(&mut session, &mut rng, 0);
            session.apply(Event::GuessLetter(letter), &mut rng).unwrap();
        }
        assert!(session.game().is_solved());
        assert_eq!(session.phase(), Phase::Won);

        let (fresh, effects) = transition(session, Event::NewGame, &mut rng).unwrap();
        assert!(effects.is_empty());
        assert_eq!(fresh.phase(), Phase::ChoosingPlayers);
        assert!(!fresh.game().is_solved());
    }
}
