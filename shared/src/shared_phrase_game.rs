use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::constants::{MASK_CHAR, PHRASES, VOWELS};

static HIDDEN_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new("[a-z]").expect("hidden letter pattern is valid"));

/// Classification of a proposed letter guess, checked in this order:
/// already found, not a letter, vowel cost, accept.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    AlreadyFound,
    NotALetter,
    VowelNeedsPayment,
    VowelAccepted,
    ConsonantAccepted,
}

impl GuessOutcome {
    /// Whether the guess may go on to the reveal step.
    pub fn is_accepted(self) -> bool {
        matches!(self, GuessOutcome::VowelAccepted | GuessOutcome::ConsonantAccepted)
    }
}

/// Players, money and the hidden phrase for one session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameState {
    players: Vec<i32>,
    current_player: usize,
    secret_phrase: String,
    revealed_phrase: Vec<char>,
    guess_budget: i32,
    letters_found: usize,
    vowel_cost: i32,
    reward_per_letter: i32,
    bonus_per_guess: i32,
}

/// What the board shows: everything except the secret, which is only
/// included once the phrase has been solved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PublicPhraseGame {
    pub current_player: usize,
    pub balances: Vec<i32>,
    pub revealed_phrase: String,
    pub guess_budget: i32,
    pub solved: bool,
    pub solution: Option<String>,
}

/// Replaces every lowercase letter with the mask character.
pub fn mask_phrase(phrase: &str) -> String {
    HIDDEN_LETTER
        .replace_all(phrase, MASK_CHAR.to_string().as_str())
        .into_owned()
}

impl GameState {
    /// Starts a session on a phrase drawn uniformly from the configured list.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let phrase = config
            .phrases
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| PHRASES[0].to_string());
        Self::with_phrase(config, &phrase)
    }

    pub fn with_phrase(config: &GameConfig, phrase: &str) -> Self {
        Self {
            players: Vec::new(),
            current_player: 0,
            secret_phrase: phrase.to_string(),
            revealed_phrase: mask_phrase(phrase).chars().collect(),
            guess_budget: config.starting_guess_budget,
            letters_found: 0,
            vowel_cost: config.vowel_cost,
            reward_per_letter: config.reward_per_letter,
            bonus_per_guess: config.bonus_per_guess,
        }
    }

    /// Sizes the player table and zeroes every balance. Must run before any
    /// money operation.
    pub fn configure(&mut self, player_count: usize) {
        self.players = vec![0; player_count];
        if self.current_player >= player_count {
            self.current_player = 0;
        }
    }

    pub fn pick_random_starting_player<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.players.is_empty() {
            self.current_player = rng.gen_range(0..self.players.len());
        }
    }

    pub fn advance_turn(&mut self) {
        if self.display_current_player() >= self.players.len() {
            self.current_player = 0;
        } else {
            self.current_player += 1;
        }
        log::debug!("Turn passes to player {}", self.display_current_player());
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// 1-based player number for display.
    pub fn display_current_player(&self) -> usize {
        self.current_player + 1
    }

    pub fn balances(&self) -> &[i32] {
        &self.players
    }

    pub fn current_player_balance(&self) -> i32 {
        self.players.get(self.current_player).copied().unwrap_or(0)
    }

    pub fn add_to_current_player(&mut self, amount: i32) {
        if let Some(balance) = self.players.get_mut(self.current_player) {
            *balance += amount;
        }
    }

    pub fn bankrupt_current_player(&mut self) {
        self.add_to_current_player(-self.current_player_balance());
    }

    /// Classifies `letter` against `target`. In normal play `target` is the
    /// revealed phrase, so a letter that is only hidden is not "found".
    /// Accepting a vowel charges the vowel cost here, before any reveal.
    pub fn evaluate_letter_guess(&mut self, letter: char, target: &str) -> GuessOutcome {
        if self.scan_and_reveal(letter, target) >= 1 {
            GuessOutcome::AlreadyFound
        } else if !letter.is_alphabetic() {
            GuessOutcome::NotALetter
        } else if VOWELS.contains(&letter) {
            if self.current_player_balance() >= self.vowel_cost {
                self.add_to_current_player(-self.vowel_cost);
                log::debug!(
                    "Player {} bought vowel '{}' for {}",
                    self.display_current_player(),
                    letter,
                    self.vowel_cost
                );
                GuessOutcome::VowelAccepted
            } else {
                GuessOutcome::VowelNeedsPayment
            }
        } else {
            GuessOutcome::ConsonantAccepted
        }
    }

    /// Uncovers every position of `target` holding `letter` and pays out for
    /// them. Returns the number of matching positions.
    pub fn reveal_letter(&mut self, letter: char, target: &str) -> usize {
        let found = self.scan_and_reveal(letter, target);
        self.letters_found = found;

        if found >= 1 {
            self.add_to_current_player(self.reward_for(found));
            // Spent on correct finds, not misses.
            if self.guess_budget > 0 {
                self.guess_budget -= 1;
            }
            log::debug!(
                "'{}' found {} time(s), player {} now has {}",
                letter,
                found,
                self.display_current_player(),
                self.current_player_balance()
            );
        }
        found
    }

    fn scan_and_reveal(&mut self, letter: char, target: &str) -> usize {
        let mut found = 0;
        for (shown, actual) in self.revealed_phrase.iter_mut().zip(target.chars()) {
            if actual == letter {
                *shown = letter;
                found += 1;
            }
        }
        found
    }

    pub fn reward_for(&self, letters_found: usize) -> i32 {
        self.reward_per_letter * letters_found as i32
    }

    /// Match count of the most recent reveal.
    pub fn letters_found(&self) -> usize {
        self.letters_found
    }

    pub fn compare_phrases(a: &str, b: &str) -> bool {
        a == b
    }

    pub fn is_solved(&self) -> bool {
        Self::compare_phrases(&self.revealed_phrase(), &self.secret_phrase)
    }

    pub fn secret_phrase(&self) -> &str {
        &self.secret_phrase
    }

    pub fn revealed_phrase(&self) -> String {
        self.revealed_phrase.iter().collect()
    }

    pub fn guess_budget(&self) -> i32 {
        self.guess_budget
    }

    pub fn vowel_cost(&self) -> i32 {
        self.vowel_cost
    }

    pub fn bonus_money(&self) -> i32 {
        self.guess_budget * self.bonus_per_guess
    }

    pub fn total_prize(&self) -> i32 {
        self.current_player_balance() + self.bonus_money()
    }

    pub fn to_public(&self) -> PublicPhraseGame {
        let solved = self.is_solved();
        PublicPhraseGame {
            current_player: self.current_player,
            balances: self.players.clone(),
            revealed_phrase: self.revealed_phrase(),
            guess_budget: self.guess_budget,
            solved,
            solution: if solved { Some(self.secret_phrase.clone()) } else { None },
        }
    }
}
