pub const VOWEL_COST: i32 = 200;
pub const STARTING_GUESS_BUDGET: i32 = 20;
pub const BONUS_PER_GUESS: i32 = 250;
pub const REWARD_PER_LETTER: i32 = 100;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
pub const MASK_CHAR: char = '-';

pub const PHRASES: [&str; 6] = [
    "wheel of fortune",
    "kill two birds with one stone",
    "its raining cats and dogs",
    "knowledge is power",
    "early bird gets the worm",
    "its not rocket science",
];

pub const NOT_A_LETTER_MESSAGE: &str = "Guess must be a letter";
pub const NOT_ENOUGH_MONEY_MESSAGE: &str = "Not enough money!";
pub const EMPTY_GUESS_MESSAGE: &str = "Type a guess first";
