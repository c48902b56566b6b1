pub mod config;
pub mod constants;
pub mod game_flow;
pub mod shared_phrase_game;
pub mod shared_wheel_game;
pub mod validation;

pub use config::{ConfigError, GameConfig};
pub use game_flow::{transition, Effect, Event, FlowError, Phase, Session};
pub use shared_phrase_game::{GameState, GuessOutcome, PublicPhraseGame};
pub use shared_wheel_game::{sector_outcome, SpinEngine, WheelSector};
