use validator::ValidationError;

use crate::config::GameConfig;

pub fn validate_player_count(count: usize, config: &GameConfig) -> Result<(), ValidationError> {
    if count < config.min_players || count > config.max_players {
        return Err(ValidationError::new("invalid_player_count"));
    }
    Ok(())
}

/// Struct-level check for `GameConfig`: the player range must not be empty.
pub fn validate_player_range(config: &GameConfig) -> Result<(), ValidationError> {
    if config.min_players < 1 || config.min_players > config.max_players {
        return Err(ValidationError::new("invalid_player_range"));
    }
    Ok(())
}

/// Takes the first character of the letter box as the guess. Anything after
/// it is ignored; classification of that character is left to the game.
pub fn validate_letter_input(input: &str) -> Result<char, ValidationError> {
    input
        .chars()
        .next()
        .ok_or_else(|| ValidationError::new("empty_letter_guess"))
}

/// Phrase guesses are compared exactly, so only emptiness is rejected here.
pub fn validate_phrase_input(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::new("empty_phrase_guess"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_range() {
        let config = GameConfig::default();
        assert!(validate_player_count(1, &config).is_err());
        assert!(validate_player_count(2, &config).is_ok());
        assert!(validate_player_count(4, &config).is_ok());
        assert!(validate_player_count(5, &config).is_err());
    }

    #[test]
    fn test_player_range() {
        let mut config = GameConfig::default();
        assert!(validate_player_range(&config).is_ok());
        config.min_players = 5;
        config.max_players = 1;
        assert_eq!(validate_player_range(&config).unwrap_err().code, "invalid_player_range");
        config.min_players = 0;
        config.max_players = 4;
        assert!(validate_player_range(&config).is_err());
    }

    #[test]
    fn test_letter_input_takes_first_char() {
        assert_eq!(validate_letter_input("e").unwrap(), 'e');
        assert_eq!(validate_letter_input("xyz").unwrap(), 'x');
        assert_eq!(validate_letter_input(" e").unwrap(), ' ');
        let err = validate_letter_input("").unwrap_err();
        assert_eq!(err.code, "empty_letter_guess");
    }

    #[test]
    fn test_phrase_input() {
        assert!(validate_phrase_input("wheel of fortune").is_ok());
        assert!(validate_phrase_input("").is_err());
    }
}
