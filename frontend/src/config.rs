use web_sys::window;
use wof_shared::GameConfig;

pub const CONFIG_STORAGE_KEY: &str = "wof_config";

// Spin pacing. The wheel engine runs a few ticks per animation frame so a
// full spin lasts a few seconds at 60fps.
pub const TICKS_PER_FRAME: u32 = 3;
pub const SETTLE_DELAY_MS: u32 = 100;

/// Rules for new sessions: an override stored under `wof_config` in local
/// storage, or the house defaults.
pub fn load_game_config() -> GameConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(raw) => match GameConfig::from_json(&raw) {
            Ok(config) => {
                log::info!("Loaded game config override from local storage");
                config
            }
            Err(e) => {
                log::warn!("Ignoring {} override: {}", CONFIG_STORAGE_KEY, e);
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    }
}
