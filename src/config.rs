//! Runtime configuration, read from the environment.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundMode {
    /// Terminal bell
    Bell,
    /// Synthesized tones, only with the `audio` feature
    Tones,
    Off,
}

impl SoundMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bell" => Some(SoundMode::Bell),
            "tones" => Some(SoundMode::Tones),
            "off" | "none" => Some(SoundMode::Off),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Log file. Logging is disabled when unset, since the screen belongs to the game.
    pub log_file: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
    pub sound: SoundMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: None,
            log_level: "info".to_string(),
            sound: SoundMode::Bell,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        Config {
            log_file: var("SNAKE_LOG_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            log_level: var("SNAKE_LOG_LEVEL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
            sound: var("SNAKE_SOUND")
                .and_then(|v| SoundMode::parse(&v))
                .unwrap_or(defaults.sound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sound, SoundMode::Bell);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SNAKE_LOG_FILE", "/tmp/snake.log"),
            ("SNAKE_LOG_LEVEL", "debug"),
            ("SNAKE_SOUND", "Off"),
        ]);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/snake.log")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.sound, SoundMode::Off);
    }

    #[test]
    fn test_unknown_sound_falls_back_to_bell() {
        let config = config_from(&[("SNAKE_SOUND", "kazoo"), ("SNAKE_LOG_FILE", "")]);
        assert_eq!(config.sound, SoundMode::Bell);
        assert_eq!(config.log_file, None);
    }
}
