//! Session configuration for the console front-end.
//!
//! Defaults can be overridden through environment variables at start-up and
//! through `setoption` while running.

use crate::errors::ChessErrors;
use crate::game_state::game_state::GameState;

pub const ENV_START_FEN: &str = "CHESS_RULES_START_FEN";
pub const ENV_SEED: &str = "CHESS_RULES_SEED";
pub const ENV_RENDER: &str = "CHESS_RULES_RENDER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Position used by `new`; `None` means the standard layout.
    pub start_fen: Option<String>,
    /// Seed for the random player; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Print the board after every accepted move.
    pub render_after_move: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_fen: None,
            seed: None,
            render_after_move: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ChessErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChessErrors> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_START_FEN) {
            config.set_option("StartFen", &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.set_option("Seed", &value)?;
        }
        if let Some(value) = lookup(ENV_RENDER) {
            config.set_option("Render", &value)?;
        }
        Ok(config)
    }

    /// Apply one named option. Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.to_ascii_lowercase().as_str() {
            "startfen" => {
                let value = value.trim();
                if value.is_empty() || value.eq_ignore_ascii_case("startpos") {
                    self.start_fen = None;
                } else {
                    GameState::from_fen(value)?;
                    self.start_fen = Some(value.to_owned());
                }
            }
            "seed" => {
                self.seed = match value.trim() {
                    "" | "none" => None,
                    text => Some(text.parse::<u64>().map_err(|_| invalid())?),
                };
            }
            "render" => {
                self.render_after_move = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(ChessErrors::UnknownOption(name.to_owned())),
        }

        Ok(())
    }
}
