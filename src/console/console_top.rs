//! Line-oriented console front-end and command loop.
//!
//! Reads commands from stdin, relays moves to the rules engine, and prints
//! outcomes and boards. The loop is single-threaded, so moves reach the
//! engine strictly in arrival order.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::GameRules;
use crate::engines::rules_engine::RulesEngine;
use crate::errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::long_algebraic::{move_request_to_text, parse_move_text};
use crate::utils::render_game_state::{render_game_state, render_status};

const HELP: &str = "commands: new | position startpos | position fen <fen> | move <move> | <move> \
| random | board | fen | state | setoption name <name> value <value> | help | quit";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config);

    writeln!(stdout, "{} rules engine ready; type 'help'", console.engine.name())?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    engine: RulesEngine,
    random: RandomEngine,
    config: SessionConfig,
}

impl ConsoleState {
    pub fn new(config: SessionConfig) -> Self {
        let random = match config.seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::new(),
        };
        let mut console = Self {
            engine: RulesEngine::new(),
            random,
            config,
        };
        if let Err(err) = console.reset() {
            warn!(%err, "configured start position rejected, using standard layout");
        }
        console
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Handle one line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP}")?,
            "new" => match self.reset() {
                Ok(()) => writeln!(out, "{}", render_status(self.engine.state()))?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "position" => match self.handle_position(rest) {
                Ok(()) => writeln!(out, "{}", render_status(self.engine.state()))?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "move" => self.handle_move(rest, out)?,
            "random" => self.handle_random(out)?,
            "board" => writeln!(out, "{}", render_game_state(self.engine.state()))?,
            "fen" => writeln!(out, "{}", self.engine.state().get_fen())?,
            "state" => writeln!(out, "{}", render_status(self.engine.state()))?,
            "setoption" => {
                if let Err(err) = self.handle_setoption(rest) {
                    writeln!(out, "error: {err}")?;
                }
            }
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn reset(&mut self) -> Result<(), ChessErrors> {
        match &self.config.start_fen {
            Some(fen) => self.engine = RulesEngine::from_fen(fen)?,
            None => self.engine.new_game(),
        }
        Ok(())
    }

    fn handle_position(&mut self, args: &str) -> Result<(), ChessErrors> {
        if args == "startpos" {
            self.engine.new_game();
            return Ok(());
        }
        match args.split_once(char::is_whitespace) {
            Some(("fen", fen)) => {
                self.engine = RulesEngine::from_fen(fen.trim())?;
                info!(fen = fen.trim(), "position loaded");
                Ok(())
            }
            _ => Err(ChessErrors::InvalidFen(args.to_owned())),
        }
    }

    fn handle_setoption(&mut self, args: &str) -> Result<(), ChessErrors> {
        let malformed = || ChessErrors::UnknownOption(args.to_owned());
        let rest = args.strip_prefix("name").ok_or_else(malformed)?;
        let (name, value) = rest.split_once(" value ").ok_or_else(malformed)?;

        self.config.set_option(name.trim(), value.trim())?;
        if name.trim().eq_ignore_ascii_case("seed") {
            self.random = match self.config.seed {
                Some(seed) => RandomEngine::seeded(seed),
                None => RandomEngine::new(),
            };
        }
        Ok(())
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let mover = self.engine.state().next_player();
        let requests = match parse_move_text(text, mover) {
            Ok(requests) => requests,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
        };

        if let Some(rejection) = rehearse_requests(self.engine.state(), &requests) {
            writeln!(out, "{rejection}")?;
            return Ok(());
        }

        for request in requests {
            let outcome = self.engine.submit_move(request);
            writeln!(out, "{} -> {:?}", move_request_to_text(request), outcome)?;
        }

        self.after_accepted_move(out)
    }

    fn handle_random(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(request) = self.random.choose_move(self.engine.state()) else {
            writeln!(out, "no accepted move available")?;
            return Ok(());
        };

        let outcome = self.engine.submit_move(request);
        writeln!(out, "{} -> {:?}", move_request_to_text(request), outcome)?;
        self.after_accepted_move(out)
    }

    fn after_accepted_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.config.render_after_move {
            writeln!(out, "{}", render_game_state(self.engine.state()))?;
        }
        Ok(())
    }
}

/// Play `requests` on a scratch copy. A multi-request move only stands when the
/// first request opens a promotion. Returns the line to print on rejection.
fn rehearse_requests(game_state: &GameState, requests: &[MoveRequest]) -> Option<String> {
    let mut scratch = game_state.clone();
    for (idx, &request) in requests.iter().enumerate() {
        let outcome = apply_move(&mut scratch, request);
        if !outcome.is_accepted() {
            return Some(format!("{} -> {:?}", move_request_to_text(request), outcome));
        }
        if idx == 0 && requests.len() > 1 && outcome != MoveOutcome::PromotionRequired {
            return Some(format!(
                "error: {} does not promote a pawn",
                move_request_to_text(request)
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::ConsoleState;
    use crate::config::SessionConfig;
    use crate::game_state::chess_types::*;

    fn quiet_console() -> ConsoleState {
        ConsoleState::new(SessionConfig {
            render_after_move: false,
            seed: Some(3),
            ..SessionConfig::default()
        })
    }

    fn run(console: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::new();
        console
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("console output is UTF-8")
    }

    #[test]
    fn moves_in_both_notations() {
        let mut console = quiet_console();
        assert_eq!(run(&mut console, "move e2e4"), "e2e4 -> Applied(DoublePawnPush)\n");
        assert_eq!(run(&mut console, "0-6-3 0-4-3"), "d7d5 -> Applied(DoublePawnPush)\n");
        assert_eq!(run(&mut console, "e4d5"), "e4d5 -> Applied(Capture)\n");
        assert_eq!(run(&mut console, "d5d6"), "d5d6 -> RejectedWrongTurn\n");
    }

    #[test]
    fn promotion_suffix_submits_both_requests() {
        let mut console = quiet_console();
        run(&mut console, "position fen 4k3/P7/8/8/8/8/8/4K3 w - -");
        let output = run(&mut console, "a7a8n");
        assert_eq!(output, "a7a8 -> PromotionRequired\n1-0-1 0-7-0 -> Applied(Promotion)\n");

        let a8 = Position::main(7, 0).expect("in range");
        assert_eq!(
            console.engine().state().piece_at(a8),
            Some(Piece::new(Color::Light, PieceKind::Knight))
        );
    }

    #[test]
    fn promotion_suffix_on_a_plain_move_changes_nothing() {
        let mut console = quiet_console();
        let before = console.engine().state().clone();
        assert_eq!(run(&mut console, "e2e4q"), "error: e2e4 does not promote a pawn\n");
        assert_eq!(console.engine().state(), &before);
        assert_eq!(run(&mut console, "e2e4"), "e2e4 -> Applied(DoublePawnPush)\n");
    }

    #[test]
    fn rejected_promotion_leaves_the_pawn_in_place() {
        let mut console = quiet_console();
        run(&mut console, "position fen 4k3/P7/8/8/8/8/8/4K3 w - -");
        let before = console.engine().state().clone();
        assert_eq!(run(&mut console, "a7b8q"), "a7b8 -> RejectedIllegal\n");
        assert_eq!(console.engine().state(), &before);
        assert!(!console.engine().state().is_time_to_promote());
    }

    #[test]
    fn position_needs_an_exact_keyword() {
        let mut console = quiet_console();
        let before = console.engine().state().clone();
        let output = run(&mut console, "position fenXYZ 4k3/8/8/8/8/8/8/4K3 w - -");
        assert!(output.starts_with("error: invalid FEN"), "unexpected output: {output}");
        assert_eq!(console.engine().state(), &before);

        let output = run(&mut console, "position fen 4k3/8/8/8/8/8/8/4K3 w - -");
        assert!(!output.starts_with("error"), "unexpected output: {output}");
        assert_eq!(console.engine().state().occupied_squares().count(), 2);
    }

    #[test]
    fn random_command_plays_an_accepted_move() {
        let mut console = quiet_console();
        let output = run(&mut console, "random");
        assert!(output.contains("-> Applied("), "unexpected output: {output}");
        assert_eq!(console.engine().state().next_player(), Color::Dark);
    }

    #[test]
    fn setoption_and_errors() {
        let mut console = quiet_console();
        assert_eq!(run(&mut console, "setoption name Render value on"), "");
        assert!(run(&mut console, "setoption name Bogus value 1").starts_with("error: unknown option"));
        assert!(run(&mut console, "position fen nonsense").starts_with("error: invalid FEN"));
        assert!(run(&mut console, "zz").starts_with("error:"));
        assert_eq!(run(&mut console, "fen"), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -\n");
    }

    #[test]
    fn quit_ends_the_session() {
        let mut console = quiet_console();
        let mut out = Vec::new();
        assert!(console.handle_command("quit", &mut out).expect("no io error"));
        assert!(!console.handle_command("", &mut out).expect("no io error"));
    }
}
