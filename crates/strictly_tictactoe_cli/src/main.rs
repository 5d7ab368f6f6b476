//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Renders the board, reads moves from stdin and drives the engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, ModeArg};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use strictly_tictactoe::{
    Difficulty, GameMode, GameOutcome, MoveOutcome, Position, Session, SessionConfig, Side,
    UndoError,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(mode = %config.mode(), "Starting game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&config, stdin.lock(), &mut stdout)
}

/// Merges the config file with command-line overrides.
#[instrument(skip(cli))]
fn resolve_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    let difficulty = cli
        .difficulty
        .or_else(|| config.mode().difficulty())
        .unwrap_or_default();
    let mode = match (cli.mode, cli.difficulty) {
        (Some(ModeArg::TwoPlayer), _) => Some(GameMode::TwoPlayer),
        (Some(ModeArg::VsAi), _) | (None, Some(_)) => Some(GameMode::VsAi(difficulty)),
        (None, None) => None,
    };
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }
    if let Some(delay) = cli.ai_delay_ms {
        config = config.with_ai_delay_ms(delay);
    }

    debug!(?config, "Resolved configuration");
    Ok(config)
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Position),
    Undo,
    Restart,
    TwoPlayer,
    VsAi(Difficulty),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let command = match words.next()?.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "reset" | "restart" | "r" => Command::Restart,
            "2p" | "two" => Command::TwoPlayer,
            "ai" => {
                let difficulty = match words.next() {
                    Some(word) => word.parse().ok()?,
                    None => Difficulty::default(),
                };
                Command::VsAi(difficulty)
            }
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Position::from_label_or_number(line).map(Command::Play),
        };
        Some(command)
    }
}

const HELP: &str = "\
Commands:
  0-8 or a name (\"center\", \"top left\")  place your mark
  undo                                    take back a move
  reset                                   start over (score is kept)
  2p                                      two-player mode
  ai [easy|medium|hard]                   play the computer
  quit                                    leave";

/// Reads commands from `input` until it ends or the player quits.
#[instrument(skip_all)]
fn run(config: &SessionConfig, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut session = Session::from_config(config);
    let delay = Duration::from_millis(*config.ai_delay_ms());

    writeln!(out, "Tic-tac-toe, {}. Type \"help\" for commands.", session.mode())?;
    render(&session, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse(&line) else {
            writeln!(out, "Unknown command {:?}. Type \"help\".", line.trim())?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Play(position) => match session.apply_move(position.to_index()) {
                Ok(result) => {
                    announce(&result, out)?;
                    if session.is_ai_turn() {
                        render(&session, out)?;
                        writeln!(out, "Computer is thinking...")?;
                        out.flush()?;
                        std::thread::sleep(delay);
                        if let Some(reply) = session.apply_ai_move()? {
                            writeln!(out, "Computer plays {}", reply.applied())?;
                            announce(&reply, out)?;
                        }
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Undo => undo(&mut session, out)?,
            Command::Restart => session.restart(),
            Command::TwoPlayer => session.reset(GameMode::TwoPlayer),
            Command::VsAi(difficulty) => session.reset(GameMode::VsAi(difficulty)),
        }
        render(&session, out)?;
    }

    writeln!(out, "Final score: {}", session.score())?;
    Ok(())
}

/// Undoes one move, or two against the computer so the human is to move.
fn undo(session: &mut Session, out: &mut impl Write) -> Result<()> {
    match session.undo() {
        Ok(()) => {
            if session.is_ai_turn() {
                if let Err(UndoError::NothingToUndo) = session.undo() {
                    // Only the human's opening and the reply remain; let the
                    // computer answer again rather than leave it stuck.
                    warn!("Cannot rewind past the opening move");
                    if let Some(reply) = session.apply_ai_move()? {
                        writeln!(out, "Computer plays {}", reply.applied())?;
                    }
                }
            }
        }
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

fn announce(result: &MoveOutcome, out: &mut impl Write) -> Result<()> {
    match result.outcome() {
        GameOutcome::Win(side, line) => {
            writeln!(out, "Player {side} wins on {line}!")?;
        }
        GameOutcome::Draw => writeln!(out, "It's a draw!")?,
        GameOutcome::InProgress => {}
    }
    Ok(())
}

fn render(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.board())?;
    writeln!(out)?;
    if session.is_active() {
        writeln!(out, "Player {} to move.", session.current_side())?;
    }
    writeln!(
        out,
        "Score  X: {}  O: {}",
        session.score().wins(Side::X),
        session.score().wins(Side::O)
    )?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(config: SessionConfig, script: &str) -> String {
        let mut out = Vec::new();
        run(&config, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn resolve(file: &tempfile::NamedTempFile, flags: &[&str]) -> SessionConfig {
        let path = file.path().to_str().unwrap();
        let args = ["strictly_tictactoe", "--config", path]
            .into_iter()
            .chain(flags.iter().copied());
        resolve_config(&Cli::parse_from(args)).unwrap()
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let file = config_file("mode = { vs_ai = \"easy\" }\nseed = 3\nai_delay_ms = 10\n");
        let config = resolve(&file, &[]);
        assert_eq!(config.mode(), &GameMode::VsAi(Difficulty::Easy));
        assert_eq!(config.seed(), &Some(3));
        assert_eq!(config.ai_delay_ms(), &10);
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file("mode = { vs_ai = \"easy\" }\nseed = 3\nai_delay_ms = 10\n");
        let config = resolve(&file, &["--difficulty", "hard", "--ai-delay-ms", "0"]);
        assert_eq!(config.mode(), &GameMode::VsAi(Difficulty::Hard));
        assert_eq!(config.seed(), &Some(3));
        assert_eq!(config.ai_delay_ms(), &0);

        let config = resolve(&file, &["--seed", "11"]);
        assert_eq!(config.mode(), &GameMode::VsAi(Difficulty::Easy));
        assert_eq!(config.seed(), &Some(11));
    }

    #[test]
    fn test_two_player_flag_drops_file_difficulty() {
        let file = config_file("mode = { vs_ai = \"easy\" }\nseed = 3\nai_delay_ms = 10\n");
        let config = resolve(&file, &["--mode", "two-player"]);
        assert_eq!(config.mode(), &GameMode::TwoPlayer);
        assert_eq!(config.seed(), &Some(3));
        assert_eq!(config.ai_delay_ms(), &10);
    }

    #[test]
    fn test_bare_difficulty_implies_vs_ai() {
        let file = config_file("mode = \"two_player\"\n");
        let config = resolve(&file, &["--difficulty", "medium"]);
        assert_eq!(config.mode(), &GameMode::VsAi(Difficulty::Medium));
    }

    #[test]
    fn test_vs_ai_flag_keeps_file_difficulty() {
        let file = config_file("mode = { vs_ai = \"hard\" }\n");
        let config = resolve(&file, &["--mode", "vs-ai"]);
        assert_eq!(config.mode(), &GameMode::VsAi(Difficulty::Hard));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::parse_from(["strictly_tictactoe", "--config", "/nonexistent/game.toml"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("4"), Some(Command::Play(Position::Center)));
        assert_eq!(Command::parse("top left"), Some(Command::Play(Position::TopLeft)));
        assert_eq!(Command::parse("UNDO"), Some(Command::Undo));
        assert_eq!(Command::parse("ai hard"), Some(Command::VsAi(Difficulty::Hard)));
        assert_eq!(Command::parse("ai"), Some(Command::VsAi(Difficulty::Easy)));
        assert_eq!(Command::parse("ai silly"), None);
        assert_eq!(Command::parse("9"), None);
    }

    #[test]
    fn test_two_player_win_is_announced() {
        let output = play(SessionConfig::default(), "0\n3\n1\n4\n2\nq\n");
        assert!(output.contains("Player X wins on [0, 1, 2]!"));
        assert!(output.contains("Final score: X 1 - 0 O"));
    }

    #[test]
    fn test_computer_replies() {
        let config = SessionConfig::default()
            .with_mode(GameMode::VsAi(Difficulty::Hard))
            .with_seed(Some(0))
            .with_ai_delay_ms(0);
        let output = play(config, "0\n");
        assert!(output.contains("Computer plays O -> Center"));
    }

    #[test]
    fn test_occupied_cell_reported() {
        let output = play(SessionConfig::default(), "4\n4\n");
        assert!(output.contains("Cell 4 is already occupied"));
    }
}
