//! Terminal Ayoayo for two players sharing a keyboard.
//!
//! Logs go to stderr (`RUST_LOG=ayoayo=debug` shows every sowing), the
//! board and prompts go to stdout.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ayoayo::core::{PlayerId, DEFAULT_SEEDS_PER_PIT, PLAYER_COUNT};
use ayoayo::{Ayoayo, BoardView, GameConfig, GameStatus, Layout};

/// Lines of game log shown after each move.
const LOG_TAIL: usize = 3;

#[derive(Debug, Parser)]
#[command(name = "ayoayo", about = "Play Ayoayo in the terminal")]
struct Args {
    /// Seeds in each pit at the start of the game.
    #[arg(long, default_value_t = DEFAULT_SEEDS_PER_PIT)]
    seeds_per_pit: u32,

    /// Name of player 1 (asked for when omitted).
    #[arg(long)]
    player1: Option<String>,

    /// Name of player 2 (asked for when omitted).
    #[arg(long)]
    player2: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionEnd {
    Finished,
    Quit,
}

/// One game plus the log shown alongside it.
struct Session {
    game: Ayoayo,
    names: [String; PLAYER_COUNT],
    log: Vec<String>,
}

impl Session {
    fn start(config: &GameConfig, names: &[String; PLAYER_COUNT]) -> Result<Self> {
        let mut game = Ayoayo::with_config(config.clone())?;
        for name in names {
            game.create_player(name.clone())?;
        }
        let log = vec![format!("Game started: {} vs {}.", names[0], names[1])];
        Ok(Self {
            game,
            names: names.clone(),
            log,
        })
    }

    fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<SessionEnd> {
        for line in &self.log {
            writeln!(out, "{line}")?;
        }

        loop {
            write!(out, "{}", BoardView::new(&self.game, Layout::Table))?;

            if let GameStatus::Over(result) = self.game.resolve_winner() {
                writeln!(out, "Game Over! {}", self.game.describe_result(result))?;
                return Ok(SessionEnd::Finished);
            }

            let active = self.game.active_player();
            let choices = self.game.legal_pits(active);
            write!(
                out,
                "It's {}'s turn. Choose a pit {:?} (q to quit): ",
                self.name(active),
                choices.as_slice()
            )?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(SessionEnd::Quit);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(SessionEnd::Quit);
            }
            let Ok(pit) = line.parse::<u8>() else {
                writeln!(out, "Please enter a pit number from 1 to 6.")?;
                continue;
            };

            match self.game.play_move(active, pit) {
                Ok(board) => {
                    debug!(%board, "board after move");
                    let entry = format!("{} played pit {pit}.", self.name(active));
                    self.log.push(entry);
                    let advisory = self.game.extra_turn_advisory();
                    if !advisory.is_empty() {
                        self.log.push(advisory.to_string());
                    }
                    let tail = self.log.len().saturating_sub(LOG_TAIL);
                    for line in &self.log[tail..] {
                        writeln!(out, "{line}")?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::new().with_seeds_per_pit(args.seeds_per_pit);
    config.validate().context("invalid game options")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let names = [
        choose_name(&config, PlayerId::ONE, args.player1, &mut input, &mut out)?,
        choose_name(&config, PlayerId::TWO, args.player2, &mut input, &mut out)?,
    ];

    play(&config, &names, &mut input, &mut out)
}

/// Run games until a player quits or declines a rematch.
fn play(
    config: &GameConfig,
    names: &[String; PLAYER_COUNT],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        let mut session = Session::start(config, names)?;
        if session.run(input, out)? == SessionEnd::Quit || !ask_play_again(input, out)? {
            break;
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

fn ask_play_again(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "Play again? [y/N]: ")?;
    out.flush()?;
    Ok(matches!(read_line(input)?, Some(answer) if answer.eq_ignore_ascii_case("y")))
}

/// Use the name given on the command line, or ask for one.
fn choose_name(
    config: &GameConfig,
    player: PlayerId,
    given: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<String> {
    let fallback = config.default_name(player);
    let name = match given {
        Some(name) => name,
        None => {
            write!(out, "Player {} name [{fallback}]: ", player.number())?;
            out.flush()?;
            read_line(input)?.unwrap_or_default()
        }
    };
    let name = name.trim();
    Ok(if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    })
}

/// Read one trimmed line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}
