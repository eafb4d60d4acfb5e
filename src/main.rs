use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use xfcheckers::core::{default_settings_path, load_settings, save_settings, GlyphSet};
use xfcheckers::game::Game;
use xfcheckers::input::{handle_command, Command, Response, HELP};
use xfcheckers::rendering::TextRenderer;
use xfcheckers::rules::MoveKind;

/// Play checkers in the terminal
#[derive(Parser, Debug)]
#[command(name = "xfcheckers", version, about)]
struct Args {
    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Do not highlight legal moves when a piece is selected
    #[arg(long)]
    no_hints: bool,

    /// Characters used to draw the board
    #[arg(long, value_enum)]
    glyphs: Option<GlyphSet>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid --log-level filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings_path = args.settings.clone().unwrap_or_else(default_settings_path);
    let mut settings = load_settings(&settings_path);
    if args.no_hints {
        settings.show_hints = false;
    }
    if let Some(glyphs) = args.glyphs {
        settings.glyphs = glyphs;
    }
    if args.save_settings {
        save_settings(&settings_path, &settings)
            .with_context(|| format!("saving settings to {}", settings_path.display()))?;
    }
    info!(
        "[MAIN] hints: {}, glyphs: {}",
        settings.show_hints,
        settings.glyphs.description()
    );

    let mut game = Game::new(TextRenderer::new(&settings));
    game.start();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}\n")?;
    write!(stdout, "{}", game.renderer().render(game.board(), game.last_move()))?;

    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        let redraw = match handle_command(&mut game, &settings, command) {
            Response::Selected { at, hints } => {
                if settings.show_hints {
                    writeln!(stdout, "selected {at}, {} legal move(s)", hints.len())?;
                } else {
                    writeln!(stdout, "selected {at}")?;
                }
                true
            }
            Response::Cleared => true,
            Response::Moved(MoveKind::Step) => true,
            Response::Moved(MoveKind::Jump { captured }) => {
                writeln!(stdout, "captured {captured}")?;
                true
            }
            Response::Rejected(e) => {
                writeln!(stdout, "{e}")?;
                false
            }
            Response::InputLocked => {
                warn!("[MAIN] Input is disabled");
                false
            }
            Response::ShowBoard | Response::NewGame => true,
            Response::Help => {
                writeln!(stdout, "{HELP}")?;
                false
            }
            Response::Quit => break,
        };

        if redraw {
            write!(stdout, "{}", game.renderer().render(game.board(), game.last_move()))?;
        }
        stdout.flush()?;
    }

    Ok(())
}
