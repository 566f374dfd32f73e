use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use othello_engine::{BoardEngine, Location};
use othello_view::{Markers, Outcome, Session, TerminalView};

/// Play Othello in the terminal. Both sides are entered by hand.
#[derive(Parser)]
#[command(name = "othello-play", about = "Play Othello in the terminal")]
struct Cli {
    /// Moves to play before handing over, e.g. "d3 c5 f6"
    #[arg(long)]
    opening: Option<String>,

    /// Draw with plain ASCII markers and no move hints
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let markers = if cli.ascii {
        Markers::ASCII
    } else {
        Markers::UNICODE
    };
    let mut engine = BoardEngine::new();
    if let Some(opening) = &cli.opening {
        for notation in opening.split_whitespace() {
            let loc: Location = notation
                .parse()
                .with_context(|| format!("parsing opening move {:?}", notation))?;
            if let Err(err) = engine.play(loc) {
                bail!("opening move {} is illegal: {}", loc, err);
            }
        }
        info!("replayed opening {:?}", opening);
    }

    let view = TerminalView::new(io::stdout(), markers);
    let mut session = Session::with_engine(engine, view);
    session.start().context("drawing board")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading move")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match session.handle(input).context("drawing board")? {
            Outcome::Accepted(_) => {}
            Outcome::Rejected(loc) => println!(
                "Cannot play {}. Legal moves: {}",
                loc,
                session.engine().legal_moves()
            ),
            Outcome::Unresolved => println!("Enter a move like \"d3\" or \"4 3\", or \"quit\"."),
        }
    }

    Ok(())
}
