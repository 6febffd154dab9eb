mod app;
mod terminal;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event;
use log::{debug, info};
use papertree::{Color, Document, PaperTreeError, Rgb};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use app::{App, Control};
use terminal::Screen;

/// Browse a tree document in the terminal. Click a marker to expand or
/// collapse, click an icon or name to select.
#[derive(Debug, Parser)]
#[command(name = "papertree", version)]
struct Args {
    /// JSON document with `data`, `actions` and `theme`.
    document: PathBuf,

    /// Where to write the log.
    #[arg(long, default_value = "papertree.log")]
    log: PathBuf,

    /// Terminal background that translucent theme colors are blended over.
    #[arg(long, default_value = "#000000")]
    base: Color,

    /// Print the initial rows and exit.
    #[arg(long)]
    print: bool,
}

#[derive(Debug, Error)]
enum TermError {
    #[error(transparent)]
    Document(#[from] PaperTreeError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), TermError> {
    let log_file = File::create(&args.log)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let document = Document::load(&args.document)?;
    let mut app = App::new(document);

    if args.print {
        for row in app.rows() {
            println!("{}", row.text());
        }
        return Ok(());
    }

    let base = args.base.composite_over(Rgb::default());
    let mut screen = Screen::new(base)?;
    info!("browsing {}", args.document.display());

    loop {
        screen.draw(app.rows(), &app.status_line())?;

        let event = event::read()?;
        debug!("event: {event:?}");
        if app.handle(event) == Control::Quit {
            break;
        }
    }

    Ok(())
}
