use anyhow::{Context, Result};
use clap::Parser;
use fingerspell_client::{open_input, OutputFormat, ReplayOptions, Replayer};
use fingerspell_core::Dispatcher;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fingerspelling letter recognition over recorded hand landmarks", long_about = None)]
struct Args {
    /// JSON Lines file of hand landmarker results (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print frames where a letter was recognised
    #[arg(short, long)]
    letters_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let dispatcher = Dispatcher::reference();
    log::info!("Fingerspell replay starting...");
    log::info!("Letters: {:?}", dispatcher);
    match &args.input {
        Some(path) => log::info!("Input: {}", path.display()),
        None => log::info!("Input: stdin"),
    }

    let input = open_input(args.input.as_deref())?;
    let options = ReplayOptions {
        format: args.format,
        letters_only: args.letters_only,
    };

    let mut replayer = Replayer::new(dispatcher, options);
    let summary = replayer
        .run(input, io::stdout().lock())
        .context("Replay failed")?;

    log::info!("Done: {}", summary);

    Ok(())
}
