mod analyzer;
mod instruments;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use simple_logger::SimpleLogger;
use tabled::settings::Style;
use tabled::Table;

use crate::analyzer::{AnalyzerError, MidiAnalyzer};

/// Report the tracks and General MIDI instruments a MIDI file uses.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a MIDI file
    filename: PathBuf,

    /// Print whether the file uses piano-section instruments only
    #[arg(long = "is_piano", conflicts_with_all = ["track_names", "summary"])]
    is_piano: bool,

    /// Print the name of every track
    #[arg(long = "track_names", conflicts_with_all = ["is_piano", "summary"])]
    track_names: bool,

    /// Print a per-track table of names and instruments
    #[arg(long, conflicts_with_all = ["is_piano", "track_names"])]
    summary: bool,

    /// Log decoding progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()
        .unwrap();

    if let Err(error) = run(&args) {
        error!("{}", error);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), AnalyzerError> {
    let mut midi_data = Vec::new();
    let analyzer = MidiAnalyzer::load(&args.filename, &mut midi_data)?;

    if args.is_piano {
        println!("{}", analyzer.is_piano_only());
    } else if args.track_names {
        for (index, name) in analyzer.get_track_names().iter().enumerate() {
            println!("Track {}: {}", index, name);
        }
    } else if args.summary {
        let mut table = Table::new(analyzer.track_summaries());
        table.with(Style::sharp());
        println!("{}", table);
    } else {
        for instrument in analyzer.get_instruments() {
            println!("{}", instrument);
        }
    }

    Ok(())
}
