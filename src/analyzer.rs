use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use midly::{MetaMessage, MidiMessage, Smf, Track, TrackEventKind};
use tabled::Tabled;
use thiserror::Error;

use crate::instruments;

/// Errors from loading a MIDI file into a [`MidiAnalyzer`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("no such file: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("not a valid MIDI file: {0}")]
    Decode(#[from] midly::Error),
}

/// Read-only queries over a decoded MIDI file.
#[derive(Debug)]
pub struct MidiAnalyzer<'a> {
    smf: Smf<'a>,
}

/// One `--summary` table row per track.
#[derive(Tabled)]
pub struct TrackSummary {
    #[tabled(rename = "Track")]
    pub index: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Instruments")]
    pub instruments: String,
}

impl<'a> MidiAnalyzer<'a> {
    pub fn new(smf: Smf<'a>) -> MidiAnalyzer<'a> {
        MidiAnalyzer { smf }
    }

    /// Reads and decodes the file at `path`. The raw bytes land in `buf`,
    /// which the caller must keep alive for as long as the analyzer is used.
    pub fn load(path: &Path, buf: &'a mut Vec<u8>) -> Result<MidiAnalyzer<'a>, AnalyzerError> {
        if !path.exists() {
            return Err(AnalyzerError::FileNotFound(path.to_path_buf()));
        }

        *buf = fs::read(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let smf = Smf::parse(buf)?;
        info!("Decoded {} track(s) from {}", smf.tracks.len(), path.display());

        Ok(MidiAnalyzer::new(smf))
    }

    /// One name per track, in file order. A track with no track-name meta
    /// event yields an empty string.
    pub fn get_track_names(&self) -> Vec<String> {
        self.smf
            .tracks
            .iter()
            .map(|track| {
                track
                    .iter()
                    .find_map(|event| match event.kind {
                        TrackEventKind::Meta(MetaMessage::TrackName(name)) => {
                            Some(String::from_utf8_lossy(name).into_owned())
                        }
                        _ => None,
                    })
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Every program-change value in the file, scanning tracks in order and
    /// events within each track in order. Duplicates are kept.
    pub fn get_instrument_codes(&self) -> Vec<u8> {
        self.smf
            .tracks
            .iter()
            .flat_map(|track| program_changes(track))
            .collect()
    }

    /// The instrument name of every program change, in the same order as
    /// [`get_instrument_codes`](Self::get_instrument_codes).
    pub fn get_instruments(&self) -> Vec<String> {
        self.get_instrument_codes()
            .iter()
            .map(|&code| display_name(code))
            .collect()
    }

    /// True when every program change selects a piano-section instrument
    /// (programs 0-7). A file with no program changes counts as piano-only.
    pub fn is_piano_only(&self) -> bool {
        self.get_instrument_codes()
            .iter()
            .all(|&code| code <= instruments::LAST_PIANO_PROGRAM)
    }

    /// Per-track rows for the `--summary` table.
    pub fn track_summaries(&self) -> Vec<TrackSummary> {
        let names = self.get_track_names();
        self.smf
            .tracks
            .iter()
            .zip(names)
            .enumerate()
            .map(|(index, (track, name))| TrackSummary {
                index,
                name,
                instruments: program_changes(track)
                    .into_iter()
                    .map(display_name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect()
    }
}

fn program_changes(track: &Track<'_>) -> Vec<u8> {
    track
        .iter()
        .filter_map(|event| match event.kind {
            TrackEventKind::Midi { ref message, .. } => Some(message),
            _ => None,
        })
        .filter_map(|message| match message {
            MidiMessage::ProgramChange { program } => Some(program.as_int()),
            _ => None,
        })
        .collect()
}

fn display_name(code: u8) -> String {
    match instruments::instrument_name(code) {
        Some(name) => name.to_string(),
        None => format!("No Instrument found ({})", code),
    }
}
