//! Replays recorded hand landmarker output through the letter classifier.
//!
//! Input is JSON Lines, one `HandLandmarkerResult` per line, as logged by the
//! browser or a native estimator. Every frame is classified independently.

use anyhow::{Context, Result};
use fingerspell_core::Dispatcher;
use fingerspell_shared::{analyze, FrameOutcome, HandLandmarkerResult, LetterReport};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per frame
    #[default]
    Text,
    /// One JSON object per frame, carrying the full feature set
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    pub format: OutputFormat,
    /// Only print frames where a letter was recognised
    pub letters_only: bool,
}

/// Counts gathered over one replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub hands: usize,
    pub errors: usize,
    pub letters: BTreeMap<&'static str, usize>,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, {} with a hand, {} rejected",
            self.frames, self.hands, self.errors
        )?;
        for (letter, count) in &self.letters {
            write!(f, ", {}: {}", letter, count)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct FrameLine<'a> {
    frame: usize,
    hand: Option<&'a LetterReport>,
}

pub struct Replayer<'a> {
    dispatcher: Dispatcher<'a>,
    options: ReplayOptions,
    summary: ReplaySummary,
}

impl<'a> Replayer<'a> {
    pub fn new(dispatcher: Dispatcher<'a>, options: ReplayOptions) -> Self {
        Self {
            dispatcher,
            options,
            summary: ReplaySummary::default(),
        }
    }

    pub fn summary(&self) -> &ReplaySummary {
        &self.summary
    }

    /// Classify every frame of `input`, writing results to `out`.
    ///
    /// Frames that fail to parse or classify are logged and skipped; only I/O
    /// failures end the replay early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<ReplaySummary> {
        for (idx, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
            if line.trim().is_empty() {
                continue;
            }

            self.summary.frames += 1;
            let frame = self.summary.frames;

            let outcome = match HandLandmarkerResult::from_json(&line)
                .and_then(|result| analyze(&result, &self.dispatcher))
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("Skipping line {}: {}", idx + 1, e);
                    self.summary.errors += 1;
                    continue;
                }
            };

            self.record(frame, &outcome);
            self.write_frame(&mut out, frame, &outcome)?;
        }

        out.flush().context("Failed to flush output")?;
        Ok(self.summary.clone())
    }

    fn record(&mut self, frame: usize, outcome: &FrameOutcome) {
        match outcome {
            FrameOutcome::NoHand => log::debug!("Frame {}: no hand", frame),
            FrameOutcome::Hand(report) => {
                self.summary.hands += 1;
                log::debug!(
                    "Frame {}: {} hand, letter {:?}",
                    frame,
                    report.handedness,
                    report.letter
                );
            }
        }

        if let Some(letter) = outcome.letter() {
            *self.summary.letters.entry(letter).or_insert(0) += 1;
        }
    }

    fn write_frame<W: Write>(&self, out: &mut W, frame: usize, outcome: &FrameOutcome) -> Result<()> {
        if self.options.letters_only && outcome.letter().is_none() {
            return Ok(());
        }

        match self.options.format {
            OutputFormat::Text => writeln!(out, "{}", format_text(frame, outcome))?,
            OutputFormat::Json => {
                let line = FrameLine {
                    frame,
                    hand: outcome.report(),
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// `frame 3: A (Right, anchor 0.52,0.90)`, `-` standing for no letter
pub fn format_text(frame: usize, outcome: &FrameOutcome) -> String {
    match outcome {
        FrameOutcome::NoHand => format!("frame {}: no hand", frame),
        FrameOutcome::Hand(report) => {
            let letter = if report.has_letter() { report.letter } else { "-" };
            format!(
                "frame {}: {} ({}, anchor {:.2},{:.2})",
                frame, letter, report.handedness, report.anchor.x, report.anchor.y
            )
        }
    }
}

/// Buffered reader over a file, or stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
