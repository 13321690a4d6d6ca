//! Turns a raw benchmark log into the two speedup ratio tables.
//!
//! The log is processed in a single forward pass. Marker lines set the
//! context (current board position, current depth, sequential reference
//! times) that measurement records are interpreted under, so line order
//! matters: in particular the single-thread run of an algorithm defines
//! the baseline for the higher thread counts that follow it.

use std::num::{ParseFloatError, ParseIntError};

use itertools::Itertools;
use log::warn;

use crate::data::{Algorithm, AlgorithmFamily, Depth, MeasurementKey, RatioTables};

const FEN_PREFIX: &str = "Current Fen: ";
const MINIMAX_MOVES_PREFIX: &str = "Minimax moves: ";
const ALPHABETA_MOVES_PREFIX: &str = "AlphaBeta moves: ";
const SEQ_MINIMAX_PREFIX: &str = "Sequential Minimax";
const SEQ_ALPHABETA_PREFIX: &str = "Sequential AlphaBeta";

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("line {line}: expected 3 comma-separated fields, found {found}: '{content}'")]
    TooFewFields {
        line: usize,
        found: usize,
        content: String,
    },

    #[error("line {line}: cannot parse thread count '{field}': {source}")]
    InvalidThreadCount {
        line: usize,
        field: String,
        source: ParseIntError,
    },

    #[error("line {line}: cannot parse time '{field}': {source}")]
    InvalidTime {
        line: usize,
        field: String,
        source: ParseFloatError,
    },

    #[error("line {line}: measurement record before any 'Current Fen: ' marker")]
    MissingPosition { line: usize },

    #[error("line {line}: '{algorithm}' measured before its sequential {family} reference")]
    MissingSequentialReference {
        line: usize,
        algorithm: String,
        family: &'static str,
    },
}

/// Parser context carried between lines of a single log.
struct ExtractorState {
    position: Option<String>,
    depth: Depth,
    // Single-thread time of the measurement group currently being read.
    // Valid only because the log emits the thread-count-1 run first.
    baseline_time: f64,
    seq_minimax: Option<f64>,
    seq_alpha_beta: Option<f64>,
}

impl Default for ExtractorState {
    fn default() -> Self {
        ExtractorState {
            position: None,
            depth: Depth::Four,
            baseline_time: 1.0,
            seq_minimax: None,
            seq_alpha_beta: None,
        }
    }
}

/// Builds both ratio tables from a complete benchmark log.
///
/// Precondition on line order (guaranteed by the benchmark harness): the
/// thread-count-1 measurement of a (position, algorithm, depth) group
/// appears before that group's higher thread counts, and each family's
/// sequential reference appears before the family's parallel
/// measurements. The baseline is carried as a running value, not looked
/// up by key, so violating the first rule silently skews inner speedups;
/// violating the second is an error.
pub fn extract(log: &str) -> Result<RatioTables, ExtractError> {
    let mut tables = RatioTables::default();
    let mut state = ExtractorState::default();

    for (idx, line) in log.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        state.consume(idx + 1, line, &mut tables)?;
    }

    Ok(tables)
}

impl ExtractorState {
    fn consume(
        &mut self,
        line_no: usize,
        line: &str,
        tables: &mut RatioTables,
    ) -> Result<(), ExtractError> {
        if let Some(fen) = line.strip_prefix(FEN_PREFIX) {
            self.position = Some(fen.trim().to_string());
        } else if line.starts_with(MINIMAX_MOVES_PREFIX) {
            // Carries no timing data; the depth flip is its only effect.
            self.depth = self.depth.toggled();
        } else if line.starts_with(ALPHABETA_MOVES_PREFIX) {
            // Move list of the previous run, nothing to record.
        } else if line.starts_with(SEQ_MINIMAX_PREFIX) {
            self.seq_minimax = Some(parse_time_field(line_no, line)?);
        } else if line.starts_with(SEQ_ALPHABETA_PREFIX) {
            self.seq_alpha_beta = Some(parse_time_field(line_no, line)?);
        } else {
            self.record_measurement(line_no, line, tables)?;
        }
        Ok(())
    }

    fn record_measurement(
        &mut self,
        line_no: usize,
        line: &str,
        tables: &mut RatioTables,
    ) -> Result<(), ExtractError> {
        let fields = split_record(line_no, line)?;

        let algorithm = fields[0];
        let threads =
            fields[1]
                .parse::<u32>()
                .map_err(|source| ExtractError::InvalidThreadCount {
                    line: line_no,
                    field: fields[1].to_string(),
                    source,
                })?;
        let time = parse_float(line_no, fields[2])?;

        let position = self
            .position
            .clone()
            .ok_or(ExtractError::MissingPosition { line: line_no })?;
        let key = MeasurementKey {
            position,
            algorithm: algorithm.to_string(),
            threads,
            depth: self.depth,
        };

        if threads == 1 {
            tables.inner.insert(key.clone(), 1.0);
            self.baseline_time = time;
        } else {
            tables.inner.insert(key.clone(), self.baseline_time / time);
        }

        match Algorithm::from_log_name(algorithm) {
            Some(algo) => {
                let (reference, family) = match algo.family() {
                    AlgorithmFamily::Minimax => (self.seq_minimax, "minimax"),
                    AlgorithmFamily::AlphaBeta => (self.seq_alpha_beta, "alpha-beta"),
                };
                let reference =
                    reference.ok_or_else(|| ExtractError::MissingSequentialReference {
                        line: line_no,
                        algorithm: algorithm.to_string(),
                        family,
                    })?;
                tables.relative_to_seq.insert(key, reference / time);
            }
            None => {
                warn!("Unknown algorithm '{algorithm}', no relative-to-sequential entry recorded")
            }
        }

        Ok(())
    }
}

/// Splits a comma-separated record and trims each field.
fn split_record(line_no: usize, line: &str) -> Result<Vec<&str>, ExtractError> {
    let fields = line.split(',').map(str::trim).collect_vec();
    if fields.len() < 3 {
        return Err(ExtractError::TooFewFields {
            line: line_no,
            found: fields.len(),
            content: line.to_string(),
        });
    }
    Ok(fields)
}

/// Parses field 3 of a sequential reference record as a time.
fn parse_time_field(line_no: usize, line: &str) -> Result<f64, ExtractError> {
    let fields = split_record(line_no, line)?;
    parse_float(line_no, fields[2])
}

fn parse_float(line_no: usize, field: &str) -> Result<f64, ExtractError> {
    field
        .parse::<f64>()
        .map_err(|source| ExtractError::InvalidTime {
            line: line_no,
            field: field.to_string(),
            source,
        })
}
