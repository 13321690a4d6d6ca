use std::collections::HashMap;
use std::fmt::Display;

/// The parallel search algorithms covered by a benchmark run.
///
/// Each algorithm belongs to one family, which determines the sequential
/// reference implementation its relative speedup is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    ParallelMinimax,
    NaiveParallelAlphaBeta,
    NaiveYbwcParallelAlphaBeta,
    Ybwc,
    Pvs,
}

/// Classifies an algorithm by its sequential baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    /// All benchmarked algorithms, in report order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::ParallelMinimax,
        Algorithm::NaiveParallelAlphaBeta,
        Algorithm::NaiveYbwcParallelAlphaBeta,
        Algorithm::Ybwc,
        Algorithm::Pvs,
    ];

    /// The name the benchmark harness prints in measurement records.
    pub fn log_name(self) -> &'static str {
        match self {
            Algorithm::ParallelMinimax => "Parallel Minimax",
            Algorithm::NaiveParallelAlphaBeta => "Naive Parallel Alpha Beta",
            Algorithm::NaiveYbwcParallelAlphaBeta => "Naive YBWC Parallel Alpha Beta",
            Algorithm::Ybwc => "YBWC",
            Algorithm::Pvs => "PVS",
        }
    }

    pub fn from_log_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.log_name() == name)
    }

    pub fn family(self) -> AlgorithmFamily {
        match self {
            Algorithm::ParallelMinimax => AlgorithmFamily::Minimax,
            Algorithm::NaiveParallelAlphaBeta
            | Algorithm::NaiveYbwcParallelAlphaBeta
            | Algorithm::Ybwc
            | Algorithm::Pvs => AlgorithmFamily::AlphaBeta,
        }
    }
}

/// Search depth of a benchmark run. The harness only ever runs depths 3
/// and 4 and alternates between them (see [`Depth::toggled`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Three,
    Four,
}

impl Depth {
    /// The other depth of the pair. A `Minimax moves:` marker in the log
    /// switches the current depth to this value.
    pub fn toggled(self) -> Depth {
        match self {
            Depth::Three => Depth::Four,
            Depth::Four => Depth::Three,
        }
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Three => write!(f, "3"),
            Depth::Four => write!(f, "4"),
        }
    }
}

/// Identifies one timing observation. At most one measurement per key
/// exists in a log; later duplicates overwrite earlier ones.
///
/// `algorithm` is the raw name from the log rather than an [`Algorithm`]
/// so that measurements of algorithms outside the known families still
/// get inner-speedup entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementKey {
    pub position: String,
    pub algorithm: String,
    pub threads: u32,
    pub depth: Depth,
}

/// The two speedup ratios derived from one pass over a benchmark log.
///
/// `inner` relates each measurement to the same algorithm's single-thread
/// run; `relative_to_seq` relates it to the sequential reference of its
/// algorithm family.
#[derive(Debug, Default)]
pub struct RatioTables {
    pub inner: HashMap<MeasurementKey, f64>,
    pub relative_to_seq: HashMap<MeasurementKey, f64>,
}

/// Thread counts every algorithm is benchmarked at.
pub const THREAD_COUNTS: [u32; 4] = [1, 2, 4, 8];

/// Both search depths, in report order.
pub const DEPTHS: [Depth; 2] = [Depth::Three, Depth::Four];

/// The fixed set of board positions a benchmark run covers. Averages are
/// taken over exactly these positions.
pub const BENCHMARK_POSITIONS: [&str; 7] = [
    "8/8/8/8/8/1k6/2nb4/1K6 b - - 0 1",
    "1r6/8/8/8/8/1k6/8/K7 b - - 0 1",
    "1q6/8/8/8/8/1k6/8/K7 b - - 0 1",
    "1q6/8/8/8/8/1k6/PPP5/K7 b - - 0 1",
    "8/8/8/8/1k6/n2q4/PP6/K6R b - - 0 1",
    "5k2/4p2Q/8/5P2/b5R1/8/3P4/3KR3 w - - 0 1",
    "5k2/3p4/5K1P/8/8/8/8/8 w - - 0 1",
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn log_name_roundtrip() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_log_name(algo.log_name()), Some(algo));
        }
        assert_eq!(Algorithm::from_log_name("Sequential Minimax"), None);
        assert_eq!(Algorithm::from_log_name(""), None);
    }

    #[test]
    fn family_classification() {
        assert_eq!(
            Algorithm::ParallelMinimax.family(),
            AlgorithmFamily::Minimax
        );
        for algo in [
            Algorithm::NaiveParallelAlphaBeta,
            Algorithm::NaiveYbwcParallelAlphaBeta,
            Algorithm::Ybwc,
            Algorithm::Pvs,
        ] {
            assert_eq!(algo.family(), AlgorithmFamily::AlphaBeta);
        }
    }

    #[test]
    fn depth_toggles_between_three_and_four() {
        assert_eq!(Depth::Four.toggled(), Depth::Three);
        assert_eq!(Depth::Four.toggled().toggled(), Depth::Four);
    }
}
