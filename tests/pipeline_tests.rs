use std::fs;

use tempfile::TempDir;

use search_perf::data::{Algorithm, BENCHMARK_POSITIONS, THREAD_COUNTS};
use search_perf::extract::extract;
use search_perf::report::{render, summarize};

/// Builds a complete benchmark log the way the harness emits it: per
/// position, one pass at depth 4 and one at depth 3 (a `Minimax moves:`
/// marker separates the passes), each pass preceded by fresh sequential
/// reference times and covering every algorithm at every thread count.
///
/// Times are chosen so that inner speedup equals the thread count and
/// relative-to-sequential speedup equals twice the thread count, exactly.
fn synthetic_log() -> String {
    let mut log = String::new();
    for position in BENCHMARK_POSITIONS {
        log.push_str(&format!("Current Fen: {position}\n"));
        // First pass runs at the default depth 4, the marker then flips
        // to 3; the second marker flips back for the next position.
        for base in [8.0, 4.0] {
            log.push_str(&format!("Sequential Minimax, x, {}\n", 2.0 * base));
            log.push_str(&format!("Sequential AlphaBeta, x, {}\n", 2.0 * base));
            for algorithm in Algorithm::ALL {
                for threads in THREAD_COUNTS {
                    let time = base / threads as f64;
                    log.push_str(&format!("{},{threads},{time}\n", algorithm.log_name()));
                }
            }
            log.push_str("Minimax moves: a2a3 b2b3\n");
        }
    }
    log
}

fn expected_report() -> String {
    let sections = [
        ("Inner Speedup Results (Depth 3):", 1.0),
        ("Inner Speedup Results (Depth 4):", 1.0),
        ("Relative to Sequential Speedup Results (Depth 3):", 2.0),
        ("Relative to Sequential Speedup Results (Depth 4):", 2.0),
    ];

    let mut expected = String::from("Average Speedups\n\n");
    for (header, factor) in sections {
        expected.push_str(header);
        expected.push('\n');
        for algorithm in Algorithm::ALL {
            expected.push_str(&format!("Algorithm: {}\n", algorithm.log_name()));
            for threads in THREAD_COUNTS {
                let speedup = factor * threads as f64;
                expected.push_str(&format!("  Threads: {threads}, Speedup: {speedup:.2}\n"));
            }
            expected.push('\n');
        }
    }
    expected
}

#[test]
fn full_log_produces_expected_report() {
    let tables = extract(&synthetic_log()).unwrap();
    let summary = summarize(&tables).unwrap();
    assert_eq!(render(&summary), expected_report());
}

#[test]
fn report_survives_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("results.txt");
    let report_path = temp_dir.path().join("averageSpeedups.txt");

    fs::write(&log_path, synthetic_log()).unwrap();

    let log_text = fs::read_to_string(&log_path).unwrap();
    let tables = extract(&log_text).unwrap();
    let summary = summarize(&tables).unwrap();
    fs::write(&report_path, render(&summary)).unwrap();

    assert_eq!(fs::read_to_string(&report_path).unwrap(), expected_report());
}

#[test]
fn trailing_unknown_algorithm_does_not_disturb_the_report() {
    let mut log = synthetic_log();
    log.push_str("Experimental MCTS,1,1.0\n");

    let tables = extract(&log).unwrap();
    let summary = summarize(&tables).unwrap();
    assert_eq!(render(&summary), expected_report());
}

#[test]
fn incomplete_log_aborts_aggregation() {
    // Only one position measured; averaging over the full position list
    // must fail rather than fall back to a default.
    let log = format!(
        "Current Fen: {}\n\
         Sequential AlphaBeta, x, 4.0\n\
         PVS,1,2.0\n",
        BENCHMARK_POSITIONS[0]
    );
    let tables = extract(&log).unwrap();
    assert!(summarize(&tables).is_err());
}
