//! Averages the speedup ratio tables across board positions and renders
//! the text report.

use std::collections::HashMap;

use crate::data::{
    Algorithm, Depth, MeasurementKey, RatioTables, BENCHMARK_POSITIONS, DEPTHS, THREAD_COUNTS,
};
use crate::stats;

/// Average speedup per (algorithm, thread count) group.
pub type GroupAverages = HashMap<(Algorithm, u32), f64>;

/// A group average referenced a measurement the log never produced.
#[derive(Debug, thiserror::Error)]
#[error(
    "no {table} speedup recorded for position '{position}', \
     algorithm '{algorithm}', {threads} threads, depth {depth}"
)]
pub struct MissingEntry {
    table: &'static str,
    position: String,
    algorithm: String,
    threads: u32,
    depth: Depth,
}

/// The four grouped-average tables the report is rendered from.
#[derive(Debug, Default)]
pub struct SpeedupSummary {
    pub inner_depth3: GroupAverages,
    pub inner_depth4: GroupAverages,
    pub relative_depth3: GroupAverages,
    pub relative_depth4: GroupAverages,
}

/// Averages both ratio tables over the fixed benchmark positions for
/// every (algorithm, thread count, depth) group. Each depth's average is
/// computed independently. A position missing from a ratio table is an
/// error; there is no default inside the average.
pub fn summarize(tables: &RatioTables) -> Result<SpeedupSummary, MissingEntry> {
    let mut summary = SpeedupSummary::default();

    for algorithm in Algorithm::ALL {
        for threads in THREAD_COUNTS {
            for depth in DEPTHS {
                let inner = group_mean(&tables.inner, "inner", algorithm, threads, depth)?;
                let relative = group_mean(
                    &tables.relative_to_seq,
                    "relative-to-sequential",
                    algorithm,
                    threads,
                    depth,
                )?;

                let (inner_table, relative_table) = match depth {
                    Depth::Three => (&mut summary.inner_depth3, &mut summary.relative_depth3),
                    Depth::Four => (&mut summary.inner_depth4, &mut summary.relative_depth4),
                };
                inner_table.insert((algorithm, threads), inner);
                relative_table.insert((algorithm, threads), relative);
            }
        }
    }

    Ok(summary)
}

fn group_mean(
    table: &HashMap<MeasurementKey, f64>,
    table_name: &'static str,
    algorithm: Algorithm,
    threads: u32,
    depth: Depth,
) -> Result<f64, MissingEntry> {
    let values = BENCHMARK_POSITIONS
        .iter()
        .map(|position| {
            let key = MeasurementKey {
                position: position.to_string(),
                algorithm: algorithm.log_name().to_string(),
                threads,
                depth,
            };
            table.get(&key).copied().ok_or_else(|| MissingEntry {
                table: table_name,
                position: position.to_string(),
                algorithm: algorithm.log_name().to_string(),
                threads,
                depth,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(stats::mean(values.into_iter()))
}

/// Renders the fixed-layout report: four sections, each listing every
/// algorithm with one line per thread count. Groups absent from the
/// summary print as 0.00.
pub fn render(summary: &SpeedupSummary) -> String {
    let mut out = String::from("Average Speedups\n\n");
    render_section(
        &mut out,
        "Inner Speedup Results (Depth 3):",
        &summary.inner_depth3,
    );
    render_section(
        &mut out,
        "Inner Speedup Results (Depth 4):",
        &summary.inner_depth4,
    );
    render_section(
        &mut out,
        "Relative to Sequential Speedup Results (Depth 3):",
        &summary.relative_depth3,
    );
    render_section(
        &mut out,
        "Relative to Sequential Speedup Results (Depth 4):",
        &summary.relative_depth4,
    );
    out
}

fn render_section(out: &mut String, header: &str, averages: &GroupAverages) {
    out.push_str(header);
    out.push('\n');
    for algorithm in Algorithm::ALL {
        out.push_str(&format!("Algorithm: {}\n", algorithm.log_name()));
        for threads in THREAD_COUNTS {
            let speedup = averages.get(&(algorithm, threads)).copied().unwrap_or(0.0);
            out.push_str(&format!("  Threads: {threads}, Speedup: {speedup:.2}\n"));
        }
        out.push('\n');
    }
}
