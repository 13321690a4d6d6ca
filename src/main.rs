use anyhow::Result;
use search_perf::cli;

// Main entry point
fn main() -> Result<()> {
    cli::handle_calls()
}
