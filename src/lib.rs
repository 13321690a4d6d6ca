pub mod cli;
pub mod data;
pub mod extract;
pub mod report;
pub mod stats;
