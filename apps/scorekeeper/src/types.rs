//! Shared types for the simulator.

use clap::ValueEnum;
use judgment_core::ScoringSystem;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScoringArg {
    Standard,
    Multiplier,
}

impl From<ScoringArg> for ScoringSystem {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Standard => ScoringSystem::Standard,
            ScoringArg::Multiplier => ScoringSystem::Multiplier,
        }
    }
}
