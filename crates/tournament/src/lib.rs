//! Trial harness for the minimax agent
//!
//! This crate provides infrastructure for:
//! - Playing repeated games between a white and a black agent
//! - Adjudicating games that hit the move cap by piece count
//! - Timing the white agent's decisions and reporting win rates
//!
//! # Usage
//!
//! ```bash
//! # Ten games of minimax (white) against the random agent
//! cargo run -p tournament -- run --trials 10 --depth 2
//!
//! # Print a saved report
//! cargo run -p tournament -- report results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
