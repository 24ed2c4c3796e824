//! CLI library components for the chronologies tool.

pub mod logging;
pub mod output;
pub mod pipeline;
