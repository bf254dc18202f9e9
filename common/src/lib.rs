//! Shared building blocks for `vantage`.
//!
//! * [`location`]: the static registry of vantage points and region groups.
//! * [`latency`]: latency summaries, probe results and ranked rows.
//! * [`config`]: run settings handed from the CLI to the core.

pub mod config;
pub mod latency;
pub mod location;
