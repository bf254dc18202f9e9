//! # Vantage Core
//!
//! The measurement pipeline behind the `vantage` command:
//!
//! * [`probe`]: one remote latency measurement through a vantage point.
//! * [`scheduler`]: fans probes out concurrently and gathers what settles.
//! * [`report`]: ranks results and lays them out as a fixed-column table.

pub mod probe;
pub mod report;
pub mod scheduler;
