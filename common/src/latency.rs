//! Latency measurements as they flow from the probe client to the table.

/// Round-trip statistics reported by one remote ping, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub mdev: f64,
}

/// Outcome of one successful probe. Created once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Display name of the vantage point the probe ran from.
    pub location: String,
    pub summary: LatencySummary,
}

impl ProbeResult {
    pub fn new(location: impl Into<String>, summary: LatencySummary) -> Self {
        Self {
            location: location.into(),
            summary,
        }
    }

    pub fn avg(&self) -> f64 {
        self.summary.avg
    }
}

/// A result with its 1-based position after sorting by average latency.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub location: String,
    pub summary: LatencySummary,
}
