//! The **abstraction** for a single remote latency measurement.
//!
//! A probe asks one vantage point to ping the target host and turns the
//! remote tool's free-text output into a [`LatencySummary`]. The scheduler
//! only depends on the [`LatencyProbe`] trait; [`HttpProbe`] is the concrete
//! transport used by the command line.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;
use vantage_common::latency::{LatencySummary, ProbeResult};
use vantage_common::location::VantagePoint;

mod http;

pub use http::HttpProbe;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request never produced a usable response (timeout, refused
    /// connection, non-2xx status).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A response arrived but carried no latency summary line.
    #[error("no latency summary in response")]
    Parse,

    /// The probe task ended without settling, e.g. it panicked.
    #[error("probe task aborted: {0}")]
    Aborted(String),
}

impl ProbeError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Transport(_) => "transport",
            ProbeError::Parse => "parse",
            ProbeError::Aborted(_) => "aborted",
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::Transport(Box::new(err))
    }
}

/// Measures latency from one vantage point to a host.
///
/// Implementations perform exactly one attempt per call and never retry.
#[async_trait]
pub trait LatencyProbe: Send + Sync {
    async fn probe(
        &self,
        vantage_point: &VantagePoint,
        host: &str,
    ) -> Result<ProbeResult, ProbeError>;
}

static SUMMARY_REGEX: OnceLock<Regex> = OnceLock::new();

fn summary_regex() -> &'static Regex {
    SUMMARY_REGEX.get_or_init(|| {
        Regex::new(r"rtt min/avg/max/mdev = ([\d.]+)/([\d.]+)/([\d.]+)/([\d.]+) ms")
            .expect("failed to compile latency summary regex")
    })
}

/// Extracts `min/avg/max/mdev` from ping output.
///
/// Either all four values parse or the whole call fails with
/// [`ProbeError::Parse`].
pub fn parse_summary(body: &str) -> Result<LatencySummary, ProbeError> {
    let caps = summary_regex().captures(body).ok_or(ProbeError::Parse)?;
    let value = |idx: usize| -> Result<f64, ProbeError> {
        caps[idx].parse::<f64>().map_err(|_| ProbeError::Parse)
    };

    Ok(LatencySummary {
        min: value(1)?,
        avg: value(2)?,
        max: value(3)?,
        mdev: value(4)?,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
