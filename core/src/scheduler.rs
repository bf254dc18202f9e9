//! Concurrent fan-out of latency probes.
//!
//! [`ProbeScheduler::run`] launches one task per vantage point, all at once,
//! and waits for every one of them to settle. Successful measurements land in
//! a shared [`ResultAccumulator`]; failures are caught at the task boundary
//! and reported next to the results instead of aborting the sweep.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::{Id, JoinSet};
use tracing::{Instrument, debug, error, info_span};
use vantage_common::latency::ProbeResult;
use vantage_common::location::VantagePoint;

use crate::probe::{LatencyProbe, ProbeError};

type SettledCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Append-only result collection shared by every in-flight probe of one run.
///
/// Each successful probe pushes exactly one entry. Pushes are serialized by
/// the inner mutex, so no update is lost when tasks finish together.
#[derive(Clone, Default)]
pub struct ResultAccumulator {
    inner: Arc<Mutex<Vec<ProbeResult>>>,
}

impl ResultAccumulator {
    pub fn push(&self, result: ProbeResult) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result);
    }

    /// Drains the collection in accumulation order.
    pub fn take(&self) -> Vec<ProbeResult> {
        std::mem::take(&mut *self.inner.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// A vantage point whose probe did not produce a result.
#[derive(Debug)]
pub struct ProbeFailure {
    pub vantage_point: &'static VantagePoint,
    pub error: ProbeError,
}

/// Everything one run produced once all probes settled.
#[derive(Debug, Default)]
pub struct Sweep {
    /// Successful measurements, in the order they completed.
    pub results: Vec<ProbeResult>,
    pub failures: Vec<ProbeFailure>,
}

impl Sweep {
    /// Number of probes that settled, successfully or not.
    pub fn settled(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

pub struct ProbeScheduler {
    probe: Arc<dyn LatencyProbe>,
    on_settled: Option<SettledCallback>,
}

impl ProbeScheduler {
    pub fn new(probe: Arc<dyn LatencyProbe>) -> Self {
        Self {
            probe,
            on_settled: None,
        }
    }

    /// Registers a callback invoked with `(settled, total)` every time a probe settles.
    pub fn on_settled<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.on_settled = Some(Box::new(callback));
        self
    }

    /// Probes `host` from every vantage point concurrently.
    ///
    /// Returns once all launched probes have settled. There is no concurrency
    /// cap and no batch-wide timeout; each probe is bounded only by its own
    /// client. A failing probe never cancels its siblings.
    pub async fn run(&self, vantage_points: &[&'static VantagePoint], host: &str) -> Sweep {
        let accumulator = ResultAccumulator::default();
        let host: Arc<str> = Arc::from(host);
        let mut tasks: JoinSet<Result<(), ProbeFailure>> = JoinSet::new();
        let mut launched: HashMap<Id, &'static VantagePoint> = HashMap::new();

        for &vantage_point in vantage_points {
            let probe = Arc::clone(&self.probe);
            let accumulator = accumulator.clone();
            let host = Arc::clone(&host);
            let span = info_span!("probe", location = vantage_point.code);

            debug!("Launching probe from {}", vantage_point.display_name);
            let handle = tasks.spawn(
                async move {
                    match probe.probe(vantage_point, &host).await {
                        Ok(result) => {
                            accumulator.push(result);
                            Ok(())
                        }
                        Err(error) => Err(ProbeFailure {
                            vantage_point,
                            error,
                        }),
                    }
                }
                .instrument(span),
            );
            launched.insert(handle.id(), vantage_point);
        }

        let total: usize = tasks.len();
        let mut settled: usize = 0;
        let mut failures: Vec<ProbeFailure> = Vec::new();

        while let Some(joined) = tasks.join_next_with_id().await {
            settled += 1;
            let failure: Option<ProbeFailure> = match joined {
                Ok((_, Ok(()))) => None,
                Ok((_, Err(failure))) => Some(failure),
                Err(e) => {
                    error!("Probe task did not complete: {e}");
                    launched.get(&e.id()).map(|&vantage_point| ProbeFailure {
                        vantage_point,
                        error: ProbeError::Aborted(e.to_string()),
                    })
                }
            };

            if let Some(failure) = failure {
                debug!(
                    "{} failed ({}): {}",
                    failure.vantage_point.display_name,
                    failure.error.kind(),
                    failure.error
                );
                failures.push(failure);
            }

            if let Some(callback) = &self.on_settled {
                callback(settled, total);
            }
        }

        Sweep {
            results: accumulator.take(),
            failures,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
