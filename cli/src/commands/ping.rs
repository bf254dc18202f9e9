use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use tracing::{Instrument, info, info_span, warn};

use crate::terminal::{colors, print, spinner, table};
use crate::vprint;
use vantage_common::config::Config;
use vantage_common::location::{self, LocationCode, VantagePoint};
use vantage_core::probe::HttpProbe;
use vantage_core::report;
use vantage_core::scheduler::{ProbeScheduler, Sweep};

pub async fn ping(codes: &[LocationCode], cfg: &Config) -> anyhow::Result<()> {
    let points: Vec<&'static VantagePoint> = if codes.is_empty() {
        location::resolve_all()
    } else {
        location::resolve(codes)
    };

    info!(
        "Pinging {} from {} locations",
        cfg.host.bold(),
        points.len().to_string().bold()
    );

    let probe = Arc::new(HttpProbe::new(cfg)?);
    let start_time: Instant = Instant::now();

    let sweep: Sweep = {
        let span = if cfg.quiet == 0 {
            let span = info_span!("probing", indicatif.pb_show = true);
            spinner::start_probe_spinner(&span, points.len());
            span
        } else {
            info_span!("probing")
        };

        let progress = span.clone();
        let scheduler = ProbeScheduler::new(probe).on_settled(move |settled, total| {
            spinner::report_probe_progress(&progress, settled, total)
        });

        scheduler.run(&points, &cfg.host).instrument(span).await
    };

    probe_ends(&sweep, start_time.elapsed(), cfg);
    Ok(())
}

fn probe_ends(sweep: &Sweep, elapsed: Duration, cfg: &Config) {
    print::header("latency ranking", cfg.quiet);
    table::print_table(&report::render(&sweep.results));

    if cfg.quiet < 2 {
        print_summary(sweep.results.len(), sweep.settled(), elapsed, cfg);
    }

    for failure in &sweep.failures {
        warn!(
            "{} did not respond ({}): {}",
            failure.vantage_point.display_name,
            failure.error.kind(),
            failure.error
        );
    }
}

fn print_summary(responded: usize, total: usize, elapsed: Duration, cfg: &Config) {
    let responded: ColoredString = format!("{responded} of {total} locations").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!("Probe Complete: {responded} responded in {elapsed}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            vprint!();
            info!("{}", output);
        }
    }
}
