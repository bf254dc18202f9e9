use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

fn probe_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}

/// Attaches the spinner to `span`; it is drawn while the span is entered.
pub fn start_probe_spinner(span: &Span, total: usize) {
    span.pb_set_style(&probe_style());
    report_probe_progress(span, 0, total);
}

pub fn report_probe_progress(span: &Span, settled: usize, total: usize) {
    span.pb_set_message(
        &format!(
            "{} of {} locations settled...",
            settled.to_string().green().bold(),
            total
        )
        .color(colors::TEXT_DEFAULT)
        .to_string(),
    );
}
