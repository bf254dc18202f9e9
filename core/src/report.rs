//! Ranking and table layout for a finished sweep.
//!
//! Both functions are pure: they never touch the terminal and never mutate
//! their input. Colouring is left to the caller, which receives the header
//! cells already padded so escape codes cannot shift the columns.

use std::fmt;

use vantage_common::latency::{ProbeResult, RankedRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    /// Total cell width, including the leading pad.
    pub width: usize,
    pub align: Align,
}

const PADDING_LEFT: usize = 1;

/// Column set and order of the results table.
pub const COLUMNS: [Column; 6] = [
    Column {
        title: "rank",
        width: 8,
        align: Align::Left,
    },
    Column {
        title: "location",
        width: 25,
        align: Align::Left,
    },
    Column {
        title: "min",
        width: 10,
        align: Align::Right,
    },
    Column {
        title: "avg",
        width: 10,
        align: Align::Right,
    },
    Column {
        title: "max",
        width: 10,
        align: Align::Right,
    },
    Column {
        title: "mdev",
        width: 10,
        align: Align::Right,
    },
];

impl Column {
    /// Pads `content` to the column width. Longer content is kept whole.
    pub fn pad(&self, content: &str) -> String {
        let inner: usize = self.width.saturating_sub(PADDING_LEFT);
        let pad: String = " ".repeat(PADDING_LEFT);
        match self.align {
            Align::Left => format!("{pad}{content:<inner$}"),
            Align::Right => format!("{pad}{content:>inner$}"),
        }
    }
}

/// Sorts by average latency and assigns dense 1-based ranks.
///
/// The sort is stable: equal averages keep their accumulation order.
pub fn rank(results: &[ProbeResult]) -> Vec<RankedRow> {
    let mut sorted: Vec<&ProbeResult> = results.iter().collect();
    sorted.sort_by(|a, b| a.avg().total_cmp(&b.avg()));

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, result)| RankedRow {
            rank: idx + 1,
            location: result.location.clone(),
            summary: result.summary,
        })
        .collect()
}

/// A laid-out table: padded header cells and one line of padded cells per row.
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn width(&self) -> usize {
        COLUMNS.iter().map(|c| c.width).sum()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.concat())?;
        writeln!(f, "{}", "─".repeat(self.width()))?;
        for row in &self.rows {
            writeln!(f, "{}", row.concat())?;
        }
        Ok(())
    }
}

fn format_ms(value: f64) -> String {
    format!("{value:.3}")
}

fn row_cells(row: &RankedRow) -> Vec<String> {
    let s = &row.summary;
    let values: [String; 6] = [
        row.rank.to_string(),
        row.location.clone(),
        format_ms(s.min),
        format_ms(s.avg),
        format_ms(s.max),
        format_ms(s.mdev),
    ];

    COLUMNS
        .iter()
        .zip(values.iter())
        .map(|(column, value)| column.pad(value))
        .collect()
}

/// Ranks `results` and lays them out. Zero results give a header-only table.
pub fn render(results: &[ProbeResult]) -> Table {
    Table {
        header: COLUMNS.iter().map(|c| c.pad(c.title)).collect(),
        rows: rank(results).iter().map(row_cells).collect(),
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
