use colored::*;
use vantage_core::report::Table;

use crate::terminal::{colors, print};

/// Prints the results table with one colour per header cell.
pub fn print_table(table: &Table) {
    let header: String = table
        .header
        .iter()
        .zip(colors::COLUMN_HEADERS)
        .map(|(cell, color)| cell.color(color).bold().to_string())
        .collect();

    print::print(&header);
    print::print(&"─".repeat(table.width()).color(colors::SEPARATOR).to_string());

    for row in &table.rows {
        print::print(&row.concat().color(colors::TEXT_DEFAULT).to_string());
    }
}
