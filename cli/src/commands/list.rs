use colored::*;

use crate::terminal::{colors, print};
use vantage_common::location::Region;

/// Prints every region group with its member locations.
pub fn list() {
    for (idx, region) in Region::ALL.into_iter().enumerate() {
        print::tree_head(idx, &format!("{} ({})", region.name(), region.code()));
        let members: Vec<(String, ColoredString)> = region
            .members()
            .map(|vp| (vp.code.to_string(), vp.display_name.color(colors::TEXT_DEFAULT)))
            .collect();
        print::as_tree_one_level(members);
    }
}
