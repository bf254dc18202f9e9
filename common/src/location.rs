//! # Location Registry
//!
//! Static catalog of the vantage points a latency probe can be issued from.
//!
//! Every entry is addressed by a short code (e.g. `sg`, `fr`). Three region
//! group codes (`as`, `eu`, `us`) stand for every vantage point of that
//! region. Codes are parsed with [`LocationCode::from_str`] and expanded into
//! a deduplicated selection with [`resolve`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Continental grouping a vantage point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Asia,
    Europe,
    America,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Asia, Region::Europe, Region::America];

    /// Group code accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Region::Asia => "as",
            Region::Europe => "eu",
            Region::America => "us",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::America => "Americas",
        }
    }

    /// Every vantage point located in this region, in registry order.
    pub fn members(self) -> impl Iterator<Item = &'static VantagePoint> {
        VANTAGE_POINTS.iter().filter(move |vp| vp.region == self)
    }
}

/// A remote location the measurement is issued from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VantagePoint {
    pub code: &'static str,
    pub display_name: &'static str,
    pub remote_id: &'static str,
    pub region: Region,
}

const fn vp(
    code: &'static str,
    display_name: &'static str,
    remote_id: &'static str,
    region: Region,
) -> VantagePoint {
    VantagePoint {
        code,
        display_name,
        remote_id,
        region,
    }
}

pub static VANTAGE_POINTS: &[VantagePoint] = &[
    vp("sg", "Singapore", "sgp", Region::Asia),
    vp("jp", "Tokyo, Japan", "hnd-jp", Region::Asia),
    vp("de", "Frankfurt, DE", "fra-de", Region::Europe),
    vp("fr", "Paris, FR", "par-fr", Region::Europe),
    vp("nl", "Amsterdam, NL", "ams-nl", Region::Europe),
    vp("uk", "London, UK", "lon-gb", Region::Europe),
    vp("au", "Sydney, Australia", "syd-au", Region::Europe),
    vp("ny", "New York (New Jersey)", "nj-us", Region::America),
    vp("il", "Chicago, IL", "il-us", Region::America),
    vp("fl", "Miami, FL", "fl-us", Region::America),
    vp("wa", "Seattle, WA", "wa-us", Region::America),
    vp("tx", "Dallas, TX", "tx-us", Region::America),
    vp("sf", "San Francisco, CA", "sjo-ca-us", Region::America),
    vp("la", "Los Angeles, CA", "lax-ca-us", Region::America),
];

/// Looks up a single vantage point by its short code.
pub fn find(code: &str) -> Option<&'static VantagePoint> {
    VANTAGE_POINTS.iter().find(|vp| vp.code == code)
}

/// Every code the command line accepts: single locations first, then groups.
pub fn known_codes() -> Vec<&'static str> {
    VANTAGE_POINTS
        .iter()
        .map(|vp| vp.code)
        .chain(Region::ALL.iter().map(|r| r.code()))
        .collect()
}

/// A validated location selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCode {
    Single(&'static VantagePoint),
    Group(Region),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown location '{code}' (expected one of: {})", known_codes().join(", "))]
pub struct UnknownLocation {
    pub code: String,
}

impl FromStr for LocationCode {
    type Err = UnknownLocation;

    /// Accepts a vantage point code (`sg`) or a region group code (`eu`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if let Some(region) = Region::ALL.into_iter().find(|r| r.code() == lower) {
            return Ok(LocationCode::Group(region));
        }

        find(&lower)
            .map(LocationCode::Single)
            .ok_or_else(|| UnknownLocation {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationCode::Single(vp) => f.write_str(vp.code),
            LocationCode::Group(region) => f.write_str(region.code()),
        }
    }
}

/// Expands group codes and deduplicates the selection.
///
/// A vantage point reachable through several codes (for example `eu` and
/// `de`) appears once. The result follows registry order regardless of the
/// order codes were given in.
pub fn resolve(codes: &[LocationCode]) -> Vec<&'static VantagePoint> {
    let mut selected: BTreeSet<usize> = BTreeSet::new();

    for code in codes {
        match code {
            LocationCode::Single(vp) => {
                if let Some(idx) = index_of(vp) {
                    selected.insert(idx);
                }
            }
            LocationCode::Group(region) => {
                selected.extend(
                    VANTAGE_POINTS
                        .iter()
                        .enumerate()
                        .filter(|(_, vp)| vp.region == *region)
                        .map(|(idx, _)| idx),
                );
            }
        }
    }

    selected.into_iter().map(|idx| &VANTAGE_POINTS[idx]).collect()
}

/// The whole registry, used when no location is requested.
pub fn resolve_all() -> Vec<&'static VantagePoint> {
    VANTAGE_POINTS.iter().collect()
}

fn index_of(vp: &VantagePoint) -> Option<usize> {
    VANTAGE_POINTS.iter().position(|known| known == vp)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
