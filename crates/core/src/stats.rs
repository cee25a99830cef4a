//! Year-bucketed registration statistics for the organizer pie chart.

use serde::Serialize;

/// Chart labels in fixed display order.
const YEAR_LABELS: [&str; 4] = ["1st Year", "2nd Year", "3rd Year", "4th Year"];

/// Chart colors, one per year bucket.
const YEAR_COLORS: [&str; 4] = ["#FF9999", "#FF7043", "#FFB74D", "#FFCC80"];

/// One non-empty slice of the year distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSlice {
    pub label: &'static str,
    pub count: u32,
    pub color: &'static str,
}

/// Tally registration years into the four fixed buckets.
///
/// Years outside 1..=4 are silently excluded; buckets that end up empty are
/// omitted from the result. Pure and deterministic over any snapshot.
pub fn tally(years: impl IntoIterator<Item = i16>) -> Vec<YearSlice> {
    let mut counts = [0u32; 4];
    for year in years {
        if (1..=4).contains(&year) {
            counts[(year - 1) as usize] += 1;
        }
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(i, &count)| YearSlice {
            label: YEAR_LABELS[i],
            count,
            color: YEAR_COLORS[i],
        })
        .collect()
}
