//! Turn a finished tally into the text that gets posted.

use crate::tally::Tally;
use std::fmt::Write;

/// Fixed body used when the window contains no reactions at all.
pub const EMPTY_REPORT: &str = "絵文字なし";

/// Render one ranking line per emoji, most used first, in the
/// `:<name>: <count>回` form the destination channel renders as the emoji
/// itself.
pub fn render_report(tally: &Tally) -> String {
    if tally.is_empty() {
        return EMPTY_REPORT.into();
    }

    let mut out = String::new();
    for (name, count) in tally.ranked() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, ":{}: {}回", name, count);
    }

    out
}
