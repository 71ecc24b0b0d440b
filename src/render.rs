//! Preview rendering for the parsed trade list.
//!
//! Contract: an empty sequence renders nothing (`None`), not an empty table
//! shell. Prices carry a currency prefix, the volume ratio an `x` suffix,
//! and the return fields a `%` suffix, all to two decimal places. NaN cells
//! from malformed report fields format as `NaN` and never panic.

use std::fmt::Write;

use crate::models::TradeRecord;

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_ratio(value: f64) -> String {
    format!("{:.2}x", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Render the preview table, one line per record in encounter order
pub fn render_preview(trades: &[TradeRecord]) -> Option<String> {
    if trades.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>12} {:>14} {:>18} {:>18}",
        "Date", "Entry Price", "Exit Price", "Volume Ratio", "Daily Return (%)", "Total Return (%)"
    );
    let _ = writeln!(out, "{}", "-".repeat(91));

    for trade in trades {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>12} {:>14} {:>18} {:>18}",
            trade.date,
            format_price(trade.entry_price),
            format_price(trade.exit_price),
            format_ratio(trade.volume_ratio),
            format_percent(trade.daily_return),
            format_percent(trade.total_return),
        );
    }

    Some(out)
}
