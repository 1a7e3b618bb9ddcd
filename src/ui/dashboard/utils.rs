//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;
use rust_decimal::{Decimal, RoundingStrategy};

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Wallet => Color::Yellow,
        Source::Decision => Color::Green,
    }
}

/// Format a currency amount as dollars with thousands separators, e.g. `$10,245.67`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Format a percentage change with an explicit sign, e.g. `+2.4%`.
pub fn format_change(percent: f64) -> String {
    format!("{:+}%", percent)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(Decimal::new(1_024_567, 2)), "$10,245.67");
        assert_eq!(format_usd(Decimal::from(100)), "$100.00");
        assert_eq!(format_usd(Decimal::new(123_456_789, 0)), "$123,456,789.00");
        assert_eq!(format_usd(Decimal::new(-150_000, 2)), "-$1,500.00");
        assert_eq!(format_usd(Decimal::new(5, 3)), "$0.01");
    }

    #[test]
    fn change_formatting_keeps_sign() {
        assert_eq!(format_change(2.4), "+2.4%");
        assert_eq!(format_change(-0.3), "-0.3%");
    }

    #[test]
    fn compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-10-14 09:41:07"),
            "10-14 09:41"
        );
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }
}
