use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Formats an epoch-milliseconds timestamp relative to the local clock.
pub fn format_date(epoch_ms: f64) -> String {
    format_date_at(epoch_ms, &Local::now())
}

/// Same-day times show the clock, the previous day reads "Yesterday",
/// the rest of the past week the weekday, anything else the full date.
pub fn format_date_at<Tz>(epoch_ms: f64, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(when) = DateTime::from_timestamp_millis(epoch_ms as i64) else {
        return String::new();
    };
    let when = when.with_timezone(&now.timezone());
    let today = now.date_naive();
    let day = when.date_naive();

    if day == today {
        return when.format("%I:%M %p").to_string();
    }
    match today.signed_duration_since(day).num_days() {
        1 => "Yesterday".to_string(),
        2..=6 => when.format("%A").to_string(),
        _ => when.format("%m/%d/%Y").to_string(),
    }
}

/// Cuts `text` to `max_chars` characters and appends "..." when it was longer.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ms(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> f64 {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .timestamp_millis() as f64
    }

    fn now() -> DateTime<Utc> {
        // Friday
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn same_day_shows_clock_time() {
        assert_eq!(format_date_at(ms(2024, 3, 15, 9, 5), &now()), "09:05 AM");
        assert_eq!(format_date_at(ms(2024, 3, 15, 13, 45), &now()), "01:45 PM");
    }

    #[test]
    fn previous_day_is_yesterday() {
        assert_eq!(format_date_at(ms(2024, 3, 14, 23, 59), &now()), "Yesterday");
    }

    #[test]
    fn earlier_this_week_shows_weekday() {
        assert_eq!(format_date_at(ms(2024, 3, 12, 8, 0), &now()), "Tuesday");
        assert_eq!(format_date_at(ms(2024, 3, 9, 8, 0), &now()), "Saturday");
    }

    #[test]
    fn older_or_future_dates_show_full_date() {
        assert_eq!(format_date_at(ms(2024, 3, 8, 8, 0), &now()), "03/08/2024");
        assert_eq!(format_date_at(ms(2024, 3, 20, 8, 0), &now()), "03/20/2024");
    }

    #[test]
    fn out_of_range_timestamp_is_blank() {
        assert_eq!(format_date_at(1e20, &now()), "");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_preview("short", 30), "short");
        assert_eq!(truncate_preview("abcdef", 3), "abc...");
        assert_eq!(truncate_preview("abc", 3), "abc");
        assert_eq!(truncate_preview("héllo wörld", 4), "héll...");
    }
}
