//! Display formatting for dates, times and status keys.
//!
//! Dates arrive either from seed data (`2024-06-16 18:00`) or from a
//! `datetime-local` input (`2024-06-16T18:00`); both layouts put the same
//! fields at the same offsets.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format a date string as "Jun 16, 2024".
///
/// Returns the input unchanged if it does not start with `YYYY-MM-DD`.
pub fn format_date_human(date_str: &str) -> String {
    let (Some(year), Some(month), Some(day)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date_str.to_string(),
    }
}

/// Format a datetime string as "Jun 16, 2024 6:00 PM".
///
/// Falls back to date-only if the time portion is missing or malformed.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    let (Some(hour_str), Some(min_str)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return date_part;
    };

    let hour: u32 = match hour_str.parse() {
        Ok(h) if h < 24 => h,
        _ => return date_part,
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

/// Pickup time for lists; blank means the donor left it open.
pub fn format_pickup_time(pickup_time: &str) -> String {
    if pickup_time.trim().is_empty() {
        "Flexible".to_string()
    } else {
        format_datetime_human(pickup_time)
    }
}

/// Convert a status key to Title Case ("in-progress" → "In Progress").
pub fn format_status_label(s: &str) -> String {
    s.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
