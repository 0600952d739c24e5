//! Pure text formatting helpers for post presentation.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render an ISO 8601 timestamp (e.g. `2024-01-15T10:30:00.000Z`) as a
/// long-form date like `January 15, 2024`.
///
/// Inputs that don't carry a `YYYY-MM-DD` prefix are returned unchanged.
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_owned();
    };
    if year.len() != 4 || month == 0 || month > 12 || day == 0 || day > 31 {
        return iso.to_owned();
    }
    format!("{} {day}, {year}", MONTHS[month - 1])
}

/// First letter of an author name, uppercased, for avatar badges.
/// Falls back to `"?"` for empty names.
pub fn author_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}
