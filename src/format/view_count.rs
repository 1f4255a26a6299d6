//! View-count abbreviation for row display.
//!
//! Input is `"<grouped-digits> <unit>"`, e.g. `"1,234,567 views"`. Abbreviation
//! works on comma groups, not on the numeric value: trailing groups are dropped,
//! never rounded.
//!
//! | groups | suffix | kept groups |
//! |--------|--------|-------------|
//! | 1      | none   | 1           |
//! | 2      | ` K`   | 1           |
//! | n > 2  | ` M`   | n - 2       |

/// Abbreviate a comma-grouped view count.
///
/// ```
/// use vidlist::format::format_view_count;
///
/// assert_eq!(format_view_count("500 views"), "500 views");
/// assert_eq!(format_view_count("1,500 views"), "1 K views");
/// assert_eq!(format_view_count("12,345,678 views"), "12,345 M views");
/// ```
///
/// Input without a unit word yields the abbreviated number alone.
pub fn format_view_count(raw: &str) -> String {
    let (number_part, unit_word) = match raw.split_once(' ') {
        Some((number, unit)) => (number, Some(unit)),
        None => (raw, None),
    };

    let segments: Vec<&str> = number_part.split(',').collect();
    let segment_count = segments.len();

    let (suffix, keep_count) = match segment_count {
        n if n > 2 => (" M", n - 2),
        2 => (" K", 1),
        n => ("", n),
    };

    let number = segments[..keep_count].join(",");

    match unit_word {
        Some(unit) => format!("{number}{suffix} {unit}"),
        None => format!("{number}{suffix}"),
    }
}
