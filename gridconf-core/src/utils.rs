//! Shared string and date formatting helpers.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Pad a numeric string with leading zeros up to `min_width` characters.
///
/// Strings already at least `min_width` long are returned unchanged.
pub fn pad_left_zeros(value: &str, min_width: usize) -> String {
    let len = value.chars().count();
    if len >= min_width {
        value.to_string()
    } else {
        let mut padded = "0".repeat(min_width - len);
        padded.push_str(value);
        padded
    }
}

/// Format a timestamp as `MM/DD/YYYY HH:MM` for provenance comments.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    let mm = pad_left_zeros(&at.month().to_string(), 2);
    let dd = pad_left_zeros(&at.day().to_string(), 2);
    let hours = pad_left_zeros(&at.hour().to_string(), 2);
    let minutes = pad_left_zeros(&at.minute().to_string(), 2);

    format!("{}/{}/{} {}:{}", mm, dd, at.year(), hours, minutes)
}

/// Provenance line placed at the top of every generated configuration file.
///
/// The timestamp is injected by the caller so generation stays deterministic
/// under test.
pub fn main_comment(generated_at: &NaiveDateTime) -> String {
    format!(
        "This configuration was generated by the grid configuration console ({})",
        format_timestamp(generated_at)
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_pad_left_zeros() {
        assert_eq!(pad_left_zeros("7", 2), "07");
        assert_eq!(pad_left_zeros("42", 2), "42");
        assert_eq!(pad_left_zeros("42", 5), "00042");
        assert_eq!(pad_left_zeros("12345", 2), "12345");
        assert_eq!(pad_left_zeros("", 3), "000");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(&timestamp(2015, 3, 9, 8, 5)),
            "03/09/2015 08:05"
        );
        assert_eq!(
            format_timestamp(&timestamp(2015, 11, 23, 17, 45)),
            "11/23/2015 17:45"
        );
    }

    #[test]
    fn test_main_comment() {
        let comment = main_comment(&timestamp(2015, 3, 9, 8, 5));
        assert_eq!(
            comment,
            "This configuration was generated by the grid configuration console (03/09/2015 08:05)"
        );
    }
}
