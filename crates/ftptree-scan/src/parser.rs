//! Listing-line parsing.
//!
//! A parser turns one raw line of a directory listing into an [`Entry`].
//! Parsing never fails: fields that cannot be determined fall back to an
//! empty name, a size of `"0"` or an absent timestamp.

use chrono::{Datelike, NaiveDateTime};
use compact_str::CompactString;

use ftptree_core::{Entry, FOLDER_SIZE};

/// Converts raw listing lines into entries.
pub trait LineParser {
    /// Parse `line`, prefixing the extracted name with `prefix`.
    fn parse(&self, prefix: &str, line: &str) -> Entry;
}

/// Parser for DOS/IIS style listings:
///
/// ```text
/// 08-15-23  04:05PM       <DIR>          backups
/// 08-15-23  04:05PM                 1234 notes.txt
/// ```
///
/// The name always starts at [`DosLineParser::NAME_COLUMN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DosLineParser;

impl DosLineParser {
    /// Token marking a folder line.
    pub const FOLDER_MARKER: &'static str = "<DIR>";

    /// Character offset where the name field starts.
    pub const NAME_COLUMN: usize = 39;

    /// Format of the joined `"{date} {time}"` tokens.
    pub const TIMESTAMP_FORMAT: &'static str = "%m-%d-%y %I:%M%p";

    /// Number of digit-leading tokens considered as size candidates.
    const SIZE_CANDIDATES: usize = 3;

    pub fn new() -> Self {
        Self
    }
}

impl LineParser for DosLineParser {
    fn parse(&self, prefix: &str, line: &str) -> Entry {
        let is_folder = line.contains(Self::FOLDER_MARKER);
        let name = name_field(line, Self::NAME_COLUMN);

        let mut date = None;
        let mut time = None;
        let mut size = CompactString::new(FOLDER_SIZE);
        let mut size_candidates = 0;

        for token in line.split_whitespace() {
            if date.is_none() && token.contains('-') {
                date = Some(token);
            }
            if time.is_none() && token.contains(':') {
                time = Some(token);
            }
            if size_candidates < Self::SIZE_CANDIDATES
                && token.starts_with(|c: char| c.is_ascii_digit())
            {
                size_candidates += 1;
                size = if is_folder {
                    CompactString::new(FOLDER_SIZE)
                } else {
                    CompactString::new(token)
                };
            }
        }

        let created_at = parse_timestamp(date.unwrap_or_default(), time.unwrap_or_default());
        let path = format!("{prefix}{name}").trim_end().to_string();

        Entry {
            path,
            created_at,
            size_bytes: size,
            is_folder,
        }
    }
}

/// Everything from character `column` to the end of the line.
fn name_field(line: &str, column: usize) -> &str {
    match line.char_indices().nth(column) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Parse `"{date} {time}"`, e.g. `"08-15-23 04:05PM"`.
///
/// Every field must have exactly two digits. Two-digit years 50-99 belong
/// to the 1900s and 00-49 to the 2000s.
fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    if !matches_shape(date, "00-00-00") || !matches_shape(time, "00:00AM") {
        return None;
    }

    let text = format!("{date} {time}");
    let parsed = NaiveDateTime::parse_from_str(&text, DosLineParser::TIMESTAMP_FORMAT).ok()?;
    if parsed.year() >= 2050 {
        parsed.with_year(parsed.year() - 100)
    } else {
        Some(parsed)
    }
}

/// Byte-wise shape check: `0` stands for an ASCII digit, `A` for an ASCII
/// letter, anything else must match literally.
fn matches_shape(token: &str, shape: &str) -> bool {
    token.len() == shape.len()
        && token.bytes().zip(shape.bytes()).all(|(b, s)| match s {
            b'0' => b.is_ascii_digit(),
            b'A' => b.is_ascii_alphabetic(),
            _ => b == s,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_name_field_offsets() {
        let line = "x".repeat(39);
        assert_eq!(name_field(&line, 39), "");

        let line = format!("{}abcdef", "x".repeat(39));
        assert_eq!(name_field(&line, 39), "abcdef");

        assert_eq!(name_field("short", 39), "");
    }

    #[test]
    fn test_name_field_counts_characters() {
        let line = format!("{}ö.txt", "é".repeat(39));
        assert_eq!(name_field(&line, 39), "ö.txt");
    }

    #[test]
    fn test_timestamp_pm() {
        assert_eq!(
            parse_timestamp("08-15-23", "04:05PM"),
            Some(stamp(2023, 8, 15, 16, 5))
        );
    }

    #[test]
    fn test_timestamp_midnight_and_noon() {
        assert_eq!(
            parse_timestamp("01-02-20", "12:00AM"),
            Some(stamp(2020, 1, 2, 0, 0))
        );
        assert_eq!(
            parse_timestamp("01-02-20", "12:30PM"),
            Some(stamp(2020, 1, 2, 12, 30))
        );
    }

    #[test]
    fn test_timestamp_two_digit_year_window() {
        assert_eq!(
            parse_timestamp("12-31-49", "11:59PM"),
            Some(stamp(2049, 12, 31, 23, 59))
        );
        assert_eq!(
            parse_timestamp("01-01-50", "09:00AM"),
            Some(stamp(1950, 1, 1, 9, 0))
        );
        assert_eq!(
            parse_timestamp("07-04-99", "09:00AM"),
            Some(stamp(1999, 7, 4, 9, 0))
        );
    }

    #[test]
    fn test_timestamp_rejects_other_shapes() {
        assert_eq!(parse_timestamp("", ""), None);
        assert_eq!(parse_timestamp("2023-08-15", "16:05"), None);
        assert_eq!(parse_timestamp("13-40-23", "04:05PM"), None);
        assert_eq!(parse_timestamp("08-15-23", ""), None);
    }

    #[test]
    fn test_timestamp_requires_two_digit_fields() {
        assert_eq!(parse_timestamp("8-5-23", "04:05PM"), None);
        assert_eq!(parse_timestamp("08-15-23", "4:05PM"), None);
        assert_eq!(parse_timestamp("08-15-23", "04:5PM"), None);
        assert_eq!(parse_timestamp("08-15-2023", "04:05PM"), None);
        assert_eq!(parse_timestamp("08-15-23", "04:05P"), None);
    }

    #[test]
    fn test_matches_shape() {
        assert!(matches_shape("08-15-23", "00-00-00"));
        assert!(matches_shape("11:59pm", "00:00AM"));
        assert!(!matches_shape("08/15/23", "00-00-00"));
        assert!(!matches_shape("ö8-15-2", "00-00-00"));
    }
}
