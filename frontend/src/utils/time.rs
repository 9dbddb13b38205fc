use chrono::{NaiveDate, Utc};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar date in UTC, the date the backend records attendance against.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Human-readable date for tables, e.g. `Jan 5, 2024`. Values that do not
/// start with a `YYYY-MM-DD` date are shown as received.
pub fn format_display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, ISO_DATE_FORMAT).ok())
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Parses the value of an `<input type="date">`. Blank input means "no date".
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|_| "Dates must use the YYYY-MM-DD format.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_input_accepts_blank_and_iso() {
        assert_eq!(parse_date_input("  "), Ok(None));
        assert_eq!(
            parse_date_input("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29))
        );
    }

    #[test]
    fn parse_date_input_rejects_other_formats() {
        assert!(parse_date_input("02/29/2024").is_err());
        assert!(parse_date_input("2023-02-29").is_err());
    }

    #[test]
    fn formats_dates_for_inputs_and_tables() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_iso_date(date), "2024-01-05");
        assert_eq!(format_display_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn display_date_is_lenient() {
        assert_eq!(format_display_date("2024-01-02T00:00:00"), "Jan 2, 2024");
        assert_eq!(format_display_date("yesterday"), "yesterday");
        assert_eq!(format_display_date("2024/01/02"), "2024/01/02");
    }
}
