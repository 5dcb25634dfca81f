use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(?:\.\d+)?").expect("valid number regex"));

static DAY_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("valid date regex"));

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("valid iso date regex"));

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\s*(\d[\d,]*(?:\.\d+)?)").expect("valid amount regex"));

/// Parse the leading number of a control value, the way a form field is read.
///
/// `"150"`, `" 150 "` and `"150abc"` all give 150. Empty or non-numeric input
/// gives `None` so callers can fall back to their default.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let matched = LEADING_NUMBER.find(trimmed)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a non-negative whole count (capacity, guests).
pub fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_number(raw)?;
    if value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value.trunc() as u32)
}

/// Find the first date in a piece of text.
///
/// Server-rendered cards print dates as `d/m/yyyy`; data attributes use ISO
/// `yyyy-mm-dd`. Whichever appears first wins. Impossible dates (31/02/2024)
/// are treated as absent.
pub fn parse_check_in(text: &str) -> Option<NaiveDate> {
    let dmy = DAY_MONTH_YEAR.captures(text).map(|caps| {
        let start = caps.get(0).map_or(0, |m| m.start());
        let date = date_from_parts(&caps[3], &caps[2], &caps[1]);
        (start, date)
    });
    let iso = ISO_DATE.captures(text).map(|caps| {
        let start = caps.get(0).map_or(0, |m| m.start());
        let date = date_from_parts(&caps[1], &caps[2], &caps[3]);
        (start, date)
    });

    match (dmy, iso) {
        (Some((a, first)), Some((b, second))) => {
            if a <= b {
                first.or(second)
            } else {
                second.or(first)
            }
        }
        (Some((_, date)), None) | (None, Some((_, date))) => date,
        (None, None) => None,
    }
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Extract a monetary amount such as `$1,250.50` or `1250`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let caps = AMOUNT.captures(text)?;
    caps[1]
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Trim and lower-case free text; blank input means "no constraint".
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_reads_leading_digits() {
        assert_eq!(parse_number("150"), Some(150.0));
        assert_eq!(parse_number(" 99.5 "), Some(99.5));
        assert_eq!(parse_number("150abc"), Some(150.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_count_rejects_negative() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("2.7"), Some(2));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("muchos"), None);
    }

    #[test]
    fn test_parse_check_in_day_month_year() {
        let date = parse_check_in("Entrada: 10/1/2024 - Salida: 12/1/2024");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn test_parse_check_in_iso() {
        assert_eq!(
            parse_check_in("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_parse_check_in_prefers_first_occurrence() {
        let date = parse_check_in("2024-03-05 reprogramada a 07/04/2024");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_parse_check_in_invalid_calendar_date() {
        assert_eq!(parse_check_in("31/02/2024"), None);
        assert_eq!(parse_check_in("pronto"), None);
    }

    #[test]
    fn test_parse_amount_strips_every_separator() {
        assert_eq!(parse_amount("$1,250,000"), Some(1_250_000.0));
        assert_eq!(parse_amount("Total: $99.90"), Some(99.9));
        assert_eq!(parse_amount("100"), Some(100.0));
        assert_eq!(parse_amount("gratis"), None);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Doble "), Some("doble".to_string()));
        assert_eq!(normalize_text("   "), None);
    }
}
