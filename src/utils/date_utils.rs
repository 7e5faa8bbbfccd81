//! 날짜 파싱/포맷 유틸리티
//!
//! 요청의 날짜 문자열(RFC 3339 또는 `YYYY-MM-DD`)을 BSON `DateTime`으로 변환하고,
//! 응답에서는 RFC 3339 문자열로 출력합니다.

use chrono::{DateTime as ChronoDateTime, NaiveDate, SecondsFormat, Utc};
use mongodb::bson::DateTime;

/// 날짜 문자열을 BSON DateTime으로 변환합니다.
///
/// 지원 형식:
/// - RFC 3339 (`2020-01-15T00:00:00Z`, `2020-01-15T09:00:00+09:00`)
/// - 날짜만 (`2020-01-15`, UTC 자정으로 해석)
///
/// 해석할 수 없으면 `None`을 반환합니다.
pub fn parse_date(value: &str) -> Option<DateTime> {
    let value = value.trim();

    if let Ok(parsed) = ChronoDateTime::parse_from_rfc3339(value) {
        return Some(DateTime::from_millis(parsed.with_timezone(&Utc).timestamp_millis()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_millis(naive.and_utc().timestamp_millis()))
}

/// BSON DateTime을 밀리초 정밀도의 RFC 3339 문자열(UTC)로 변환합니다.
pub fn format_date(date: &DateTime) -> String {
    ChronoDateTime::<Utc>::from_timestamp_millis(date.timestamp_millis())
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| date.timestamp_millis().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date("2020-01-15").unwrap();
        assert_eq!(format_date(&date), "2020-01-15T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let date = parse_date("2020-01-15T09:00:00+09:00").unwrap();
        assert_eq!(format_date(&date), "2020-01-15T00:00:00.000Z");
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_date("15/01/2020").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("2020-13-01").is_none());
    }
}
