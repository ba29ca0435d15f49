use anyhow::Context;
use chrono::{DateTime, Utc};

/// Parse an RFC 3339 `--now` override, defaulting to the current time.
pub fn reference_time(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    raw.map_or_else(
        || Ok(Utc::now()),
        |value| {
            DateTime::parse_from_rfc3339(value)
                .map(|parsed| parsed.with_timezone(&Utc))
                .with_context(|| format!("invalid --now '{value}': expected RFC 3339"))
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_offsets_into_utc() {
        let parsed = reference_time(Some("2025-03-01T02:00:00+02:00")).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(reference_time(Some("yesterday")).is_err());
    }
}
