/// Serde helpers for the timestamp format used by the Clash of Clans API,
/// e.g. `20230427T070000.000Z`. Standard RFC 3339 parsing rejects it because
/// the date and time components carry no separators.
pub mod coc_time {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%Y%m%dT%H%M%S%.3f";

    /// Parses an API timestamp into a UTC datetime. Timestamps are normally
    /// suffixed with `Z`; a numeric offset is accepted as well.
    pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match s.strip_suffix('Z') {
            Some(naive) => {
                NaiveDateTime::parse_from_str(naive, FORMAT).map(|dt| dt.and_utc())
            }
            None => DateTime::parse_from_str(s, "%Y%m%dT%H%M%S%.3f%:z")
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    pub fn required<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::coc_time;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_utc_timestamp() {
        let dt = coc_time::parse("20230427T070000.000Z").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 4);
        assert_eq!(dt.day(), 27);
        assert_eq!(dt.hour(), 7);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn parses_timestamp_with_offset() {
        let dt = coc_time::parse("20230427T070000.000+02:00").unwrap();
        assert_eq!(dt.hour(), 5, "offset should be normalized to UTC");
    }

    #[test]
    fn rejects_rfc3339_timestamp() {
        assert!(coc_time::parse("2023-04-27T07:00:00Z").is_err());
    }
}
