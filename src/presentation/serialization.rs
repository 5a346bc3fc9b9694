//! Lenient deserializers for the shapes the USPTO API actually sends
//!
//! The API is not consistent about types: dates come as plain dates or full
//! timestamps, numbers sometimes arrive as strings, and empty strings stand in
//! for missing values.

/// `Option<NaiveDate>` from `"YYYY-MM-DD"`, an RFC 3339 timestamp, `""` or `null`
pub mod date_opt {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serializes as `"YYYY-MM-DD"` or `null`
    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes a date, keeping only the date part of timestamps
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_date(s).map(Some).map_err(de::Error::custom),
        }
    }

    pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, String> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(ts.date_naive());
        }
        // Timestamps without offset, e.g. "2024-05-01T10:00:00" or "2024-05-01T10:00:00.123"
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|ts| ts.date())
            .map_err(|_| format!("invalid date: {s}"))
    }
}

/// `DateTime<FixedOffset>` from RFC 3339, accepting a trailing `Z`
pub mod datetime {
    use chrono::{DateTime, FixedOffset, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serializes as RFC 3339
    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserializes an RFC 3339 timestamp; a bare date is read as midnight UTC
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let s = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(ts);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {s}")))
    }
}

/// `Option<u32>` from a JSON number, a numeric string, `""` or `null`
pub mod number_as_u32_opt {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use serde_json::Value;

    /// Serializes as a plain number or `null`
    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_u32(*v),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes from either representation
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid number: {n}"))),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid number: {s}"))),
            other => Err(de::Error::custom(format!("unexpected value: {other}"))),
        }
    }
}

/// `Option<String>` from a string or a number; `""` is `None`
pub mod string_or_number_opt {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use serde_json::Value;

    /// Serializes as a string or `null`
    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(v),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes from either representation
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(de::Error::custom(format!("unexpected value: {other}"))),
        }
    }
}

/// `Option<bool>` from a JSON bool or the `"Y"`/`"N"`/`"true"`/`"false"` strings
pub mod indicator_opt {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use serde_json::Value;

    /// Serializes as a JSON bool or `null`
    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_bool(*v),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes from either representation
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(b)),
            Value::String(s) => match s.trim().to_ascii_uppercase().as_str() {
                "" => Ok(None),
                "Y" | "YES" | "TRUE" | "1" => Ok(Some(true)),
                "N" | "NO" | "FALSE" | "0" => Ok(Some(false)),
                _ => Err(de::Error::custom(format!("invalid indicator: {s}"))),
            },
            other => Err(de::Error::custom(format!("unexpected value: {other}"))),
        }
    }
}

/// `u32` counts where the API may omit the field or send `null`
pub mod count {
    use serde::{Deserialize, Deserializer};

    /// Deserializes, mapping `null` to zero
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(super::number_as_u32_opt::deserialize(deserializer)?.unwrap_or(0))
    }
}

/// `Vec<T>` where the API may send `null` instead of an empty bag
pub mod null_as_empty {
    use serde::{Deserialize, Deserializer};

    /// Deserializes, mapping `null` to an empty vector
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// `String` where the API may send `null` instead of an empty string
pub mod null_as_empty_string {
    use serde::{Deserialize, Deserializer};

    /// Deserializes, mapping `null` to an empty string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Nested records where the API may send `null` instead of an object
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    /// Deserializes, mapping `null` to `T::default()`
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
