//! Log entry record and its JSON representation.
//!
//! Serialized as `{ time, msg, data, url, ip }`, the shape consumed by the
//! diagnostic page and `relay-cli`.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logged before a request is forwarded upstream.
pub const EVENT_RECEIVED: &str = "request received";
/// Logged once the upstream answered, whatever the status code.
pub const EVENT_COMPLETED: &str = "request completed";
/// Logged when the upstream could not be reached.
pub const EVENT_FAILED: &str = "request failed";

/// One observed proxy event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Creation time, millisecond precision.
    #[serde(with = "iso8601")]
    pub time: DateTime<Utc>,

    /// Short event label.
    #[serde(rename = "msg")]
    pub message: String,

    /// Optional structured payload (status, error text, target URL...).
    pub data: Option<Map<String, Value>>,

    /// The original inbound request URL.
    #[serde(rename = "url")]
    pub request_url: String,

    /// Client address taken from the trusted edge header, or "unknown".
    #[serde(rename = "ip")]
    pub client_ip: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        message: impl Into<String>,
        data: Option<Map<String, Value>>,
        request_url: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> Self {
        Self {
            time: Utc::now().trunc_subsecs(3),
            message: message.into(),
            data,
            request_url: request_url.into(),
            client_ip: client_ip.into(),
        }
    }
}

/// Turn a `json!({...})` literal into an entry payload.
/// Anything other than an object yields no payload.
pub fn fields(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// ISO-8601 UTC timestamps with milliseconds and a `Z` suffix.
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> LogEntry {
        LogEntry::new(
            EVENT_COMPLETED,
            fields(json!({ "status": 404, "url": "http://upstream:5000/foo?x=1" })),
            "http://edge.example/foo?x=1",
            "203.0.113.7",
        )
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["data", "ip", "msg", "time", "url"]);
        assert_eq!(obj["msg"], "request completed");
        assert_eq!(obj["ip"], "203.0.113.7");
        assert_eq!(obj["data"]["status"], 404);
    }

    #[test]
    fn time_is_iso8601_with_millis() {
        let value = serde_json::to_value(sample()).unwrap();
        let time = value["time"].as_str().unwrap();
        // 2024-05-01T12:00:00.123Z
        assert_eq!(time.len(), 24);
        assert!(time.ends_with('Z'));
        assert_eq!(&time[19..20], ".");
    }

    #[test]
    fn missing_data_serializes_as_null() {
        let entry = LogEntry::new(EVENT_RECEIVED, None, "http://edge/", "unknown");
        let value = serde_json::to_value(entry).unwrap();
        assert!(value["data"].is_null());
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let entry = sample();
        let text = serde_json::to_string(&entry).unwrap();
        let back: LogEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn non_object_payload_is_dropped() {
        assert!(fields(json!("plain")).is_none());
        assert!(fields(json!({ "a": 1 })).is_some());
    }
}
