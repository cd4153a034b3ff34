//! Row types returned by the admin API.
//!
//! All fields are deserialized leniently: the service may send ids as
//! numbers, timestamps as `null`, or omit columns entirely. Missing text
//! becomes an empty string and missing counts become zero, so one odd row
//! never fails a whole view.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a string, number, bool or null and render it as text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_text).unwrap_or_default())
}

/// Accept a number or numeric string; anything else counts as zero.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_f64)
        .map(|n| if n.is_sign_negative() { 0 } else { n.round() as u64 })
        .unwrap_or(0))
}

/// Plain-text rendering of a JSON scalar. Null becomes empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Numeric reading of a JSON scalar, parsing numeric strings.
pub fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_start: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_end: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub log_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub log_timestamp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub log_content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub crash_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub crash_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_start: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_end: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub provider: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub exception_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub faulting_module: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl CrashRecord {
    /// `exception • module`, or "Unknown reason" when both are blank.
    pub fn reason(&self) -> String {
        let parts: Vec<&str> = [self.exception_code.as_str(), self.faulting_module.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            "Unknown reason".to_string()
        } else {
            parts.join(" • ")
        }
    }

    /// One-line list label: `ID <id> • <time>`.
    pub fn headline(&self) -> String {
        format!("ID {} • {}", self.crash_id, self.crash_time)
    }

    /// Full field listing for the detail panel.
    pub fn detail_text(&self) -> String {
        format!(
            "Crash ID: {}\nUser: {}\nCrash Time: {}\nSession Start: {}\nSession End: {}\nProvider: {}\nEvent ID: {}\nException Code: {}\nFaulting Module: {}\n\nMessage:\n{}",
            self.crash_id,
            self.user_id,
            self.crash_time,
            self.session_start,
            self.session_end,
            self.provider,
            self.event_id,
            self.exception_code,
            self.faulting_module,
            self.message
        )
    }
}

/// Server-side aggregate of crashes sharing
/// `(exception_code, faulting_module, event_id)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrashSignature {
    #[serde(default, deserialize_with = "lenient_string")]
    pub signature: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_seen: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub example: String,
}

/// Row of the "Latest Crashes" overview table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrashBrief {
    #[serde(default, deserialize_with = "lenient_string")]
    pub crash_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub crash_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub exception_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub faulting_module: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_id: String,
}

/// `/admin/overview` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default, deserialize_with = "lenient_count")]
    pub users_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub sessions_7d: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub crashes_7d: u64,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub latest_sessions: Vec<SessionRecord>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub latest_crashes: Vec<CrashBrief>,
}

/// A null list is an empty list.
fn lenient_rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_crash_record_tolerates_numbers_and_nulls() {
        let crash: CrashRecord = serde_json::from_value(json!({
            "crash_id": 42,
            "user_id": "alice",
            "crash_time": "2025-01-02 10:00:00",
            "event_id": 1000,
            "exception_code": null,
            "faulting_module": "app.dll"
        }))
        .unwrap();

        assert_eq!(crash.crash_id, "42");
        assert_eq!(crash.event_id, "1000");
        assert_eq!(crash.exception_code, "");
        assert_eq!(crash.provider, "");
        assert_eq!(crash.reason(), "app.dll");
        assert_eq!(crash.headline(), "ID 42 • 2025-01-02 10:00:00");
    }

    #[test]
    fn test_crash_reason_fallback() {
        let crash = CrashRecord::default();
        assert_eq!(crash.reason(), "Unknown reason");

        let both = CrashRecord {
            exception_code: "0xC0000005".to_string(),
            faulting_module: "app.dll".to_string(),
            ..Default::default()
        };
        assert_eq!(both.reason(), "0xC0000005 • app.dll");
    }

    #[test]
    fn test_crash_detail_text_lists_every_field() {
        let crash = CrashRecord {
            crash_id: "7".to_string(),
            message: "access violation".to_string(),
            provider: "Application Error".to_string(),
            ..Default::default()
        };
        let text = crash.detail_text();
        assert!(text.starts_with("Crash ID: 7\nUser: \n"));
        assert!(text.contains("Provider: Application Error"));
        assert!(text.ends_with("Message:\naccess violation"));
    }

    #[test]
    fn test_signature_count_coercion() {
        let sigs: Vec<CrashSignature> = serde_json::from_value(json!([
            {"signature": "a | b | 1", "count": "3", "last_seen": "x"},
            {"signature": "c | d | 2"},
            {"signature": "e | f | 3", "count": -4}
        ]))
        .unwrap();
        assert_eq!(sigs[0].count, 3);
        assert_eq!(sigs[1].count, 0);
        assert_eq!(sigs[2].count, 0);
    }

    #[test]
    fn test_overview_defaults() {
        let overview: Overview =
            serde_json::from_value(json!({"users_count": 5, "latest_sessions": null})).unwrap();
        assert_eq!(overview.users_count, 5);
        assert_eq!(overview.sessions_7d, 0);
        assert!(overview.latest_sessions.is_empty());
        assert!(overview.latest_crashes.is_empty());
    }
}
