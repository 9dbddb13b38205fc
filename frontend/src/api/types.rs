use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// Parses the value of a status `<select>`; an empty value means "not chosen".
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim() {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    /// As sent by the backend, normally `YYYY-MM-DD`.
    pub date: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: u64,
    #[serde(default)]
    pub total_present_today: u64,
    #[serde(default)]
    pub total_absent_today: u64,
}

/// Body shape of a failed backend response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Flattens `detail` into a single message. Validation failures arrive as a
    /// list of `{ "msg": ... }` entries and are joined with `; `.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text.clone()),
                        Value::Object(map) => map
                            .get("msg")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                        _ => None,
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            detail: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    /// Builds the error for a non-2xx response, keeping the backend `detail`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message());
        Self {
            error: detail
                .clone()
                .unwrap_or_else(|| format!("Request failed with status {status}")),
            code: "HTTP_ERROR".to_string(),
            status: Some(status),
            detail,
        }
    }

    /// Message shown to the user: the backend `detail` when it sent one.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail.clone().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attendance_record_keeps_non_canonical_dates() {
        let raw = json!({
            "employee_id": "E1",
            "employee_name": "Ann",
            "date": "2024-01-02T00:00:00",
            "status": "Absent"
        });
        let record: AttendanceRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.date, "2024-01-02T00:00:00");
    }

    #[test]
    fn attendance_record_deserializes_backend_payload() {
        let raw = json!({
            "id": "rec-1",
            "employee_id": "E1",
            "employee_name": "Ann",
            "date": "2024-01-01",
            "status": "Present"
        });
        let record: AttendanceRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.employee_id, "E1");
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.status, AttendanceStatus::Present);
    }

    #[test]
    fn mark_attendance_request_serializes_iso_date_and_status() {
        let request = MarkAttendanceRequest {
            employee_id: "E1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            status: AttendanceStatus::Absent,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "employee_id": "E1", "date": "2024-03-09", "status": "Absent" })
        );
    }

    #[test]
    fn dashboard_stats_default_missing_counts_to_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({ "total_employees": 4 })).unwrap();
        assert_eq!(stats.total_employees, 4);
        assert_eq!(stats.total_present_today, 0);
        assert_eq!(stats.total_absent_today, 0);
    }

    #[test]
    fn status_from_input_rejects_empty_and_unknown() {
        assert_eq!(AttendanceStatus::from_input("Present"), Some(AttendanceStatus::Present));
        assert_eq!(AttendanceStatus::from_input(" Absent "), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::from_input(""), None);
        assert_eq!(AttendanceStatus::from_input("Late"), None);
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.detail.is_none());

        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");
        assert_eq!(ApiError::decode("bad json").code, "DECODE_ERROR");
        assert_eq!(format!("{}", ApiError::unknown("boom")), "boom");
    }

    #[test]
    fn from_status_keeps_string_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"Employee with this email already exists"}"#);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.code, "HTTP_ERROR");
        assert_eq!(
            err.detail_or("Failed to add employee"),
            "Employee with this email already exists"
        );
    }

    #[test]
    fn from_status_joins_validation_entries() {
        let body = json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "value is not a valid email address" },
                { "loc": ["body", "full_name"], "msg": "field required" }
            ]
        })
        .to_string();
        let err = ApiError::from_status(422, &body);
        assert_eq!(
            err.detail.as_deref(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn from_status_without_detail_falls_back() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert!(err.detail.is_none());
        assert_eq!(err.error, "Request failed with status 500");
        assert_eq!(err.detail_or("Failed to mark attendance"), "Failed to mark attendance");
    }
}
