#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use serde_json::{json, Value};

    pub fn employee(id: &str, name: &str) -> Employee {
        Employee {
            employee_id: id.into(),
            full_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: "Engineering".into(),
        }
    }

    pub fn record(id: &str, name: &str, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id.into(),
            employee_name: name.into(),
            date: date.into(),
            status,
        }
    }

    pub fn employee_json(id: &str, name: &str) -> Value {
        json!({
            "employee_id": id,
            "full_name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "department": "Engineering"
        })
    }

    pub fn attendance_json(id: &str, name: &str, date: &str, status: &str) -> Value {
        json!({
            "employee_id": id,
            "employee_name": name,
            "date": date,
            "status": status
        })
    }
}
