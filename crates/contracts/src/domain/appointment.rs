use serde::{Deserialize, Serialize};

/// Appointment row as returned by `GET /admin/appointments`.
///
/// `datetime` is the backend's ISO-8601 string; it is parsed only where a
/// comparison is needed (see `validation::validate_appointment`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub phone: String,
    pub branch_id: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    pub service_id: String,
    pub datetime: String,
    /// Booking channel: "whatsapp", "web", ...
    pub channel: String,
    /// "pending", "confirmed", "cancelled", "completed".
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Form payload for `POST /admin/appointments`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub phone: String,
    pub branch_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    pub service_id: String,
    pub datetime: String,
    pub channel: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PATCH /admin/appointments/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentStatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentList {
    pub appointments: Vec<Appointment>,
}
