use serde::{Deserialize, Serialize};

/// Doctor row as returned by `GET /admin/doctors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub branch_id: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Form payload for `POST /admin/doctors` and `PUT /admin/doctors/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DoctorForm {
    pub name: String,
    pub specialty: String,
    pub branch_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorList {
    pub doctors: Vec<Doctor>,
}
