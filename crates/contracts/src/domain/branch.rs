use serde::{Deserialize, Serialize};

/// Clinic branch as returned by `GET /admin/branches`.
///
/// `working_hours` stays a free-form JSON value: the backend stores either a
/// plain string or a per-day schedule object and the dashboard only displays
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub location_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub working_hours: serde_json::Value,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Branch {
    /// Working hours rendered for a table cell. Structured schedules are
    /// summarized rather than dumped as raw JSON.
    pub fn working_hours_label(&self) -> String {
        match &self.working_hours {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(_) => "متاح حسب الطلب".to_string(),
            _ => String::new(),
        }
    }
}

/// Form payload for `POST /admin/branches` and `PUT /admin/branches/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BranchForm {
    pub name: String,
    pub city: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub working_hours: serde_json::Value,
    pub is_active: bool,
}

/// List envelope: the backend wraps rows in `{"branches": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchList {
    pub branches: Vec<Branch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_row() {
        let json = r#"{
            "branches": [{
                "id": "b1",
                "name": "فرع الشمال",
                "city": "الرياض",
                "address": "طريق الملك فهد",
                "location_url": null,
                "phone": "0501234567",
                "working_hours": {"sunday": {"from": "08:00", "to": "01:00"}},
                "is_active": true,
                "created_at": "2024-01-01T00:00:00",
                "updated_at": "2024-01-01T00:00:00"
            }]
        }"#;
        let list: BranchList = serde_json::from_str(json).unwrap();
        assert_eq!(list.branches.len(), 1);
        assert_eq!(list.branches[0].city, "الرياض");
        assert_eq!(list.branches[0].working_hours_label(), "متاح حسب الطلب");
    }

    #[test]
    fn string_working_hours_pass_through() {
        let branch = Branch {
            id: "b1".into(),
            name: "n".into(),
            city: "c".into(),
            address: "a".into(),
            location_url: None,
            phone: None,
            working_hours: serde_json::Value::String("8-17".into()),
            is_active: true,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(branch.working_hours_label(), "8-17");
    }
}
