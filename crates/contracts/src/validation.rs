//! Client-side form validation.
//!
//! Pure functions returning zero or more field errors; the pages render each
//! error next to the matching input. Nothing here talks to the backend — the
//! server re-validates everything on its side.

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::appointment::AppointmentForm;
use crate::domain::branch::BranchForm;
use crate::domain::doctor::DoctorForm;
use crate::domain::faq::FaqForm;
use crate::domain::service::ServiceForm;

/// A single validation failure, addressed to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Saudi numbers: local 05xxxxxxxx or international 966xxxxxxxxx.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(05|966)[0-9]{8,9}$").expect("phone regex"));

pub fn validate_required(value: &str, field: &str, label: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::new(field, format!("{} مطلوب", label)));
    }
    None
}

pub fn validate_email(email: &str) -> Option<ValidationError> {
    if email.is_empty() {
        return Some(ValidationError::new("email", "البريد الإلكتروني مطلوب"));
    }
    if !EMAIL_RE.is_match(email) {
        return Some(ValidationError::new("email", "البريد الإلكتروني غير صحيح"));
    }
    None
}

pub fn validate_phone(phone: &str) -> Option<ValidationError> {
    if phone.is_empty() {
        return Some(ValidationError::new("phone", "رقم الهاتف مطلوب"));
    }
    let stripped: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&stripped) {
        return Some(ValidationError::new(
            "phone",
            "رقم الهاتف غير صحيح (يجب أن يكون رقم سعودي)",
        ));
    }
    None
}

pub fn validate_length(
    value: &str,
    min: usize,
    max: usize,
    field: &str,
    label: &str,
) -> Option<ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Some(ValidationError::new(
            field,
            format!("{} يجب أن يكون على الأقل {} حرف", label, min),
        ));
    }
    if len > max {
        return Some(ValidationError::new(
            field,
            format!("{} يجب أن يكون على الأكثر {} حرف", label, max),
        ));
    }
    None
}

pub fn validate_branch(form: &BranchForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&form.name, "name", "اسم الفرع"));
    errors.extend(validate_required(&form.city, "city", "المدينة"));
    errors.extend(validate_required(&form.address, "address", "العنوان"));
    if let Some(phone) = form.phone.as_deref().filter(|p| !p.is_empty()) {
        errors.extend(validate_phone(phone));
    }
    errors
}

pub fn validate_doctor(form: &DoctorForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&form.name, "name", "اسم الطبيب"));
    errors.extend(validate_required(&form.specialty, "specialty", "التخصص"));
    errors.extend(validate_required(&form.branch_id, "branch_id", "الفرع"));
    errors
}

pub fn validate_service(form: &ServiceForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&form.name, "name", "اسم الخدمة"));
    if let Some(price) = form.base_price {
        if price < 0.0 {
            errors.push(ValidationError::new(
                "base_price",
                "السعر يجب أن يكون أكبر من أو يساوي صفر",
            ));
        }
    }
    errors
}

pub fn validate_faq(form: &FaqForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&form.question, "question", "السؤال"));
    errors.extend(validate_required(&form.answer, "answer", "الجواب"));
    errors
}

pub fn validate_appointment(form: &AppointmentForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_required(
        &form.patient_name,
        "patient_name",
        "اسم المريض",
    ));
    errors.extend(validate_phone(&form.phone));
    errors.extend(validate_required(&form.branch_id, "branch_id", "الفرع"));
    errors.extend(validate_required(&form.service_id, "service_id", "الخدمة"));
    errors.extend(validate_required(
        &form.datetime,
        "datetime",
        "تاريخ ووقت الموعد",
    ));

    // `datetime-local` inputs are wall-clock times, so the comparison has to
    // be against the local clock as well, not UTC.
    if let Some(when) = parse_local_datetime(&form.datetime) {
        if when <= Local::now().naive_local() {
            errors.push(ValidationError::new(
                "datetime",
                "تاريخ الموعد يجب أن يكون في المستقبل",
            ));
        }
    }

    errors
}

// Accepts both the `datetime-local` input format and full ISO timestamps.
// An unparseable value is left to the presence check above; the future
// check only runs on dates we can actually read.
fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_form() -> BranchForm {
        BranchForm {
            name: "فرع الشمال".into(),
            city: "الرياض".into(),
            address: "طريق الملك فهد".into(),
            phone: Some("0501234567".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_branch_has_no_errors() {
        assert!(validate_branch(&branch_form()).is_empty());
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let errors = validate_branch(&BranchForm::default());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "city", "address"]);
        assert_eq!(errors[0].message, "اسم الفرع مطلوب");
    }

    #[test]
    fn empty_optional_phone_is_not_validated() {
        let mut form = branch_form();
        form.phone = Some(String::new());
        assert!(validate_branch(&form).is_empty());
        form.phone = None;
        assert!(validate_branch(&form).is_empty());
    }

    #[test]
    fn phone_must_match_saudi_pattern() {
        assert!(validate_phone("0501234567").is_none());
        assert!(validate_phone("9665012345678").is_none());
        // whitespace is stripped before matching
        assert!(validate_phone("050 123 4567").is_none());
        assert!(validate_phone("12345").is_some());
        assert!(validate_phone("+49123456789").is_some());
        assert_eq!(validate_phone("").unwrap().message, "رقم الهاتف مطلوب");
    }

    #[test]
    fn email_format() {
        assert!(validate_email("admin@clinic.sa").is_none());
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("a b@clinic.sa").is_some());
        assert!(validate_email("").is_some());
    }

    #[test]
    fn length_bounds() {
        assert!(validate_length("abc", 1, 10, "name", "الاسم").is_none());
        let too_short = validate_length("", 1, 10, "name", "الاسم").unwrap();
        assert!(too_short.message.contains("على الأقل"));
        let too_long = validate_length("abcdefghijk", 1, 10, "name", "الاسم").unwrap();
        assert!(too_long.message.contains("على الأكثر"));
    }

    #[test]
    fn negative_service_price_is_rejected() {
        let form = ServiceForm {
            name: "تنظيف الأسنان".into(),
            base_price: Some(-1.0),
            ..Default::default()
        };
        let errors = validate_service(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "base_price");
    }

    fn appointment_form(datetime: &str) -> AppointmentForm {
        AppointmentForm {
            patient_name: "محمد".into(),
            phone: "0501234567".into(),
            branch_id: "b1".into(),
            service_id: "s1".into(),
            datetime: datetime.into(),
            channel: "whatsapp".into(),
            status: "pending".into(),
            ..Default::default()
        }
    }

    #[test]
    fn appointment_must_be_in_the_future() {
        assert!(validate_appointment(&appointment_form("2099-01-01T10:00")).is_empty());

        let errors = validate_appointment(&appointment_form("2020-01-01T10:00"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "تاريخ الموعد يجب أن يكون في المستقبل");
    }

    #[test]
    fn future_check_runs_on_the_local_clock() {
        // An hour ago in local wall-clock time must be rejected in every
        // timezone, including those ahead of UTC.
        let past = (Local::now() - chrono::Duration::hours(1))
            .naive_local()
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        let errors = validate_appointment(&appointment_form(&past));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "datetime");

        let soon = (Local::now() + chrono::Duration::hours(1))
            .naive_local()
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        assert!(validate_appointment(&appointment_form(&soon)).is_empty());
    }

    #[test]
    fn unparseable_datetime_skips_future_check() {
        assert!(validate_appointment(&appointment_form("غير صالح")).is_empty());
    }
}
