use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookingForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Enter a name of at most 100 characters."))]
    pub name: String,
}

impl BookingForm {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddScheduleRequest {
    #[validate(length(min = 1, max = 200, message = "Enter a title of at most 200 characters."))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveScheduleRequest {
    pub id: i32,
}

/// Errors shown next to the form. Non-field errors are shown above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: Vec<(String, String)>,
    pub non_field: Vec<String>,
}

impl FormErrors {
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field.push(message.into());
    }

    pub fn for_field(&self, field: &str) -> impl Iterator<Item = &str> {
        let field = field.to_string();
        self.fields
            .iter()
            .filter(move |(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect();
        fields.sort();
        Self {
            fields,
            non_field: Vec::new(),
        }
    }
}

/// Everything the booking form page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFormView {
    pub page_title: String,
    pub action: String,
    pub name: String,
    pub errors: FormErrors,
}

impl BookingFormView {
    pub fn new(date: NaiveDate, time_slot: &str) -> Self {
        Self {
            page_title: format!("Booking for {} {}", date.format("%Y-%m-%d"), time_slot),
            action: booking_path(date, time_slot),
            name: String::new(),
            errors: FormErrors::default(),
        }
    }
}

pub fn booking_path(date: NaiveDate, time_slot: &str) -> String {
    format!("/book/{}/{time_slot}/", date.format("%Y/%-m/%-d"))
}

pub fn booking_complete_path(id: i32) -> String {
    format!("/booking_complete/{id}/")
}
