use crate::Result;
use crate::error::Error;
use serde::Deserialize;
use serde_json::Value;

/// The automation webhooks answer with either a bare object or a
/// one-element array around it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }
}

// Catalog

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Branding {
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CatalogRecord {
    pub services: Option<Vec<Service>>,
    pub branding: Option<Branding>,
}

// Area resolver

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AreaInfo {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
}

// Submission

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AckRecord {
    #[serde(default)]
    pub success: Value,
    #[serde(rename = "projectId", default)]
    pub project_id: Value,
    #[serde(default)]
    pub message: Value,
    #[serde(rename = "googleCalendarId", default)]
    pub calendar_id: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgment {
    pub project_id: Option<String>,
    pub message: String,
    pub calendar_id: Option<String>,
}

const GENERIC_CONFIRMATION: &str = "Your project has been successfully created!";

impl AckRecord {
    /// Accepted when either `success` is truthy or a `projectId` came back,
    /// whatever the HTTP status said.
    pub fn into_acknowledgment(self) -> Result<Acknowledgment> {
        if !is_truthy(&self.success) && !is_truthy(&self.project_id) {
            return Err(Error::NotAcknowledged);
        }
        Ok(Acknowledgment {
            project_id: value_to_id(&self.project_id),
            message: value_to_id(&self.message)
                .unwrap_or_else(|| GENERIC_CONFIRMATION.to_string()),
            calendar_id: value_to_id(&self.calendar_id),
        })
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
