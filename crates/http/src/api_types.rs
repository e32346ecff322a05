//! Request bodies (Deserialize) and their conversion into domain inputs.

use axum::body::Bytes;
use leadline_core::{LeadPatch, NewLead};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::api_error::ApiError;

/// Parse a JSON body, treating an empty body as `T::default()`.
/// Malformed JSON is a 400 with the same `{"error": ...}` shape as every other failure.
pub fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

fn parse_enum<T: std::str::FromStr>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T::Err: std::fmt::Display,
{
    value.map(|v| v.parse::<T>()).transpose().map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub stage: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
    pub score: Option<i64>,
    pub amount: Option<f64>,
    pub assigned_to: Option<String>,
}

impl CreateLeadRequest {
    pub fn into_new_lead(self) -> Result<NewLead, ApiError> {
        Ok(NewLead {
            source: parse_enum(self.source.as_deref())?,
            status: parse_enum(self.status.as_deref())?,
            stage: parse_enum(self.stage.as_deref())?,
            priority: parse_enum(self.priority.as_deref())?,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            title: self.title,
            notes: self.notes,
            score: self.score,
            amount: self.amount,
            assigned_to: self.assigned_to,
        })
    }
}

/// Partial update. Unknown fields are ignored; `null` clears a text field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLeadRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub stage: Option<String>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    pub score: Option<i64>,
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<String>>,
}

impl UpdateLeadRequest {
    pub fn into_patch(self) -> Result<LeadPatch, ApiError> {
        Ok(LeadPatch {
            source: parse_enum(self.source.as_deref())?,
            status: parse_enum(self.status.as_deref())?,
            stage: parse_enum(self.stage.as_deref())?,
            priority: parse_enum(self.priority.as_deref())?,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            title: self.title,
            notes: self.notes,
            score: self.score,
            amount: self.amount,
            assigned_to: self.assigned_to,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(rename = "leadId", alias = "lead_id")]
    pub lead_id: Option<String>,
}
