//! Shared data models.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Error, Result};

/// A holiday document as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub date: String,
    pub reason: String,
    #[serde(
        rename = "createdAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

/// The holiday shape returned to clients.
#[derive(Debug, Serialize)]
pub struct HolidayView {
    pub id: String,
    pub date: String,
    pub reason: String,
}

impl From<HolidayDocument> for HolidayView {
    fn from(document: HolidayDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            date: document.date,
            reason: document.reason,
        }
    }
}

/// Add holiday request.
#[derive(Debug, Deserialize, Validate)]
pub struct AddHolidayRequest {
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub reason: String,
}

/// Delete holiday request.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteHolidayRequest {
    #[validate(length(min = 1))]
    pub id: String,
}

/// Add holiday response.
#[derive(Debug, Serialize)]
pub struct AddHolidayResponse {
    pub success: bool,
    pub id: String,
}

/// Delete holiday response.
#[derive(Debug, Serialize)]
pub struct DeleteHolidayResponse {
    pub success: bool,
}

/// The three operations the endpoint dispatches on, parsed and validated
/// from the request body before any handler branch runs.
#[derive(Debug)]
pub enum ApiAction {
    GetHolidays,
    AddHoliday(AddHolidayRequest),
    DeleteHoliday(DeleteHolidayRequest),
}

impl ApiAction {
    /// Action name used for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            ApiAction::GetHolidays => "get_holidays",
            ApiAction::AddHoliday(_) => "add_holiday",
            ApiAction::DeleteHoliday(_) => "delete_holiday",
        }
    }

    /// Validate a parsed request body into an action.
    ///
    /// The `action` discriminator must be a non-empty string; the remaining
    /// fields are validated per action so each branch of the handler receives
    /// an already-checked structure.
    pub fn from_value(body: serde_json::Value) -> Result<Self> {
        let action = match body.get("action").and_then(serde_json::Value::as_str) {
            Some(action) if !action.is_empty() => action.to_string(),
            _ => return Err(Error::Validation("Action parameter is required".to_string())),
        };

        match action.as_str() {
            "get_holidays" => Ok(ApiAction::GetHolidays),
            "add_holiday" => {
                let request: AddHolidayRequest = serde_json::from_value(body)
                    .map_err(|_| Error::Validation("Date and reason are required".to_string()))?;
                request
                    .validate()
                    .map_err(|_| Error::Validation("Date and reason are required".to_string()))?;
                Ok(ApiAction::AddHoliday(request))
            }
            "delete_holiday" => {
                let request: DeleteHolidayRequest = serde_json::from_value(body)
                    .map_err(|_| Error::Validation("Holiday ID is required".to_string()))?;
                request
                    .validate()
                    .map_err(|_| Error::Validation("Holiday ID is required".to_string()))?;
                Ok(ApiAction::DeleteHoliday(request))
            }
            other => Err(Error::Validation(format!("Invalid action: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_action_is_rejected() {
        let error = ApiAction::from_value(serde_json::json!({})).unwrap_err();
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.to_string(), "Action parameter is required");
    }

    #[test]
    fn test_empty_or_non_string_action_is_rejected() {
        let error = ApiAction::from_value(serde_json::json!({"action": ""})).unwrap_err();
        assert_eq!(error.to_string(), "Action parameter is required");

        let error = ApiAction::from_value(serde_json::json!({"action": 42})).unwrap_err();
        assert_eq!(error.to_string(), "Action parameter is required");
    }

    #[test]
    fn test_unknown_action_echoes_literal() {
        let error = ApiAction::from_value(serde_json::json!({"action": "foo"})).unwrap_err();
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.to_string(), "Invalid action: foo");
    }

    #[test]
    fn test_get_holidays_needs_no_fields() {
        let action = ApiAction::from_value(serde_json::json!({"action": "get_holidays"})).unwrap();
        assert!(matches!(action, ApiAction::GetHolidays));
        assert_eq!(action.name(), "get_holidays");
    }

    #[test]
    fn test_add_holiday_parses_fields() {
        let action = ApiAction::from_value(serde_json::json!({
            "action": "add_holiday",
            "date": "2025-01-01",
            "reason": "New Year",
        }))
        .unwrap();

        match action {
            ApiAction::AddHoliday(request) => {
                assert_eq!(request.date, "2025-01-01");
                assert_eq!(request.reason, "New Year");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_add_holiday_requires_both_fields() {
        let missing = ApiAction::from_value(serde_json::json!({
            "action": "add_holiday",
            "date": "2025-01-01",
        }))
        .unwrap_err();
        assert_eq!(missing.to_string(), "Date and reason are required");

        let empty = ApiAction::from_value(serde_json::json!({
            "action": "add_holiday",
            "date": "",
            "reason": "New Year",
        }))
        .unwrap_err();
        assert_eq!(empty.to_string(), "Date and reason are required");
    }

    #[test]
    fn test_delete_holiday_requires_id() {
        let action = ApiAction::from_value(serde_json::json!({
            "action": "delete_holiday",
            "id": "507f1f77bcf86cd799439011",
        }))
        .unwrap();
        match action {
            ApiAction::DeleteHoliday(request) => {
                assert_eq!(request.id, "507f1f77bcf86cd799439011");
            }
            other => panic!("unexpected action: {:?}", other),
        }

        let missing = ApiAction::from_value(serde_json::json!({"action": "delete_holiday"}))
            .unwrap_err();
        assert_eq!(missing.to_string(), "Holiday ID is required");

        let empty = ApiAction::from_value(serde_json::json!({
            "action": "delete_holiday",
            "id": "",
        }))
        .unwrap_err();
        assert_eq!(empty.to_string(), "Holiday ID is required");
    }

    #[test]
    fn test_holiday_view_renders_hex_id() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let view = HolidayView::from(HolidayDocument {
            id: Some(oid),
            date: "2025-01-01".to_string(),
            reason: "New Year".to_string(),
            created_at: Utc::now(),
        });

        assert_eq!(view.id, "507f1f77bcf86cd799439011");
        assert_eq!(view.date, "2025-01-01");
        assert_eq!(view.reason, "New Year");
    }

    #[test]
    fn test_response_shapes() {
        let added = serde_json::to_value(AddHolidayResponse {
            success: true,
            id: "507f1f77bcf86cd799439011".to_string(),
        })
        .unwrap();
        assert_eq!(
            added,
            serde_json::json!({"success": true, "id": "507f1f77bcf86cd799439011"})
        );

        let deleted = serde_json::to_value(DeleteHolidayResponse { success: true }).unwrap();
        assert_eq!(deleted, serde_json::json!({"success": true}));
    }
}
