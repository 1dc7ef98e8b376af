//! Holidays API Lambda - holiday management for the schedule display.
//!
//! Single POST endpoint dispatching on the `action` field of the JSON body:
//! - `get_holidays` - list every stored holiday
//! - `add_holiday` - insert one holiday with a server-assigned creation time
//! - `delete_holiday` - remove one holiday by id
//!
//! `OPTIONS` requests are answered directly for the CORS preflight; every
//! other non-POST method is rejected with a 405.

use chrono::Utc;
use futures::TryStreamExt;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use shared::http::{empty_response, error_response, json_response, parse_json_body};
use shared::{
    AddHolidayRequest, AddHolidayResponse, ApiAction, DeleteHolidayRequest, DeleteHolidayResponse,
    HolidayDocument, HolidayStore, HolidayView,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    store: HolidayStore,
}

impl AppState {
    fn new() -> Self {
        Self {
            store: HolidayStore::new(),
        }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    match event.method().as_str() {
        "POST" => {}
        "OPTIONS" => return Ok(empty_response(200)?),
        _ => return Ok(error_response(405, "Method not allowed")?),
    }

    let action = match parse_json_body(event.body()).and_then(ApiAction::from_value) {
        Ok(action) => action,
        Err(e) => return Ok(error_response(e.status_code(), e.to_string())?),
    };

    let name = action.name();
    info!("Dispatching action {}", name);

    let result = match action {
        ApiAction::GetHolidays => get_holidays(&state).await,
        ApiAction::AddHoliday(request) => add_holiday(&state, request).await,
        ApiAction::DeleteHoliday(request) => delete_holiday(&state, request).await,
    };

    match result {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Action {} failed: {}", name, e);
            Ok(error_response(e.status_code(), e.to_string())?)
        }
    }
}

/// List every stored holiday as `{id, date, reason}`.
async fn get_holidays(state: &AppState) -> shared::Result<Response<Body>> {
    let holidays = state.store.collection().await?;

    let mut cursor = holidays.find(None, None).await?;
    let mut views: Vec<HolidayView> = Vec::new();
    while let Some(document) = cursor.try_next().await? {
        views.push(HolidayView::from(document));
    }

    json_response(200, &views)
}

/// Insert one holiday with a server-assigned creation timestamp.
async fn add_holiday(
    state: &AppState,
    request: AddHolidayRequest,
) -> shared::Result<Response<Body>> {
    let holidays = state.store.collection().await?;

    let document = HolidayDocument {
        id: None,
        date: request.date,
        reason: request.reason,
        created_at: Utc::now(),
    };

    let inserted = holidays.insert_one(&document, None).await?;
    let id = inserted
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .ok_or_else(|| shared::Error::Internal("insert did not return an ObjectId".to_string()))?;

    json_response(200, &AddHolidayResponse { success: true, id })
}

/// Delete one holiday by id. The id format is checked before any store call.
async fn delete_holiday(
    state: &AppState,
    request: DeleteHolidayRequest,
) -> shared::Result<Response<Body>> {
    let oid = ObjectId::parse_str(&request.id)
        .map_err(|_| shared::Error::Validation("Invalid holiday ID format".to_string()))?;

    let holidays = state.store.collection().await?;
    let result = holidays.delete_one(doc! { "_id": oid }, None).await?;

    if result.deleted_count == 0 {
        return Err(shared::Error::NotFound("Holiday not found".to_string()));
    }

    json_response(200, &DeleteHolidayResponse { success: true })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new());

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
