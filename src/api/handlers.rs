use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use std::sync::Arc;

use crate::catalog::ListingCatalog;
use crate::data_models::SearchCriteria;

use super::error::ApiError;
use super::models::SearchResponse;

/// `POST /api/search`.
///
/// The body is read as JSON whatever the declared content type. A `null` body
/// searches with no constraints.
pub async fn search_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let criteria = parse_criteria(&body)?;

    let results = catalog.search(&criteria);
    tracing::info!(
        pet_type = %criteria.pet_type,
        location = %criteria.location,
        pet_service = %criteria.pet_service,
        date_range = %criteria.date_range,
        count = results.len(),
        "search served"
    );

    Ok(Json(SearchResponse::new(criteria, results)))
}

fn parse_criteria(body: &[u8]) -> Result<SearchCriteria, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedPayload(e.to_string()))?;

    match value {
        Value::Null => Ok(SearchCriteria::default()),
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::MalformedPayload(e.to_string()))
        }
        _ => Err(ApiError::MalformedPayload(
            "expected a JSON object".to_string(),
        )),
    }
}
