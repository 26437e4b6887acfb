//! `/create`, `/getone` and `/getall` handlers.
//!
//! Bodies are read as raw bytes and decoded here so that any decoding problem
//! (including a missing Content-Type) is answered with the JSON envelope.
//! Missing fields fall back to zero values and are then caught by validation.

use axum::{body::Bytes, extract::State, Json};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

use service::advertisement::{AdvertisementView, NewAdvertisement, PageEntry, SortKey};
use service::pagination::PageWindow;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateRequest {
    pub name: String,
    pub description: String,
    pub links: Vec<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub id: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetOneRequest {
    pub id: i64,
    pub fields: bool,
}

#[derive(Debug, Serialize)]
pub struct GetOneResponse {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub mainlink: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alllinks: Option<Vec<String>>,
}

impl From<AdvertisementView> for GetOneResponse {
    fn from(v: AdvertisementView) -> Self {
        let (description, alllinks) = match v.details {
            Some(d) => (Some(d.description), Some(d.all_links)),
            None => (None, None),
        };
        Self { name: v.name, price: v.price, mainlink: v.main_link, description, alllinks }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAllRequest {
    pub page: i64,
    pub sort: String,
}

#[derive(Debug, Serialize)]
pub struct PageItem {
    pub name: String,
    pub link: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<PageEntry> for PageItem {
    fn from(e: PageEntry) -> Self {
        Self { name: e.name, link: e.link, price: e.price }
    }
}

#[derive(Debug, Serialize)]
pub struct GetAllResponse {
    pub advertisements: Vec<PageItem>,
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "request body rejected");
        ApiError::invalid_json()
    })
}

/// Create an advertisement; the first link becomes the main photo.
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Json<CreateResponse>, ApiError> {
    let req: CreateRequest = decode(&body)?;
    let input = NewAdvertisement {
        name: req.name,
        description: req.description,
        links: req.links,
        price: req.price,
    }
    .validate()
    .map_err(|e| ApiError::from_service(e, state.strict_not_found))?;

    let id = state
        .ads
        .create(&input)
        .await
        .map_err(|e| ApiError::from_service(e, state.strict_not_found))?;
    info!(id, links = input.links.len(), "advertisement_created");
    Ok(Json(CreateResponse { id }))
}

/// Fetch one advertisement; `fields: true` adds description and every link.
pub async fn get_one(State(state): State<AppState>, body: Bytes) -> Result<Json<GetOneResponse>, ApiError> {
    let req: GetOneRequest = decode(&body)?;
    if req.id <= 0 {
        return Err(ApiError::invalid_params("id must be a positive integer"));
    }

    let view = state
        .ads
        .get_one(req.id, req.fields)
        .await
        .map_err(|e| ApiError::from_service(e, state.strict_not_found))?;
    Ok(Json(view.into()))
}

/// List the advertisements whose ids fall in `[page, page + 9]`.
pub async fn get_all(State(state): State<AppState>, body: Bytes) -> Result<Json<GetAllResponse>, ApiError> {
    let req: GetAllRequest = decode(&body)?;
    let window = PageWindow::new(req.page).map_err(|e| ApiError::from_service(e, state.strict_not_found))?;
    let sort: SortKey = req
        .sort
        .parse()
        .map_err(|e| ApiError::from_service(e, state.strict_not_found))?;

    let entries = state
        .ads
        .get_page(window, sort)
        .await
        .map_err(|e| ApiError::from_service(e, state.strict_not_found))?;
    Ok(Json(GetAllResponse { advertisements: entries.into_iter().map(PageItem::from).collect() }))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::advertisement::AdvertisementDetails;

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let req: CreateRequest = decode(b"{}").unwrap();
        assert!(req.name.is_empty() && req.links.is_empty());
        assert_eq!(req.price, Decimal::ZERO);

        let req: GetOneRequest = decode(br#"{"id": 4}"#).unwrap();
        assert_eq!(req.id, 4);
        assert!(!req.fields);
    }

    #[test]
    fn integer_and_float_prices_decode() {
        let req: CreateRequest = decode(br#"{"price": 100}"#).unwrap();
        assert_eq!(req.price, Decimal::from(100));
        let req: CreateRequest = decode(br#"{"price": 12.5}"#).unwrap();
        assert_eq!(req.price, Decimal::new(125, 1));
    }

    #[test]
    fn wrong_types_are_invalid_json() {
        assert!(decode::<GetOneRequest>(br#"{"id": "one"}"#).is_err());
        assert!(decode::<GetAllRequest>(b"").is_err());
    }

    #[test]
    fn keys_are_case_sensitive_and_trailing_data_rejected() {
        let req: GetOneRequest = decode(br#"{"ID": 1}"#).unwrap();
        assert_eq!(req.id, 0);
        assert!(decode::<GetOneRequest>(br#"{"id": 1} {"id": 2}"#).is_err());
    }

    #[test]
    fn short_view_omits_detail_keys() {
        let short = GetOneResponse::from(AdvertisementView {
            name: "Bike".into(),
            price: Decimal::from(100),
            main_link: "a.jpg".into(),
            details: None,
        });
        let v = serde_json::to_value(short).unwrap();
        assert_eq!(v, serde_json::json!({"name": "Bike", "price": 100.0, "mainlink": "a.jpg"}));

        let full = GetOneResponse::from(AdvertisementView {
            name: "Bike".into(),
            price: Decimal::from(100),
            main_link: "a.jpg".into(),
            details: Some(AdvertisementDetails {
                description: "Red bike".into(),
                all_links: vec!["a.jpg".into(), "b.jpg".into()],
            }),
        });
        let v = serde_json::to_value(full).unwrap();
        assert_eq!(v["alllinks"], serde_json::json!(["a.jpg", "b.jpg"]));
        assert_eq!(v["description"], "Red bike");
    }
}
