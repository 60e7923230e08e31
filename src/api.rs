//! HTTP client for the remote directory backend.
//!
//! Every request carries a `language` header so the backend localizes
//! names and content. Errors are flattened to display strings; callers
//! decide whether a failure is surfaced (search results) or only logged
//! (dependent dropdown lists).

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::filters::state::{FilterItem, FilterState};
use crate::i18n::Language;
use crate::schedule::WorkWeek;

const API_BASE: &str = "https://back.factoriesguide.com";
const IMAGE_BASE: &str = "https://back.factoriesguide.com/storage/";

/// Join a backend storage path onto the image host.
pub fn image_url(path: &str) -> String {
    format!("{IMAGE_BASE}{path}")
}

// -- Response types --

/// One image in a factory gallery or product set. The backend sends more
/// bookkeeping fields; only the ones the UI needs are kept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleryImage {
    pub id: u32,
    pub url: String,
}

/// An advertisement placement (top banner slide or left-column ad).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ad {
    pub id: u32,
    pub image: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdPayload {
    #[serde(default)]
    pub topbanner: Vec<Ad>,
    #[serde(default)]
    pub leftad: Option<Ad>,
}

/// A factory record as returned by the results search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Factory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub services: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "workDays", default)]
    pub work_days: Option<WorkWeek>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub products: Vec<GalleryImage>,
    #[serde(default)]
    pub location_link: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub franchise_image: Option<String>,
}

/// Normalized search response: factories plus ad placements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub factories: Vec<Factory>,
    pub top_ads: Vec<Ad>,
    pub left_ad: Option<Ad>,
}

// The backend wraps factories either directly or under a `data` envelope
// depending on the route version; accept both.
#[derive(Debug, Default, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    data: Option<RawFactoryList>,
    #[serde(default)]
    factories: Option<Vec<Factory>>,
    #[serde(default)]
    ads: Option<AdPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFactoryList {
    #[serde(default)]
    factories: Vec<Factory>,
}

#[derive(Debug, Default, Deserialize)]
struct StaticContent {
    #[serde(default)]
    content: String,
}

// -- Request helpers --

async fn get_json<T: DeserializeOwned>(url: &str, language: Language) -> Result<T, String> {
    let response = Request::get(url)
        .header("language", language.code())
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("unexpected response shape: {e}"))
}

// -- Lookup lists for the filter cascade --

pub async fn fetch_countries(language: Language) -> Result<Vec<FilterItem>, String> {
    get_json(&format!("{API_BASE}/api/countries"), language).await
}

pub async fn fetch_cities(language: Language, country_id: u32) -> Result<Vec<FilterItem>, String> {
    get_json(
        &format!("{API_BASE}/api/cities?country={country_id}"),
        language,
    )
    .await
}

pub async fn fetch_categories(language: Language) -> Result<Vec<FilterItem>, String> {
    get_json(&format!("{API_BASE}/api/categories"), language).await
}

pub async fn fetch_specialties(
    language: Language,
    category_id: u32,
) -> Result<Vec<FilterItem>, String> {
    // Endpoint spelling matches the backend route.
    get_json(
        &format!("{API_BASE}/api/specilaity?category={category_id}"),
        language,
    )
    .await
}

// -- Results search --

/// Map the resolved filter state onto named query parameters. The backend
/// filters by display name, not id.
fn search_query(filters: &FilterState, franchise: bool) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if franchise {
        params.push(("franchise", "1".to_string()));
    }
    let slots = [
        ("country", &filters.country),
        ("city", &filters.city),
        ("category", &filters.category),
        ("specialty", &filters.specialty),
    ];
    for (key, slot) in slots {
        if let Some(item) = slot {
            params.push((key, item.name.clone()));
        }
    }
    if !filters.search.is_empty() {
        params.push(("search", filters.search.clone()));
    }

    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Fetch factories matching `filters`, along with ad placements.
pub async fn search_factories(
    language: Language,
    filters: &FilterState,
    franchise: bool,
) -> Result<SearchResults, String> {
    let query = search_query(filters, franchise);
    let url = if query.is_empty() {
        format!("{API_BASE}/result")
    } else {
        format!("{API_BASE}/result?{query}")
    };

    let raw: RawSearchResponse = get_json(&url, language).await?;
    let factories = match raw.data {
        Some(data) => data.factories,
        None => raw.factories.unwrap_or_default(),
    };
    let ads = raw.ads.unwrap_or_default();
    Ok(SearchResults {
        factories,
        top_ads: ads.topbanner,
        left_ad: ads.leftad,
    })
}

// -- Static informational pages --

/// Fetch the HTML body of a static page (terms, privacy, help, ...).
pub async fn fetch_static_content(language: Language, key: &str) -> Result<String, String> {
    let url = format!("{API_BASE}/static-content?key={key}");
    let body: StaticContent = get_json(&url, language).await?;
    Ok(body.content)
}

// -- Form submissions --

/// A visit-booking request for one factory.
pub struct BookingRequest {
    pub factory_id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub file: Option<web_sys::File>,
}

/// Submit a visit-booking request as multipart form data.
pub async fn submit_booking(request: &BookingRequest) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_string())?;
    let set = |key: &str, value: &str| {
        let _ = form.append_with_str(key, value);
    };
    set("recipientable_id", &request.factory_id.to_string());
    set("name", &request.name);
    set("phone", &request.phone);
    set("email", &request.email);
    set("message", &request.message);
    if let Some(file) = &request.file {
        let _ = form.append_with_blob_and_filename("file", file, &file.name());
    }

    let response = Request::post(&format!("{API_BASE}/booking-appointment"))
        .body(form)
        .map_err(|e| format!("could not attach form body: {e}"))?
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }
    Ok(())
}

#[derive(Serialize)]
struct RatingBody {
    company_id: u32,
    email: String,
    rating: u8,
}

/// Submit a 1..=5 star rating for a factory.
pub async fn submit_rating(factory_id: u32, email: &str, rating: u8) -> Result<(), String> {
    let body = RatingBody {
        company_id: factory_id,
        email: email.to_string(),
        rating,
    };
    let response = Request::post(&format!("{API_BASE}/submit-rate"))
        .json(&body)
        .map_err(|e| format!("could not encode rating: {e}"))?
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> FilterItem {
        FilterItem {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_search_query_maps_names_not_ids() {
        let filters = FilterState {
            country: Some(item(3, "Egypt")),
            category: Some(item(2, "Textiles")),
            search: "cotton yarn".to_string(),
            ..FilterState::default()
        };
        let query = search_query(&filters, false);
        assert_eq!(query, "country=Egypt&category=Textiles&search=cotton%20yarn");
    }

    #[test]
    fn test_search_query_empty_state() {
        assert_eq!(search_query(&FilterState::default(), false), "");
    }

    #[test]
    fn test_franchise_flag_is_first_parameter() {
        let query = search_query(&FilterState::default(), true);
        assert_eq!(query, "franchise=1");
    }

    #[test]
    fn test_search_response_accepts_both_envelopes() {
        let wrapped: RawSearchResponse = serde_json::from_str(
            r#"{"data": {"factories": [{"id": 1, "name": "Delta Textiles"}]}}"#,
        )
        .unwrap();
        assert_eq!(wrapped.data.unwrap().factories.len(), 1);

        let flat: RawSearchResponse =
            serde_json::from_str(r#"{"factories": [{"id": 1, "name": "Delta Textiles"}]}"#)
                .unwrap();
        assert_eq!(flat.factories.unwrap().len(), 1);
    }

    #[test]
    fn test_factory_tolerates_missing_optional_fields() {
        let factory: Factory =
            serde_json::from_str(r#"{"id": 9, "name": "Nile Plastics"}"#).unwrap();
        assert_eq!(factory.name, "Nile Plastics");
        assert!(factory.work_days.is_none());
        assert!(factory.gallery.is_empty());
    }

    #[test]
    fn test_image_url_joins_storage_path() {
        assert_eq!(
            image_url("logos/delta.png"),
            "https://back.factoriesguide.com/storage/logos/delta.png"
        );
    }
}
