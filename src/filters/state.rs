use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One selectable filter value (a country, city, category or specialty).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterItem {
    pub id: u32,
    pub name: String,
}

/// The complete set of current search selections.
///
/// The type does not enforce the parent/child relationship between
/// country/city and category/specialty; the cascade in the filter section
/// clears a child selection whose id is absent from the freshly fetched
/// option list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterState {
    #[serde(default)]
    pub country: Option<FilterItem>,
    #[serde(default)]
    pub city: Option<FilterItem>,
    #[serde(default)]
    pub category: Option<FilterItem>,
    #[serde(default)]
    pub specialty: Option<FilterItem>,
    #[serde(default)]
    pub search: String,
}

impl FilterState {
    /// True when any dropdown slot is set (the free-text search does not
    /// count; it mirrors the "clear filters" affordance on empty results).
    pub fn has_selection(&self) -> bool {
        self.country.is_some()
            || self.city.is_some()
            || self.category.is_some()
            || self.specialty.is_some()
    }
}

/// Validate one stored slot: it must carry an integer `id` and a string
/// `name`, anything else is discarded.
fn filter_item_from_value(value: &Value) -> Option<FilterItem> {
    let id = u32::try_from(value.get("id")?.as_u64()?).ok()?;
    let name = value.get("name")?.as_str()?.to_string();
    Some(FilterItem { id, name })
}

/// Decode a persisted filter state, recovering per field.
///
/// Unparseable JSON yields the empty state; a slot that fails shape
/// validation becomes `None` while valid siblings are kept; a missing or
/// non-string `search` becomes the empty string. The returned state is
/// always safe to hand to the UI.
pub fn state_from_json(raw: &str) -> FilterState {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        log::warn!("stored filters are not valid JSON, starting empty");
        return FilterState::default();
    };
    let slot = |key: &str| value.get(key).and_then(filter_item_from_value);
    FilterState {
        country: slot("country"),
        city: slot("city"),
        category: slot("category"),
        specialty: slot("specialty"),
        search: value
            .get("search")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
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
    fn test_round_trip_preserves_all_fields() {
        let state = FilterState {
            country: Some(item(3, "Egypt")),
            city: Some(item(14, "Cairo")),
            category: Some(item(2, "Textiles")),
            specialty: None,
            search: "cotton".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(state_from_json(&json), state);
    }

    #[test]
    fn test_corrupt_slot_degrades_alone() {
        let raw = r#"{
            "country": {"id": "not-a-number", "name": "Egypt"},
            "city": {"id": 14, "name": "Cairo"},
            "search": "cotton"
        }"#;
        let state = state_from_json(raw);
        assert_eq!(state.country, None);
        assert_eq!(state.city, Some(item(14, "Cairo")));
        assert_eq!(state.search, "cotton");
    }

    #[test]
    fn test_fractional_or_negative_id_is_rejected() {
        let raw = r#"{"country": {"id": 3.5, "name": "Egypt"}}"#;
        assert_eq!(state_from_json(raw).country, None);

        let raw = r#"{"country": {"id": -1, "name": "Egypt"}}"#;
        assert_eq!(state_from_json(raw).country, None);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let raw = r#"{"category": {"id": 2}}"#;
        assert_eq!(state_from_json(raw).category, None);
    }

    #[test]
    fn test_garbage_json_yields_empty_state() {
        assert_eq!(state_from_json("{{{nope"), FilterState::default());
    }

    #[test]
    fn test_search_defaults_to_empty_when_not_a_string() {
        let raw = r#"{"search": 7}"#;
        assert_eq!(state_from_json(raw).search, "");
    }

    #[test]
    fn test_has_selection_ignores_search_text() {
        let mut state = FilterState {
            search: "anything".to_string(),
            ..FilterState::default()
        };
        assert!(!state.has_selection());
        state.specialty = Some(item(9, "Spinning"));
        assert!(state.has_selection());
    }
}
