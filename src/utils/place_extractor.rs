use serde::Deserialize;
use serde_json::Value;

use crate::{
    services::serp_client::types::google_maps_response::{local_results, GoogleMapsResponse},
    types::place_record::{PlaceRecord, PlaceStats, NO_PHONE, UNKNOWN_ADDRESS, UNKNOWN_TITLE},
};

const TITLE_KEYS: [&str; 2] = ["title", "店舗名"];
const PHONE_KEYS: [&str; 2] = ["phone", "電話"];
const ADDRESS_KEYS: [&str; 2] = ["address", "住所"];
const TAKEOUT_KEYS: [&str; 2] = ["takeout", "テイクアウト"];

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceFilter {
    pub takeout_only: bool,
    pub max_results: Option<usize>,
}

/// Flattens the results list into records, preserving API order. An absent
/// response or a missing list yields no records.
pub fn extract_places(response: &GoogleMapsResponse, filter: PlaceFilter) -> Vec<PlaceRecord> {
    local_results(response)
        .iter()
        .filter(|place| !filter.takeout_only || offers_takeout(place))
        .take(filter.max_results.unwrap_or(usize::MAX))
        .map(to_place_record)
        .collect()
}

fn to_place_record(place: &Value) -> PlaceRecord {
    PlaceRecord {
        title: coalesce(place, &TITLE_KEYS).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        phone: coalesce(place, &PHONE_KEYS).unwrap_or_else(|| NO_PHONE.to_string()),
        address: coalesce(place, &ADDRESS_KEYS).unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        stats: PlaceStats::deserialize(place).unwrap_or_default(),
    }
}

/// First candidate key holding a usable scalar.
fn coalesce(place: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match place.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn offers_takeout(place: &Value) -> bool {
    let Some(options) = place.get("service_options") else {
        return false;
    };

    TAKEOUT_KEYS
        .iter()
        .any(|key| options.get(key).is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response_from(value: Value) -> GoogleMapsResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_response_yields_nothing() {
        assert!(extract_places(&None, PlaceFilter::default()).is_empty());
    }

    #[test]
    fn response_without_results_yields_nothing() {
        let response = response_from(json!({ "search_metadata": {}, "error": "no results" }));
        assert!(extract_places(&response, PlaceFilter::default()).is_empty());
    }

    #[test]
    fn falls_back_to_alternate_keys() {
        let response = response_from(json!({
            "local_results": [{
                "店舗名": "喫茶店",
                "電話": "03-1234-5678",
                "住所": "東京都渋谷区"
            }]
        }));

        assert_eq!(
            extract_places(&response, PlaceFilter::default()),
            vec![PlaceRecord {
                title: "喫茶店".to_string(),
                phone: "03-1234-5678".to_string(),
                address: "東京都渋谷区".to_string(),
                stats: PlaceStats::default(),
            }]
        );
    }

    #[test]
    fn primary_key_wins_over_alternate() {
        let response = response_from(json!({
            "local_results": [{ "title": "Joe", "phone": "+1 212-555-0100", "電話": "ignored" }]
        }));

        let places = extract_places(&response, PlaceFilter::default());
        assert_eq!(places[0].phone, "+1 212-555-0100");
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let response = response_from(json!({
            "local_results": [
                {},
                { "title": "", "phone": null, "電話": "", "address": ["not", "text"] }
            ]
        }));

        for place in extract_places(&response, PlaceFilter::default()) {
            assert_eq!(place.title, UNKNOWN_TITLE);
            assert_eq!(place.phone, NO_PHONE);
            assert_eq!(place.address, UNKNOWN_ADDRESS);
        }
    }

    #[test]
    fn empty_primary_falls_through_to_alternate() {
        let response = response_from(json!({
            "local_results": [{ "phone": "", "電話": "03-0000-0000" }]
        }));

        let places = extract_places(&response, PlaceFilter::default());
        assert_eq!(places[0].phone, "03-0000-0000");
    }

    #[test]
    fn preserves_api_order() {
        let titles = ["Zeta", "Alpha", "Mu", "Beta"];
        let response = response_from(json!({
            "local_results": titles.iter().map(|t| json!({ "title": t })).collect::<Vec<_>>()
        }));

        let extracted = extract_places(&response, PlaceFilter::default())
            .into_iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();

        assert_eq!(extracted, titles);
    }

    #[test]
    fn takeout_filter_keeps_order_of_matches() {
        let response = response_from(json!({
            "local_results": [
                { "title": "A", "service_options": { "takeout": true } },
                { "title": "B", "service_options": { "takeout": false } },
                { "title": "C" },
                { "title": "D", "service_options": { "テイクアウト": true } }
            ]
        }));

        let all = extract_places(&response, PlaceFilter::default());
        assert_eq!(all.len(), 4);

        let takeout = extract_places(
            &response,
            PlaceFilter {
                takeout_only: true,
                ..Default::default()
            },
        )
            .into_iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(takeout, vec!["A", "D"]);
    }

    #[test]
    fn takeout_accepts_any_non_empty_value() {
        let response = response_from(json!({
            "local_results": [
                { "title": "A", "service_options": { "takeout": ["counter"] } },
                { "title": "B", "service_options": { "takeout": {} } },
                { "title": "C", "service_options": { "テイクアウト": { "window": true } } },
                { "title": "D", "service_options": { "takeout": [] } },
                { "title": "E", "service_options": { "takeout": null } }
            ]
        }));

        let takeout = extract_places(
            &response,
            PlaceFilter {
                takeout_only: true,
                ..Default::default()
            },
        )
        .into_iter()
        .map(|p| p.title)
        .collect::<Vec<_>>();

        assert_eq!(takeout, vec!["A", "C"]);
    }

    #[test]
    fn cap_applies_after_filtering() {
        let response = response_from(json!({
            "local_results": [
                { "title": "A" },
                { "title": "B", "service_options": { "takeout": true } },
                { "title": "C", "service_options": { "takeout": true } },
                { "title": "D", "service_options": { "takeout": true } }
            ]
        }));

        let capped = |filter| {
            extract_places(&response, filter)
                .into_iter()
                .map(|p| p.title)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            capped(PlaceFilter {
                takeout_only: false,
                max_results: Some(2),
            }),
            vec!["A", "B"]
        );
        assert_eq!(
            capped(PlaceFilter {
                takeout_only: true,
                max_results: Some(2),
            }),
            vec!["B", "C"]
        );
        assert_eq!(
            capped(PlaceFilter {
                takeout_only: false,
                max_results: Some(10),
            })
            .len(),
            4
        );
    }

    #[test]
    fn carries_rating_and_reviews() {
        let response = response_from(json!({
            "local_results": [
                { "title": "A", "rating": 4.6, "reviews": 312 },
                { "title": "B", "rating": "n/a" },
                { "title": "C" }
            ]
        }));

        let stats = extract_places(&response, PlaceFilter::default())
            .into_iter()
            .map(|p| p.stats)
            .collect::<Vec<_>>();

        assert_eq!(stats[0].rating, Some(4.6));
        assert_eq!(stats[0].reviews, Some(312));
        assert_eq!(stats[1], PlaceStats::default());
        assert_eq!(stats[2], PlaceStats::default());
    }
}
