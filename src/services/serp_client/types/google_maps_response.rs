use serde_json::{Map, Value};

/// Top-level key holding the list of place entries.
pub const LOCAL_RESULTS_KEY: &str = "local_results";

/// Raw Google Maps engine response. Kept as an untyped mapping because entries
/// carry fields under either English or Japanese key names depending on the
/// account's language settings. `None` when the API answered with `null`.
pub type GoogleMapsResponse = Option<Map<String, Value>>;

pub fn local_results(response: &GoogleMapsResponse) -> &[Value] {
    response
        .as_ref()
        .and_then(|r| r.get(LOCAL_RESULTS_KEY))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
