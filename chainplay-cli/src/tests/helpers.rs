//! Shared fixtures for CLI command tests.

use camino::Utf8PathBuf;
use serde_json::{Value, json};
use tempfile::TempDir;

pub(crate) fn write_fixture(dir: &TempDir, name: &str, payload: &Value) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 path");
    let bytes = serde_json::to_vec_pretty(payload).expect("serialise fixture");
    std::fs::write(path.as_std_path(), bytes).expect("write fixture");
    path
}

/// Competitive defi/ai/trading player based in Dubai, padel level eight.
pub(crate) fn subject_json() -> Value {
    json!({
        "id": "u-subject",
        "display_name": "Marcus W.",
        "energy_style": "competitive",
        "focus_tags": ["defi", "ai", "trading"],
        "city": "Dubai",
        "sports": { "padel": 8 }
    })
}

pub(crate) fn candidate_json(id: &str, tags: Value, sports: Value, city: Option<&str>) -> Value {
    let mut payload = json!({
        "id": id,
        "display_name": id,
        "energy_style": "competitive",
        "focus_tags": tags,
        "sports": sports,
    });
    if let Some(city) = city {
        payload["city"] = json!(city);
    }
    payload
}
