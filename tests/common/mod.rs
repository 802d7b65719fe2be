use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Options shared by tests that only care about overrides.
pub fn base_options_json() -> Value {
    serde_json::json!({
        "connection_string": "Host=db;Database=app",
        "publication_name": "pub_orders",
        "replication_slot_name": "slot_orders",
        "partitions": {
            "orders_2024": { "partition_count": 4, "column_index": 1 }
        }
    })
}

pub fn write_json_options(dir: &TempDir, name: &str, value: Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}
