//! `localStorage`-backed persistence for the explorer's selected story and args.

use serde::{Deserialize, Serialize};

use crate::explorer::PersistedExplorer;

/// Storage key for the explorer snapshot.
pub const EXPLORER_STATE_KEY: &str = "storefront.showcase.explorer.v1";

const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SnapshotEnvelope {
    schema_version: u32,
    #[serde(flatten)]
    state: PersistedExplorer,
}

/// Serializes an explorer snapshot with its schema envelope.
///
/// # Errors
///
/// Returns the serializer message when encoding fails.
pub fn encode_snapshot(state: &PersistedExplorer) -> Result<String, String> {
    serde_json::to_string(&SnapshotEnvelope {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        state: state.clone(),
    })
    .map_err(|e| e.to_string())
}

/// Parses a stored snapshot. Malformed payloads and other schema versions yield `None`.
pub fn decode_snapshot(raw: &str) -> Option<PersistedExplorer> {
    let envelope: SnapshotEnvelope = serde_json::from_str(raw).ok()?;
    (envelope.schema_version == SNAPSHOT_SCHEMA_VERSION).then_some(envelope.state)
}

#[derive(Debug, Clone, Copy, Default)]
/// Explorer snapshot store backed by `window.localStorage`.
///
/// Outside the browser every load misses and every write succeeds.
pub struct ExplorerStore;

impl ExplorerStore {
    fn load_raw(self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(EXPLORER_STATE_KEY).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save_raw(self, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(EXPLORER_STATE_KEY, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = raw_json;
            Ok(())
        }
    }

    /// Loads the stored snapshot, if a compatible one exists.
    pub fn load(self) -> Option<PersistedExplorer> {
        decode_snapshot(&self.load_raw()?)
    }

    /// Stores a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the localStorage write fails.
    pub fn save(self, state: &PersistedExplorer) -> Result<(), String> {
        self.save_raw(&encode_snapshot(state)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::ArgValue;

    fn snapshot() -> PersistedExplorer {
        let mut args = BTreeMap::new();
        args.insert("disabled".to_string(), ArgValue::Bool(true));
        args.insert("label".to_string(), ArgValue::Text("삭제".to_string()));
        PersistedExplorer {
            selected: "button--danger".to_string(),
            args,
        }
    }

    #[test]
    fn encoded_snapshot_carries_schema_version_and_flat_fields() {
        let raw = encode_snapshot(&snapshot()).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["selected"], "button--danger");
        assert_eq!(value["args"]["disabled"], true);
        assert_eq!(decode_snapshot(&raw), Some(snapshot()));
    }

    #[test]
    fn decode_rejects_malformed_and_foreign_payloads() {
        assert_eq!(decode_snapshot("not json"), None);
        assert_eq!(decode_snapshot(r#"{"selected":"button--primary"}"#), None);
        assert_eq!(
            decode_snapshot(r#"{"schema_version":9,"selected":"button--primary","args":{}}"#),
            None
        );
    }

    #[test]
    fn decode_defaults_missing_args() {
        assert_eq!(
            decode_snapshot(r#"{"schema_version":1,"selected":"modal--default"}"#),
            Some(PersistedExplorer {
                selected: "modal--default".to_string(),
                args: BTreeMap::new(),
            })
        );
    }

    #[test]
    fn native_store_misses_on_load_and_accepts_writes() {
        let store = ExplorerStore;
        assert_eq!(store.load(), None);
        assert_eq!(store.save(&snapshot()), Ok(()));
        assert_eq!(store.load(), None);
    }
}
