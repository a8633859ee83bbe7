//! Per-exchange state directory access.

use crate::error::StoreResult;
use riskgate_core::{CanaryResult, RiskSnapshot, SymbolSignals, WatchList};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CANARY_FILE: &str = "order_smoke_state.json";
const SNAPSHOT_FILE: &str = "risk_state.json";
const SNAPSHOT_TMP_FILE: &str = ".risk_state.json.tmp";

/// Read and parse a JSON document, returning `None` on any failure.
///
/// Strips a UTF-8 BOM first; some external writers emit one. This is the
/// lenient-degrade path shared by all boundary readers: a missing file, a
/// permissions error, and corrupt JSON all look the same to the caller.
pub fn read_json_lenient<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "blob not readable");
            return None;
        }
    };

    let trimmed = raw.trim_start_matches('\u{feff}');
    match serde_json::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "blob not parseable, treating as absent");
            None
        }
    }
}

/// Accessor for one exchange's state directory.
///
/// Layout: `<root>/<exchange>/{order_smoke_state.json, signals_<SYM>.json,
/// risk_state.json}`. The exchange key is lowercased and trimmed.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new(root: impl AsRef<Path>, exchange: &str) -> Self {
        let key = exchange.trim().to_lowercase();
        Self {
            dir: root.as_ref().join(key),
        }
    }

    /// The exchange state directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the latest canary-probe record, if one exists and parses.
    ///
    /// Absence is meaningful downstream (the gate fails closed on it), so
    /// this returns `Option` rather than an error.
    pub fn load_canary(&self) -> Option<CanaryResult> {
        read_json_lenient(&self.dir.join(CANARY_FILE))
    }

    /// Load the watch-list from an explicit path, empty when unreadable.
    pub fn load_watch_list(&self, path: &Path) -> WatchList {
        read_json_lenient(path).unwrap_or_default()
    }

    /// Load the per-symbol technical snapshot, if present and well-shaped.
    pub fn load_symbol_signals(&self, symbol: &str) -> Option<SymbolSignals> {
        let file = format!("signals_{}.json", symbol.trim().to_uppercase());
        read_json_lenient(&self.dir.join(file))
    }

    /// Persist the snapshot, fully replacing any prior one.
    ///
    /// Writes to a temp file in the same directory and renames it into
    /// place so a concurrent reader sees either the old record or the new
    /// one, never a partial write.
    pub fn write_snapshot(&self, snapshot: &RiskSnapshot) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let tmp_path = self.dir.join(SNAPSHOT_TMP_FILE);
        let final_path = self.dir.join(SNAPSHOT_FILE);

        let body = serde_json::to_vec_pretty(snapshot)?;
        fs::write(&tmp_path, body)?;
        fs::rename(&tmp_path, &final_path)?;

        info!(path = %final_path.display(), ts = snapshot.ts, "risk snapshot written");
        Ok(final_path)
    }

    /// Read back the last persisted snapshot, if any.
    pub fn load_snapshot(&self) -> Option<RiskSnapshot> {
        read_json_lenient(&self.dir.join(SNAPSHOT_FILE))
    }
}
