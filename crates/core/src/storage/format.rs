use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::watchlist::Watchlist;

/// Snapshot envelope version. The envelope carries it, but the layout has
/// never changed; anything else is rejected.
pub const CURRENT_VERSION: u32 = 0;

/// On-disk snapshot:
///
/// ```text
/// {"state": {"watchlist": [ {property, addedAt, alerts}, ... ]}, "version": 0}
/// ```
///
/// Same layout the mobile client's persisted store writes, so existing blobs
/// load unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub state: WatchlistState,
    #[serde(default)]
    pub version: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WatchlistState {
    #[serde(default)]
    pub watchlist: Watchlist,
}

/// Serialize a watchlist into a snapshot blob.
pub fn write_snapshot(watchlist: &Watchlist) -> Result<String, CoreError> {
    #[derive(Serialize)]
    struct EnvelopeRef<'a> {
        state: StateRef<'a>,
        version: u32,
    }
    #[derive(Serialize)]
    struct StateRef<'a> {
        watchlist: &'a Watchlist,
    }

    serde_json::to_string(&EnvelopeRef {
        state: StateRef { watchlist },
        version: CURRENT_VERSION,
    })
    .map_err(|e| CoreError::Serialization(format!("Failed to serialize watchlist: {e}")))
}

/// Parse a snapshot blob back into a watchlist.
pub fn read_snapshot(data: &str) -> Result<Watchlist, CoreError> {
    let envelope: SnapshotEnvelope = serde_json::from_str(data)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse watchlist snapshot: {e}")))?;

    if envelope.version != CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(envelope.version));
    }

    Ok(envelope.state.watchlist)
}
