//! Commands sent from the host (input, loader, UI) to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::asset::ModelAsset;

/// All inputs the host can feed the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Input ---
    /// A physical key went down.
    KeyDown { code: String },
    /// A physical key went up.
    KeyUp { code: String },

    // --- Asset loader callbacks ---
    /// Loader progress report.
    AssetProgress { loaded: u64, total: u64 },
    /// The base model finished loading.
    AssetLoaded { asset: ModelAsset },
    /// The base model could not be loaded.
    AssetFailed { message: String },

    // --- UI ---
    /// Switch the player's animation action.
    PlayAction { name: String },

    // --- Lifecycle ---
    /// Tear the session down.
    Dispose,
}
