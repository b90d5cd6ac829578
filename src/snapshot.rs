//! Game snapshot persistence
//!
//! Saves and loads a full [`GameState`] to/from a JSON file: per-square
//! occupancy (kind, owner, moved flag), the turn, and the check status.
//! A saved game reloads without loss.
//!
//! # Error Handling
//!
//! Failures map to [`ChessError`] values rather than being swallowed; the
//! hosting layer decides whether a failed load falls back to a fresh game.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ChessError, ChessResult};
use crate::state::GameState;

/// Serialize `state` to pretty JSON at `path`
///
/// Parent directories are created as needed.
pub fn save_game(state: &GameState, path: &Path) -> ChessResult<()> {
    let json = serde_json::to_string_pretty(state).map_err(|e| ChessError::SnapshotFormat {
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ChessError::SnapshotWrite {
                message: format!("could not create {}: {}", parent.display(), e),
            })?;
        }
    }

    fs::write(path, json).map_err(|e| ChessError::SnapshotWrite {
        message: format!("{}: {}", path.display(), e),
    })?;

    info!("[SNAPSHOT] Saved game to {:?}", path);
    Ok(())
}

/// Reconstruct a [`GameState`] from the JSON file at `path`
pub fn load_game(path: &Path) -> ChessResult<GameState> {
    let contents = fs::read_to_string(path).map_err(|e| {
        warn!("[SNAPSHOT] Failed to read {:?}: {}", path, e);
        ChessError::SnapshotRead {
            message: format!("{}: {}", path.display(), e),
        }
    })?;

    let state = serde_json::from_str::<GameState>(&contents).map_err(|e| {
        warn!("[SNAPSHOT] Failed to parse {:?}: {}", path, e);
        ChessError::SnapshotFormat {
            message: e.to_string(),
        }
    })?;

    info!("[SNAPSHOT] Loaded game from {:?}", path);
    Ok(state)
}
