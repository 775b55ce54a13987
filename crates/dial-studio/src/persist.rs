use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use dial_engine::core::RenderState;

/// Host-side bookkeeping stored next to the face's own state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostState {
    pub size: f32,
    pub frames: u64,
}

/// On-disk envelope: the host's own state plus the face's record.
///
/// `super_state` belongs to the host and is carried as an opaque JSON value;
/// only `view` is handed back to the face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedInstance {
    pub super_state: serde_json::Value,
    pub view: RenderState,
}

impl SavedInstance {
    pub fn new(host: &HostState, view: RenderState) -> Result<Self> {
        let super_state = serde_json::to_value(host).context("failed to encode host state")?;
        Ok(Self { super_state, view })
    }

    /// Host state, if the envelope carries one this host understands.
    pub fn host_state(&self) -> Option<HostState> {
        serde_json::from_value(self.super_state.clone()).ok()
    }
}

/// Envelope as read from disk, before the face's record is checked.
#[derive(Deserialize)]
struct RawInstance {
    #[serde(default)]
    super_state: serde_json::Value,
    view: serde_json::Value,
}

/// Decodes a saved instance; a bad `view` record reports a `StateError`.
pub fn decode(text: &str) -> Result<SavedInstance> {
    let raw: RawInstance = serde_json::from_str(text).context("not a saved instance")?;
    let view = RenderState::from_value(raw.view).context("saved view record is unusable")?;
    Ok(SavedInstance { super_state: raw.super_state, view })
}

/// Loads a saved instance.
///
/// A missing file is a fresh start, not an error.
pub fn load(path: &Path) -> Result<Option<SavedInstance>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read state file {}", path.display()));
        }
    };

    let saved = decode(&text).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(Some(saved))
}

/// Writes a saved instance, replacing the previous checkpoint atomically.
pub fn store(path: &Path, saved: &SavedInstance) -> Result<()> {
    let text = serde_json::to_string_pretty(saved).context("failed to encode saved instance")?;

    let tmp = sibling_tmp(path);
    fs::write(&tmp, text).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to move checkpoint into {}", path.display()))?;
    Ok(())
}

/// `<name>.tmp` next to `path`; never `path` itself.
pub(crate) fn sibling_tmp(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
