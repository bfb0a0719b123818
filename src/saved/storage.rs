use super::types::{SavedStore, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Where classified builds are kept unless the config names another file
/// (~/.config/tt-class/saved.json)
pub fn get_saved_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("saved.json"))
}

/// Read the list of saved builds.
///
/// A missing file means nothing has been saved yet. A store written by
/// another release of the tool (different `version`) is refused rather than
/// reinterpreted, so older results are never mixed with a changed format.
pub fn load_saved(path: &Path) -> Result<SavedStore> {
    if !path.exists() {
        return Ok(SavedStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open saved configurations at {}", path.display()))?;

    let store: SavedStore = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load saved configurations from {}", path.display()))?;

    if store.version != STORE_VERSION {
        anyhow::bail!(
            "Unsupported saved configurations version {} in {} (expected {})",
            store.version,
            path.display(),
            STORE_VERSION
        );
    }

    Ok(store)
}

/// Replace the saved builds file with `store`.
///
/// The whole list is rewritten on every save; an interrupted write keeps the
/// previous list.
pub fn save_saved(path: &Path, store: &SavedStore) -> Result<()> {
    crate::config::ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store)
        .context("Failed to serialize saved configurations")?;

    file.commit()
        .with_context(|| format!("Failed to write saved configurations to {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = store.len(), "saved configurations written");
    Ok(())
}
