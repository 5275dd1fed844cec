use crate::error::TreeError;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Durable key→payload store for raw tree downloads. One file per key under
/// the platform cache directory; entries survive process restarts and are
/// never expired here.
#[derive(Debug)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    /// Open the default cache location under the platform cache directory.
    pub fn open() -> Result<Self, TreeError> {
        let proj_dirs = ProjectDirs::from("com", "haplocall", "haplocall").ok_or_else(|| {
            TreeError::Cache(std::io::Error::other(
                "failed to determine project directories",
            ))
        })?;
        Self::at(proj_dirs.cache_dir().join("trees"))
    }

    /// Open a cache rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Result<Self, TreeError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(DiskCache { dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// An unreadable or missing entry is a miss, never an error.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    /// Write to a temporary file in the cache directory and atomically
    /// publish, so a concurrent reader never observes a partial payload.
    pub fn put(&self, key: &str, payload: &str) -> Result<(), TreeError> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(payload.as_bytes())?;
        tmp.persist(self.entry_path(key))
            .map_err(|e| TreeError::Cache(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_after_put_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::at(dir.path()).unwrap();
        assert!(cache.get("ytree").is_none());
        cache.put("ytree", "{\"payload\":1}").unwrap();
        assert_eq!(cache.get("ytree").as_deref(), Some("{\"payload\":1}"));
        // idempotent repopulation
        cache.put("ytree", "{\"payload\":1}").unwrap();
        assert_eq!(cache.get("ytree").as_deref(), Some("{\"payload\":1}"));
    }

    #[test]
    fn keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::at(dir.path()).unwrap();
        cache.put("ytree", "y").unwrap();
        cache.put("mttree", "mt").unwrap();
        assert_eq!(cache.get("ytree").as_deref(), Some("y"));
        assert_eq!(cache.get("mttree").as_deref(), Some("mt"));
    }
}
