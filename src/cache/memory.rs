use crate::haplogroup::types::HaplogroupTree;
use crate::types::GenomeBuild;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-lifetime cache of parsed trees, keyed by (source id, target
/// build). Trees are immutable after construction, so hits hand out shared
/// `Arc` references. No eviction; staleness is managed by changing the
/// source id, not by the cache.
#[derive(Debug, Default)]
pub struct TreeMemoryCache {
    inner: Mutex<HashMap<(String, GenomeBuild), Arc<HaplogroupTree>>>,
}

impl TreeMemoryCache {
    pub fn new() -> Self {
        TreeMemoryCache::default()
    }

    pub fn get(&self, source_id: &str, build: GenomeBuild) -> Option<Arc<HaplogroupTree>> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.get(&(source_id.to_string(), build)).cloned()
    }

    pub fn put(&self, source_id: &str, build: GenomeBuild, tree: Arc<HaplogroupTree>) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.insert((source_id.to_string(), build), tree);
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.clear();
    }
}
