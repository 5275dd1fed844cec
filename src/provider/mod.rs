pub(crate) mod decodingus;

use crate::cache::{DiskCache, TreeMemoryCache};
use crate::config::Config;
use crate::error::TreeError;
use crate::haplogroup::types::HaplogroupTree;
use crate::types::GenomeBuild;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for one tree type: where to fetch it, how to key its cache
/// entries, and which builds its markers carry coordinates for.
#[derive(Debug, Clone)]
pub struct TreeSource {
    /// Opaque cache key; change it to invalidate stale downloads.
    pub id: String,
    pub url: String,
    /// Human label used in progress messages and reports ("Y-DNA").
    pub description: String,
    pub native_build: GenomeBuild,
    /// Advisory: builds the source publishes coordinates for. Loading an
    /// unlisted build is not an error, it just drops every marker.
    pub supported_builds: Vec<GenomeBuild>,
}

impl TreeSource {
    pub fn y_dna() -> Self {
        TreeSource {
            id: "decodingus-ytree".to_string(),
            url: "https://decoding-us.com/api/v1/y-tree".to_string(),
            description: "Y-DNA".to_string(),
            native_build: GenomeBuild::GRCh38,
            supported_builds: vec![
                GenomeBuild::GRCh38,
                GenomeBuild::GRCh37,
                GenomeBuild::CHM13v2,
            ],
        }
    }

    pub fn mt_dna() -> Self {
        TreeSource {
            id: "decodingus-mttree".to_string(),
            url: "https://decoding-us.com/api/v1/mt-tree".to_string(),
            description: "MT-DNA".to_string(),
            // rCRS coordinates are shared verbatim by every supported build.
            native_build: GenomeBuild::GRCh38,
            supported_builds: vec![
                GenomeBuild::GRCh38,
                GenomeBuild::GRCh37,
                GenomeBuild::CHM13v2,
            ],
        }
    }
}

/// Network fetch seam. A single GET per call, no automatic retry; tests
/// substitute their own implementation.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, TreeError>;
}

/// Blocking HTTP fetcher. The client is built per call so a caller-supplied
/// timeout always applies to the whole transfer.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        HttpFetcher { timeout }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, TreeError> {
        let wrap = |cause: reqwest::Error| TreeError::FetchFailure {
            url: url.to_string(),
            cause: Box::new(cause),
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(wrap)?;
        let response = client.get(url).send().map_err(wrap)?;
        let response = response.error_for_status().map_err(wrap)?;
        response.text().map_err(wrap)
    }
}

/// Orchestrates parse vs. fetch vs. cache-hit and produces immutable trees
/// reconciled to a requested build.
///
/// Tier walk per request: parsed-tree memory cache, then the disk-backed raw
/// payload, then a single network fetch. Whichever tier satisfies the
/// request, the resulting tree is identical. Safe to call concurrently;
/// racing loads of the same key may each do the expensive path once, after
/// which the cache key keeps every later request fast.
pub struct TreeProvider<F: Fetch = HttpFetcher> {
    fetcher: F,
    disk: DiskCache,
    memory: TreeMemoryCache,
}

impl TreeProvider<HttpFetcher> {
    pub fn new(config: &Config) -> Result<Self, TreeError> {
        Ok(TreeProvider::with_parts(
            HttpFetcher::new(Duration::from_secs(config.download_timeout)),
            DiskCache::open()?,
            TreeMemoryCache::new(),
        ))
    }
}

impl<F: Fetch> TreeProvider<F> {
    pub fn with_parts(fetcher: F, disk: DiskCache, memory: TreeMemoryCache) -> Self {
        TreeProvider {
            fetcher,
            disk,
            memory,
        }
    }

    pub fn load_tree(
        &self,
        source: &TreeSource,
        build: GenomeBuild,
    ) -> Result<Arc<HaplogroupTree>, TreeError> {
        if let Some(tree) = self.memory.get(&source.id, build) {
            return Ok(tree);
        }

        let raw = match self.disk.get(&source.id) {
            Some(raw) => raw,
            None => {
                let raw = self.download(source)?;
                self.disk.put(&source.id, &raw)?;
                raw
            }
        };

        let tree = Arc::new(decodingus::parse_tree(&raw, build)?);
        self.memory.put(&source.id, build, Arc::clone(&tree));
        Ok(tree)
    }

    /// Drop every parsed tree; raw downloads on disk are kept.
    pub fn clear_memory(&self) {
        self.memory.clear();
    }

    fn download(&self, source: &TreeSource) -> Result<String, TreeError> {
        let progress = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            progress.set_style(style);
        }
        progress.set_message(format!("Downloading {} haplogroup tree...", source.description));

        let result = self.fetcher.fetch(&source.url);

        match &result {
            Ok(_) => progress.finish_with_message(format!(
                "{} tree downloaded and cached",
                source.description
            )),
            Err(_) => progress.finish_and_clear(),
        }
        result
    }
}
