use crate::sbom_generation::domain::{Checksum, ChecksumAlgorithm};
use crate::shared::error::SbomError;
use crate::shared::Result;
use dashmap::DashMap;
use futures::stream::{self, StreamExt};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Computes the SHA-1 / SHA-256 pair attached to every module package.
///
/// Results are cached per file so that an artifact shared by several
/// identities is hashed once. `precompute` fills the cache concurrently
/// before the walk; the walk itself only ever calls `checksums`.
#[derive(Debug, Clone, Default)]
pub struct ChecksumCalculator {
    cache: Arc<DashMap<PathBuf, Vec<Checksum>>>,
}

impl ChecksumCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes the file in a single streaming pass
    pub fn compute(path: &Path) -> Result<Vec<Checksum>> {
        let checksum_error = |e: std::io::Error| SbomError::ChecksumError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let mut file = File::open(path).map_err(checksum_error)?;
        let mut sha1 = Sha1::new();
        let mut sha256 = Sha256::new();
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            let read = file.read(&mut buffer).map_err(checksum_error)?;
            if read == 0 {
                break;
            }
            sha1.update(&buffer[..read]);
            sha256.update(&buffer[..read]);
        }

        Ok(vec![
            Checksum::new(ChecksumAlgorithm::Sha1, hex::encode(sha1.finalize())),
            Checksum::new(ChecksumAlgorithm::Sha256, hex::encode(sha256.finalize())),
        ])
    }

    /// Cached checksums for `path`, computing them on a miss
    pub fn checksums(&self, path: &Path) -> Result<Vec<Checksum>> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(cached.clone());
        }

        let checksums = Self::compute(path)?;
        self.cache.insert(path.to_path_buf(), checksums.clone());
        Ok(checksums)
    }

    /// Hashes every file on the blocking pool, at most `concurrency` at a time.
    ///
    /// Failures are not reported here: a file that cannot be hashed is simply
    /// left out of the cache and fails again, fatally, when the walk asks for it.
    /// `on_progress` receives (completed, total) after each file.
    pub async fn precompute<F>(&self, paths: Vec<PathBuf>, concurrency: usize, on_progress: F)
    where
        F: Fn(usize, usize),
    {
        let total = paths.len();
        let pending: Vec<PathBuf> = paths
            .into_iter()
            .filter(|path| !self.cache.contains_key(path))
            .collect();
        let already_cached = total - pending.len();

        let mut completed = already_cached;
        let mut results = stream::iter(pending)
            .map(|path| {
                let cache = Arc::clone(&self.cache);
                tokio::task::spawn_blocking(move || {
                    if let Ok(checksums) = Self::compute(&path) {
                        cache.insert(path, checksums);
                    }
                })
            })
            .buffer_unordered(concurrency.max(1));

        while results.next().await.is_some() {
            completed += 1;
            on_progress(completed, total);
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
