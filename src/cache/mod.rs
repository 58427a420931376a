//! Durable URL cache
//!
//! The cache is the only cross-run state in the system: a plain text file
//! with one absolute URL per line, append-only, no header. A URL present in
//! the cache is never fetched, classified, or summarized again. Entries are
//! flushed per append, so a crash mid-run loses at most the in-flight item.
//!
//! Concurrent processes sharing one cache file are not supported; the
//! pipeline assumes a single instance at a time.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from cache file operations. All of these are fatal to a run:
/// without durable dedup tracking the alternative is silent reprocessing.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to read cache file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cache file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Set of previously processed URLs backed by an append-only file
pub struct UrlCache {
    path: PathBuf,
    urls: HashSet<String>,
}

impl UrlCache {
    /// Loads the cache from `path`, creating an empty backing file if absent.
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        if !path.exists() {
            File::create(path).map_err(|source| CacheError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            return Ok(Self {
                path: path.to_path_buf(),
                urls: HashSet::new(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| CacheError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let urls = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            urls,
        })
    }

    /// Returns true if `url` has already been handled in this or a prior run.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Appends `url` to the backing file and records it in memory.
    ///
    /// Durable immediately; callers are responsible for not adding the same
    /// URL twice (duplicate lines are tolerated by the format, not an error).
    pub fn add(&mut self, url: &str) -> Result<(), CacheError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| CacheError::Write {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", url).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })?;

        self.urls.insert(url.to_string());
        Ok(())
    }

    /// Number of cached URLs
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.txt");

        let cache = UrlCache::load(&path).unwrap();
        assert!(cache.is_empty());
        assert!(path.exists(), "backing file should be created on load");
    }

    #[test]
    fn test_add_persists_across_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.txt");

        let mut cache = UrlCache::load(&path).unwrap();
        cache.add("https://example.com/blog/one").unwrap();
        cache.add("https://example.com/blog/two").unwrap();
        assert!(cache.contains("https://example.com/blog/one"));

        let reloaded = UrlCache::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("https://example.com/blog/one"));
        assert!(reloaded.contains("https://example.com/blog/two"));
        assert!(!reloaded.contains("https://example.com/blog/three"));
    }

    #[test]
    fn test_file_format_one_url_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.txt");

        let mut cache = UrlCache::load(&path).unwrap();
        cache.add("https://example.com/a").unwrap();
        cache.add("https://example.com/b").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://example.com/a\nhttps://example.com/b\n");
    }

    #[test]
    fn test_duplicate_lines_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.txt");
        std::fs::write(&path, "https://example.com/a\nhttps://example.com/a\n").unwrap();

        let cache = UrlCache::load(&path).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("https://example.com/a"));
    }

    #[test]
    fn test_add_appends_to_existing_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.txt");
        std::fs::write(&path, "https://example.com/old\n").unwrap();

        let mut cache = UrlCache::load(&path).unwrap();
        cache.add("https://example.com/new").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://example.com/old\nhttps://example.com/new\n");
    }
}
