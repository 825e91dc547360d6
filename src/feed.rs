// src/feed.rs
//! Feed retrieval: remote platform feeds and operator-supplied files

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::platforms::Platform;

/// A source of parsed feed data. Every feed is a JSON array of program
/// objects; anything else is rejected up front.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable description for logging.
    fn describe(&self) -> String;

    /// Fetch and parse the feed.
    async fn load(&self) -> Result<Vec<Value>>;
}

/// Remote feed fetched over HTTPS from a platform's public data mirror.
pub struct RemoteFeed {
    platform: Platform,
    url: String,
    client: reqwest::Client,
}

impl RemoteFeed {
    /// Create a remote feed source. `url_override` replaces the default
    /// public mirror URL (config `[feeds]` section).
    pub fn new(platform: Platform, url_override: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            platform,
            url: url_override.unwrap_or_else(|| platform.feed_url().to_string()),
            client,
        })
    }
}

#[async_trait]
impl FeedSource for RemoteFeed {
    fn describe(&self) -> String {
        format!("{} feed ({})", self.platform, self.url)
    }

    async fn load(&self) -> Result<Vec<Value>> {
        debug!("Fetching {} feed from {}", self.platform, self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} feed", self.platform))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "{} feed returned error status: {}",
                self.platform,
                response.status()
            );
        }

        let programs: Vec<Value> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} feed as a program list", self.platform))?;

        info!("Fetched {} programs from {}", programs.len(), self.platform);
        Ok(programs)
    }
}

/// Operator-supplied local JSON file. A missing file is fatal, per the
/// error taxonomy: there is nothing sensible to degrade to.
pub struct LocalFeed {
    path: PathBuf,
}

impl LocalFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedSource for LocalFeed {
    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<Value>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("File not found or unreadable: {}", self.path.display()))?;

        let programs: Vec<Value> = serde_json::from_str(&contents)
            .with_context(|| format!("{} is not a JSON program list", self.path.display()))?;

        info!("Loaded {} programs from {}", programs.len(), self.path.display());
        Ok(programs)
    }
}
