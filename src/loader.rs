//! Collaborators the record builder depends on: something that produces profile pages
//! and something that probes portrait images. Implementations must be safe to share
//! between concurrent builds; none of them keep per-character state.
#![allow(async_fn_in_trait)]

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::LAST_MODIFIED;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::{GatherError, Result};
use crate::parser::ProfilePage;
use crate::settings::Settings;

/// Outcome of asking for a character page.
pub enum PageFetch {
    Found(ProfilePage),
    /// The Lodestone no longer serves this character.
    Deleted,
}

pub trait PageLoader {
    async fn character_page(&self, id: u64) -> Result<PageFetch>;
}

pub trait ImageProbe {
    /// Raw `Last-Modified` header of `url`, fetched without the body.
    async fn last_modified(&self, url: &str) -> Result<String>;
}

fn http_client(settings: &Settings) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()?)
}

// ── Live Lodestone ──

pub struct LodestoneLoader {
    client: Client,
    base_url: String,
    max_retries: u32,
    base_backoff_ms: u64,
}

impl LodestoneLoader {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: http_client(settings)?,
            base_url: settings.lodestone_url.trim_end_matches('/').to_string(),
            max_retries: settings.max_retries,
            base_backoff_ms: settings.base_backoff_ms,
        })
    }

    pub fn character_url(&self, id: u64) -> String {
        format!("{}/lodestone/character/{}/", self.base_url, id)
    }
}

fn should_retry(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// `base * 2^attempt`, saturating instead of overflowing for large retry counts.
fn backoff(base_ms: u64, attempt: u32) -> Duration {
    let factor = 2u64.checked_pow(attempt).unwrap_or(u64::MAX);
    Duration::from_millis(base_ms.saturating_mul(factor))
}

impl PageLoader for LodestoneLoader {
    async fn character_page(&self, id: u64) -> Result<PageFetch> {
        let url = self.character_url(id);

        let mut attempt = 0;
        loop {
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            debug!("GET {} -> {}", url, status);

            if status == StatusCode::NOT_FOUND {
                return Ok(PageFetch::Deleted);
            }
            if status.is_success() {
                let body = response.text().await?;
                return Ok(PageFetch::Found(ProfilePage::parse(&body)));
            }
            if !should_retry(status) || attempt >= self.max_retries {
                return Err(GatherError::Status { id, status: status.as_u16() });
            }

            let delay = backoff(self.base_backoff_ms, attempt);
            warn!(
                "HTTP {} for character {} (attempt {}/{}), backing off {:.1}s",
                status.as_u16(),
                id,
                attempt + 1,
                self.max_retries,
                delay.as_secs_f64()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

// ── Saved pages on disk ──

/// Reads `Character-<id>.html` files saved from the Lodestone.
pub struct FixtureLoader {
    dir: PathBuf,
}

impl FixtureLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: u64) -> PathBuf {
        self.dir.join(format!("Character-{}.html", id))
    }
}

impl PageLoader for FixtureLoader {
    async fn character_page(&self, id: u64) -> Result<PageFetch> {
        let html = tokio::fs::read_to_string(self.path_for(id)).await?;
        Ok(PageFetch::Found(ProfilePage::parse(&html)))
    }
}

// ── Portrait probes ──

pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: http_client(settings)?,
        })
    }
}

impl ImageProbe for HttpImageProbe {
    async fn last_modified(&self, url: &str) -> Result<String> {
        let response = self.client.head(url).send().await?.error_for_status()?;
        let header = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| GatherError::MissingHeader(url.to_string()))?;
        Ok(header.to_string())
    }
}

/// Never reaches the network; every character gets the fallback portrait date.
pub struct OfflineProbe;

impl ImageProbe for OfflineProbe {
    async fn last_modified(&self, url: &str) -> Result<String> {
        Err(GatherError::MissingHeader(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_url_has_no_double_slash() {
        let settings = Settings {
            lodestone_url: "https://eu.finalfantasyxiv.com/".into(),
            ..Settings::default()
        };
        let loader = LodestoneLoader::new(&settings).unwrap();
        assert_eq!(
            loader.character_url(2256025),
            "https://eu.finalfantasyxiv.com/lodestone/character/2256025/"
        );
    }

    #[test]
    fn retries_only_rate_limits_and_server_errors() {
        assert!(should_retry(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry(StatusCode::BAD_GATEWAY));
        assert!(!should_retry(StatusCode::FORBIDDEN));
        assert!(!should_retry(StatusCode::NOT_FOUND));
    }

    #[test]
    fn backoff_doubles_and_saturates() {
        assert_eq!(backoff(2000, 0), Duration::from_millis(2000));
        assert_eq!(backoff(2000, 3), Duration::from_millis(16_000));
        assert_eq!(backoff(2000, 60), Duration::from_millis(u64::MAX));
        assert_eq!(backoff(2000, 200), Duration::from_millis(u64::MAX));
    }

    #[tokio::test]
    async fn fixture_loader_reads_saved_pages() {
        let loader = FixtureLoader::new("tests/fixtures");
        assert!(matches!(loader.character_page(2256025).await, Ok(PageFetch::Found(_))));
        assert!(matches!(loader.character_page(404).await, Err(GatherError::Io(_))));
    }

    #[tokio::test]
    async fn offline_probe_always_fails() {
        assert!(OfflineProbe.last_modified("https://example.com/a.jpg").await.is_err());
    }
}
