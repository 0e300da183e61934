use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::activity;
use crate::badges;
use crate::error::{GatherError, Result};
use crate::loader::{ImageProbe, PageFetch, PageLoader};
use crate::model::{CharacterRecord, CharacterStatus};
use crate::parser::extract;

/// Builds one [`CharacterRecord`] per call from an injected page loader and image
/// probe. Holds no per-character state, so one builder can serve concurrent calls
/// as long as its collaborators can.
pub struct RecordBuilder<L, P> {
    loader: L,
    probe: P,
}

impl<L: PageLoader, P: ImageProbe> RecordBuilder<L, P> {
    pub fn new(loader: L, probe: P) -> Self {
        Self { loader, probe }
    }

    pub async fn build(&self, id: u64) -> Result<CharacterRecord> {
        self.build_at(id, Utc::now()).await
    }

    /// Build against a fixed reference time. A deleted character short-circuits to a
    /// record carrying only its ID and status; any other failure is returned whole
    /// rather than as a partially filled record.
    pub async fn build_at(&self, id: u64, now: DateTime<Utc>) -> Result<CharacterRecord> {
        let profile = match self.loader.character_page(id).await? {
            PageFetch::Found(page) => {
                extract::extract_all(&page).map_err(|source| GatherError::Extract { id, source })?
            }
            PageFetch::Deleted => {
                info!("Character {} has been deleted", id);
                return Ok(CharacterRecord::deleted(id));
            }
        };

        let image_last_modified =
            activity::resolve_last_modified(&self.probe, &profile.image_url, id).await?;
        let is_active = activity::is_active(image_last_modified, now);
        let badges = badges::derive(&profile.minions, &profile.mounts);
        debug!(
            "Character {}: {} minions, {} mounts, active={}",
            id,
            profile.minions.len(),
            profile.mounts.len(),
            is_active
        );

        Ok(CharacterRecord {
            id,
            name: profile.name,
            realm: profile.realm,
            race: profile.race,
            gender: profile.gender,
            grand_company: profile.grand_company,
            free_company: profile.free_company,
            job_levels: profile.job_levels,
            minions: profile.minions,
            mounts: profile.mounts,
            badges,
            image_last_modified: Some(image_last_modified),
            is_active,
            status: CharacterStatus::from_activity(is_active),
        })
    }
}

// ── Tests ──
