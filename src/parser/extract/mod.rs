pub mod collections;
pub mod companies;
pub mod identity;
pub mod levels;
pub mod portrait;

use std::collections::BTreeSet;

use crate::error::ParseError;
use crate::model::{Gender, JobLevels};
use crate::parser::ProfilePage;

/// Everything read off one profile page, before badge and activity derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProfile {
    pub name: String,
    pub realm: String,
    pub race: String,
    pub gender: Option<Gender>,
    pub grand_company: String,
    pub free_company: String,
    pub job_levels: JobLevels,
    pub minions: BTreeSet<String>,
    pub mounts: BTreeSet<String>,
    pub image_url: String,
}

pub fn extract_all(page: &ProfilePage) -> Result<ExtractedProfile, ParseError> {
    let affiliations = companies::extract(page)?;

    Ok(ExtractedProfile {
        name: identity::name(page)?,
        realm: identity::realm(page)?,
        race: identity::race(page)?,
        gender: identity::gender(page)?,
        grand_company: affiliations.grand_company,
        free_company: affiliations.free_company,
        job_levels: levels::extract(page)?,
        minions: collections::minions(page),
        mounts: collections::mounts(page),
        image_url: portrait::image_url(page)?,
    })
}

// ── Tests ──
